use std::sync::Arc;

use super::descriptor::{BaseCapability, Instance, TypeDescriptor};
use super::error::ConstructError;
use super::namespace::Namespace;

/// Enumerates, filters and constructs candidate types for a registry build.
///
/// A provider only ever receives descriptors it produced itself through
/// [`enumerate`](Self::enumerate).
pub trait DiscoveryProvider {
	/// Every descriptor declared in `namespace` or any of its descendants.
	///
	/// Must terminate and return the same order on every call.
	fn enumerate(&self, namespace: &Namespace) -> Vec<TypeDescriptor>;

	/// Whether the type opted into discovery.
	fn is_eligible(&self, descriptor: &TypeDescriptor) -> bool;

	/// Whether instances of the type satisfy `capability`.
	fn is_subtype_of(&self, descriptor: &TypeDescriptor, capability: &BaseCapability) -> bool;

	/// Runs the type's zero-argument constructor.
	fn construct(&self, descriptor: &TypeDescriptor) -> Result<Instance, ConstructError>;
}

macro_rules! forward_provider {
	($($ptr:ty),*) => {
		$(
			impl<P: DiscoveryProvider + ?Sized> DiscoveryProvider for $ptr {
				fn enumerate(&self, namespace: &Namespace) -> Vec<TypeDescriptor> {
					(**self).enumerate(namespace)
				}

				fn is_eligible(&self, descriptor: &TypeDescriptor) -> bool {
					(**self).is_eligible(descriptor)
				}

				fn is_subtype_of(&self, descriptor: &TypeDescriptor, capability: &BaseCapability) -> bool {
					(**self).is_subtype_of(descriptor, capability)
				}

				fn construct(&self, descriptor: &TypeDescriptor) -> Result<Instance, ConstructError> {
					(**self).construct(descriptor)
				}
			}
		)*
	};
}

forward_provider!(&P, Box<P>, Arc<P>);
