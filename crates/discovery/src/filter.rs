use tracing::trace;
use typepool_registry::{
	BaseCapability, ConstructError, DiscoveryProvider, Instance, Namespace, TypeDescriptor,
};

use crate::config::DiscoveryConfig;

/// Wraps a provider and narrows what it reports using a [`DiscoveryConfig`].
///
/// Non-recursive configs drop candidates from nested namespaces at
/// enumeration. Allow and deny lists act on eligibility, so denied
/// candidates are never constructed.
#[derive(Debug)]
pub struct FilteredProvider<P> {
	inner: P,
	config: DiscoveryConfig,
}

impl<P> FilteredProvider<P> {
	pub fn new(inner: P, config: DiscoveryConfig) -> Self {
		Self { inner, config }
	}

	pub fn config(&self) -> &DiscoveryConfig {
		&self.config
	}

	pub fn inner(&self) -> &P {
		&self.inner
	}

	pub fn into_inner(self) -> P {
		self.inner
	}
}

impl<P: DiscoveryProvider> DiscoveryProvider for FilteredProvider<P> {
	fn enumerate(&self, namespace: &Namespace) -> Vec<TypeDescriptor> {
		let mut found = self.inner.enumerate(namespace);
		if !self.config.recursive {
			found.retain(|d| d.namespace() == namespace);
		}
		found
	}

	fn is_eligible(&self, descriptor: &TypeDescriptor) -> bool {
		if !self.inner.is_eligible(descriptor) {
			return false;
		}
		let qualified = descriptor.fully_qualified_name();
		let permitted = self.config.permits(&qualified);
		if !permitted {
			trace!(candidate = %qualified, "excluded by discovery config");
		}
		permitted
	}

	fn is_subtype_of(&self, descriptor: &TypeDescriptor, capability: &BaseCapability) -> bool {
		self.inner.is_subtype_of(descriptor, capability)
	}

	fn construct(&self, descriptor: &TypeDescriptor) -> Result<Instance, ConstructError> {
		self.inner.construct(descriptor)
	}
}
