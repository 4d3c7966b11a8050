use std::marker::PhantomData;
use std::sync::Arc;

use rustc_hash::FxBuildHasher;
use tracing::{debug, trace};

use super::keyed::{KeySet, KeyedRegistry, RegistryKey};
use super::policy::KeyPolicy;
use crate::core::{BaseCapability, BuildError, DiscoveryProvider, Namespace, TypeDescriptor};

/// Builder for a [`KeyedRegistry`] over the capability `T`.
pub struct RegistryBuilder<T: ?Sized> {
	namespace: Namespace,
	label: &'static str,
	_capability: PhantomData<fn() -> Arc<T>>,
}

impl<T: ?Sized + Send + Sync + 'static> RegistryBuilder<T> {
	/// Creates a builder that will scan `namespace`.
	pub fn new(namespace: impl Into<Namespace>) -> Self {
		Self {
			namespace: namespace.into(),
			label: "registry",
			_capability: PhantomData,
		}
	}

	/// Sets the label used in log output.
	pub fn label(mut self, label: &'static str) -> Self {
		self.label = label;
		self
	}

	pub fn namespace(&self) -> &Namespace {
		&self.namespace
	}

	/// Scans the namespace and builds the registry.
	///
	/// Every eligible candidate satisfying `T` is constructed exactly once.
	/// Any construction failure, key derivation failure, or duplicate key
	/// aborts the whole build.
	pub fn build<P, K, I>(self, provider: &P, policy: &K) -> Result<KeyedRegistry<T, I>, BuildError>
	where
		P: DiscoveryProvider + ?Sized,
		K: KeyPolicy<T, I> + ?Sized,
		I: RegistryKey,
	{
		let capability = BaseCapability::of::<T>();
		let namespace = self.namespace;
		let _span = tracing::debug_span!(
			"registry_build",
			registry = self.label,
			namespace = %namespace,
			capability = capability.name(),
		)
		.entered();

		let descriptors = provider.enumerate(&namespace);
		let mut keys: KeySet<I> = KeySet::with_capacity_and_hasher(descriptors.len(), FxBuildHasher);
		let mut instances: Vec<Arc<T>> = Vec::with_capacity(descriptors.len());
		let mut origins: Vec<&TypeDescriptor> = Vec::with_capacity(descriptors.len());

		for descriptor in &descriptors {
			if !provider.is_eligible(descriptor) {
				trace!(candidate = %descriptor, "skipping candidate not opted into discovery");
				continue;
			}
			if !provider.is_subtype_of(descriptor, &capability) {
				trace!(candidate = %descriptor, "skipping candidate of another capability");
				continue;
			}

			let instance = construct::<T, P>(provider, descriptor, &capability, &namespace)?;

			let key = policy
				.derive_key(&*instance, descriptor, &namespace)
				.map_err(|source| BuildError::Key {
					capability: capability.name(),
					namespace: namespace.clone(),
					type_name: descriptor.fully_qualified_name(),
					source,
				})?;

			let (idx, inserted) = keys.insert_full(key);
			if !inserted {
				return Err(BuildError::DuplicateKey {
					capability: capability.name(),
					namespace: namespace.clone(),
					key: keys[idx].to_string(),
					existing: origins[idx].fully_qualified_name(),
					incoming: descriptor.fully_qualified_name(),
				});
			}

			trace!(key = ?keys[idx], candidate = %descriptor, "indexed");
			instances.push(instance);
			origins.push(descriptor);
		}

		debug!(entries = instances.len(), candidates = descriptors.len(), "registry built");
		Ok(KeyedRegistry::from_parts(namespace, keys, instances))
	}
}

fn construct<T, P>(
	provider: &P,
	descriptor: &TypeDescriptor,
	capability: &BaseCapability,
	namespace: &Namespace,
) -> Result<Arc<T>, BuildError>
where
	T: ?Sized + Send + Sync + 'static,
	P: DiscoveryProvider + ?Sized,
{
	let erased = provider
		.construct(descriptor)
		.map_err(|source| BuildError::Construct {
			capability: capability.name(),
			namespace: namespace.clone(),
			type_name: descriptor.fully_qualified_name(),
			source,
		})?;

	match erased.downcast::<Arc<T>>() {
		Ok(instance) => Ok(*instance),
		Err(_) => Err(BuildError::InstanceMismatch {
			capability: capability.name(),
			namespace: namespace.clone(),
			type_name: descriptor.fully_qualified_name(),
		}),
	}
}

/// Scans `namespace` with `provider` and keys each instance with `policy`.
pub fn build<T, I, P, K>(
	namespace: impl Into<Namespace>,
	provider: &P,
	policy: &K,
) -> Result<KeyedRegistry<T, I>, BuildError>
where
	T: ?Sized + Send + Sync + 'static,
	I: RegistryKey,
	P: DiscoveryProvider + ?Sized,
	K: KeyPolicy<T, I> + ?Sized,
{
	RegistryBuilder::new(namespace).build(provider, policy)
}
