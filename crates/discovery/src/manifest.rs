use std::sync::Arc;

use typepool_registry::{
	BaseCapability, ConstructError, DiscoveryProvider, Instance, Namespace, TypeDescriptor, erase,
};

use crate::candidate::depth_first;

type Factory = Box<dyn Fn() -> Result<Instance, ConstructError> + Send + Sync>;

struct ManifestEntry {
	namespace: Namespace,
	name: Arc<str>,
	eligible: bool,
	capability: BaseCapability,
	factory: Factory,
}

/// Provider over candidates listed in code.
///
/// ```ignore
/// let provider = ManifestProvider::new()
///     .indexed::<dyn Action>("app.actions", "Jump", || -> Arc<dyn Action> { Arc::new(Jump) })
///     .unindexed::<dyn Action>("app.actions", "Draft", || -> Arc<dyn Action> { Arc::new(Draft) });
/// ```
#[derive(Default)]
pub struct ManifestProvider {
	entries: Vec<ManifestEntry>,
}

impl ManifestProvider {
	pub fn new() -> Self {
		Self::default()
	}

	/// Lists a discoverable candidate of capability `T`.
	pub fn indexed<T>(
		self,
		namespace: impl Into<Namespace>,
		name: &str,
		construct: impl Fn() -> Arc<T> + Send + Sync + 'static,
	) -> Self
	where
		T: ?Sized + Send + Sync + 'static,
	{
		self.push::<T>(namespace.into(), name, true, Box::new(move || Ok(erase(construct()))))
	}

	/// Lists a discoverable candidate whose constructor can fail.
	pub fn indexed_fallible<T, E>(
		self,
		namespace: impl Into<Namespace>,
		name: &str,
		construct: impl Fn() -> Result<Arc<T>, E> + Send + Sync + 'static,
	) -> Self
	where
		T: ?Sized + Send + Sync + 'static,
		E: Into<Box<dyn std::error::Error + Send + Sync>>,
	{
		self.push::<T>(
			namespace.into(),
			name,
			true,
			Box::new(move || construct().map(erase).map_err(ConstructError::failed)),
		)
	}

	/// Lists a candidate that exists in the namespace but is not opted into
	/// discovery. It is never constructed.
	pub fn unindexed<T>(
		self,
		namespace: impl Into<Namespace>,
		name: &str,
		construct: impl Fn() -> Arc<T> + Send + Sync + 'static,
	) -> Self
	where
		T: ?Sized + Send + Sync + 'static,
	{
		self.push::<T>(namespace.into(), name, false, Box::new(move || Ok(erase(construct()))))
	}

	fn push<T: ?Sized + 'static>(
		mut self,
		namespace: Namespace,
		name: &str,
		eligible: bool,
		factory: Factory,
	) -> Self {
		self.entries.push(ManifestEntry {
			namespace,
			name: Arc::from(name),
			eligible,
			capability: BaseCapability::of::<T>(),
			factory,
		});
		self
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	fn entry(&self, descriptor: &TypeDescriptor) -> Option<&ManifestEntry> {
		self.entries.get(descriptor.slot())
	}
}

impl DiscoveryProvider for ManifestProvider {
	fn enumerate(&self, namespace: &Namespace) -> Vec<TypeDescriptor> {
		depth_first(
			namespace,
			self.entries
				.iter()
				.enumerate()
				.map(|(slot, e)| (slot, &e.namespace, &*e.name)),
		)
	}

	fn is_eligible(&self, descriptor: &TypeDescriptor) -> bool {
		self.entry(descriptor).is_some_and(|e| e.eligible)
	}

	fn is_subtype_of(&self, descriptor: &TypeDescriptor, capability: &BaseCapability) -> bool {
		self.entry(descriptor)
			.is_some_and(|e| e.capability == *capability)
	}

	fn construct(&self, descriptor: &TypeDescriptor) -> Result<Instance, ConstructError> {
		let entry = self
			.entry(descriptor)
			.ok_or_else(|| ConstructError::Missing(descriptor.fully_qualified_name()))?;
		(entry.factory)()
	}
}
