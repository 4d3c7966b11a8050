use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

use super::namespace::Namespace;

/// A type-erased constructed instance.
///
/// Providers box an `Arc<T>` for the capability `T`; the builder downcasts it
/// back. See [`erase`].
pub type Instance = Box<dyn Any + Send + Sync>;

/// Erases a shared instance of capability `T` for transport through a provider.
pub fn erase<T>(instance: Arc<T>) -> Instance
where
	T: ?Sized + Send + Sync + 'static,
{
	Box::new(instance)
}

/// Identity of the capability every instance in a registry satisfies.
#[derive(Clone, Copy)]
pub struct BaseCapability {
	id: TypeId,
	name: &'static str,
}

impl BaseCapability {
	/// Capability for `T`, usually a trait object type such as `dyn Action`.
	pub fn of<T: ?Sized + 'static>() -> Self {
		Self {
			id: TypeId::of::<T>(),
			name: std::any::type_name::<T>(),
		}
	}

	pub fn type_id(&self) -> TypeId {
		self.id
	}

	pub fn name(&self) -> &'static str {
		self.name
	}

	pub fn is<T: ?Sized + 'static>(&self) -> bool {
		self.id == TypeId::of::<T>()
	}
}

impl PartialEq for BaseCapability {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for BaseCapability {}

impl std::hash::Hash for BaseCapability {
	fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
		self.id.hash(state);
	}
}

impl fmt::Debug for BaseCapability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("BaseCapability").field(&self.name).finish()
	}
}

impl fmt::Display for BaseCapability {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name)
	}
}

/// Opaque handle for a candidate type, produced by a
/// [`DiscoveryProvider`](super::provider::DiscoveryProvider) and only
/// meaningful to the provider that produced it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TypeDescriptor {
	namespace: Namespace,
	name: Arc<str>,
	slot: usize,
}

impl TypeDescriptor {
	/// Creates a descriptor. `slot` is private to the issuing provider.
	pub fn new(namespace: Namespace, name: impl Into<Arc<str>>, slot: usize) -> Self {
		Self {
			namespace,
			name: name.into(),
			slot,
		}
	}

	/// The namespace the type was declared in (not the namespace that was scanned).
	pub fn namespace(&self) -> &Namespace {
		&self.namespace
	}

	/// The simple type name.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn fully_qualified_name(&self) -> String {
		self.namespace.qualify(&self.name)
	}

	pub fn slot(&self) -> usize {
		self.slot
	}

	/// Deterministic depth-first ordering of descriptors.
	pub fn depth_first_cmp(&self, other: &TypeDescriptor) -> std::cmp::Ordering {
		self.namespace
			.depth_first_cmp(&other.namespace)
			.then_with(|| self.name.cmp(&other.name))
	}
}

impl fmt::Debug for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TypeDescriptor({})", self.fully_qualified_name())
	}
}

impl fmt::Display for TypeDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.fully_qualified_name())
	}
}
