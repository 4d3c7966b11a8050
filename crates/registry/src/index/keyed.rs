use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;
use std::ops::Deref;
use std::sync::Arc;

use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

use crate::core::{BaseCapability, LookupError, Namespace};

/// Bounds every registry key satisfies.
///
/// Errors carry the key's `Display` form, so a `String` key is reported as
/// the key itself.
pub trait RegistryKey:
	Eq + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

impl<K> RegistryKey for K where
	K: Eq + Hash + Clone + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

/// Insertion-ordered key set.
pub type KeySet<I> = IndexSet<I, FxBuildHasher>;

/// Read-only view of the keys stored in a registry.
///
/// Borrowed for a single keyed registry, owned when computed (grouped
/// registries). Equality is set equality.
pub struct StoredKeys<'a, I: RegistryKey>(Cow<'a, KeySet<I>>);

impl<'a, I: RegistryKey> StoredKeys<'a, I> {
	pub(crate) fn borrowed(keys: &'a KeySet<I>) -> Self {
		Self(Cow::Borrowed(keys))
	}

	pub(crate) fn owned(keys: KeySet<I>) -> Self {
		Self(Cow::Owned(keys))
	}

	/// Detaches the view from the registry.
	pub fn into_owned(self) -> KeySet<I> {
		self.0.into_owned()
	}
}

impl<I: RegistryKey> Deref for StoredKeys<'_, I> {
	type Target = KeySet<I>;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl<'a, 'b, I: RegistryKey> PartialEq<StoredKeys<'b, I>> for StoredKeys<'a, I> {
	fn eq(&self, other: &StoredKeys<'b, I>) -> bool {
		*self.0 == *other.0
	}
}

impl<I: RegistryKey> Eq for StoredKeys<'_, I> {}

impl<I: RegistryKey> fmt::Debug for StoredKeys<'_, I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_set().entries(self.0.iter()).finish()
	}
}

impl<'s, I: RegistryKey> IntoIterator for &'s StoredKeys<'_, I> {
	type Item = &'s I;
	type IntoIter = indexmap::set::Iter<'s, I>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

/// Read contract shared by keyed and grouped registries.
pub trait Registry<T: ?Sized, I: RegistryKey>: Send + Sync {
	/// Capability every stored instance satisfies.
	fn capability(&self) -> BaseCapability;

	/// Looks up `key` without producing an error.
	fn find(&self, key: &I) -> Option<&Arc<T>>;

	/// Keys present at call time.
	fn stored_keys(&self) -> StoredKeys<'_, I>;

	/// Looks up `key`. An absent key is always an error, never a sentinel.
	fn get(&self, key: &I) -> Result<&Arc<T>, LookupError> {
		self.find(key).ok_or_else(|| LookupError {
			key: key.to_string(),
			capability: self.capability().name(),
		})
	}

	fn contains_key(&self, key: &I) -> bool {
		self.find(key).is_some()
	}
}

/// Immutable table mapping each key to the single instance built for it.
pub struct KeyedRegistry<T: ?Sized, I: RegistryKey> {
	capability: BaseCapability,
	namespace: Namespace,
	keys: KeySet<I>,
	instances: Vec<Arc<T>>,
}

impl<T, I> KeyedRegistry<T, I>
where
	T: ?Sized + 'static,
	I: RegistryKey,
{
	/// Registry with no entries, as if `namespace` declared nothing.
	pub fn empty(namespace: impl Into<Namespace>) -> Self {
		Self::from_parts(namespace.into(), KeySet::default(), Vec::new())
	}

	pub(crate) fn from_parts(namespace: Namespace, keys: KeySet<I>, instances: Vec<Arc<T>>) -> Self {
		debug_assert_eq!(keys.len(), instances.len());
		Self {
			capability: BaseCapability::of::<T>(),
			namespace,
			keys,
			instances,
		}
	}
}

impl<T: ?Sized, I: RegistryKey> KeyedRegistry<T, I> {
	pub fn capability(&self) -> BaseCapability {
		self.capability
	}

	/// The namespace that was scanned to build this registry.
	pub fn namespace(&self) -> &Namespace {
		&self.namespace
	}

	#[inline]
	pub fn find(&self, key: &I) -> Option<&Arc<T>> {
		let idx = self.keys.get_index_of(key)?;
		Some(&self.instances[idx])
	}

	/// Looks up `key`, failing with [`LookupError`] if it was never registered.
	pub fn get(&self, key: &I) -> Result<&Arc<T>, LookupError> {
		self.find(key).ok_or_else(|| LookupError {
			key: key.to_string(),
			capability: self.capability.name(),
		})
	}

	#[inline]
	pub fn contains_key(&self, key: &I) -> bool {
		self.keys.contains(key)
	}

	pub fn stored_keys(&self) -> StoredKeys<'_, I> {
		StoredKeys::borrowed(&self.keys)
	}

	/// Key/instance pairs in build order.
	pub fn iter(&self) -> impl Iterator<Item = (&I, &Arc<T>)> + '_ {
		self.keys.iter().zip(self.instances.iter())
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.instances.len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.instances.is_empty()
	}
}

impl<T, I> Registry<T, I> for KeyedRegistry<T, I>
where
	T: ?Sized + Send + Sync,
	I: RegistryKey,
{
	fn capability(&self) -> BaseCapability {
		self.capability
	}

	fn find(&self, key: &I) -> Option<&Arc<T>> {
		KeyedRegistry::find(self, key)
	}

	fn stored_keys(&self) -> StoredKeys<'_, I> {
		KeyedRegistry::stored_keys(self)
	}

	fn get(&self, key: &I) -> Result<&Arc<T>, LookupError> {
		KeyedRegistry::get(self, key)
	}

	fn contains_key(&self, key: &I) -> bool {
		KeyedRegistry::contains_key(self, key)
	}
}

impl<T: ?Sized, I: RegistryKey> fmt::Debug for KeyedRegistry<T, I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("KeyedRegistry")
			.field("capability", &self.capability)
			.field("namespace", &self.namespace)
			.field("keys", &self.keys)
			.finish()
	}
}
