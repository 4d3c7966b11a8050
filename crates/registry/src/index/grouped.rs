use std::fmt;
use std::sync::Arc;

use tracing::debug;

use super::keyed::{KeySet, Registry, RegistryKey, StoredKeys};
use crate::core::{BaseCapability, DuplicateKeyError, LookupError};

/// An ordered composition of registries presenting one read interface.
///
/// Members are probed in the order they were added. Their key sets are kept
/// pairwise disjoint: a member whose keys collide with the current membership
/// is rejected without changing the group.
pub struct GroupedRegistry<T: ?Sized, I: RegistryKey = String> {
	capability: BaseCapability,
	members: Vec<Arc<dyn Registry<T, I>>>,
}

impl<T, I> GroupedRegistry<T, I>
where
	T: ?Sized + Send + Sync + 'static,
	I: RegistryKey,
{
	pub fn new() -> Self {
		Self {
			capability: BaseCapability::of::<T>(),
			members: Vec::new(),
		}
	}

	/// Creates a group and adds `members` in order.
	pub fn with_members<R, It>(members: It) -> Result<Self, DuplicateKeyError>
	where
		R: Registry<T, I> + 'static,
		It: IntoIterator<Item = R>,
	{
		let mut group = Self::new();
		for member in members {
			group.add_member(member)?;
		}
		Ok(group)
	}

	/// Adds a member after checking its keys against every current member.
	pub fn add_member<R>(&mut self, member: R) -> Result<(), DuplicateKeyError>
	where
		R: Registry<T, I> + 'static,
	{
		self.add_shared(Arc::new(member))
	}

	/// Adds a member that is also held elsewhere.
	pub fn add_shared(&mut self, member: Arc<dyn Registry<T, I>>) -> Result<(), DuplicateKeyError> {
		if let Some(key) = self.first_collision(member.as_ref()) {
			return Err(DuplicateKeyError {
				key,
				capability: self.capability.name(),
			});
		}

		debug!(
			capability = self.capability.name(),
			member = self.members.len(),
			keys = member.stored_keys().len(),
			"grouped registry member added"
		);
		self.members.push(member);
		Ok(())
	}

	fn first_collision(&self, incoming: &dyn Registry<T, I>) -> Option<String> {
		let current = self.stored_keys();
		let incoming = incoming.stored_keys();
		incoming
			.iter()
			.find(|key| current.contains(*key))
			.map(ToString::to_string)
	}

	pub fn members(&self) -> &[Arc<dyn Registry<T, I>>] {
		&self.members
	}

	pub fn member_count(&self) -> usize {
		self.members.len()
	}

	pub fn is_empty(&self) -> bool {
		self.members.is_empty()
	}

	pub fn capability(&self) -> BaseCapability {
		self.capability
	}

	/// Union of all member keys, in member order. Recomputed on every call.
	pub fn stored_keys(&self) -> StoredKeys<'_, I> {
		let mut keys = KeySet::default();
		for member in &self.members {
			keys.extend(member.stored_keys().iter().cloned());
		}
		StoredKeys::owned(keys)
	}

	/// First member holding `key`, in insertion order.
	pub fn find(&self, key: &I) -> Option<&Arc<T>> {
		self.members.iter().find_map(|member| member.find(key))
	}

	pub fn get(&self, key: &I) -> Result<&Arc<T>, LookupError> {
		self.find(key).ok_or_else(|| LookupError {
			key: key.to_string(),
			capability: self.capability.name(),
		})
	}

	pub fn contains_key(&self, key: &I) -> bool {
		self.members.iter().any(|member| member.contains_key(key))
	}
}

impl<T, I> Default for GroupedRegistry<T, I>
where
	T: ?Sized + Send + Sync + 'static,
	I: RegistryKey,
{
	fn default() -> Self {
		Self::new()
	}
}

impl<T, I> Registry<T, I> for GroupedRegistry<T, I>
where
	T: ?Sized + Send + Sync + 'static,
	I: RegistryKey,
{
	fn capability(&self) -> BaseCapability {
		self.capability
	}

	fn find(&self, key: &I) -> Option<&Arc<T>> {
		GroupedRegistry::find(self, key)
	}

	fn stored_keys(&self) -> StoredKeys<'_, I> {
		GroupedRegistry::stored_keys(self)
	}

	fn contains_key(&self, key: &I) -> bool {
		GroupedRegistry::contains_key(self, key)
	}
}

impl<T: ?Sized, I: RegistryKey> fmt::Debug for GroupedRegistry<T, I> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("GroupedRegistry")
			.field("capability", &self.capability)
			.field("members", &self.members.len())
			.finish()
	}
}
