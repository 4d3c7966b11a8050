use std::panic;

use tracing::debug;
use typepool_registry::{
	BaseCapability, ConstructError, DiscoveryProvider, Instance, Namespace, TypeDescriptor,
};

use crate::candidate::{Candidate, depth_first, panic_message};

/// Provider over the [`Candidate`]s linked into the binary.
///
/// Submission is the opt-in, so every candidate is eligible. Panicking
/// constructors are reported as [`ConstructError::Panicked`].
pub struct StaticProvider {
	candidates: Vec<(Namespace, &'static Candidate)>,
}

impl StaticProvider {
	/// Snapshot of every candidate submitted via `#[indexed]`.
	pub fn collect() -> Self {
		let provider = Self::from_candidates(inventory::iter::<Candidate>);
		debug!(candidates = provider.len(), "collected link-time candidates");
		provider
	}

	/// Provider over an explicit candidate list.
	pub fn from_candidates(candidates: impl IntoIterator<Item = &'static Candidate>) -> Self {
		Self {
			candidates: candidates
				.into_iter()
				.map(|c| (Namespace::new(c.namespace), c))
				.collect(),
		}
	}

	pub fn len(&self) -> usize {
		self.candidates.len()
	}

	pub fn is_empty(&self) -> bool {
		self.candidates.is_empty()
	}

	fn candidate(&self, descriptor: &TypeDescriptor) -> Option<&'static Candidate> {
		self.candidates
			.get(descriptor.slot())
			.map(|(_, candidate)| *candidate)
	}
}

impl DiscoveryProvider for StaticProvider {
	fn enumerate(&self, namespace: &Namespace) -> Vec<TypeDescriptor> {
		depth_first(
			namespace,
			self.candidates
				.iter()
				.enumerate()
				.map(|(slot, (declared, c))| (slot, declared, c.name)),
		)
	}

	fn is_eligible(&self, descriptor: &TypeDescriptor) -> bool {
		self.candidate(descriptor).is_some()
	}

	fn is_subtype_of(&self, descriptor: &TypeDescriptor, capability: &BaseCapability) -> bool {
		self.candidate(descriptor)
			.is_some_and(|c| (c.capability)() == *capability)
	}

	fn construct(&self, descriptor: &TypeDescriptor) -> Result<Instance, ConstructError> {
		let candidate = self
			.candidate(descriptor)
			.ok_or_else(|| ConstructError::Missing(descriptor.fully_qualified_name()))?;

		match panic::catch_unwind(candidate.construct) {
			Ok(result) => result,
			Err(payload) => Err(ConstructError::Panicked(panic_message(payload.as_ref()))),
		}
	}
}
