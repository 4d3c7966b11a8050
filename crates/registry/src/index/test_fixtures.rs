#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::core::{
	BaseCapability, ConstructError, DiscoveryProvider, Instance, Namespace, TypeDescriptor, erase,
};

pub(crate) trait Action: Send + Sync {
	fn name(&self) -> &'static str;
}

pub(crate) trait Motion: Send + Sync {
	fn distance(&self) -> i32;
}

macro_rules! test_actions {
	($($ty:ident),*) => {
		$(
			#[derive(Default)]
			pub(crate) struct $ty;

			impl Action for $ty {
				fn name(&self) -> &'static str {
					stringify!($ty)
				}
			}
		)*
	};
}

test_actions!(Jump, Run, Dash, Echo);

#[derive(Default)]
pub(crate) struct Step;

impl Motion for Step {
	fn distance(&self) -> i32 {
		1
	}
}

type Factory = Box<dyn Fn() -> Result<Instance, ConstructError> + Send + Sync>;

struct FakeCandidate {
	namespace: Namespace,
	name: &'static str,
	eligible: bool,
	capability: BaseCapability,
	factory: Factory,
	constructed: Arc<AtomicUsize>,
}

/// In-memory provider recording how often each candidate was constructed.
#[derive(Default)]
pub(crate) struct FakeProvider {
	candidates: Vec<FakeCandidate>,
}

impl FakeProvider {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	fn push(
		mut self,
		namespace: &str,
		name: &'static str,
		eligible: bool,
		capability: BaseCapability,
		factory: Factory,
	) -> Self {
		self.candidates.push(FakeCandidate {
			namespace: Namespace::new(namespace),
			name,
			eligible,
			capability,
			factory,
			constructed: Arc::new(AtomicUsize::new(0)),
		});
		self
	}

	/// An opted-in action that constructs `A::default()`.
	pub(crate) fn action<A: Action + Default + 'static>(self, namespace: &str, name: &'static str) -> Self {
		self.push(
			namespace,
			name,
			true,
			BaseCapability::of::<dyn Action>(),
			Box::new(|| Ok(erase::<dyn Action>(Arc::new(A::default())))),
		)
	}

	/// An action present in the namespace but not opted into discovery.
	pub(crate) fn hidden_action<A: Action + Default + 'static>(
		self,
		namespace: &str,
		name: &'static str,
	) -> Self {
		self.push(
			namespace,
			name,
			false,
			BaseCapability::of::<dyn Action>(),
			Box::new(|| Ok(erase::<dyn Action>(Arc::new(A::default())))),
		)
	}

	pub(crate) fn motion<M: Motion + Default + 'static>(self, namespace: &str, name: &'static str) -> Self {
		self.push(
			namespace,
			name,
			true,
			BaseCapability::of::<dyn Motion>(),
			Box::new(|| Ok(erase::<dyn Motion>(Arc::new(M::default())))),
		)
	}

	/// An opted-in action whose constructor fails.
	pub(crate) fn broken_action(self, namespace: &str, name: &'static str) -> Self {
		self.push(
			namespace,
			name,
			true,
			BaseCapability::of::<dyn Action>(),
			Box::new(move || Err(ConstructError::failed(format!("{name} refused to start")))),
		)
	}

	/// Claims `dyn Action` but produces a motion.
	pub(crate) fn lying_action(self, namespace: &str, name: &'static str) -> Self {
		self.push(
			namespace,
			name,
			true,
			BaseCapability::of::<dyn Action>(),
			Box::new(|| Ok(erase::<dyn Motion>(Arc::new(Step)))),
		)
	}

	/// How many times the candidate `namespace.name` was constructed.
	pub(crate) fn constructed(&self, qualified: &str) -> usize {
		self.candidates
			.iter()
			.find(|c| c.namespace.qualify(c.name) == qualified)
			.map(|c| c.constructed.load(Ordering::SeqCst))
			.unwrap_or_else(|| panic!("unknown candidate {qualified}"))
	}

	pub(crate) fn total_constructed(&self) -> usize {
		self.candidates
			.iter()
			.map(|c| c.constructed.load(Ordering::SeqCst))
			.sum()
	}
}

impl DiscoveryProvider for FakeProvider {
	fn enumerate(&self, namespace: &Namespace) -> Vec<TypeDescriptor> {
		let mut found: Vec<_> = self
			.candidates
			.iter()
			.enumerate()
			.filter(|(_, c)| namespace.contains(&c.namespace))
			.map(|(slot, c)| TypeDescriptor::new(c.namespace.clone(), c.name, slot))
			.collect();
		found.sort_by(|a, b| a.depth_first_cmp(b));
		found
	}

	fn is_eligible(&self, descriptor: &TypeDescriptor) -> bool {
		self.candidates[descriptor.slot()].eligible
	}

	fn is_subtype_of(&self, descriptor: &TypeDescriptor, capability: &BaseCapability) -> bool {
		self.candidates[descriptor.slot()].capability == *capability
	}

	fn construct(&self, descriptor: &TypeDescriptor) -> Result<Instance, ConstructError> {
		let candidate = &self.candidates[descriptor.slot()];
		candidate.constructed.fetch_add(1, Ordering::SeqCst);
		(candidate.factory)()
	}
}

pub(crate) fn key(s: &str) -> String {
	s.to_owned()
}
