//! Proofs for the invariants listed in the `index` module docs.

use std::sync::Arc;

use crate::core::BuildError;
use crate::index::test_fixtures::{Action, Dash, FakeProvider, Jump, Run, Step, key};
use crate::index::{
	GroupedRegistry, KeyedRegistry, QualifiedName, Registry, RegistryBuilder, SimpleName,
	StringKeyedRegistry,
};

/// Invariant: Keys are unique within a keyed registry.
///
/// Two candidates deriving the same key MUST abort the build rather than let
/// one shadow the other.
pub(crate) fn inv_duplicate_key_aborts_build() {
	let provider = FakeProvider::new()
		.action::<Dash>("app.actions", "Dash")
		.action::<Dash>("app.actions.movement", "Dash");

	let result: Result<KeyedRegistry<dyn Action, String>, _> =
		RegistryBuilder::new("app.actions").build(&provider, &SimpleName);

	match result {
		Err(BuildError::DuplicateKey {
			key,
			existing,
			incoming,
			..
		}) => {
			assert_eq!(key, "Dash");
			assert_eq!(existing, "app.actions.Dash");
			assert_eq!(incoming, "app.actions.movement.Dash");
		}
		other => panic!("expected duplicate key error, got {other:?}"),
	}
}

#[cfg_attr(test, test)]
pub(crate) fn test_duplicate_key_aborts_build() {
	inv_duplicate_key_aborts_build()
}

/// Invariant: Each eligible candidate is constructed exactly once; ineligible
/// candidates and candidates of other capabilities are never constructed.
pub(crate) fn inv_construct_once_per_candidate() {
	let provider = FakeProvider::new()
		.action::<Jump>("app.actions", "Jump")
		.action::<Run>("app.actions", "Run")
		.hidden_action::<Dash>("app.actions", "Dash")
		.motion::<Step>("app.actions", "Step");

	let registry = StringKeyedRegistry::<dyn Action>::scan("app.actions", &provider).unwrap();

	assert_eq!(registry.len(), 2);
	assert_eq!(provider.constructed("app.actions.Jump"), 1);
	assert_eq!(provider.constructed("app.actions.Run"), 1);
	assert_eq!(provider.constructed("app.actions.Dash"), 0);
	assert_eq!(provider.constructed("app.actions.Step"), 0);

	// Lookups never construct.
	for _ in 0..3 {
		registry.get(&key("Jump")).unwrap();
	}
	assert_eq!(provider.total_constructed(), 2);
}

#[cfg_attr(test, test)]
pub(crate) fn test_construct_once_per_candidate() {
	inv_construct_once_per_candidate()
}

/// Invariant: A failed build exposes nothing.
///
/// A constructor failure anywhere in the namespace MUST fail the whole build,
/// even when other candidates constructed fine.
pub(crate) fn inv_failed_build_exposes_nothing() {
	let provider = FakeProvider::new()
		.action::<Jump>("app.actions", "Jump")
		.broken_action("app.actions", "Kaput")
		.action::<Run>("app.actions", "Run");

	let result: Result<KeyedRegistry<dyn Action, String>, _> =
		RegistryBuilder::new("app.actions").build(&provider, &QualifiedName);

	let err = result.expect_err("broken constructor must abort the build");
	assert!(matches!(
		err,
		BuildError::Construct { ref type_name, .. } if type_name == "app.actions.Kaput"
	));
	assert!(err.to_string().contains("app.actions"));
}

#[cfg_attr(test, test)]
pub(crate) fn test_failed_build_exposes_nothing() {
	inv_failed_build_exposes_nothing()
}

/// Invariant: Grouped member key sets are pairwise disjoint, and a rejected
/// member leaves the group untouched.
pub(crate) fn inv_grouped_rejects_overlap_atomically() {
	let actions = FakeProvider::new()
		.action::<Jump>("app.actions", "Jump")
		.action::<Run>("app.actions", "Run");
	let moves = FakeProvider::new()
		.action::<Dash>("app.moves", "Dash")
		.action::<Jump>("app.moves", "Jump");

	let first = StringKeyedRegistry::<dyn Action>::scan("app.actions", &actions).unwrap();
	let second = StringKeyedRegistry::<dyn Action>::scan("app.moves", &moves).unwrap();
	let first_jump = Arc::clone(first.get(&key("Jump")).unwrap());

	let mut group = GroupedRegistry::<dyn Action>::new();
	group.add_member(first).unwrap();
	let before = group.stored_keys().into_owned();

	let err = group.add_member(second).unwrap_err();
	assert_eq!(err.key, "Jump");
	assert_eq!(group.member_count(), 1);
	assert_eq!(group.stored_keys().into_owned(), before);
	assert!(group.find(&key("Dash")).is_none());
	assert!(Arc::ptr_eq(group.get(&key("Jump")).unwrap(), &first_jump));
	assert!(!Registry::contains_key(&group, &key("Dash")));
}

#[cfg_attr(test, test)]
pub(crate) fn test_grouped_rejects_overlap_atomically() {
	inv_grouped_rejects_overlap_atomically()
}
