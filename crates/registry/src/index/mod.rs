#![cfg_attr(doc, allow(rustdoc::private_intra_doc_links))]
//! Registry construction and composition.
//!
//! # Purpose
//!
//! The `index` subsystem turns the candidates a [`DiscoveryProvider`] finds in a
//! namespace into an immutable keyed table, and composes such tables into one
//! logical registry.
//!
//! # Mental Model
//!
//! 1. **Build Phase:** [`RegistryBuilder`] enumerates the namespace, filters
//!    candidates by eligibility and capability, constructs one instance per
//!    survivor and derives its key with a [`KeyPolicy`].
//! 2. **Consumption:** [`KeyedRegistry`] answers lookups by key. Absence is an
//!    error ([`LookupError`]), never a sentinel.
//! 3. **Composition:** [`GroupedRegistry`] holds an ordered list of members and
//!    probes them in order. Members are validated for key collisions when added.
//! 4. **Publication:** [`RegistryCell`] holds a registry as process-wide state
//!    with an explicit, one-time initialization.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`RegistryBuilder`] | Drives a provider and assembles a table. |
//! | [`KeyedRegistry`] | Immutable table; one instance per key. |
//! | [`StringKeyedRegistry`] | Table keyed by [`QualifiedName`]. |
//! | [`GroupedRegistry`] | Ordered composition with disjoint keys. |
//! | [`Registry`] | Read contract shared by keyed and grouped registries. |
//! | [`RegistryCell`] | One-time initialized global slot. |
//!
//! # Concurrency
//!
//! - **Reads:** Lock-free; tables are immutable after build.
//! - **Writes:** Builds and [`GroupedRegistry::add_member`] happen before
//!   publication and take ownership or `&mut`, so they cannot race with reads.
//!
//! # Invariants
//!
//! - Keys are unique within a keyed registry.
//!   - Enforced in: [`RegistryBuilder::build`] (duplicate key aborts the build).
//!   - Tested by: [`crate::index::invariants::test_duplicate_key_aborts_build`]
//!   - Failure symptom: One of two candidates silently unreachable.
//!
//! - Each eligible candidate is constructed exactly once, ineligible ones never.
//!   - Enforced in: [`RegistryBuilder::build`].
//!   - Tested by: [`crate::index::invariants::test_construct_once_per_candidate`]
//!   - Failure symptom: Side effects of constructors observed twice or for opted-out types.
//!
//! - A failed build exposes nothing.
//!   - Enforced in: [`RegistryBuilder::build`] (returns `Err`, drops partial state).
//!   - Tested by: [`crate::index::invariants::test_failed_build_exposes_nothing`]
//!   - Failure symptom: Registry missing entries after a constructor error.
//!
//! - Grouped member key sets are pairwise disjoint.
//!   - Enforced in: [`GroupedRegistry::add_shared`].
//!   - Tested by: [`crate::index::invariants::test_grouped_rejects_overlap_atomically`]
//!   - Failure symptom: Lookup result depends on member order for a shared key.
//!
//! [`DiscoveryProvider`]: crate::core::DiscoveryProvider
//! [`LookupError`]: crate::core::LookupError

mod build;
mod cell;
mod grouped;
mod keyed;
mod policy;

pub use build::{RegistryBuilder, build};
pub use cell::RegistryCell;
pub use grouped::GroupedRegistry;
pub use keyed::{KeySet, KeyedRegistry, Registry, RegistryKey, StoredKeys};
pub use policy::{KeyPolicy, QualifiedName, SimpleName, StringKeyedRegistry};

#[cfg(any(test, doc))]
pub(crate) mod invariants;

#[cfg(test)]
pub(crate) mod test_fixtures;
