//! Invariant proof entrypoints for registry construction and composition.
#![allow(dead_code)]

#[cfg(doc)]
pub(crate) fn test_duplicate_key_aborts_build() {}

#[cfg(doc)]
pub(crate) fn test_construct_once_per_candidate() {}

#[cfg(doc)]
pub(crate) fn test_failed_build_exposes_nothing() {}

#[cfg(doc)]
pub(crate) fn test_grouped_rejects_overlap_atomically() {}

#[cfg(test)]
mod proofs;

#[cfg(test)]
#[allow(unused_imports)]
pub(crate) use proofs::{
	test_construct_once_per_candidate, test_duplicate_key_aborts_build,
	test_failed_build_exposes_nothing, test_grouped_rejects_overlap_atomically,
};
