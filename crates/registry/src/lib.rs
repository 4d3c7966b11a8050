//! Discovery-driven keyed registries.
//!
//! A registry is built once from the candidates a [`DiscoveryProvider`] finds in
//! a [`Namespace`]: every eligible candidate implementing the base capability is
//! constructed exactly once and stored under the key a [`KeyPolicy`] derives
//! for it. [`GroupedRegistry`] composes several registries behind one read
//! interface while keeping their key sets disjoint.
//!
//! ```ignore
//! let actions = StringKeyedRegistry::<dyn Action>::scan("app.actions", &provider)?;
//! let moves = StringKeyedRegistry::<dyn Action>::scan("app.moves", &provider)?;
//!
//! let mut all = GroupedRegistry::<dyn Action>::new();
//! all.add_member(actions)?;
//! all.add_member(moves)?;
//! all.get(&"Jump".to_owned())?.run();
//! ```
//!
//! Providers live in `typepool-discovery`; this crate only defines the
//! [`DiscoveryProvider`] seam.

pub mod core;
pub mod index;

pub use crate::core::{
	BaseCapability, BuildError, CellError, ConstructError, DiscoveryProvider, DuplicateKeyError,
	InitError, Instance, KeyError, LookupError, Namespace, TypeDescriptor, erase,
};
pub use crate::index::{
	GroupedRegistry, KeyPolicy, KeySet, KeyedRegistry, QualifiedName, Registry, RegistryBuilder,
	RegistryCell, RegistryKey, SimpleName, StoredKeys, StringKeyedRegistry, build,
};
