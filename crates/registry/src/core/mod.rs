//! Vocabulary shared by builders, registries and providers.

pub mod descriptor;
pub mod error;
pub mod namespace;
pub mod provider;

pub use descriptor::{BaseCapability, Instance, TypeDescriptor, erase};
pub use error::{
	BuildError, CellError, ConstructError, DuplicateKeyError, InitError, KeyError, LookupError,
};
pub use namespace::Namespace;
pub use provider::DiscoveryProvider;
