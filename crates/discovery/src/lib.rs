//! Discovery providers for typepool registries.
//!
//! | Provider | Candidates come from |
//! |----------|----------------------|
//! | [`StaticProvider`] | `#[indexed(...)]` types, collected at link time via `inventory`. |
//! | [`ManifestProvider`] | Entries registered in code at runtime. |
//! | [`FilteredProvider`] | Any provider, narrowed by a [`DiscoveryConfig`]. |
//!
//! ```ignore
//! use typepool_discovery::{StaticProvider, indexed};
//! use typepool_registry::StringKeyedRegistry;
//!
//! pub trait Action: Send + Sync {
//!     fn run(&self);
//! }
//!
//! #[indexed(dyn Action)]
//! #[derive(Default)]
//! pub struct Jump;
//!
//! let provider = StaticProvider::collect();
//! let actions = StringKeyedRegistry::<dyn Action>::scan(module_path!(), &provider)?;
//! ```

mod candidate;
mod config;
mod filter;
mod manifest;
mod static_provider;

pub use candidate::Candidate;
pub use config::{ConfigError, DiscoveryConfig};
pub use filter::FilteredProvider;
pub use manifest::ManifestProvider;
pub use static_provider::StaticProvider;
#[doc(hidden)]
pub use inventory;
pub use typepool_macros::indexed;
pub use typepool_registry::{
	BaseCapability, ConstructError, DiscoveryProvider, Instance, Namespace, TypeDescriptor, erase,
};
