//! Procedural macros for typepool.
//!
//! Provides the `#[indexed(...)]` attribute, which opts a type into link-time
//! discovery by `typepool_discovery::StaticProvider`.

use proc_macro::TokenStream;

/// `#[indexed]` attribute implementation.
mod indexed;

/// Opts a type into discovery for one or more capabilities.
///
/// The type is registered under the module it is declared in, so a type in
/// `app::actions::movement` is found when scanning `app.actions`.
///
/// ```ignore
/// #[indexed(dyn Action)]
/// #[derive(Default)]
/// pub struct Jump;
///
/// #[indexed(dyn Action, dyn Describe, constructor = Run::new)]
/// pub struct Run { speed: u8 }
///
/// #[indexed(dyn Action, try_constructor = Load::open)]
/// pub struct Load { file: std::fs::File }
/// ```
///
/// # Arguments
///
/// - One or more capability types (usually `dyn Trait`). Required.
/// - `constructor = path` - zero-argument function returning `Self`.
///   Defaults to `Default::default`.
/// - `try_constructor = path` - zero-argument function returning
///   `Result<Self, E>`; an `Err` aborts the registry build.
#[proc_macro_attribute]
pub fn indexed(attr: TokenStream, item: TokenStream) -> TokenStream {
	indexed::indexed(attr, item)
}
