use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::parse::{Parse, ParseStream};
use syn::{Generics, Ident, Item, Token, parse_macro_input};

enum Constructor {
	Default,
	Infallible(syn::Path),
	Fallible(syn::Path),
}

struct IndexedArgs {
	capabilities: Vec<syn::Type>,
	constructor: Constructor,
}

impl Parse for IndexedArgs {
	fn parse(input: ParseStream) -> syn::Result<Self> {
		let mut capabilities = Vec::new();
		let mut constructor = Constructor::Default;

		while !input.is_empty() {
			if input.peek(Ident) && input.peek2(Token![=]) {
				let key: Ident = input.parse()?;
				input.parse::<Token![=]>()?;
				let path: syn::Path = input.parse()?;

				if !matches!(constructor, Constructor::Default) {
					return Err(syn::Error::new_spanned(key, "constructor specified twice"));
				}
				constructor = if key == "constructor" {
					Constructor::Infallible(path)
				} else if key == "try_constructor" {
					Constructor::Fallible(path)
				} else {
					return Err(syn::Error::new_spanned(key, "unknown indexed argument"));
				};
			} else {
				capabilities.push(input.parse()?);
			}

			if !input.is_empty() {
				input.parse::<Token![,]>()?;
			}
		}

		if capabilities.is_empty() {
			return Err(input.error("expected at least one capability, e.g. #[indexed(dyn Action)]"));
		}

		Ok(Self {
			capabilities,
			constructor,
		})
	}
}

/// Entry point for `#[indexed(...)]`.
///
/// Re-emits the item unchanged and submits one `Candidate` per capability.
pub fn indexed(attr: TokenStream, item: TokenStream) -> TokenStream {
	let args = parse_macro_input!(attr as IndexedArgs);
	let input = parse_macro_input!(item as Item);

	let (ident, generics) = match &input {
		Item::Struct(s) => (&s.ident, &s.generics),
		Item::Enum(e) => (&e.ident, &e.generics),
		other => {
			return syn::Error::new_spanned(other, "#[indexed] applies to structs and enums")
				.to_compile_error()
				.into();
		}
	};

	if let Err(e) = reject_generics(generics) {
		return e.to_compile_error().into();
	}

	let value = construct_value(ident, &args.constructor);
	let submissions = args.capabilities.iter().map(|capability| {
		quote! {
			::typepool_discovery::inventory::submit! {
				::typepool_discovery::Candidate {
					namespace: ::core::module_path!(),
					name: ::core::stringify!(#ident),
					capability: ::typepool_discovery::BaseCapability::of::<#capability>,
					construct: || {
						#value
						::core::result::Result::Ok(
							::typepool_discovery::erase::<#capability>(::std::sync::Arc::new(value))
						)
					},
				}
			}
		}
	});

	let expanded = quote! {
		#input
		#(#submissions)*
	};

	expanded.into()
}

fn reject_generics(generics: &Generics) -> syn::Result<()> {
	if generics.params.is_empty() {
		Ok(())
	} else {
		Err(syn::Error::new_spanned(
			generics,
			"#[indexed] types must not be generic; discovery constructs exactly one instance",
		))
	}
}

/// `let value: Ty = ...;` for the chosen constructor.
fn construct_value(ident: &Ident, constructor: &Constructor) -> TokenStream2 {
	match constructor {
		Constructor::Default => quote! {
			let value: #ident = <#ident as ::core::default::Default>::default();
		},
		Constructor::Infallible(path) => quote! {
			let value: #ident = #path();
		},
		Constructor::Fallible(path) => quote! {
			let value: #ident = #path().map_err(::typepool_discovery::ConstructError::failed)?;
		},
	}
}
