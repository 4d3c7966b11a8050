//! Key derivation policies.

use crate::core::{BuildError, DiscoveryProvider, KeyError, Namespace, TypeDescriptor};
use crate::index::build::RegistryBuilder;
use crate::index::keyed::KeyedRegistry;

/// Derives the lookup key for a freshly constructed instance.
///
/// `namespace` is the namespace that was scanned, which may be an ancestor of
/// the descriptor's own namespace.
pub trait KeyPolicy<T: ?Sized, I> {
	fn derive_key(
		&self,
		instance: &T,
		descriptor: &TypeDescriptor,
		namespace: &Namespace,
	) -> Result<I, KeyError>;
}

impl<T, I, F> KeyPolicy<T, I> for F
where
	T: ?Sized,
	F: Fn(&T, &TypeDescriptor, &Namespace) -> Result<I, KeyError>,
{
	fn derive_key(
		&self,
		instance: &T,
		descriptor: &TypeDescriptor,
		namespace: &Namespace,
	) -> Result<I, KeyError> {
		self(instance, descriptor, namespace)
	}
}

/// Keys by the fully qualified name relative to the scanned namespace.
///
/// Sub-namespace segments below the scanned namespace stay in the key.
#[derive(Debug, Clone, Copy, Default)]
pub struct QualifiedName;

impl<T: ?Sized> KeyPolicy<T, String> for QualifiedName {
	fn derive_key(
		&self,
		_instance: &T,
		descriptor: &TypeDescriptor,
		namespace: &Namespace,
	) -> Result<String, KeyError> {
		let qualified = descriptor.fully_qualified_name();
		match namespace.strip_from(&qualified) {
			Some(relative) => Ok(relative.to_owned()),
			None => Err(KeyError::OutsideNamespace {
				name: qualified,
				namespace: namespace.clone(),
			}),
		}
	}
}

/// Keys by the bare type name, flattening sub-namespaces.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleName;

impl<T: ?Sized> KeyPolicy<T, String> for SimpleName {
	fn derive_key(
		&self,
		_instance: &T,
		descriptor: &TypeDescriptor,
		_namespace: &Namespace,
	) -> Result<String, KeyError> {
		Ok(descriptor.name().to_owned())
	}
}

/// Registry keyed by [`QualifiedName`].
pub type StringKeyedRegistry<T> = KeyedRegistry<T, String>;

impl<T: ?Sized + Send + Sync + 'static> KeyedRegistry<T, String> {
	/// Scans `namespace` and keys every instance by its [`QualifiedName`].
	pub fn scan<P>(namespace: impl Into<Namespace>, provider: &P) -> Result<Self, BuildError>
	where
		P: DiscoveryProvider + ?Sized,
	{
		RegistryBuilder::new(namespace).build(provider, &QualifiedName)
	}
}
