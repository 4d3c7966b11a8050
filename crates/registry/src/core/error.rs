use super::namespace::Namespace;

/// Failure of a provider to construct an instance.
#[derive(Debug, thiserror::Error)]
pub enum ConstructError {
	/// The provider has no constructor for the descriptor.
	#[error("no constructor available for {0}")]
	Missing(String),
	/// The constructor panicked.
	#[error("constructor panicked: {0}")]
	Panicked(String),
	/// The constructor returned an error.
	#[error(transparent)]
	Failed(Box<dyn std::error::Error + Send + Sync>),
}

impl ConstructError {
	pub fn failed(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
		Self::Failed(err.into())
	}
}

/// Failure of a key policy to derive a key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KeyError {
	#[error("{name} is not declared inside namespace {namespace}")]
	OutsideNamespace { name: String, namespace: Namespace },
	#[error("{0}")]
	Rejected(String),
}

/// Fatal registry construction errors. No partially built registry survives one.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
	#[error("failed to construct {type_name} for base capability {capability} while indexing {namespace}")]
	Construct {
		capability: &'static str,
		namespace: Namespace,
		type_name: String,
		#[source]
		source: ConstructError,
	},
	/// The provider handed back an instance of a different type than claimed.
	#[error("{type_name} did not produce an instance of {capability} while indexing {namespace}")]
	InstanceMismatch {
		capability: &'static str,
		namespace: Namespace,
		type_name: String,
	},
	#[error("failed to derive a key for {type_name} while indexing {namespace}")]
	Key {
		capability: &'static str,
		namespace: Namespace,
		type_name: String,
		#[source]
		source: KeyError,
	},
	#[error(
		"duplicate key {key} for base capability {capability} in {namespace}: existing={existing} incoming={incoming}"
	)]
	DuplicateKey {
		capability: &'static str,
		namespace: Namespace,
		key: String,
		existing: String,
		incoming: String,
	},
}

impl BuildError {
	pub fn namespace(&self) -> &Namespace {
		match self {
			Self::Construct { namespace, .. }
			| Self::InstanceMismatch { namespace, .. }
			| Self::Key { namespace, .. }
			| Self::DuplicateKey { namespace, .. } => namespace,
		}
	}
}

/// A lookup for a key that has no entry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no entry for key {key} for base capability {capability}")]
pub struct LookupError {
	pub key: String,
	pub capability: &'static str,
}

/// A grouped registry member whose keys collide with existing members.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("attempted to add two entries with the same key {key} to a grouped registry for {capability}")]
pub struct DuplicateKeyError {
	pub key: String,
	pub capability: &'static str,
}

/// [`RegistryCell`](crate::RegistryCell) read before initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CellError {
	#[error("registry {0} used before initialization")]
	Uninitialized(&'static str),
}

/// [`RegistryCell::initialize`](crate::RegistryCell::initialize) failures.
#[derive(Debug, thiserror::Error)]
pub enum InitError<E> {
	#[error("registry {0} is already initialized")]
	AlreadyInitialized(&'static str),
	#[error("failed to build registry {label}")]
	Build {
		label: &'static str,
		#[source]
		source: E,
	},
}
