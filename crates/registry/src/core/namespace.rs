use std::fmt;
use std::sync::Arc;

/// Separator between namespace segments.
pub const SEPARATOR: char = '.';

/// A dotted logical path under which candidate types are discovered.
///
/// Rust module paths (`app::actions`) are normalized to the dotted form
/// (`app.actions`) so that link-time registrations and hand-written namespaces
/// compare equal. The empty namespace is the root and contains everything.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Namespace(Arc<str>);

impl Namespace {
	pub fn new(path: impl AsRef<str>) -> Self {
		let path = path.as_ref();
		if path.contains("::") {
			let dotted = path.replace("::", ".");
			Self(Arc::from(dotted.trim_matches(SEPARATOR)))
		} else {
			Self(Arc::from(path.trim_matches(SEPARATOR)))
		}
	}

	/// The root namespace.
	pub fn root() -> Self {
		Self(Arc::from(""))
	}

	pub fn is_root(&self) -> bool {
		self.0.is_empty()
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Iterates over the dotted segments. The root has none.
	pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
		self.0.split(SEPARATOR).filter(|s| !s.is_empty())
	}

	/// Returns true if `other` is this namespace or one of its descendants.
	pub fn contains(&self, other: &Namespace) -> bool {
		if self.is_root() {
			return true;
		}
		match other.0.strip_prefix(&*self.0) {
			Some("") => true,
			Some(rest) => rest.starts_with(SEPARATOR),
			None => false,
		}
	}

	/// Joins `name` onto this namespace.
	pub fn qualify(&self, name: &str) -> String {
		if self.is_root() {
			name.to_owned()
		} else {
			format!("{}{SEPARATOR}{name}", self.0)
		}
	}

	/// Strips this namespace and its trailing separator from the front of a
	/// fully qualified name.
	///
	/// Only the leading occurrence is removed: nested segments stay in the
	/// result, so `app.actions.movement.Dash` under `app.actions` becomes
	/// `movement.Dash`.
	pub fn strip_from<'a>(&self, qualified: &'a str) -> Option<&'a str> {
		if self.is_root() {
			return Some(qualified);
		}
		qualified
			.strip_prefix(&*self.0)?
			.strip_prefix(SEPARATOR)
			.filter(|rest| !rest.is_empty())
	}

	/// Ordering used for deterministic depth-first enumeration: segment-wise,
	/// so a namespace sorts before all of its descendants.
	pub fn depth_first_cmp(&self, other: &Namespace) -> std::cmp::Ordering {
		self.segments().cmp(other.segments())
	}
}

impl fmt::Debug for Namespace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Namespace({:?})", &*self.0)
	}
}

impl fmt::Display for Namespace {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_root() {
			f.write_str("<root>")
		} else {
			f.write_str(&self.0)
		}
	}
}

impl From<&str> for Namespace {
	fn from(path: &str) -> Self {
		Self::new(path)
	}
}

impl From<String> for Namespace {
	fn from(path: String) -> Self {
		Self::new(path)
	}
}
