//! TOML-backed discovery filtering.
//!
//! ```toml
//! recursive = true
//! allow = ["app.actions.*"]
//! deny = ["app.actions.experimental.*", "app.actions.Debug"]
//! ```
//!
//! A pattern ending in `.*` matches everything below that namespace;
//! any other pattern matches one fully-qualified name exactly. Deny wins
//! over allow.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::filter::FilteredProvider;

#[derive(Debug, Error)]
pub enum ConfigError {
	#[error("failed to read discovery config {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("invalid discovery config: {0}")]
	Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoveryConfig {
	/// Include candidates in nested namespaces.
	pub recursive: bool,
	/// When set, only matching candidates are eligible.
	pub allow: Option<Vec<String>>,
	pub deny: Vec<String>,
}

impl Default for DiscoveryConfig {
	fn default() -> Self {
		Self {
			recursive: true,
			allow: None,
			deny: Vec::new(),
		}
	}
}

impl DiscoveryConfig {
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(source)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}

	/// Whether the fully-qualified candidate name passes the allow and deny lists.
	pub fn permits(&self, qualified: &str) -> bool {
		let qualified = qualified.replace("::", ".");
		if self.deny.iter().any(|p| pattern_matches(p, &qualified)) {
			return false;
		}
		match &self.allow {
			Some(allow) => allow.iter().any(|p| pattern_matches(p, &qualified)),
			None => true,
		}
	}

	pub fn apply<P>(self, provider: P) -> FilteredProvider<P> {
		FilteredProvider::new(provider, self)
	}
}

fn pattern_matches(pattern: &str, qualified: &str) -> bool {
	let pattern = pattern.trim().replace("::", ".");
	match pattern.strip_suffix(".*") {
		Some(prefix) => qualified
			.strip_prefix(prefix)
			.is_some_and(|rest| rest.starts_with('.')),
		None if pattern == "*" => true,
		None => pattern == qualified,
	}
}

#[cfg(test)]
mod tests {
	use std::io::Write;

	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[test]
	fn defaults_are_permissive() {
		let config = DiscoveryConfig::from_toml_str("").unwrap();
		assert_eq!(config, DiscoveryConfig::default());
		assert!(config.recursive);
		assert!(config.permits("anything.At.All"));
	}

	#[rstest]
	#[case("app.actions.*", "app.actions.Jump", true)]
	#[case("app.actions.*", "app.actions.nested.Jump", true)]
	#[case("app.actions.*", "app.actionsX.Jump", false)]
	#[case("app.actions.*", "app.actions", false)]
	#[case("app.actions.Jump", "app.actions.Jump", true)]
	#[case("app.actions.Jump", "app.actions.JumpHigh", false)]
	#[case("app::actions::*", "app.actions.Jump", true)]
	#[case("*", "app.Jump", true)]
	fn pattern_matching(#[case] pattern: &str, #[case] qualified: &str, #[case] expected: bool) {
		assert_eq!(pattern_matches(pattern, qualified), expected);
	}

	#[test]
	fn deny_wins_over_allow() {
		let config = DiscoveryConfig::from_toml_str(
			r#"
			allow = ["app.*"]
			deny = ["app.actions.experimental.*"]
			"#,
		)
		.unwrap();

		assert!(config.permits("app.actions.Jump"));
		assert!(!config.permits("app.actions.experimental.Warp"));
		assert!(!config.permits("other.Jump"));
	}

	#[test]
	fn unknown_keys_are_rejected() {
		let err = DiscoveryConfig::from_toml_str("recurse = false").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn load_reads_file() {
		let mut file = tempfile::NamedTempFile::new().unwrap();
		writeln!(file, "recursive = false\ndeny = [\"app.Debug\"]").unwrap();

		let config = DiscoveryConfig::load(file.path()).unwrap();
		assert!(!config.recursive);
		assert_eq!(config.deny, vec!["app.Debug".to_owned()]);
		assert_eq!(config.allow, None);
	}

	#[test]
	fn load_reports_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing.toml");

		let err = DiscoveryConfig::load(&path).unwrap_err();
		match err {
			ConfigError::Io { path: reported, .. } => assert_eq!(reported, path),
			other => panic!("expected io error, got {other:?}"),
		}
	}
}
