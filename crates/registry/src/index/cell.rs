use std::sync::OnceLock;

use parking_lot::Mutex;

use crate::core::{CellError, InitError};

/// A process-wide registry slot with an explicit, one-time initialization.
///
/// ```ignore
/// static ACTIONS: RegistryCell<StringKeyedRegistry<dyn Action>> = RegistryCell::new("actions");
///
/// ACTIONS.initialize(|| StringKeyedRegistry::scan("app.actions", &provider))?;
/// let jump = ACTIONS.get()?.get(&"Jump".to_owned())?;
/// ```
pub struct RegistryCell<R> {
	label: &'static str,
	value: OnceLock<R>,
	init: Mutex<()>,
}

impl<R> RegistryCell<R> {
	pub const fn new(label: &'static str) -> Self {
		Self {
			label,
			value: OnceLock::new(),
			init: parking_lot::const_mutex(()),
		}
	}

	/// Builds and publishes the registry.
	///
	/// `build` runs at most once over the cell's lifetime. Concurrent callers
	/// are serialized; every call after the first successful one fails with
	/// [`InitError::AlreadyInitialized`] without running its closure. A failed
	/// build leaves the cell empty.
	pub fn initialize<E>(&self, build: impl FnOnce() -> Result<R, E>) -> Result<&R, InitError<E>> {
		let _guard = self.init.lock();
		if self.value.get().is_some() {
			return Err(InitError::AlreadyInitialized(self.label));
		}

		let registry = build().map_err(|source| InitError::Build {
			label: self.label,
			source,
		})?;
		tracing::debug!(registry = self.label, "registry published");
		Ok(self.value.get_or_init(|| registry))
	}

	/// The published registry.
	pub fn get(&self) -> Result<&R, CellError> {
		self.value.get().ok_or(CellError::Uninitialized(self.label))
	}

	pub fn is_initialized(&self) -> bool {
		self.value.get().is_some()
	}

	pub fn label(&self) -> &'static str {
		self.label
	}
}
