use typepool_registry::{BaseCapability, ConstructError, Instance, Namespace, TypeDescriptor};

/// A link-time record describing one discoverable type.
///
/// Normally emitted by `#[indexed(...)]`; one record per capability the type
/// is indexed under.
pub struct Candidate {
	/// `module_path!()` of the declaring module.
	pub namespace: &'static str,
	pub name: &'static str,
	pub capability: fn() -> BaseCapability,
	pub construct: fn() -> Result<Instance, ConstructError>,
}

inventory::collect!(Candidate);

impl std::fmt::Debug for Candidate {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Candidate")
			.field("namespace", &self.namespace)
			.field("name", &self.name)
			.field("capability", &(self.capability)())
			.finish_non_exhaustive()
	}
}

/// Descriptors for every entry inside `namespace`, in depth-first order.
///
/// `entries` yields `(slot, namespace, name)`; the slot is stored in the
/// descriptor for the provider's own lookups.
pub(crate) fn depth_first<'a>(
	namespace: &Namespace,
	entries: impl Iterator<Item = (usize, &'a Namespace, &'a str)>,
) -> Vec<TypeDescriptor> {
	let mut found: Vec<_> = entries
		.filter(|(_, declared, _)| namespace.contains(declared))
		.map(|(slot, declared, name)| TypeDescriptor::new(declared.clone(), name, slot))
		.collect();
	found.sort_by(|a, b| a.depth_first_cmp(b));
	found
}

/// Best-effort text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
	if let Some(s) = payload.downcast_ref::<&str>() {
		(*s).to_owned()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"non-string panic payload".to_owned()
	}
}
