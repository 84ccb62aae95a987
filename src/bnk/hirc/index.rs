use std::collections::HashMap;

use crate::bnk::{HircKind, HircObject};

/// Lookup of record positions by `(kind, id)`.
///
/// Buckets keep storage order, so iterating one yields matches exactly as a
/// linear scan over the records would.
#[derive(Debug, Clone, Default)]
pub struct HircIndex {
	by_key: HashMap<(HircKind, u32), Vec<usize>>,
}

impl HircIndex {
	/// Index every record by kind and id.
	pub fn build(objects: &[HircObject]) -> Self {
		let mut by_key: HashMap<(HircKind, u32), Vec<usize>> = HashMap::new();
		for (pos, object) in objects.iter().enumerate() {
			by_key.entry((object.kind(), object.id)).or_default().push(pos);
		}

		Self { by_key }
	}

	/// Record positions for `(kind, id)`, ascending; empty when absent.
	pub fn positions(&self, kind: HircKind, id: u32) -> &[usize] {
		self.by_key.get(&(kind, id)).map(Vec::as_slice).unwrap_or(&[])
	}
}
