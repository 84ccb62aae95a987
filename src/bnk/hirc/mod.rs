mod index;
mod kind;
mod node_params;
mod object;

use std::collections::BTreeMap;

use crate::bnk::{BnkError, Cursor, Result};

pub use index::HircIndex;
pub use kind::HircKind;
pub use node_params::skip_node_base_params;
pub use object::{
	ActionBody, EventBody, HircBody, HircObject, MusicContainerBody, MusicTrackBody, RanSeqCntrBody, SoundBody, StateBody, StateProp, SwitchCntrBody,
};

/// Decoded `HIRC` object hierarchy.
#[derive(Debug, Clone, Default)]
pub struct HircSection {
	/// Decoded records in storage order.
	pub objects: Vec<HircObject>,
	/// Count of entries left undecoded, by raw type tag.
	pub skipped: BTreeMap<u8, u32>,
	index: HircIndex,
}

impl HircSection {
	/// Build a section from already-decoded records.
	pub fn from_objects(objects: Vec<HircObject>) -> Self {
		Self::with_skipped(objects, BTreeMap::new())
	}

	fn with_skipped(objects: Vec<HircObject>, skipped: BTreeMap<u8, u32>) -> Self {
		let index = HircIndex::build(&objects);
		Self { objects, skipped, index }
	}

	/// Decode a `HIRC` payload.
	///
	/// Each entry is `{type: u8, len: u32, id: u32, body}` where `len` counts
	/// from the id. The next entry is always read at the declared boundary.
	///
	/// A body that reads past its entry length is skipped with a warning, or
	/// fails with `HircEntryOverrun` when `strict_bodies` is set.
	pub fn parse(payload: &[u8], strict_bodies: bool) -> Result<Self> {
		let mut cursor = Cursor::new(payload);
		let count = cursor.read_u32_le()?;

		let mut objects = Vec::new();
		let mut skipped = BTreeMap::new();
		for index in 0..count {
			let at = cursor.pos();
			let type_tag = cursor.read_u8()?;
			let len = cursor.read_u32_le()?;

			let rem = cursor.remaining();
			if len as usize > rem {
				return Err(BnkError::HircEntryLenOutOfRange {
					index,
					type_tag,
					at,
					len,
					rem,
				});
			}
			let entry = cursor.read_exact(len as usize)?;

			match decode_entry(index, type_tag, entry) {
				Ok(Some(object)) => objects.push(object),
				Ok(None) => *skipped.entry(type_tag).or_insert(0) += 1,
				Err(BnkError::HircEntryOverrun { id, need, rem, .. }) if !strict_bodies => {
					tracing::warn!(index, type_tag, id, len, need, rem, "skipping HIRC entry whose body overruns its length");
					*skipped.entry(type_tag).or_insert(0) += 1;
				}
				Err(err) => return Err(err),
			}
		}

		if cursor.remaining() > 0 {
			tracing::debug!(trailing = cursor.remaining(), "HIRC payload has bytes after the last entry");
		}
		tracing::debug!(objects = objects.len(), skipped = count as usize - objects.len(), "decoded HIRC");

		Ok(Self::with_skipped(objects, skipped))
	}

	/// `(kind, id)` lookup built at decode time.
	pub fn index(&self) -> &HircIndex {
		&self.index
	}

	/// All records of `kind` with `id`, in storage order.
	pub fn find(&self, kind: HircKind, id: u32) -> impl Iterator<Item = &HircObject> + '_ {
		self.index.positions(kind, id).iter().filter_map(|pos| self.objects.get(*pos))
	}

	/// Event bodies with `id`.
	pub fn events(&self, id: u32) -> impl Iterator<Item = &EventBody> + '_ {
		self.find(HircKind::Event, id).filter_map(|object| match &object.body {
			HircBody::Event(body) => Some(body),
			_ => None,
		})
	}

	/// Action bodies with `id`.
	pub fn actions(&self, id: u32) -> impl Iterator<Item = &ActionBody> + '_ {
		self.find(HircKind::Action, id).filter_map(|object| match &object.body {
			HircBody::Action(body) => Some(body),
			_ => None,
		})
	}

	/// Random/sequence container bodies with `id`.
	pub fn ran_seq_cntrs(&self, id: u32) -> impl Iterator<Item = &RanSeqCntrBody> + '_ {
		self.find(HircKind::RanSeqCntr, id).filter_map(|object| match &object.body {
			HircBody::RanSeqCntr(body) => Some(body),
			_ => None,
		})
	}

	/// Sound bodies with `id`.
	pub fn sounds(&self, id: u32) -> impl Iterator<Item = &SoundBody> + '_ {
		self.find(HircKind::Sound, id).filter_map(|object| match &object.body {
			HircBody::Sound(body) => Some(body),
			_ => None,
		})
	}

	/// Decoded record count per kind.
	pub fn kind_counts(&self) -> BTreeMap<HircKind, u32> {
		let mut out = BTreeMap::new();
		for object in &self.objects {
			*out.entry(object.kind()).or_insert(0) += 1;
		}
		out
	}
}

fn decode_entry(index: u32, type_tag: u8, entry: &[u8]) -> Result<Option<HircObject>> {
	let kind = HircKind::from_tag(type_tag);
	let mut cursor = Cursor::new(entry);
	let id = cursor
		.read_u32_le()
		.map_err(|err| overrun(err, index, type_tag, 0))?;

	if !kind.has_body() {
		match kind {
			HircKind::Unrecognized(_) => tracing::warn!(index, type_tag, id, "skipping unrecognized HIRC entry"),
			_ => tracing::trace!(index, %kind, id, "skipping HIRC entry without decoder"),
		}
		return Ok(None);
	}

	let body = HircBody::decode(kind, &mut cursor).map_err(|err| overrun(err, index, type_tag, id))?;
	Ok(body.map(|body| HircObject { id, body }))
}

fn overrun(err: BnkError, index: u32, type_tag: u8, id: u32) -> BnkError {
	match err {
		BnkError::UnexpectedEof { need, rem, .. } => BnkError::HircEntryOverrun {
			index,
			type_tag,
			id,
			need,
			rem,
		},
		other => other,
	}
}

#[cfg(test)]
mod tests;
