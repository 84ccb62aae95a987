use crate::bnk::bytes::Cursor;
use crate::bnk::{BnkError, DidxSection, Result};

/// One embedded media blob, kept opaque.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
	/// Media id copied from the matching index record.
	pub id: u32,
	/// Raw media bytes.
	pub bytes: Vec<u8>,
}

impl Blob {
	/// Blob length in bytes.
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether the blob holds no bytes.
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}
}

/// Decoded `DATA` section: one blob per index record, in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSection {
	/// Blobs in index order.
	pub blobs: Vec<Blob>,
}

impl DataSection {
	/// Slice `payload` using the ranges in `didx`.
	pub fn parse(payload: &[u8], didx: &DidxSection) -> Result<Self> {
		let mut cursor = Cursor::new(payload);
		let mut blobs = Vec::with_capacity(didx.entries.len());

		for entry in &didx.entries {
			let out_of_range = || BnkError::BlobOutOfRange {
				id: entry.id,
				offset: entry.offset,
				len: entry.len,
				payload: payload.len(),
			};

			cursor.seek(entry.offset as usize).map_err(|_| out_of_range())?;
			let bytes = cursor.read_exact(entry.len as usize).map_err(|_| out_of_range())?;
			blobs.push(Blob {
				id: entry.id,
				bytes: bytes.to_vec(),
			});
		}

		Ok(Self { blobs })
	}

	/// Sum of all blob lengths.
	pub fn total_len(&self) -> usize {
		self.blobs.iter().map(Blob::len).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::DataSection;
	use crate::bnk::{BnkError, DidxEntry, DidxSection};

	fn didx(entries: &[(u32, u32, u32)]) -> DidxSection {
		DidxSection {
			entries: entries.iter().map(|&(id, offset, len)| DidxEntry { id, offset, len }).collect(),
		}
	}

	#[test]
	fn slices_blobs_by_index_ranges() {
		let payload: Vec<u8> = (0..32).collect();
		let data = DataSection::parse(&payload, &didx(&[(10, 16, 4), (11, 0, 3), (12, 31, 1)])).expect("data parses");

		assert_eq!(data.blobs.len(), 3);
		assert_eq!(data.blobs[0].id, 10);
		assert_eq!(data.blobs[0].bytes, vec![16, 17, 18, 19]);
		assert_eq!(data.blobs[1].bytes, vec![0, 1, 2]);
		assert_eq!(data.blobs[2].bytes, vec![31]);
		assert_eq!(data.total_len(), 8);
	}

	#[test]
	fn zero_length_blob_at_payload_end_is_allowed() {
		let payload = [0_u8; 4];
		let data = DataSection::parse(&payload, &didx(&[(1, 4, 0)])).expect("empty blob");
		assert!(data.blobs[0].is_empty());
	}

	#[test]
	fn range_past_payload_is_an_error() {
		let payload = [0_u8; 8];
		let err = DataSection::parse(&payload, &didx(&[(1, 0, 4), (2, 6, 4)])).expect_err("out of range");
		assert!(matches!(
			err,
			BnkError::BlobOutOfRange {
				id: 2,
				offset: 6,
				len: 4,
				payload: 8
			}
		));
	}

	#[test]
	fn offset_past_payload_is_an_error() {
		let payload = [0_u8; 8];
		let err = DataSection::parse(&payload, &didx(&[(5, 9, 0)])).expect_err("offset out of range");
		assert!(matches!(err, BnkError::BlobOutOfRange { id: 5, .. }));
	}
}
