use crate::bnk::bytes::Cursor;
use crate::bnk::{BnkError, Result};

/// One media index record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DidxEntry {
	/// Media id.
	pub id: u32,
	/// Offset relative to the `DATA` payload start.
	pub offset: u32,
	/// Media length in bytes.
	pub len: u32,
}

impl DidxEntry {
	/// Encoded record size.
	pub const SIZE: usize = 12;
}

/// Decoded `DIDX` media index table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DidxSection {
	/// Index records in file order.
	pub entries: Vec<DidxEntry>,
}

impl DidxSection {
	/// Decode `payload.len() / 12` records.
	///
	/// With `strict_len`, a trailing partial record is rejected; otherwise it
	/// is dropped.
	pub fn parse(payload: &[u8], strict_len: bool) -> Result<Self> {
		let trailing = payload.len() % DidxEntry::SIZE;
		if trailing != 0 {
			if strict_len {
				return Err(BnkError::DidxLenMisaligned { len: payload.len() });
			}
			tracing::warn!(len = payload.len(), trailing, "DIDX length not a multiple of 12, dropping partial entry");
		}

		let count = payload.len() / DidxEntry::SIZE;
		let mut cursor = Cursor::new(payload);
		let mut entries = Vec::with_capacity(count);
		for _ in 0..count {
			entries.push(DidxEntry {
				id: cursor.read_u32_le()?,
				offset: cursor.read_u32_le()?,
				len: cursor.read_u32_le()?,
			});
		}

		Ok(Self { entries })
	}
}

#[cfg(test)]
mod tests {
	use super::{DidxEntry, DidxSection};
	use crate::bnk::BnkError;

	fn encode(entries: &[(u32, u32, u32)]) -> Vec<u8> {
		let mut out = Vec::new();
		for (id, offset, len) in entries {
			out.extend_from_slice(&id.to_le_bytes());
			out.extend_from_slice(&offset.to_le_bytes());
			out.extend_from_slice(&len.to_le_bytes());
		}
		out
	}

	#[test]
	fn decodes_entries_in_file_order() {
		let payload = encode(&[(7, 0, 16), (3, 16, 4)]);
		let didx = DidxSection::parse(&payload, true).expect("didx parses");
		assert_eq!(
			didx.entries,
			vec![DidxEntry { id: 7, offset: 0, len: 16 }, DidxEntry { id: 3, offset: 16, len: 4 }]
		);
	}

	#[test]
	fn strict_mode_rejects_partial_entry() {
		let mut payload = encode(&[(1, 0, 1)]);
		payload.extend_from_slice(&[0xAA; 5]);
		let err = DidxSection::parse(&payload, true).expect_err("misaligned");
		assert!(matches!(err, BnkError::DidxLenMisaligned { len: 17 }));
	}

	#[test]
	fn lenient_mode_drops_partial_entry() {
		let mut payload = encode(&[(1, 0, 1), (2, 1, 1)]);
		payload.extend_from_slice(&[0xAA; 11]);
		let didx = DidxSection::parse(&payload, false).expect("lenient parse");
		assert_eq!(didx.entries.len(), 2);
	}

	#[test]
	fn empty_payload_has_no_entries() {
		let didx = DidxSection::parse(&[], true).expect("empty parses");
		assert!(didx.entries.is_empty());
	}
}
