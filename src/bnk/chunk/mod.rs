use std::fmt;

use crate::bnk::bytes::Cursor;
use crate::bnk::{BnkError, Result};

/// Parsed top-level chunk header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHead {
	/// Four-byte ASCII tag.
	pub tag: [u8; 4],
	/// Declared payload length in bytes.
	pub len: u32,
}

impl ChunkHead {
	/// Encoded header size: tag plus `u32` length.
	pub const SIZE: usize = 8;

	/// Parse a chunk header at the cursor position.
	pub fn parse(cursor: &mut Cursor<'_>) -> Result<Self> {
		let tag = cursor.read_tag()?;
		let len = cursor.read_u32_le()?;
		Ok(Self { tag, len })
	}

	/// Classify the tag.
	pub fn kind(&self) -> ChunkKind {
		ChunkKind::from_tag(self.tag)
	}
}

/// Chunk classification by tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkKind {
	/// `BKHD` bank header, not decoded.
	Header,
	/// `DIDX` media index table.
	Index,
	/// `DATA` embedded media blob store.
	Data,
	/// `HIRC` object hierarchy.
	Hierarchy,
	/// `STID` string-id table, not decoded.
	StringIds,
	/// Any other tag.
	Unknown([u8; 4]),
}

impl ChunkKind {
	/// Map a raw tag onto a chunk kind.
	pub fn from_tag(tag: [u8; 4]) -> Self {
		match &tag {
			b"BKHD" => Self::Header,
			b"DIDX" => Self::Index,
			b"DATA" => Self::Data,
			b"HIRC" => Self::Hierarchy,
			b"STID" => Self::StringIds,
			_ => Self::Unknown(tag),
		}
	}
}

impl fmt::Display for ChunkKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Header => f.write_str("BKHD"),
			Self::Index => f.write_str("DIDX"),
			Self::Data => f.write_str("DATA"),
			Self::Hierarchy => f.write_str("HIRC"),
			Self::StringIds => f.write_str("STID"),
			Self::Unknown(tag) => f.write_str(&render_tag(*tag)),
		}
	}
}

/// Render tag bytes as a printable label, replacing non-printables with `.`.
pub fn render_tag(tag: [u8; 4]) -> String {
	tag.iter()
		.map(|byte| if byte.is_ascii_graphic() || *byte == b' ' { char::from(*byte) } else { '.' })
		.collect()
}

/// One top-level chunk borrowed from the bank bytes.
#[derive(Debug, Clone, Copy)]
pub struct Chunk<'a> {
	/// Parsed header.
	pub head: ChunkHead,
	/// Payload bytes, exactly `head.len` long.
	pub payload: &'a [u8],
	/// Offset of the chunk header in the bank bytes.
	pub file_offset: usize,
}

impl Chunk<'_> {
	/// Classify this chunk by tag.
	pub fn kind(&self) -> ChunkKind {
		self.head.kind()
	}

	/// Offset one past the payload, where the next header starts.
	pub fn end_offset(&self) -> usize {
		self.file_offset + ChunkHead::SIZE + self.payload.len()
	}
}

/// Iterator over top-level chunks.
///
/// Each step moves to `payload start + declared length`; decoders only ever
/// see the payload slice, so what they consume never shifts the next header.
pub struct ChunkIter<'a> {
	cursor: Cursor<'a>,
	done: bool,
}

impl<'a> ChunkIter<'a> {
	/// Start iterating at offset 0 of `bytes`.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self {
			cursor: Cursor::new(bytes),
			done: false,
		}
	}

	/// Current offset into the bank bytes.
	pub fn pos(&self) -> usize {
		self.cursor.pos()
	}
}

impl<'a> Iterator for ChunkIter<'a> {
	type Item = Result<Chunk<'a>>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.done {
			return None;
		}

		if self.cursor.remaining() == 0 {
			self.done = true;
			return None;
		}

		let file_offset = self.cursor.pos();
		let head = match ChunkHead::parse(&mut self.cursor) {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		let rem = self.cursor.remaining();
		let payload_len = head.len as usize;
		if payload_len > rem {
			self.done = true;
			return Some(Err(BnkError::ChunkLenOutOfRange {
				tag: head.tag,
				at: file_offset,
				len: head.len,
				rem,
			}));
		}

		let payload = match self.cursor.read_exact(payload_len) {
			Ok(value) => value,
			Err(err) => {
				self.done = true;
				return Some(Err(err));
			}
		};

		Some(Ok(Chunk { head, payload, file_offset }))
	}
}
