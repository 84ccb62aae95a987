use thiserror::Error;

use crate::bnk::SectionKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, BnkError>;

/// Errors produced while reading, decoding, and querying SoundBank data.
#[derive(Debug, Error)]
pub enum BnkError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Chunk payload would exceed remaining file data.
	#[error("chunk {tag:?} length {len} at offset {at} exceeds remaining {rem}")]
	ChunkLenOutOfRange {
		/// Chunk tag bytes.
		tag: [u8; 4],
		/// Chunk header file offset.
		at: usize,
		/// Declared payload length.
		len: u32,
		/// Remaining bytes after the header.
		rem: usize,
	},
	/// Index table length is not a whole number of 12-byte entries.
	#[error("DIDX length {len} is not a multiple of 12")]
	DidxLenMisaligned {
		/// Declared section length.
		len: usize,
	},
	/// A section that another decoder or query depends on was not decoded.
	#[error("required section missing: {kind}")]
	MissingSection {
		/// Kind of the missing section.
		kind: SectionKind,
	},
	/// Index entry points outside the blob store payload.
	#[error("blob {id} range offset={offset} len={len} exceeds DATA payload of {payload} bytes")]
	BlobOutOfRange {
		/// Media id from the index entry.
		id: u32,
		/// Declared offset inside the blob payload.
		offset: u32,
		/// Declared blob length.
		len: u32,
		/// Actual blob payload length.
		payload: usize,
	},
	/// Hierarchy entry length runs past the hierarchy payload.
	#[error("HIRC entry {index} (type {type_tag}) length {len} at offset {at} exceeds remaining {rem}")]
	HircEntryLenOutOfRange {
		/// Entry position in the hierarchy section.
		index: u32,
		/// Raw type tag.
		type_tag: u8,
		/// Offset of the entry header inside the section payload.
		at: usize,
		/// Declared entry length.
		len: u32,
		/// Remaining payload bytes after the header.
		rem: usize,
	},
	/// A record body read past its entry's declared length.
	#[error("HIRC entry {index} (type {type_tag}, id {id}) overruns its length: need {need} bytes, remaining {rem}")]
	HircEntryOverrun {
		/// Entry position in the hierarchy section.
		index: u32,
		/// Raw type tag.
		type_tag: u8,
		/// Record id, or 0 when the id itself could not be read.
		id: u32,
		/// Requested bytes at the failing read.
		need: usize,
		/// Bytes left in the entry.
		rem: usize,
	},
	/// Identifier argument was not a decimal or `0x` hex `u32`.
	#[error("invalid id: {value}")]
	InvalidId {
		/// User-provided literal.
		value: String,
	},
	/// Hierarchy kind argument did not name a known kind.
	#[error("invalid hierarchy kind: {value}")]
	InvalidKind {
		/// User-provided kind name.
		value: String,
	},
}
