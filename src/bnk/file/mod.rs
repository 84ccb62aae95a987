use std::fmt;
use std::fs;
use std::path::Path;

use crate::bnk::{BnkError, ChunkHead, ChunkIter, ChunkKind, DataSection, DidxSection, HircSection, Result, resolve_event_sources};

/// Decoder knobs.
#[derive(Debug, Clone)]
pub struct DecodeOptions {
	/// Reject a `DIDX` length that is not a multiple of 12 instead of dropping the partial entry.
	pub strict_index_len: bool,
	/// Fail on a hierarchy record whose body reads past its entry length
	/// instead of skipping that record.
	pub strict_hirc_bodies: bool,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			strict_index_len: true,
			strict_hirc_bodies: false,
		}
	}
}

/// Kinds of decoded sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
	/// `DIDX` media index.
	Index,
	/// `DATA` blob store.
	Data,
	/// `HIRC` object hierarchy.
	Hierarchy,
}

impl fmt::Display for SectionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Index => "DIDX",
			Self::Data => "DATA",
			Self::Hierarchy => "HIRC",
		})
	}
}

/// One decoded section.
#[derive(Debug, Clone)]
pub enum Section {
	/// Media index.
	Index(DidxSection),
	/// Embedded media.
	Data(DataSection),
	/// Object hierarchy.
	Hierarchy(HircSection),
}

impl Section {
	/// Kind of this section.
	pub fn kind(&self) -> SectionKind {
		match self {
			Self::Index(_) => SectionKind::Index,
			Self::Data(_) => SectionKind::Data,
			Self::Hierarchy(_) => SectionKind::Hierarchy,
		}
	}
}

/// Decoded bank: chunk layout plus decoded sections in stream order.
#[derive(Debug, Clone)]
pub struct BnkFile {
	/// Every chunk header with its file offset, decoded or not.
	pub chunks: Vec<(usize, ChunkHead)>,
	/// Decoded sections in stream order.
	pub sections: Vec<Section>,
}

impl BnkFile {
	/// Read and decode a bank from disk.
	pub fn open(path: impl AsRef<Path>, options: &DecodeOptions) -> Result<Self> {
		let bytes = fs::read(path)?;
		Self::parse(&bytes, options)
	}

	/// Decode bank bytes in one pass.
	///
	/// The index section must precede the blob section, since blobs are
	/// sliced with the index ranges.
	pub fn parse(bytes: &[u8], options: &DecodeOptions) -> Result<Self> {
		let mut chunks = Vec::new();
		let mut sections = Vec::new();

		for chunk in ChunkIter::new(bytes) {
			let chunk = chunk?;
			chunks.push((chunk.file_offset, chunk.head));

			let kind = chunk.kind();
			tracing::debug!(tag = %kind, offset = chunk.file_offset, len = chunk.head.len, "chunk");

			let section = match kind {
				ChunkKind::Index => Section::Index(DidxSection::parse(chunk.payload, options.strict_index_len)?),
				ChunkKind::Data => {
					let didx = first_index(&sections).ok_or(BnkError::MissingSection { kind: SectionKind::Index })?;
					Section::Data(DataSection::parse(chunk.payload, didx)?)
				}
				ChunkKind::Hierarchy => Section::Hierarchy(HircSection::parse(chunk.payload, options.strict_hirc_bodies)?),
				ChunkKind::Header | ChunkKind::StringIds => continue,
				ChunkKind::Unknown(_) => {
					tracing::warn!(tag = %kind, offset = chunk.file_offset, len = chunk.head.len, "skipping unknown chunk");
					continue;
				}
			};
			sections.push(section);
		}

		Ok(Self { chunks, sections })
	}

	/// First decoded section of `kind`.
	pub fn section(&self, kind: SectionKind) -> Option<&Section> {
		self.sections.iter().find(|section| section.kind() == kind)
	}

	/// First decoded media index, if any.
	pub fn didx(&self) -> Option<&DidxSection> {
		first_index(&self.sections)
	}

	/// First decoded blob store, if any.
	pub fn data(&self) -> Option<&DataSection> {
		match self.section(SectionKind::Data)? {
			Section::Data(data) => Some(data),
			_ => None,
		}
	}

	/// First decoded hierarchy, if any.
	pub fn hirc(&self) -> Option<&HircSection> {
		match self.section(SectionKind::Hierarchy)? {
			Section::Hierarchy(hirc) => Some(hirc),
			_ => None,
		}
	}

	/// First decoded hierarchy, or `MissingSection`.
	pub fn require_hirc(&self) -> Result<&HircSection> {
		self.hirc().ok_or(BnkError::MissingSection { kind: SectionKind::Hierarchy })
	}

	/// Sorted source ids reachable from `event_id`.
	pub fn resolve_event_sources(&self, event_id: u32) -> Result<Vec<u32>> {
		Ok(resolve_event_sources(self.require_hirc()?, event_id))
	}
}

fn first_index(sections: &[Section]) -> Option<&DidxSection> {
	sections.iter().find_map(|section| match section {
		Section::Index(didx) => Some(didx),
		_ => None,
	})
}
