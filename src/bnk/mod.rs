mod bytes;
mod chunk;
mod data;
mod didx;
mod error;
mod file;
mod hirc;
mod resolve;

/// Bounded little-endian byte cursor.
pub use bytes::Cursor;
/// Top-level chunk header, classification, and iterator types.
pub use chunk::{Chunk, ChunkHead, ChunkIter, ChunkKind, render_tag};
/// Embedded media blob store.
pub use data::{Blob, DataSection};
/// Media index table.
pub use didx::{DidxEntry, DidxSection};
/// Error and result aliases.
pub use error::{BnkError, Result};
/// Bank file abstraction, decode options, and section lookup.
pub use file::{BnkFile, DecodeOptions, Section, SectionKind};
/// Hierarchy records, their per-kind bodies, and the `(kind, id)` index.
pub use hirc::{
	ActionBody, EventBody, HircBody, HircIndex, HircKind, HircObject, HircSection, MusicContainerBody, MusicTrackBody, RanSeqCntrBody, SoundBody, StateBody, StateProp,
	SwitchCntrBody, skip_node_base_params,
};
/// Event-to-source resolution entry points.
pub use resolve::{PLAY_ACTION_TYPES, SourceHit, resolve_event_sources, trace_event_sources};
