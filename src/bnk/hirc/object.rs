use serde::Serialize;

use crate::bnk::{Cursor, HircKind, Result, skip_node_base_params};

/// One decoded hierarchy record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HircObject {
	/// Object id. Not unique per kind.
	pub id: u32,
	/// Kind-specific fields.
	#[serde(flatten)]
	pub body: HircBody,
}

impl HircObject {
	/// Kind of this record.
	pub fn kind(&self) -> HircKind {
		self.body.kind()
	}
}

/// Kind-specific record fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum HircBody {
	/// State property overrides.
	State(StateBody),
	/// Playable sound leaf.
	Sound(SoundBody),
	/// Action targeting another object.
	Action(ActionBody),
	/// Event listing action ids.
	Event(EventBody),
	/// Random/sequence container.
	RanSeqCntr(RanSeqCntrBody),
	/// Switch container.
	SwitchCntr(SwitchCntrBody),
	/// Music segment.
	MusicSegment(MusicContainerBody),
	/// Music track.
	MusicTrack(MusicTrackBody),
	/// Music switch container.
	MusicSwitchCntr(MusicContainerBody),
	/// Music random/sequence container.
	MusicRanSeqCntr(MusicContainerBody),
}

/// One state property override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StateProp {
	/// Property id.
	pub id: u16,
	/// Property value.
	pub value: f32,
}

/// State record fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StateBody {
	/// Properties in file order.
	pub props: Vec<StateProp>,
}

/// Sound record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SoundBody {
	/// Audio (plugin) id.
	pub audio_id: u32,
	/// Media source id.
	pub source_id: u32,
}

/// Action record fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionBody {
	/// Raw action type byte.
	pub action_type: u8,
	/// Target object id, 0 when unset.
	pub target_id: u32,
}

/// Event record fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EventBody {
	/// Action ids in file order.
	pub actions: Vec<u32>,
}

/// Random/sequence container fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RanSeqCntrBody {
	/// Child object ids in file order.
	pub children: Vec<u32>,
}

/// Switch container fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SwitchCntrBody {
	/// Group type byte (switch or state).
	pub group_type: u8,
	/// Switch/state group id.
	pub group_id: u32,
	/// Default switch child.
	pub default_child: u32,
	/// Continuous validation flag.
	pub continuous_validation: bool,
	/// Switch group ids in file order.
	pub groups: Vec<u32>,
}

/// Shared fields of music segments and music containers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MusicContainerBody {
	/// Child object ids in file order.
	pub children: Vec<u32>,
}

/// Music track fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MusicTrackBody {
	/// Media source ids in file order.
	pub sources: Vec<u32>,
}

impl HircBody {
	/// Kind of this body.
	pub fn kind(&self) -> HircKind {
		match self {
			Self::State(_) => HircKind::State,
			Self::Sound(_) => HircKind::Sound,
			Self::Action(_) => HircKind::Action,
			Self::Event(_) => HircKind::Event,
			Self::RanSeqCntr(_) => HircKind::RanSeqCntr,
			Self::SwitchCntr(_) => HircKind::SwitchCntr,
			Self::MusicSegment(_) => HircKind::MusicSegment,
			Self::MusicTrack(_) => HircKind::MusicTrack,
			Self::MusicSwitchCntr(_) => HircKind::MusicSwitchCntr,
			Self::MusicRanSeqCntr(_) => HircKind::MusicRanSeqCntr,
		}
	}

	/// Object ids this record refers to, in file order.
	pub fn refs(&self) -> Vec<u32> {
		match self {
			Self::State(_) | Self::Sound(_) => Vec::new(),
			Self::Action(body) => vec![body.target_id],
			Self::Event(body) => body.actions.clone(),
			Self::RanSeqCntr(body) => body.children.clone(),
			Self::SwitchCntr(body) => body.groups.clone(),
			Self::MusicSegment(body) | Self::MusicSwitchCntr(body) | Self::MusicRanSeqCntr(body) => body.children.clone(),
			Self::MusicTrack(body) => body.sources.clone(),
		}
	}

	/// Decode the body that follows the id of an entry of `kind`.
	///
	/// Returns `None` for kinds without a body decoder.
	pub fn decode(kind: HircKind, cursor: &mut Cursor<'_>) -> Result<Option<Self>> {
		let body = match kind {
			HircKind::State => Self::State(decode_state(cursor)?),
			HircKind::Sound => {
				cursor.skip(1)?;
				Self::Sound(SoundBody {
					audio_id: cursor.read_u32_le()?,
					source_id: cursor.read_u32_le()?,
				})
			}
			HircKind::Action => {
				cursor.skip(1)?;
				Self::Action(ActionBody {
					action_type: cursor.read_u8()?,
					target_id: cursor.read_u32_le()?,
				})
			}
			HircKind::Event => {
				let count = usize::from(cursor.read_u8()?);
				Self::Event(EventBody {
					actions: read_ids(cursor, count)?,
				})
			}
			HircKind::RanSeqCntr => {
				skip_node_base_params(cursor)?;
				// loop and transition settings
				cursor.skip(24)?;
				let count = cursor.read_u32_le()? as usize;
				Self::RanSeqCntr(RanSeqCntrBody {
					children: read_ids(cursor, count)?,
				})
			}
			HircKind::SwitchCntr => Self::SwitchCntr(decode_switch(cursor)?),
			HircKind::MusicSegment => Self::MusicSegment(decode_music_container(cursor)?),
			HircKind::MusicSwitchCntr => Self::MusicSwitchCntr(decode_music_container(cursor)?),
			HircKind::MusicRanSeqCntr => Self::MusicRanSeqCntr(decode_music_container(cursor)?),
			HircKind::MusicTrack => {
				cursor.skip(1)?;
				let count = cursor.read_u32_le()? as usize;
				let mut sources = Vec::with_capacity(count.min(cursor.remaining() / 9));
				for _ in 0..count {
					cursor.skip(5)?;
					sources.push(cursor.read_u32_le()?);
				}
				Self::MusicTrack(MusicTrackBody { sources })
			}
			_ => return Ok(None),
		};

		Ok(Some(body))
	}
}

fn decode_state(cursor: &mut Cursor<'_>) -> Result<StateBody> {
	let count = usize::from(cursor.read_u16_le()?);
	let mut ids = Vec::with_capacity(count);
	for _ in 0..count {
		ids.push(cursor.read_u16_le()?);
	}

	let mut props = Vec::with_capacity(count);
	for id in ids {
		props.push(StateProp {
			id,
			value: cursor.read_f32_le()?,
		});
	}

	Ok(StateBody { props })
}

fn decode_switch(cursor: &mut Cursor<'_>) -> Result<SwitchCntrBody> {
	skip_node_base_params(cursor)?;

	let group_type = cursor.read_u8()?;
	let group_id = cursor.read_u32_le()?;
	let default_child = cursor.read_u32_le()?;
	let continuous_validation = cursor.read_bool()?;
	let count = cursor.read_u32_le()? as usize;

	Ok(SwitchCntrBody {
		group_type,
		group_id,
		default_child,
		continuous_validation,
		groups: read_ids(cursor, count)?,
	})
}

fn decode_music_container(cursor: &mut Cursor<'_>) -> Result<MusicContainerBody> {
	cursor.skip(1)?;
	skip_node_base_params(cursor)?;
	let count = cursor.read_u32_le()? as usize;
	Ok(MusicContainerBody {
		children: read_ids(cursor, count)?,
	})
}

fn read_ids(cursor: &mut Cursor<'_>, count: usize) -> Result<Vec<u32>> {
	let mut out = Vec::with_capacity(count.min(cursor.remaining() / 4));
	for _ in 0..count {
		out.push(cursor.read_u32_le()?);
	}
	Ok(out)
}
