use std::fmt;

/// Hierarchy entry kind, keyed by the one-byte type tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HircKind {
	/// Tag 1.
	State,
	/// Tag 2.
	Sound,
	/// Tag 3.
	Action,
	/// Tag 4.
	Event,
	/// Tag 5, random/sequence container.
	RanSeqCntr,
	/// Tag 6.
	SwitchCntr,
	/// Tag 7.
	ActorMixer,
	/// Tag 8.
	AudioBus,
	/// Tag 9.
	BlendCntr,
	/// Tag 10.
	MusicSegment,
	/// Tag 11.
	MusicTrack,
	/// Tag 12.
	MusicSwitchCntr,
	/// Tag 13.
	MusicRanSeqCntr,
	/// Tag 14.
	Attenuation,
	/// Tag 15.
	DialogueEvent,
	/// Tag 16.
	MotionBus,
	/// Tag 17.
	MotionFx,
	/// Tag 18.
	Effect,
	/// Tag 19, unnamed.
	Reserved19,
	/// Tag 20.
	AuxBus,
	/// Any tag outside the table above.
	Unrecognized(u8),
}

const NAMED: [(u8, HircKind, &str); 20] = [
	(1, HircKind::State, "State"),
	(2, HircKind::Sound, "Sound"),
	(3, HircKind::Action, "Action"),
	(4, HircKind::Event, "Event"),
	(5, HircKind::RanSeqCntr, "RanSeqCntr"),
	(6, HircKind::SwitchCntr, "SwitchCntr"),
	(7, HircKind::ActorMixer, "ActorMixer"),
	(8, HircKind::AudioBus, "AudioBus"),
	(9, HircKind::BlendCntr, "BlendCntr"),
	(10, HircKind::MusicSegment, "MusicSegment"),
	(11, HircKind::MusicTrack, "MusicTrack"),
	(12, HircKind::MusicSwitchCntr, "MusicSwitchCntr"),
	(13, HircKind::MusicRanSeqCntr, "MusicRanSeqCntr"),
	(14, HircKind::Attenuation, "Attenuation"),
	(15, HircKind::DialogueEvent, "DialogueEvent"),
	(16, HircKind::MotionBus, "MotionBus"),
	(17, HircKind::MotionFx, "MotionFx"),
	(18, HircKind::Effect, "Effect"),
	(19, HircKind::Reserved19, "Reserved19"),
	(20, HircKind::AuxBus, "AuxBus"),
];

impl HircKind {
	/// Map a raw type tag onto a kind.
	pub fn from_tag(tag: u8) -> Self {
		NAMED
			.iter()
			.find(|(raw, _, _)| *raw == tag)
			.map(|(_, kind, _)| *kind)
			.unwrap_or(Self::Unrecognized(tag))
	}

	/// Raw type tag for this kind.
	pub fn tag(self) -> u8 {
		if let Self::Unrecognized(tag) = self {
			return tag;
		}
		NAMED.iter().find(|(_, kind, _)| *kind == self).map(|(raw, _, _)| *raw).unwrap_or(0)
	}

	/// Stable display name, `Unrecognized` for tags outside the table.
	pub fn name(self) -> &'static str {
		NAMED
			.iter()
			.find(|(_, kind, _)| *kind == self)
			.map(|(_, _, name)| *name)
			.unwrap_or("Unrecognized")
	}

	/// Parse a kind name, case-insensitively.
	pub fn from_name(name: &str) -> Option<Self> {
		NAMED
			.iter()
			.find(|(_, _, candidate)| candidate.eq_ignore_ascii_case(name))
			.map(|(_, kind, _)| *kind)
	}

	/// Whether entries of this kind have a body decoder and produce records.
	pub fn has_body(self) -> bool {
		matches!(
			self,
			Self::State
				| Self::Sound
				| Self::Action
				| Self::Event
				| Self::RanSeqCntr
				| Self::SwitchCntr
				| Self::MusicSegment
				| Self::MusicTrack
				| Self::MusicSwitchCntr
				| Self::MusicRanSeqCntr
		)
	}
}

impl fmt::Display for HircKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unrecognized(tag) => write!(f, "Unrecognized({tag})"),
			other => f.write_str(other.name()),
		}
	}
}
