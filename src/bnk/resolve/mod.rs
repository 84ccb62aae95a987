use crate::bnk::HircSection;

/// Action type values that start playback of their target.
///
/// Kept as raw numbers: the bank format carries no names for them.
pub const PLAY_ACTION_TYPES: [u8; 2] = [1, 4];

/// One source reached from an event, with the ids of every hop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceHit {
	/// Event id the walk started from.
	pub event: u32,
	/// Action id referenced by the event.
	pub action: u32,
	/// Random/sequence container targeted by the action.
	pub container: u32,
	/// Sound id listed as a container child.
	pub sound: u32,
	/// Source id of that sound.
	pub source: u32,
}

/// Walk event → action → random/sequence container → sound and record every hit.
///
/// Hits come out in traversal order: matching records are visited in storage
/// order at every hop, and duplicate ids contribute once per matching record.
pub fn trace_event_sources(hirc: &HircSection, event_id: u32) -> Vec<SourceHit> {
	let mut hits = Vec::new();

	for event in hirc.events(event_id) {
		for &action_id in &event.actions {
			for action in hirc.actions(action_id) {
				if !PLAY_ACTION_TYPES.contains(&action.action_type) || action.target_id == 0 {
					continue;
				}

				for container in hirc.ran_seq_cntrs(action.target_id) {
					for &sound_id in &container.children {
						for sound in hirc.sounds(sound_id) {
							hits.push(SourceHit {
								event: event_id,
								action: action_id,
								container: action.target_id,
								sound: sound_id,
								source: sound.source_id,
							});
						}
					}
				}
			}
		}
	}

	tracing::debug!(event_id, hits = hits.len(), "traced event sources");
	hits
}

/// Source ids reachable from `event_id`, sorted ascending, duplicates kept.
pub fn resolve_event_sources(hirc: &HircSection, event_id: u32) -> Vec<u32> {
	let mut out: Vec<u32> = trace_event_sources(hirc, event_id).into_iter().map(|hit| hit.source).collect();
	out.sort_unstable();
	out
}
