use bnkdoc_testkit::{HircEntry, NodeParams, encode_hirc};

use crate::bnk::{
	ActionBody, BnkError, Cursor, EventBody, HircBody, HircKind, HircSection, MusicContainerBody, MusicTrackBody, RanSeqCntrBody, SoundBody, StateBody,
	StateProp, SwitchCntrBody, skip_node_base_params,
};

fn parse(entries: &[HircEntry]) -> HircSection {
	HircSection::parse(&encode_hirc(entries), false).expect("hirc parses")
}

#[test]
fn decodes_every_body_kind() {
	let params = NodeParams::default();
	let hirc = parse(&[
		HircEntry::state(10, &[(3, 0.5), (7, -2.0)]),
		HircEntry::sound(11, 0x0004_0001, 555),
		HircEntry::action(12, 4, 11),
		HircEntry::event(13, &[12, 12]),
		HircEntry::ran_seq(14, &[11]),
		HircEntry::switch(15, 1, 0xABCD, 11, true, &[11, 16]),
		HircEntry::music_container(10, 16, &params, &[17]),
		HircEntry::music_track(17, &[900, 901]),
		HircEntry::music_container(12, 18, &params, &[16]),
		HircEntry::music_container(13, 19, &params, &[16, 18]),
	]);

	let bodies: Vec<(u32, HircBody)> = hirc.objects.iter().map(|item| (item.id, item.body.clone())).collect();
	assert_eq!(
		bodies,
		vec![
			(
				10,
				HircBody::State(StateBody {
					props: vec![StateProp { id: 3, value: 0.5 }, StateProp { id: 7, value: -2.0 }],
				})
			),
			(
				11,
				HircBody::Sound(SoundBody {
					audio_id: 0x0004_0001,
					source_id: 555
				})
			),
			(12, HircBody::Action(ActionBody { action_type: 4, target_id: 11 })),
			(13, HircBody::Event(EventBody { actions: vec![12, 12] })),
			(14, HircBody::RanSeqCntr(RanSeqCntrBody { children: vec![11] })),
			(
				15,
				HircBody::SwitchCntr(SwitchCntrBody {
					group_type: 1,
					group_id: 0xABCD,
					default_child: 11,
					continuous_validation: true,
					groups: vec![11, 16],
				})
			),
			(16, HircBody::MusicSegment(MusicContainerBody { children: vec![17] })),
			(17, HircBody::MusicTrack(MusicTrackBody { sources: vec![900, 901] })),
			(18, HircBody::MusicSwitchCntr(MusicContainerBody { children: vec![16] })),
			(19, HircBody::MusicRanSeqCntr(MusicContainerBody { children: vec![16, 18] })),
		]
	);
	assert!(hirc.skipped.is_empty());
}

#[test]
fn unknown_tag_between_sounds_does_not_disturb_neighbours() {
	let hirc = parse(&[
		HircEntry::sound(1, 0, 100),
		HircEntry::raw(0xC8, 99, vec![0xFF; 37]),
		HircEntry::sound(2, 0, 200),
	]);

	assert_eq!(hirc.objects.len(), 2);
	assert_eq!(hirc.sounds(1).map(|item| item.source_id).collect::<Vec<_>>(), vec![100]);
	assert_eq!(hirc.sounds(2).map(|item| item.source_id).collect::<Vec<_>>(), vec![200]);
	assert_eq!(hirc.skipped.get(&0xC8), Some(&1));
}

#[test]
fn named_kinds_without_decoder_are_skipped() {
	let hirc = parse(&[
		HircEntry::raw(7, 1, vec![1, 2, 3]),
		HircEntry::raw(8, 2, Vec::new()),
		HircEntry::raw(20, 3, vec![0; 64]),
		HircEntry::raw(7, 4, vec![9]),
		HircEntry::event(5, &[]),
	]);

	assert_eq!(hirc.objects.len(), 1);
	assert_eq!(hirc.objects[0].kind(), HircKind::Event);
	assert_eq!(hirc.skipped.get(&7), Some(&2));
	assert_eq!(hirc.skipped.get(&8), Some(&1));
	assert_eq!(hirc.skipped.get(&20), Some(&1));
}

#[test]
fn trailing_entry_bytes_are_skipped_by_declared_length() {
	let hirc = parse(&[HircEntry::action(1, 1, 2).padded(13), HircEntry::sound(2, 3, 4).padded(1), HircEntry::event(3, &[1]).padded(200)]);

	assert_eq!(hirc.objects.len(), 3);
	assert_eq!(hirc.actions(1).next(), Some(&ActionBody { action_type: 1, target_id: 2 }));
	assert_eq!(hirc.sounds(2).next().map(|item| item.source_id), Some(4));
	assert_eq!(hirc.events(3).next().map(|item| item.actions.clone()), Some(vec![1]));
}

#[test]
fn duplicate_ids_are_all_kept_in_storage_order() {
	let hirc = parse(&[
		HircEntry::sound(7, 0, 1),
		HircEntry::action(7, 1, 0),
		HircEntry::sound(7, 0, 2),
		HircEntry::sound(8, 0, 3),
		HircEntry::sound(7, 0, 4),
	]);

	let sources: Vec<u32> = hirc.sounds(7).map(|item| item.source_id).collect();
	assert_eq!(sources, vec![1, 2, 4]);
	assert_eq!(hirc.index().positions(HircKind::Sound, 7), &[0, 2, 4]);
	assert_eq!(hirc.index().positions(HircKind::Action, 7), &[1]);
	assert!(hirc.index().positions(HircKind::Event, 7).is_empty());
	assert_eq!(hirc.kind_counts().get(&HircKind::Sound), Some(&4));
}

#[test]
fn body_overrun_skips_only_that_entry() {
	// switch container body cannot fit in 8 bytes
	let hirc = parse(&[
		HircEntry::event(1, &[2]),
		HircEntry::raw(6, 0x999, vec![0; 8]),
		HircEntry::action(2, 1, 3),
		HircEntry::sound(4, 0, 100),
	]);

	assert_eq!(hirc.objects.len(), 3);
	assert_eq!(hirc.skipped.get(&6), Some(&1));
	assert!(hirc.find(HircKind::SwitchCntr, 0x999).next().is_none());
	assert_eq!(hirc.actions(2).next(), Some(&ActionBody { action_type: 1, target_id: 3 }));
	assert_eq!(hirc.sounds(4).next().map(|item| item.source_id), Some(100));
}

#[test]
fn strict_bodies_report_overrun_with_entry_context() {
	// sound body needs 9 bytes after the id; give it 5
	let short = HircEntry::raw(2, 42, vec![0; 5]);
	let err = HircSection::parse(&encode_hirc(&[HircEntry::event(1, &[]), short]), true).expect_err("overrun");
	assert!(matches!(
		err,
		BnkError::HircEntryOverrun {
			index: 1,
			type_tag: 2,
			id: 42,
			need: 4,
			rem: 0
		}
	));
}

#[test]
fn entry_without_room_for_id_is_an_overrun() {
	let mut payload = 1_u32.to_le_bytes().to_vec();
	payload.push(2);
	payload.extend_from_slice(&2_u32.to_le_bytes());
	payload.extend_from_slice(&[0, 0]);

	let err = HircSection::parse(&payload, true).expect_err("id overrun");
	assert!(matches!(err, BnkError::HircEntryOverrun { index: 0, id: 0, .. }));

	let hirc = HircSection::parse(&payload, false).expect("lenient parse");
	assert!(hirc.objects.is_empty());
	assert_eq!(hirc.skipped.get(&2), Some(&1));
}

#[test]
fn entry_length_past_payload_is_fatal() {
	let mut payload = encode_hirc(&[HircEntry::sound(1, 0, 100)]);
	payload[0] = 2;
	payload.push(2);
	payload.extend_from_slice(&500_u32.to_le_bytes());
	payload.extend_from_slice(&[0; 8]);

	let err = HircSection::parse(&payload, false).expect_err("entry length out of range");
	assert!(matches!(
		err,
		BnkError::HircEntryLenOutOfRange {
			index: 1,
			type_tag: 2,
			len: 500,
			rem: 8,
			..
		}
	));
}

#[test]
fn truncated_entry_header_is_fatal() {
	let mut payload = encode_hirc(&[HircEntry::sound(1, 0, 100)]);
	payload[0] = 2;
	payload.extend_from_slice(&[2, 9, 0]);

	let err = HircSection::parse(&payload, false).expect_err("header truncated");
	assert!(matches!(err, BnkError::UnexpectedEof { .. }));
}

#[test]
fn decoding_is_deterministic() {
	let payload = encode_hirc(&[
		HircEntry::state(1, &[(1, 1.0)]),
		HircEntry::raw(99, 2, vec![1; 3]),
		HircEntry::ran_seq(3, &[4, 5]),
		HircEntry::sound(4, 1, 2),
	]);

	let first = HircSection::parse(&payload, false).expect("first parse");
	let second = HircSection::parse(&payload, false).expect("second parse");
	assert_eq!(first.objects, second.objects);
	assert_eq!(first.skipped, second.skipped);
}

#[test]
fn node_params_minimal_block_is_32_bytes() {
	let bytes = NodeParams::default().encode();
	assert_eq!(bytes.len(), 32);

	let mut cursor = Cursor::new(&bytes);
	skip_node_base_params(&mut cursor).expect("minimal block skips");
	assert_eq!(cursor.remaining(), 0);
}

#[test]
fn node_params_consume_exactly_the_flagged_blocks() {
	let shapes = [
		NodeParams {
			fx: 2,
			..NodeParams::default()
		},
		NodeParams {
			props: 3,
			ranged: 1,
			..NodeParams::default()
		},
		NodeParams {
			positioning: 0x02,
			..NodeParams::default()
		},
		NodeParams {
			positioning: 0x20,
			vertices: 2,
			playlist: 1,
			..NodeParams::default()
		},
		NodeParams {
			positioning: 0x40 | 0x02,
			vertices: 0,
			playlist: 3,
			..NodeParams::default()
		},
		NodeParams {
			positioning: 0x01 | 0x04 | 0x08 | 0x10 | 0x80,
			..NodeParams::default()
		},
		NodeParams {
			aux: 0x08,
			..NodeParams::default()
		},
		NodeParams {
			aux: 0x07,
			state_props: 2,
			..NodeParams::default()
		},
		NodeParams {
			state_groups: vec![0, 3, 1],
			rtpcs: vec![2, 0],
			..NodeParams::default()
		},
	];

	for shape in shapes {
		let mut bytes = shape.encode();
		let expected = bytes.len();
		bytes.extend_from_slice(&0xDEAD_BEEF_u32.to_le_bytes());

		let mut cursor = Cursor::new(&bytes);
		skip_node_base_params(&mut cursor).expect("block skips");
		assert_eq!(cursor.pos(), expected, "wrong consumption for {shape:?}");
		assert_eq!(cursor.read_u32_le().expect("sentinel"), 0xDEAD_BEEF);
	}
}

#[test]
fn containers_decode_children_after_flagged_node_params() {
	let params = NodeParams {
		fx: 1,
		positioning: 0x22,
		vertices: 1,
		playlist: 1,
		aux: 0x08,
		state_groups: vec![2],
		rtpcs: vec![1],
		..NodeParams::default()
	};
	let hirc = parse(&[
		HircEntry::ran_seq_with(1, &params, &[10, 11, 12]),
		HircEntry::music_container(13, 2, &params, &[20]),
	]);

	assert_eq!(hirc.ran_seq_cntrs(1).next().map(|item| item.children.clone()), Some(vec![10, 11, 12]));
	assert_eq!(hirc.objects[1].body, HircBody::MusicRanSeqCntr(MusicContainerBody { children: vec![20] }));
}

#[test]
fn kind_tags_round_trip_through_names() {
	for tag in 1..=20_u8 {
		let kind = HircKind::from_tag(tag);
		assert_eq!(kind.tag(), tag);
		assert_eq!(HircKind::from_name(kind.name()), Some(kind));
	}
	assert_eq!(HircKind::from_tag(0), HircKind::Unrecognized(0));
	assert_eq!(HircKind::from_tag(21).tag(), 21);
	assert_eq!(HircKind::from_name("ransEQcntr"), Some(HircKind::RanSeqCntr));
	assert_eq!(HircKind::from_name("Bogus"), None);
	assert_eq!(HircKind::Unrecognized(44).to_string(), "Unrecognized(44)");
}

#[test]
fn objects_serialize_with_kind_tag_and_flat_fields() {
	let hirc = parse(&[HircEntry::action(12, 4, 11), HircEntry::state(10, &[(3, 0.5)])]);

	let json = serde_json::to_value(&hirc.objects).expect("objects serialize");
	assert_eq!(
		json,
		serde_json::json!([
			{ "id": 12, "kind": "Action", "action_type": 4, "target_id": 11 },
			{ "id": 10, "kind": "State", "props": [{ "id": 3, "value": 0.5 }] },
		])
	);
}
