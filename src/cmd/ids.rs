use std::path::PathBuf;

use bnkdoc::bnk::{BnkFile, DecodeOptions, HircBody, HircObject, Result};

use crate::cmd::util::{emit_json, id_hex, parse_id, parse_kind};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Keep only this kind (name such as `Sound`, or numeric tag).
	#[arg(long)]
	pub kind: Option<String>,
	/// Keep only records with this id (decimal or 0x hex).
	#[arg(long)]
	pub id: Option<String>,
	#[arg(long)]
	pub limit: Option<usize>,
	#[arg(long)]
	pub json: bool,
}

/// List decoded hierarchy records in storage order.
pub fn run(args: Args, options: &DecodeOptions) -> Result<()> {
	let Args { path, kind, id, limit, json } = args;

	let kind = kind.as_deref().map(parse_kind).transpose()?;
	let id = id.as_deref().map(parse_id).transpose()?;

	let bank = BnkFile::open(&path, options)?;
	let hirc = bank.require_hirc()?;

	let mut rows: Vec<(usize, &HircObject)> = hirc
		.objects
		.iter()
		.enumerate()
		.filter(|(_, object)| kind.is_none_or(|kind| object.kind() == kind))
		.filter(|(_, object)| id.is_none_or(|id| object.id == id))
		.collect();

	if let Some(max) = limit {
		rows.truncate(max);
	}

	if json {
		let payload: Vec<IdRowJson> = rows
			.iter()
			.map(|(pos, object)| IdRowJson {
				pos: *pos,
				kind: object.kind().to_string(),
				id: object.id,
				refs: object.body.refs(),
			})
			.collect();
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("records: {}", rows.len());
	println!("pos\tkind\tid\tid_hex\tsummary");
	for (pos, object) in rows {
		println!("{}\t{}\t{}\t{}\t{}", pos, object.kind(), object.id, id_hex(object.id), summarize(&object.body));
	}

	Ok(())
}

fn summarize(body: &HircBody) -> String {
	match body {
		HircBody::State(body) => format!("props={}", body.props.len()),
		HircBody::Sound(body) => format!("source={} audio={}", body.source_id, id_hex(body.audio_id)),
		HircBody::Action(body) => format!("type={} target={}", body.action_type, body.target_id),
		HircBody::Event(body) => format!("actions={}", join_ids(&body.actions)),
		HircBody::RanSeqCntr(body) => format!("children={}", join_ids(&body.children)),
		HircBody::SwitchCntr(body) => format!(
			"group_type={} group={} default={} continuous={} groups={}",
			body.group_type,
			body.group_id,
			body.default_child,
			body.continuous_validation,
			join_ids(&body.groups)
		),
		HircBody::MusicSegment(body) | HircBody::MusicSwitchCntr(body) | HircBody::MusicRanSeqCntr(body) => {
			format!("children={}", join_ids(&body.children))
		}
		HircBody::MusicTrack(body) => format!("sources={}", join_ids(&body.sources)),
	}
}

fn join_ids(ids: &[u32]) -> String {
	let parts: Vec<String> = ids.iter().map(u32::to_string).collect();
	format!("[{}]", parts.join(","))
}

#[derive(serde::Serialize)]
struct IdRowJson {
	pos: usize,
	kind: String,
	id: u32,
	refs: Vec<u32>,
}
