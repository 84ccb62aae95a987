use std::path::PathBuf;

use bnkdoc::bnk::{BnkFile, DecodeOptions, Result, SourceHit, trace_event_sources};

use crate::cmd::util::{emit_json, parse_id};

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Event id (decimal or 0x hex).
	#[arg(long)]
	pub event: String,
	/// Collapse repeated source ids.
	#[arg(long)]
	pub dedup: bool,
	/// Also print the event/action/container/sound hop of every hit.
	#[arg(long)]
	pub trace: bool,
	#[arg(long)]
	pub json: bool,
}

/// Resolve and print the source ids reachable from one event.
pub fn run(args: Args, options: &DecodeOptions) -> Result<()> {
	let Args {
		path,
		event,
		dedup,
		trace,
		json,
	} = args;

	let event_id = parse_id(&event)?;
	let bank = BnkFile::open(&path, options)?;
	let hits = trace_event_sources(bank.require_hirc()?, event_id);
	let sources = collect_sources(&hits, dedup);

	if json {
		let payload = ResolveJson {
			event: event_id,
			sources,
			trace: trace.then(|| hits.iter().map(HitJson::from).collect()),
		};
		return emit_json(&payload);
	}

	if trace {
		println!("event\taction\tcontainer\tsound\tsource");
		for hit in &hits {
			println!("{}\t{}\t{}\t{}\t{}", hit.event, hit.action, hit.container, hit.sound, hit.source);
		}
		println!();
	}

	for source in sources {
		println!("{source}");
	}

	Ok(())
}

fn collect_sources(hits: &[SourceHit], dedup: bool) -> Vec<u32> {
	let mut out: Vec<u32> = hits.iter().map(|hit| hit.source).collect();
	out.sort_unstable();
	if dedup {
		out.dedup();
	}
	out
}

#[derive(serde::Serialize)]
struct HitJson {
	action: u32,
	container: u32,
	sound: u32,
	source: u32,
}

impl From<&SourceHit> for HitJson {
	fn from(hit: &SourceHit) -> Self {
		Self {
			action: hit.action,
			container: hit.container,
			sound: hit.sound,
			source: hit.source,
		}
	}
}

#[derive(serde::Serialize)]
struct ResolveJson {
	event: u32,
	sources: Vec<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	trace: Option<Vec<HitJson>>,
}
