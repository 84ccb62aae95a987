use std::path::PathBuf;

use bnkdoc::bnk::{BnkFile, DecodeOptions, HircKind, Result, render_tag};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print chunk layout and per-section summaries.
pub fn run(args: Args, options: &DecodeOptions) -> Result<()> {
	let Args { path, json } = args;

	let bank = BnkFile::open(&path, options)?;
	let payload = build_info(&path, &bank);

	if json {
		return emit_json(&payload);
	}

	println!("path: {}", payload.path);
	println!("chunks: {}", payload.chunks.len());
	for chunk in &payload.chunks {
		println!("  {}\toffset={}\tlen={}", chunk.tag, chunk.offset, chunk.len);
	}
	println!("didx_entries: {}", opt_label(payload.didx_entries));
	println!("data_blobs: {}", opt_label(payload.data_blobs));
	println!("data_bytes: {}", opt_label(payload.data_bytes));
	println!("hirc_objects: {}", opt_label(payload.hirc_objects));

	if !payload.kinds.is_empty() {
		println!("kinds:");
		for item in &payload.kinds {
			println!("  {}: {}", item.kind, item.count);
		}
	}
	if !payload.skipped.is_empty() {
		println!("skipped:");
		for item in &payload.skipped {
			println!("  {}: {}", item.kind, item.count);
		}
	}

	Ok(())
}

fn build_info(path: &std::path::Path, bank: &BnkFile) -> InfoJson {
	let hirc = bank.hirc();

	InfoJson {
		path: path.display().to_string(),
		chunks: bank
			.chunks
			.iter()
			.map(|(offset, head)| ChunkJson {
				tag: render_tag(head.tag),
				offset: *offset,
				len: head.len,
			})
			.collect(),
		didx_entries: bank.didx().map(|didx| didx.entries.len()),
		data_blobs: bank.data().map(|data| data.blobs.len()),
		data_bytes: bank.data().map(|data| data.total_len()),
		hirc_objects: hirc.map(|hirc| hirc.objects.len()),
		kinds: hirc
			.map(|hirc| {
				hirc.kind_counts()
					.into_iter()
					.map(|(kind, count)| KindCountJson {
						kind: kind.to_string(),
						tag: kind.tag(),
						count,
					})
					.collect()
			})
			.unwrap_or_default(),
		skipped: hirc
			.map(|hirc| {
				hirc.skipped
					.iter()
					.map(|(tag, count)| KindCountJson {
						kind: HircKind::from_tag(*tag).to_string(),
						tag: *tag,
						count: *count,
					})
					.collect()
			})
			.unwrap_or_default(),
	}
}

fn opt_label(value: Option<usize>) -> String {
	value.map(|item| item.to_string()).unwrap_or_else(|| "-".to_owned())
}

#[derive(serde::Serialize)]
struct ChunkJson {
	tag: String,
	offset: usize,
	len: u32,
}

#[derive(serde::Serialize)]
struct KindCountJson {
	kind: String,
	tag: u8,
	count: u32,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	chunks: Vec<ChunkJson>,
	didx_entries: Option<usize>,
	data_blobs: Option<usize>,
	data_bytes: Option<usize>,
	hirc_objects: Option<usize>,
	kinds: Vec<KindCountJson>,
	skipped: Vec<KindCountJson>,
}
