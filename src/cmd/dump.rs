use std::path::PathBuf;

use bnkdoc::bnk::{BnkFile, DecodeOptions, DidxEntry, HircObject, Result, Section, render_tag};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
}

/// Print every decoded section as one JSON document.
///
/// Blob payloads stay opaque and are reported by id and length only.
pub fn run(args: Args, options: &DecodeOptions) -> Result<()> {
	let Args { path } = args;

	let bank = BnkFile::open(&path, options)?;
	emit_json(&build_dump(&path, &bank))
}

fn build_dump<'a>(path: &std::path::Path, bank: &'a BnkFile) -> DumpJson<'a> {
	DumpJson {
		path: path.display().to_string(),
		chunks: bank.chunks.iter().map(|(_, head)| render_tag(head.tag)).collect(),
		sections: bank.sections.iter().map(section_json).collect(),
	}
}

fn section_json(section: &Section) -> SectionJson<'_> {
	match section {
		Section::Index(didx) => SectionJson::Didx { entries: &didx.entries },
		Section::Data(data) => SectionJson::Data {
			blobs: data.blobs.iter().map(|blob| BlobJson { id: blob.id, len: blob.len() }).collect(),
		},
		Section::Hierarchy(hirc) => SectionJson::Hirc {
			objects: &hirc.objects,
			skipped: hirc.skipped.iter().map(|(tag, count)| SkippedJson { tag: *tag, count: *count }).collect(),
		},
	}
}

#[derive(serde::Serialize)]
struct BlobJson {
	id: u32,
	len: usize,
}

#[derive(serde::Serialize)]
struct SkippedJson {
	tag: u8,
	count: u32,
}

#[derive(serde::Serialize)]
#[serde(tag = "section", rename_all = "lowercase")]
enum SectionJson<'a> {
	Didx { entries: &'a [DidxEntry] },
	Data { blobs: Vec<BlobJson> },
	Hirc { objects: &'a [HircObject], skipped: Vec<SkippedJson> },
}

#[derive(serde::Serialize)]
struct DumpJson<'a> {
	path: String,
	chunks: Vec<String>,
	sections: Vec<SectionJson<'a>>,
}
