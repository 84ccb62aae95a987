//! Shared test helpers: byte-level SoundBank fixture synthesis.

use std::io::Write;
use std::process::Output;

use tempfile::NamedTempFile;

/// Byte used for every skipped field so misaligned reads surface quickly.
pub const FILLER: u8 = 0xEE;

/// Builder for a whole bank: a sequence of `{tag, len, payload}` chunks.
#[derive(Debug, Clone, Default)]
pub struct BankBuilder {
	chunks: Vec<([u8; 4], Vec<u8>)>,
}

impl BankBuilder {
	/// Start an empty bank.
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a chunk with an arbitrary tag and payload.
	pub fn chunk(mut self, tag: &[u8; 4], payload: Vec<u8>) -> Self {
		self.chunks.push((*tag, payload));
		self
	}

	/// Append a `BKHD` chunk with a version and bank id.
	pub fn header(self, version: u32, bank_id: u32) -> Self {
		let mut payload = Vec::new();
		payload.extend_from_slice(&version.to_le_bytes());
		payload.extend_from_slice(&bank_id.to_le_bytes());
		payload.extend_from_slice(&[0; 8]);
		self.chunk(b"BKHD", payload)
	}

	/// Append a `DIDX` chunk from `(id, offset, len)` triples.
	pub fn didx(self, entries: &[(u32, u32, u32)]) -> Self {
		let mut payload = Vec::new();
		for (id, offset, len) in entries {
			payload.extend_from_slice(&id.to_le_bytes());
			payload.extend_from_slice(&offset.to_le_bytes());
			payload.extend_from_slice(&len.to_le_bytes());
		}
		self.chunk(b"DIDX", payload)
	}

	/// Append a `DATA` chunk.
	pub fn data(self, payload: Vec<u8>) -> Self {
		self.chunk(b"DATA", payload)
	}

	/// Append a `HIRC` chunk holding `entries`.
	pub fn hirc(self, entries: &[HircEntry]) -> Self {
		self.chunk(b"HIRC", encode_hirc(entries))
	}

	/// Serialize all chunks.
	pub fn build(&self) -> Vec<u8> {
		let mut out = Vec::new();
		for (tag, payload) in &self.chunks {
			out.extend_from_slice(tag);
			out.extend_from_slice(&(payload.len() as u32).to_le_bytes());
			out.extend_from_slice(payload);
		}
		out
	}
}

/// Encode a `HIRC` payload: `u32` count followed by entries.
pub fn encode_hirc(entries: &[HircEntry]) -> Vec<u8> {
	let mut out = Vec::new();
	out.extend_from_slice(&(entries.len() as u32).to_le_bytes());
	for entry in entries {
		out.extend(entry.encode());
	}
	out
}

/// One hierarchy entry as raw bytes.
#[derive(Debug, Clone)]
pub struct HircEntry {
	/// Raw type tag.
	pub type_tag: u8,
	/// Object id.
	pub id: u32,
	/// Body bytes after the id.
	pub body: Vec<u8>,
}

impl HircEntry {
	/// Entry with an arbitrary tag and body.
	pub fn raw(type_tag: u8, id: u32, body: Vec<u8>) -> Self {
		Self { type_tag, id, body }
	}

	/// State entry from `(prop id, value)` pairs.
	pub fn state(id: u32, props: &[(u16, f32)]) -> Self {
		let mut body = Vec::new();
		body.extend_from_slice(&(props.len() as u16).to_le_bytes());
		for (prop, _) in props {
			body.extend_from_slice(&prop.to_le_bytes());
		}
		for (_, value) in props {
			body.extend_from_slice(&value.to_le_bytes());
		}
		Self::raw(1, id, body)
	}

	/// Sound entry.
	pub fn sound(id: u32, audio_id: u32, source_id: u32) -> Self {
		let mut body = vec![FILLER];
		body.extend_from_slice(&audio_id.to_le_bytes());
		body.extend_from_slice(&source_id.to_le_bytes());
		Self::raw(2, id, body)
	}

	/// Action entry.
	pub fn action(id: u32, action_type: u8, target_id: u32) -> Self {
		let mut body = vec![FILLER, action_type];
		body.extend_from_slice(&target_id.to_le_bytes());
		Self::raw(3, id, body)
	}

	/// Event entry listing action ids.
	pub fn event(id: u32, actions: &[u32]) -> Self {
		let mut body = vec![actions.len() as u8];
		push_ids(&mut body, actions);
		Self::raw(4, id, body)
	}

	/// Random/sequence container with minimal node parameters.
	pub fn ran_seq(id: u32, children: &[u32]) -> Self {
		Self::ran_seq_with(id, &NodeParams::default(), children)
	}

	/// Random/sequence container with explicit node parameters.
	pub fn ran_seq_with(id: u32, params: &NodeParams, children: &[u32]) -> Self {
		let mut body = params.encode();
		body.extend_from_slice(&[FILLER; 24]);
		body.extend_from_slice(&(children.len() as u32).to_le_bytes());
		push_ids(&mut body, children);
		Self::raw(5, id, body)
	}

	/// Switch container with minimal node parameters.
	pub fn switch(id: u32, group_type: u8, group_id: u32, default_child: u32, continuous: bool, groups: &[u32]) -> Self {
		let mut body = NodeParams::default().encode();
		body.push(group_type);
		body.extend_from_slice(&group_id.to_le_bytes());
		body.extend_from_slice(&default_child.to_le_bytes());
		body.push(u8::from(continuous));
		body.extend_from_slice(&(groups.len() as u32).to_le_bytes());
		push_ids(&mut body, groups);
		Self::raw(6, id, body)
	}

	/// Music segment (10), music switch (12), or music random/sequence (13) entry.
	pub fn music_container(type_tag: u8, id: u32, params: &NodeParams, children: &[u32]) -> Self {
		let mut body = vec![FILLER];
		body.extend(params.encode());
		body.extend_from_slice(&(children.len() as u32).to_le_bytes());
		push_ids(&mut body, children);
		Self::raw(type_tag, id, body)
	}

	/// Music track entry.
	pub fn music_track(id: u32, sources: &[u32]) -> Self {
		let mut body = vec![FILLER];
		body.extend_from_slice(&(sources.len() as u32).to_le_bytes());
		for source in sources {
			body.extend_from_slice(&[FILLER; 5]);
			body.extend_from_slice(&source.to_le_bytes());
		}
		Self::raw(11, id, body)
	}

	/// Append trailing bytes the decoder does not read.
	pub fn padded(mut self, extra: usize) -> Self {
		self.body.extend(std::iter::repeat_n(FILLER, extra));
		self
	}

	/// Declared entry length: id plus body.
	pub fn declared_len(&self) -> usize {
		4 + self.body.len()
	}

	/// Encode `{type, len, id, body}`.
	pub fn encode(&self) -> Vec<u8> {
		let mut out = vec![self.type_tag];
		out.extend_from_slice(&(self.declared_len() as u32).to_le_bytes());
		out.extend_from_slice(&self.id.to_le_bytes());
		out.extend_from_slice(&self.body);
		out
	}
}

/// Shape of a node base-parameter block; every skipped field is `FILLER`.
#[derive(Debug, Clone, Default)]
pub struct NodeParams {
	/// Initial effect count.
	pub fx: u8,
	/// First property group count.
	pub props: u8,
	/// Second (ranged) property group count.
	pub ranged: u8,
	/// Positioning bit flags.
	pub positioning: u8,
	/// 3D path vertex count, written when positioning has `0x20` or `0x40`.
	pub vertices: u32,
	/// 3D path playlist item count, written with `vertices`.
	pub playlist: u32,
	/// Auxiliary bit flags.
	pub aux: u8,
	/// State property count.
	pub state_props: u8,
	/// State count per state group.
	pub state_groups: Vec<u8>,
	/// Curve point count per RTPC.
	pub rtpcs: Vec<u16>,
}

impl NodeParams {
	/// Encode the block.
	pub fn encode(&self) -> Vec<u8> {
		let mut out = vec![FILLER, self.fx];
		if self.fx > 0 {
			fill(&mut out, usize::from(self.fx) * 7 + 1);
		}

		fill(&mut out, 12);

		out.push(self.props);
		fill(&mut out, usize::from(self.props) * 5);
		out.push(self.ranged);
		fill(&mut out, usize::from(self.ranged) * 9);

		out.push(self.positioning);
		if self.positioning & 0x02 != 0 {
			fill(&mut out, 1);
		}
		if self.positioning & 0x60 != 0 {
			fill(&mut out, 5);
			out.extend_from_slice(&self.vertices.to_le_bytes());
			fill(&mut out, self.vertices as usize * 16);
			out.extend_from_slice(&self.playlist.to_le_bytes());
			fill(&mut out, self.playlist as usize * 20);
		}

		out.push(self.aux);
		if self.aux & 0x08 != 0 {
			fill(&mut out, 16);
		}

		fill(&mut out, 10);

		out.push(self.state_props);
		fill(&mut out, usize::from(self.state_props) * 3);

		out.push(self.state_groups.len() as u8);
		for states in &self.state_groups {
			fill(&mut out, 5);
			out.push(*states);
			fill(&mut out, usize::from(*states) * 8);
		}

		out.extend_from_slice(&(self.rtpcs.len() as u16).to_le_bytes());
		for points in &self.rtpcs {
			fill(&mut out, 12);
			out.extend_from_slice(&points.to_le_bytes());
			fill(&mut out, usize::from(*points) * 12);
		}

		out
	}
}

fn fill(out: &mut Vec<u8>, n: usize) {
	out.extend(std::iter::repeat_n(FILLER, n));
}

fn push_ids(out: &mut Vec<u8>, ids: &[u32]) {
	for id in ids {
		out.extend_from_slice(&id.to_le_bytes());
	}
}

/// The event 1 → action 2 → container 3 → sounds 4, 5 chain with sources 100 and 200.
pub fn play_chain_entries(action_type: u8) -> Vec<HircEntry> {
	vec![
		HircEntry::event(1, &[2]),
		HircEntry::action(2, action_type, 3),
		HircEntry::ran_seq(3, &[4, 5]),
		HircEntry::sound(4, 0x0001_0001, 100),
		HircEntry::sound(5, 0x0001_0001, 200),
	]
}

/// Write `bytes` to a temporary `.bnk` file that lives as long as the handle.
pub fn write_temp_bank(bytes: &[u8]) -> NamedTempFile {
	let mut file = tempfile::Builder::new().suffix(".bnk").tempfile().expect("temp bank file creates");
	file.write_all(bytes).expect("temp bank file writes");
	file.flush().expect("temp bank file flushes");
	file
}

/// Parse a successful command's stdout as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
	assert!(
		output.status.success(),
		"command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	serde_json::from_slice(&output.stdout).expect("stdout should be valid json")
}
