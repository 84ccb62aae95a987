use std::io::Write;

use bnkdoc::bnk::{BnkError, HircKind, Result};

/// Parse a decimal or `0x`-prefixed hex `u32` id.
pub(crate) fn parse_id(value: &str) -> Result<u32> {
	let parsed = if let Some(stripped) = value.strip_prefix("0x").or_else(|| value.strip_prefix("0X")) {
		u32::from_str_radix(stripped, 16)
	} else {
		value.parse::<u32>()
	};

	parsed.map_err(|_| BnkError::InvalidId { value: value.to_owned() })
}

/// Parse a hierarchy kind by name or by numeric type tag.
pub(crate) fn parse_kind(value: &str) -> Result<HircKind> {
	if let Some(kind) = HircKind::from_name(value) {
		return Ok(kind);
	}

	value
		.parse::<u8>()
		.map(HircKind::from_tag)
		.map_err(|_| BnkError::InvalidKind { value: value.to_owned() })
}

/// Render an id as fixed-width hex.
pub(crate) fn id_hex(value: u32) -> String {
	format!("0x{value:08x}")
}

/// Write `value` to stdout as pretty JSON followed by a newline.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let stdout = std::io::stdout();
	let mut out = stdout.lock();
	serde_json::to_writer_pretty(&mut out, value).map_err(std::io::Error::from)?;
	writeln!(out)?;
	Ok(())
}
