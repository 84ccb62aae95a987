use crate::bnk::{Cursor, Result};

const POS_HAS_PANNER: u8 = 0x02;
const POS_HAS_3D_AUTOMATION: u8 = 0x20;
const POS_HAS_3D_PATH: u8 = 0x40;
const AUX_HAS_OVERRIDES: u8 = 0x08;

/// Skip the shared node base-parameter block of container-like records.
///
/// Nothing here is retained; the block is consumed only to reach the fields
/// that follow it. Every size is gated by counts or flag bits read inline, so
/// the field order below must match the on-disk layout exactly.
pub fn skip_node_base_params(cursor: &mut Cursor<'_>) -> Result<()> {
	// initial fx: override flag, count, then descriptors plus a bypass byte
	cursor.skip(1)?;
	let fx_count = usize::from(cursor.read_u8()?);
	if fx_count > 0 {
		cursor.skip_array(fx_count, 7)?;
		cursor.skip(1)?;
	}

	// override-bus/direct-parent routing
	cursor.skip(12)?;

	let prop_count = usize::from(cursor.read_u8()?);
	cursor.skip_array(prop_count, 5)?;
	let ranged_count = usize::from(cursor.read_u8()?);
	cursor.skip_array(ranged_count, 9)?;

	let positioning = cursor.read_u8()?;
	if positioning & POS_HAS_PANNER != 0 {
		cursor.skip(1)?;
	}
	if positioning & (POS_HAS_3D_AUTOMATION | POS_HAS_3D_PATH) != 0 {
		cursor.skip(5)?;
		let vertices = cursor.read_u32_le()? as usize;
		cursor.skip_array(vertices, 16)?;
		let playlist = cursor.read_u32_le()? as usize;
		cursor.skip_array(playlist, 20)?;
	}

	let aux = cursor.read_u8()?;
	if aux & AUX_HAS_OVERRIDES != 0 {
		cursor.skip(16)?;
	}

	cursor.skip(10)?;

	let state_props = usize::from(cursor.read_u8()?);
	cursor.skip_array(state_props, 3)?;

	let state_groups = cursor.read_u8()?;
	for _ in 0..state_groups {
		cursor.skip(5)?;
		let states = usize::from(cursor.read_u8()?);
		cursor.skip_array(states, 8)?;
	}

	let rtpcs = cursor.read_u16_le()?;
	for _ in 0..rtpcs {
		cursor.skip(12)?;
		let points = usize::from(cursor.read_u16_le()?);
		cursor.skip_array(points, 12)?;
	}

	Ok(())
}
