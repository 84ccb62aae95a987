use crate::bnk::{BnkError, Result};

/// Bounded little-endian cursor over an immutable byte slice.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	bytes: &'a [u8],
	pos: usize,
}

impl<'a> Cursor<'a> {
	/// Create a cursor at position 0.
	pub fn new(bytes: &'a [u8]) -> Self {
		Self { bytes, pos: 0 }
	}

	/// Return current byte offset.
	pub fn pos(&self) -> usize {
		self.pos
	}

	/// Return remaining unread bytes.
	pub fn remaining(&self) -> usize {
		self.bytes.len().saturating_sub(self.pos)
	}

	/// Move to an absolute offset; the end of the slice is a valid target.
	pub fn seek(&mut self, pos: usize) -> Result<()> {
		if pos > self.bytes.len() {
			return Err(BnkError::UnexpectedEof {
				at: self.pos,
				need: pos - self.pos,
				rem: self.remaining(),
			});
		}

		self.pos = pos;
		Ok(())
	}

	/// Read exactly `n` bytes and advance cursor.
	pub fn read_exact(&mut self, n: usize) -> Result<&'a [u8]> {
		if n > self.remaining() {
			return Err(BnkError::UnexpectedEof {
				at: self.pos,
				need: n,
				rem: self.remaining(),
			});
		}

		let start = self.pos;
		self.pos += n;
		Ok(&self.bytes[start..self.pos])
	}

	/// Advance past `n` bytes without reading them.
	pub fn skip(&mut self, n: usize) -> Result<()> {
		let _ = self.read_exact(n)?;
		Ok(())
	}

	/// Advance past `count` fixed-size items of `stride` bytes each.
	pub fn skip_array(&mut self, count: usize, stride: usize) -> Result<()> {
		let Some(n) = count.checked_mul(stride) else {
			return Err(BnkError::UnexpectedEof {
				at: self.pos,
				need: usize::MAX,
				rem: self.remaining(),
			});
		};
		self.skip(n)
	}

	/// Read a four-byte tag.
	pub fn read_tag(&mut self) -> Result<[u8; 4]> {
		let raw = self.read_exact(4)?;
		let mut out = [0_u8; 4];
		out.copy_from_slice(raw);
		Ok(out)
	}

	/// Read one byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.read_exact(1)?[0])
	}

	/// Read one byte as a boolean, treating any non-zero value as `true`.
	pub fn read_bool(&mut self) -> Result<bool> {
		Ok(self.read_u8()? != 0)
	}

	/// Read a little-endian `u16`.
	pub fn read_u16_le(&mut self) -> Result<u16> {
		let raw = self.read_exact(2)?;
		let mut buf = [0_u8; 2];
		buf.copy_from_slice(raw);
		Ok(u16::from_le_bytes(buf))
	}

	/// Read a little-endian `u32`.
	pub fn read_u32_le(&mut self) -> Result<u32> {
		let raw = self.read_exact(4)?;
		let mut buf = [0_u8; 4];
		buf.copy_from_slice(raw);
		Ok(u32::from_le_bytes(buf))
	}

	/// Read a little-endian IEEE-754 `f32`.
	pub fn read_f32_le(&mut self) -> Result<f32> {
		Ok(f32::from_bits(self.read_u32_le()?))
	}
}

#[cfg(test)]
mod tests {
	use super::Cursor;
	use crate::bnk::BnkError;

	#[test]
	fn reads_little_endian_fields_in_order() {
		let mut bytes = vec![0x7f];
		bytes.extend_from_slice(&0xBEEF_u16.to_le_bytes());
		bytes.extend_from_slice(&0x1122_3344_u32.to_le_bytes());
		bytes.extend_from_slice(&1.5_f32.to_le_bytes());

		let mut cursor = Cursor::new(&bytes);
		assert_eq!(cursor.read_u8().expect("u8"), 0x7f);
		assert_eq!(cursor.read_u16_le().expect("u16"), 0xBEEF);
		assert_eq!(cursor.read_u32_le().expect("u32"), 0x1122_3344);
		assert_eq!(cursor.read_f32_le().expect("f32"), 1.5);
		assert_eq!(cursor.remaining(), 0);
	}

	#[test]
	fn short_read_reports_offset_and_remaining() {
		let bytes = [1_u8, 2, 3];
		let mut cursor = Cursor::new(&bytes);
		cursor.skip(1).expect("skip one");

		let err = cursor.read_u32_le().expect_err("read past end fails");
		assert!(matches!(err, BnkError::UnexpectedEof { at: 1, need: 4, rem: 2 }));
		assert_eq!(cursor.pos(), 1, "failed read must not advance");
	}

	#[test]
	fn seek_allows_end_but_not_beyond() {
		let bytes = [0_u8; 8];
		let mut cursor = Cursor::new(&bytes);
		cursor.seek(8).expect("seek to end");
		assert_eq!(cursor.remaining(), 0);
		assert!(cursor.seek(9).is_err());
	}

	#[test]
	fn skip_array_rejects_overflowing_sizes() {
		let bytes = [0_u8; 4];
		let mut cursor = Cursor::new(&bytes);
		assert!(cursor.skip_array(usize::MAX, 2).is_err());
		cursor.skip_array(2, 2).expect("exact fit");
		assert_eq!(cursor.pos(), 4);
	}
}
