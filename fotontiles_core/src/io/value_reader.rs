//! The `ValueReader` trait for decoding fixed-width values.

use crate::types::{Blob, ByteRange};
use anyhow::Result;
use byteorder::{ByteOrder, ReadBytesExt};
use std::io::{Read, Seek};

/// Alias for types implementing both `Seek` and `Read`.
pub trait SeekRead: Seek + Read {}

/// Reads fixed-width values with a chosen byte order.
pub trait ValueReader<E: ByteOrder> {
	/// Returns the underlying reader.
	fn get_reader(&mut self) -> &mut dyn SeekRead;

	/// Returns the total length of the readable data.
	fn len(&self) -> u64;

	/// Returns the current read position.
	fn position(&mut self) -> u64;

	/// Sets the current read position.
	fn set_position(&mut self, position: u64) -> Result<()>;

	/// Returns `true` if there is no data at all.
	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Returns the number of bytes left to read.
	fn remaining(&mut self) -> u64 {
		self.len() - self.position()
	}

	/// Returns `true` if any bytes are left to read.
	fn has_remaining(&mut self) -> bool {
		self.remaining() > 0
	}

	/// Reads an unsigned 8-bit integer.
	fn read_u8(&mut self) -> Result<u8> {
		Ok(self.get_reader().read_u8()?)
	}

	/// Reads an unsigned 32-bit integer.
	fn read_u32(&mut self) -> Result<u32> {
		Ok(self.get_reader().read_u32::<E>()?)
	}

	/// Reads an unsigned 64-bit integer.
	fn read_u64(&mut self) -> Result<u64> {
		Ok(self.get_reader().read_u64::<E>()?)
	}

	/// Reads a binary blob of the given length.
	fn read_blob(&mut self, length: u64) -> Result<Blob> {
		let mut blob = Blob::new_sized(length as usize);
		self.get_reader().read_exact(blob.as_mut_slice())?;
		Ok(blob)
	}

	/// Reads a UTF-8 string of the given byte length.
	fn read_string(&mut self, length: u64) -> Result<String> {
		let mut vec = vec![0u8; length as usize];
		self.get_reader().read_exact(&mut vec)?;
		Ok(String::from_utf8(vec)?)
	}

	/// Reads a [`ByteRange`]: offset followed by length, 64 bits each.
	fn read_range(&mut self) -> Result<ByteRange> {
		Ok(ByteRange::new(
			self.get_reader().read_u64::<E>()?,
			self.get_reader().read_u64::<E>()?,
		))
	}
}
