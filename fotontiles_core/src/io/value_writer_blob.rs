//! A `ValueWriter` into an in-memory blob.

use super::ValueWriter;
use crate::types::Blob;
use anyhow::Result;
use byteorder::{BigEndian, ByteOrder, LittleEndian};
use std::io::{Cursor, Write};
use std::marker::PhantomData;

/// Writes values into a growable in-memory buffer.
pub struct ValueWriterBlob<E: ByteOrder> {
	_phantom: PhantomData<E>,
	cursor: Cursor<Vec<u8>>,
}

impl<E: ByteOrder> ValueWriterBlob<E> {
	/// Creates a new, empty `ValueWriterBlob`.
	pub fn new() -> ValueWriterBlob<E> {
		ValueWriterBlob {
			_phantom: PhantomData,
			cursor: Cursor::new(Vec::new()),
		}
	}

	/// Consumes the writer and returns the written bytes as a [`Blob`].
	pub fn into_blob(self) -> Blob {
		Blob::from(self.cursor.into_inner())
	}
}

impl ValueWriterBlob<LittleEndian> {
	/// Creates a little-endian `ValueWriterBlob`.
	pub fn new_le() -> ValueWriterBlob<LittleEndian> {
		ValueWriterBlob::new()
	}
}

impl ValueWriterBlob<BigEndian> {
	/// Creates a big-endian `ValueWriterBlob`.
	pub fn new_be() -> ValueWriterBlob<BigEndian> {
		ValueWriterBlob::new()
	}
}

impl<E: ByteOrder> ValueWriter<E> for ValueWriterBlob<E> {
	fn get_writer(&mut self) -> &mut dyn Write {
		&mut self.cursor
	}

	fn position(&mut self) -> Result<u64> {
		Ok(self.cursor.position())
	}
}

impl<E: ByteOrder> Default for ValueWriterBlob<E> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::io::{ValueReader, ValueReaderSlice};
	use crate::types::ByteRange;

	#[test]
	fn write_integers_be() -> Result<()> {
		let mut writer = ValueWriterBlob::new_be();
		writer.write_u8(1)?;
		writer.write_u32(2)?;
		writer.write_u64(3)?;
		assert_eq!(writer.position()?, 13);

		let blob = writer.into_blob();
		let mut reader = ValueReaderSlice::new_be(blob.as_slice());
		assert_eq!(reader.read_u8()?, 1);
		assert_eq!(reader.read_u32()?, 2);
		assert_eq!(reader.read_u64()?, 3);
		Ok(())
	}

	#[test]
	fn write_integers_le() -> Result<()> {
		let mut writer = ValueWriterBlob::new_le();
		writer.write_u32(0x0102_0304)?;
		assert_eq!(writer.into_blob().as_slice(), &[0x04, 0x03, 0x02, 0x01]);
		Ok(())
	}

	#[test]
	fn write_range() -> Result<()> {
		let mut writer = ValueWriterBlob::new_be();
		writer.write_range(&ByteRange::new(23, 42))?;

		let blob = writer.into_blob();
		assert_eq!(blob.len(), 16);
		let mut reader = ValueReaderSlice::new_be(blob.as_slice());
		assert_eq!(reader.read_range()?, ByteRange::new(23, 42));
		Ok(())
	}

	#[test]
	fn write_slice_and_blob() -> Result<()> {
		let mut writer = ValueWriterBlob::new_be();
		writer.write_slice(b"tile")?;
		writer.write_blob(&Blob::from("map"))?;
		assert_eq!(writer.into_blob().as_slice(), b"tilemap");
		Ok(())
	}
}
