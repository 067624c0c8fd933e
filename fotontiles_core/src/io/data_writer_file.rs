//! Buffered, forward-oriented writes to a file.

use crate::types::{Blob, ByteRange};
use anyhow::{Context, Result};
use std::{
	fs::File,
	io::{BufWriter, Seek, SeekFrom, Write},
	path::Path,
};

/// A buffered file writer that reports the byte range of every append.
pub struct DataWriterFile {
	writer: BufWriter<File>,
}

impl DataWriterFile {
	/// Creates (or truncates) the file at `path` for writing.
	pub fn from_path(path: &Path) -> Result<DataWriterFile> {
		Ok(DataWriterFile {
			writer: BufWriter::new(File::create(path).with_context(|| format!("creating file {path:?}"))?),
		})
	}

	/// Appends a blob at the current position and returns where it landed.
	pub fn append(&mut self, blob: &Blob) -> Result<ByteRange> {
		let offset = self.writer.stream_position()?;
		self.writer.write_all(blob.as_slice())?;
		Ok(ByteRange::new(offset, blob.len()))
	}

	/// Overwrites bytes at an absolute position, preserving the current one.
	///
	/// The target bytes must already have been written.
	pub fn write_at(&mut self, offset: u64, blob: &Blob) -> Result<()> {
		let position = self.writer.stream_position()?;
		self.writer.seek(SeekFrom::Start(offset))?;
		self.writer.write_all(blob.as_slice())?;
		self.writer.seek(SeekFrom::Start(position))?;
		Ok(())
	}

	/// Returns the current write position.
	pub fn position(&mut self) -> Result<u64> {
		Ok(self.writer.stream_position()?)
	}

	/// Flushes all buffered bytes to disk.
	pub fn finish(mut self) -> Result<()> {
		self.writer.flush()?;
		Ok(())
	}
}
