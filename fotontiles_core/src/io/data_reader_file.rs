//! Random-access, bounds-checked reads from a file.

use crate::types::{Blob, ByteRange};
use anyhow::{ensure, Context, Result};
use std::{
	fs::File,
	io::{BufReader, Read, Seek, SeekFrom},
	path::Path,
};

/// A seekable file reader that only hands out bytes within the file.
///
/// Every read goes through [`read_range`](DataReaderFile::read_range), which
/// rejects ranges past the end of the file before touching the disk. This is
/// the backstop that keeps corrupt index entries from causing out-of-bounds
/// reads.
pub struct DataReaderFile {
	reader: BufReader<File>,
	len: u64,
}

impl DataReaderFile {
	/// Opens a file for random-access reading.
	pub fn open(path: &Path) -> Result<DataReaderFile> {
		let file = File::open(path).with_context(|| format!("opening file {path:?}"))?;
		let len = file.metadata()?.len();
		Ok(DataReaderFile {
			reader: BufReader::new(file),
			len,
		})
	}

	/// Returns the total file length in bytes.
	pub fn len(&self) -> u64 {
		self.len
	}

	/// Returns `true` if the file is empty.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Reads exactly the bytes of `range`.
	///
	/// # Errors
	/// Fails if the range reaches past the end of the file.
	pub fn read_range(&mut self, range: &ByteRange) -> Result<Blob> {
		ensure!(
			range.end() <= self.len,
			"byte range {range:?} exceeds the file length ({})",
			self.len
		);
		self.reader.seek(SeekFrom::Start(range.offset))?;
		let mut blob = Blob::new_sized(range.length as usize);
		self.reader.read_exact(blob.as_mut_slice())?;
		Ok(blob)
	}
}
