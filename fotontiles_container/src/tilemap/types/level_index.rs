//! The per-level locator table directly following the header.
//!
//! One [`ByteRange`] per level, in level order, pointing at that level's tile
//! table. A hole level keeps a zero-length entry, so the index region size is
//! always `levels_count * 16` bytes.

use anyhow::{ensure, Result};
use fotontiles_core::io::{ValueReader, ValueReaderSlice, ValueWriter, ValueWriterBlob};
use fotontiles_core::{Blob, ByteRange};

/// Byte length of one level index entry.
pub const LEVEL_INDEX_ENTRY_LENGTH: u64 = 16;

/// Locates every level's tile table within the container.
#[derive(Debug, PartialEq)]
pub struct LevelIndex {
	ranges: Vec<ByteRange>,
}

impl LevelIndex {
	/// Creates an index of `levels_count` empty entries.
	pub fn new_empty(levels_count: u8) -> LevelIndex {
		LevelIndex {
			ranges: vec![ByteRange::empty(); levels_count as usize],
		}
	}

	/// Records the table range of one level.
	pub fn set(&mut self, level: u8, range: ByteRange) {
		self.ranges[level as usize] = range;
	}

	/// Returns the table range of one level, if the level exists.
	pub fn get(&self, level: u8) -> Option<&ByteRange> {
		self.ranges.get(level as usize)
	}

	/// Returns the number of levels.
	pub fn len(&self) -> usize {
		self.ranges.len()
	}

	/// Returns `true` if the index holds no levels.
	pub fn is_empty(&self) -> bool {
		self.ranges.is_empty()
	}

	/// Iterates the table ranges in level order.
	pub fn iter(&self) -> std::slice::Iter<'_, ByteRange> {
		self.ranges.iter()
	}

	/// Serializes the index.
	pub fn to_blob(&self) -> Result<Blob> {
		let mut writer = ValueWriterBlob::new_be();
		for range in &self.ranges {
			writer.write_range(range)?;
		}
		Ok(writer.into_blob())
	}

	/// Parses a serialized index.
	pub fn from_blob(blob: &Blob) -> Result<LevelIndex> {
		ensure!(
			blob.len() % LEVEL_INDEX_ENTRY_LENGTH == 0,
			"level index length ({}) is not a multiple of {LEVEL_INDEX_ENTRY_LENGTH}",
			blob.len()
		);

		let mut reader = ValueReaderSlice::new_be(blob.as_slice());
		let mut ranges = Vec::with_capacity((blob.len() / LEVEL_INDEX_ENTRY_LENGTH) as usize);
		while reader.has_remaining() {
			ranges.push(reader.read_range()?);
		}
		Ok(LevelIndex { ranges })
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn round_trip() -> Result<()> {
		let mut index = LevelIndex::new_empty(3);
		index.set(0, ByteRange::new(80, 24));
		index.set(2, ByteRange::new(104, 48));

		let blob = index.to_blob()?;
		assert_eq!(blob.len(), 48);

		let parsed = LevelIndex::from_blob(&blob)?;
		assert_eq!(parsed, index);
		assert_eq!(parsed.get(1), Some(&ByteRange::empty()));
		assert_eq!(parsed.get(3), None);
		Ok(())
	}

	#[test]
	fn rejects_ragged_lengths() {
		assert!(LevelIndex::from_blob(&Blob::new_sized(17)).is_err());
	}
}
