//! Integration tests for round trips between tile directories and containers.
//!
//! These tests verify that tiles survive the pack/extract cycle byte for
//! byte, that sparse and hole levels are preserved, and that corrupt
//! containers degrade per tile instead of failing or reading out of bounds.

use anyhow::Result;
use fotontiles_container::*;
use fotontiles_core::TileCoord;
use rstest::rstest;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn compact() -> WriterConfig {
	WriterConfig {
		geometry: TableGeometry::Compact,
	}
}

fn dense(block_side: u32) -> WriterConfig {
	WriterConfig {
		geometry: TableGeometry::Dense { block_side },
	}
}

/// Writes `(name, content)` tile files into a fresh directory.
fn make_tile_dir(dir: &Path, tiles: &[(&str, &str)]) -> Result<()> {
	fs::create_dir_all(dir)?;
	for (name, content) in tiles {
		fs::write(dir.join(name), content)?;
	}
	Ok(())
}

/// Reads a directory back as a `file name -> content bytes` map.
fn read_tile_dir(dir: &Path) -> Result<BTreeMap<String, Vec<u8>>> {
	let mut tiles = BTreeMap::new();
	for entry in fs::read_dir(dir)? {
		let entry = entry?;
		tiles.insert(entry.file_name().into_string().unwrap(), fs::read(entry.path())?);
	}
	Ok(tiles)
}

#[rstest]
#[case::compact(compact())]
#[case::dense(dense(16))]
fn round_trip_preserves_all_tiles(#[case] config: WriterConfig) -> Result<()> {
	let temp = TempDir::new()?;
	let input = temp.path().join("input");
	make_tile_dir(
		&input,
		&[
			("0_0_0.jpg", "level zero"),
			("0_1_1.jpg", "one a"),
			("1_1_1.jpg", "one b"),
			("5_6_3.jpg", "three"),
		],
	)?;

	let container = temp.path().join("pyramid.tilemap");
	TileMapWriter::write_to_path(&DirectoryTilesReader::open_path(&input)?, &container, &config)?;

	let output = temp.path().join("output");
	let mut reader = TileMapReader::open_path(&container)?;
	DirectoryTilesWriter::write_to_path(&mut reader, &output)?;

	assert_eq!(read_tile_dir(&input)?, read_tile_dir(&output)?);
	Ok(())
}

#[rstest]
#[case::compact(compact())]
#[case::dense(dense(16))]
fn sparse_levels_yield_no_spurious_tiles(#[case] config: WriterConfig) -> Result<()> {
	let temp = TempDir::new()?;
	let input = temp.path().join("input");
	// Level 4 has 256 slots; only two are occupied.
	make_tile_dir(&input, &[("0_0_4.jpg", "corner"), ("15_15_4.jpg", "opposite")])?;

	let container = temp.path().join("pyramid.tilemap");
	TileMapWriter::write_to_path(&DirectoryTilesReader::open_path(&input)?, &container, &config)?;

	let output = temp.path().join("output");
	let mut reader = TileMapReader::open_path(&container)?;
	assert_eq!(reader.count_tiles(), 2);
	DirectoryTilesWriter::write_to_path(&mut reader, &output)?;

	let tiles = read_tile_dir(&output)?;
	assert_eq!(
		tiles.keys().map(String::as_str).collect::<Vec<_>>(),
		["0_0_4.jpg", "15_15_4.jpg"]
	);
	Ok(())
}

#[test]
fn hole_levels_survive_the_round_trip() -> Result<()> {
	let temp = TempDir::new()?;
	let input = temp.path().join("input");
	make_tile_dir(&input, &[("0_0_0.jpg", "zero"), ("7_2_3.jpg", "three")])?;

	let container = temp.path().join("pyramid.tilemap");
	TileMapWriter::write_to_path(&DirectoryTilesReader::open_path(&input)?, &container, &compact())?;

	let mut reader = TileMapReader::open_path(&container)?;
	assert_eq!(reader.header().levels_count, 4);
	assert!(reader.levels()[1].is_empty());
	assert!(reader.levels()[2].is_empty());

	let output = temp.path().join("output");
	DirectoryTilesWriter::write_to_path(&mut reader, &output)?;
	assert_eq!(read_tile_dir(&output)?.len(), 2);
	Ok(())
}

#[test]
fn truncated_container_skips_only_the_affected_tile() -> Result<()> {
	let temp = TempDir::new()?;
	let input = temp.path().join("input");
	make_tile_dir(&input, &[("0_0_0.jpg", "first"), ("1_1_1.jpg", "second")])?;

	let container = temp.path().join("pyramid.tilemap");
	TileMapWriter::write_to_path(&DirectoryTilesReader::open_path(&input)?, &container, &compact())?;

	// Cut one byte: the last tile's entry now claims bytes past the end.
	let length = fs::metadata(&container)?.len();
	fs::OpenOptions::new().write(true).open(&container)?.set_len(length - 1)?;

	let mut reader = TileMapReader::open_path(&container)?;

	let err = reader.get_tile(&TileCoord::new(1, 1, 1)?).unwrap_err();
	assert!(matches!(
		err.downcast_ref::<ContainerError>(),
		Some(ContainerError::TruncatedEntry { .. })
	));

	// Bulk extraction still delivers the intact tile.
	let output = temp.path().join("output");
	DirectoryTilesWriter::write_to_path(&mut reader, &output)?;
	let tiles = read_tile_dir(&output)?;
	assert_eq!(tiles.len(), 1);
	assert_eq!(tiles["0_0_0.jpg"], b"first");
	Ok(())
}

#[test]
fn empty_input_fails_without_an_output_file() -> Result<()> {
	let temp = TempDir::new()?;
	let input = temp.path().join("input");
	make_tile_dir(&input, &[("README.md", "no tiles"), ("broken_name.jpg", "bad")])?;

	let container = temp.path().join("pyramid.tilemap");
	let err = DirectoryTilesReader::open_path(&input).unwrap_err();
	assert!(matches!(
		err.downcast_ref::<ContainerError>(),
		Some(ContainerError::EmptyInput { .. })
	));
	assert!(!container.exists());
	Ok(())
}

#[test]
fn reading_twice_is_idempotent() -> Result<()> {
	let temp = TempDir::new()?;
	let input = temp.path().join("input");
	make_tile_dir(&input, &[("0_0_0.jpg", "zero"), ("1_0_1.jpg", "one")])?;

	let container = temp.path().join("pyramid.tilemap");
	TileMapWriter::write_to_path(&DirectoryTilesReader::open_path(&input)?, &container, &compact())?;

	let first = temp.path().join("first");
	let second = temp.path().join("second");
	DirectoryTilesWriter::write_to_path(&mut TileMapReader::open_path(&container)?, &first)?;
	DirectoryTilesWriter::write_to_path(&mut TileMapReader::open_path(&container)?, &second)?;

	assert_eq!(read_tile_dir(&first)?, read_tile_dir(&second)?);
	Ok(())
}

#[test]
fn vanished_source_file_degrades_to_an_absent_tile() -> Result<()> {
	let temp = TempDir::new()?;
	let input = temp.path().join("input");
	make_tile_dir(&input, &[("0_0_0.jpg", "stays"), ("1_1_1.jpg", "goes away")])?;

	let source = DirectoryTilesReader::open_path(&input)?;
	// The file disappears between the scan and the payload pass.
	fs::remove_file(input.join("1_1_1.jpg"))?;

	let container = temp.path().join("pyramid.tilemap");
	TileMapWriter::write_to_path(&source, &container, &compact())?;

	let mut reader = TileMapReader::open_path(&container)?;
	assert_eq!(reader.count_tiles(), 1);
	assert_eq!(
		reader.get_tile(&TileCoord::new(0, 0, 0)?)?.unwrap().as_slice(),
		b"stays"
	);
	assert!(reader.get_tile(&TileCoord::new(1, 1, 1)?)?.is_none());
	Ok(())
}

#[test]
fn point_lookup_matches_extraction() -> Result<()> {
	let temp = TempDir::new()?;
	let input = temp.path().join("input");
	make_tile_dir(&input, &[("3_2_2.webp", "webp tile")])?;

	let container = temp.path().join("pyramid.tilemap");
	TileMapWriter::write_to_path(&DirectoryTilesReader::open_path(&input)?, &container, &compact())?;

	let mut reader = TileMapReader::open_path(&container)?;
	let blob = reader.get_tile(&TileCoord::new(3, 2, 2)?)?.unwrap();
	assert_eq!(blob.as_slice(), b"webp tile");

	let output = temp.path().join("output");
	DirectoryTilesWriter::write_to_path(&mut reader, &output)?;
	assert_eq!(fs::read(output.join("3_2_2.webp"))?, b"webp tile");
	Ok(())
}
