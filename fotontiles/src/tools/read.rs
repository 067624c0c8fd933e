use anyhow::Result;
use fotontiles_container::{DirectoryTilesWriter, TileMapReader};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tilemap container file to read
	#[arg()]
	input_file: PathBuf,

	/// directory to extract the tiles into (created if absent)
	#[arg()]
	output_dir: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("extracting {:?} into {:?}", arguments.input_file, arguments.output_dir);

	let mut reader = TileMapReader::open_path(&arguments.input_file)?;
	DirectoryTilesWriter::write_to_path(&mut reader, &arguments.output_dir)?;

	eprintln!("extracted {} tiles", reader.count_tiles());
	Ok(())
}

#[cfg(test)]
mod tests {
	use crate::tests::run_command;
	use anyhow::Result;
	use assert_fs::{fixture::FileWriteStr, fixture::PathChild, TempDir};
	use std::fs;

	#[test]
	fn extracts_a_container() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("tiles/0_0_0.jpg").write_str("round trip")?;
		let container = dir.path().join("out.tilemap");

		run_command(vec![
			"fotontiles",
			"write",
			dir.path().join("tiles").to_str().unwrap(),
			container.to_str().unwrap(),
			"256",
		])?;

		let output = dir.path().join("extracted");
		run_command(vec![
			"fotontiles",
			"read",
			container.to_str().unwrap(),
			output.to_str().unwrap(),
		])?;

		assert_eq!(fs::read(output.join("0_0_0.jpg"))?, b"round trip");
		Ok(())
	}

	#[test]
	fn fails_on_a_missing_container() -> Result<()> {
		let dir = TempDir::new()?;

		let result = run_command(vec![
			"fotontiles",
			"read",
			dir.path().join("missing.tilemap").to_str().unwrap(),
			dir.path().join("out").to_str().unwrap(),
		]);

		assert!(result.is_err());
		Ok(())
	}

	#[test]
	fn fails_on_an_unrecognized_container() -> Result<()> {
		let dir = TempDir::new()?;
		dir.child("garbage.tilemap")
			.write_str("this is definitely not a tilemap container, honest")?;

		let err = run_command(vec![
			"fotontiles",
			"read",
			dir.path().join("garbage.tilemap").to_str().unwrap(),
			dir.path().join("out").to_str().unwrap(),
		])
		.unwrap_err();

		assert!(err.to_string().contains("unsupported container version"));
		Ok(())
	}
}
