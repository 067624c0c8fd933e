use anyhow::Result;
use fotontiles_container::{TableGeometry, TileMapReader};
use std::path::PathBuf;

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// tilemap container file to inspect
	#[arg()]
	input_file: PathBuf,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	let reader = TileMapReader::open_path(&arguments.input_file)?;
	let header = reader.header();

	println!("container: {:?}", arguments.input_file);
	println!("length: {} bytes", reader.container_length());
	println!("tile format: {:?}", header.tile_format);
	match header.geometry {
		TableGeometry::Compact => println!("geometry: compact"),
		TableGeometry::Dense { block_side } => println!("geometry: dense (block side {block_side})"),
	}
	println!("levels: {}", header.levels_count);
	for table in reader.levels() {
		println!("level {}: {} tiles", table.level(), table.len());
	}
	println!("tiles total: {}", reader.count_tiles());

	Ok(())
}
