use anyhow::{ensure, Result};
use fotontiles_container::{DirectoryTilesReader, TableGeometry, TileMapWriter, WriterConfig};
use std::path::PathBuf;

#[derive(clap::ValueEnum, Clone, Copy, Debug, Default)]
enum GeometryArg {
	/// one entry per present tile, carrying its own coordinates
	#[default]
	Compact,
	/// a full positional grid of up to block-side x block-side slots per level
	Dense,
}

#[derive(clap::Args, Debug)]
#[command(arg_required_else_help = true, disable_version_flag = true)]
pub struct Subcommand {
	/// directory of tile images named <x>_<y>_<z>.<ext>
	#[arg()]
	input_dir: PathBuf,

	/// tilemap container file to create
	#[arg()]
	output_file: PathBuf,

	/// block side bounding the per-level tile index (used by the dense geometry)
	#[arg()]
	block_side: u64,

	/// tile index geometry to write
	#[arg(long, value_enum, default_value_t = GeometryArg::Compact)]
	geometry: GeometryArg,
}

pub fn run(arguments: &Subcommand) -> Result<()> {
	eprintln!("packing {:?} into {:?}", arguments.input_dir, arguments.output_file);

	ensure!(arguments.block_side > 0, "block side must be a positive integer");
	let geometry = match arguments.geometry {
		GeometryArg::Compact => TableGeometry::Compact,
		GeometryArg::Dense => {
			ensure!(
				arguments.block_side <= u64::from(u32::MAX),
				"block side ({}) is too large",
				arguments.block_side
			);
			TableGeometry::Dense {
				block_side: arguments.block_side as u32,
			}
		}
	};

	let reader = DirectoryTilesReader::open_path(&arguments.input_dir)?;
	TileMapWriter::write_to_path(&reader, &arguments.output_file, &WriterConfig { geometry })?;

	eprintln!("packed {} tiles across {} levels", reader.count_tiles(), reader.levels_count());
	Ok(())
}
