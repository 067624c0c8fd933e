mod tools;

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author,
	version,
	about,
	long_about = None,
	propagate_version = true,
	disable_help_subcommand = true,
)]
struct Cli {
	#[command(subcommand)]
	command: Commands,

	#[command(flatten)]
	verbose: Verbosity<WarnLevel>,
}

// Define subcommands for the command-line interface
#[derive(Subcommand, Debug)]
enum Commands {
	#[clap(alias = "pack")]
	/// Pack a directory of tile images into a tilemap container
	Write(tools::write::Subcommand),

	#[clap(alias = "extract")]
	/// Extract all tiles of a tilemap container into a directory
	Read(tools::read::Subcommand),

	/// Show information about a tilemap container
	Probe(tools::probe::Subcommand),
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

// Helper function for running subcommands
fn run(cli: Cli) -> Result<()> {
	match &cli.command {
		Commands::Write(arguments) => tools::write::run(arguments),
		Commands::Read(arguments) => tools::read::run(arguments),
		Commands::Probe(arguments) => tools::probe::run(arguments),
	}
}
