#![allow(missing_docs)]

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "bnkdoc", about = "SoundBank .bnk inspection tools", version)]
struct Cli {
	/// Raise log verbosity (-v info, -vv debug); RUST_LOG overrides.
	#[arg(short, long, global = true, action = ArgAction::Count)]
	verbose: u8,
	/// Drop a trailing partial DIDX entry instead of failing.
	#[arg(long = "lenient-index", global = true)]
	lenient_index: bool,
	/// Fail on a hierarchy record that overruns its length instead of skipping it.
	#[arg(long = "strict-bodies", global = true)]
	strict_bodies: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Chunk layout and section summaries.
	Info(cmd::info::Args),
	/// List hierarchy records.
	Ids(cmd::ids::Args),
	/// Print the decoded bank as JSON.
	Dump(cmd::dump::Args),
	/// Resolve the source ids played by an event.
	Resolve(cmd::resolve::Args),
}

fn main() {
	let cli = Cli::parse();
	init_logging(cli.verbose);

	if let Err(err) = run(cli) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn init_logging(verbose: u8) {
	let default = match verbose {
		0 => "warn",
		1 => "info",
		_ => "debug",
	};

	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
		.with_writer(std::io::stderr)
		.init();
}

fn run(cli: Cli) -> bnkdoc::bnk::Result<()> {
	let options = bnkdoc::bnk::DecodeOptions {
		strict_index_len: !cli.lenient_index,
		strict_hirc_bodies: cli.strict_bodies,
	};

	match cli.command {
		Commands::Info(args) => cmd::info::run(args, &options),
		Commands::Ids(args) => cmd::ids::run(args, &options),
		Commands::Dump(args) => cmd::dump::run(args, &options),
		Commands::Resolve(args) => cmd::resolve::run(args, &options),
	}
}
