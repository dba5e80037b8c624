#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "mockdoc", about = "Mock data templating tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Render {
		#[arg(long)]
		data: PathBuf,
		#[arg(long)]
		template: PathBuf,
	},
	Markers {
		#[arg(long)]
		json: bool,
	},
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("mockdoc: {err}");
		std::process::exit(1);
	}
}

fn run() -> mockdoc::mock::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Render { data, template } => cmd::render::run(data, template),
		Commands::Markers { json } => cmd::markers::run(json),
	}
}
