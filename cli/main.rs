//! This module contains the main entrypoint to the ui cli.

use self::options::{load_options, parse_options, Format};
use anyhow::{Context, Result};
use clap::{Args, Parser};
use colored::Colorize;
use html::{Escape, RenderOptions};
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod options;

#[derive(Parser)]
#[clap(
	about = "Render ui components to html.",
	disable_help_subcommand = true
)]
enum Options {
	#[clap(name = "button")]
	Button(ButtonArgs),
}

#[derive(Args, Debug)]
#[clap(about = "render a button")]
#[clap(long_about = "render a button or link button from a .json or .yaml options file")]
struct ButtonArgs {
	#[clap(
		short,
		long,
		help = "the path to a .json or .yaml file with the button options, read from stdin if omitted"
	)]
	options: Option<PathBuf>,
	#[clap(
		long,
		help = "the options format, json or yaml, defaults to the file extension or json for stdin"
	)]
	format: Option<Format>,
	#[clap(long, help = "write text content without escaping html entities")]
	raw_text: bool,
	#[clap(long, help = "write attribute values without escaping html entities")]
	raw_attributes: bool,
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();
	let options = Options::parse();
	let result = match options {
		Options::Button(args) => cli_button(args),
	};
	if let Err(error) = result {
		eprintln!("{}: {:#}", "error".red().bold(), error);
		std::process::exit(1);
	}
}

fn cli_button(args: ButtonArgs) -> Result<()> {
	let options = match args.options.as_deref() {
		Some(path) => load_options(path, args.format)?,
		None => {
			let mut source = String::new();
			std::io::stdin()
				.read_to_string(&mut source)
				.context("failed to read button options from stdin")?;
			let format = args.format.unwrap_or(Format::Json);
			parse_options(&source, format).context("failed to parse button options")?
		}
	};
	tracing::debug!(?options, "rendering button");
	let render_options = RenderOptions {
		text: escape(args.raw_text),
		attributes: escape(args.raw_attributes),
	};
	println!("{}", ui::button(options).render(render_options));
	Ok(())
}

fn escape(raw: bool) -> Escape {
	if raw {
		Escape::Verbatim
	} else {
		Escape::Entities
	}
}

#[test]
fn test_escape() {
	assert_eq!(escape(true), Escape::Verbatim);
	assert_eq!(escape(false), Escape::Entities);
}
