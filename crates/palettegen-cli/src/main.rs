//! The `palettegen` binary: validates paths, wires the parser to a builder,
//! and reports a single success or failure for the whole run.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;

use palettegen::util::capitalize_first;
use palettegen::{AppleBuilder, ArtifactBuilder, PaletteParser, ParseMode};

#[derive(Parser)]
#[command(name = "palettegen", version)]
#[command(about = "Converts a human-readable .palette file into an asset catalog and Swift color constants")]
struct Cli {
    /// The namespace of your colors, e.g. MyColors or AppColors.
    name: String,

    /// The path to the input .palette file.
    #[arg(short, long)]
    input: PathBuf,

    /// The path to the output folder. Created if it does not exist.
    #[arg(short, long)]
    output: PathBuf,

    /// The name of the bundle your colors are in, as a static var on Bundle.
    #[arg(short, long, default_value = "main")]
    bundle: String,

    /// Generate the colors with public access control.
    #[arg(long)]
    public_access: bool,

    /// Only generate the aliases, skipping the principal definitions.
    #[arg(long)]
    aliases_only: bool,

    /// Print more information while parsing.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(&cli)?;
    println!("Generated colors successfully");
    Ok(())
}

fn run(cli: &Cli) -> Result<()> {
    validate_paths(cli)?;

    let contents = fs::read_to_string(&cli.input)
        .with_context(|| format!("could not read input file {}", cli.input.display()))?;

    let mode = if cli.aliases_only {
        ParseMode::AliasesOnly
    } else {
        ParseMode::All
    };
    let colors = PaletteParser::new(mode).parse(&contents);

    let namespace = capitalize_first(&cli.name);
    let builder: Box<dyn ArtifactBuilder> =
        Box::new(AppleBuilder::new(&cli.output, &cli.bundle, cli.public_access));
    builder
        .build(&colors, &namespace)
        .context("generating colors failed")
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}

/// Input must be an existing file; output must be a directory, created when
/// absent.
fn validate_paths(cli: &Cli) -> Result<()> {
    if !cli.input.is_file() {
        bail!("no file was found at {}", cli.input.display());
    }

    if cli.output.exists() {
        if !cli.output.is_dir() {
            bail!(
                "the output path {} exists but is not a directory",
                cli.output.display()
            );
        }
    } else {
        fs::create_dir_all(&cli.output).with_context(|| {
            format!(
                "could not create output directory {}",
                cli.output.display()
            )
        })?;
    }

    Ok(())
}
