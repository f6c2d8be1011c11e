// ABOUTME: Main entry point for the slider-export program.
// ABOUTME: Provides CLI interface and executes commands from the library.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use slider_export::config::{
    parse_close_visibility, parse_nav_policy, parse_viewport, BundleOverrides,
};
use slider_export::{export, Config, SliderData};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the built-in sample deck as a JSON config
    Init(InitArgs),

    /// Normalise a JSON config and pretty-print it
    ExportJson(ExportJsonArgs),

    /// Generate the standalone HTML bundle from a JSON config
    ExportHtml(ExportHtmlArgs),

    /// Regenerate the HTML bundle whenever the JSON config changes
    Watch(WatchArgs),
}

#[derive(Args)]
struct InitArgs {
    /// Directory to write slider-config.json into
    #[arg(short, long, default_value = ".")]
    dir: PathBuf,
}

#[derive(Args)]
struct ExportJsonArgs {
    /// Path to the JSON config
    #[arg(short, long)]
    input: PathBuf,

    /// Output path (defaults to slider-config.json in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Args, Clone)]
struct BundleArgs {
    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Fixed device frame: mobile, tablet, desktop or fluid
    #[arg(long)]
    viewport: Option<String>,

    /// Web-font stylesheet URL
    #[arg(long)]
    font_url: Option<String>,

    /// Do not reference any web font
    #[arg(long)]
    no_font: bool,

    /// Arrow navigation at the ends of the deck: clamp or wrap
    #[arg(long)]
    arrows: Option<String>,

    /// Swipe navigation at the ends of the deck: clamp or wrap
    #[arg(long)]
    swipe: Option<String>,

    /// When the close control shows: last-slide or first-two
    #[arg(long)]
    close: Option<String>,
}

#[derive(Args)]
struct ExportHtmlArgs {
    /// Path to the JSON config (defaults to the built-in sample deck)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output path (defaults to slider-export.html in the current directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    bundle: BundleArgs,
}

#[derive(Args)]
struct WatchArgs {
    /// Path to the JSON config to watch
    #[arg(short, long)]
    input: PathBuf,

    /// Output HTML path
    #[arg(short, long)]
    output: PathBuf,

    /// Serve the bundle over HTTP
    #[arg(long)]
    serve: bool,

    /// Port for the preview server
    #[arg(long)]
    port: Option<u16>,

    #[command(flatten)]
    bundle: BundleArgs,
}

fn load_deck(input: Option<&Path>) -> slider_export::Result<SliderData> {
    let data = match input {
        Some(path) => SliderData::from_file(path)?,
        None => SliderData::default(),
    };
    data.validate()?;
    Ok(data)
}

fn bundle_options(
    config: &Config,
    args: &BundleArgs,
) -> slider_export::Result<slider_export::BundleOptions> {
    let viewport = match &args.viewport {
        Some(name) => parse_viewport(name)?,
        None => None,
    };
    Ok(config.get_bundle_options(BundleOverrides {
        title: args.title.clone(),
        viewport,
        font_url: args.font_url.clone(),
        no_font: args.no_font,
        arrow_policy: args.arrows.as_deref().map(parse_nav_policy).transpose()?,
        swipe_policy: args.swipe.as_deref().map(parse_nav_policy).transpose()?,
        close_visibility: args
            .close
            .as_deref()
            .map(parse_close_visibility)
            .transpose()?,
    }))
}

fn run(command: &Commands, config: &Config) -> anyhow::Result<()> {
    match command {
        Commands::Init(args) => {
            let artifact = export::export_json(&SliderData::default())?;
            let path = export::write_artifact(&artifact, &args.dir)?;
            println!("Sample config written: {:?}", path);
        }
        Commands::ExportJson(args) => {
            let data = load_deck(Some(args.input.as_path()))?;
            let artifact = export::export_json(&data)?;
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&artifact.filename));
            export::write_to_path(&artifact, &output)?;
            println!("Config exported: {:?}", output);
        }
        Commands::ExportHtml(args) => {
            let data = load_deck(args.input.as_deref())?;
            let options = bundle_options(config, &args.bundle)?;
            let artifact = export::export_bundle(&data, &options);
            let output = args
                .output
                .clone()
                .unwrap_or_else(|| PathBuf::from(&artifact.filename));
            export::write_to_path(&artifact, &output)
                .with_context(|| format!("Failed to write output file {:?}", output))?;
            println!("Bundle generated: {:?}", output);
        }
        Commands::Watch(args) => {
            let options = bundle_options(config, &args.bundle)?;
            let watch_config = config.get_watch_config(
                args.input.clone(),
                args.output.clone(),
                options,
                args.serve,
                args.port,
            );
            slider_export::watch_config_file(watch_config)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match &cli.command {
        Some(command) => run(command, &config),
        None => {
            println!("No command specified. Use --help for usage information.");
            Ok(())
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
