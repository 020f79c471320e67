//! Command-line entry point: compose the icon and write it to `build/`.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use treeglyph_icons::{Exporter, IconComposer, IconError, IconStyle};

#[derive(Parser)]
#[command(name = "treeglyph-icons")]
#[command(about = "Generate the application icon as PNG, ICO and ICNS", version)]
struct Cli {
    /// Output directory. Defaults to `build/` next to this crate's manifest.
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// JSON style file overriding colors and geometry.
    #[arg(long, value_name = "FILE")]
    style: Option<PathBuf>,

    /// Print the default style as JSON and exit.
    #[arg(long)]
    print_style: bool,
}

fn default_out_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("build")
}

fn load_style(path: Option<&Path>) -> Result<IconStyle, IconError> {
    let Some(path) = path else {
        return Ok(IconStyle::default());
    };
    let json = fs::read_to_string(path).map_err(|source| IconError::ReadStyle {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(IconStyle::from_json(&json)?)
}

/// Runs one invocation and returns the line to print on success.
///
/// `default_dir` is used when `--out-dir` is not given.
fn run(cli: Cli, default_dir: PathBuf) -> Result<String, IconError> {
    if cli.print_style {
        return IconStyle::default().to_json_pretty().map_err(IconError::from);
    }

    let style = load_style(cli.style.as_deref())?;
    let icon = IconComposer::new(style).compose()?;

    let exporter = Exporter::new(cli.out_dir.unwrap_or(default_dir));
    exporter.export(&icon)?;

    Ok(format!("Generated icons in {}", exporter.out_dir().display()))
}

fn main() -> ExitCode {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match run(Cli::parse(), default_out_dir()) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
