use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use appiconset::config::{Config, read_config};
use appiconset::generator::{GenerateOptions, ResizeFilter, generate_iconset};
use appiconset::{Result, ensure_consistent, logger};
use clap::Parser;

/// Turn one square source image into a macOS `.appiconset`.
#[derive(Debug, Parser)]
#[command(name = "appiconset", version)]
struct Args {
    /// Source image, ideally 1024x1024.
    #[arg(short, long, value_name = "PATH")]
    input: PathBuf,

    /// Output directory [default: AppIcon.appiconset]
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// Resampling filter.
    #[arg(long, value_enum)]
    filter: Option<ResizeFilter>,

    /// Render the variants concurrently.
    #[arg(long)]
    parallel: bool,

    /// Check the written directory against Contents.json afterwards.
    #[arg(long)]
    verify: bool,

    /// Read defaults from this file instead of the usual locations.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// More log output (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn run(args: Args, cfg: Config) -> Result<PathBuf> {
    let out_dir = args.output.unwrap_or(cfg.output);
    let opts = GenerateOptions {
        filter: args.filter.unwrap_or(cfg.filter),
        parallel: args.parallel || cfg.parallel,
    };
    log::info!(
        "generating {} from {} ({:?})",
        out_dir.display(),
        args.input.display(),
        opts.filter
    );
    generate_iconset(&args.input, &out_dir, opts)?;
    if args.verify {
        let report = ensure_consistent(&out_dir)?;
        log::info!("verified: {report}");
    }
    Ok(out_dir)
}

fn main() -> ExitCode {
    let args = Args::parse();

    let cfg = match read_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let level = if args.verbose > 0 || args.quiet {
        logger::level_from_flags(args.verbose, args.quiet)
    } else {
        cfg.log_level.unwrap_or(logger::level_from_flags(0, false))
    };
    logger::init(level);
    if let Some(path) = &cfg.source {
        log::debug!("config loaded from {}", path.display());
    }
    for key in &cfg.unknown_keys {
        log::warn!("ignoring unknown config key `{key}`");
    }

    ExitCode::from(finish(run(args, cfg), &mut io::stdout(), &mut io::stderr()))
}

/// Prints the outcome (the output path, or a single error line) and returns the exit status.
fn finish(result: Result<PathBuf>, out: &mut impl Write, err: &mut impl Write) -> u8 {
    match result {
        Ok(out_dir) => {
            let _ = writeln!(out, "Iconset written to {}", out_dir.display());
            0
        }
        Err(e) => {
            let _ = writeln!(err, "error: {e}");
            1
        }
    }
}
