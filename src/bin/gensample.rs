use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use appiconset::sample::render_sample;
use clap::Parser;

/// Write a 1024x1024 placeholder source icon (`sample_1024.png`).
#[derive(Debug, Parser)]
#[command(name = "gensample", version)]
struct Args {
    /// Directory to write into; created if missing.
    #[arg(value_name = "DIR", default_value = ".")]
    dir: PathBuf,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = fs::create_dir_all(&args.dir) {
        eprintln!("error: failed to create {}: {}", args.dir.display(), e);
        return ExitCode::FAILURE;
    }
    let out = args.dir.join("sample_1024.png");
    if let Err(e) = render_sample(1024).save(&out) {
        eprintln!("error: failed to save {}: {}", out.display(), e);
        return ExitCode::FAILURE;
    }
    println!("Wrote {}", out.display());
    ExitCode::SUCCESS
}
