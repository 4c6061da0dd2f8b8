use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use teensy_size::{model_name, report, ElfImage};

/// Report the memory layout and board model of a Teensy firmware image.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// ELF executable to inspect.
    file: PathBuf,
}

fn main() -> ExitCode {
    match run(&Args::parse()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("teensy-size: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> anyhow::Result<ExitCode> {
    let data = fs::read(&args.file)
        .with_context(|| format!("unable to read {}", args.file.display()))?;
    let image = match ElfImage::parse(&data) {
        Ok(image) => image,
        Err(err) => {
            eprintln!("teensy-size: {}: {err}", args.file.display());
            return Ok(ExitCode::from(2));
        }
    };

    report::write_info(&image, &mut io::stdout().lock()).context("unable to write report")?;

    let id = image.model_id();
    if id == 0 {
        eprintln!(
            "teensy-size: cannot determine Teensy model from {}",
            args.file.display()
        );
        return Ok(ExitCode::from(3));
    }
    println!("Teensy Model is {:02X} ({})", id, model_name(id));
    Ok(ExitCode::SUCCESS)
}
