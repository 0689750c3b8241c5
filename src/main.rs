//! CLI entry point for the image to tileset converter

use clap::Parser;
use std::error::Error;
use std::process::ExitCode;
use tileforge::io::cli::{Cli, TilesetConverter};

// Allow print for the status lines and failure diagnostics shown to the user
#[allow(clippy::print_stdout, clippy::print_stderr)]
fn main() -> ExitCode {
    let cli = Cli::parse();
    let converter = TilesetConverter::new(cli);

    let result = converter.extract().and_then(|tiles| {
        println!("Number of Tiles: {}", tiles.len());
        converter.write(&tiles)
    });

    match result {
        Ok(summary) => {
            println!(
                "Done. Your tileset was saved to {}",
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {} stage failed: {err}", err.stage());
            let mut source = err.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            ExitCode::FAILURE
        }
    }
}
