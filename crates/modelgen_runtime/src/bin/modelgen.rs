//! modelgen CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use modelgen_compiler::CodegenConfig;
use modelgen_runtime::{OutputFormat, init_logging, load_models, render, write_output};
use tracing::info;

/// Compiles data-model schemas into typed query declarations.
#[derive(Parser)]
#[command(name = "modelgen", version)]
struct CliConfig {
    /// Model-set file (.json, .msgpack, or .mp).
    input: PathBuf,

    /// Directory receiving the generated files.
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Artifacts to generate.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Declarations)]
    format: OutputFormat,

    /// Type links as their full target shape instead of a selectable reference.
    #[arg(long)]
    no_field_selection: bool,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the generated files instead of writing them.
    #[arg(long)]
    stdout: bool,
}

fn main() -> ExitCode {
    let config = CliConfig::parse();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&config.log_level)?;

    let models = load_models(&config.input)?;
    info!(
        path = %config.input.display(),
        models = models.len(),
        "loaded model set"
    );

    let codegen = CodegenConfig::default().with_field_selection(!config.no_field_selection);
    let rendered = render(&models, config.format, &codegen)?;

    if config.stdout {
        for file in &rendered.files {
            if rendered.files.len() > 1 {
                println!("// {}", file.name);
            }
            print!("{}", file.contents);
        }
        return Ok(());
    }

    write_output(&config.out_dir, &rendered.files)?;
    Ok(())
}
