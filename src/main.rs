//! hashmap-gen CLI
//!
//! Usage:
//!   hashmap-gen [OPTIONS] [INPUT]
//!
//! Options:
//!   -o, --output <FILE>   Header to write (default: hashmap.h)
//!   -p, --profile <FILE>  Generation profile (TOML format)
//!   -d, --debug           Print a block summary to stderr
//!       --stdout          Print the header instead of writing it
//!   -h, --help            Print help

use std::path::PathBuf;

use clap::Parser;

use hashmap_gen::{
    generate_with_config, read_template, write_header, GenerateConfig, GenerateError, Profile,
};

#[derive(Parser)]
#[command(name = "hashmap-gen")]
#[command(about = "Generate the HASHMAP_DECLARE/HASHMAP_DEFINE header from its template")]
struct Cli {
    /// Template file (default: hashmap.in.h)
    input: Option<PathBuf>,

    /// Header file to write (default: hashmap.h)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Generation profile (TOML format)
    #[arg(short, long)]
    profile: Option<PathBuf>,

    /// Debug mode: print a summary of the generated macro blocks
    #[arg(short, long)]
    debug: bool,

    /// Print the generated header to stdout instead of writing the file
    #[arg(long)]
    stdout: bool,
}

fn main() {
    let cli = Cli::parse();

    // Load profile
    let mut profile = match &cli.profile {
        Some(path) => match Profile::from_file(path) {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Error loading profile '{}': {}", path.display(), e);
                std::process::exit(1);
            }
        },
        None => Profile::default(),
    };
    if let Some(input) = cli.input {
        profile = profile.with_input(input);
    }
    if let Some(output) = cli.output {
        profile = profile.with_output(output);
    }

    let config = GenerateConfig::new()
        .with_profile(profile)
        .with_debug(cli.debug);

    if let Err(report) = run(&config, cli.stdout) {
        eprint!("{}", report);
        std::process::exit(1);
    }
}

/// Run one generation; the error is the complete text to report
fn run(config: &GenerateConfig, to_stdout: bool) -> Result<(), String> {
    let input = &config.profile.input;
    let source = read_template(input).map_err(failure)?;

    // Structure errors carry source context and are reported on their own
    let generated = generate_with_config(&source, config)
        .map_err(|e| e.format(&source, &input.display().to_string()))?;

    let header = generated.header();
    if to_stdout {
        print!("{}", header);
        return Ok(());
    }

    write_header(&config.profile.output, &header).map_err(failure)?;
    if config.debug {
        eprintln!(
            "wrote {} ({} lines)",
            config.profile.output.display(),
            generated.lines.len()
        );
    }
    Ok(())
}

fn failure(e: GenerateError) -> String {
    format!("Error: {}\n", e)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("hashmap-gen-cli-{}-{}", name, std::process::id()));
        fs::create_dir_all(&dir).expect("Should create scratch dir");
        dir
    }

    #[test]
    fn test_structure_error_reported_once() {
        let dir = scratch_dir("structure");
        let input = dir.join("hashmap.in.h");
        fs::write(&input, "int a;\n/* Definitions stop here */\n").expect("Should write template");

        let config = GenerateConfig::new().with_profile(
            Profile::default()
                .with_input(&input)
                .with_output(dir.join("hashmap.h")),
        );
        let report = run(&config, false).unwrap_err();
        assert!(report.contains("no block is open here"));
        assert!(!report.contains("malformed template"));
        assert!(!dir.join("hashmap.h").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_read_error_reported_plainly() {
        let dir = scratch_dir("missing");
        let config = GenerateConfig::new().with_profile(
            Profile::default()
                .with_input(dir.join("nope.in.h"))
                .with_output(dir.join("nope.h")),
        );
        let report = run(&config, false).unwrap_err();
        assert!(report.starts_with("Error: failed to read template"));

        let _ = fs::remove_dir_all(&dir);
    }
}
