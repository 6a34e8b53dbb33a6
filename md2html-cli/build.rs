use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the output formats registered by FormatRegistry::with_defaults
// We need to duplicate this here since build scripts can't access the core crate
const OUTPUT_FORMATS: &[&str] = &["html", "html-fragment"];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("md2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to HTML")
        .disable_version_flag(true)
        .arg(
            Arg::new("version")
                .short('v')
                .long("version")
                .help("Print version")
                .action(ArgAction::Version),
        )
        .arg(
            Arg::new("input")
                .help("Input markdown file (defaults to stdin)")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Output format")
                .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS))
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to a md2html.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        );

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "md2html", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "md2html", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "md2html", &outdir)?;

    println!("cargo:rerun-if-changed=build.rs");

    Ok(())
}
