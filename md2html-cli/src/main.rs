// Command-line interface for md2html
//
// Converts a markdown file (or standard input) to HTML. The conversion itself lives in
// md2html-core; this binary only deals with arguments, configuration and I/O.
//
// Usage:
//  md2html [input.md] [-o output.html] [--to <format>] [--config <path>]
//  md2html --list-formats                 - List available output formats
//  md2html -v                             - Print the version
//
// Without an input path the markdown is read from stdin; without -o the result goes
// to stdout. The output format is, in order: --to, the -o file extension, the
// configured `convert.to`.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  md2html notes.md --extra-lang de --extra-fallback-title Notizen

mod error;

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use error::CliError;
use log::{debug, info};
use md2html_config::{Loader, Md2HtmlConfig};
use md2html_core::formats::html::HtmlFormat;
use md2html_core::FormatRegistry;
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read, Write};

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        if let Some(key) = arg.strip_prefix("--extra-") {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("md2html")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to HTML")
        .long_about(
            "md2html converts a subset of Markdown to a standalone HTML page.\n\n\
            Supported: ATX headings, paragraphs, flat ordered and unordered lists,\n\
            fenced code blocks, **bold**, *italic*, `code` and [links](url).\n\
            The page title is taken from the first level-1 heading.\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> <value> to pass format-specific options.\n\n\
            Examples:\n  \
            md2html notes.md                        # Print HTML to stdout\n  \
            md2html notes.md -o notes.html          # Write to a file\n  \
            cat notes.md | md2html                  # Read from stdin\n  \
            md2html notes.md --to html-fragment     # Body only, no <html> wrapper\n  \
            md2html notes.md --extra-lang fr        # Set <html lang=\"fr\">",
        )
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
                .value_name("PATH")
                .help("Output file path (defaults to stdout)")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .value_name("FORMAT")
                .help("Output format (detected from the output extension if not specified)")
                .long_help(
                    "Output format to convert to.\n\n\
                    Available formats: html, html-fragment\n\
                    If not specified, the format is detected from the -o file extension,\n\
                    falling back to `convert.to` from the configuration.",
                )
                .value_hint(ValueHint::Other),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a md2html.toml configuration file")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();
    let (cleaned_args, extra_params) = parse_extra_args(&args);
    let matches = build_cli().get_matches_from(cleaned_args);

    if let Err(err) = run(&matches, extra_params) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches, extra_params: HashMap<String, String>) -> Result<(), CliError> {
    let mut registry = FormatRegistry::default();

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()))?;
    // Configured page defaults; --extra-* options still override them
    registry.register(HtmlFormat::new(config.convert.html.clone().into()));

    let input = matches.get_one::<String>("input").map(|s| s.as_str());
    let output = matches.get_one::<String>("output").map(|s| s.as_str());
    let to = resolve_output_format(
        &registry,
        matches.get_one::<String>("to").map(|s| s.as_str()),
        output,
        &config,
    );

    handle_convert_command(&registry, input, &to, output, extra_params)
}

/// Handle the convert command
fn handle_convert_command(
    registry: &FormatRegistry,
    input: Option<&str>,
    to: &str,
    output: Option<&str>,
    extra_params: HashMap<String, String>,
) -> Result<(), CliError> {
    // Validate before touching any input
    if !registry.get(to)?.supports_serialization() {
        return Err(CliError::NotAnOutputFormat(to.to_string()));
    }

    let source = read_input(input)?;
    let doc = registry.parse(&source, "markdown")?;
    if doc.is_empty() {
        info!("input has no content, writing an empty body");
    }
    debug!(
        "parsed {} blocks, title {:?}",
        doc.blocks.len(),
        doc.title.as_deref()
    );

    let rendered = registry.serialize_with_options(&doc, to, &extra_params)?;
    write_output(output, &rendered)
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Output formats:");
    for format in registry.output_formats() {
        println!("  {:<15} {}", format.name(), format.description());
    }
}

fn resolve_output_format(
    registry: &FormatRegistry,
    explicit: Option<&str>,
    output: Option<&str>,
    config: &Md2HtmlConfig,
) -> String {
    if let Some(to) = explicit {
        return to.to_string();
    }
    let detected = output
        .and_then(|path| registry.detect_format_from_filename(path))
        .filter(|name| {
            registry
                .get(name)
                .is_ok_and(|format| format.supports_serialization())
        });
    match detected {
        Some(name) => {
            debug!("output format '{name}' detected from output path");
            name
        }
        None => config.convert.to.clone(),
    }
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        Some(path) => {
            info!("reading {path}");
            fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_string(),
                source,
            })
        }
        None => {
            info!("reading standard input");
            let mut source = String::new();
            io::stdin()
                .read_to_string(&mut source)
                .map_err(CliError::Stdin)?;
            Ok(source)
        }
    }
}

fn write_output(output: Option<&str>, rendered: &str) -> Result<(), CliError> {
    match output {
        Some(path) => {
            info!("writing {path}");
            fs::write(path, rendered).map_err(|source| CliError::Write {
                path: path.to_string(),
                source,
            })
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(CliError::Stdout)
        }
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> Result<Md2HtmlConfig, CliError> {
    let loader = Loader::new().with_optional_file("md2html.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    Ok(loader.build()?)
}
