// Command-line interface for mxmd
//
// This binary exposes the mxmd-babel conversions over files, mostly to look at what the composer
// would do with a given message body.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension,
// while being overwrittable by an explicit --from flag. The to falls back to `output.format` from
// the configuration.
// Usage:
//  mxmd <input> [--to <format>] [--from <format>] [--output <file>]  - Convert (default)
//  mxmd convert <input> ...                                           - Same as above (explicit)
//  mxmd render <input> [--output <file>]                              - Markdown to message HTML
//  mxmd escape <input> [--reverse]                                    - Escape markdown per line
//  mxmd --list-formats                                                - List available formats
//
// Logging goes to stderr and is controlled with RUST_LOG (defaults to warn).

use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use mxmd_babel::markdown::{
    escape_markdown_line_start, markdown_to_html, unescape_markdown_line_start,
};
use mxmd_babel::{ConvertOptions, FormatRegistry};
use mxmd_config::{Loader, MxmdConfig};
use std::fs;

const SUBCOMMANDS: &[&str] = &["convert", "render", "escape", "help"];

fn build_cli() -> Command {
    Command::new("mxmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Matrix message bodies between markdown, HTML and the editor tree")
        .long_about(
            "mxmd is a command-line tool for the message composer conversions.\n\n\
            Commands:\n  \
            - convert: Parse a message (markdown, html, plain) and print the editor tree\n  \
            - render:  Render markdown to the HTML sent as formatted_body\n  \
            - escape:  Backslash-escape (or unescape) markdown triggers line by line\n\n\
            Examples:\n  \
            mxmd msg.md                          # Editor tree of a markdown message\n  \
            mxmd body.html --to json             # Editor tree as JSON\n  \
            mxmd body.html --no-markdown         # Rich-text mode, no escaping\n  \
            mxmd render msg.md -o body.html      # Markdown to HTML file",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a mxmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a message into the editor tree (default command)")
                .long_about(
                    "Parse a message and serialize the resulting editor document.\n\n\
                    Source formats:\n  \
                    - markdown: rendered through the rule engines, then imported (.md)\n  \
                    - html:     message HTML (.html)\n  \
                    - plain:    one paragraph per line (.txt)\n\n\
                    Output formats:\n  \
                    - treeviz:  tree visualization (default)\n  \
                    - json:     editor document as JSON\n  \
                    - text:     plain text of the document\n\n\
                    Examples:\n  \
                    mxmd convert msg.md --to json\n  \
                    mxmd msg.md                           # 'convert' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from the file extension)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (defaults to output.format from the config)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("markdown")
                        .long("markdown")
                        .help("Escape literal text as markdown (overrides convert.markdown)")
                        .action(ArgAction::SetTrue)
                        .conflicts_with("no-markdown"),
                )
                .arg(
                    Arg::new("no-markdown")
                        .long("no-markdown")
                        .help("Keep literal text verbatim (rich-text mode)")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render markdown to message HTML")
                .arg(
                    Arg::new("input")
                        .help("Markdown file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("output")
                        .short('o')
                        .long("output")
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("escape")
                .about("Escape markdown triggers at the start of each line and inline")
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("reverse")
                        .long("reverse")
                        .help("Remove the escapes instead of adding them")
                        .action(ArgAction::SetTrue),
                ),
        )
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
}

/// Inject "convert" when the first argument is not a known subcommand or flag.
fn with_default_subcommand(args: &[String]) -> Option<Vec<String>> {
    let first = args.get(1)?;
    if first.starts_with('-') || SUBCOMMANDS.contains(&first.as_str()) {
        return None;
    }
    let mut injected = vec![args[0].clone(), "convert".to_string()];
    injected.extend_from_slice(&args[1..]);
    Some(injected)
}

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&args) {
        Ok(m) => m,
        Err(e) => match with_default_subcommand(&args) {
            Some(injected) => match cli.try_get_matches_from(&injected) {
                Ok(m) => m,
                Err(e2) => e2.exit(),
            },
            None => e.exit(),
        },
    };

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => handle_convert_command(sub_matches, &config),
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            let source = read_input(input);
            write_output(output, &markdown_to_html(&source));
        }
        Some(("escape", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let source = read_input(input);
            print!("{}", escape_lines(&source, sub_matches.get_flag("reverse")));
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

fn handle_convert_command(sub_matches: &ArgMatches, config: &MxmdConfig) {
    let input = sub_matches
        .get_one::<String>("input")
        .expect("input is required");
    let registry = FormatRegistry::default();

    // Auto-detect --from if not provided
    let from = match sub_matches.get_one::<String>("from") {
        Some(f) => f.to_string(),
        None => match registry.detect_format_from_filename(input) {
            Some(detected) => detected,
            None => {
                eprintln!("Error: Could not detect format from filename '{input}'");
                eprintln!("Please specify --from explicitly");
                std::process::exit(1);
            }
        },
    };
    let to = sub_matches
        .get_one::<String>("to")
        .cloned()
        .unwrap_or_else(|| config.output.format.clone());

    // Validate formats exist
    for name in [&from, &to] {
        if let Err(e) = registry.get(name) {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    let options = convert_options(config, sub_matches);
    let source = read_input(input);

    let doc = registry.parse(&source, &from, &options).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });
    tracing::debug!(from = %from, to = %to, blocks = doc.blocks.len(), "parsed input");

    let result = registry.serialize(&doc, &to).unwrap_or_else(|e| {
        eprintln!("Serialization error: {e}");
        std::process::exit(1);
    });

    let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
    write_output(output, &result);
}

fn convert_options(config: &MxmdConfig, sub_matches: &ArgMatches) -> ConvertOptions {
    let options = ConvertOptions::from(config);
    if sub_matches.get_flag("markdown") {
        options.with_markdown(true)
    } else if sub_matches.get_flag("no-markdown") {
        options.with_markdown(false)
    } else {
        options
    }
}

fn escape_lines(source: &str, reverse: bool) -> String {
    source
        .split_inclusive('\n')
        .map(|line| {
            let (body, newline) = match line.strip_suffix('\n') {
                Some(body) => (body, "\n"),
                None => (line, ""),
            };
            let converted = if reverse {
                unescape_markdown_line_start(body)
            } else {
                escape_markdown_line_start(body)
            };
            format!("{converted}{newline}")
        })
        .collect()
}

fn read_input(path: &str) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, data: &str) {
    match output {
        Some(path) => {
            fs::write(path, data).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{data}"),
    }
}

fn handle_list_formats_command() {
    let registry = FormatRegistry::default();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let direction = match (format.supports_parsing(), format.supports_serialization()) {
            (true, true) => "source, output",
            (true, false) => "source",
            (false, true) => "output",
            (false, false) => "-",
        };
        println!("  {:<10} {:<16} {}", name, direction, format.description());
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MxmdConfig {
    let loader = Loader::new().with_optional_file("mxmd.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}
