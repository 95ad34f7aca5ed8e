use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of the formats registered by FormatRegistry::with_defaults
// We need to duplicate this here since build scripts can't access the library
const SOURCE_FORMATS: &[&str] = &["markdown", "html", "plain"];
const OUTPUT_FORMATS: &[&str] = &["treeviz", "json", "text"];

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("mxmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Matrix message bodies between markdown, HTML and the editor tree")
        .arg_required_else_help(true)
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
                .about("Convert a message into the editor tree")
                .arg(input_arg())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format")
                        .value_parser(clap::builder::PossibleValuesParser::new(SOURCE_FORMATS)),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format")
                        .value_parser(clap::builder::PossibleValuesParser::new(OUTPUT_FORMATS)),
                )
                .arg(output_arg())
                .arg(
                    Arg::new("markdown")
                        .long("markdown")
                        .help("Escape literal text as markdown")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("no-markdown")
                        .long("no-markdown")
                        .help("Keep literal text verbatim")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render markdown to message HTML")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("escape")
                .about("Escape markdown triggers line by line")
                .arg(input_arg())
                .arg(
                    Arg::new("reverse")
                        .long("reverse")
                        .help("Remove the escapes instead of adding them")
                        .action(ArgAction::SetTrue),
                ),
        );

    generate_to(Bash, &mut cmd, "mxmd", &outdir)?;
    generate_to(Zsh, &mut cmd, "mxmd", &outdir)?;
    generate_to(Fish, &mut cmd, "mxmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
