// Command-line interface for richtext
//
// This binary renders the rich-text fields the studio site stores in Payload CMS (Lexical editor
// JSON) outside of the site itself: to preview a field, to produce an excerpt, or to see what the
// renderer makes of a document an editor says looks wrong.
//
// The core capabilities live in the richtext-babel crate; this crate only deals with files, stdin,
// configuration and exit codes.
//
// Converting:
//
// The conversion needs a to and from pair. The from is auto-detected from the file extension (or
// assumed to be json when reading stdin), while being overwrittable by an explicit --from flag.
// Usage:
//  richtext <input> --to <format> [--from <format>] [--output <file>]          - Convert (default)
//  richtext convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above
//  richtext inspect <input> [<view>]     - Show the parsed document (defaults to "treeviz")
//  richtext --list-formats               - List available formats and views
//
// Use "-" as the input to read from stdin.
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix. Keys that mirror configuration settings (escape-text,
// safe-links, max-depth, max-chars, show-formats) override the loaded configuration; the rest are
// passed to the target format.
// Example:
//  richtext description.json --to text --extra-max-chars 160

use richtext_cli::{inspect, registry_from_config};

use clap::{Arg, ArgAction, Command, ValueHint};
use richtext_babel::formats::{common, TreevizOptions};
use richtext_config::{Loader, RichtextConfig};
use std::collections::HashMap;
use std::fs;
use std::io;
use tracing_subscriber::EnvFilter;

/// Input path meaning "read from stdin".
const STDIN_PATH: &str = "-";

/// Project configuration picked up from the working directory when present.
const PROJECT_CONFIG: &str = "richtext.toml";

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following token that is not a flag is the value
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

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
    Command::new("richtext")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Render Lexical rich-text documents (Payload CMS fields) to HTML and friends")
        .long_about(
            "richtext is a command-line tool for working with Lexical rich-text documents,\n\
            the JSON the Lexical editor produces and Payload CMS stores.\n\n\
            Commands:\n  \
            - convert: Render a document to html, text, json or treeviz (default command)\n  \
            - inspect: View the document as the renderers see it\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            richtext description.json --to html              # Render to HTML (stdout)\n  \
            richtext description.json --to text --extra-max-chars 160\n  \
            richtext inspect description.json                # View the document tree\n  \
            cat field.json | richtext - --to html -o out.html"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available formats and inspect views")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a richtext.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log debug output to stderr (otherwise RUST_LOG applies)")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect how a document is parsed")
                .long_about(
                    "View a document after lenient parsing: unknown nodes, dropped fields\n\
                    and format flags become visible.\n\n\
                    Views:\n  \
                    - treeviz:  Tree visualization (default)\n  \
                    - json:     Normalized Lexical JSON\n\n\
                    Extra Parameters:\n  \
                    --extra-show-formats false   Hide text format flags\n\n\
                    Examples:\n  \
                    richtext inspect description.json          # Tree visualization\n  \
                    richtext inspect description.json json     # Normalized JSON"
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON document ('-' for stdin)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("view")
                        .help("View to show. Defaults to 'treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            inspect::AVAILABLE_VIEWS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a document to another format (default command)")
                .long_about(
                    "Render a rich-text document.\n\n\
                    Supported formats:\n  \
                    - json:     Lexical JSON (.json), input and normalized output\n  \
                    - html:     HTML fragment (.html)\n  \
                    - text:     Plain text and excerpts (.txt)\n  \
                    - treeviz:  Tree visualization\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    richtext convert description.json --to html           # HTML (stdout)\n  \
                    richtext convert bio.json --to text -o bio.txt        # Plain text file\n  \
                    richtext description.json --to html                   # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path ('-' for stdin)")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("from")
                        .long("from")
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: html, json, text, treeviz\n\
                            Use the format name, not the file extension."
                        )
                        .required(true)
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args; a leading input path means "convert"
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            if cleaned_args.len() > 1 && looks_like_input(&cleaned_args[1]) {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&config);
        return;
    }

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let Some(path) = sub_matches.get_one::<String>("path") else {
                fail("Missing input path");
            };
            let view = sub_matches
                .get_one::<String>("view")
                .map(|s| s.as_str())
                .unwrap_or(inspect::DEFAULT_VIEW);
            handle_inspect_command(path, view, &extra_params, &config);
        }
        Some(("convert", sub_matches)) => {
            let (Some(input), Some(to)) = (
                sub_matches.get_one::<String>("input"),
                sub_matches.get_one::<String>("to"),
            ) else {
                fail("Missing input path or --to format");
            };

            let from = match sub_matches.get_one::<String>("from") {
                Some(from) => from.to_string(),
                None => detect_source_format(input, &config),
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        _ => fail("Unknown subcommand. Use --help for usage information."),
    }
}

fn looks_like_input(arg: &str) -> bool {
    (arg == STDIN_PATH || !arg.starts_with('-'))
        && !matches!(arg, "inspect" | "convert" | "help")
}

/// `--verbose` forces debug level, otherwise RUST_LOG decides (warnings by default).
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn fail(message: &str) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn read_input(path: &str) -> String {
    let result = if path == STDIN_PATH {
        io::read_to_string(io::stdin())
    } else {
        fs::read_to_string(path)
    };
    result.unwrap_or_else(|e| {
        let name = if path == STDIN_PATH { "<stdin>" } else { path };
        fail(&format!("Could not read '{name}': {e}"))
    })
}

fn detect_source_format(input: &str, config: &RichtextConfig) -> String {
    if input == STDIN_PATH {
        return "json".to_string();
    }
    registry_from_config(config)
        .detect_format_from_filename(input)
        .unwrap_or_else(|| {
            fail(&format!(
                "Could not detect format from filename '{input}'. Please specify --from explicitly"
            ))
        })
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    view: &str,
    extra_params: &HashMap<String, String>,
    config: &RichtextConfig,
) {
    let source = read_input(path);
    let options = TreevizOptions::from(&config.inspect.treeviz);

    let output = inspect::execute_view(&source, view, &options, extra_params)
        .unwrap_or_else(|e| fail(&e));

    print!("{output}");
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &RichtextConfig,
) {
    let registry = registry_from_config(config);

    // Validate formats exist before touching the input
    for name in [from, to] {
        if let Err(e) = registry.get(name) {
            fail(&e.to_string());
        }
    }

    let source = read_input(input);
    let doc = registry
        .parse(&source, from)
        .unwrap_or_else(|e| fail(&e.to_string()));
    tracing::debug!(input, from, to, nodes = doc.children.len(), "parsed input");

    let result = registry
        .serialize_with_options(&doc, to, extra_params)
        .unwrap_or_else(|e| fail(&e.to_string()));

    match output {
        Some(path) => fs::write(path, result)
            .unwrap_or_else(|e| fail(&format!("Could not write '{path}': {e}"))),
        None => print!("{result}"),
    }
}

/// Handle the list-formats command
fn handle_list_formats_command(config: &RichtextConfig) {
    let registry = registry_from_config(config);

    println!("Conversion formats:");
    for name in registry.list_formats() {
        let Ok(format) = registry.get(&name) else {
            continue;
        };
        let extensions = format.file_extensions().join(", ");
        if extensions.is_empty() {
            println!("  {name:<10} {}", format.description());
        } else {
            println!("  {name:<10} {} ({extensions})", format.description());
        }
    }

    println!("\nInspect views:");
    for view in inspect::AVAILABLE_VIEWS {
        println!("  {view}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> RichtextConfig {
    let loader = Loader::new().with_optional_file(PROJECT_CONFIG);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

fn apply_config_overrides(config: &mut RichtextConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["escape-text", "escape"]) {
        config.render.html.escape_text = parse_bool_arg("escape-text", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["safe-links"]) {
        config.render.html.safe_links = parse_bool_arg("safe-links", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["max-depth"]) {
        config.render.html.max_depth = parse_usize_arg("max-depth", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["max-chars", "excerpt"]) {
        config.render.text.max_chars = parse_usize_arg("max-chars", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["show-formats"]) {
        config.inspect.treeviz.show_formats = parse_bool_arg("show-formats", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    common::parse_bool(flag, raw).unwrap_or_else(|e| fail(&format!("--extra-{flag}: {e}")))
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    common::parse_usize(flag, raw).unwrap_or_else(|e| fail(&format!("--extra-{flag}: {e}")))
}
