// Command-line interface for rte
//
// This binary provides commands for converting and decorating rich-text
// editor content.
//
// The main role of the rte program is to interface with editor content on
// disk: converting between the markup and Markdown views, injecting word
// highlights for read-only previews, and extracting plain text. The core
// capabilities live in the rte-babel crate; this binary is a shell around it.
//
// Converting:
//
// The conversion needs a to and from pair. The from can be auto-detected from
// the file extension, while being overwrittable by an explicit --from flag.
// Usage:
//  rte <input> --to <format> [--from <format>] [--output <file>]  - Convert between formats (default)
//  rte convert <input> --to <format> [--from <format>] [--output <file>]  - Same as above (explicit)
//  rte highlight <input> --words cat,dog [--class name]  - Wrap words in highlight spans
//  rte highlight <input> --spec words.json               - Per-word colors from a JSON spec
//  rte text <input> [--count]                            - Extract plain text (or count characters)
//  rte word-at <input> <offset>                          - Word at a plain-text character offset
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the format.
// Example:
//  rte convert notes.html --to markdown --extra-unordered-marker "*"

use clap::{Arg, ArgAction, Command, ValueHint};
use rte_babel::{highlight_multi_with_rules, highlight_single, plain_text, word_at_offset};
use rte_babel::{FormatRegistry, WordColor};
use rte_config::{Loader, RteConfig};
use std::collections::HashMap;
use std::fs;

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
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                !args[i + 1].starts_with('-')
            } else {
                false
            };

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
    Command::new("rte")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for converting and decorating rich-text editor content")
        .long_about(
            "rte is a command-line tool for working with rich-text editor content.\n\n\
            Commands:\n  \
            - convert:   Transform between the markup and Markdown views\n  \
            - highlight: Wrap word occurrences in highlight spans\n  \
            - text:      Extract the plain text of a markup file\n  \
            - word-at:   Look up the word at a plain-text character offset\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n\n\
            Examples:\n  \
            rte notes.html --to markdown            # Convert to Markdown (stdout)\n  \
            rte notes.md --to markup -o notes.html  # Markdown to markup file\n  \
            rte highlight notes.html --words cat    # Highlight 'cat' everywhere\n  \
            rte text notes.html --count             # Character count of the text",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to an rte.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert between content formats (default command)")
                .long_about(
                    "Convert content between the two editor views.\n\n\
                    Supported formats:\n  \
                    - markup:   The editor's markup, a small HTML subset (.html)\n  \
                    - markdown: The extended Markdown dialect (.md)\n\n\
                    The source format is auto-detected from the file extension.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    rte convert notes.html --to markdown          # Convert to Markdown (stdout)\n  \
                    rte convert notes.md --to markup -o out.html  # Markdown to markup file\n  \
                    rte notes.html --to markdown                  # 'convert' is optional",
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
                        .help("Source format (auto-detected from file extension if not specified)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (required)")
                        .long_help(
                            "Target format to convert to.\n\n\
                            Available formats: markup, markdown\n\
                            Use the format name, not the file extension.",
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
        .subcommand(
            Command::new("highlight")
                .about("Wrap word occurrences in highlight spans")
                .long_about(
                    "Inject <span> highlights around word occurrences in a markup file.\n\n\
                    Matching is case-insensitive on word boundaries and never touches\n\
                    tags or attributes. Text inside existing spans is skipped, so the\n\
                    command can be re-run over its own output.\n\n\
                    Word sources (exactly one is required):\n  \
                    --words w1,w2   One shared highlight class for every word\n  \
                    --spec file     JSON array of {word, color} entries with per-word colors\n\n\
                    Examples:\n  \
                    rte highlight notes.html --words cat,dog          # Shared class\n  \
                    rte highlight notes.html --words cat --class mark # Custom class\n  \
                    rte highlight notes.html --spec words.json        # Per-word colors",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markup file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("words")
                        .long("words")
                        .help("Comma-separated list of words to highlight")
                        .value_hint(ValueHint::Other)
                        .conflicts_with("spec"),
                )
                .arg(
                    Arg::new("spec")
                        .long("spec")
                        .help("Path to a JSON file with per-word color entries")
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("class")
                        .long("class")
                        .help("Span class for --words highlighting (defaults from config)")
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
        .subcommand(
            Command::new("text")
                .about("Extract the plain text of a markup file")
                .long_about(
                    "Strip tags and decode entities, leaving only the visible text.\n\n\
                    Examples:\n  \
                    rte text notes.html           # Plain text to stdout\n  \
                    rte text notes.html --count   # Character count only",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markup file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("count")
                        .long("count")
                        .help("Print the character count instead of the text")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("word-at")
                .about("Look up the word at a plain-text character offset")
                .long_about(
                    "Extract the plain text of a markup file and report the word\n\
                    surrounding the given character offset, lowercased. Exits with\n\
                    status 1 when there is no word at that offset.",
                )
                .arg(
                    Arg::new("input")
                        .help("Input markup file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("offset")
                        .help("Character offset into the plain text (0-based)")
                        .required(true)
                        .index(2)
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "convert"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A first arg that is no known subcommand and no flag is taken as
            // a file for the implicit convert command.
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && !matches!(
                    cleaned_args[1].as_str(),
                    "convert" | "highlight" | "text" | "word-at" | "help"
                )
            {
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

    let config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let from_arg = sub_matches.get_one::<String>("from");
            let to = sub_matches.get_one::<String>("to").expect("to is required");

            // Auto-detect --from if not provided
            let from = if let Some(f) = from_arg {
                f.to_string()
            } else {
                let registry = FormatRegistry::default();
                match registry.detect_format_from_filename(input) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not detect format from filename '{input}'");
                        eprintln!("Please specify --from explicitly");
                        std::process::exit(1);
                    }
                }
            };

            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, &from, to, output, &extra_params, &config);
        }
        Some(("highlight", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let words = sub_matches.get_one::<String>("words");
            let spec = sub_matches.get_one::<String>("spec");
            let class = sub_matches.get_one::<String>("class");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_highlight_command(input, words, spec, class, output, &config);
        }
        Some(("text", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            handle_text_command(input, sub_matches.get_flag("count"));
        }
        Some(("word-at", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let offset = *sub_matches
                .get_one::<usize>("offset")
                .expect("offset is required");
            handle_word_at_command(input, offset);
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    from: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &RteConfig,
) {
    let registry = FormatRegistry::default();

    // Validate formats exist
    if let Err(e) = registry.get(from) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let doc = registry.parse(&source, from).unwrap_or_else(|e| {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    });

    // Configured knobs first, --extra-* on top.
    let mut format_options = HashMap::new();
    if to == "markdown" {
        format_options.insert(
            "unordered_marker".to_string(),
            config.convert.markdown.unordered_marker.to_string(),
        );
    }
    for (key, value) in extra_params {
        format_options.insert(key.replace('-', "_"), value.clone());
    }

    let result = registry
        .serialize_with_options(&doc, to, &format_options)
        .unwrap_or_else(|e| {
            eprintln!("Serialization error: {e}");
            std::process::exit(1);
        });

    write_output(output, &result);
}

/// Handle the highlight command
fn handle_highlight_command(
    input: &str,
    words: Option<&String>,
    spec: Option<&String>,
    class: Option<&String>,
    output: Option<&str>,
    config: &RteConfig,
) {
    let markup = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let result = match (words, spec) {
        (Some(words), None) => {
            let words = split_words(words);
            if words.is_empty() {
                eprintln!("Error: --words contained no words");
                std::process::exit(1);
            }
            let refs: Vec<&str> = words.iter().map(String::as_str).collect();
            let class = class.map(String::as_str).unwrap_or(&config.highlight.class);
            highlight_single(&markup, &refs, class)
        }
        (None, Some(spec_path)) => {
            let spec_source = fs::read_to_string(spec_path).unwrap_or_else(|e| {
                eprintln!("Error reading file '{spec_path}': {e}");
                std::process::exit(1);
            });
            let entries: Vec<WordColor> = serde_json::from_str(&spec_source).unwrap_or_else(|e| {
                eprintln!("Error parsing spec file '{spec_path}': {e}");
                std::process::exit(1);
            });
            highlight_multi_with_rules(&markup, &entries, &(&config.highlight).into())
        }
        _ => {
            eprintln!("Error: provide exactly one of --words or --spec");
            std::process::exit(1);
        }
    };

    write_output(output, &result);
}

/// Handle the text command
fn handle_text_command(input: &str, count: bool) {
    let markup = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let text = plain_text(&markup);
    if count {
        println!("{}", text.chars().count());
    } else {
        print!("{text}");
    }
}

/// Handle the word-at command
fn handle_word_at_command(input: &str, offset: usize) {
    let markup = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    let text = plain_text(&markup);
    match word_at_offset(&text, offset) {
        Some(word) => println!("{word}"),
        None => {
            eprintln!("No word at offset {offset}");
            std::process::exit(1);
        }
    }
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

fn split_words(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}

fn load_cli_config(explicit_path: Option<&str>) -> RteConfig {
    let loader = Loader::new().with_optional_file("rte.toml");
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
