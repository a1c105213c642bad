use clap::{Arg, Command};
use std::path::Path;
use tracing::debug;

use groovyfmt::decoding;
use groovyfmt::formatting::{Formatter, FormatterOptions};
use groovyfmt::problem;

fn main() {
    tracing_subscriber::fmt::init();

    const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

    let matches = Command::new("groovyfmt")
        .version(VERSION)
        .propagate_version(true)
        .about("A code formatter for Groovy pipeline scripts.")
        .disable_help_subcommand(true)
        .subcommand(
            Command::new("check")
                .about("Verify that the given block tree decodes cleanly")
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the JSON block tree you want to check. Use \"-\" to read from standard input."),
                ),
        )
        .subcommand(
            Command::new("format")
                .about("Render the given block tree as formatted source")
                .arg(
                    Arg::new("width")
                        .long("width")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("80")
                        .help("Line width, in columns, beyond which breakable tokens are wrapped."),
                )
                .arg(
                    Arg::new("indent")
                        .long("indent")
                        .value_parser(clap::value_parser!(usize))
                        .default_value("2")
                        .help("Spaces per indentation level."),
                )
                .arg(
                    Arg::new("filename")
                        .required(true)
                        .help("The file containing the JSON block tree you want to format. Use \"-\" to read from standard input."),
                ),
        )
        .get_matches();

    match matches.subcommand() {
        Some(("check", submatches)) => {
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            run_check(Path::new(filename));
        }
        Some(("format", submatches)) => {
            let width = *submatches
                .get_one::<usize>("width")
                .unwrap();
            let indent = *submatches
                .get_one::<usize>("indent")
                .unwrap();
            let filename = submatches
                .get_one::<String>("filename")
                .unwrap();
            run_format(
                Path::new(filename),
                FormatterOptions { width, indent },
            );
        }
        _ => {
            println!("usage: groovyfmt [COMMAND] ...");
            println!("Try '--help' for more information.");
        }
    }
}

fn load_tree(filename: &Path) -> groovyfmt::language::CodeBlock {
    let content = match decoding::load(filename) {
        Ok(content) => content,
        Err(error) => {
            eprintln!("{}", problem::concise_loading_error(&error));
            std::process::exit(1);
        }
    };

    match decoding::decode(&content) {
        Ok(tree) => tree,
        Err(error) => {
            eprintln!("{}", problem::concise_decoding_error(&error, filename));
            std::process::exit(1);
        }
    }
}

fn run_check(filename: &Path) {
    let tree = load_tree(filename);
    debug!(
        "{}: {} nodes",
        filename.display(),
        tree.size()
    );
    println!("ok");
}

fn run_format(filename: &Path, options: FormatterOptions) {
    let tree = load_tree(filename);

    let formatter = Formatter::with_options(options);
    let mut output = formatter.format(&tree);

    for diagnostic in formatter.take_diagnostics() {
        eprintln!("{}", problem::concise_diagnostic(&diagnostic));
    }

    if !output.is_empty() && !output.ends_with('\n') {
        output.push('\n');
    }
    print!("{}", output);
}
