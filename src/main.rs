use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
    process,
};

use clap::Parser;
use conflang::convert_to_json;

/// conflang translates a configuration written in its small configuration
/// language into a JSON document.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path of the JSON file to write.
    #[arg(short, long)]
    output: PathBuf,

    /// Writes the JSON on a single line instead of pretty-printing it.
    #[arg(short, long)]
    compact: bool,

    /// Configuration file to translate. Reads standard input if omitted.
    input: Option<PathBuf>,
}

fn read_source(input: Option<&PathBuf>) -> io::Result<String> {
    match input {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut source = String::new();
            io::stdin().read_to_string(&mut source)?;
            Ok(source)
        },
    }
}

fn main() {
    let args = Args::parse();

    let source = read_source(args.input.as_ref()).unwrap_or_else(|e| {
                                                   match &args.input {
                                                       Some(path) => {
                                                           eprintln!("Failed to read the input file '{}': {e}",
                                                                     path.display());
                                                       },
                                                       None => eprintln!("Failed to read standard input: {e}"),
                                                   }
                                                   process::exit(1);
                                               });

    let json = convert_to_json(&source, args.compact).unwrap_or_else(|e| {
                                                         eprintln!("{e}");
                                                         process::exit(1);
                                                     });

    if let Err(e) = fs::write(&args.output, json) {
        eprintln!("Failed to write the output file '{}': {e}", args.output.display());
        process::exit(1);
    }

    println!("Configuration saved to {}", args.output.display());
}
