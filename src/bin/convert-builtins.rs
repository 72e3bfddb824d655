//! Builtin definition converter binary.
//!
//! Reads a `Builtins*.def` file (or stdin) and writes the matching
//! `Builtins*.td` TableGen records.

use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use builtins_td::tablegen::{
    convert_file, convert_record, convert_source, read_source, BuiltinRecord, ConvertOptions, DEMO_LINES,
};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "convert-builtins", version, about = "Convert clang TARGET_BUILTIN records to TableGen")]
struct Cli {
    /// Input .def file; stdin when omitted.
    input: Option<PathBuf>,

    /// Output .td file [default: Builtins<TARGET>.td]
    #[arg(short, long, conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the converted records instead of writing a file.
    #[arg(long)]
    stdout: bool,

    /// Target name used in the header and the default output name.
    #[arg(long, default_value = "SystemZ")]
    target: String,

    /// Omit the license banner and include line.
    #[arg(long)]
    no_header: bool,

    /// Convert a few reference records and show the results.
    #[arg(long, conflicts_with_all = ["input", "output", "stdout"])]
    demo: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run_demo(options: &ConvertOptions) {
    println!("=== Testing Conversion ===\n");
    for (line, description) in DEMO_LINES {
        println!("Test: {}", description);
        println!("Input: {}", line);
        match BuiltinRecord::parse_line(line) {
            Some(record) => {
                println!("Parsed:");
                println!("  Name: {}", record.name);
                println!("  Prototype: {}", record.prototype);
                println!("  Attributes: {}", record.attributes);
                println!("  Feature: {}", record.feature);
                let (text, _) = convert_record(&record, options);
                println!("Result:");
                println!("{}", text);
            }
            None => println!("Parse failed!"),
        }
        println!("{}", "-".repeat(60));
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = ConvertOptions::new(cli.target.as_str()).with_header(!cli.no_header);

    if cli.demo {
        run_demo(&options);
        return Ok(());
    }

    let Some(input) = cli.input else {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        let conversion = convert_source(&source, &options);
        println!("{}", conversion.output);
        eprint!("{}", conversion.stats);
        return Ok(());
    };

    if cli.stdout {
        let source = read_source(&input)?;
        let conversion = convert_source(&source, &options);
        println!("{}", conversion.output);
        eprint!("{}", conversion.stats);
        return Ok(());
    }

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(options.output_file_name()));
    let stats = convert_file(&input, &output, &options)?;
    println!("Conversion completed!");
    println!("Output file: {}", output.display());
    print!("{}", stats);
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
