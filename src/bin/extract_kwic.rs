use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use clap::{Parser, Subcommand};
use log::{error, info, warn};
use kwic::{
    KwicConfig,
    Result,
    Document,
    config::FromIni,
    parser::{TextParser, TeiParser},
    utils::logger::init_logging,
};

const DEFAULT_CONFIG: &str = "default.ini";

#[derive(Parser)]
#[command(name = "extract_kwic", version, about = "Build a key-word-in-context table from a TEI edition")]
struct Cli {
    /// INI configuration file (defaults to default.ini when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// TEI document to read
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// CSV file to write
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// none, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Write the KWIC table (default)
    Kwic,
    /// Print the flattened text of every line
    Texts,
    /// Print the tags of the direct children of every line
    Tags {
        /// Print each tag with its direct text
        #[arg(long)]
        with_text: bool,
    },
}

fn load_config(cli: &Cli) -> Result<(KwicConfig, bool)> {
    let (mut config, defaulted) = match &cli.config {
        Some(path) => (KwicConfig::from_ini(path)?, false),
        None if Path::new(DEFAULT_CONFIG).exists() => (KwicConfig::from_ini(DEFAULT_CONFIG)?, false),
        None => (KwicConfig::default(), true),
    };

    if let Some(input) = &cli.input {
        config.files.input_path = input.clone();
    }
    if let Some(output) = &cli.output {
        config.files.output_path = output.clone();
    }
    if let Some(level) = &cli.log_level {
        if let Some(result) = config.output.from_ini_section("output", "log_level", level) {
            result?;
        }
    }

    config.validate()?;
    Ok((config, defaulted))
}

fn print_lines(lines: &[String]) -> Result<()> {
    let mut out = BufWriter::new(io::stdout().lock());
    for line in lines {
        writeln!(out, "{}", line)?;
    }
    out.flush()?;
    Ok(())
}

fn inspect(config: &KwicConfig, command: Command) -> Result<()> {
    let document = Document::from_path(&config.files.input_path)?;
    let parser = TeiParser::new(config.parser.clone());

    let lines = match command {
        Command::Tags { with_text } => parser.child_tag_listing(&document, with_text),
        _ => parser.line_texts(&document),
    };
    print_lines(&lines)
}

fn run(cli: Cli) -> Result<()> {
    let (config, defaulted) = load_config(&cli)?;
    init_logging(&config)?;
    config.report_warnings();

    if defaulted {
        warn!("No configuration file found at {}, using defaults", DEFAULT_CONFIG);
    }
    info!("Reading {:?}", config.files.input_path);

    match cli.command.unwrap_or(Command::Kwic) {
        Command::Kwic => {
            let summary = kwic::extract_kwic(&config)?;
            info!(
                "Finished: {} rows from {} lines",
                summary.rows_written, summary.lines_processed
            );
        }
        command => inspect(&config, command)?,
    }
    Ok(())
}

fn main() {
    if let Err(e) = run(Cli::parse()) {
        error!("{}", e);
        eprintln!("extract_kwic: {}", e);
        std::process::exit(1);
    }
}
