use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use stmtcsv_cli::{Config, Overrides, load_file_config, run};
use stmtcsv_ingest::StatementFormat;

#[derive(Parser, Debug)]
#[command(
    name = "stmtcsv",
    version,
    about = "Convert bank statement PDFs to per-account CSV files"
)]
struct Cli {
    /// Directory containing input PDFs (default: input)
    #[arg(short, long, value_name = "DIR")]
    input: Option<PathBuf>,

    /// Directory for output CSVs, created if missing (default: output)
    #[arg(short, long, value_name = "DIR")]
    output: Option<PathBuf>,

    /// If specified, move PDFs to this directory once processed
    #[arg(short, long, value_name = "DIR")]
    archive: Option<PathBuf>,

    /// Do not add a header row to the output
    #[arg(short, long)]
    no_header: bool,

    /// Statement layout (default: chase-uk)
    #[arg(short, long, value_name = "FORMAT")]
    format: Option<StatementFormat>,

    /// TOML file with defaults for the options above
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file = cli.config.as_deref().map(load_file_config).transpose()?;
    let config = Config::resolve(
        Overrides {
            input: cli.input,
            output: cli.output,
            archive: cli.archive,
            no_header: cli.no_header,
            format: cli.format,
        },
        file,
    );
    log::debug!("{config:?}");

    let summary = run(&config)?;
    println!("{summary}");

    Ok(())
}
