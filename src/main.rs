use anyhow::Context;
use clap::Parser;
use log::{info, warn};
use std::path::PathBuf;
use vnaddress::io::{self, RecordWriter, DEFAULT_BATCH_SIZE};
use vnaddress::{AddressParser, Lexicons, ParserOptions, COMMA, STREET_JOINER};

#[derive(Parser, Debug)]
#[command(name = "vnaddress")]
#[command(about = "Split Vietnamese addresses into street, ward, district, city and country")]
struct Args {
    /// Input CSV file; the address is the first field of each row
    #[arg(default_value = "test.csv")]
    input: PathBuf,

    /// Output CSV file (default: <output-dir>/test-<unix time>.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory for the generated output file
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,

    /// Lexicon CSV (category,key) replacing the built-in one
    #[arg(long)]
    lexicon: Option<PathBuf>,

    /// Segment separator, tried in the given order (repeatable)
    #[arg(short, long = "separator", default_value = COMMA)]
    separators: Vec<String>,

    /// Rows written per batch
    #[arg(long, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    /// Skip the first input row
    #[arg(long)]
    has_headers: bool,

    /// Match markers case-insensitively in addresses without separators
    #[arg(long)]
    fold_case: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let lexicons = match &args.lexicon {
        Some(path) => Lexicons::from_csv_path(path)
            .with_context(|| format!("loading lexicon {}", path.display()))?,
        None => Lexicons::vietnam(),
    };
    let options = ParserOptions {
        separators: args.separators.clone(),
        street_joiner: STREET_JOINER.to_string(),
        fold_case: args.fold_case,
    };
    let parser = AddressParser::with_options(lexicons, options);

    let addresses = io::read_addresses_from_path(&args.input, args.has_headers)
        .with_context(|| format!("reading {}", args.input.display()))?;
    if addresses.is_empty() {
        warn!("No addresses in {}", args.input.display());
        return Ok(());
    }

    let records = parser.parse_all(&addresses);
    let structured = records.iter().filter(|r| r.is_structured()).count();
    info!(
        "Parsed {} addresses, {} with at least one administrative unit",
        records.len(),
        structured
    );

    let output = args
        .output
        .unwrap_or_else(|| io::default_output_path(&args.output_dir, "test"));
    let mut writer = RecordWriter::create(&output, args.batch_size)
        .with_context(|| format!("creating {}", output.display()))?;
    writer
        .write_all(&records)
        .with_context(|| format!("writing {}", output.display()))?;
    writer.finish()?;

    println!("{}", output.display());
    Ok(())
}
