//! discogs-write: Persist decoded dump records as a JSON document
//!
//! Usage:
//!   # Artists from a file into one JSON array, without image metadata
//!   discogs-write --kind artists --exclude-images artists.jsonl -o artists.json
//!
//!   # Read from stdin
//!   cat releases.jsonl | discogs-write --kind releases -o releases.json
//!
//!   # Write only the first record as a bare JSON value
//!   discogs-write --kind label --single labels.jsonl -o label.json

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use anyhow::{bail, Context, Result};
use clap::Parser;
use discogs_write::{
    write_ndjson, Artist, CatalogRecord, FileJsonWriter, JsonWriter, Label, Master, NdjsonSource,
    Options, RecordKind, Release, Writer,
};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{stdin, BufRead, BufReader};

#[derive(Parser, Debug)]
#[command(name = "discogs-write")]
#[command(about = "Write decoded Discogs records as JSON", long_about = None)]
struct Args {
    /// Newline-delimited JSON records (use stdin if omitted)
    #[arg(value_name = "FILE")]
    input: Option<String>,

    /// Kind of record held by the input: artists, labels, masters or releases
    #[arg(long, short = 'k')]
    kind: RecordKind,

    /// Destination file, created or truncated
    #[arg(long, short = 'o')]
    output: String,

    /// Drop image metadata from every record
    #[arg(long)]
    exclude_images: bool,

    /// Write only the first record as a bare JSON value
    #[arg(long)]
    single: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let reader: Box<dyn BufRead> = if let Some(file_path) = &args.input {
        let file = File::open(file_path).with_context(|| format!("Failed to open {}", file_path))?;
        Box::new(BufReader::new(file))
    } else {
        Box::new(BufReader::new(stdin()))
    };

    let options = Options::default().with_exclude_images(args.exclude_images);
    let mut writer = JsonWriter::create(&args.output, options)?;

    let result = match args.kind {
        RecordKind::Artist => run::<Artist>(reader, &mut writer, args.single),
        RecordKind::Label => run::<Label>(reader, &mut writer, args.single),
        RecordKind::Master => run::<Master>(reader, &mut writer, args.single),
        RecordKind::Release => run::<Release>(reader, &mut writer, args.single),
    };

    // Release the file even when writing failed
    let closed = writer.close();
    let count = result?;
    closed.context("Failed to close output")?;

    log::info!("wrote {} {} records to {}", count, args.kind, args.output);
    Ok(())
}

fn run<T>(reader: Box<dyn BufRead>, writer: &mut FileJsonWriter, single: bool) -> Result<usize>
where
    T: CatalogRecord + DeserializeOwned,
{
    if !single {
        return write_ndjson::<T, _, _>(reader, writer);
    }

    let mut source = NdjsonSource::<_, T>::new(reader);
    match source.next() {
        Some(record) => {
            writer.write_one(&record?)?;
            Ok(1)
        }
        None => bail!("No {} records found in input", T::KIND),
    }
}
