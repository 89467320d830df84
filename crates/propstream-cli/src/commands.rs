use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context};
use colored::Colorize;
use propstream_table::{PropertyRecord, PropertyTable, TableConfig, RECORD_SIZE};
use propstream_types::{PropertyFlags, PropertyId, PropertyType};
use serde::Deserialize;

use crate::cli::*;
use crate::config::CliConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::load(cli.config.as_deref())?;
    let format = cli.format.unwrap_or(config.format);
    match cli.command {
        Command::Dump(args) => cmd_dump(args, format, config.table),
        Command::Verify(args) => cmd_verify(args, config.table),
        Command::Build(args) => cmd_build(args),
    }
}

/// One entry of the `build` input file. Kept separate from
/// `PropertyRecord`'s own serde form so the raw payload goes through
/// `PropertyTable::append` and its width check.
#[derive(Debug, Deserialize)]
struct RecordSpec {
    id: PropertyId,
    #[serde(rename = "type")]
    prop_type: PropertyType,
    #[serde(default)]
    flags: PropertyFlags,
    data: String,
}

fn load_table(path: &Path, config: TableConfig) -> anyhow::Result<PropertyTable> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut table = PropertyTable::with_config(config);
    table
        .decode(BufReader::new(file))
        .with_context(|| format!("decoding {}", path.display()))?;
    Ok(table)
}

fn build_table(json: &str) -> anyhow::Result<PropertyTable> {
    let specs: Vec<RecordSpec> = serde_json::from_str(json).context("parsing record list")?;
    let mut table = PropertyTable::new();
    for (index, spec) in specs.into_iter().enumerate() {
        let data = hex::decode(&spec.data)
            .with_context(|| format!("record {index}: data is not hex"))?;
        table
            .append(spec.id, spec.prop_type, &data, spec.flags)
            .with_context(|| format!("record {index} ({})", spec.id))?;
    }
    Ok(table)
}

fn write_table(table: &PropertyTable, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    table.encode(&mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Readable form of the payload: the inline value for fixed-length types,
/// the 4-byte size field for known variable-length types.
fn describe_value(record: &PropertyRecord) -> String {
    let prop_type = record.prop_type();
    if prop_type.is_fixed_length() {
        record.data_u64().to_string()
    } else if prop_type.name().is_some() {
        format!("size {}", record.data_u32())
    } else {
        "-".to_string()
    }
}

fn cmd_dump(args: DumpArgs, format: OutputFormat, config: TableConfig) -> anyhow::Result<()> {
    let table = load_table(&args.path, config)?;
    let selected: Vec<(usize, &PropertyRecord)> = match args.id {
        Some(id) => {
            let record = table
                .find(id)
                .with_context(|| format!("no record with id {id} in {}", args.path.display()))?;
            let index = table.iter().position(|r| r.id() == id).unwrap_or_default();
            vec![(index, record)]
        }
        None => table.iter().enumerate().collect(),
    };
    match format {
        OutputFormat::Json => {
            let records: Vec<&PropertyRecord> = selected.iter().map(|(_, r)| *r).collect();
            println!("{}", serde_json::to_string_pretty(&records)?);
        }
        OutputFormat::Text => {
            println!(
                "{}",
                format!(
                    "{:>4}  {:<10}  {:<6}  {:<8}  {:<26}  {:<16}  {}",
                    "#", "tag", "id", "type", "flags", "data", "value"
                )
                .bold()
            );
            for (index, record) in &selected {
                println!(
                    "{:>4}  {:<10}  {:<6}  {:<8}  {:<26}  {:<16}  {}",
                    index,
                    record.tag().to_string().dimmed(),
                    record.id().to_string().yellow(),
                    record.prop_type().to_string().cyan(),
                    record.flags().to_string(),
                    hex::encode(record.data()),
                    describe_value(record)
                );
            }
            println!("{} of {} records", selected.len().to_string().bold(), table.len());
        }
    }
    Ok(())
}

fn cmd_verify(args: VerifyArgs, config: TableConfig) -> anyhow::Result<()> {
    let len = std::fs::metadata(&args.path)
        .with_context(|| format!("reading {}", args.path.display()))?
        .len();
    let trailing = len % RECORD_SIZE as u64;
    if trailing != 0 {
        bail!(
            "{} is {} bytes, {} past the last whole {}-byte record",
            args.path.display(),
            len,
            trailing,
            RECORD_SIZE
        );
    }
    let table = load_table(&args.path, config)?;
    println!("{} {} records, {} bytes", "✓".green().bold(), table.len(), len);
    Ok(())
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;
    let table = build_table(&json)?;
    write_table(&table, &args.output)?;
    println!(
        "{} Wrote {} records ({} bytes) to {}",
        "✓".green().bold(),
        table.len(),
        table.encoded_len(),
        args.output.display().to_string().bold()
    );
    Ok(())
}
