use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use propstream_types::PropertyId;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(
    name = "propstream",
    about = "Inspect and build fixed-length property table streams",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format; overrides the config file
    #[arg(long, global = true)]
    pub format: Option<OutputFormat>,

    /// TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a stream and print its records
    Dump(DumpArgs),
    /// Check that a stream is well formed
    Verify(VerifyArgs),
    /// Encode a JSON record list into a stream
    Build(BuildArgs),
}

#[derive(Args)]
pub struct DumpArgs {
    pub path: PathBuf,
    /// Print only the first record with this id (hex)
    #[arg(long, value_parser = parse_id)]
    pub id: Option<PropertyId>,
}

fn parse_id(s: &str) -> Result<PropertyId, String> {
    PropertyId::from_hex(s).map_err(|e| e.to_string())
}

#[derive(Args)]
pub struct VerifyArgs {
    pub path: PathBuf,
}

#[derive(Args)]
pub struct BuildArgs {
    /// JSON array of records
    pub input: PathBuf,
    #[arg(short, long)]
    pub output: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dump() {
        let cli = Cli::try_parse_from(["propstream", "dump", "props.bin"]).unwrap();
        if let Command::Dump(args) = cli.command {
            assert_eq!(args.path, PathBuf::from("props.bin"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn parse_dump_with_id() {
        let cli = Cli::try_parse_from(["propstream", "dump", "p.bin", "--id", "0x3001"]).unwrap();
        if let Command::Dump(args) = cli.command {
            assert_eq!(args.id, Some(PropertyId::new(0x3001)));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn dump_rejects_bad_id() {
        assert!(Cli::try_parse_from(["propstream", "dump", "p.bin", "--id", "0x10000"]).is_err());
    }

    #[test]
    fn parse_verify() {
        let cli = Cli::try_parse_from(["propstream", "verify", "props.bin"]).unwrap();
        assert!(matches!(cli.command, Command::Verify(_)));
    }

    #[test]
    fn parse_build() {
        let cli = Cli::try_parse_from(["propstream", "build", "in.json", "-o", "out.bin"]).unwrap();
        if let Command::Build(args) = cli.command {
            assert_eq!(args.input, PathBuf::from("in.json"));
            assert_eq!(args.output, PathBuf::from("out.bin"));
        } else { panic!("wrong command"); }
    }

    #[test]
    fn build_requires_output() {
        assert!(Cli::try_parse_from(["propstream", "build", "in.json"]).is_err());
    }

    #[test]
    fn parse_verbose() {
        let cli = Cli::try_parse_from(["propstream", "--verbose", "verify", "x"]).unwrap();
        assert!(cli.verbose);
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["propstream", "--format", "json", "dump", "x"]).unwrap();
        assert_eq!(cli.format, Some(OutputFormat::Json));
    }

    #[test]
    fn format_defaults_to_none() {
        let cli = Cli::try_parse_from(["propstream", "dump", "x"]).unwrap();
        assert!(cli.format.is_none());
        assert!(cli.config.is_none());
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::try_parse_from(["propstream", "dump", "x", "--config", "ps.toml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("ps.toml")));
    }
}
