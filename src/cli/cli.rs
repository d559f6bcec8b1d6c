use std::path::PathBuf;

use clap::{Parser, Subcommand};
use colored::*;

use super::handlers::{
    handle_derive, handle_fingerprint, handle_mint, handle_validate, load_engine,
};

#[derive(Parser)]
#[command(name = "btcmint")]
#[command(about = "Derive checksum-valid base58 addresses from image feature fingerprints", long_about = None)]
#[command(version = "1.0")]
pub struct Cli {
    /// JSON file overriding the default template layout and probe bound
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    #[arg(long = "max_probes", global = true)]
    max_probes: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full derivation over a feature vector file
    #[command(about = "Derive an address from a feature vector file")]
    Derive {
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
        /// Treat the file as packed little-endian float32 descriptors
        #[arg(long = "f32")]
        float: bool,
        #[arg(short = 'j', long = "json")]
        json: bool,
    },

    #[command(about = "Print the fingerprint of a feature vector file")]
    Fingerprint {
        #[arg(short = 'f', long = "file")]
        file: PathBuf,
        #[arg(long = "f32")]
        float: bool,
    },

    /// Burn an explicit template into an address
    #[command(about = "Mint an address from a template string")]
    Mint {
        #[arg(short = 't', long = "template")]
        template: String,
        #[arg(short = 'j', long = "json")]
        json: bool,
    },

    #[command(about = "Check that an address is base58-check valid with version byte 0x00")]
    Validate {
        #[arg(short = 'a', long = "address")]
        address: String,
        #[arg(short = 'v', long = "verbose")]
        verbose: bool,
        #[arg(short = 'j', long = "json")]
        json: bool,
    },
}

impl Cli {
    pub fn run() {
        let cli = Cli::parse();
        let engine = load_engine(&cli.config, cli.max_probes);

        match &cli.command {
            Commands::Derive { file, float, json } => handle_derive(&engine, file, *float, *json),
            Commands::Fingerprint { file, float } => handle_fingerprint(&engine, file, *float),
            Commands::Mint { template, json } => handle_mint(&engine, template, *json),
            Commands::Validate {
                address,
                verbose,
                json,
            } => handle_validate(&engine, address, *verbose, *json),
        }
    }
}

pub struct CliUI {}

impl CliUI {
    pub fn print_header(text: &str) {
        println!("{}", text.bold().underline().green());
    }
    pub fn print_kv(label: &str, value: &str) {
        println!("{}: {}", label.blue().bold(), value.cyan());
    }
    pub fn print_text(text: &str) {
        println!("{}", text.white());
    }
    pub fn print_error(text: &str) {
        eprintln!("{}", text.red().bold());
    }
}
