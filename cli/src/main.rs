//! licensegen: generate and verify identity-bound license keys.
//!
//! Usage:
//!   licensegen generate --first Ada --last Lovelace --email ada@example.com
//!   licensegen verify --license V1-20240101-XXXX-XXXX-XXXX --first Ada ...
//!   licensegen batch --input people.csv --output licenses.csv
//!   licensegen verify-batch --input licenses.csv
//!
//! The signing secret is read from `--secret-file`, `--secret` or the
//! `LICENSEGEN_SECRET` environment variable, as 64 hex characters. Logs go to
//! stderr so stdout only carries results.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use licensegen_cli::{
    SECRET_ENV, generate_batch, load_secret, parse_issue_date, require_identity, require_license,
    verify_batch,
};
use licensegen_license::{IssueDate, LicenseGenerator, LicenseVerifier};
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "licensegen")]
#[command(about = "Generate and verify identity-bound license keys")]
struct Args {
    /// Signing secret as 64 hex characters
    #[arg(long, env = SECRET_ENV, hide_env_values = true, global = true)]
    secret: Option<String>,

    /// File containing the signing secret as hex (takes precedence over --secret)
    #[arg(long, global = true)]
    secret_file: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a license key for one identity
    Generate {
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        #[arg(long)]
        email: String,
        /// Issue date as YYYYMMDD (defaults to today, UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Check a license key against an identity
    Verify {
        #[arg(long)]
        license: String,
        #[arg(long)]
        first: String,
        #[arg(long)]
        last: String,
        #[arg(long)]
        email: String,
    },
    /// Generate keys for every row of a first,last,email CSV file
    Batch {
        /// Input CSV path
        #[arg(short, long)]
        input: PathBuf,
        /// Output CSV path (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Issue date as YYYYMMDD for the whole batch (defaults to today, UTC)
        #[arg(long)]
        date: Option<String>,
    },
    /// Verify every row of a first,last,email,license CSV file
    VerifyBatch {
        /// Input CSV path
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();

    let secret = load_secret(args.secret.as_deref(), args.secret_file.as_deref())?;

    match args.command {
        Command::Generate {
            first,
            last,
            email,
            date,
        } => {
            let identity = require_identity(&first, &last, &email)?;
            let date = resolve_date(date.as_deref())?;
            let key = LicenseGenerator::new(secret).issue(&identity, &date);
            debug!(date = %date, "generated license key");

            if args.json {
                println!(
                    "{}",
                    json!({ "license": key.to_string(), "version": key.version(), "date": date })
                );
            } else {
                println!("{key}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify {
            license,
            first,
            last,
            email,
        } => {
            let license = require_license(&license)?;
            let identity = require_identity(&first, &last, &email)?;
            let valid = LicenseVerifier::new(secret).verify(
                license,
                &identity.first,
                &identity.last,
                &identity.email,
            );

            if args.json {
                println!("{}", json!({ "valid": valid }));
            } else {
                println!("{}", if valid { "valid" } else { "invalid" });
            }
            Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Command::Batch {
            input,
            output,
            date,
        } => {
            let date = resolve_date(date.as_deref())?;
            let generator = LicenseGenerator::new(secret);
            let reader = File::open(&input)
                .with_context(|| format!("failed to open {}", input.display()))?;

            let summary = match &output {
                Some(path) => {
                    let file = File::create(path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    info!("Writing licenses to {:?}", path);
                    generate_batch(&generator, &date, BufReader::new(reader), BufWriter::new(file))?
                }
                None => generate_batch(
                    &generator,
                    &date,
                    BufReader::new(reader),
                    io::stdout().lock(),
                )?,
            };

            if output.is_some() {
                if args.json {
                    println!("{}", serde_json::to_string(&summary)?);
                } else {
                    println!("generated {}, skipped {}", summary.generated, summary.skipped);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::VerifyBatch { input } => {
            let verifier = LicenseVerifier::new(secret);
            let reader = File::open(&input)
                .with_context(|| format!("failed to open {}", input.display()))?;
            let verdicts = verify_batch(&verifier, BufReader::new(reader))?;

            if args.json {
                println!("{}", serde_json::to_string(&verdicts)?);
            } else {
                for verdict in &verdicts {
                    let status = if verdict.valid { "valid" } else { "invalid" };
                    println!("{}\t{}\t{}", verdict.line, verdict.email, status);
                }
            }
            let all_valid = verdicts.iter().all(|v| v.valid);
            Ok(if all_valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn resolve_date(date: Option<&str>) -> Result<IssueDate> {
    match date {
        Some(text) => parse_issue_date(text),
        None => Ok(IssueDate::today()),
    }
}
