//! Configuration and CSV batch helpers for the licensegen command line.
//!
//! The binary is a thin layer over `licensegen-license`: everything that
//! touches files, CSV or the secret configuration lives here so it can be
//! tested without spawning a process.

use anyhow::{Context, Result, bail};
use licensegen_license::{Identity, IssueDate, LicenseGenerator, LicenseVerifier, Secret};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

/// Environment variable holding the signing secret as hex.
pub const SECRET_ENV: &str = "LICENSEGEN_SECRET";

const IDENTITY_HEADER: [&str; 3] = ["first", "last", "email"];
const LICENSE_HEADER: [&str; 4] = ["first", "last", "email", "license"];

/// One output row: an identity and the key issued to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseRow {
    pub first: String,
    pub last: String,
    pub email: String,
    pub license: String,
}

/// Counts reported after a generation batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub generated: usize,
    pub skipped: usize,
}

/// Result of verifying one CSV row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowVerdict {
    /// 1-based line number in the input file.
    pub line: u64,
    pub email: String,
    pub valid: bool,
}

/// Resolves the signing secret. A secret file wins over hex text from the
/// command line or environment.
pub fn load_secret(hex: Option<&str>, file: Option<&Path>) -> Result<Secret> {
    if let Some(path) = file {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read secret file {}", path.display()))?;
        return Secret::from_hex(&text)
            .with_context(|| format!("invalid secret in {}", path.display()));
    }
    match hex {
        Some(text) => Secret::from_hex(text).context("invalid secret"),
        None => bail!("no secret configured: pass --secret, --secret-file or set {SECRET_ENV}"),
    }
}

/// Parses a `YYYYMMDD` issue date that must also be a real calendar date.
pub fn parse_issue_date(text: &str) -> Result<IssueDate> {
    let date = IssueDate::parse(text.trim())?;
    if date.to_naive_date().is_none() {
        bail!("{date} is not a calendar date");
    }
    Ok(date)
}

/// Builds an identity from user input, requiring every field to be non-blank.
pub fn require_identity(first: &str, last: &str, email: &str) -> Result<Identity> {
    let identity = Identity::new(first.trim(), last.trim(), email.trim());
    if identity.first.is_empty() || identity.last.is_empty() || identity.email.is_empty() {
        bail!("first, last and email are all required");
    }
    Ok(identity)
}

/// Trims a license key typed by the user, rejecting blank input.
pub fn require_license(license: &str) -> Result<&str> {
    let license = license.trim();
    if license.is_empty() {
        bail!("license is required");
    }
    Ok(license)
}

/// Reads `first,last,email` rows.
///
/// A leading `first,last,email` header is skipped, cells are trimmed, and rows
/// that are not valid UTF-8, have fewer than three columns or a blank identity
/// cell are dropped. Returns the identities and the number of dropped rows.
pub fn read_identities<R: Read>(input: R) -> Result<(Vec<Identity>, usize)> {
    let mut reader = csv_reader(input);
    let mut identities = Vec::new();
    let mut skipped = 0;

    for (index, record) in reader.byte_records().enumerate() {
        let record = match decode(record)? {
            Ok(record) => record,
            Err(raw) => {
                debug!(line = line_of(&raw), "skipping row that is not valid UTF-8");
                skipped += 1;
                continue;
            }
        };
        if index == 0 && is_header(&record, &IDENTITY_HEADER) {
            continue;
        }
        match (record.get(0), record.get(1), record.get(2)) {
            (Some(first), Some(last), Some(email))
                if !first.is_empty() && !last.is_empty() && !email.is_empty() =>
            {
                identities.push(Identity::new(first, last, email));
            }
            _ => {
                debug!(line = line_of(record.as_byte_record()), "skipping incomplete row");
                skipped += 1;
            }
        }
    }

    Ok((identities, skipped))
}

/// Generates a key for every identity in `input` and writes
/// `first,last,email,license` rows to `output`. All keys share `date`.
pub fn generate_batch<R: Read, W: Write>(
    generator: &LicenseGenerator,
    date: &IssueDate,
    input: R,
    output: W,
) -> Result<BatchSummary> {
    let (identities, skipped) = read_identities(input)?;
    if identities.is_empty() {
        warn!(skipped, "no usable identities in batch input");
    }

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);
    writer
        .write_record(LICENSE_HEADER)
        .context("failed to write CSV header")?;

    for identity in &identities {
        let license = generator.issue(identity, date).to_string();
        writer
            .serialize(LicenseRow {
                first: identity.first.clone(),
                last: identity.last.clone(),
                email: identity.email.clone(),
                license,
            })
            .context("failed to write CSV row")?;
    }
    writer.flush().context("failed to flush CSV output")?;

    let summary = BatchSummary {
        generated: identities.len(),
        skipped,
    };
    info!(generated = summary.generated, skipped = summary.skipped, "batch complete");
    Ok(summary)
}

/// Verifies every `first,last,email,license` row in `input`.
///
/// Rows missing a column or not valid UTF-8 are reported as invalid rather
/// than skipped.
pub fn verify_batch<R: Read>(verifier: &LicenseVerifier, input: R) -> Result<Vec<RowVerdict>> {
    let mut reader = csv_reader(input);
    let mut verdicts = Vec::new();

    for (index, record) in reader.byte_records().enumerate() {
        let record = match decode(record)? {
            Ok(record) => record,
            Err(raw) => {
                debug!(line = line_of(&raw), "row is not valid UTF-8");
                verdicts.push(RowVerdict {
                    line: line_of(&raw),
                    email: raw
                        .get(2)
                        .map(|cell| String::from_utf8_lossy(cell).into_owned())
                        .unwrap_or_default(),
                    valid: false,
                });
                continue;
            }
        };
        if index == 0 && is_header(&record, &LICENSE_HEADER) {
            continue;
        }
        let cell = |i: usize| record.get(i).unwrap_or_default();
        let valid = record.len() >= LICENSE_HEADER.len()
            && verifier.verify(cell(3), cell(0), cell(1), cell(2));
        verdicts.push(RowVerdict {
            line: line_of(record.as_byte_record()),
            email: cell(2).to_owned(),
            valid,
        });
    }

    let failed = verdicts.iter().filter(|v| !v.valid).count();
    info!(rows = verdicts.len(), failed, "batch verification complete");
    Ok(verdicts)
}

fn csv_reader<R: Read>(input: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(input)
}

/// Decodes one raw row, handing the raw bytes back when it is not UTF-8.
fn decode(
    record: Result<csv::ByteRecord, csv::Error>,
) -> Result<Result<csv::StringRecord, csv::ByteRecord>> {
    let record = record.context("failed to read CSV record")?;
    Ok(csv::StringRecord::from_byte_record(record).map_err(|e| e.into_byte_record()))
}

fn is_header(record: &csv::StringRecord, names: &[&str]) -> bool {
    record.len() >= names.len()
        && names
            .iter()
            .zip(record.iter())
            .all(|(name, cell)| cell.eq_ignore_ascii_case(name))
}

fn line_of(record: &csv::ByteRecord) -> u64 {
    record.position().map_or(0, |p| p.line())
}
