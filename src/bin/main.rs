// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2025 Daniel Negri
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

use clap::Parser;
use csv::{ReaderBuilder, Trim};
use form_ledger_rs::f1040::{y2020, y2021, y2022};
use form_ledger_rs::{Calculate, Form, FormError, LineNumber};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::PathBuf;
use std::process;

/// Form Ledger - Calculate US federal tax returns
///
/// Reads input lines from a CSV file, runs the selected year's 1040
/// calculations, and prints the completed form to stdout.
#[derive(Parser, Debug)]
#[command(name = "form-ledger-rs")]
#[command(about = "Calculates US federal 1040 forms from line CSVs", long_about = None)]
struct Args {
    /// Tax year of the return (2020, 2021, or 2022)
    #[arg(long, default_value_t = 2022)]
    year: u16,

    /// Path to CSV file with input lines; when omitted, a blank return is printed
    ///
    /// Expected format: line,value
    /// Example: cargo run -- --year 2021 lines.csv
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    let mut federal = match new_return(args.year) {
        Ok(federal) => federal,
        Err(e) => {
            eprintln!("Error building the {} return: {}", args.year, e);
            process::exit(1);
        }
    };

    // Load input lines, when given
    if let Some(path) = &args.input {
        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                eprintln!("Error opening file '{}': {}", path.display(), e);
                process::exit(1);
            }
        };
        if let Err(e) = load_lines(federal.form_mut(), BufReader::new(file)) {
            eprintln!("Error reading lines: {}", e);
            process::exit(1);
        }
    }

    // Calculate and print to stdout
    if let Err(e) = federal.print(&mut std::io::stdout()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
}

/// Builds the federal return for `year`.
///
/// Exits the process for years without a calculator.
fn new_return(year: u16) -> Result<Box<dyn Calculate>, FormError> {
    match year {
        2020 => Ok(Box::new(y2020::Federal::new()?)),
        2021 => Ok(Box::new(y2021::Federal::new()?)),
        2022 => Ok(Box::new(y2022::Federal::new()?)),
        year => {
            eprintln!("Unsupported tax year: {} (expected 2020, 2021, or 2022)", year);
            process::exit(1);
        }
    }
}

/// Raw CSV record matching the input format.
///
/// Fields: `line, value`
#[derive(Debug, Deserialize)]
struct CsvRecord {
    line: String,
    value: String,
}

/// Loads form lines from a CSV reader.
///
/// Expected columns: `line, value` with a header row; whitespace around
/// fields is trimmed. Values pass through the form's usual coercion, so
/// `true`/`false` CSV fields arrive as raw text, not flags. Malformed rows
/// and rows with an empty line identifier are skipped.
///
/// # CSV Format
///
/// ```csv
/// line,value
/// 1,48000.00
/// 25a,5200
/// ```
///
/// # Errors
///
/// Returns a CSV error if the reader fails or the CSV structure is invalid.
pub fn load_lines<R: Read>(form: &mut Form, reader: R) -> Result<(), csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::All) // Handle whitespace in fields like " 25a "
        .has_headers(true) // Skip first row as header
        .from_reader(reader);

    for result in rdr.deserialize::<CsvRecord>() {
        match result {
            Ok(record) => {
                // Reject empty identifiers through the checked parse
                let Ok(line) = LineNumber::try_from(record.line) else {
                    #[cfg(debug_assertions)]
                    eprintln!("Skipping record with an empty line number");
                    continue;
                };
                form.set(line, record.value);
            }
            Err(e) => {
                // Skip malformed rows
                #[cfg(debug_assertions)]
                eprintln!("Skipping malformed row: {}", e);
                continue;
            }
        }
    }

    Ok(())
}
