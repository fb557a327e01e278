//! RosterDB CLI
//!
//! Thin command-line driver for the storage engine: one subcommand per
//! engine operation, no interactive state.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

use rosterdb::storage::{compress, engine, exchange, rrn};
use rosterdb::{FileType, Result, StudentRecord, DEFAULT_DELIMITER};

/// RosterDB CLI
#[derive(Parser, Debug)]
#[command(name = "rosterdb-cli")]
#[command(about = "Flat-file student record store")]
#[command(version)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new data file containing only a header
    Create {
        /// Path of the data file
        file: PathBuf,

        /// File structure: FIXED or DELIMITED
        #[arg(short, long, default_value = "FIXED")]
        r#type: String,

        /// Field delimiter for DELIMITED files
        #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
        delimiter: char,
    },

    /// Append one record
    Add {
        file: PathBuf,
        id: u32,
        name: String,
        gpa: f64,
        dept: String,
    },

    /// Print every record in the file
    List { file: PathBuf },

    /// Sequentially search for a record by id
    Search { file: PathBuf, id: u32 },

    /// Fetch a record by relative record number (FIXED files only)
    Rrn { file: PathBuf, rrn: u64 },

    /// Delete a record by id
    Delete { file: PathBuf, id: u32 },

    /// Replace a record by id
    Update {
        file: PathBuf,
        id: u32,
        name: String,
        gpa: f64,
        dept: String,
    },

    /// Convert a file to the other structure, producing a new file
    Convert {
        file: PathBuf,

        /// Target structure: FIXED or DELIMITED
        r#type: String,
    },

    /// Import records from a CSV file into a fresh data file
    ImportCsv {
        source: PathBuf,
        target: PathBuf,

        /// Target structure: FIXED or DELIMITED
        #[arg(short, long, default_value = "FIXED")]
        r#type: String,
    },

    /// Export records to a CSV file
    ExportCsv { file: PathBuf, out: PathBuf },

    /// Export records to a spreadsheet workbook
    ExportXlsx { file: PathBuf, out: PathBuf },

    /// Compress a file to <file>.gz
    Compress { file: PathBuf },

    /// Decompress a .gz file
    Decompress { file: PathBuf },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,rosterdb=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    if let Err(e) = run(args.command) {
        tracing::error!("{}", e);
        process::exit(1);
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Create {
            file,
            r#type,
            delimiter,
        } => {
            engine::create(&file, r#type.parse::<FileType>()?, delimiter)?;
            println!("Created {}", file.display());
        }

        Commands::Add {
            file,
            id,
            name,
            gpa,
            dept,
        } => {
            engine::append(&file, &StudentRecord::new(id, name, gpa, dept))?;
            println!("Added record {}", id);
        }

        Commands::List { file } => {
            for record in engine::scan_all(&file)? {
                println!("{}", record);
            }
        }

        Commands::Search { file, id } => {
            let outcome = engine::sequential_search(&file, id)?;
            match outcome.record {
                Some(record) => println!("{} ({:.3} ms)", record, outcome.elapsed_ms),
                None => println!("No record with id {} ({:.3} ms)", id, outcome.elapsed_ms),
            }
        }

        Commands::Rrn { file, rrn } => match rrn::direct_access(&file, rrn)? {
            Some(record) => println!("{}", record),
            None => println!("No record at RRN {}", rrn),
        },

        Commands::Delete { file, id } => {
            if engine::delete(&file, id)? {
                println!("Deleted record {}", id);
            } else {
                println!("No record with id {}", id);
            }
        }

        Commands::Update {
            file,
            id,
            name,
            gpa,
            dept,
        } => {
            let record = StudentRecord::new(id, name, gpa, dept);
            if engine::update(&file, id, &record)? {
                println!("Updated record {}", id);
            } else {
                println!("No record with id {}", id);
            }
        }

        Commands::Convert { file, r#type } => {
            let new_path = engine::convert_structure(&file, r#type.parse::<FileType>()?)?;
            println!("Converted to {}", new_path.display());
        }

        Commands::ImportCsv {
            source,
            target,
            r#type,
        } => {
            let count = exchange::import_csv(&source, &target, r#type.parse::<FileType>()?)?;
            println!("Imported {} records into {}", count, target.display());
        }

        Commands::ExportCsv { file, out } => {
            exchange::export_csv(&file, &out)?;
            println!("Exported to {}", out.display());
        }

        Commands::ExportXlsx { file, out } => {
            exchange::export_xlsx(&file, &out)?;
            println!("Exported to {}", out.display());
        }

        Commands::Compress { file } => {
            let out = compress::compress(&file)?;
            println!("Compressed to {}", out.display());
        }

        Commands::Decompress { file } => {
            let out = compress::decompress(&file)?;
            println!("Decompressed to {}", out.display());
        }
    }

    Ok(())
}
