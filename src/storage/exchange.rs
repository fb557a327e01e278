//! Tabular exchange
//!
//! CSV import/export and spreadsheet export. The CSV codec and the
//! spreadsheet writer are external collaborators operating on in-memory
//! row lists; the engine only prepares the rows and the byte streams.

use std::fs::{self, File};
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::header::{FileType, DEFAULT_DELIMITER};
use crate::record::StudentRecord;
use crate::storage::engine;

/// UTF-8 byte-order mark, written for spreadsheet compatibility
const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Tabular export column titles, in order
const COLUMN_TITLES: [&str; 4] = ["ID", "Name", "GPA", "Department"];

/// Export a data file to CSV
///
/// Writes a BOM-prefixed UTF-8 file with the fixed header row
/// `ID,Name,GPA,Department` followed by one row per record.
pub fn export_csv(path: &Path, out_path: &Path) -> Result<()> {
    let records = engine::scan_all(path)?;

    let mut file = BufWriter::new(File::create(out_path)?);
    file.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    writer.write_record(COLUMN_TITLES)?;
    for record in &records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    tracing::debug!("exported {} records to {}", records.len(), out_path.display());
    Ok(())
}

/// Map a source column title to one of ours
///
/// Matching is case-insensitive and accepts `Department`/`Dept` as
/// aliases for the department column.
fn match_column(title: &str) -> Option<usize> {
    match title.trim().to_ascii_lowercase().as_str() {
        "id" => Some(0),
        "name" => Some(1),
        "gpa" => Some(2),
        "department" | "dept" => Some(3),
        _ => None,
    }
}

/// Import records from a header-bearing CSV file
///
/// Recreates `target_path` from scratch (removing any prior file) with
/// the requested TYPE. Rows missing an id or a name, or whose numeric
/// fields do not parse, are skipped. A missing department column yields
/// empty departments rather than skipped rows. Returns the number of
/// records imported.
pub fn import_csv(source_path: &Path, target_path: &Path, target_type: FileType) -> Result<usize> {
    if !source_path.exists() {
        return Err(RosterError::NotFound(source_path.to_path_buf()));
    }

    if target_path.exists() {
        fs::remove_file(target_path)?;
    }
    engine::create(target_path, target_type, DEFAULT_DELIMITER)?;

    // Strip a leading BOM before handing the bytes to the CSV reader
    let mut raw = Vec::new();
    File::open(source_path)?.read_to_end(&mut raw)?;
    let data = raw.strip_prefix(UTF8_BOM).unwrap_or(&raw);

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(data);

    // columns[i] = source column index carrying our column i, if any
    let mut columns: [Option<usize>; 4] = [None; 4];
    for (source_index, title) in reader.headers()?.iter().enumerate() {
        if let Some(ours) = match_column(title) {
            columns[ours].get_or_insert(source_index);
        }
    }

    let cell = |row: &csv::StringRecord, ours: usize| -> String {
        columns[ours]
            .and_then(|i| row.get(i))
            .unwrap_or("")
            .trim()
            .to_string()
    };

    let mut imported = 0;
    for row in reader.records() {
        let row = row?;

        let id_text = cell(&row, 0);
        let name = cell(&row, 1);
        if id_text.is_empty() || name.is_empty() {
            continue;
        }

        let (id, gpa) = match (id_text.parse::<u32>(), cell(&row, 2).parse::<f64>()) {
            (Ok(id), Ok(gpa)) => (id, gpa),
            _ => {
                tracing::debug!("skipping row with unparseable numeric fields: {:?}", row);
                continue;
            }
        };

        let record = StudentRecord {
            id,
            name,
            gpa,
            dept: cell(&row, 3),
        };
        engine::append(target_path, &record)?;
        imported += 1;
    }

    tracing::debug!("imported {} records into {}", imported, target_path.display());
    Ok(imported)
}

/// Export a data file to a spreadsheet workbook
///
/// Delegates to the spreadsheet writer collaborator (cargo feature
/// `xlsx`). Numeric columns are written as numbers, text columns as
/// strings, mirroring the CSV column order.
#[cfg(feature = "xlsx")]
pub fn export_xlsx(path: &Path, out_path: &Path) -> Result<()> {
    use rust_xlsxwriter::Workbook;

    let to_err = |e: rust_xlsxwriter::XlsxError| RosterError::Spreadsheet(e.to_string());

    let records = engine::scan_all(path)?;

    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();

    for (col, title) in COLUMN_TITLES.iter().enumerate() {
        sheet.write_string(0, col as u16, *title).map_err(to_err)?;
    }
    for (i, record) in records.iter().enumerate() {
        let row = i as u32 + 1;
        sheet.write_number(row, 0, record.id).map_err(to_err)?;
        sheet.write_string(row, 1, &record.name).map_err(to_err)?;
        sheet.write_number(row, 2, record.gpa).map_err(to_err)?;
        sheet.write_string(row, 3, &record.dept).map_err(to_err)?;
    }
    workbook.save(out_path).map_err(to_err)?;

    tracing::debug!("exported {} records to {}", records.len(), out_path.display());
    Ok(())
}

/// Spreadsheet export without the `xlsx` feature: always unavailable
#[cfg(not(feature = "xlsx"))]
pub fn export_xlsx(_path: &Path, _out_path: &Path) -> Result<()> {
    Err(RosterError::DependencyMissing(
        "spreadsheet export requires the `xlsx` feature".to_string(),
    ))
}
