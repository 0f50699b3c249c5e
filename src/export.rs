//! Spreadsheet and CSV output, plus CSV input rows for headless runs.

use std::{
    fs::File,
    io::{Read, Write},
    path::Path,
};

use rust_xlsxwriter::Workbook;
use tracing::info;

use crate::{form::InputRow, record::ResultRecord, utility::fmt_f64, Result};

/// File the spreadsheet is written to unless told otherwise. An existing
/// file is overwritten.
pub const DEFAULT_XLSX_PATH: &str = "hasil_konversi_UTM.xlsx";

pub const SHEET_NAME: &str = "UTM Converted Data";

pub const EXPORT_HEADER: [&str; 7] = ["Lat", "Lon", "Easting", "Northing", "Zona", "Belahan", "HEX"];

/// Writes one worksheet with [`EXPORT_HEADER`] and one row per record, in
/// order. Coordinates and zone are stored as numbers.
///
/// # Errors
///
/// Fails if the workbook cannot be built or saved to `path`.
pub fn write_xlsx(records: &[ResultRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, title) in (0_u16..).zip(EXPORT_HEADER) {
        worksheet.write_string(0, col, title)?;
    }

    for (row, record) in (1_u32..).zip(records) {
        worksheet.write_number(row, 0, record.latitude())?;
        worksheet.write_number(row, 1, record.longitude())?;
        worksheet.write_number(row, 2, record.easting())?;
        worksheet.write_number(row, 3, record.northing())?;
        worksheet.write_number(row, 4, f64::from(record.zone()))?;
        worksheet.write_string(row, 5, record.hemisphere().label())?;
        worksheet.write_string(row, 6, record.color.to_hex())?;
    }

    workbook.save(path)?;
    info!(path = %path.display(), rows = records.len(), "wrote spreadsheet");
    Ok(())
}

/// Writes the same table as [`write_xlsx`] as CSV. Numbers are written the
/// way the text table shows them.
///
/// # Errors
///
/// Fails if the underlying writer fails.
///
/// ```
/// use utmconvert::{build_records, export::write_csv, LatLon};
///
/// let records = build_records(vec![LatLon::create(0.0, 3.0).unwrap().to_utm()]);
/// let mut out = Vec::new();
/// write_csv(&records, &mut out).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(
///     text,
///     "Lat,Lon,Easting,Northing,Zona,Belahan,HEX\n0.0,3.0,500000.0,0.0,31,Belahan Bumi Utara,#000080\n"
/// );
/// ```
pub fn write_csv<W: Write>(records: &[ResultRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(EXPORT_HEADER)?;

    for record in records {
        wtr.write_record([
            fmt_f64(record.latitude()),
            fmt_f64(record.longitude()),
            fmt_f64(record.easting()),
            fmt_f64(record.northing()),
            record.zone().to_string(),
            record.hemisphere().label().to_owned(),
            record.color.to_hex(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// [`write_csv`] into a file at `path`, replacing it.
///
/// # Errors
///
/// Fails if the file cannot be created or written.
pub fn write_csv_file(records: &[ResultRecord], path: &Path) -> Result<()> {
    write_csv(records, File::create(path)?)?;
    info!(path = %path.display(), rows = records.len(), "wrote csv");
    Ok(())
}

/// Reads input rows from CSV. The first line is a header and is skipped;
/// the first two columns of every other line are latitude and longitude.
/// Missing columns come back empty, so the batch treats them as blank.
///
/// # Errors
///
/// Fails on malformed CSV or a read error.
///
/// ```
/// use utmconvert::{export::read_csv_rows, InputRow};
///
/// let data = "lat,lon\n-6.2,106.8\n0\n";
/// let rows = read_csv_rows(data.as_bytes()).unwrap();
/// assert_eq!(rows, vec![InputRow::new("-6.2", "106.8"), InputRow::new("0", "")]);
/// ```
pub fn read_csv_rows<R: Read>(reader: R) -> Result<Vec<InputRow>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        rows.push(InputRow::new(
            record.get(0).unwrap_or_default(),
            record.get(1).unwrap_or_default(),
        ));
    }

    Ok(rows)
}

/// [`read_csv_rows`] from the file at `path`.
///
/// # Errors
///
/// Fails if the file cannot be opened or parsed.
pub fn read_csv_file(path: &Path) -> Result<Vec<InputRow>> {
    read_csv_rows(File::open(path)?)
}
