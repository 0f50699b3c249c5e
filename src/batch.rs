use tracing::{debug, warn};

use crate::{form::InputRow, latlon::LatLon, Error, Result, RowError, Utm};

fn parse_field(field: &'static str, value: &str) -> std::result::Result<f64, RowError> {
    value.trim().parse().map_err(|_| RowError::Parse {
        field,
        value: value.to_string(),
    })
}

fn convert_row(row: &InputRow) -> std::result::Result<Utm, RowError> {
    let lat = parse_field("Latitude", &row.latitude)?;
    let lon = parse_field("Longitude", &row.longitude)?;

    Ok(LatLon::create(lat, lon)?.to_utm())
}

/// Converts every non-blank row, in input order.
///
/// Blank rows (see [`InputRow::is_blank`]) are skipped. Any other row must
/// parse as two numbers inside the UTM band. The first row that does not
/// aborts the whole batch: no points are returned, only that row's error.
///
/// # Errors
///
/// Returns [`Error::InvalidRow`] with the 1-based position of the first
/// failing row.
///
/// # Usage
///
/// ```
/// use utmconvert::{convert_all, InputRow, Error};
///
/// let rows = [
///     InputRow::new("0", "3"),
///     InputRow::new("", ""),
///     InputRow::new("-6.2", "106.8"),
/// ];
/// let points = convert_all(&rows).unwrap();
/// assert_eq!(points.len(), 2);
///
/// let rows = [InputRow::new("0", "3"), InputRow::new("91", "0")];
/// assert!(matches!(convert_all(&rows), Err(Error::InvalidRow { row: 2, .. })));
/// ```
pub fn convert_all(rows: &[InputRow]) -> Result<Vec<Utm>> {
    let mut points = Vec::with_capacity(rows.len());

    for (index, row) in rows.iter().enumerate() {
        if row.is_blank() {
            debug!(row = index + 1, "skipping blank row");
            continue;
        }

        match convert_row(row) {
            Ok(point) => points.push(point),
            Err(reason) => {
                warn!(row = index + 1, %reason, "aborting batch");
                return Err(Error::InvalidRow {
                    row: index + 1,
                    reason,
                });
            }
        }
    }

    Ok(points)
}
