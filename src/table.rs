//! Plain-text results table.

use crate::{record::ResultRecord, utility::fmt_f64};

pub const TABLE_HEADER: [&str; 7] = ["Warna", "Lat", "Lon", "Easting", "Northing", "Zona", "Belahan"];

fn cells(record: &ResultRecord) -> [String; 7] {
    [
        record.color.to_hex(),
        fmt_f64(record.latitude()),
        fmt_f64(record.longitude()),
        fmt_f64(record.easting()),
        fmt_f64(record.northing()),
        record.zone().to_string(),
        record.hemisphere().label().to_owned(),
    ]
}

fn line<'a>(values: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = values
        .zip(widths)
        .map(|(value, &width)| format!("{value:<width$}"))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_owned();
    line.push('\n');
    line
}

/// Renders records as an aligned text table, one line per record after the
/// header and a separator. Numbers use their shortest round-trip form.
///
/// ```
/// use utmconvert::{build_records, table::render_table, LatLon};
///
/// let records = build_records(vec![LatLon::create(0.0, 3.0).unwrap().to_utm()]);
/// let table = render_table(&records);
/// let lines = table.lines().collect::<Vec<_>>();
///
/// assert_eq!(lines.len(), 3);
/// assert!(lines[0].starts_with("Warna"));
/// assert!(lines[2].starts_with("#000080"));
/// assert!(lines[2].contains("500000.0"));
/// ```
pub fn render_table(records: &[ResultRecord]) -> String {
    let rows = records.iter().map(cells).collect::<Vec<_>>();

    let mut widths = TABLE_HEADER.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    out.push_str(&line(TABLE_HEADER.iter().copied(), &widths));
    let rule = widths.map(|width| "-".repeat(width));
    out.push_str(&line(rule.iter().map(String::as_str), &widths));
    for row in &rows {
        out.push_str(&line(row.iter().map(String::as_str), &widths));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{build_records, LatLon};

    #[test]
    fn rows_follow_input_order() {
        let points = [(-6.2, 106.8), (0.0, 3.0), (40.748_333, -73.985_278)]
            .iter()
            .map(|&(lat, lon)| LatLon::create(lat, lon).unwrap().to_utm())
            .collect();
        let table = render_table(&build_records(points));
        let lines = table.lines().collect::<Vec<_>>();

        assert_eq!(lines.len(), 5);
        assert!(lines[2].contains("699163.549"));
        assert!(lines[2].contains("Belahan Bumi Selatan"));
        assert!(lines[3].contains(" 31 "));
        assert!(lines[4].ends_with("Belahan Bumi Utara"));
    }

    #[test]
    fn columns_align() {
        let points = vec![
            LatLon::create(-6.2, 106.8).unwrap().to_utm(),
            LatLon::create(1.0, 1.0).unwrap().to_utm(),
        ];
        let table = render_table(&build_records(points));
        let starts = table
            .lines()
            .map(|line| line.find("Belahan").unwrap_or_default())
            .collect::<Vec<_>>();
        assert_eq!(starts[2], starts[3]);
    }

    #[test]
    fn empty_table_has_header() {
        assert_eq!(render_table(&[]).lines().count(), 2);
    }
}
