use std::fs;

use claims::{assert_matches, assert_ok};
use utmconvert::{
    build_records, convert_all,
    export::{read_csv_file, write_xlsx},
    Error, FormController, Hemisphere, InputRow, InvalidCoordinate, LatLon, RowError,
};

struct Expected {
    lat: f64,
    lon: f64,
    zone: i32,
    easting: f64,
    northing: f64,
}

fn fixture() -> Vec<Expected> {
    let points = fs::read_to_string("./tests/fixtures/points.csv").unwrap();
    points
        .lines()
        .skip(1)
        .map(|line| {
            let mut pieces = line.split(',');
            let mut next = || pieces.next().unwrap().parse::<f64>().unwrap();
            Expected {
                lat: next(),
                lon: next(),
                zone: next() as i32,
                easting: next(),
                northing: next(),
            }
        })
        .collect()
}

#[test]
fn series_matches_reference_values() {
    for expected in fixture() {
        let utm = LatLon::create(expected.lat, expected.lon).unwrap().to_utm();

        assert_eq!(utm.zone(), expected.zone, "zone for {} {}", expected.lat, expected.lon);
        assert_eq!(utm.hemisphere(), Hemisphere::of(expected.lat));
        assert_eq!(utm.easting(), expected.easting, "easting for {} {}", expected.lat, expected.lon);
        assert_eq!(utm.northing(), expected.northing, "northing for {} {}", expected.lat, expected.lon);
        assert_eq!(utm.convergence(), 0.0);
        assert_eq!(utm.scale_factor(), 0.0016);
    }
}

#[test]
fn fixture_file_as_batch_input() {
    let rows = read_csv_file("./tests/fixtures/points.csv".as_ref()).unwrap();
    let points = assert_ok!(convert_all(&rows));
    let expected = fixture();

    assert_eq!(points.len(), expected.len());
    for (point, expected) in points.iter().zip(&expected) {
        assert_eq!(point.source().latitude(), expected.lat);
        assert_eq!(point.zone(), expected.zone);
    }
}

#[test]
fn one_invalid_row_aborts_batch() {
    let mut form = FormController::default();
    form.set_row(0, "-6.2", "106.8").unwrap();
    form.set_row(1, "0", "181").unwrap();
    form.set_row(2, "0", "3").unwrap();

    let err = form.submit().unwrap_err();
    assert_matches!(
        err,
        Error::InvalidRow {
            row: 2,
            reason: RowError::Coordinate(InvalidCoordinate::LongitudeOutOfRange(_)),
        }
    );
}

#[test]
fn convert_color_and_export() {
    let rows = [
        InputRow::new("-6.2", "106.8"),
        InputRow::new("", ""),
        InputRow::new("0", "3"),
        InputRow::new("51.5", "-0.12"),
    ];
    let records = build_records(assert_ok!(convert_all(&rows)));

    let colors = records.iter().map(|r| r.color.to_hex()).collect::<Vec<_>>();
    assert_eq!(colors, ["#000080", "#7dff7a", "#800000"]);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hasil_konversi_UTM.xlsx");
    write_xlsx(&records, &path).unwrap();
    assert!(path.exists());
}
