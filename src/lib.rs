#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Forward conversion of WGS84 latitude/longitude points into UTM
//! coordinates, plus the glue that turns a batch of converted points into
//! colored records for a table, a world map and a spreadsheet.
//!
//! ```
//! use utmconvert::{LatLon, Utm, Hemisphere};
//!
//! let jakarta = LatLon::create(-6.2, 106.8).unwrap();
//! let utm = jakarta.to_utm();
//!
//! assert_eq!(utm.zone(), 48);
//! assert_eq!(utm.hemisphere(), Hemisphere::South);
//! assert_eq!(utm.easting(), 699_163.549);
//! assert_eq!(utm.northing(), 9_310_356.122);
//! ```

use thiserror::Error;

pub mod batch;
pub mod colormap;
pub mod config;
pub mod export;
pub mod form;
pub mod latlon;
pub mod map;
pub mod marker;
pub mod record;
pub mod table;
pub mod utm;
pub mod utility;

pub use batch::convert_all;
pub use colormap::Rgb;
pub use form::{FormController, InputRow};
pub use latlon::{validate, LatLon};
pub use record::{build_records, ResultRecord};
pub use utm::{central_meridian, zone_of, Hemisphere, Utm};

pub(crate) mod projections {
    pub mod transverse_mercator;
}

pub mod constants;

/// Reasons a latitude/longitude pair falls outside the supported UTM domain.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum InvalidCoordinate {
    #[error("Latitude {0} outside of valid range [-80, 84].")]
    LatitudeOutOfRange(f64),
    #[error("Longitude {0} outside of valid range [-180, 180].")]
    LongitudeOutOfRange(f64),
}

/// Why a single input row could not be converted.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RowError {
    #[error("{field} value {value:?} is not a number")]
    Parse { field: &'static str, value: String },
    #[error(transparent)]
    Coordinate(#[from] InvalidCoordinate),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("Row {row}: {reason}")]
    InvalidRow { row: usize, reason: RowError },
    #[error("Row index {0} does not exist")]
    RowIndex(usize),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
