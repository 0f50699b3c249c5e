//! Input rows collected before a batch conversion.
//!
//! [`FormController`] owns the ordered list of rows a user has typed in.
//! Nothing is parsed until [`FormController::submit`] runs the batch.

use std::str::FromStr;

use crate::{batch::convert_all, Error, Result, Utm};

/// Rows shown when a form is first opened.
pub const INITIAL_ROWS: usize = 3;

/// Raw latitude/longitude text of one input row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputRow {
    pub latitude: String,
    pub longitude: String,
}

impl InputRow {
    pub fn new(latitude: impl Into<String>, longitude: impl Into<String>) -> InputRow {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }

    /// A row is blank when either field is empty. Blank rows are skipped by
    /// the batch rather than reported; a whitespace-only field is not blank
    /// and fails to parse.
    pub fn is_blank(&self) -> bool {
        self.latitude.is_empty() || self.longitude.is_empty()
    }
}

/// Parses `"LAT,LON"`. Parsing the numbers is left to the batch, so this
/// only fails when there is no comma.
///
/// ```
/// use utmconvert::InputRow;
///
/// let row: InputRow = "-6.2, 106.8".parse().unwrap();
/// assert_eq!(row, InputRow::new("-6.2", "106.8"));
/// assert!("-6.2".parse::<InputRow>().is_err());
/// ```
impl FromStr for InputRow {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| format!("expected LAT,LON but got {s:?}"))?;

        Ok(InputRow::new(lat.trim(), lon.trim()))
    }
}

/// Ordered, growable list of input rows.
///
/// # Usage
///
/// ```
/// use utmconvert::FormController;
///
/// let mut form = FormController::default();
/// assert_eq!(form.len(), 3);
///
/// form.set_row(0, "0", "3").unwrap();
/// let extra = form.add_row();
/// form.set_row(extra, "-6.2", "106.8").unwrap();
///
/// let points = form.submit().unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].zone(), 48);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormController {
    rows: Vec<InputRow>,
}

impl Default for FormController {
    fn default() -> Self {
        Self::with_rows(INITIAL_ROWS)
    }
}

impl FormController {
    /// A form with `count` empty rows.
    pub fn with_rows(count: usize) -> FormController {
        Self {
            rows: vec![InputRow::default(); count],
        }
    }

    /// Appends an empty row and returns its index.
    pub fn add_row(&mut self) -> usize {
        self.rows.push(InputRow::default());
        self.rows.len() - 1
    }

    /// Appends an already filled row and returns its index.
    pub fn push_row(&mut self, row: InputRow) -> usize {
        self.rows.push(row);
        self.rows.len() - 1
    }

    /// Replaces the text of row `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RowIndex`] if the row does not exist.
    pub fn set_row(
        &mut self,
        index: usize,
        latitude: impl Into<String>,
        longitude: impl Into<String>,
    ) -> Result<()> {
        let row = self.rows.get_mut(index).ok_or(Error::RowIndex(index))?;
        *row = InputRow::new(latitude, longitude);
        Ok(())
    }

    pub fn rows(&self) -> &[InputRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current `(latitude, longitude)` text of every row, in order.
    pub fn current_values(&self) -> Vec<(String, String)> {
        self.rows
            .iter()
            .map(|row| (row.latitude.clone(), row.longitude.clone()))
            .collect()
    }

    /// Converts every non-blank row.
    ///
    /// # Errors
    ///
    /// Returns the error of the first row that fails, see [`convert_all`].
    pub fn submit(&self) -> Result<Vec<Utm>> {
        convert_all(&self.rows)
    }
}
