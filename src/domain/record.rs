//! Hospital record model
//!
//! One record per CSV row. The columns the updater works with are typed;
//! every other column is carried verbatim so an unrelated row survives a
//! load/save cycle byte for byte.

use crate::domain::errors::DataSourceError;
use std::collections::HashMap;

/// Required column headers, exactly as they appear in the record file.
pub mod columns {
    pub const NAME: &str = "NAME";
    pub const BEDS: &str = "BEDS";
    pub const TOTAL_STAFF: &str = "TTL_STAFF";
    pub const TRAUMA: &str = "TRAUMA";
    pub const HELIPAD: &str = "HELIPAD";
    pub const ACCESS_POINTS: &str = "No of Access Points connected";
    pub const PATIENTS: &str = "Patients";
    pub const SUGGESTIVE_FACTOR: &str = "Suggestive_Factor";

    /// Every column the loader requires in the header row.
    pub const REQUIRED: [&str; 8] = [
        NAME,
        BEDS,
        TOTAL_STAFF,
        TRAUMA,
        HELIPAD,
        ACCESS_POINTS,
        PATIENTS,
        SUGGESTIVE_FACTOR,
    ];
}

/// A numeric cell that remembers its source text
///
/// Loading parses the text once; saving writes the source text back unless
/// the cell was mutated, in which case the new value is formatted with
/// `f64`'s shortest round-trip representation. This is what makes the
/// zero-match load/save cycle byte-identical.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericCell {
    value: f64,
    raw: String,
}

impl NumericCell {
    /// Parses a strictly numeric cell
    pub fn parse(raw: &str) -> Result<Self, String> {
        let value: f64 = raw
            .trim()
            .parse()
            .map_err(|_| format!("'{raw}' is not a number"))?;
        Ok(Self {
            value,
            raw: raw.to_string(),
        })
    }

    /// Parses a flag cell: numeric, or a Y/N style word read as 1/0
    ///
    /// The trauma and helipad columns are numeric/boolean flags; source files
    /// in the wild carry `Y`/`N` there.
    pub fn parse_flag(raw: &str) -> Result<Self, String> {
        if let Ok(cell) = Self::parse(raw) {
            return Ok(cell);
        }
        let value = match raw.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "true" => 1.0,
            "n" | "no" | "false" | "" => 0.0,
            _ => return Err(format!("'{raw}' is neither a number nor a Y/N flag")),
        };
        Ok(Self {
            value,
            raw: raw.to_string(),
        })
    }

    /// Builds a cell directly from a value (canonical text form)
    pub fn from_value(value: f64) -> Self {
        Self {
            value,
            raw: format!("{value}"),
        }
    }

    /// Returns the parsed numeric value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Returns the text form written on save
    pub fn as_text(&self) -> &str {
        &self.raw
    }

    /// Replaces the value; the text form becomes the canonical rendering
    pub fn set(&mut self, value: f64) {
        self.value = value;
        self.raw = format!("{value}");
    }
}

/// One hospital record
///
/// Typed fields mirror the required columns; `extra` holds every other
/// column verbatim, keyed by header name.
#[derive(Debug, Clone)]
pub struct HospitalRecord {
    pub name: String,
    pub beds: NumericCell,
    pub patients: NumericCell,
    pub total_staff: NumericCell,
    pub trauma_level: NumericCell,
    pub helipad: NumericCell,
    pub access_points_connected: NumericCell,
    pub suggestive_factor: NumericCell,
    extra: HashMap<String, String>,
}

impl HospitalRecord {
    /// Builds a record from `(column, value)` pairs in file order
    ///
    /// `row` is the 1-based data row number, used only for error reporting.
    ///
    /// # Errors
    ///
    /// Returns `DataSourceError::InvalidNumber` when a required numeric
    /// column cannot be parsed. Column presence is the loader's concern,
    /// so a missing pair here simply leaves the field at its default and
    /// is caught upstream by the header check.
    pub fn from_columns<'a, I>(pairs: I, row: u64) -> Result<Self, DataSourceError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut name = String::new();
        let mut beds = None;
        let mut patients = None;
        let mut total_staff = None;
        let mut trauma_level = None;
        let mut helipad = None;
        let mut access_points = None;
        let mut suggestive_factor = None;
        let mut extra = HashMap::new();

        let numeric = |column: &str, raw: &str| {
            NumericCell::parse(raw).map_err(|_| DataSourceError::InvalidNumber {
                row,
                column: column.to_string(),
                value: raw.to_string(),
            })
        };
        let flag = |column: &str, raw: &str| {
            NumericCell::parse_flag(raw).map_err(|_| DataSourceError::InvalidNumber {
                row,
                column: column.to_string(),
                value: raw.to_string(),
            })
        };

        for (column, value) in pairs {
            match column {
                columns::NAME => name = value.to_string(),
                columns::BEDS => beds = Some(numeric(column, value)?),
                columns::PATIENTS => patients = Some(numeric(column, value)?),
                columns::TOTAL_STAFF => total_staff = Some(numeric(column, value)?),
                columns::TRAUMA => trauma_level = Some(flag(column, value)?),
                columns::HELIPAD => helipad = Some(flag(column, value)?),
                columns::ACCESS_POINTS => access_points = Some(numeric(column, value)?),
                columns::SUGGESTIVE_FACTOR => suggestive_factor = Some(numeric(column, value)?),
                _ => {
                    extra.insert(column.to_string(), value.to_string());
                }
            }
        }

        let missing = |column: &str| DataSourceError::MissingColumn {
            column: column.to_string(),
        };

        Ok(Self {
            name,
            beds: beds.ok_or_else(|| missing(columns::BEDS))?,
            patients: patients.ok_or_else(|| missing(columns::PATIENTS))?,
            total_staff: total_staff.ok_or_else(|| missing(columns::TOTAL_STAFF))?,
            trauma_level: trauma_level.ok_or_else(|| missing(columns::TRAUMA))?,
            helipad: helipad.ok_or_else(|| missing(columns::HELIPAD))?,
            access_points_connected: access_points.ok_or_else(|| missing(columns::ACCESS_POINTS))?,
            suggestive_factor: suggestive_factor.ok_or_else(|| missing(columns::SUGGESTIVE_FACTOR))?,
            extra,
        })
    }

    /// Returns the text form of any column on this record
    ///
    /// Known columns come from their typed cells, everything else from the
    /// passthrough map. `None` means the column never appeared on this row.
    pub fn field_text(&self, column: &str) -> Option<&str> {
        match column {
            columns::NAME => Some(&self.name),
            columns::BEDS => Some(self.beds.as_text()),
            columns::PATIENTS => Some(self.patients.as_text()),
            columns::TOTAL_STAFF => Some(self.total_staff.as_text()),
            columns::TRAUMA => Some(self.trauma_level.as_text()),
            columns::HELIPAD => Some(self.helipad.as_text()),
            columns::ACCESS_POINTS => Some(self.access_points_connected.as_text()),
            columns::SUGGESTIVE_FACTOR => Some(self.suggestive_factor.as_text()),
            _ => self.extra.get(column).map(String::as_str),
        }
    }

    /// Read-only view of the passthrough columns
    pub fn passthrough(&self) -> &HashMap<String, String> {
        &self.extra
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_pairs() -> Vec<(&'static str, &'static str)> {
        vec![
            ("X", "-76.58"),
            ("NAME", "MERCY MEDICAL CENTER"),
            ("BEDS", "200"),
            ("TTL_STAFF", "500"),
            ("TRAUMA", "1"),
            ("HELIPAD", "0"),
            ("No of Access Points connected", "12"),
            ("Patients", "300"),
            ("Suggestive_Factor", "0.51"),
        ]
    }

    #[test]
    fn test_numeric_cell_keeps_source_text() {
        let cell = NumericCell::parse("200").unwrap();
        assert_eq!(cell.value(), 200.0);
        assert_eq!(cell.as_text(), "200");

        let decimal = NumericCell::parse("0.51").unwrap();
        assert_eq!(decimal.as_text(), "0.51");
    }

    #[test]
    fn test_numeric_cell_set_reformats() {
        let mut cell = NumericCell::parse("300").unwrap();
        cell.set(306.0);
        assert_eq!(cell.value(), 306.0);
        assert_eq!(cell.as_text(), "306");

        cell.set(306.6);
        assert_eq!(cell.as_text(), "306.6");
    }

    #[test]
    fn test_numeric_cell_rejects_garbage() {
        assert!(NumericCell::parse("twelve").is_err());
        assert!(NumericCell::parse("").is_err());
    }

    #[test]
    fn test_flag_cell_accepts_words() {
        assert_eq!(NumericCell::parse_flag("Y").unwrap().value(), 1.0);
        assert_eq!(NumericCell::parse_flag("N").unwrap().value(), 0.0);
        assert_eq!(NumericCell::parse_flag("TRUE").unwrap().value(), 1.0);
        assert_eq!(NumericCell::parse_flag("1").unwrap().value(), 1.0);
        assert!(NumericCell::parse_flag("maybe").is_err());
    }

    #[test]
    fn test_flag_cell_keeps_source_text() {
        let cell = NumericCell::parse_flag("Y").unwrap();
        assert_eq!(cell.as_text(), "Y");
    }

    #[test]
    fn test_record_from_columns() {
        let record = HospitalRecord::from_columns(sample_pairs(), 1).unwrap();
        assert_eq!(record.name, "MERCY MEDICAL CENTER");
        assert_eq!(record.beds.value(), 200.0);
        assert_eq!(record.patients.value(), 300.0);
        assert_eq!(record.access_points_connected.value(), 12.0);
        assert_eq!(record.passthrough().get("X").map(String::as_str), Some("-76.58"));
    }

    #[test]
    fn test_record_missing_required_column() {
        let pairs = vec![("NAME", "MERCY MEDICAL CENTER"), ("BEDS", "200")];
        let err = HospitalRecord::from_columns(pairs, 1).unwrap_err();
        assert!(matches!(err, DataSourceError::MissingColumn { .. }));
    }

    #[test]
    fn test_record_invalid_number_reports_position() {
        let mut pairs = sample_pairs();
        pairs[2] = ("BEDS", "many");
        let err = HospitalRecord::from_columns(pairs, 7).unwrap_err();
        match err {
            DataSourceError::InvalidNumber { row, column, value } => {
                assert_eq!(row, 7);
                assert_eq!(column, "BEDS");
                assert_eq!(value, "many");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_field_text_round_trip() {
        let record = HospitalRecord::from_columns(sample_pairs(), 1).unwrap();
        assert_eq!(record.field_text("NAME"), Some("MERCY MEDICAL CENTER"));
        assert_eq!(record.field_text("BEDS"), Some("200"));
        assert_eq!(record.field_text("X"), Some("-76.58"));
        assert_eq!(record.field_text("NO_SUCH_COLUMN"), None);
    }
}
