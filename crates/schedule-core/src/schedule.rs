// File: crates/schedule-core/src/schedule.rs
// Summary: Amortization schedule model (rows of date/principal/interest) and loaders.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ChartError, ChartResult};

/// One period's payment breakdown. `date` is ISO-8601 `YYYY-MM` or `YYYY-MM-DD`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub date: String,
    pub principal: f64,
    pub interest: f64,
}

impl ScheduleRow {
    pub fn new(date: impl Into<String>, principal: f64, interest: f64) -> Self {
        Self { date: date.into(), principal, interest }
    }

    /// Principal plus interest; this is the height of the stacked column.
    pub fn payment(&self) -> f64 {
        self.principal + self.interest
    }
}

/// Ordered rows, index `i` is period `i`. Never mutated after load.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schedule {
    rows: Vec<ScheduleRow>,
}

impl Schedule {
    pub fn new(rows: Vec<ScheduleRow>) -> Self {
        Self { rows }
    }

    /// Parse a JSON array of `{date, principal, interest}` objects.
    /// Extra fields (`month`, `payment`, `balance`) are ignored.
    pub fn from_json(text: &str) -> ChartResult<Self> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        if !value.is_array() {
            return Err(ChartError::InvalidData("schedule payload is not an array".into()));
        }
        let rows: Vec<ScheduleRow> = serde_json::from_value(value)?;
        let schedule = Self::new(rows);
        schedule.validate()?;
        debug!(rows = schedule.len(), "parsed schedule from json");
        Ok(schedule)
    }

    /// Read a CSV with `date,principal,interest` headers (other columns are ignored).
    pub fn from_csv_reader<R: std::io::Read>(reader: R) -> ChartResult<Self> {
        let mut rdr = csv::ReaderBuilder::new().has_headers(true).trim(csv::Trim::All).from_reader(reader);
        let mut rows = Vec::new();
        for rec in rdr.deserialize::<ScheduleRow>() {
            rows.push(rec?);
        }
        let schedule = Self::new(rows);
        schedule.validate()?;
        debug!(rows = schedule.len(), "parsed schedule from csv");
        Ok(schedule)
    }

    fn validate(&self) -> ChartResult<()> {
        for (i, row) in self.rows.iter().enumerate() {
            if !row.principal.is_finite() || !row.interest.is_finite() {
                return Err(ChartError::InvalidData(format!("row {i}: amounts must be finite")));
            }
            if row.principal < 0.0 || row.interest < 0.0 {
                return Err(ChartError::InvalidData(format!("row {i}: amounts must be non-negative")));
            }
            if !is_iso_year_month(&row.date) {
                return Err(ChartError::InvalidData(format!("row {i}: bad date {:?}", row.date)));
            }
        }
        Ok(())
    }

    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn get(&self, index: usize) -> Option<&ScheduleRow> { self.rows.get(index) }
    pub fn rows(&self) -> &[ScheduleRow] { &self.rows }

    /// Largest `principal + interest` over all rows; 0.0 for an empty schedule.
    pub fn max_payment(&self) -> f64 {
        self.rows.iter().map(ScheduleRow::payment).fold(0.0, f64::max)
    }

    /// Number of (possibly partial) years the schedule spans.
    pub fn total_years(&self) -> usize {
        self.rows.len().div_ceil(12)
    }
}

/// `YYYY-MM` or a full `YYYY-MM-DD` calendar date.
fn is_iso_year_month(s: &str) -> bool {
    let s = s.trim();
    if chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok() {
        return true;
    }
    chrono::NaiveDate::parse_from_str(&format!("{s}-01"), "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_ignores_extra_fields() {
        let text = r#"[
            {"month": 1, "payment": 150.0, "interest": 100.0, "principal": 50.0, "balance": 950.0, "date": "2025-03-14"},
            {"date": "2025-04", "principal": 60.0, "interest": 90.0}
        ]"#;
        let s = Schedule::from_json(text).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.get(1).unwrap().date, "2025-04");
        assert_eq!(s.max_payment(), 150.0);
    }

    #[test]
    fn json_object_is_rejected() {
        let err = Schedule::from_json(r#"{"date": "2025-01"}"#).unwrap_err();
        assert!(matches!(err, ChartError::InvalidData(_)));
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let err = Schedule::from_json(r#"[{"date": "2025-01", "principal": -1, "interest": 0}]"#).unwrap_err();
        assert!(err.to_string().contains("non-negative"));
    }

    #[test]
    fn bad_month_is_rejected() {
        assert!(Schedule::from_json(r#"[{"date": "2025-13", "principal": 1, "interest": 0}]"#).is_err());
    }

    #[test]
    fn csv_reads_rows_in_order() {
        let text = "month,date,principal,interest\n1,2025-01,10.5,2.5\n2,2025-02,11,2\n";
        let s = Schedule::from_csv_reader(text.as_bytes()).unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.rows()[0], ScheduleRow::new("2025-01", 10.5, 2.5));
        assert_eq!(s.total_years(), 1);
    }
}
