use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the dataset
// ---------------------------------------------------------------------------

/// A dynamically-typed cell, guessed from the CSV text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    Integer(i64),
    Float(f64),
    Text(String),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Null => Ok(()),
        }
    }
}

impl CellValue {
    /// Guess the type of a raw CSV field.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() {
            return CellValue::Null;
        }
        if let Ok(i) = s.parse::<i64>() {
            return CellValue::Integer(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return CellValue::Float(f);
        }
        CellValue::Text(s.to_string())
    }
}

// ---------------------------------------------------------------------------
// CityRecord – one row of the CSV
// ---------------------------------------------------------------------------

/// One city and its metrics. Metric fields are `None` where the source
/// marks the value as missing (`-` or empty).
#[derive(Debug, Clone)]
pub struct CityRecord {
    pub city: String,
    pub rank: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub happiness: Option<f64>,
    pub life_expectancy: Option<f64>,
    pub pollution: Option<f64>,
    pub water_cost: Option<f64>,
    /// Every cell of the row, keyed by column header.
    pub cells: BTreeMap<String, CellValue>,
}

impl CityRecord {
    /// Look up a cell by column header; unknown columns read as null.
    pub fn cell(&self, column: &str) -> CellValue {
        self.cells.get(column).cloned().unwrap_or(CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// CityDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded dataset plus the option lists the UI offers.
#[derive(Debug, Clone)]
pub struct CityDataset {
    pub records: Vec<CityRecord>,
    /// Column headers in file order.
    pub column_names: Vec<String>,
    /// Unique city names in order of first appearance.
    pub cities: Vec<String>,
}

impl CityDataset {
    pub fn new(records: Vec<CityRecord>, column_names: Vec<String>) -> Self {
        let mut seen = BTreeSet::new();
        let cities = records
            .iter()
            .filter(|r| seen.insert(r.city.clone()))
            .map(|r| r.city.clone())
            .collect();
        CityDataset {
            records,
            column_names,
            cities,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.column_names.iter().any(|c| c == column)
    }

    /// Largest happiness score across the whole dataset.
    pub fn max_happiness(&self) -> Option<f64> {
        self.records
            .iter()
            .filter_map(|r| r.happiness)
            .fold(None, |acc: Option<f64>, h| Some(acc.map_or(h, |m| m.max(h))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(city: &str, happiness: Option<f64>) -> CityRecord {
        CityRecord {
            city: city.to_string(),
            rank: 1,
            latitude: None,
            longitude: None,
            happiness,
            life_expectancy: None,
            pollution: None,
            water_cost: None,
            cells: BTreeMap::new(),
        }
    }

    #[test]
    fn parse_guesses_cell_types() {
        assert_eq!(CellValue::parse("12"), CellValue::Integer(12));
        assert_eq!(CellValue::parse("1.92"), CellValue::Float(1.92));
        assert_eq!(CellValue::parse("£34.90"), CellValue::Text("£34.90".into()));
        assert_eq!(CellValue::parse("  "), CellValue::Null);
    }

    #[test]
    fn city_options_keep_first_appearance_order() {
        let ds = CityDataset::new(
            vec![record("Oslo", None), record("Lima", None), record("Oslo", None)],
            vec!["City".into()],
        );
        assert_eq!(ds.cities, vec!["Oslo", "Lima"]);
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn max_happiness_skips_missing_values() {
        let ds = CityDataset::new(
            vec![record("A", Some(5.0)), record("B", None), record("C", Some(8.0))],
            Vec::new(),
        );
        assert_eq!(ds.max_happiness(), Some(8.0));

        let empty = CityDataset::new(Vec::new(), Vec::new());
        assert_eq!(empty.max_happiness(), None);
    }

    #[test]
    fn cells_serialize_as_plain_json() {
        let row = vec![
            CellValue::Integer(3),
            CellValue::Text("Vienna".into()),
            CellValue::Null,
        ];
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"[3,"Vienna",null]"#
        );
    }
}
