use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use crate::config::{
    COL_CITY, COL_HAPPINESS, COL_LATITUDE, COL_LIFE_EXPECTANCY, COL_LONGITUDE, COL_POLLUTION,
    COL_RANK, COL_WATER_COST,
};

use super::error::DataError;
use super::model::{CellValue, CityDataset, CityRecord};

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the city dataset from a CSV file on disk.
pub fn load_csv(path: &Path) -> Result<CityDataset, DataError> {
    let file = std::fs::File::open(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_csv(file)
}

/// Parse the city dataset from any CSV source.
///
/// The header row must name every required column; additional columns are
/// kept as generic cells. Numeric cells that are empty or `-` count as
/// missing.
pub fn read_csv<R: Read>(source: R) -> Result<CityDataset, DataError> {
    let mut reader = csv::Reader::from_reader(source);
    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let columns = RequiredColumns::locate(&headers)?;
    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;
        // 1-based file line; the header occupies line 1.
        let line = record.position().map_or(row_no as u64 + 2, |p| p.line());
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let city = field(columns.city);
        if city.is_empty() {
            return Err(DataError::EmptyCity { line });
        }

        let rank_text = field(columns.rank);
        let rank = rank_text
            .parse::<i64>()
            .map_err(|_| invalid_number(line, COL_RANK, rank_text))?;

        let metric = |idx: usize, column: &str| parse_metric(field(idx), line, column);

        let cells: BTreeMap<String, CellValue> = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| (header.clone(), CellValue::parse(field(idx))))
            .collect();

        records.push(CityRecord {
            city: city.to_string(),
            rank,
            latitude: metric(columns.latitude, COL_LATITUDE)?,
            longitude: metric(columns.longitude, COL_LONGITUDE)?,
            happiness: metric(columns.happiness, COL_HAPPINESS)?,
            life_expectancy: metric(columns.life_expectancy, COL_LIFE_EXPECTANCY)?,
            pollution: metric(columns.pollution, COL_POLLUTION)?,
            water_cost: metric(columns.water_cost, COL_WATER_COST)?,
            cells,
        });
    }

    Ok(CityDataset::new(records, headers))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Header positions of the columns every row must provide.
struct RequiredColumns {
    city: usize,
    rank: usize,
    latitude: usize,
    longitude: usize,
    happiness: usize,
    life_expectancy: usize,
    pollution: usize,
    water_cost: usize,
}

impl RequiredColumns {
    fn locate(headers: &[String]) -> Result<Self, DataError> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| DataError::MissingColumn(name.to_string()))
        };
        Ok(RequiredColumns {
            city: find(COL_CITY)?,
            rank: find(COL_RANK)?,
            latitude: find(COL_LATITUDE)?,
            longitude: find(COL_LONGITUDE)?,
            happiness: find(COL_HAPPINESS)?,
            life_expectancy: find(COL_LIFE_EXPECTANCY)?,
            pollution: find(COL_POLLUTION)?,
            water_cost: find(COL_WATER_COST)?,
        })
    }
}

fn parse_metric(text: &str, line: u64, column: &str) -> Result<Option<f64>, DataError> {
    if text.is_empty() || text == "-" {
        return Ok(None);
    }
    text.parse::<f64>()
        .map(Some)
        .map_err(|_| invalid_number(line, column, text))
}

fn invalid_number(line: u64, column: &str, value: &str) -> DataError {
    DataError::InvalidNumber {
        line,
        column: column.to_string(),
        value: value.to_string(),
    }
}
