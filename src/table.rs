use crate::error::{PlotError, Result};

use csv::{ReaderBuilder, Trim};
use std::io::Read;
use std::path::Path;

/// Key column present in every result table.
pub const MAP_COLUMN: &str = "map";

/// A semicolon-delimited result table: one row per map instance, one named
/// numeric metric per remaining column.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultTable {
    columns: Vec<String>,
    rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    map: f64,
    values: Vec<f64>,
}

/// One (map, variable, value) triple of the long-format view.
#[derive(Debug, Clone, PartialEq)]
pub struct LongRecord {
    pub map: f64,
    pub variable: String,
    pub value: f64,
}

impl ResultTable {
    /// Reads a table from a semicolon-delimited CSV file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, the header lacks a `map`
    /// column, or any cell fails to parse as a number.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(b';')
            .has_headers(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = rdr
            .headers()
            .map_err(|e| PlotError::Header(format!("Failed to read headers: {e}")))?;

        let map_idx = headers
            .iter()
            .position(|h| h == MAP_COLUMN)
            .ok_or_else(|| PlotError::Header(format!("Missing '{MAP_COLUMN}' column")))?;

        let columns: Vec<String> = headers
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != map_idx)
            .map(|(_, h)| h.to_string())
            .collect();

        let header_row: Vec<String> = headers.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (i, result) in rdr.records().enumerate() {
            let rec = result?;
            let row_number = i + 2; // 1-indexed, +1 for the header row

            let map = parse_cell(rec.get(map_idx).unwrap_or(""), row_number, MAP_COLUMN)?;
            let mut values = Vec::with_capacity(columns.len());
            for (j, name) in header_row.iter().enumerate() {
                if j == map_idx {
                    continue;
                }
                values.push(parse_cell(rec.get(j).unwrap_or(""), row_number, name)?);
            }
            rows.push(Row { map, values });
        }

        Ok(Self { columns, rows })
    }

    /// Metric column names, `map` excluded, in header order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Map identifiers in current row order.
    pub fn map_values(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.map).collect()
    }

    /// Sorts rows by map identifier, ascending. The sort is stable, so equal
    /// identifiers keep their input order.
    pub fn sort_by_map(&mut self) {
        self.rows.sort_by(|a, b| a.map.total_cmp(&b.map));
    }

    /// Reshapes the table into long format: one (map, variable, value) triple
    /// per row and metric column.
    pub fn melt(&self) -> Vec<LongRecord> {
        let mut records = Vec::with_capacity(self.rows.len() * self.columns.len());
        for row in &self.rows {
            for (name, &value) in self.columns.iter().zip(&row.values) {
                records.push(LongRecord {
                    map: row.map,
                    variable: name.clone(),
                    value,
                });
            }
        }
        records
    }

    /// Restricts the table to `map` plus exactly the named columns, in the
    /// given order.
    ///
    /// # Errors
    /// Returns [`PlotError::MissingColumn`] if any name is absent, before any
    /// data is copied.
    pub fn select(&self, names: &[&str]) -> Result<Self> {
        let mut indices = Vec::with_capacity(names.len());
        for &name in names {
            let idx = self
                .columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| PlotError::MissingColumn {
                    name: name.to_string(),
                })?;
            indices.push(idx);
        }

        let rows = self
            .rows
            .iter()
            .map(|row| Row {
                map: row.map,
                values: indices.iter().map(|&i| row.values[i]).collect(),
            })
            .collect();

        Ok(Self {
            columns: names.iter().map(|&n| n.to_string()).collect(),
            rows,
        })
    }
}

fn parse_cell(raw: &str, row: usize, column: &str) -> Result<f64> {
    raw.parse().map_err(|e| PlotError::ValueParse {
        row,
        column: column.to_string(),
        value: raw.to_string(),
        source: e,
    })
}
