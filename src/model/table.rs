use std::collections::HashSet;
use std::fmt;

use thiserror::Error;

/// A single cell of a gene table. Parsed once from text at load time.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
    Missing,
}

impl Value {
    pub fn parse(raw: &str) -> Value {
        let s = raw.trim();
        if is_missing_marker(s) {
            return Value::Missing;
        }
        if let Ok(v) = s.parse::<i64>() {
            return Value::Int(v);
        }
        if let Ok(v) = s.parse::<f64>() {
            return Value::Float(v);
        }
        Value::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) if v.is_nan() => Ok(()),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
            Value::Missing => Ok(()),
        }
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

/// Markers that loaders treat as an absent cell.
pub fn is_missing_marker(s: &str) -> bool {
    matches!(s, "" | "NA" | "NaN" | "nan" | "N/A" | "null")
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    pub fn from_counts(name: impl Into<String>, counts: &[u32]) -> Self {
        Column::new(name, counts.iter().map(|&c| Value::from(c)).collect())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    #[error("duplicate gene symbol in index: {0}")]
    DuplicateGene(String),
    #[error("column {column} has {got} values but the table has {expected} genes")]
    LengthMismatch {
        column: String,
        expected: usize,
        got: usize,
    },
}

/// Candidate genes, one row per unique gene symbol.
///
/// The index never changes once built; columns are only added or replaced.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneTable {
    index: Vec<String>,
    columns: Vec<Column>,
}

impl GeneTable {
    pub fn new(index: Vec<String>) -> Result<Self, TableError> {
        let mut seen = HashSet::with_capacity(index.len());
        for gene in &index {
            if !seen.insert(gene.as_str()) {
                return Err(TableError::DuplicateGene(gene.clone()));
            }
        }
        Ok(GeneTable {
            index,
            columns: Vec::new(),
        })
    }

    pub fn index(&self) -> &[String] {
        &self.index
    }

    pub fn n_genes(&self) -> usize {
        self.index.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[cfg(test)]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Direct assignment: a same-named column is replaced in place, otherwise
    /// the column is appended.
    pub fn set_column(&mut self, column: Column) -> Result<(), TableError> {
        self.check_len(&column)?;
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => existing.values = column.values,
            None => self.columns.push(column),
        }
        Ok(())
    }

    /// Horizontal concatenation: new columns always land at the end, dropping
    /// any earlier column carrying the same name.
    pub fn concat_columns(&mut self, columns: Vec<Column>) -> Result<(), TableError> {
        for column in &columns {
            self.check_len(column)?;
        }
        let incoming: HashSet<&str> = columns.iter().map(|c| c.name.as_str()).collect();
        self.columns.retain(|c| !incoming.contains(c.name.as_str()));
        self.columns.extend(columns);
        Ok(())
    }

    pub fn row(&self, gene_pos: usize) -> impl Iterator<Item = &Value> {
        self.columns.iter().map(move |c| &c.values[gene_pos])
    }

    fn check_len(&self, column: &Column) -> Result<(), TableError> {
        if column.values.len() != self.index.len() {
            return Err(TableError::LengthMismatch {
                column: column.name.clone(),
                expected: self.index.len(),
                got: column.values.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/table.rs"]
mod tests;
