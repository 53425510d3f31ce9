use serde::Serialize;
use thiserror::Error;

use crate::model::reference::ExpressionTable;
use crate::model::schema::ExpressionSchema;
use crate::model::table::{Column, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupOutcome {
    Matched,
    Missing,
    Ambiguous,
}

/// Raw tissue rows laid out along the gene index.
#[derive(Debug, Clone)]
pub struct ExpressionLookup {
    pub rows: Vec<Vec<Value>>,
    pub outcomes: Vec<LookupOutcome>,
}

impl ExpressionLookup {
    pub fn count(&self, outcome: LookupOutcome) -> usize {
        self.outcomes.iter().filter(|&&o| o == outcome).count()
    }

    pub fn stats(&self) -> ExpressionStats {
        ExpressionStats {
            matched: self.count(LookupOutcome::Matched),
            missing: self.count(LookupOutcome::Missing),
            ambiguous: self.count(LookupOutcome::Ambiguous),
        }
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum RankError {
    #[error("non-numeric value '{value}' in column {column}")]
    NonNumeric { column: String, value: String },
    #[error("row has {got} values but the schema has {expected} tissues")]
    WidthMismatch { expected: usize, got: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedGene {
    pub gene: String,
    pub reason: String,
}

/// Rank columns in schema order plus the genes whose rows were left raw.
#[derive(Debug, Clone)]
pub struct RankOutput {
    pub columns: Vec<Column>,
    pub skipped: Vec<SkippedGene>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ExpressionStats {
    pub matched: usize,
    pub missing: usize,
    pub ambiguous: usize,
}

#[derive(Debug, Clone)]
pub struct ExpressionFeatures {
    pub columns: Vec<Column>,
    pub stats: ExpressionStats,
    pub skipped: Vec<SkippedGene>,
}

/// One tissue row per gene: the unique `Description` match, or the schema
/// default row when a gene has zero or several matches.
pub fn lookup_expression(
    index: &[String],
    gtex: &ExpressionTable,
    schema: &ExpressionSchema,
) -> ExpressionLookup {
    let mut rows = Vec::with_capacity(index.len());
    let mut outcomes = Vec::with_capacity(index.len());
    for gene in index {
        let matches = gtex.matches(gene);
        match matches.as_slice() {
            [only] => {
                rows.push(only.values.clone());
                outcomes.push(LookupOutcome::Matched);
            }
            [] => {
                rows.push(schema.default_row());
                outcomes.push(LookupOutcome::Missing);
            }
            _ => {
                tracing::debug!(
                    gene = %gene,
                    rows = matches.len(),
                    "ambiguous expression rows; using default"
                );
                rows.push(schema.default_row());
                outcomes.push(LookupOutcome::Ambiguous);
            }
        }
    }
    ExpressionLookup { rows, outcomes }
}

/// Dense 0-based ranks among the distinct values; NaN counts as 0.
pub fn rank_values(values: &[f64]) -> Vec<u32> {
    let filled: Vec<f64> = values
        .iter()
        .map(|&v| if v.is_nan() { 0.0 } else { v })
        .collect();
    let mut distinct = filled.clone();
    distinct.sort_by(f64::total_cmp);
    distinct.dedup();
    filled
        .iter()
        .map(|v| distinct.partition_point(|d| d < v) as u32)
        .collect()
}

pub fn rank_row(row: &[Value], schema: &ExpressionSchema) -> Result<Vec<Value>, RankError> {
    if row.len() != schema.len() {
        return Err(RankError::WidthMismatch {
            expected: schema.len(),
            got: row.len(),
        });
    }
    let mut raw = Vec::with_capacity(row.len());
    for (value, tissue) in row.iter().zip(schema.columns()) {
        match value {
            Value::Int(v) => raw.push(*v as f64),
            Value::Float(v) => raw.push(*v),
            Value::Missing => raw.push(f64::NAN),
            Value::Text(s) => {
                return Err(RankError::NonNumeric {
                    column: tissue.name.clone(),
                    value: s.clone(),
                });
            }
        }
    }
    Ok(rank_values(&raw).into_iter().map(Value::from).collect())
}

/// Ranks every gene's row independently. A row that cannot be ranked stays as
/// it was (padded or cut to the schema width) and the gene is reported.
pub fn transform_to_ranks(
    index: &[String],
    rows: Vec<Vec<Value>>,
    schema: &ExpressionSchema,
) -> RankOutput {
    let n_genes = index.len();
    let mut columns: Vec<Column> = schema
        .names()
        .map(|name| Column::new(name, Vec::with_capacity(n_genes)))
        .collect();
    let mut skipped = Vec::new();

    for (gene, row) in index.iter().zip(rows) {
        let out = match rank_row(&row, schema) {
            Ok(ranked) => ranked,
            Err(err) => {
                tracing::warn!(gene = %gene, "expression ranks skipped: {err}");
                skipped.push(SkippedGene {
                    gene: gene.clone(),
                    reason: err.to_string(),
                });
                let mut raw = row;
                raw.resize(schema.len(), Value::Missing);
                raw
            }
        };
        for (column, value) in columns.iter_mut().zip(out) {
            column.values.push(value);
        }
    }

    RankOutput { columns, skipped }
}

/// Lookup followed by ranking, aligned position by position with `index`.
pub fn expression_rank_features(
    index: &[String],
    gtex: &ExpressionTable,
    schema: &ExpressionSchema,
) -> ExpressionFeatures {
    let lookup = lookup_expression(index, gtex, schema);
    let stats = lookup.stats();
    tracing::info!(
        matched = stats.matched,
        missing = stats.missing,
        ambiguous = stats.ambiguous,
        "expression lookup done"
    );
    let ranked = transform_to_ranks(index, lookup.rows, schema);
    ExpressionFeatures {
        columns: ranked.columns,
        stats,
        skipped: ranked.skipped,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_expression.rs"]
mod tests;
