use std::path::Path;

use crate::input::InputError;
use crate::input::tsv::{cell, read_tsv};
use crate::model::reference::{ExpressionRow, ExpressionTable};
use crate::model::schema::ExpressionSchema;
use crate::model::table::Value;

/// Leading identifier columns (`Name`, `Description`) before the tissue values.
pub const ID_COLUMNS: usize = 2;

/// Tissue column names of a GTEx median table, i.e. the header past the
/// identifier columns.
pub fn read_tissue_header(path: &Path) -> Result<Vec<String>, InputError> {
    let tsv = read_tsv(path)?;
    tsv.require_column("Description")?;
    let tissues: Vec<String> = tsv.columns.iter().skip(ID_COLUMNS).cloned().collect();
    if tissues.is_empty() {
        return Err(InputError::InvalidInput(format!(
            "{}: no tissue columns after the identifier columns",
            tsv.name
        )));
    }
    Ok(tissues)
}

/// Loads tissue expression rows, keeping only the schema's columns in schema
/// order. Every schema column must be present in the header.
pub fn load_expression_table(
    path: &Path,
    schema: &ExpressionSchema,
) -> Result<ExpressionTable, InputError> {
    let tsv = read_tsv(path)?;
    let desc_col = tsv.require_column("Description")?;

    let mut tissue_cols = Vec::with_capacity(schema.len());
    for name in schema.names() {
        let idx = tsv
            .columns
            .iter()
            .skip(ID_COLUMNS)
            .position(|c| c == name)
            .ok_or_else(|| InputError::MissingColumn {
                table: tsv.name.clone(),
                column: name.to_string(),
            })?;
        tissue_cols.push(idx + ID_COLUMNS);
    }

    let extra = tsv.columns.len().saturating_sub(ID_COLUMNS + tissue_cols.len());
    if extra > 0 {
        tracing::debug!(
            table = %tsv.name,
            extra,
            "ignoring value columns outside the tissue schema"
        );
    }

    let rows: Vec<ExpressionRow> = tsv
        .rows
        .iter()
        .map(|row| ExpressionRow {
            description: cell(row, desc_col).to_string(),
            values: tissue_cols
                .iter()
                .map(|&idx| Value::parse(cell(row, idx)))
                .collect(),
        })
        .collect();

    let table = ExpressionTable::new(rows);
    tracing::info!(
        rows = table.len(),
        tissues = schema.len(),
        "loaded expression table {}",
        tsv.name
    );
    Ok(table)
}
