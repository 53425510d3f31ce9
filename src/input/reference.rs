use std::path::Path;

use crate::input::InputError;
use crate::input::tsv::{cell, read_tsv};
use crate::model::reference::{RelationTable, ScoreRow, SimilarityTable, split_associated};
use crate::model::table::{Value, is_missing_marker};

/// Reactome-style pair table with `Gene1` and `Gene2` columns. Symbols are
/// kept byte for byte, like `associated_genes` tokens.
pub fn load_relation_table(path: &Path) -> Result<RelationTable, InputError> {
    let tsv = read_tsv(path)?;
    let gene1 = tsv.require_column("Gene1")?;
    let gene2 = tsv.require_column("Gene2")?;

    let table = RelationTable::new(
        tsv.rows
            .iter()
            .map(|row| (cell(row, gene1).to_string(), cell(row, gene2).to_string())),
    );
    tracing::info!(pairs = table.len(), "loaded relation table {}", tsv.name);
    Ok(table)
}

/// Similarity table indexed by its first column, with an `associated_genes`
/// field split on commas once here.
pub fn load_similarity_table(path: &Path) -> Result<SimilarityTable, InputError> {
    let tsv = read_tsv(path)?;
    let assoc = tsv.require_column("associated_genes")?;

    let mut table = SimilarityTable::new();
    let mut n_missing = 0usize;
    for row in &tsv.rows {
        let gene = cell(row, 0);
        if gene.is_empty() {
            continue;
        }
        let field = cell(row, assoc);
        let associated = if is_missing_marker(field) {
            n_missing += 1;
            None
        } else {
            Some(split_associated(field))
        };
        if !table.insert(gene.to_string(), associated) {
            tracing::warn!(
                table = %tsv.name,
                gene,
                "duplicate gene in similarity table; keeping first row"
            );
        }
    }

    tracing::info!(
        genes = table.len(),
        missing = n_missing,
        "loaded similarity table {}",
        tsv.name
    );
    Ok(table)
}

/// Per-variant table with `gene_symbol` and `score` columns.
pub fn load_score_rows(path: &Path) -> Result<Vec<ScoreRow>, InputError> {
    let tsv = read_tsv(path)?;
    let gene_col = tsv.require_column("gene_symbol")?;
    let score_col = tsv.require_column("score")?;

    let rows: Vec<ScoreRow> = tsv
        .rows
        .iter()
        .map(|row| {
            let gene = cell(row, gene_col);
            ScoreRow {
                gene_symbol: (!is_missing_marker(gene)).then(|| gene.to_string()),
                score: Value::parse(cell(row, score_col)),
            }
        })
        .collect();
    tracing::info!(rows = rows.len(), "loaded score table {}", tsv.name);
    Ok(rows)
}
