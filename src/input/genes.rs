use std::path::Path;

use crate::input::InputError;
use crate::input::tsv::{cell, read_tsv};
use crate::model::reference::CausalGenes;
use crate::model::table::{Column, GeneTable, Value, is_missing_marker};

/// Loads the candidate gene table. The first column is the gene symbol index;
/// every other column is carried through untouched.
pub fn load_gene_table(path: &Path) -> Result<GeneTable, InputError> {
    let tsv = read_tsv(path)?;

    let mut index = Vec::with_capacity(tsv.rows.len());
    for (i, row) in tsv.rows.iter().enumerate() {
        let gene = cell(row, 0);
        if gene.is_empty() {
            return Err(InputError::InvalidInput(format!(
                "{}: empty gene symbol on data row {}",
                tsv.name,
                i + 1
            )));
        }
        index.push(gene.to_string());
    }

    let mut table =
        GeneTable::new(index).map_err(|e| InputError::InvalidInput(format!("{}: {e}", tsv.name)))?;

    for (col_idx, name) in tsv.columns.iter().enumerate().skip(1) {
        let values = tsv
            .rows
            .iter()
            .map(|row| Value::parse(cell(row, col_idx)))
            .collect();
        table
            .set_column(Column::new(name.clone(), values))
            .map_err(|e| InputError::InvalidInput(format!("{}: {e}", tsv.name)))?;
    }

    tracing::info!(
        genes = table.n_genes(),
        columns = table.columns().len(),
        "loaded gene table {}",
        tsv.name
    );
    Ok(table)
}

pub fn load_causal_genes(path: &Path) -> Result<CausalGenes, InputError> {
    let tsv = read_tsv(path)?;
    let col = tsv.require_column("gene_symbol")?;
    let causal: CausalGenes = tsv
        .rows
        .iter()
        .map(|row| cell(row, col))
        .filter(|gene| !is_missing_marker(gene))
        .map(str::to_string)
        .collect();
    if causal.is_empty() {
        tracing::warn!("causal gene set {} is empty; all counts will be 0", tsv.name);
    }
    tracing::info!(genes = causal.len(), "loaded causal genes {}", tsv.name);
    Ok(causal)
}
