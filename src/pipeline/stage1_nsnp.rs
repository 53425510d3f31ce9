use std::collections::{BTreeMap, HashMap};

use crate::model::reference::ScoreRow;

/// Row counts per gene symbol, ascending by symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneCounts {
    pub genes: Vec<String>,
    pub counts: Vec<u32>,
}

impl GeneCounts {
    /// Counts laid out along `index`; genes without rows get 0.
    pub fn aligned_to(&self, index: &[String]) -> Vec<u32> {
        let lookup: HashMap<&str, u32> = self
            .genes
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
            .collect();
        index
            .iter()
            .map(|g| lookup.get(g.as_str()).copied().unwrap_or(0))
            .collect()
    }
}

/// Counts rows per gene. Missing fields are zero-filled first, so a row with
/// no score still counts and a row with no gene lands in the "0" group.
pub fn count_rows_per_gene(rows: &[ScoreRow]) -> GeneCounts {
    let mut grouped: BTreeMap<&str, u32> = BTreeMap::new();
    for row in rows {
        let key = row.gene_symbol.as_deref().unwrap_or("0");
        *grouped.entry(key).or_insert(0) += 1;
    }

    let mut genes = Vec::with_capacity(grouped.len());
    let mut counts = Vec::with_capacity(grouped.len());
    for (gene, count) in grouped {
        genes.push(gene.to_string());
        counts.push(count);
    }
    GeneCounts { genes, counts }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_nsnp.rs"]
mod tests;
