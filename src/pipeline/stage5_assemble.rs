use serde::Serialize;

use crate::model::reference::{CausalGenes, ReferenceDbs, SimilarityTable};
use crate::model::table::{Column, GeneTable, TableError};
use crate::pipeline::stage2_reactome::relation_count_feature;
use crate::pipeline::stage3_expression::{ExpressionStats, SkippedGene, expression_rank_features};
use crate::pipeline::stage4_similarity::similarity_count_feature;

pub const REACTOME_COLUMN: &str = "Reactome";
pub const GTEX_SIMILARITY_COLUMN: &str = "gtex_similarity";
pub const BLASTP_SIMILARITY_COLUMN: &str = "blastp_similarity";
pub const ATLAS_SIMILARITY_COLUMN: &str = "atlas_similarity";
pub const GENE_INTERACTIONS_COLUMN: &str = "gene_interactions";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureStats {
    pub name: String,
    pub genes_nonzero: usize,
    pub total: u64,
    pub max: u32,
}

impl FeatureStats {
    pub fn from_counts(name: &str, counts: &[u32]) -> Self {
        FeatureStats {
            name: name.to_string(),
            genes_nonzero: counts.iter().filter(|&&c| c > 0).count(),
            total: counts.iter().map(|&c| c as u64).sum(),
            max: counts.iter().copied().max().unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssemblyReport {
    pub n_genes: usize,
    pub features: Vec<FeatureStats>,
    pub expression: ExpressionStats,
    pub skipped_genes: Vec<SkippedGene>,
}

/// Appends every reference feature to `table`, in a fixed order: Reactome
/// count, tissue ranks, then the four similarity counts.
///
/// Count columns are assigned in place over a same-named column; tissue rank
/// columns are concatenated, so a same-named column moves to the end.
pub fn add_features(
    mut table: GeneTable,
    dbs: &ReferenceDbs,
    causal: &CausalGenes,
) -> Result<(GeneTable, AssemblyReport), TableError> {
    let index = table.index().to_vec();
    let mut features = Vec::with_capacity(5);

    let reactome = relation_count_feature(&index, &dbs.reactome, causal);
    features.push(FeatureStats::from_counts(REACTOME_COLUMN, &reactome));
    table.set_column(Column::from_counts(REACTOME_COLUMN, &reactome))?;
    tracing::info!("added {REACTOME_COLUMN} feature");

    let expression = expression_rank_features(&index, &dbs.gtex, &dbs.schema);
    table.concat_columns(expression.columns)?;
    tracing::info!(tissues = dbs.schema.len(), "added tissue rank features");

    let similarity: [(&str, &SimilarityTable); 4] = [
        (GTEX_SIMILARITY_COLUMN, &dbs.gtex_similarity),
        (BLASTP_SIMILARITY_COLUMN, &dbs.blastp_similarity),
        (ATLAS_SIMILARITY_COLUMN, &dbs.atlas_similarity),
        (GENE_INTERACTIONS_COLUMN, &dbs.gene_interactions),
    ];
    for (name, db) in similarity {
        let counts = similarity_count_feature(&index, db, causal);
        features.push(FeatureStats::from_counts(name, &counts));
        table.set_column(Column::from_counts(name, &counts))?;
        tracing::info!("added {name} feature");
    }

    let report = AssemblyReport {
        n_genes: index.len(),
        features,
        expression: expression.stats,
        skipped_genes: expression.skipped,
    };
    Ok((table, report))
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_assemble.rs"]
mod tests;
