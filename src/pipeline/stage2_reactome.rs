use crate::model::reference::{CausalGenes, RelationTable};

/// For each gene, how many of its Gene2 partners are causal. Genes that never
/// appear as Gene1 score 0; repeated pairs count every time.
pub fn relation_count_feature(
    index: &[String],
    relations: &RelationTable,
    causal: &CausalGenes,
) -> Vec<u32> {
    let mut feature = vec![0u32; index.len()];
    for (slot, gene) in feature.iter_mut().zip(index) {
        if let Some(partners) = relations.partners(gene) {
            *slot = partners.iter().filter(|p| causal.contains(p)).count() as u32;
        }
    }
    feature
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_reactome.rs"]
mod tests;
