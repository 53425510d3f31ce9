use crate::model::reference::{CausalGenes, SimilarityTable};

/// For each gene, how many of its associated genes are causal.
///
/// A gene absent from `similarity`, or present with a missing field, scores 0.
/// Tokens are compared exactly as they were split, without trimming.
pub fn similarity_count_feature(
    index: &[String],
    similarity: &SimilarityTable,
    causal: &CausalGenes,
) -> Vec<u32> {
    let mut feature = vec![0u32; index.len()];
    for (slot, gene) in feature.iter_mut().zip(index) {
        if let Some(Some(associated)) = similarity.get(gene) {
            *slot = associated.iter().filter(|g| causal.contains(g)).count() as u32;
        }
    }
    feature
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_similarity.rs"]
mod tests;
