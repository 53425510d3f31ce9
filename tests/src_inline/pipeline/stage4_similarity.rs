use super::*;
use crate::model::reference::split_associated;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn table(entries: &[(&str, Option<&str>)]) -> SimilarityTable {
    let mut table = SimilarityTable::new();
    for (gene, field) in entries {
        table.insert(gene.to_string(), field.map(split_associated));
    }
    table
}

#[test]
fn test_brca1_scenario() {
    let index = strings(&["BRCA1"]);
    let db = table(&[("BRCA1", Some("TP53,MYC,EGFR"))]);
    let causal: CausalGenes = ["TP53", "EGFR"].into_iter().collect();
    assert_eq!(similarity_count_feature(&index, &db, &causal), vec![2]);
}

#[test]
fn test_absent_and_missing_score_zero() {
    let index = strings(&["ABSENT", "NOFIELD", "EMPTY"]);
    let db = table(&[("NOFIELD", None), ("EMPTY", Some(""))]);
    let causal: CausalGenes = ["TP53", ""].into_iter().collect();
    let feature = similarity_count_feature(&index, &db, &causal);
    assert_eq!(feature[0], 0);
    assert_eq!(feature[1], 0);
    // A present but empty field is one empty token, not a missing field.
    assert_eq!(feature[2], 1);
}

#[test]
fn test_tokens_not_trimmed() {
    let index = strings(&["A"]);
    let db = table(&[("A", Some("TP53, EGFR"))]);
    let causal: CausalGenes = ["TP53", "EGFR"].into_iter().collect();
    assert_eq!(similarity_count_feature(&index, &db, &causal), vec![1]);
}

#[test]
fn test_count_bounded_by_token_count() {
    let field = "A,B,A,C";
    let index = strings(&["G"]);
    let db = table(&[("G", Some(field))]);
    let causal: CausalGenes = ["A", "B", "C", "D"].into_iter().collect();
    let feature = similarity_count_feature(&index, &db, &causal);
    assert_eq!(feature, vec![4]);
    assert!(feature[0] as usize <= field.split(',').count());
}

#[test]
fn test_duplicate_insert_keeps_first() {
    let mut db = SimilarityTable::new();
    assert!(db.insert("A".to_string(), Some(split_associated("TP53"))));
    assert!(!db.insert("A".to_string(), None));
    let causal: CausalGenes = ["TP53"].into_iter().collect();
    assert_eq!(similarity_count_feature(&strings(&["A"]), &db, &causal), vec![1]);
}
