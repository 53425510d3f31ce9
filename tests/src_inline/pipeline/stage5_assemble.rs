use super::*;
use crate::model::reference::{
    ExpressionRow, ExpressionTable, RelationTable, SimilarityTable, split_associated,
};
use crate::model::schema::ExpressionSchema;
use crate::model::table::Value;

fn similarity(entries: &[(&str, Option<&str>)]) -> SimilarityTable {
    let mut table = SimilarityTable::new();
    for (gene, field) in entries {
        table.insert(gene.to_string(), field.map(split_associated));
    }
    table
}

fn fixture_dbs() -> ReferenceDbs {
    ReferenceDbs {
        reactome: RelationTable::new(vec![
            ("BRCA1".to_string(), "TP53".to_string()),
            ("BRCA1".to_string(), "MYC".to_string()),
        ]),
        gtex: ExpressionTable::new(vec![ExpressionRow {
            description: "BRCA1".to_string(),
            values: vec![Value::Float(5.0), Value::Float(5.0), Value::Float(2.0)],
        }]),
        schema: ExpressionSchema::from_names(["Liver", "Lung", "Spleen"]),
        gtex_similarity: similarity(&[("BRCA1", Some("TP53,MYC,EGFR"))]),
        blastp_similarity: similarity(&[("TP53", Some("EGFR"))]),
        atlas_similarity: similarity(&[("TP53", None)]),
        gene_interactions: similarity(&[("BRCA1", Some("TP53")), ("TP53", Some("TP53,EGFR"))]),
    }
}

fn input_table() -> GeneTable {
    let mut table = GeneTable::new(vec!["BRCA1".to_string(), "TP53".to_string()]).unwrap();
    table
        .set_column(Column::new(
            "pval",
            vec![Value::Float(0.01), Value::Float(0.2)],
        ))
        .unwrap();
    table
}

fn int_column(table: &GeneTable, name: &str) -> Vec<Value> {
    table.column(name).unwrap().values.clone()
}

#[test]
fn test_column_order_and_values() {
    let dbs = fixture_dbs();
    let causal: CausalGenes = ["TP53", "EGFR"].into_iter().collect();
    let (table, report) = add_features(input_table(), &dbs, &causal).unwrap();

    let names: Vec<&str> = table.column_names().collect();
    assert_eq!(
        names,
        vec![
            "pval",
            "Reactome",
            "Liver",
            "Lung",
            "Spleen",
            "gtex_similarity",
            "blastp_similarity",
            "atlas_similarity",
            "gene_interactions",
        ]
    );
    assert_eq!(table.index(), &["BRCA1".to_string(), "TP53".to_string()]);

    assert_eq!(int_column(&table, "Reactome"), vec![Value::Int(1), Value::Int(0)]);
    assert_eq!(int_column(&table, "Liver"), vec![Value::Int(1), Value::Int(0)]);
    assert_eq!(int_column(&table, "Spleen"), vec![Value::Int(0), Value::Int(0)]);
    assert_eq!(int_column(&table, "gtex_similarity"), vec![Value::Int(2), Value::Int(0)]);
    assert_eq!(int_column(&table, "blastp_similarity"), vec![Value::Int(0), Value::Int(1)]);
    assert_eq!(int_column(&table, "atlas_similarity"), vec![Value::Int(0), Value::Int(0)]);
    assert_eq!(int_column(&table, "gene_interactions"), vec![Value::Int(1), Value::Int(2)]);

    assert_eq!(report.n_genes, 2);
    assert_eq!(report.expression.matched, 1);
    assert_eq!(report.expression.missing, 1);
    assert_eq!(report.expression.ambiguous, 0);
    assert!(report.skipped_genes.is_empty());

    let interactions = report
        .features
        .iter()
        .find(|f| f.name == "gene_interactions")
        .unwrap();
    assert_eq!(interactions.genes_nonzero, 2);
    assert_eq!(interactions.total, 3);
    assert_eq!(interactions.max, 2);
}

#[test]
fn test_existing_feature_columns_overwritten() {
    let dbs = fixture_dbs();
    let causal: CausalGenes = ["TP53"].into_iter().collect();
    let mut input = input_table();
    input
        .set_column(Column::from_counts("gtex_similarity", &[99, 99]))
        .unwrap();
    input
        .set_column(Column::from_counts("Reactome", &[99, 99]))
        .unwrap();
    input
        .set_column(Column::from_counts("Liver", &[99, 99]))
        .unwrap();
    input
        .set_column(Column::from_counts("extra", &[7, 7]))
        .unwrap();

    let (table, _) = add_features(input, &dbs, &causal).unwrap();
    let names: Vec<&str> = table.column_names().collect();

    // Count columns keep their slot; tissue ranks are appended after "extra".
    assert_eq!(
        names,
        vec![
            "pval",
            "gtex_similarity",
            "Reactome",
            "extra",
            "Liver",
            "Lung",
            "Spleen",
            "blastp_similarity",
            "atlas_similarity",
            "gene_interactions",
        ]
    );
    assert_eq!(int_column(&table, "Liver"), vec![Value::Int(1), Value::Int(0)]);
    assert_eq!(int_column(&table, "gtex_similarity"), vec![Value::Int(1), Value::Int(0)]);
    assert_eq!(int_column(&table, "Reactome"), vec![Value::Int(1), Value::Int(0)]);
    assert_eq!(int_column(&table, "extra"), vec![Value::Int(7), Value::Int(7)]);
}

#[test]
fn test_empty_causal_set_gives_zero_counts() {
    let dbs = fixture_dbs();
    let causal = CausalGenes::default();
    let (table, report) = add_features(input_table(), &dbs, &causal).unwrap();
    for name in [
        REACTOME_COLUMN,
        GTEX_SIMILARITY_COLUMN,
        BLASTP_SIMILARITY_COLUMN,
        ATLAS_SIMILARITY_COLUMN,
        GENE_INTERACTIONS_COLUMN,
    ] {
        assert_eq!(int_column(&table, name), vec![Value::Int(0), Value::Int(0)]);
    }
    assert!(report.features.iter().all(|f| f.total == 0));
}

#[test]
fn test_empty_gene_table() {
    let dbs = fixture_dbs();
    let causal: CausalGenes = ["TP53"].into_iter().collect();
    let table = GeneTable::new(Vec::new()).unwrap();
    let (table, report) = add_features(table, &dbs, &causal).unwrap();
    assert_eq!(table.n_genes(), 0);
    assert_eq!(table.columns().len(), 1 + 3 + 4);
    assert_eq!(report.n_genes, 0);
}
