use super::*;
use crate::model::table::{Column, Value};
use crate::pipeline::stage3_expression::{ExpressionStats, SkippedGene};
use crate::pipeline::stage5_assemble::{AssemblyReport, FeatureStats};
use crate::report::json::ToolMeta;

fn sample_table() -> GeneTable {
    let mut table = GeneTable::new(vec!["BRCA1".to_string(), "TP53".to_string()]).unwrap();
    table
        .set_column(Column::new(
            "note",
            vec![Value::Text("a\tb".to_string()), Value::Missing],
        ))
        .unwrap();
    table
        .set_column(Column::from_counts("Reactome", &[1, 0]))
        .unwrap();
    table
}

#[test]
fn test_feature_table_layout() {
    let mut out = Vec::new();
    write_feature_table(&sample_table(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
        text,
        "gene_symbol\tnote\tReactome\nBRCA1\ta b\t1\nTP53\t\t0\n"
    );
}

#[test]
fn test_summary_json_fields() {
    let report = AssemblyReport {
        n_genes: 2,
        features: vec![FeatureStats::from_counts("Reactome", &[1, 0])],
        expression: ExpressionStats {
            matched: 1,
            missing: 1,
            ambiguous: 0,
        },
        skipped_genes: vec![SkippedGene {
            gene: "TP53".to_string(),
            reason: "bad row".to_string(),
        }],
    };
    let summary = Summary {
        tool: ToolMeta {
            name: "kira-genefeatures".to_string(),
            version: "0.0.0".to_string(),
        },
        tissue_schema: "gtex-v7",
        n_tissues: 53,
        n_causal_genes: 4,
        assembly: &report,
    };
    let json = render_summary_json(&summary).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["tool"]["name"], "kira-genefeatures");
    assert_eq!(value["n_genes"], 2);
    assert_eq!(value["n_tissues"], 53);
    assert_eq!(value["features"][0]["name"], "Reactome");
    assert_eq!(value["features"][0]["genes_nonzero"], 1);
    assert_eq!(value["expression"]["missing"], 1);
    assert_eq!(value["skipped_genes"][0]["gene"], "TP53");
}

#[test]
fn test_write_reports_creates_files() {
    let mut dir = std::env::temp_dir();
    dir.push(format!("kira_genefeatures_report_{}", std::process::id()));
    let report = AssemblyReport {
        n_genes: 2,
        features: Vec::new(),
        expression: ExpressionStats::default(),
        skipped_genes: Vec::new(),
    };
    let summary = Summary {
        tool: ToolMeta {
            name: "kira-genefeatures".to_string(),
            version: "0.0.0".to_string(),
        },
        tissue_schema: "gtex-v7",
        n_tissues: 53,
        n_causal_genes: 0,
        assembly: &report,
    };
    write_reports(&sample_table(), &summary, &dir).unwrap();
    assert!(dir.join(FEATURES_FILE).exists());
    assert!(dir.join(SUMMARY_FILE).exists());
}
