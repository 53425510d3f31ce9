mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::input::{
    load_causal_genes, load_expression_table, load_gene_table, load_relation_table,
    load_score_rows, load_similarity_table, read_tissue_header,
};
use crate::model::reference::ReferenceDbs;
use crate::model::schema::ExpressionSchema;
use crate::model::table::{Column, Value};
use crate::pipeline::stage1_nsnp::count_rows_per_gene;
use crate::pipeline::stage5_assemble::add_features;
use crate::report::json::{Summary, ToolMeta};
use crate::report::write_reports;

const N_SNP_COLUMN: &str = "n_snp";

#[derive(Debug, Parser)]
#[command(name = "kira-genefeatures", version)]
#[command(about = "Augment a candidate-gene table with pathway, tissue-rank and similarity features")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the reference tables, compute all features and write the reports
    Run(RunConfig),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum TissueSchemaMode {
    /// Built-in GTEx v7 tissue list (53 tissues)
    Builtin,
    /// Every column of the GTEx file after `Name` and `Description`
    GtexHeader,
}

impl TissueSchemaMode {
    fn label(self) -> &'static str {
        match self {
            TissueSchemaMode::Builtin => "gtex-v7",
            TissueSchemaMode::GtexHeader => "gtex-header",
        }
    }
}

#[derive(Debug, Clone, Args)]
struct RunConfig {
    /// Candidate gene table; first column is the gene symbol
    #[arg(long)]
    genes: PathBuf,
    /// Known causal genes (`gene_symbol` column)
    #[arg(long)]
    causal: PathBuf,
    /// Reactome pair table (`Gene1`, `Gene2`)
    #[arg(long)]
    reactome: PathBuf,
    /// GTEx median expression table (`Name`, `Description`, tissues...)
    #[arg(long)]
    gtex: PathBuf,
    #[arg(long)]
    gtex_similarity: PathBuf,
    #[arg(long)]
    blastp_similarity: PathBuf,
    #[arg(long)]
    atlas_similarity: PathBuf,
    #[arg(long)]
    gene_interactions: PathBuf,
    /// Optional per-variant table (`gene_symbol`, `score`) for an n_snp column
    #[arg(long)]
    snps: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = TissueSchemaMode::Builtin)]
    tissue_schema: TissueSchemaMode,
    /// Value used for every tissue when a gene has no usable expression row
    #[arg(long)]
    missing_expression: Option<f64>,
    /// Output directory
    #[arg(long)]
    out: PathBuf,
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    let Command::Run(config) = cli.command;
    if let Err(err) = run(&config) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(config: &RunConfig) -> Result<(), String> {
    let mut genes = load_gene_table(&config.genes).map_err(|e| e.to_string())?;
    let causal = load_causal_genes(&config.causal).map_err(|e| e.to_string())?;
    let schema = resolve_schema(config)?;
    let dbs = load_reference_dbs(config, schema)?;

    if let Some(path) = &config.snps {
        let rows = load_score_rows(path).map_err(|e| e.to_string())?;
        let counts = count_rows_per_gene(&rows).aligned_to(genes.index());
        genes
            .set_column(Column::from_counts(N_SNP_COLUMN, &counts))
            .map_err(|e| e.to_string())?;
        tracing::info!("added {N_SNP_COLUMN} feature");
    }

    let (table, report) = add_features(genes, &dbs, &causal).map_err(|e| e.to_string())?;
    if !report.skipped_genes.is_empty() {
        tracing::warn!(
            skipped = report.skipped_genes.len(),
            "some genes kept raw expression values"
        );
    }

    let summary = Summary {
        tool: ToolMeta {
            name: "kira-genefeatures".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        tissue_schema: config.tissue_schema.label(),
        n_tissues: dbs.schema.len(),
        n_causal_genes: causal.len(),
        assembly: &report,
    };
    write_reports(&table, &summary, &config.out).map_err(|e| e.to_string())?;
    Ok(())
}

fn resolve_schema(config: &RunConfig) -> Result<ExpressionSchema, String> {
    let schema = match config.tissue_schema {
        TissueSchemaMode::Builtin => ExpressionSchema::gtex_v7(),
        TissueSchemaMode::GtexHeader => {
            let names = read_tissue_header(&config.gtex).map_err(|e| e.to_string())?;
            ExpressionSchema::from_names(names)
        }
    };
    Ok(match config.missing_expression {
        Some(v) => schema.with_default(Value::Float(v)),
        None => schema,
    })
}

fn load_reference_dbs(
    config: &RunConfig,
    schema: ExpressionSchema,
) -> Result<ReferenceDbs, String> {
    Ok(ReferenceDbs {
        reactome: load_relation_table(&config.reactome).map_err(|e| e.to_string())?,
        gtex: load_expression_table(&config.gtex, &schema).map_err(|e| e.to_string())?,
        schema,
        gtex_similarity: load_similarity_table(&config.gtex_similarity)
            .map_err(|e| e.to_string())?,
        blastp_similarity: load_similarity_table(&config.blastp_similarity)
            .map_err(|e| e.to_string())?,
        atlas_similarity: load_similarity_table(&config.atlas_similarity)
            .map_err(|e| e.to_string())?,
        gene_interactions: load_similarity_table(&config.gene_interactions)
            .map_err(|e| e.to_string())?,
    })
}

#[cfg(test)]
fn parse_args(args: &[&str]) -> Result<RunConfig, String> {
    let argv = std::iter::once("kira-genefeatures").chain(args.iter().copied());
    let cli = Cli::try_parse_from(argv).map_err(|e| e.to_string())?;
    let Command::Run(config) = cli.command;
    Ok(config)
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
