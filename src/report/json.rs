use serde::Serialize;

use crate::pipeline::stage5_assemble::AssemblyReport;

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Summary<'a> {
    pub tool: ToolMeta,
    pub tissue_schema: &'a str,
    pub n_tissues: usize,
    pub n_causal_genes: usize,
    #[serde(flatten)]
    pub assembly: &'a AssemblyReport,
}

pub fn render_summary_json(summary: &Summary<'_>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
