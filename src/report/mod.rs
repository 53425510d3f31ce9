use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::model::table::GeneTable;

pub mod json;

use json::{Summary, render_summary_json};

pub const FEATURES_FILE: &str = "features.tsv";
pub const SUMMARY_FILE: &str = "summary.json";

/// Header name for the gene symbol index column.
pub const INDEX_COLUMN: &str = "gene_symbol";

pub fn write_feature_table<W: Write>(table: &GeneTable, out: &mut W) -> io::Result<()> {
    write!(out, "{INDEX_COLUMN}")?;
    for name in table.column_names() {
        write!(out, "\t{}", sanitize(name))?;
    }
    writeln!(out)?;

    for (pos, gene) in table.index().iter().enumerate() {
        write!(out, "{}", sanitize(gene))?;
        for value in table.row(pos) {
            write!(out, "\t{}", sanitize(&value.to_string()))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn write_reports(table: &GeneTable, summary: &Summary<'_>, out_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let features_path = out_dir.join(FEATURES_FILE);
    let mut writer = BufWriter::new(File::create(&features_path)?);
    write_feature_table(table, &mut writer)?;
    writer.flush()?;

    let json = render_summary_json(summary).map_err(io::Error::other)?;
    fs::write(out_dir.join(SUMMARY_FILE), json)?;

    tracing::info!(
        genes = table.n_genes(),
        columns = table.columns().len(),
        "wrote {}",
        features_path.display()
    );
    Ok(())
}

// Tabs and newlines would break the TSV layout.
fn sanitize(s: &str) -> std::borrow::Cow<'_, str> {
    if s.contains(['\t', '\n', '\r']) {
        std::borrow::Cow::Owned(s.replace(['\t', '\n', '\r'], " "))
    } else {
        std::borrow::Cow::Borrowed(s)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
