use std::io::BufRead;
use std::path::Path;

use crate::input::{InputError, open_maybe_gz, table_name};

/// Header plus raw string rows of a tab-separated file.
#[derive(Debug, Clone)]
pub struct TsvTable {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TsvTable {
    /// Position of a required column; absence is a schema violation.
    pub fn require_column(&self, column: &str) -> Result<usize, InputError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| InputError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }
}

/// Short rows read as empty cells.
pub fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

pub fn read_tsv(path: &Path) -> Result<TsvTable, InputError> {
    let name = table_name(path);
    let mut reader = open_maybe_gz(path)?;
    let mut buf = String::new();

    let read = reader.read_line(&mut buf)?;
    if read == 0 {
        return Err(InputError::Parse(format!("{name} is empty")));
    }
    let mut line_no = 1usize;
    if is_gct_version_line(&buf) {
        // GCT preamble: version line, then a dimensions line, then the header.
        for _ in 0..2 {
            buf.clear();
            if reader.read_line(&mut buf)? == 0 {
                return Err(InputError::Parse(format!(
                    "{name} has no header after GCT preamble"
                )));
            }
            line_no += 1;
        }
    }
    let columns: Vec<String> = buf
        .trim_end_matches(['\r', '\n'])
        .split('\t')
        .map(|s| s.trim().to_string())
        .collect();
    if columns.iter().all(|c| c.is_empty()) {
        return Err(InputError::Parse(format!("{name} header is empty")));
    }

    let mut rows = Vec::new();
    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        line_no += 1;
        let line = buf.trim_end_matches(['\r', '\n']);
        if line.trim().is_empty() {
            continue;
        }
        let fields: Vec<String> = line.split('\t').map(str::to_string).collect();
        if fields.len() > columns.len() {
            tracing::warn!(
                table = %name,
                line = line_no,
                "row has {} fields but header has {}; extra fields ignored",
                fields.len(),
                columns.len()
            );
        }
        rows.push(fields);
    }

    tracing::debug!(table = %name, rows = rows.len(), columns = columns.len(), "read table");
    Ok(TsvTable {
        name,
        columns,
        rows,
    })
}

fn is_gct_version_line(line: &str) -> bool {
    line.trim_end().strip_prefix("#1.").is_some_and(|rest| {
        !rest.is_empty() && rest.chars().all(|c| c.is_ascii_digit())
    })
}
