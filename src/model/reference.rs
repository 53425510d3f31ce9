use std::collections::{HashMap, HashSet};

use crate::model::schema::ExpressionSchema;
use crate::model::table::Value;

/// Known-positive gene symbols.
#[derive(Debug, Clone, Default)]
pub struct CausalGenes {
    genes: HashSet<String>,
}

impl CausalGenes {
    pub fn contains(&self, gene: &str) -> bool {
        self.genes.contains(gene)
    }

    pub fn len(&self) -> usize {
        self.genes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.genes.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for CausalGenes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        CausalGenes {
            genes: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Pairwise gene relation (Gene1, Gene2), looked up from the Gene1 side.
#[derive(Debug, Clone, Default)]
pub struct RelationTable {
    n_pairs: usize,
    partners: HashMap<String, Vec<String>>,
}

impl RelationTable {
    pub fn new<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut partners: HashMap<String, Vec<String>> = HashMap::new();
        let mut n_pairs = 0usize;
        for (gene_a, gene_b) in pairs {
            partners.entry(gene_a).or_default().push(gene_b);
            n_pairs += 1;
        }
        RelationTable { n_pairs, partners }
    }

    /// Every Gene2 listed against `gene`, duplicates included.
    pub fn partners(&self, gene: &str) -> Option<&[String]> {
        self.partners.get(gene).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.n_pairs
    }
}

/// Splits an `associated_genes` field. Tokens are kept exactly as written.
pub fn split_associated(field: &str) -> Vec<String> {
    field.split(',').map(str::to_string).collect()
}

/// Gene → associated genes. `None` marks a present gene whose field is missing.
#[derive(Debug, Clone, Default)]
pub struct SimilarityTable {
    entries: HashMap<String, Option<Vec<String>>>,
}

impl SimilarityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false and leaves the table untouched when `gene` is already present.
    pub fn insert(&mut self, gene: String, associated: Option<Vec<String>>) -> bool {
        if self.entries.contains_key(&gene) {
            return false;
        }
        self.entries.insert(gene, associated);
        true
    }

    pub fn get(&self, gene: &str) -> Option<Option<&[String]>> {
        self.entries.get(gene).map(|v| v.as_deref())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionRow {
    pub description: String,
    pub values: Vec<Value>,
}

/// Tissue expression rows keyed by the `Description` gene symbol.
#[derive(Debug, Clone, Default)]
pub struct ExpressionTable {
    rows: Vec<ExpressionRow>,
    by_description: HashMap<String, Vec<usize>>,
}

impl ExpressionTable {
    pub fn new(rows: Vec<ExpressionRow>) -> Self {
        let mut by_description: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, row) in rows.iter().enumerate() {
            by_description
                .entry(row.description.clone())
                .or_default()
                .push(idx);
        }
        ExpressionTable {
            rows,
            by_description,
        }
    }

    pub fn matches(&self, gene: &str) -> Vec<&ExpressionRow> {
        self.by_description
            .get(gene)
            .map(|ids| ids.iter().map(|&i| &self.rows[i]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Reference databases for one run. Loaded once and only borrowed afterwards.
#[derive(Debug, Clone)]
pub struct ReferenceDbs {
    pub reactome: RelationTable,
    pub gtex: ExpressionTable,
    pub schema: ExpressionSchema,
    pub gtex_similarity: SimilarityTable,
    pub blastp_similarity: SimilarityTable,
    pub atlas_similarity: SimilarityTable,
    pub gene_interactions: SimilarityTable,
}

/// One row of a per-variant score table grouped by gene.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRow {
    pub gene_symbol: Option<String>,
    pub score: Value,
}
