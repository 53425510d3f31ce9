use crate::model::table::Value;

/// Median-TPM tissue columns of the GTEx v7 gene median table, in file order.
pub const GTEX_V7_TISSUES: [&str; 53] = [
    "Adipose - Subcutaneous",
    "Adipose - Visceral (Omentum)",
    "Adrenal Gland",
    "Artery - Aorta",
    "Artery - Coronary",
    "Artery - Tibial",
    "Bladder",
    "Brain - Amygdala",
    "Brain - Anterior cingulate cortex (BA24)",
    "Brain - Caudate (basal ganglia)",
    "Brain - Cerebellar Hemisphere",
    "Brain - Cerebellum",
    "Brain - Cortex",
    "Brain - Frontal Cortex (BA9)",
    "Brain - Hippocampus",
    "Brain - Hypothalamus",
    "Brain - Nucleus accumbens (basal ganglia)",
    "Brain - Putamen (basal ganglia)",
    "Brain - Spinal cord (cervical c-1)",
    "Brain - Substantia nigra",
    "Breast - Mammary Tissue",
    "Cells - EBV-transformed lymphocytes",
    "Cells - Transformed fibroblasts",
    "Cervix - Ectocervix",
    "Cervix - Endocervix",
    "Colon - Sigmoid",
    "Colon - Transverse",
    "Esophagus - Gastroesophageal Junction",
    "Esophagus - Mucosa",
    "Esophagus - Muscularis",
    "Fallopian Tube",
    "Heart - Atrial Appendage",
    "Heart - Left Ventricle",
    "Kidney - Cortex",
    "Liver",
    "Lung",
    "Minor Salivary Gland",
    "Muscle - Skeletal",
    "Nerve - Tibial",
    "Ovary",
    "Pancreas",
    "Pituitary",
    "Prostate",
    "Skin - Not Sun Exposed (Suprapubic)",
    "Skin - Sun Exposed (Lower leg)",
    "Small Intestine - Terminal Ileum",
    "Spleen",
    "Stomach",
    "Testis",
    "Thyroid",
    "Uterus",
    "Vagina",
    "Whole Blood",
];

#[derive(Debug, Clone, PartialEq)]
pub struct TissueColumn {
    pub name: String,
    pub default: Value,
}

/// Tissue columns to extract and rank, with the "no data" value used when a
/// gene has no usable expression row.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionSchema {
    columns: Vec<TissueColumn>,
}

impl ExpressionSchema {
    pub fn gtex_v7() -> Self {
        Self::from_names(GTEX_V7_TISSUES)
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let columns = names
            .into_iter()
            .map(|name| TissueColumn {
                name: name.into(),
                default: Value::Missing,
            })
            .collect();
        ExpressionSchema { columns }
    }

    pub fn with_default(mut self, default: Value) -> Self {
        for column in &mut self.columns {
            column.default = default.clone();
        }
        self
    }

    pub fn columns(&self) -> &[TissueColumn] {
        &self.columns
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn default_row(&self) -> Vec<Value> {
        self.columns.iter().map(|c| c.default.clone()).collect()
    }
}
