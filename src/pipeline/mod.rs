pub mod stage1_nsnp;
pub mod stage2_reactome;
pub mod stage3_expression;
pub mod stage4_similarity;
pub mod stage5_assemble;
