pub mod reference;
pub mod schema;
pub mod table;
