pub mod catalog;
pub mod extract;
pub mod sparql;
