pub mod date;
pub mod query;
