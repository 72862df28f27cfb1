// crates/countrydb-core/src/lib.rs

pub mod error;
pub mod filter;
pub mod loader; // The public loader
pub mod math;
pub mod model;
pub mod query; // The query engine
pub mod text;

// Re-exports
pub use crate::error::{CountryError, Result};
pub use crate::filter::CountryFilter;
pub use crate::loader::DataSet;
pub use crate::model::{BaseName, Codes, Country, Geo, Name, SubDivision};
pub use crate::query::CountryDb;
