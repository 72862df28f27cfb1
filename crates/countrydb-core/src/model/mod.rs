// crates/countrydb-core/src/model/mod.rs
mod country;
mod subdivision;

pub use country::{BaseName, Codes, Country, Geo, Name};
pub use subdivision::SubDivision;
