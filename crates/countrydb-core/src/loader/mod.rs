// crates/countrydb-core/src/loader/mod.rs

//! # Dataset loader
//!
//! The physical layer: reads country and subdivision records from disk into
//! the two input mappings the query engine consumes. The engine itself does
//! no I/O; everything here runs before
//! [`CountryDb::from_dataset`](crate::CountryDb::from_dataset).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::{Country, SubDivision};

#[cfg(feature = "json")]
mod json;

/// Filename of the binary cache written next to the JSON sources.
pub const CACHE_FILENAME: &str = "countrydb.bin";

/// Upper bound for cache deserialization, against corrupt cache files.
const CACHE_SIZE_LIMIT: u64 = 64 * 1024 * 1024;

/// The two input mappings consumed by the query engine.
///
/// Countries are keyed by upper-case alpha-2 code, subdivision lists by
/// lower-case alpha-2 code of the owning country. Subdivisions are not yet
/// attached to their countries; that happens during the index build.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DataSet {
    pub countries: HashMap<String, Country>,
    pub subdivisions: HashMap<String, Vec<SubDivision>>,
}

impl DataSet {
    /// Serializes to the binary cache format.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        use bincode::Options;

        Ok(bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .serialize(self)?)
    }

    /// Reconstructs a dataset from the binary cache format.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        use bincode::Options;

        Ok(bincode::DefaultOptions::new()
            .with_limit(CACHE_SIZE_LIMIT)
            .allow_trailing_bytes()
            .deserialize(data)?)
    }
}
