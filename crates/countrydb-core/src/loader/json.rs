// crates/countrydb-core/src/loader/json.rs
#![cfg(feature = "json")]

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{Country, SubDivision};
use crate::text::fold_key;

use super::{DataSet, CACHE_FILENAME};

impl DataSet {
    /// Loads `countries.json[.gz]` and `subdivisions.json[.gz]` from `dir`.
    ///
    /// Missing or unparsable files are hard errors: a database built from a
    /// partial dataset would look valid while silently answering nothing.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();

        let countries = read_countries(&dataset_path(dir, "countries"))?;
        let subdivisions = read_subdivisions(&dataset_path(dir, "subdivisions"))?;

        Ok(DataSet {
            countries,
            subdivisions,
        })
    }

    /// Like [`DataSet::load_from_dir`], but reads from and writes to a
    /// binary cache next to the JSON sources. An unreadable cache falls
    /// back to the JSON parse.
    pub fn load_from_dir_cached(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let cache = dir.join(CACHE_FILENAME);

        if let Ok(bytes) = std::fs::read(&cache) {
            if let Ok(data) = Self::from_bytes(&bytes) {
                return Ok(data);
            }
        }

        let data = Self::load_from_dir(dir)?;

        // Cache write failure is not fatal; the next load parses JSON again.
        if let Ok(bytes) = data.to_bytes() {
            let _ = std::fs::write(&cache, bytes);
        }

        Ok(data)
    }
}

fn read_countries(path: &Path) -> Result<HashMap<String, Country>> {
    let reader = open_stream(path)?;
    let list: Vec<Country> = serde_json::from_reader(reader)?;

    Ok(list
        .into_iter()
        .map(|c| (c.codes.alpha2.to_uppercase(), c))
        .collect())
}

fn read_subdivisions(path: &Path) -> Result<HashMap<String, Vec<SubDivision>>> {
    let reader = open_stream(path)?;
    let map: HashMap<String, Vec<SubDivision>> = serde_json::from_reader(reader)?;

    // Keys are folded so attachment never misses on case.
    Ok(map.into_iter().map(|(k, v)| (fold_key(&k), v)).collect())
}

/// Opens a dataset file, buffered, unwrapping gzip when the path ends in
/// `.gz`. Returns a plain reader so callers don't care about compression.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        std::io::Error::new(
            e.kind(),
            format!("failed to open dataset at {}: {e}", path.display()),
        )
    })?;

    let reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    if path.extension().is_some_and(|ext| ext == "gz") {
        return Ok(Box::new(flate2::read::GzDecoder::new(reader)));
    }

    Ok(Box::new(reader))
}

/// Picks `<stem>.json.gz` when present and compression is enabled,
/// otherwise `<stem>.json`.
fn dataset_path(dir: &Path, stem: &str) -> PathBuf {
    #[cfg(feature = "compact")]
    {
        let gz = dir.join(format!("{stem}.json.gz"));
        if gz.exists() {
            return gz;
        }
    }

    dir.join(format!("{stem}.json"))
}
