// crates/countrydb-core/src/model/country.rs
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CountryError, Result};
use crate::model::SubDivision;
use crate::query::CountryDb;
use crate::text::fold_key;

/// A common/official name pair.
///
/// Used for native names and translations alike.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BaseName {
    pub common: String,
    pub official: String,
}

/// Country naming: the canonical pair plus native names keyed by a
/// 3-letter language code (e.g. `"swe"` → Sverige / Konungariket Sverige).
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Name {
    pub common: String,
    pub official: String,
    #[serde(default)]
    pub native: HashMap<String, BaseName>,
}

/// ISO-style identity codes.
///
/// `alpha2` is the primary key for every cross-reference in the database:
/// border resolution, subdivision ownership and the record store itself.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Codes {
    pub alpha2: String,
    pub alpha3: String,
}

/// Geographic classification and coordinates.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Geo {
    #[serde(default)]
    pub continent: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub subregion: String,
    #[serde(default)]
    pub capital: String,
    #[serde(default)]
    pub latitude: f64,
    #[serde(default)]
    pub longitude: f64,
}

/// A country record.
///
/// Immutable once the database is built; the subdivision list and its two
/// lookup indices are attached exactly once during
/// [`CountryDb::from_dataset`](crate::CountryDb::from_dataset) and are not
/// part of the serialized form.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Country {
    pub name: Name,
    pub codes: Codes,
    #[serde(default)]
    pub geo: Geo,
    /// International dialing prefix, e.g. `"46"`. Alphanumeric to
    /// accommodate formats with letters.
    #[serde(default)]
    pub international_prefix: String,
    /// Raw alpha-3 codes of neighbouring countries. Kept unresolved so the
    /// list may reference records loaded later or absent entirely; see
    /// [`Country::bordering_countries`].
    #[serde(default)]
    pub borders: Vec<String>,
    /// The country's name translated into other languages, keyed by a
    /// 3-letter language code.
    #[serde(default)]
    pub translations: HashMap<String, BaseName>,

    #[serde(skip)]
    pub(crate) subdivisions: Vec<SubDivision>,
    #[serde(skip)]
    pub(crate) name_to_subdivision: HashMap<String, usize>,
    #[serde(skip)]
    pub(crate) code_to_subdivision: HashMap<String, usize>,
}

impl Country {
    /// The 2-letter code, the canonical key for this record.
    pub fn alpha2(&self) -> &str {
        &self.codes.alpha2
    }

    /// The 3-letter code.
    pub fn alpha3(&self) -> &str {
        &self.codes.alpha3
    }

    /// Resolves the raw border codes against `db`.
    ///
    /// Resolution is a pure function of the current index snapshot — a weak
    /// reference, never a stored relationship. Codes that do not resolve
    /// (decommissioned or never loaded) are skipped without error; the rest
    /// come back in stored order.
    pub fn bordering_countries<'a>(&self, db: &'a CountryDb) -> Vec<&'a Country> {
        self.borders
            .iter()
            .filter_map(|code| db.resolve_alpha3(code))
            .collect()
    }

    /// All subdivisions attached to this country.
    pub fn subdivisions(&self) -> &[SubDivision] {
        &self.subdivisions
    }

    /// Looks up a subdivision by canonical name or any alias,
    /// case-insensitive. Scoped to this country only.
    pub fn find_subdivision_by_name(&self, name: &str) -> Result<&SubDivision> {
        self.name_to_subdivision
            .get(&fold_key(name))
            .map(|&i| &self.subdivisions[i])
            .ok_or_else(|| CountryError::SubdivisionNotFound {
                what: "name",
                query: name.to_string(),
            })
    }

    /// Looks up a subdivision by its code, case-insensitive.
    pub fn find_subdivision_by_code(&self, code: &str) -> Result<&SubDivision> {
        self.code_to_subdivision
            .get(&fold_key(code))
            .map(|&i| &self.subdivisions[i])
            .ok_or_else(|| CountryError::SubdivisionNotFound {
                what: "code",
                query: code.to_string(),
            })
    }

    /// Runs once during the index build: stamps the owner code onto each
    /// subdivision and fills the per-country name and code indices.
    pub(crate) fn attach_subdivisions(&mut self, mut subdivisions: Vec<SubDivision>) {
        for s in &mut subdivisions {
            s.country_alpha2 = self.codes.alpha2.clone();
        }

        let mut by_name = HashMap::new();
        let mut by_code = HashMap::new();

        for (i, s) in subdivisions.iter().enumerate() {
            for alias in &s.names {
                by_name.insert(fold_key(alias), i);
            }
            by_name.insert(fold_key(&s.name), i);
            by_code.insert(fold_key(&s.code), i);
        }

        self.subdivisions = subdivisions;
        self.name_to_subdivision = by_name;
        self.code_to_subdivision = by_code;
    }
}
