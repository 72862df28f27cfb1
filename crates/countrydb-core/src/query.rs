// crates/countrydb-core/src/query.rs

//! # The query engine
//!
//! Owns the immutable record store plus the lookup indices built exactly
//! once by [`CountryDb::from_dataset`]. Every operation after construction
//! is a read-only index lookup or a linear scan with a predicate, so a
//! handle can be shared across threads without locking.

use std::collections::HashMap;
#[cfg(feature = "json")]
use std::path::Path;

use once_cell::sync::OnceCell;

use crate::error::{CountryError, Result};
use crate::filter::CountryFilter;
use crate::loader::DataSet;
use crate::model::Country;
use crate::text::{equals_folded, fold_key};

static SHARED_DB: OnceCell<CountryDb> = OnceCell::new();

/// The in-memory country database.
///
/// Countries are keyed by their upper-case alpha-2 code; three secondary
/// indices map folded names, alpha-3 codes and folded native names back to
/// that key.
#[derive(Debug)]
pub struct CountryDb {
    countries: HashMap<String, Country>,
    name_to_alpha2: HashMap<String, String>,
    alpha3_to_alpha2: HashMap<String, String>,
    native_name_to_alpha2: HashMap<String, String>,
}

impl CountryDb {
    /// Builds the database and all indices from a loaded dataset.
    ///
    /// Attaches each country's subdivisions and constructs the name, alpha
    /// and native-name indices. Fails with [`CountryError::EmptyDataSet`]
    /// when the dataset holds no countries.
    pub fn from_dataset(data: DataSet) -> Result<Self> {
        if data.countries.is_empty() {
            return Err(CountryError::EmptyDataSet);
        }

        let DataSet {
            mut countries,
            mut subdivisions,
        } = data;

        for country in countries.values_mut() {
            let own = subdivisions
                .remove(&fold_key(&country.codes.alpha2))
                .unwrap_or_default();
            country.attach_subdivisions(own);
        }

        Ok(CountryDb {
            name_to_alpha2: build_name_index(&countries),
            alpha3_to_alpha2: build_alpha_index(&countries),
            native_name_to_alpha2: build_native_name_index(&countries),
            countries,
        })
    }

    /// Builds and caches the process-wide instance.
    ///
    /// The first caller runs `init`; concurrent callers block until the
    /// build completes and then observe the same finished database. No
    /// caller can see a partially built index, and `init` runs at most
    /// once for the lifetime of the process.
    pub fn shared_with<F>(init: F) -> Result<&'static CountryDb>
    where
        F: FnOnce() -> Result<CountryDb>,
    {
        SHARED_DB.get_or_try_init(init)
    }

    /// [`CountryDb::shared_with`] over [`DataSet::load_from_dir`].
    #[cfg(feature = "json")]
    pub fn shared_from_dir(dir: impl AsRef<Path>) -> Result<&'static CountryDb> {
        let dir = dir.as_ref();
        Self::shared_with(|| DataSet::load_from_dir(dir).and_then(CountryDb::from_dataset))
    }

    /// Finds a country by common or official name, case-insensitive.
    pub fn find_country_by_name(&self, name: &str) -> Result<&Country> {
        self.name_to_alpha2
            .get(&fold_key(name))
            .and_then(|alpha2| self.countries.get(alpha2))
            .ok_or_else(|| CountryError::NotFound {
                what: "name",
                query: name.to_string(),
            })
    }

    /// Finds a country by any of its native common or official names,
    /// case-insensitive.
    pub fn find_country_by_native_name(&self, name: &str) -> Result<&Country> {
        self.native_name_to_alpha2
            .get(&fold_key(name))
            .and_then(|alpha2| self.countries.get(alpha2))
            .ok_or_else(|| CountryError::NotFound {
                what: "native name",
                query: name.to_string(),
            })
    }

    /// Finds a country by 2- or 3-letter code, case-insensitive.
    ///
    /// Any other input length is an [`CountryError::InvalidCodeFormat`],
    /// distinct from a lookup miss.
    pub fn find_country_by_alpha(&self, code: &str) -> Result<&Country> {
        let code_u = code.to_uppercase();

        match code.chars().count() {
            2 => self.countries.get(&code_u),
            3 => self
                .alpha3_to_alpha2
                .get(&code_u)
                .and_then(|alpha2| self.countries.get(alpha2)),
            _ => return Err(CountryError::InvalidCodeFormat(code.to_string())),
        }
        .ok_or_else(|| CountryError::NotFound {
            what: "code",
            query: code.to_string(),
        })
    }

    /// The full record store, keyed by upper-case alpha-2 code.
    ///
    /// Iteration order is unspecified; callers needing a deterministic
    /// order must sort.
    pub fn all_countries(&self) -> &HashMap<String, Country> {
        &self.countries
    }

    /// Linear scan returning every country that satisfies all populated
    /// filter fields (conjunctive).
    ///
    /// Never errors: an empty result is the only "not found" signal, since
    /// a partial filter may legitimately match nothing. Result order is
    /// unspecified.
    pub fn find_countries(&self, filter: &CountryFilter) -> Vec<&Country> {
        // Required borders resolve once, against the current snapshot.
        // Codes that resolve to nothing drop out of the requirement,
        // mirroring the tolerant resolution of bordering_countries().
        let required_borders: Vec<&Country> = filter
            .borders
            .iter()
            .filter_map(|code| self.resolve_alpha3(code))
            .collect();

        self.countries
            .values()
            .filter(|country| self.filter_matches(filter, &required_borders, country))
            .collect()
    }

    fn filter_matches(
        &self,
        filter: &CountryFilter,
        required_borders: &[&Country],
        country: &Country,
    ) -> bool {
        // Name
        if let Some(name) = filter.name.as_deref() {
            if !equals_folded(name, &country.name.common) {
                return false;
            }
        }

        // Alpha codes: canonical form is pre-normalized, so exact equality.
        if let Some(alpha2) = filter.alpha2.as_deref() {
            if alpha2 != country.codes.alpha2 {
                return false;
            }
        }
        if let Some(alpha3) = filter.alpha3.as_deref() {
            if alpha3 != country.codes.alpha3 {
                return false;
            }
        }

        // Geo
        if let Some(continent) = filter.continent.as_deref() {
            if !equals_folded(continent, &country.geo.continent) {
                return false;
            }
        }
        if let Some(region) = filter.region.as_deref() {
            if !equals_folded(region, &country.geo.region) {
                return false;
            }
        }
        if let Some(subregion) = filter.subregion.as_deref() {
            if !equals_folded(subregion, &country.geo.subregion) {
                return false;
            }
        }

        // Misc
        if let Some(prefix) = filter.international_prefix.as_deref() {
            if !equals_folded(prefix, &country.international_prefix) {
                return false;
            }
        }

        // Bordering countries: subset test, required ⊆ candidate's actual
        // neighbours. `all` short-circuits on the first missing code.
        if !required_borders.is_empty() {
            let candidate_borders = country.bordering_countries(self);
            let all_present = required_borders.iter().all(|required| {
                candidate_borders
                    .iter()
                    .any(|b| b.codes.alpha2 == required.codes.alpha2)
            });
            if !all_present {
                return false;
            }
        }

        true
    }

    /// Resolves a raw alpha-3 border code to a record, if present.
    pub(crate) fn resolve_alpha3(&self, code: &str) -> Option<&Country> {
        self.alpha3_to_alpha2
            .get(code)
            .and_then(|alpha2| self.countries.get(alpha2))
    }
}

fn build_name_index(countries: &HashMap<String, Country>) -> HashMap<String, String> {
    let mut index = HashMap::new();

    for (alpha2, country) in countries {
        // Collisions between case-folded names are not arbitrated:
        // last write wins.
        index.insert(fold_key(&country.name.common), alpha2.clone());
        index.insert(fold_key(&country.name.official), alpha2.clone());
    }

    index
}

fn build_alpha_index(countries: &HashMap<String, Country>) -> HashMap<String, String> {
    let mut index = HashMap::new();

    for (alpha2, country) in countries {
        // Alpha-3 codes are canonically upper-case already.
        index.insert(country.codes.alpha3.clone(), alpha2.clone());
    }

    index
}

fn build_native_name_index(countries: &HashMap<String, Country>) -> HashMap<String, String> {
    let mut index = HashMap::new();

    for (alpha2, country) in countries {
        for native in country.name.native.values() {
            index.insert(fold_key(&native.common), alpha2.clone());
            index.insert(fold_key(&native.official), alpha2.clone());
        }
    }

    index
}
