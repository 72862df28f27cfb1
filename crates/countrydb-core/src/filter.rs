// crates/countrydb-core/src/filter.rs

//! Explicit filter criteria for [`CountryDb::find_countries`].
//!
//! Each field is either absent ("no constraint") or present ("must match").
//! This keeps a legitimately empty attribute value distinguishable from
//! "don't care", which a partially-populated template record cannot do.
//!
//! [`CountryDb::find_countries`]: crate::CountryDb::find_countries

/// Builder-style criteria object for the country filter scan.
///
/// Name, continent, region, subregion and international prefix match
/// case-insensitively. Alpha codes match exactly against the canonical
/// upper-case form. Border codes are a subset requirement: every listed
/// alpha-3 code must resolve to a neighbour of the candidate.
///
/// ```rust
/// use countrydb_core::CountryFilter;
///
/// let filter = CountryFilter::new()
///     .region("Europe")
///     .border("DEU")
///     .border("CHE");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CountryFilter {
    pub(crate) name: Option<String>,
    pub(crate) alpha2: Option<String>,
    pub(crate) alpha3: Option<String>,
    pub(crate) continent: Option<String>,
    pub(crate) region: Option<String>,
    pub(crate) subregion: Option<String>,
    pub(crate) international_prefix: Option<String>,
    pub(crate) borders: Vec<String>,
}

impl CountryFilter {
    /// An empty filter; matches every country.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a common name (case-insensitive).
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Require an exact 2-letter code.
    pub fn alpha2(mut self, code: impl Into<String>) -> Self {
        self.alpha2 = Some(code.into());
        self
    }

    /// Require an exact 3-letter code.
    pub fn alpha3(mut self, code: impl Into<String>) -> Self {
        self.alpha3 = Some(code.into());
        self
    }

    /// Require a continent (case-insensitive).
    pub fn continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = Some(continent.into());
        self
    }

    /// Require a region (case-insensitive).
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Require a sub-region (case-insensitive).
    pub fn subregion(mut self, subregion: impl Into<String>) -> Self {
        self.subregion = Some(subregion.into());
        self
    }

    /// Require an international dialing prefix (case-insensitive; prefixes
    /// can be alphanumeric).
    pub fn international_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.international_prefix = Some(prefix.into());
        self
    }

    /// Add one required bordering country by alpha-3 code. Every added code
    /// must be matched for a candidate to pass.
    pub fn border(mut self, code: impl Into<String>) -> Self {
        self.borders.push(code.into());
        self
    }

    /// Add several required bordering countries at once.
    pub fn borders<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.borders.extend(codes.into_iter().map(Into::into));
        self
    }
}
