// crates/countrydb-core/src/model/subdivision.rs
use serde::{Deserialize, Serialize};

/// An administrative unit below the country level (state, province, region).
///
/// Codes and names are only unique within the owning country, which is why
/// the subdivision lookup indices live on [`Country`](crate::model::Country)
/// rather than on the database itself.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SubDivision {
    /// Canonical name.
    pub name: String,
    /// Alternate names this subdivision is also known by.
    #[serde(default)]
    pub names: Vec<String>,
    /// Code unique within the owning country, e.g. `"AB"`.
    pub code: String,
    /// 2-letter code of the owning country, stamped when the subdivision is
    /// attached during the index build.
    #[serde(default)]
    pub country_alpha2: String,
}
