// crates/countrydb-core/src/math.rs

//! Geodesic distance formulas over latitude/longitude pairs in degrees.
//!
//! Pure functions with no ties to the record store or indices.

/// Earth radius in kilometers used by [`haversine`].
const EARTH_RADIUS_KM: f64 = 6372.8;

/// Degrees to radians.
pub fn deg2rad(deg: f64) -> f64 {
    deg * std::f64::consts::PI / 180.0
}

/// Great-circle distance in kilometers using the haversine formula.
pub fn haversine(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = deg2rad(lat2 - lat1);
    let d_lon = deg2rad(lon2 - lon1);

    let a = (d_lat / 2.0).sin().powi(2)
        + deg2rad(lat1).cos() * deg2rad(lat2).cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Distance in kilometers using an equirectangular projection.
///
/// Cheaper than [`haversine`]; adequate when the two points are close.
pub fn pythagoras_equirectangular(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1 = deg2rad(lat1);
    let lon1 = deg2rad(lon1);
    let lat2 = deg2rad(lat2);
    let lon2 = deg2rad(lon2);

    let r = 6371.0; // km
    let x = (lon2 - lon1) * ((lat1 + lat2) / 2.0).cos();
    let y = lat2 - lat1;

    (x * x + y * y).sqrt() * r
}
