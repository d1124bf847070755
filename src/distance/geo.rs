//! Great-circle distance.

/// Mean Earth radius used by [`haversine_km`], in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two `(lat, lon)` points given in degrees.
///
/// Returns kilometers. The haversine term is clamped to `[0, 1]` before the
/// inverse sine so coincident and antipodal points stay finite.
///
/// # Examples
///
/// ```
/// use u_aco::distance::haversine_km;
///
/// assert_eq!(haversine_km(37.0, 127.0, 37.0, 127.0), 0.0);
/// let d = haversine_km(0.0, 1.0, 1.0, 0.0);
/// assert!((d - 157.25).abs() < 0.1);
/// ```
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (phi1, phi2) = (lat1.to_radians(), lat2.to_radians());
    let dphi = (lat2 - lat1).to_radians();
    let dlambda = (lon2 - lon1).to_radians();
    let s1 = (dphi / 2.0).sin();
    let s2 = (dlambda / 2.0).sin();
    let h = (s1 * s1 + phi1.cos() * phi2.cos() * s2 * s2).clamp(0.0, 1.0);
    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
