use crate::geo::models::LatLng;

pub mod consts;
pub mod models;

/// Great-circle distance between two points in kilometers, by the haversine
/// formula.
pub fn distance_km(from: LatLng, to: LatLng) -> f64 {
    let phi_1 = from.lat * std::f64::consts::PI / 180.0;
    let phi_2 = to.lat * std::f64::consts::PI / 180.0;
    let delta_phi = (to.lat - from.lat) * std::f64::consts::PI / 180.0;
    let delta_lambda = (to.lng - from.lng) * std::f64::consts::PI / 180.0;
    let a = (delta_phi / 2.0).sin().powi(2)
        + phi_1.cos() * phi_2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * (a.sqrt().atan2((1.0 - a).sqrt()));
    consts::EARTH_RADIUS_KM * c
}

/// Converts a guess distance into a score in `[0, 1000]`.
///
/// Anything closer than a kilometer counts as a perfect guess, so the
/// logarithm never sees a near-zero distance. Past that the score falls off
/// as `1000 / log10(d + 10)`, which stays positive even at antipodal
/// distances; the zero clamp is kept anyway so the returned value is bounded
/// no matter the input.
pub fn score_for_distance(distance_km: f64) -> u64 {
    if distance_km < consts::PERFECT_GUESS_RADIUS_KM {
        return consts::MAX_SCORE;
    }
    let raw_score = (consts::MAX_SCORE as f64 / (distance_km + 10.0).log10()).round();
    raw_score.max(0.0) as u64
}
