pub const EARTH_RADIUS_KM: f64 = 6371.0;
pub const MAX_SCORE: u64 = 1000;
pub const PERFECT_GUESS_RADIUS_KM: f64 = 1.0;
