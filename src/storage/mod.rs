pub mod cities;
pub mod errors;
pub mod games;
pub mod interface;
pub mod scores;
