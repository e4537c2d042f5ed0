use crate::geo::models::LatLng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    pub id: u32,
    pub name: String,
    /// Romanized spelling, if it differs from the display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascii_name: Option<String>,
    pub country: String,
    pub country_code: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
}

impl City {
    pub fn position(&self) -> LatLng {
        LatLng {
            lat: self.latitude,
            lng: self.longitude,
        }
    }

    pub fn matches_name(&self, name: &str) -> bool {
        let wanted = name.to_lowercase();
        self.name.to_lowercase() == wanted
            || self
                .ascii_name
                .as_ref()
                .is_some_and(|ascii_name| ascii_name.to_lowercase() == wanted)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityFilter {
    /// ISO2 country codes; empty means unrestricted.
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub min_population: Option<u64>,
    /// City ids already played this game.
    #[serde(default)]
    pub exclude: Vec<u32>,
}

impl CityFilter {
    pub fn admits(&self, city: &City) -> bool {
        if let Some(min_population) = self.min_population {
            if city.population.unwrap_or(0) < min_population {
                return false;
            }
        }
        if !self.countries.is_empty() && !self.countries.contains(&city.country_code) {
            return false;
        }
        !self.exclude.contains(&city.id)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryEntry {
    pub code: String,
    pub name: String,
}
