use crate::cities::models::{City, CountryEntry};
use serde::Serialize;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<CityLookupError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<City>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CityLookupError {
    CityNotFound,
    CatalogUnavailable,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CityOptionsResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<CityOptionsError>,
    pub options: Vec<City>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CityOptionsError {
    CatalogUnavailable,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountriesResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<CountriesError>,
    pub countries: Vec<CountryEntry>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CountriesError {
    CatalogUnavailable,
}
