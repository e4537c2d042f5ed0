use crate::cities::models::{City, CityFilter, CountryEntry};
use crate::storage::errors::CatalogError;
use crate::storage::interface::ICityCatalog;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct InMemoryCityCatalog {
    cities: Arc<Vec<City>>,
}

impl InMemoryCityCatalog {
    pub fn new(cities: Vec<City>) -> Self {
        Self {
            cities: Arc::new(cities),
        }
    }

    /// Loads the catalog from an NDJSON file, one `City` object per line.
    pub fn load(path: &Path) -> Self {
        let cities_file = File::open(path).expect("Failed to open the cities file.");
        let file_reader = BufReader::new(cities_file);
        let mut cities = Vec::new();
        for line in file_reader.lines() {
            let line = line.expect("Failed to read a line in the cities file.");
            let city: City = serde_json::from_str(&line)
                .expect("Failed to deserialize a line in the cities file into a `City`.");
            cities.push(city);
        }
        tracing::info!("Loaded {} cities into the catalog.", cities.len());
        Self::new(cities)
    }
}

impl ICityCatalog for InMemoryCityCatalog {
    async fn find_random(&self, filter: &CityFilter) -> Result<Option<City>, CatalogError> {
        let candidates = self
            .cities
            .iter()
            .filter(|city| filter.admits(city))
            .collect::<Vec<_>>();
        if candidates.is_empty() {
            return Ok(None);
        }
        let index = rand::thread_rng().gen_range(0..candidates.len());
        Ok(Some(candidates[index].clone()))
    }

    async fn find_by_id(&self, city_id: u32) -> Result<Option<City>, CatalogError> {
        Ok(self.cities.iter().find(|city| city.id == city_id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<City>, CatalogError> {
        Ok(self
            .cities
            .iter()
            .find(|city| city.matches_name(name))
            .cloned())
    }

    async fn random_options(
        &self,
        count: usize,
        exclude: Option<u32>,
    ) -> Result<Vec<City>, CatalogError> {
        let mut rng = rand::thread_rng();
        let options = self
            .cities
            .iter()
            .filter(|city| exclude != Some(city.id))
            .cloned()
            .choose_multiple(&mut rng, count);
        Ok(options)
    }

    async fn countries(&self) -> Result<Vec<CountryEntry>, CatalogError> {
        let mut names_by_code = BTreeMap::new();
        for city in self.cities.iter() {
            names_by_code
                .entry(city.country_code.clone())
                .or_insert_with(|| city.country.clone());
        }
        let mut countries = names_by_code
            .into_iter()
            .map(|(code, name)| CountryEntry { code, name })
            .collect::<Vec<_>>();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }
}
