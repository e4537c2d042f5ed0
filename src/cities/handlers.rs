use crate::app_context::AppContext;
use crate::cities::consts::DEFAULT_OPTIONS_COUNT;
use crate::cities::responses::{
    CityLookupError, CityOptionsError, CityOptionsResponse, CityResponse, CountriesError,
    CountriesResponse,
};
use crate::http::query_params::{CityOptionsQueryParams, NameQueryParam};
use crate::storage::interface::{ICityCatalog, IGameStorage};
use axum::extract::{Path, Query, State};
use axum::response::Json;

pub async fn by_id<CS, GS>(
    Path(city_id): Path<u32>,
    State(app_context): State<AppContext<CS, GS>>,
) -> Json<CityResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let response = match app_context.cities.find_by_id(city_id).await {
        Ok(Some(city)) => CityResponse {
            error: false,
            error_code: None,
            city: Some(city),
        },
        Ok(None) => CityResponse {
            error: true,
            error_code: Some(CityLookupError::CityNotFound),
            city: None,
        },
        Err(err) => {
            tracing::error!("City lookup by id failed: {err}.");
            CityResponse {
                error: true,
                error_code: Some(CityLookupError::CatalogUnavailable),
                city: None,
            }
        }
    };
    Json(response)
}

pub async fn search<CS, GS>(
    Query(query_params): Query<NameQueryParam>,
    State(app_context): State<AppContext<CS, GS>>,
) -> Json<CityResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let response = match app_context.cities.find_by_name(&query_params.name).await {
        Ok(Some(city)) => CityResponse {
            error: false,
            error_code: None,
            city: Some(city),
        },
        Ok(None) => CityResponse {
            error: true,
            error_code: Some(CityLookupError::CityNotFound),
            city: None,
        },
        Err(err) => {
            tracing::error!("City lookup by name failed: {err}.");
            CityResponse {
                error: true,
                error_code: Some(CityLookupError::CatalogUnavailable),
                city: None,
            }
        }
    };
    Json(response)
}

pub async fn options<CS, GS>(
    Query(query_params): Query<CityOptionsQueryParams>,
    State(app_context): State<AppContext<CS, GS>>,
) -> Json<CityOptionsResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let count = query_params.count.unwrap_or(DEFAULT_OPTIONS_COUNT);
    let response = match app_context
        .cities
        .random_options(count, query_params.exclude)
        .await
    {
        Ok(options) => CityOptionsResponse {
            error: false,
            error_code: None,
            options,
        },
        Err(err) => {
            tracing::error!("City options lookup failed: {err}.");
            CityOptionsResponse {
                error: true,
                error_code: Some(CityOptionsError::CatalogUnavailable),
                options: vec![],
            }
        }
    };
    Json(response)
}

pub async fn countries<CS, GS>(
    State(app_context): State<AppContext<CS, GS>>,
) -> Json<CountriesResponse>
where
    CS: ICityCatalog,
    GS: IGameStorage,
{
    let response = match app_context.cities.countries().await {
        Ok(countries) => CountriesResponse {
            error: false,
            error_code: None,
            countries,
        },
        Err(err) => {
            tracing::error!("Countries lookup failed: {err}.");
            CountriesResponse {
                error: true,
                error_code: Some(CountriesError::CatalogUnavailable),
                countries: vec![],
            }
        }
    };
    Json(response)
}
