//! Store HTTP handlers.
//!
//! ```text
//! POST   /api/v1/stores
//! GET    /api/v1/stores
//! GET    /api/v1/stores/{id}
//! DELETE /api/v1/stores/{id}
//! GET    /api/v1/stores/nearby/{postalCode}?maxDistanceKm=25
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{CreateStoreRequest, NearbyStoresRequest};
use crate::domain::{Error, NearbyStore, RawAddress, Store};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_postal_code, parse_store_id, require_text,
};

/// Request payload for registering a store.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreRequestBody {
    #[schema(example = "Loja Paulista")]
    pub name: String,
    pub address: CreateStoreAddressBody,
}

/// Address fragments supplied by the caller.
///
/// `street`, `city` and `state` are only used when the postal code cannot be
/// resolved.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateStoreAddressBody {
    #[schema(example = "01310-100")]
    pub postal_code: String,
    #[schema(example = "1578")]
    pub number: Option<String>,
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
}

/// Persisted store address with coordinates.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreAddressBody {
    pub street: String,
    pub city: String,
    pub state: String,
    #[schema(example = "01310-100")]
    pub postal_code: String,
    pub number: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Store representation returned by every store endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StoreResponseBody {
    #[schema(format = "uuid")]
    pub id: String,
    pub name: String,
    pub address: StoreAddressBody,
}

/// A store ranked by distance from the search origin.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NearbyStoreResponseBody {
    pub store: StoreResponseBody,
    #[schema(example = 12.4)]
    pub distance_km: f64,
}

/// Query parameters for nearby search.
#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct NearbyQuery {
    /// Search radius in kilometres; must be positive. Defaults to the
    /// configured radius.
    pub max_distance_km: Option<f64>,
}

impl From<Store> for StoreResponseBody {
    fn from(store: Store) -> Self {
        let (id, name, address) = store.into_parts();
        let coordinate = address.coordinate();
        Self {
            id: id.to_string(),
            name: name.into(),
            address: StoreAddressBody {
                street: address.street().to_owned(),
                city: address.city().to_owned(),
                state: address.state().to_owned(),
                postal_code: address.postal_code().to_string(),
                number: address.number().to_owned(),
                latitude: coordinate.latitude,
                longitude: coordinate.longitude,
            },
        }
    }
}

impl From<NearbyStore> for NearbyStoreResponseBody {
    fn from(value: NearbyStore) -> Self {
        Self {
            store: value.store.into(),
            distance_km: value.distance_km,
        }
    }
}

fn parse_create_request(payload: CreateStoreRequestBody) -> Result<CreateStoreRequest, Error> {
    let CreateStoreRequestBody { name, address } = payload;
    let postal_code = parse_postal_code(&address.postal_code, FieldName::new("postalCode"))?;
    let number = require_text(address.number, FieldName::new("number"))?;
    Ok(CreateStoreRequest {
        name,
        postal_code,
        address: RawAddress {
            street: address.street,
            city: address.city,
            state: address.state,
            number,
        },
    })
}

/// JSON extractor settings mapping malformed bodies onto the error payload.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected malformed JSON body");
        Error::invalid_request(format!("invalid JSON body: {err}")).into()
    })
}

/// Query extractor settings mapping malformed query strings onto the error
/// payload.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        debug!(error = %err, "rejected malformed query string");
        Error::invalid_request(format!("invalid query string: {err}")).into()
    })
}

/// Register a store, enriching its address from the postal code.
#[utoipa::path(
    post,
    path = "/api/v1/stores",
    request_body = CreateStoreRequestBody,
    responses(
        (status = 201, description = "Store created", body = StoreResponseBody),
        (status = 400, description = "Invalid request or insufficient address data", body = ErrorSchema),
        (status = 409, description = "A store already exists for the postal code", body = ErrorSchema),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["stores"],
    operation_id = "createStore"
)]
#[post("/stores")]
pub async fn create_store(
    state: web::Data<HttpState>,
    payload: web::Json<CreateStoreRequestBody>,
) -> ApiResult<HttpResponse> {
    let request = parse_create_request(payload.into_inner())?;
    let store = state.stores.create_store(request).await?;
    Ok(HttpResponse::Created().json(StoreResponseBody::from(store)))
}

/// List every store in storage order.
#[utoipa::path(
    get,
    path = "/api/v1/stores",
    responses(
        (status = 200, description = "All stores", body = [StoreResponseBody]),
        (status = 503, description = "Storage unavailable", body = ErrorSchema)
    ),
    tags = ["stores"],
    operation_id = "listStores"
)]
#[get("/stores")]
pub async fn list_stores(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<StoreResponseBody>>> {
    let stores = state.stores_query.list_stores().await?;
    Ok(web::Json(stores.into_iter().map(Into::into).collect()))
}

/// Rank stores by distance from a postal code.
#[utoipa::path(
    get,
    path = "/api/v1/stores/nearby/{postalCode}",
    params(
        ("postalCode" = String, Path, description = "Origin postal code"),
        NearbyQuery
    ),
    responses(
        (status = 200, description = "Stores within the radius, nearest first", body = [NearbyStoreResponseBody]),
        (status = 400, description = "Invalid postal code or radius", body = ErrorSchema),
        (status = 404, description = "Origin could not be geocoded", body = ErrorSchema)
    ),
    tags = ["stores"],
    operation_id = "findNearbyStores"
)]
#[get("/stores/nearby/{postal_code}")]
pub async fn find_nearby_stores(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<NearbyQuery>,
) -> ApiResult<web::Json<Vec<NearbyStoreResponseBody>>> {
    let postal_code = parse_postal_code(&path.into_inner(), FieldName::new("postalCode"))?;
    let nearby = state
        .stores_query
        .find_nearby_stores(NearbyStoresRequest {
            postal_code,
            max_distance_km: query.into_inner().max_distance_km,
        })
        .await?;
    Ok(web::Json(nearby.into_iter().map(Into::into).collect()))
}

/// Fetch a store by identifier.
#[utoipa::path(
    get,
    path = "/api/v1/stores/{id}",
    params(("id" = String, Path, description = "Store identifier")),
    responses(
        (status = 200, description = "Store", body = StoreResponseBody),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Store not found", body = ErrorSchema)
    ),
    tags = ["stores"],
    operation_id = "getStore"
)]
#[get("/stores/{id}")]
pub async fn get_store(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StoreResponseBody>> {
    let id = parse_store_id(&path.into_inner(), FieldName::new("id"))?;
    let store = state.stores_query.get_store(&id).await?;
    Ok(web::Json(store.into()))
}

/// Delete a store by identifier.
#[utoipa::path(
    delete,
    path = "/api/v1/stores/{id}",
    params(("id" = String, Path, description = "Store identifier")),
    responses(
        (status = 204, description = "Store deleted"),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "Store not found", body = ErrorSchema)
    ),
    tags = ["stores"],
    operation_id = "deleteStore"
)]
#[delete("/stores/{id}")]
pub async fn delete_store(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = parse_store_id(&path.into_inner(), FieldName::new("id"))?;
    state.stores.delete_store(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
#[path = "stores_tests.rs"]
mod tests;
