//! OpenAPI documentation for the store locator API.
//!
//! [`ApiDoc`] registers the store and health endpoints together with the
//! adapter-side schema wrappers. Swagger UI serves it in debug builds and the
//! `openapi-dump` binary prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use crate::inbound::http::stores::{
    CreateStoreAddressBody, CreateStoreRequestBody, NearbyStoreResponseBody, StoreAddressBody,
    StoreResponseBody,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Store locator API",
        description = "Register stores with enriched, geocoded addresses and search them by distance."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::stores::create_store,
        crate::inbound::http::stores::list_stores,
        crate::inbound::http::stores::get_store,
        crate::inbound::http::stores::delete_store,
        crate::inbound::http::stores::find_nearby_stores,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CreateStoreRequestBody,
        CreateStoreAddressBody,
        StoreResponseBody,
        StoreAddressBody,
        NearbyStoreResponseBody,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "stores", description = "Store registration and proximity search"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
