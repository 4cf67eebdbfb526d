//! Builders wiring adapters into the HTTP state.

use std::io;
use std::sync::Arc;

use actix_web::web;
use tracing::warn;

use store_locator::domain::ports::{
    AddressLookup, FixtureGeocoder, FixtureStoreRepository, Geocoder, StoreCommand, StoreQuery,
    StoreRepository,
};
use store_locator::domain::{AddressEnrichmentService, StoreService};
use store_locator::inbound::http::state::HttpState;
use store_locator::outbound::opencage::OpenCageHttpSource;
use store_locator::outbound::persistence::DieselStoreRepository;
use store_locator::outbound::viacep::ViaCepHttpSource;

use super::{LookupConfig, ServerConfig};

fn build_address_lookup(lookup: &LookupConfig) -> io::Result<Arc<dyn AddressLookup>> {
    let source = ViaCepHttpSource::new(lookup.viacep_url.clone(), lookup.timeout)
        .map_err(|err| io::Error::other(format!("build ViaCEP client: {err}")))?;
    Ok(Arc::new(source))
}

fn build_geocoder(lookup: &LookupConfig) -> io::Result<Arc<dyn Geocoder>> {
    match &lookup.opencage_api_key {
        Some(api_key) => {
            let source =
                OpenCageHttpSource::new(lookup.opencage_url.clone(), api_key.as_str(), lookup.timeout)
                    .map_err(|err| io::Error::other(format!("build OpenCage client: {err}")))?;
            Ok(Arc::new(source))
        }
        None => {
            warn!("no OpenCage API key configured; geocoding is unavailable");
            Ok(Arc::new(FixtureGeocoder))
        }
    }
}

fn build_store_ports<R>(
    repo: Arc<R>,
    enrichment: AddressEnrichmentService,
    nearby_radius_km: f64,
) -> io::Result<(Arc<dyn StoreCommand>, Arc<dyn StoreQuery>)>
where
    R: StoreRepository + 'static,
{
    let service = StoreService::new(repo, enrichment)
        .with_default_radius_km(nearby_radius_km)
        .map_err(|err| io::Error::other(format!("configure nearby search: {err}")))?;
    let service = Arc::new(service);
    Ok((
        service.clone() as Arc<dyn StoreCommand>,
        service as Arc<dyn StoreQuery>,
    ))
}

/// Build the HTTP state, choosing the Diesel repository when a pool is
/// configured and the fixture repository otherwise.
///
/// # Errors
/// Returns [`io::Error`] when an HTTP client for the lookup services cannot
/// be constructed or the nearby-search radius is unusable.
pub(super) fn build_http_state(config: &ServerConfig) -> io::Result<web::Data<HttpState>> {
    let enrichment = AddressEnrichmentService::new(
        build_address_lookup(&config.lookup)?,
        build_geocoder(&config.lookup)?,
    );

    let (stores, stores_query) = match &config.db_pool {
        Some(pool) => build_store_ports(
            Arc::new(DieselStoreRepository::new(pool.clone())),
            enrichment,
            config.nearby_radius_km,
        )?,
        None => {
            warn!("no database configured; stores will not be persisted");
            build_store_ports(
                Arc::new(FixtureStoreRepository),
                enrichment,
                config.nearby_radius_km,
            )?
        }
    };

    Ok(web::Data::new(HttpState::new(stores, stores_query)))
}
