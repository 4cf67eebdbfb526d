//! Tests for the store service.

use std::sync::Arc;

use mockall::predicate::eq;
use rstest::rstest;

use super::*;
use crate::domain::ports::{
    AddressLookupError, GeocodingError, MockAddressLookup, MockGeocoder, MockStoreRepository,
};
use crate::domain::{AddressLookupResult, CompleteAddress, Coordinate, ErrorCode, PostalCode, RawAddress};

fn paulista_lookup() -> MockAddressLookup {
    let mut lookup = MockAddressLookup::new();
    lookup.expect_lookup_address().returning(|_| {
        Ok(AddressLookupResult {
            street: "Av. Paulista".to_owned(),
            neighborhood: "Bela Vista".to_owned(),
            city: "São Paulo".to_owned(),
            state: "SP".to_owned(),
            postal_code: "01310-100".to_owned(),
        })
    });
    lookup
}

fn geocoder_returning(coordinate: Coordinate) -> MockGeocoder {
    let mut geocoder = MockGeocoder::new();
    geocoder.expect_geocode().returning(move |_| Ok(coordinate));
    geocoder
}

fn service(
    repo: MockStoreRepository,
    lookup: MockAddressLookup,
    geocoder: MockGeocoder,
) -> StoreService<MockStoreRepository> {
    let enrichment = AddressEnrichmentService::new(Arc::new(lookup), Arc::new(geocoder));
    StoreService::new(Arc::new(repo), enrichment)
}

fn create_request(name: &str) -> CreateStoreRequest {
    CreateStoreRequest {
        name: name.to_owned(),
        postal_code: PostalCode::new("01310100").expect("valid CEP"),
        address: RawAddress {
            number: "1578".to_owned(),
            ..RawAddress::default()
        },
    }
}

fn stored(name: &str, postal_code: &str, coordinate: Coordinate) -> Store {
    NewStore::new(StoreDraft {
        name: name.to_owned(),
        address: CompleteAddress {
            street: "Rua Teste".to_owned(),
            city: "São Paulo".to_owned(),
            state: "SP".to_owned(),
            postal_code: postal_code.to_owned(),
            number: "10".to_owned(),
            coordinate,
        },
    })
    .expect("valid store")
    .with_id(StoreId::random())
}

#[tokio::test]
async fn create_store_enriches_then_inserts() {
    let mut repo = MockStoreRepository::new();
    repo.expect_find_by_postal_code()
        .withf(|code| code.to_string() == "01310-100")
        .times(1)
        .return_once(|_| Ok(None));
    repo.expect_insert()
        .times(1)
        .returning(|store| Ok(store.clone().with_id(StoreId::random())));

    let store = service(
        repo,
        paulista_lookup(),
        geocoder_returning(Coordinate::new(-23.56, -46.65)),
    )
    .create_store(create_request("Loja Paulista"))
    .await
    .expect("create succeeds");

    assert_eq!(store.name().as_ref(), "Loja Paulista");
    assert_eq!(store.address().street(), "Av. Paulista");
    assert_eq!(store.address().number(), "1578");
    assert_eq!(store.address().coordinate(), Coordinate::new(-23.56, -46.65));
}

#[tokio::test]
async fn create_store_rejects_short_name_before_lookups() {
    let mut repo = MockStoreRepository::new();
    repo.expect_insert().times(0);
    let mut lookup = MockAddressLookup::new();
    lookup.expect_lookup_address().times(0);
    let mut geocoder = MockGeocoder::new();
    geocoder.expect_geocode().times(0);

    let error = service(repo, lookup, geocoder)
        .create_store(create_request("ab"))
        .await
        .expect_err("short name");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
}

#[tokio::test]
async fn create_store_detects_duplicate_in_pre_check() {
    let mut repo = MockStoreRepository::new();
    repo.expect_find_by_postal_code().return_once(|_| {
        Ok(Some(stored(
            "Loja Antiga",
            "01310-100",
            Coordinate::new(-23.56, -46.65),
        )))
    });
    repo.expect_insert().times(0);

    let error = service(
        repo,
        paulista_lookup(),
        geocoder_returning(Coordinate::new(-23.56, -46.65)),
    )
    .create_store(create_request("Loja Nova"))
    .await
    .expect_err("duplicate");

    assert_eq!(error.code(), ErrorCode::Conflict);
    let details = error.details().expect("details present");
    assert_eq!(details["code"], "duplicate_postal_code");
}

#[tokio::test]
async fn create_store_maps_unique_violation_to_conflict() {
    let mut repo = MockStoreRepository::new();
    repo.expect_find_by_postal_code().return_once(|_| Ok(None));
    repo.expect_insert()
        .return_once(|_| Err(StoreRepositoryError::duplicate_postal_code("01310-100")));

    let error = service(
        repo,
        paulista_lookup(),
        geocoder_returning(Coordinate::new(-23.56, -46.65)),
    )
    .create_store(create_request("Loja Nova"))
    .await
    .expect_err("conflict on insert");

    assert_eq!(error.code(), ErrorCode::Conflict);
}

#[tokio::test]
async fn create_store_with_unresolvable_address_writes_nothing() {
    let mut repo = MockStoreRepository::new();
    repo.expect_find_by_postal_code().times(0);
    repo.expect_insert().times(0);
    let mut lookup = MockAddressLookup::new();
    lookup
        .expect_lookup_address()
        .returning(|code| Err(AddressLookupError::not_found(code.to_string())));
    let mut geocoder = MockGeocoder::new();
    geocoder
        .expect_geocode()
        .returning(|query| Err(GeocodingError::no_results(query)));

    let error = service(repo, lookup, geocoder)
        .create_store(create_request("Loja Nova"))
        .await
        .expect_err("insufficient data");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details present");
    assert_eq!(details["code"], "insufficient_address_data");
}

#[rstest]
#[case(StoreRepositoryError::connection("pool exhausted"), ErrorCode::ServiceUnavailable)]
#[case(StoreRepositoryError::query("syntax error"), ErrorCode::InternalError)]
#[tokio::test]
async fn list_stores_maps_repository_errors(
    #[case] failure: StoreRepositoryError,
    #[case] expected: ErrorCode,
) {
    let mut repo = MockStoreRepository::new();
    repo.expect_list_all().return_once(move || Err(failure));

    let error = service(repo, MockAddressLookup::new(), MockGeocoder::new())
        .list_stores()
        .await
        .expect_err("repository failure");

    assert_eq!(error.code(), expected);
}

#[tokio::test]
async fn get_store_reports_missing_store() {
    let id = StoreId::random();
    let mut repo = MockStoreRepository::new();
    repo.expect_find_by_id()
        .with(eq(id))
        .return_once(|_| Ok(None));

    let error = service(repo, MockAddressLookup::new(), MockGeocoder::new())
        .get_store(&id)
        .await
        .expect_err("missing store");

    assert_eq!(error.code(), ErrorCode::NotFound);
}

#[rstest]
#[case(true, None)]
#[case(false, Some(ErrorCode::NotFound))]
#[tokio::test]
async fn delete_store_requires_existing_row(
    #[case] removed: bool,
    #[case] expected: Option<ErrorCode>,
) {
    let mut repo = MockStoreRepository::new();
    repo.expect_delete().return_once(move |_| Ok(removed));

    let result = service(repo, MockAddressLookup::new(), MockGeocoder::new())
        .delete_store(&StoreId::random())
        .await;

    assert_eq!(result.err().map(|error| error.code()), expected);
}

#[tokio::test]
async fn find_nearby_ranks_stores_within_default_radius() {
    let mut repo = MockStoreRepository::new();
    repo.expect_list_all().return_once(|| {
        Ok(vec![
            stored("Loja Longe", "13000-000", Coordinate::new(-22.2015, -46.6333)),
            stored("Loja Perto", "07000-000", Coordinate::new(-23.1008, -46.6333)),
            stored("Loja Sé", "01001-000", Coordinate::new(-23.5505, -46.6333)),
        ])
    });
    let mut geocoder = MockGeocoder::new();
    geocoder
        .expect_geocode()
        .with(eq("01001-000"))
        .return_once(|_| Ok(Coordinate::new(-23.5505, -46.6333)));

    let nearby = service(repo, MockAddressLookup::new(), geocoder)
        .find_nearby_stores(NearbyStoresRequest {
            postal_code: PostalCode::new("01001-000").expect("valid CEP"),
            max_distance_km: None,
        })
        .await
        .expect("search succeeds");

    let names: Vec<&str> = nearby
        .iter()
        .map(|entry| entry.store.name().as_ref())
        .collect();
    assert_eq!(names, vec!["Loja Sé", "Loja Perto"]);
}

#[tokio::test]
async fn find_nearby_honours_radius_override() {
    let mut repo = MockStoreRepository::new();
    repo.expect_list_all().return_once(|| {
        Ok(vec![stored(
            "Loja Longe",
            "13000-000",
            Coordinate::new(-22.2015, -46.6333),
        )])
    });

    let nearby = service(
        repo,
        MockAddressLookup::new(),
        geocoder_returning(Coordinate::new(-23.5505, -46.6333)),
    )
    .find_nearby_stores(NearbyStoresRequest {
        postal_code: PostalCode::new("01001-000").expect("valid CEP"),
        max_distance_km: Some(200.0),
    })
    .await
    .expect("search succeeds");

    assert_eq!(nearby.len(), 1);
}

#[tokio::test]
async fn configured_default_radius_applies_without_override() {
    let mut repo = MockStoreRepository::new();
    repo.expect_list_all().return_once(|| {
        Ok(vec![stored(
            "Loja Perto",
            "07000-000",
            Coordinate::new(-23.1008, -46.6333),
        )])
    });

    let nearby = service(
        repo,
        MockAddressLookup::new(),
        geocoder_returning(Coordinate::new(-23.5505, -46.6333)),
    )
    .with_default_radius_km(10.0)
    .expect("valid radius")
    .find_nearby_stores(NearbyStoresRequest {
        postal_code: PostalCode::new("01001-000").expect("valid CEP"),
        max_distance_km: None,
    })
    .await
    .expect("search succeeds");

    assert!(nearby.is_empty());
}

#[rstest]
#[case(0.0)]
#[case(-5.0)]
#[case(f64::NAN)]
#[case(f64::INFINITY)]
#[tokio::test]
async fn find_nearby_rejects_invalid_radius(#[case] radius: f64) {
    let mut repo = MockStoreRepository::new();
    repo.expect_list_all().times(0);
    let mut geocoder = MockGeocoder::new();
    geocoder.expect_geocode().times(0);

    let error = service(repo, MockAddressLookup::new(), geocoder)
        .find_nearby_stores(NearbyStoresRequest {
            postal_code: PostalCode::new("01001-000").expect("valid CEP"),
            max_distance_km: Some(radius),
        })
        .await
        .expect_err("invalid radius");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    let details = error.details().expect("details present");
    assert_eq!(details["code"], "invalid_distance");
    assert_eq!(details["field"], "maxDistanceKm");
}

#[rstest]
#[case(0.0)]
#[case(-5.0)]
#[case(f64::NAN)]
fn unusable_default_radius_is_refused(#[case] radius: f64) {
    let mut repo = MockStoreRepository::new();
    repo.expect_list_all().times(0).returning(|| {
        Ok(vec![stored(
            "Loja Sé",
            "01001-000",
            Coordinate::new(-23.5505, -46.6333),
        )])
    });

    let configured = service(
        repo,
        MockAddressLookup::new(),
        geocoder_returning(Coordinate::new(-23.5505, -46.6333)),
    )
    .with_default_radius_km(radius);

    assert!(matches!(
        configured,
        Err(StoreError::InvalidDistance { .. })
    ));
}

#[tokio::test]
async fn find_nearby_surfaces_unresolvable_origin() {
    let mut repo = MockStoreRepository::new();
    repo.expect_list_all().times(0);
    let mut geocoder = MockGeocoder::new();
    geocoder
        .expect_geocode()
        .returning(|_| Err(GeocodingError::transport("connection reset")));

    let error = service(repo, MockAddressLookup::new(), geocoder)
        .find_nearby_stores(NearbyStoresRequest {
            postal_code: PostalCode::new("01001-000").expect("valid CEP"),
            max_distance_km: None,
        })
        .await
        .expect_err("origin unresolved");

    assert_eq!(error.code(), ErrorCode::NotFound);
    let details = error.details().expect("details present");
    assert_eq!(details["code"], "coordinate_not_found");
}
