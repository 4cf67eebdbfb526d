//! PostgreSQL-backed `StoreRepository` implementation using Diesel ORM.
//!
//! Rows are rebuilt through the validated domain constructors, so a row that
//! no longer satisfies the store invariants surfaces as a query error rather
//! than an invalid `Store`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StoreRepository, StoreRepositoryError};
use crate::domain::{
    CompleteAddress, Coordinate, NewStore, PostalCode, Store, StoreDraft, StoreId,
};

use super::diesel_error_mapping::{map_diesel_error, map_insert_error, map_pool_error};
use super::models::{NewStoreRow, StoreRow};
use super::pool::DbPool;
use super::schema::stores;

/// Diesel-backed implementation of the store repository port.
#[derive(Clone)]
pub struct DieselStoreRepository {
    pool: DbPool,
}

impl DieselStoreRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn row_to_store(row: StoreRow) -> Result<Store, StoreRepositoryError> {
    let StoreRow {
        id,
        name,
        street,
        city,
        state,
        postal_code,
        number,
        latitude,
        longitude,
        created_at: _,
    } = row;

    let new_store = NewStore::new(StoreDraft {
        name,
        address: CompleteAddress {
            street,
            city,
            state,
            postal_code,
            number,
            coordinate: Coordinate::new(latitude, longitude),
        },
    })
    .map_err(|err| StoreRepositoryError::query(format!("invalid store row {id}: {err}")))?;
    Ok(new_store.with_id(StoreId::from_uuid(id)))
}

#[async_trait]
impl StoreRepository for DieselStoreRepository {
    async fn insert(&self, store: &NewStore) -> Result<Store, StoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let address = store.address();
        let coordinate = address.coordinate();
        let postal_code = address.postal_code().as_str();

        let row = NewStoreRow {
            name: store.name().as_ref(),
            street: address.street(),
            city: address.city(),
            state: address.state(),
            postal_code,
            number: address.number(),
            latitude: coordinate.latitude,
            longitude: coordinate.longitude,
        };

        let inserted = diesel::insert_into(stores::table)
            .values(&row)
            .returning(StoreRow::as_returning())
            .get_result::<StoreRow>(&mut conn)
            .await
            .map_err(|err| map_insert_error(err, postal_code))?;

        row_to_store(inserted)
    }

    async fn list_all(&self) -> Result<Vec<Store>, StoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<StoreRow> = stores::table
            .order((stores::created_at.asc(), stores::id.asc()))
            .select(StoreRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_store).collect()
    }

    async fn find_by_id(&self, id: &StoreId) -> Result<Option<Store>, StoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = stores::table
            .filter(stores::id.eq(id.as_uuid()))
            .select(StoreRow::as_select())
            .first::<StoreRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_store).transpose()
    }

    async fn find_by_postal_code(
        &self,
        postal_code: &PostalCode,
    ) -> Result<Option<Store>, StoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = stores::table
            .filter(stores::postal_code.eq(postal_code.as_str()))
            .select(StoreRow::as_select())
            .first::<StoreRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_store).transpose()
    }

    async fn delete(&self, id: &StoreId) -> Result<bool, StoreRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let removed = diesel::delete(stores::table.filter(stores::id.eq(id.as_uuid())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(removed > 0)
    }
}
