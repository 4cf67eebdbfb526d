//! Internal Diesel row structs. Never exposed to the domain.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::stores;

/// Row read from the `stores` table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = stores)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct StoreRow {
    pub id: Uuid,
    pub name: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub number: String,
    pub latitude: f64,
    pub longitude: f64,
    #[expect(dead_code, reason = "ordering column, not part of the store entity")]
    pub created_at: DateTime<Utc>,
}

/// Insertable store; `id` and `created_at` come from column defaults.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = stores)]
pub(crate) struct NewStoreRow<'a> {
    pub name: &'a str,
    pub street: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub postal_code: &'a str,
    pub number: &'a str,
    pub latitude: f64,
    pub longitude: f64,
}
