//! Diesel table definitions. Keep in step with `backend/migrations`.

diesel::table! {
    /// Registered stores, one per postal code.
    stores (id) {
        /// Primary key, generated by the database.
        id -> Uuid,
        name -> Varchar,
        street -> Varchar,
        city -> Varchar,
        state -> Varchar,
        /// Canonical `NNNNN-NNN` postal code; unique.
        postal_code -> Varchar,
        number -> Varchar,
        latitude -> Float8,
        longitude -> Float8,
        created_at -> Timestamptz,
    }
}
