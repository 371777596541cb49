//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        title -> Text,
        /// Free-text description.
        description -> Text,
        /// Raw status value.
        #[max_length = 32]
        status -> Varchar,
        /// Raw priority value.
        #[max_length = 32]
        priority -> Varchar,
        /// Raw category value.
        #[max_length = 32]
        category -> Varchar,
        /// Optional due date.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
