//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match `backend/migrations` exactly.

diesel::table! {
    /// Managed selection lists.
    selection_lists (id) {
        id -> Uuid,
        /// Display name; binds the list to a role.
        name -> Text,
        /// JSON array of item strings in display order.
        items -> Jsonb,
    }
}

diesel::table! {
    /// The cycle singleton. A unique expression index keeps it to one row.
    selection_cycle (id) {
        id -> Uuid,
        current_cycle -> Uuid,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Append-only selection ledger. `list_id` is a weak reference with no
    /// foreign key, so deleting a list keeps its history.
    selection_history (id) {
        id -> Uuid,
        list_id -> Uuid,
        selected_item -> Text,
        selection_cycle -> Uuid,
        created_at -> Timestamptz,
    }
}

diesel::allow_tables_to_appear_in_same_query!(selection_lists, selection_cycle, selection_history);
