//! Supabase PostgREST client for the todo service.
//!
//! The store exclusively owns persistence and identity assignment; this
//! crate only speaks the REST dialect: filtered selects with ordering,
//! insert/update/delete with `return=representation`, and exact counts.

pub mod client;
pub mod error;
pub mod schema;
pub mod types;

pub use client::TodoStore;
pub use error::{StoreError, StoreResult};
pub use types::{Todo, TodoPatch};
