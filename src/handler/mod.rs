//! # Request Handler
//!
//! Applies the item rules and either succeeds or returns a typed
//! [`ItemError`] for the HTTP layer to render.

pub mod errors;
pub mod item_handler;

pub use errors::{ErrorBody, ItemError, ItemResult};
pub use item_handler::{
    ItemHandler, PLACEHOLDER_COUNT_NUMERIC, PLACEHOLDER_COUNT_TEXT, PLACEHOLDER_NUMBER,
    PLACEHOLDER_TEXT,
};
