//! Catalog domain records.

use kiosk_core::{Email, ItemId, Price};
use serde::{Deserialize, Serialize};

/// A catalog item.
///
/// Items are loaded once at startup and never mutated afterwards. The
/// insertion order of the catalog list is the canonical sort basis for
/// listing and pagination.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub short_description: String,
    pub full_description: String,
    pub price: Price,
    pub image_url: String,
    pub category: String,
    pub video_url: Option<String>,
}

/// A free-text message recorded against one item.
///
/// Appended to the item's bucket in arrival order; never mutated or
/// deleted afterwards.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub email: Email,
    pub message: String,
}
