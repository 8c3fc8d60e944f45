//! Demo catalog records.

use kiosk_core::{ItemId, Price};

use crate::model::Item;

/// The fixed demo catalog: three items across two categories.
///
/// The store accepts any list; this is just the demo data.
#[must_use]
pub fn seed_items() -> Vec<Item> {
    vec![
        Item {
            id: ItemId::new(1),
            title: "Alpha".to_owned(),
            short_description: "First item".to_owned(),
            full_description: "Alpha item detailed description".to_owned(),
            price: Price::from_cents(999),
            image_url: "https://placehold.co/400x300?text=Alpha".to_owned(),
            category: "Snacks".to_owned(),
            video_url: Some("https://www.w3schools.com/html/mov_bbb.mp4".to_owned()),
        },
        Item {
            id: ItemId::new(2),
            title: "Beta".to_owned(),
            short_description: "Second item".to_owned(),
            full_description: "Beta item detailed description".to_owned(),
            price: Price::from_cents(1450),
            image_url: "https://placehold.co/400x300?text=Beta".to_owned(),
            category: "Beverages".to_owned(),
            video_url: None,
        },
        Item {
            id: ItemId::new(3),
            title: "Gamma".to_owned(),
            short_description: "Third item".to_owned(),
            full_description: "Gamma item detailed description".to_owned(),
            price: Price::from_cents(525),
            image_url: "https://placehold.co/400x300?text=Gamma".to_owned(),
            category: "Snacks".to_owned(),
            video_url: None,
        },
    ]
}
