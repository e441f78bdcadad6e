//! Data models
//!
//! Resource entities exchanged with the restaurant backend, each with its
//! `Create` / `Update` payloads. Wire field names are camelCase.
//! All IDs are `i64`.

pub mod area;
pub mod dining_table;
pub mod food;
pub mod food_category;
pub mod ingredient;
pub mod kitchen_order;
pub mod menu;
pub mod payment;
pub mod reservation;
pub mod role;
pub mod service_item;
pub mod unit;

// Re-exports
pub use area::*;
pub use dining_table::*;
pub use food::*;
pub use food_category::*;
pub use ingredient::*;
pub use kitchen_order::*;
pub use menu::*;
pub use payment::*;
pub use reservation::*;
pub use role::*;
pub use service_item::*;
pub use unit::*;

fn default_true() -> bool {
    true
}
