//! Order module
//!
//! - Types: orders, lines and their statuses
//! - Store: the per-table order/cart state container
//! - Money: bill totals
//! - Wire: backend DTOs for orders

pub mod money;
pub mod store;
pub mod types;
pub mod wire;

// Re-exports
pub use money::OrderTotals;
pub use store::{OrderStore, TableFlowState};
pub use types::*;
pub use wire::{
    AddItemsRequest, CreateOrderRequest, NoteRequest, OrderDto, OrderItemInput, OrderLineDto,
    StatusRequest,
};
