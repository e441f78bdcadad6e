//! Shared types for the Quan restaurant client
//!
//! Domain models exchanged with the restaurant backend, the per-table
//! order/cart state container, bill totals and the derived views used by the
//! ordering and kitchen screens. No I/O lives here.

pub mod filters;
pub mod models;
pub mod order;
pub mod response;
pub mod types;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use filters::{MenuFilter, TableStatusCounts};
pub use order::{Order, OrderItem, OrderStore, OrderTotals, TableFlowState};
pub use response::ApiResponse;
pub use types::{BranchId, Permission, TableId};
