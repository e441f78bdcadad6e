//! Quan Client - REST client for the restaurant backend
//!
//! API wrappers per resource, the table ordering flow and the kitchen
//! board monitor.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod kitchen;
pub mod ordering;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::{FileUpload, HttpClient, NetworkHttpClient};
pub use kitchen::{AppendedItems, KitchenActivity, KitchenEvent, KitchenMonitor, detect_activity};
pub use ordering::{OrderingSession, ServicePlacement, SharedStore};

// Re-export shared types for convenience
pub use shared::ApiResponse;
