//! Service Item Model
//!
//! Non-food orderables (towels, karaoke room, cake cutting...). Whether a
//! service goes through the kitchen is an explicit tag on its service type.

use serde::{Deserialize, Serialize};

/// Kitchen routing of a service type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KitchenRouting {
    /// Goes to the cart and is prepared by the kitchen
    #[default]
    NeedsPreparation,
    /// Consumed on the spot; recorded directly as served
    ReadyImmediately,
}

/// Service type entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceType {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub routing: KitchenRouting,
}

/// Service item entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItem {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub service_type_id: Option<i64>,
    /// Embedded service type, when the backend expands it
    #[serde(default)]
    pub service_type: Option<ServiceType>,
}

impl ServiceItem {
    /// Resolve the routing of this item.
    ///
    /// The embedded type wins; otherwise the type is looked up in `types`.
    /// Items without a resolvable type go to the kitchen.
    pub fn routing(&self, types: &[ServiceType]) -> KitchenRouting {
        if let Some(st) = &self.service_type {
            return st.routing;
        }
        self.service_type_id
            .and_then(|id| types.iter().find(|t| t.id == id))
            .map(|t| t.routing)
            .unwrap_or_default()
    }

    pub fn requires_kitchen(&self, types: &[ServiceType]) -> bool {
        self.routing(types) == KitchenRouting::NeedsPreparation
    }
}

/// Create / update service type payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTypeInput {
    pub name: String,
    pub routing: KitchenRouting,
}

/// Create service item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceItemCreate {
    pub name: String,
    pub price: f64,
    pub service_type_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(type_id: Option<i64>, embedded: Option<ServiceType>) -> ServiceItem {
        ServiceItem {
            id: 7,
            name: "Khăn lạnh".into(),
            price: 5_000.0,
            service_type_id: type_id,
            service_type: embedded,
        }
    }

    fn types() -> Vec<ServiceType> {
        vec![
            ServiceType {
                id: 1,
                name: "Đồ uống pha chế".into(),
                routing: KitchenRouting::NeedsPreparation,
            },
            ServiceType {
                id: 2,
                name: "Tiện ích".into(),
                routing: KitchenRouting::ReadyImmediately,
            },
        ]
    }

    #[test]
    fn test_routing_by_lookup() {
        assert!(service(Some(1), None).requires_kitchen(&types()));
        assert!(!service(Some(2), None).requires_kitchen(&types()));
    }

    #[test]
    fn test_embedded_type_wins() {
        let embedded = ServiceType {
            id: 1,
            name: "Tiện ích".into(),
            routing: KitchenRouting::ReadyImmediately,
        };
        assert!(!service(Some(1), Some(embedded)).requires_kitchen(&types()));
    }

    #[test]
    fn test_unknown_type_goes_to_kitchen() {
        assert_eq!(service(Some(99), None).routing(&types()), KitchenRouting::NeedsPreparation);
        assert_eq!(service(None, None).routing(&[]), KitchenRouting::NeedsPreparation);
    }

    #[test]
    fn test_routing_defaults_when_missing_on_wire() {
        let st: ServiceType = serde_json::from_str(r#"{"id":3,"name":"Karaoke"}"#).unwrap();
        assert_eq!(st.routing, KitchenRouting::NeedsPreparation);
        let st: ServiceType =
            serde_json::from_str(r#"{"id":4,"name":"Khăn","routing":"ready_immediately"}"#).unwrap();
        assert_eq!(st.routing, KitchenRouting::ReadyImmediately);
    }
}
