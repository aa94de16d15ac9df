//! Route storage keyed by route id.

use std::collections::HashMap;

use crate::{EcoAlertError, Result, WasteRoute};

/// Storage for waste collection routes.
///
/// Routes are immutable seed data; the store only validates that each route
/// has at least one waypoint before accepting it.
#[derive(Debug, Default, Clone)]
pub struct RouteStore {
    routes: HashMap<String, WasteRoute>,
}

impl RouteStore {
    /// Create a new empty route store.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Create a store seeded with the given routes.
    pub fn with_routes(routes: Vec<WasteRoute>) -> Result<Self> {
        let mut store = Self::new();
        for route in routes {
            store.add(route)?;
        }
        Ok(store)
    }

    /// Add a route. Replaces any existing route with the same id.
    pub fn add(&mut self, route: WasteRoute) -> Result<()> {
        if route.path.is_empty() {
            return Err(EcoAlertError::EmptyRoute { route_id: route.id });
        }
        self.routes.insert(route.id.clone(), route);
        Ok(())
    }

    /// Get a route by id.
    pub fn get(&self, id: &str) -> Option<&WasteRoute> {
        self.routes.get(id)
    }

    /// Check if a route exists.
    pub fn contains(&self, id: &str) -> bool {
        self.routes.contains_key(id)
    }

    /// All route ids, sorted for stable display.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.routes.keys().cloned().collect();
        ids.sort();
        ids
    }

    /// All routes, sorted by id.
    pub fn iter_sorted(&self) -> Vec<&WasteRoute> {
        let mut routes: Vec<&WasteRoute> = self.routes.values().collect();
        routes.sort_by(|a, b| a.id.cmp(&b.id));
        routes
    }

    /// Number of stored routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
