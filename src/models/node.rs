//! Depot and pickup locations.

use serde::{Deserialize, Serialize};

/// A labelled geographic location.
///
/// In a node list, index 0 is always the depot and indices `1..n` are
/// pickups. Coordinates are in degrees.
///
/// # Examples
///
/// ```
/// use u_aco::models::Node;
///
/// let school = Node::new("school", 37.5665, 126.9780);
/// assert_eq!(school.label(), "school");
/// assert_eq!(school.lat(), 37.5665);
/// assert_eq!(school.lon(), 126.9780);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    label: String,
    lat: f64,
    lon: f64,
}

impl Node {
    /// Creates a node at the given latitude and longitude.
    pub fn new(label: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            label: label.into(),
            lat,
            lon,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Latitude in degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Great-circle distance to another node, in kilometers.
    pub fn distance_to(&self, other: &Node) -> f64 {
        crate::distance::haversine_km(self.lat, self.lon, other.lat, other.lon)
    }
}
