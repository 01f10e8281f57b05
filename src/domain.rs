use serde::{Deserialize, Serialize};

// Raw records as handed over by the feed reader. The normalizer only reads
// them; absent fields arrive as empty strings, never as sentinels.

/// A route of the feed, identified by id with rider-facing short/long names.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Route {
    #[serde(default)]
    pub route_id: String,
    #[serde(default)]
    pub route_short_name: String,
    #[serde(default)]
    pub route_long_name: String,
}

impl Route {
    pub fn long_name_or_default(&self) -> &str {
        &self.route_long_name
    }
}

/// One scheduled trip along a route.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trip {
    #[serde(default)]
    pub trip_id: String,
    #[serde(default)]
    pub route_id: String,
    #[serde(default)]
    pub direction_id: u8,
    #[serde(default)]
    pub trip_headsign: String,
}

impl Trip {
    pub fn headsign_or_default(&self) -> &str {
        &self.trip_headsign
    }
}

/// A boarding location. `stop_code` is the rider-facing code printed on
/// signage; it normally differs from the internal `stop_id`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Stop {
    #[serde(default)]
    pub stop_id: String,
    #[serde(default)]
    pub stop_code: String,
    #[serde(default)]
    pub stop_name: String,
}

impl Stop {
    pub fn name_or_default(&self) -> &str {
        &self.stop_name
    }
}

/// One visit of a trip at a stop. The headsign here overrides the trip
/// headsign for the remainder of the trip when present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopTime {
    #[serde(default)]
    pub trip_id: String,
    #[serde(default)]
    pub stop_id: String,
    #[serde(default)]
    pub stop_sequence: u32,
    #[serde(default)]
    pub stop_headsign: String,
}

impl StopTime {
    pub fn stop_headsign_or_default(&self) -> &str {
        &self.stop_headsign
    }
}
