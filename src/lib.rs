pub mod agency;
pub mod config;
pub mod domain;
pub mod error;
pub mod exclusion;
pub mod logging;
pub mod normalize;
pub mod patterns;

// Flat surface for the orchestrator: strategy object, record types and the
// pure per-record functions.
pub use agency::{AgencyNormalizer, DefaultAgencyNormalizer, SurfaceAgencyNormalizer};
pub use config::AgencyConfig;
pub use domain::{Route, Stop, StopTime, Trip};
pub use error::{NormalizerError, Result};
pub use exclusion::{exclude_stop, exclude_stop_time, exclude_trip};
pub use normalize::{
    clean_direction_headsign, clean_route_long_name, clean_stop_head_sign, clean_stop_name,
    clean_trip_headsign, extract_destination, select_direction_head_sign,
};
