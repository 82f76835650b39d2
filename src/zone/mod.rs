//! Package zone implements severity-prioritized heat zone clustering on (lat, lon)
pub mod coordinate;
pub mod distance;
pub mod engine;
pub mod error;
pub mod heat_zone;
pub mod report;
pub mod stats;

#[cfg(test)]
mod coordinate_test;
#[cfg(test)]
mod distance_test;
#[cfg(test)]
mod stats_test;

pub use coordinate::{Coordinate, centroid, centroid_and_bounds};
pub use distance::{DEGREE_RAD, EARTH_R_M, distance_haversine};
pub use engine::{ClusterPolicy, create_heat_zones, region_query, unclustered, update_heat_zones};
pub use error::ZoneError;
pub use heat_zone::HeatZone;
pub use report::{DamageReport, DamageType, Severity, validate_reports};
pub use stats::{DamageStatistics, TypeShare, ZoneSummary};
