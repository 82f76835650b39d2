//! Road damage heat zones
//!
//! Groups geolocated damage reports into circular "heat zones" for map display.
//! See [`zone::create_heat_zones`] for the clustering rules.

pub mod zone;

pub use zone::{
    ClusterPolicy, Coordinate, DamageReport, DamageStatistics, DamageType, HeatZone, Severity,
    ZoneError, ZoneSummary, create_heat_zones, unclustered, update_heat_zones,
};
