use std::cmp::Reverse;

use bitvec::prelude::*;
use log::{debug, trace};

use super::coordinate::Coordinate;
use super::distance::distance_haversine;
use super::error::ZoneError;
use super::heat_zone::HeatZone;
use super::report::{DamageReport, validate_reports};

// Heat zone clustering, greedy and severity-first:
//
// HEATZONES(D, radius, minDamages)
//    used = {}
//    for each report P in D sorted by severity desc (stable)
//       if P in used: continue
//       Window = { P' in D | P' not in used, dist(P, P') <= radius }
//       if sizeof(Window) >= minDamages
//          add Window to used
//          emit zone(Window)
//
// Unlike DBSCAN there is no expansion through neighbours: a zone is exactly
// one anchor's window, and each report joins at most one zone.

/// Default clustering radius in meters
pub const DEFAULT_CLUSTER_RADIUS: f64 = 300.0;

/// Default minimum number of reports in a zone
pub const DEFAULT_MIN_DAMAGES: usize = 3;

/// Parameters of one clustering run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClusterPolicy {
    /// Maximum distance from the anchor report, meters
    pub cluster_radius: f64,
    /// Minimum number of reports a zone must hold
    pub min_damages: usize,
}

impl Default for ClusterPolicy {
    fn default() -> Self {
        ClusterPolicy {
            cluster_radius: DEFAULT_CLUSTER_RADIUS,
            min_damages: DEFAULT_MIN_DAMAGES,
        }
    }
}

impl ClusterPolicy {
    pub fn new(cluster_radius: f64, min_damages: usize) -> Self {
        ClusterPolicy {
            cluster_radius,
            min_damages,
        }
    }

    /// Rejects a zero member threshold and non-positive or non-finite radii
    pub fn validate(&self) -> Result<(), ZoneError> {
        if self.min_damages < 1 {
            return Err(ZoneError::InvalidPolicy("min_damages must be at least 1"));
        }
        if !self.cluster_radius.is_finite() || self.cluster_radius <= 0.0 {
            return Err(ZoneError::InvalidPolicy(
                "cluster_radius must be a positive number of meters",
            ));
        }
        Ok(())
    }
}

/// Clusters damage reports into heat zones
///
/// Reports are visited in descending severity; equal severities keep input
/// order. Each visited, unconsumed report opens a window of all unconsumed
/// reports within `cluster_radius` of it, and the window becomes a zone when
/// it holds at least `min_damages` reports.
///
/// # Arguments
///
/// * `damages` - Reports to cluster, ids must be unique
/// * `policy` - Clustering radius and member threshold
///
/// # Returns
///
/// Zones in formation order, numbered `zone-1`, `zone-2`, ...
///
/// # Errors
///
/// Returns an error if the policy or any report is invalid. Nothing is
/// clustered in that case.
pub fn create_heat_zones<'a>(
    damages: &'a [DamageReport],
    policy: &ClusterPolicy,
) -> Result<Vec<HeatZone<'a>>, ZoneError> {
    policy.validate()?;
    validate_reports(damages)?;

    debug!(
        "Clustering {} reports with radius={:.1} m, min_damages={}",
        damages.len(),
        policy.cluster_radius,
        policy.min_damages
    );

    let mut order: Vec<usize> = (0..damages.len()).collect();
    // slice::sort_by_key is stable
    order.sort_by_key(|&i| Reverse(damages[i].severity.rank()));

    let mut used = bitvec![0; damages.len()];
    let mut zones = Vec::new();

    for i in order {
        if used[i] {
            continue;
        }

        let anchor = &damages[i];
        let window = region_query(damages, &anchor.coordinate, policy.cluster_radius, &used);
        if window.len() < policy.min_damages {
            trace!(
                "Report {} anchors no zone: {} of {} reports in range",
                anchor.id,
                window.len(),
                policy.min_damages
            );
            continue;
        }

        for &j in &window {
            used.set(j, true);
        }

        let members = window.iter().map(|&j| &damages[j]).collect();
        let zone = HeatZone::from_members(zones.len() + 1, anchor, members);
        debug!(
            "Formed {} around {} with {} reports, severity={}, radius={:.1} m",
            zone.id, anchor.id, zone.damage_count, zone.severity, zone.radius
        );
        zones.push(zone);
    }

    debug!(
        "Found {} zones, {} of {} reports clustered",
        zones.len(),
        used.count_ones(),
        damages.len()
    );

    Ok(zones)
}

/// Recomputes zones from scratch for an updated report list
///
/// Previous zones are discarded; no zone identity carries over between calls.
/// On error `zones` is left empty.
pub fn update_heat_zones<'a>(
    zones: &mut Vec<HeatZone<'a>>,
    damages: &'a [DamageReport],
    policy: &ClusterPolicy,
) -> Result<(), ZoneError> {
    zones.clear();
    *zones = create_heat_zones(damages, policy)?;
    Ok(())
}

/// Finds unconsumed reports within `radius` meters of `center`
///
/// Returns indices into `damages` in input order. `used` must be as long as
/// `damages`.
pub fn region_query(
    damages: &[DamageReport],
    center: &Coordinate,
    radius: f64,
    used: &BitSlice,
) -> Vec<usize> {
    damages
        .iter()
        .enumerate()
        .filter(|&(j, d)| !used[j] && distance_haversine(center, &d.coordinate) <= radius)
        .map(|(j, _)| j)
        .collect()
}

/// Returns reports that belong to no zone, in input order
pub fn unclustered<'a>(
    damages: &'a [DamageReport],
    zones: &[HeatZone<'_>],
) -> Vec<&'a DamageReport> {
    damages
        .iter()
        .filter(|d| !zones.iter().any(|z| z.contains(&d.id)))
        .collect()
}
