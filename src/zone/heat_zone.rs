use super::coordinate::{Coordinate, centroid};
use super::distance::distance_haversine;
use super::report::{DamageReport, DamageType, Severity};

/// Padding applied over the farthest member distance
const RADIUS_PADDING: f64 = 1.2;
/// Smallest radius a zone is drawn with, meters
const MIN_ZONE_RADIUS: f64 = 100.0;
/// Largest radius a zone is drawn with, meters
const MAX_ZONE_RADIUS: f64 = 500.0;

/// HeatZone represents one cluster of nearby damage reports
///
/// Zones borrow their members from the input slice and live only as long as it.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatZone<'a> {
    /// `zone-<n>`, n is the 1-based formation rank within one call
    pub id: String,
    pub center: Coordinate,
    /// Display radius in meters, always in [100, 500]
    pub radius: f64,
    pub damage_count: usize,
    pub severity: Severity,
    /// Member reports in input order
    pub damages: Vec<&'a DamageReport>,
    pub average_confidence: u32,
    pub dominant_damage_type: DamageType,
    /// Report whose neighbourhood formed this zone
    pub anchor: &'a DamageReport,
}

impl<'a> HeatZone<'a> {
    /// Builds a zone and all derived attributes from its members
    ///
    /// # Panics
    ///
    /// Panics if `damages` is empty
    pub fn from_members(
        rank: usize,
        anchor: &'a DamageReport,
        damages: Vec<&'a DamageReport>,
    ) -> Self {
        let center = centroid(damages.iter().map(|d| d.coordinate));

        HeatZone {
            id: format!("zone-{}", rank),
            center,
            radius: zone_radius(&damages, &center),
            damage_count: damages.len(),
            severity: max_severity(&damages),
            average_confidence: average_confidence(&damages),
            dominant_damage_type: dominant_damage_type(&damages),
            damages,
            anchor,
        }
    }

    /// Checks whether a report is a member of this zone
    pub fn contains(&self, id: &str) -> bool {
        self.damages.iter().any(|d| d.id == id)
    }
}

/// Farthest member distance to `center` padded by 20%, clamped to [100, 500] meters
pub fn zone_radius(damages: &[&DamageReport], center: &Coordinate) -> f64 {
    let max_distance = damages
        .iter()
        .map(|d| distance_haversine(center, &d.coordinate))
        .fold(0.0, f64::max);

    (max_distance * RADIUS_PADDING).clamp(MIN_ZONE_RADIUS, MAX_ZONE_RADIUS)
}

/// Highest severity among `damages`, `Severity::None` for an empty set
pub fn max_severity(damages: &[&DamageReport]) -> Severity {
    damages
        .iter()
        .map(|d| d.severity)
        .max()
        .unwrap_or(Severity::None)
}

/// Rounded mean confidence, 0 for an empty set
pub fn average_confidence(damages: &[&DamageReport]) -> u32 {
    if damages.is_empty() {
        return 0;
    }

    let sum: f64 = damages.iter().map(|d| d.confidence).sum();
    (sum / damages.len() as f64).round() as u32
}

/// Most frequent damage type
///
/// Ties go to the type encountered first. An empty set yields `Pothole`.
pub fn dominant_damage_type(damages: &[&DamageReport]) -> DamageType {
    // (type, count) in first-seen order
    let mut counts: Vec<(DamageType, usize)> = Vec::with_capacity(5);

    for d in damages {
        match counts.iter_mut().find(|(t, _)| *t == d.damage_type) {
            Some((_, n)) => *n += 1,
            None => counts.push((d.damage_type, 1)),
        }
    }

    let mut best = (DamageType::Pothole, 0);
    for &(t, n) in &counts {
        if n > best.1 {
            best = (t, n);
        }
    }

    best.0
}
