use strum::IntoEnumIterator;

use super::heat_zone::{HeatZone, average_confidence, dominant_damage_type};
use super::report::{DamageReport, DamageType, Severity};

/// Share of one damage type in a report set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeShare {
    pub damage_type: DamageType,
    pub count: usize,
    /// Percentage of all reports, 0 when there are none
    pub percentage: f64,
}

/// Aggregate figures over a set of damage reports
#[derive(Debug, Clone, PartialEq)]
pub struct DamageStatistics {
    pub total: usize,
    pub severe_count: usize,
    pub moderate_count: usize,
    pub none_count: usize,
    pub average_confidence: u32,
    /// `None` for an empty report set
    pub most_common_type: Option<DamageType>,
    /// One entry per damage type, in declaration order
    pub type_breakdown: Vec<TypeShare>,
}

impl DamageStatistics {
    pub fn from_reports(damages: &[DamageReport]) -> Self {
        let refs: Vec<&DamageReport> = damages.iter().collect();
        let count_of = |s: Severity| damages.iter().filter(|d| d.severity == s).count();

        let type_breakdown = DamageType::iter()
            .map(|t| {
                let count = damages.iter().filter(|d| d.damage_type == t).count();
                let percentage = if damages.is_empty() {
                    0.0
                } else {
                    count as f64 * 100.0 / damages.len() as f64
                };
                TypeShare {
                    damage_type: t,
                    count,
                    percentage,
                }
            })
            .collect();

        DamageStatistics {
            total: damages.len(),
            severe_count: count_of(Severity::Severe),
            moderate_count: count_of(Severity::Moderate),
            none_count: count_of(Severity::None),
            average_confidence: average_confidence(&refs),
            most_common_type: (!refs.is_empty()).then(|| dominant_damage_type(&refs)),
            type_breakdown,
        }
    }
}

/// How a report set was split into zones
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZoneSummary {
    pub zone_count: usize,
    pub clustered: usize,
    pub unclustered: usize,
    pub severe_zones: usize,
    /// Member count of the biggest zone, 0 without zones
    pub largest_zone: usize,
}

impl ZoneSummary {
    /// `total` is the number of reports the zones were built from
    pub fn from_zones(total: usize, zones: &[HeatZone<'_>]) -> Self {
        let clustered: usize = zones.iter().map(|z| z.damage_count).sum();

        ZoneSummary {
            zone_count: zones.len(),
            clustered,
            unclustered: total.saturating_sub(clustered),
            severe_zones: zones
                .iter()
                .filter(|z| z.severity == Severity::Severe)
                .count(),
            largest_zone: zones.iter().map(|z| z.damage_count).max().unwrap_or(0),
        }
    }
}
