use std::collections::HashSet;
use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use super::coordinate::Coordinate;
use super::error::ZoneError;

/// Damage severity, ordered `None < Moderate < Severe`
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, EnumIter,
    IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum Severity {
    None,
    Moderate,
    Severe,
}

impl Severity {
    /// Numeric rank used for processing order (severe=2, moderate=1, none=0)
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Parses a severity tag, failing on anything outside the three known levels
    pub fn parse(tag: &str) -> Result<Self, ZoneError> {
        Severity::from_str(tag.trim()).map_err(|_| ZoneError::UnknownSeverity(tag.to_string()))
    }
}

/// Category of road damage
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
pub enum DamageType {
    Pothole,
    Crack,
    SurfaceWear,
    EdgeDamage,
    WaterDamage,
}

impl DamageType {
    pub fn parse(tag: &str) -> Result<Self, ZoneError> {
        DamageType::from_str(tag.trim()).map_err(|_| ZoneError::UnknownDamageType(tag.to_string()))
    }
}

/// A single field report of road damage
///
/// `description`, `detected_at` and `road_name` are carried through clustering
/// untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct DamageReport {
    pub id: String,
    pub coordinate: Coordinate,
    pub damage_type: DamageType,
    pub severity: Severity,
    /// Detection confidence in [0, 100]
    pub confidence: f64,
    pub description: String,
    pub detected_at: String,
    pub road_name: Option<String>,
}

impl DamageReport {
    /// Builds a report with empty descriptive fields
    pub fn new(
        id: impl Into<String>,
        coordinate: Coordinate,
        damage_type: DamageType,
        severity: Severity,
        confidence: f64,
    ) -> Self {
        DamageReport {
            id: id.into(),
            coordinate,
            damage_type,
            severity,
            confidence,
            description: String::new(),
            detected_at: String::new(),
            road_name: None,
        }
    }
}

/// Checks a batch of reports before clustering
///
/// Rejects duplicate ids, non-finite or out-of-range coordinates and
/// confidences outside [0, 100]. The first offending report is reported.
pub fn validate_reports(reports: &[DamageReport]) -> Result<(), ZoneError> {
    let mut seen = HashSet::with_capacity(reports.len());

    for report in reports {
        if !seen.insert(report.id.as_str()) {
            return Err(ZoneError::DuplicateId(report.id.clone()));
        }

        if !report.coordinate.is_valid() {
            return Err(ZoneError::InvalidCoordinate {
                id: report.id.clone(),
                latitude: report.coordinate.latitude,
                longitude: report.coordinate.longitude,
            });
        }

        // NaN fails the range check too
        if !(0.0..=100.0).contains(&report.confidence) {
            return Err(ZoneError::InvalidConfidence {
                id: report.id.clone(),
                confidence: report.confidence,
            });
        }
    }

    Ok(())
}
