#[cfg(test)]
mod tests {
    use crate::zone::{
        ClusterPolicy, Coordinate, DamageReport, DamageStatistics, DamageType, Severity,
        ZoneSummary, create_heat_zones,
    };

    fn report(
        id: &str,
        lat: f64,
        damage_type: DamageType,
        severity: Severity,
        confidence: f64,
    ) -> DamageReport {
        DamageReport::new(
            id,
            Coordinate::new(lat, 28.97),
            damage_type,
            severity,
            confidence,
        )
    }

    fn sample() -> Vec<DamageReport> {
        vec![
            report("1", 41.0095, DamageType::Pothole, Severity::Severe, 95.0),
            report("2", 41.0096, DamageType::Crack, Severity::Moderate, 88.0),
            report("3", 41.0097, DamageType::Crack, Severity::None, 78.0),
            report("4", 41.0500, DamageType::WaterDamage, Severity::None, 71.0),
        ]
    }

    #[test]
    fn test_damage_statistics() {
        let stats = DamageStatistics::from_reports(&sample());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.severe_count, 1);
        assert_eq!(stats.moderate_count, 1);
        assert_eq!(stats.none_count, 2);
        // 332 / 4
        assert_eq!(stats.average_confidence, 83);
        assert_eq!(stats.most_common_type, Some(DamageType::Crack));

        assert_eq!(stats.type_breakdown.len(), 5);
        assert_eq!(stats.type_breakdown[0].damage_type, DamageType::Pothole);
        assert_eq!(stats.type_breakdown[1].count, 2);
        assert_eq!(stats.type_breakdown[1].percentage, 50.0);
        assert_eq!(stats.type_breakdown[2].count, 0);
        assert_eq!(stats.type_breakdown[4].percentage, 25.0);
    }

    #[test]
    fn test_damage_statistics_empty() {
        let stats = DamageStatistics::from_reports(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.average_confidence, 0);
        assert_eq!(stats.most_common_type, None);
        assert!(stats.type_breakdown.iter().all(|s| s.count == 0 && s.percentage == 0.0));
    }

    #[test]
    fn test_zone_summary() {
        let damages = sample();
        let zones = create_heat_zones(&damages, &ClusterPolicy::new(300.0, 2)).unwrap();
        let summary = ZoneSummary::from_zones(damages.len(), &zones);

        assert_eq!(summary.zone_count, 1);
        assert_eq!(summary.clustered, 3);
        assert_eq!(summary.unclustered, 1);
        assert_eq!(summary.severe_zones, 1);
        assert_eq!(summary.largest_zone, 3);

        let empty = ZoneSummary::from_zones(0, &[]);
        assert_eq!(empty.zone_count, 0);
        assert_eq!(empty.largest_zone, 0);
    }
}
