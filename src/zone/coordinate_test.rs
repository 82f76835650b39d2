#[cfg(test)]
mod tests {
    use super::super::*;

    #[test]
    fn test_centroid_and_bounds() {
        let coords = vec![
            Coordinate::new(59.955982, 30.244759),
            Coordinate::new(59.955975, 30.24472),
            Coordinate::new(59.96698, 30.244358),
        ];

        let (center, min, max) = centroid_and_bounds(coords.iter().copied());
        assert_eq!(center.longitude, 30.244612333333333);
        assert_eq!(center.latitude, 59.95964566666667);
        assert_eq!(min.longitude, 30.244358);
        assert_eq!(min.latitude, 59.955975);
        assert_eq!(max.longitude, 30.244759);
        assert_eq!(max.latitude, 59.96698);

        assert_eq!(centroid(coords), center);
    }

    #[test]
    fn test_centroid_single_point() {
        let p = Coordinate::new(41.0095, 28.9740);
        assert_eq!(centroid([p]), p);
    }

    #[test]
    #[should_panic(expected = "empty coordinate set")]
    fn test_centroid_empty() {
        centroid(Vec::<Coordinate>::new());
    }

    #[test]
    fn test_is_valid() {
        assert!(Coordinate::new(41.0, 29.0).is_valid());
        assert!(Coordinate::new(-90.0, 180.0).is_valid());
        assert!(!Coordinate::new(f64::NAN, 29.0).is_valid());
        assert!(!Coordinate::new(41.0, f64::INFINITY).is_valid());
        assert!(!Coordinate::new(91.0, 29.0).is_valid());
        assert!(!Coordinate::new(41.0, -180.5).is_valid());
    }
}
