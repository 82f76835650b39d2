#[cfg(test)]
mod tests {
    use crate::zone::Coordinate;
    use crate::zone::distance::{DEGREE_RAD, EARTH_R_M, distance_haversine};

    #[test]
    fn test_distance_identical_points() {
        let p = Coordinate::new(41.0095, 28.9740);
        assert_eq!(distance_haversine(&p, &p), 0.0);
    }

    #[test]
    fn test_distance_one_degree_of_latitude() {
        let p1 = Coordinate::new(41.0, 29.0);
        let p2 = Coordinate::new(42.0, 29.0);
        let expected = EARTH_R_M * DEGREE_RAD;
        assert!((distance_haversine(&p1, &p2) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_distance_city_scale() {
        // Two reports on Atatürk Caddesi / İnönü Bulvarı
        let p1 = Coordinate::new(41.0095, 28.9740);
        let p2 = Coordinate::new(41.0070, 28.9690);
        let actual1 = distance_haversine(&p1, &p2);
        let actual2 = distance_haversine(&p2, &p1);
        assert!((actual1 - 503.2857174721892).abs() < 1e-6);
        assert!((actual1 - actual2).abs() < 1e-9);
    }

    #[test]
    fn test_distance_across_longitude() {
        // At the equator a degree of longitude is as long as a degree of latitude
        let p1 = Coordinate::new(0.0, 10.0);
        let p2 = Coordinate::new(0.0, 11.0);
        assert!((distance_haversine(&p1, &p2) - EARTH_R_M * DEGREE_RAD).abs() < 1e-6);
    }
}
