//! Package zone implements severity-prioritized heat zone clustering on (lat, lon)

/// Coordinate is a geographic position in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate {
            latitude,
            longitude,
        }
    }

    /// Checks that both components are finite and inside the WGS84 ranges
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Calculates the planar centroid (arithmetic mean of latitude and of longitude)
///
/// # Panics
///
/// Panics if `coords` is empty
pub fn centroid<I>(coords: I) -> Coordinate
where
    I: IntoIterator<Item = Coordinate>,
{
    let (center, _, _) = centroid_and_bounds(coords);
    center
}

/// Calculates center and bounds of a set of coordinates
///
/// Returns `(center, min, max)` where:
/// - `center` is the planar centroid
/// - `min` is the south-west corner
/// - `max` is the north-east corner
///
/// # Panics
///
/// Panics if `coords` is empty
pub fn centroid_and_bounds<I>(coords: I) -> (Coordinate, Coordinate, Coordinate)
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut min = Coordinate::new(90.0, 180.0);
    let mut max = Coordinate::new(-90.0, -180.0);
    let mut sum = Coordinate::new(0.0, 0.0);
    let mut n = 0usize;

    for c in coords {
        sum.latitude += c.latitude;
        sum.longitude += c.longitude;

        min.latitude = min.latitude.min(c.latitude);
        min.longitude = min.longitude.min(c.longitude);
        max.latitude = max.latitude.max(c.latitude);
        max.longitude = max.longitude.max(c.longitude);

        n += 1;
    }

    if n == 0 {
        panic!("empty coordinate set");
    }

    let center = Coordinate::new(sum.latitude / n as f64, sum.longitude / n as f64);
    (center, min, max)
}
