use std::fmt;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Both values are decimal degrees stored as `f64`. No range checking is performed.
///
/// # Examples
///
/// ```
/// use axis_snapshot::LatLon;
///
/// let raleigh = LatLon(35.800783, -78.645814);
/// assert_eq!(raleigh.latitude(), 35.800783);
/// assert_eq!(raleigh.longitude(), -78.645814);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn latitude(&self) -> f64 {
        self.0
    }

    pub fn longitude(&self) -> f64 {
        self.1
    }
}

impl fmt::Display for LatLon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}
