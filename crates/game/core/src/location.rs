//! Ambient player position.

/// Geographic position other collaborators attach to their requests.
///
/// Setting it has no synchronization side effect.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }
}
