use crate::domain::GeoCoordinate;
use crate::geofence::distance_meters;
use std::fmt::{Display, Formatter};

/// Returns whether `distance` lies inside a fence of `radius_meters`, the boundary itself counts as inside.
pub fn is_within_fence(distance: f64, radius_meters: f64) -> bool {
    distance <= radius_meters
}

/// A circular fence around `center`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeofenceSpec {
    center: GeoCoordinate,
    radius_meters: f64,
}

impl GeofenceSpec {
    pub fn new(center: GeoCoordinate, radius_meters: f64) -> Self {
        GeofenceSpec { center, radius_meters }
    }

    pub fn check(&self, location: GeoCoordinate) -> FenceCheck {
        let distance_meters = distance_meters(location, self.center);
        FenceCheck {
            distance_meters,
            radius_meters: self.radius_meters,
            is_valid: is_within_fence(distance_meters, self.radius_meters),
        }
    }
}

/// Outcome of checking a single location against a fence.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FenceCheck {
    distance_meters: f64,
    radius_meters: f64,
    is_valid: bool,
}

impl FenceCheck {
    pub fn distance_meters(&self) -> f64 {
        self.distance_meters
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// The distance rounded to the nearest meter. NaN rounds to 0.
    pub fn rounded_distance(&self) -> u64 {
        self.distance_meters.round() as u64
    }
}

impl Display for FenceCheck {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            write!(f, "within {}m of the class location ({}m away)", self.radius_meters, self.rounded_distance())
        } else {
            write!(
                f,
                "you must be within {}m of the class location, you are {}m away",
                self.radius_meters,
                self.rounded_distance()
            )
        }
    }
}
