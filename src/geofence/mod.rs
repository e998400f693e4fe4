mod distance;
mod fence;

pub use distance::distance_meters;
pub use fence::GeofenceSpec;
