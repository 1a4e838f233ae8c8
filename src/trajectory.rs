//! Approach trajectory sampling and globe coordinate helpers.
//!
//! The path is purely geometric: a straight line along a fixed approach
//! direction, ending at the strike point on the globe, with a quadratic
//! bias that bends the early part of the path outward for animation.
//! Positions use the scene frame of the globe (km, y-up).

use bevy::math::DVec3;

use crate::types::{
    AsteroidParameters, DEG_TO_RAD, EARTH_MASS, EARTH_RADIUS_KM, G, ImpactError, ImpactLocation,
    RAD_TO_DEG,
};

/// Default number of segments in an approach path.
pub const DEFAULT_TRAJECTORY_STEPS: usize = 100;

/// Peak outward bias, as a fraction of the start distance.
const CURVE_BIAS: f64 = 0.2;

/// One sample along the approach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    /// Scene position (km).
    pub position: DVec3,
    /// Distance from Earth's center along the interpolation (km).
    pub distance_km: f64,
    /// Progress from start (0) to impact (1).
    pub normalized_time: f64,
}

/// A sampled approach path.
///
/// Cheap to copy. Every call to [`Trajectory::points`] restarts the
/// sequence from the first sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Trajectory {
    /// Strike point on the surface (km).
    pub impact_point: DVec3,
    /// Unit vector from the strike point back toward the incoming body.
    pub approach_direction: DVec3,
    /// Distance at which the path starts (km).
    pub start_distance_km: f64,
    /// Number of segments; the path has `steps + 1` samples.
    pub steps: usize,
}

impl Trajectory {
    /// Sample at index `i` (0..=steps).
    pub fn point(&self, i: usize) -> TrajectoryPoint {
        let t = i as f64 / self.steps as f64;
        let distance_km = self.start_distance_km * (1.0 - t) + EARTH_RADIUS_KM * t;
        let bias = (1.0 - t).powi(2) * CURVE_BIAS;
        let offset = distance_km - EARTH_RADIUS_KM + bias * self.start_distance_km;

        TrajectoryPoint {
            position: self.impact_point + self.approach_direction * offset,
            distance_km,
            normalized_time: t,
        }
    }

    /// Number of samples in the path.
    pub fn len(&self) -> usize {
        self.steps + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lazily iterate the samples from start to impact.
    pub fn points(&self) -> TrajectoryPoints {
        TrajectoryPoints {
            trajectory: *self,
            front: 0,
            back: self.len(),
        }
    }
}

impl IntoIterator for &Trajectory {
    type Item = TrajectoryPoint;
    type IntoIter = TrajectoryPoints;

    fn into_iter(self) -> Self::IntoIter {
        self.points()
    }
}

/// Iterator over the samples of a [`Trajectory`].
#[derive(Clone, Debug)]
pub struct TrajectoryPoints {
    trajectory: Trajectory,
    front: usize,
    back: usize,
}

impl Iterator for TrajectoryPoints {
    type Item = TrajectoryPoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let point = self.trajectory.point(self.front);
        self.front += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for TrajectoryPoints {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.trajectory.point(self.back))
    }
}

impl ExactSizeIterator for TrajectoryPoints {}

/// Unit approach direction for an azimuth and elevation angle (degrees).
pub fn approach_direction(azimuth_deg: f64, angle_deg: f64) -> DVec3 {
    let azimuth = azimuth_deg * DEG_TO_RAD;
    let angle = angle_deg * DEG_TO_RAD;
    DVec3::new(
        azimuth.cos() * angle.sin(),
        azimuth.sin() * angle.sin(),
        angle.cos(),
    )
    .normalize()
}

/// Build the approach path toward `location`.
///
/// Returns an error if the inputs are out of range or `steps` is zero.
pub fn generate_trajectory(
    asteroid: &AsteroidParameters,
    location: &ImpactLocation,
    steps: usize,
) -> Result<Trajectory, ImpactError> {
    asteroid.validate()?;
    location.validate()?;
    if steps == 0 {
        return Err(ImpactError::InvalidSteps);
    }

    Ok(Trajectory {
        impact_point: location.to_cartesian(),
        approach_direction: approach_direction(asteroid.azimuth_deg, asteroid.impact_angle_deg),
        start_distance_km: asteroid.start_distance_km,
        steps,
    })
}

/// Build the approach path with the default sample count.
pub fn compute_trajectory(
    asteroid: &AsteroidParameters,
    location: &ImpactLocation,
) -> Result<Trajectory, ImpactError> {
    generate_trajectory(asteroid, location, DEFAULT_TRAJECTORY_STEPS)
}

/// Convert latitude/longitude (degrees) to a point on a sphere.
///
/// Uses the globe's y-up frame: the north pole is `+y`, and longitude
/// −180° lies on `+x`.
pub fn lat_lon_to_cartesian(latitude_deg: f64, longitude_deg: f64, radius: f64) -> DVec3 {
    let phi = (90.0 - latitude_deg) * DEG_TO_RAD;
    let theta = (longitude_deg + 180.0) * DEG_TO_RAD;

    DVec3::new(
        -(radius * phi.sin() * theta.cos()),
        radius * phi.cos(),
        radius * phi.sin() * theta.sin(),
    )
}

/// Inverse of [`lat_lon_to_cartesian`]. Returns `(latitude, longitude)` in degrees.
///
/// Returns `None` for the origin, which has no direction.
pub fn cartesian_to_lat_lon(point: DVec3) -> Option<(f64, f64)> {
    let radius = point.length();
    if radius == 0.0 {
        return None;
    }
    let latitude = 90.0 - (point.y / radius).clamp(-1.0, 1.0).acos() * RAD_TO_DEG;
    let mut longitude = point.z.atan2(-point.x) * RAD_TO_DEG - 180.0;
    if longitude < -180.0 {
        longitude += 360.0;
    }
    Some((latitude, longitude))
}

/// Circular orbital speed at `altitude_km` above the surface (km/s).
pub fn orbital_velocity_km_s(altitude_km: f64) -> f64 {
    let radius_m = (EARTH_RADIUS_KM + altitude_km) * 1000.0;
    (G * EARTH_MASS / radius_m).sqrt() / 1000.0
}
