//! Signed axis projection
//!
//! Collapses a 2-D point population onto a 1-D coordinate along a directed
//! axis, so the 1-D estimator can profile the population along any chosen
//! bearing. The projection is direction-only: values are in the same units as
//! the axis radius, centered at the axis origin, and may exceed ±radius for
//! points far along the bearing.

use geodensity_core::{Error, Result};

/// Axis origin used by the reference visualization (lon/lat)
pub const REFERENCE_AXIS_ORIGIN: [f64; 2] = [115.91, 31.38];

/// Axis bearing used by the reference visualization, in degrees
pub const REFERENCE_AXIS_ANGLE_DEG: f64 = 27.0;

/// Axis radius used by the reference visualization
pub const REFERENCE_AXIS_RADIUS: f64 = 10.0;

/// Compute the tip of an axis of the given bearing and radius
///
/// `origin + radius * (cos θ, sin θ)` with `θ = angle_deg / 360 * 2π`.
pub fn axis_endpoint(origin: [f64; 2], angle_deg: f64, radius: f64) -> [f64; 2] {
    let theta = angle_deg / 360.0 * std::f64::consts::TAU;
    [
        origin[0] + radius * theta.cos(),
        origin[1] + radius * theta.sin(),
    ]
}

/// Project 2-D observations onto the directed axis from `origin` toward
/// `direction_point`
///
/// For each observation `p` the result is `((p - origin) · d) / radius` with
/// `d = direction_point - origin`; by construction `|d| == radius`, so the
/// projection is in radius units with its sign telling which side of the
/// origin the point falls on. Output order matches observation order.
pub fn project(
    observations: &[[f64; 2]],
    origin: [f64; 2],
    direction_point: [f64; 2],
    radius: f64,
) -> Result<Vec<f64>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(Error::InvalidParameter(format!(
            "Projection radius {radius} must be positive and finite"
        )));
    }
    if !origin.iter().chain(direction_point.iter()).all(|v| v.is_finite()) {
        return Err(Error::non_finite("projection axis"));
    }

    let dx = direction_point[0] - origin[0];
    let dy = direction_point[1] - origin[1];

    Ok(observations
        .iter()
        .map(|p| {
            let pdx = p[0] - origin[0];
            let pdy = p[1] - origin[1];
            (pdx * dx + pdy * dy) / radius
        })
        .collect())
}

/// Project observations onto an axis given by bearing and radius
///
/// Convenience wrapper combining [`axis_endpoint`] and [`project`], matching
/// how the visualization specifies its axis (a fixed origin plus an
/// interactive angle/length).
pub fn project_along_bearing(
    observations: &[[f64; 2]],
    origin: [f64; 2],
    angle_deg: f64,
    radius: f64,
) -> Result<Vec<f64>> {
    if !angle_deg.is_finite() {
        return Err(Error::non_finite("projection bearing"));
    }
    let tip = axis_endpoint(origin, angle_deg, radius);
    project(observations, origin, tip, radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_projection_worked_examples() {
        let origin = [0.0, 0.0];
        let tip = [10.0, 0.0];
        let projected = project(&[[5.0, 0.0], [0.0, 5.0], [-5.0, 0.0]], origin, tip, 10.0).unwrap();
        assert_relative_eq!(projected[0], 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(projected[1], 0.0, epsilon = 1e-12);
        assert_relative_eq!(projected[2], -5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projection_is_unbounded() {
        // Points beyond the axis tip project past the radius. Intentional.
        let projected = project(&[[25.0, 0.0]], [0.0, 0.0], [10.0, 0.0], 10.0).unwrap();
        assert_relative_eq!(projected[0], 25.0, epsilon = 1e-12);
    }

    #[test]
    fn test_projection_preserves_order_and_length() {
        let obs = [[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]];
        let projected = project(&obs, [0.0, 0.0], [0.0, 10.0], 10.0).unwrap();
        assert_eq!(projected.len(), 3);
        // Vertical axis: the projection is just the y coordinate.
        assert_eq!(projected, vec![2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_projection_empty_observations() {
        let projected = project(&[], [0.0, 0.0], [10.0, 0.0], 10.0).unwrap();
        assert!(projected.is_empty());
    }

    #[test]
    fn test_projection_rejects_bad_axis() {
        assert!(project(&[], [0.0, 0.0], [10.0, 0.0], 0.0).is_err());
        assert!(project(&[], [0.0, 0.0], [10.0, 0.0], -1.0).is_err());
        assert!(project(&[], [f64::NAN, 0.0], [10.0, 0.0], 10.0).is_err());
        assert!(project(&[], [0.0, 0.0], [f64::INFINITY, 0.0], 10.0).is_err());
    }

    #[test]
    fn test_axis_endpoint_cardinal_directions() {
        let tip = axis_endpoint([0.0, 0.0], 0.0, 10.0);
        assert_relative_eq!(tip[0], 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tip[1], 0.0, epsilon = 1e-12);

        let tip = axis_endpoint([0.0, 0.0], 90.0, 10.0);
        assert_abs_diff_eq!(tip[0], 0.0, epsilon = 1e-12);
        assert_relative_eq!(tip[1], 10.0, epsilon = 1e-12);

        let tip = axis_endpoint([1.0, 1.0], 180.0, 2.0);
        assert_relative_eq!(tip[0], -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tip[1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_project_along_bearing_matches_explicit_tip() {
        let obs = [[116.5, 32.0], [114.2, 30.9], [120.0, 28.4]];
        let origin = REFERENCE_AXIS_ORIGIN;
        let angle = REFERENCE_AXIS_ANGLE_DEG;
        let radius = REFERENCE_AXIS_RADIUS;

        let via_bearing = project_along_bearing(&obs, origin, angle, radius).unwrap();
        let via_tip = project(&obs, origin, axis_endpoint(origin, angle, radius), radius).unwrap();
        assert_eq!(via_bearing, via_tip);
    }
}
