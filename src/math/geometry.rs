use nalgebra::{Point2, Vector2};

/// Wraps an angle in degrees into [0, 360).
pub fn wrap_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

/// The point `radius` away from `center`, at `degrees` measured from the +x axis
/// towards +y. In screen space +y points down, so this goes clockwise.
pub fn point_on_circle(center: &Point2<f64>, radius: f64, degrees: f64) -> Point2<f64> {
    let theta = degrees.to_radians();
    center + radius * Vector2::new(theta.cos(), theta.sin())
}

pub fn path_iter_parametric<F, S, P>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = P>
where
    F: Fn(S) -> P,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    assert!(
        num_segments >= 1,
        "Must have at least one segment, num_segments was {}",
        num_segments
    );
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| convert(i) / convert(num_segments))
        // u ranges from 0 to 1 (inclusive)
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

/// Closed polyline around a circle; the first and last points coincide.
pub fn circle_path(
    center: Point2<f64>,
    radius: f64,
    num_segments: usize,
) -> impl Iterator<Item = Point2<f64>> {
    path_iter_parametric(
        move |t| point_on_circle(&center, radius, t),
        0.0,
        360.0,
        num_segments,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_wrap_degrees() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        assert_eq!(wrap_degrees(-90.0), 270.0);

        // Would round to 360 without the guard
        let tiny = wrap_degrees(-1e-20);
        assert!((0.0..360.0).contains(&tiny), "{} out of range", tiny);
    }

    #[test]
    fn test_point_on_circle() {
        let center = Point2::new(640.0, 360.0);
        assert_relative_eq!(
            point_on_circle(&center, 100.0, 0.0),
            Point2::new(740.0, 360.0)
        );
        assert_relative_eq!(
            point_on_circle(&center, 100.0, 90.0),
            Point2::new(640.0, 460.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            point_on_circle(&center, 100.0, 180.0),
            Point2::new(540.0, 360.0),
            epsilon = 1e-12
        );
        assert_relative_eq!(point_on_circle(&center, 0.0, 123.0), center);
    }

    #[test]
    fn test_circle_path() {
        let center = Point2::new(10.0, -5.0);
        let points: Vec<_> = circle_path(center, 3.0, 16).collect();

        assert_eq!(points.len(), 17);
        assert_abs_diff_eq!(points[0], points[16], epsilon = 1e-12);
        for pt in points {
            assert_relative_eq!(nalgebra::distance(&pt, &center), 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    #[should_panic]
    fn test_path_needs_a_segment() {
        let _ = path_iter_parametric(|t: f64| t, 0.0, 1.0, 0);
    }
}
