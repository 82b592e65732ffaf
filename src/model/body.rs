use nalgebra::Point2;

use crate::consts::{Rgb, GREEN, LABEL_GAP, LABEL_RISE, WHITE};
use crate::gui::canvas::Canvas;
use crate::math::geometry::{point_on_circle, wrap_degrees};

/// Index of a body within its scene.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct BodyID(pub usize);

// All the immutable info about a body
#[derive(Debug, Clone)]
pub struct BodyInfo {
    pub name: String,
    /// Display radius, in pixels.
    pub radius: f64,
    pub color: Rgb,
    /// Distance from the sun's center, in pixels.
    pub distance: f64,
    /// Degrees per frame.
    pub speed: f64,
}

/// A body on a fixed circular orbit, moving at a constant angular speed.
#[derive(Debug, Clone)]
pub struct OrbitingBody {
    pub info: BodyInfo,
    center: Point2<f64>,
    // The angle is recomputed from the frame count rather than accumulated,
    // so it doesn't drift.
    frames: u64,
    angle: f64,
    position: Point2<f64>,
}

impl OrbitingBody {
    pub fn new(info: BodyInfo, center: Point2<f64>) -> Self {
        assert!(
            info.radius > 0.0,
            "{} must have a positive radius, got {}",
            info.name,
            info.radius
        );
        assert!(
            info.distance >= 0.0,
            "{} must have a non-negative orbital distance, got {}",
            info.name,
            info.distance
        );

        let position = point_on_circle(&center, info.distance, 0.0);
        OrbitingBody {
            info,
            center,
            frames: 0,
            angle: 0.0,
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// Current orbital angle in degrees, always in [0, 360).
    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn position(&self) -> Point2<f64> {
        self.position
    }

    /// The point this body orbits.
    pub fn center(&self) -> Point2<f64> {
        self.center
    }

    pub fn frames_advanced(&self) -> u64 {
        self.frames
    }

    /// Number of frames for one full revolution, or None if the body doesn't move.
    pub fn period_frames(&self) -> Option<f64> {
        if self.info.speed == 0.0 {
            None
        } else {
            Some(360.0 / self.info.speed.abs())
        }
    }

    pub fn advance(&mut self) {
        self.frames += 1;
        self.angle = wrap_degrees(self.frames as f64 * self.info.speed);
        self.position = point_on_circle(&self.center, self.info.distance, self.angle);
    }

    /// Whether `point` lies on or inside the body's disc.
    pub fn hit_test(&self, point: &Point2<f64>) -> bool {
        nalgebra::distance(&self.position, point) <= self.info.radius
    }

    pub fn render(&self, canvas: &mut dyn Canvas) {
        canvas.stroke_circle(self.center, self.info.distance, GREEN);
        canvas.line(self.position, self.center, WHITE);
        canvas.fill_circle(self.position, self.info.radius, self.info.color);

        let label_x = self.position.x + self.info.radius + LABEL_GAP;
        canvas.text(
            &self.speed_label(),
            Point2::new(label_x, self.position.y - LABEL_RISE),
            WHITE,
        );
        canvas.text(
            &self.angle_label(),
            Point2::new(label_x, self.position.y + LABEL_RISE),
            WHITE,
        );
    }

    pub fn speed_label(&self) -> String {
        format!("{:.2} deg/frame", self.info.speed)
    }

    pub fn angle_label(&self) -> String {
        format!("{:.2}°", self.angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::consts::{sun_center, BLUE};
    use crate::gui::canvas::{DrawCommand, DrawList};

    fn earth() -> OrbitingBody {
        OrbitingBody::new(
            BodyInfo {
                name: "Earth".to_owned(),
                radius: 10.0,
                color: BLUE,
                distance: 100.0,
                speed: 0.1,
            },
            sun_center(),
        )
    }

    fn assert_position_consistent(body: &OrbitingBody) {
        let theta = body.angle().to_radians();
        let expected = Point2::new(
            body.center().x + body.info.distance * theta.cos(),
            body.center().y + body.info.distance * theta.sin(),
        );
        assert_relative_eq!(body.position(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_starts_at_zero() {
        let body = earth();
        assert_eq!(body.angle(), 0.0);
        assert_eq!(body.position(), Point2::new(740.0, 360.0));
        assert_position_consistent(&body);
    }

    #[test]
    fn test_angle_wraps() {
        let mut body = OrbitingBody::new(
            BodyInfo {
                name: "Fast".to_owned(),
                radius: 4.0,
                color: BLUE,
                distance: 50.0,
                speed: 7.3,
            },
            sun_center(),
        );

        for n in 1..=500u64 {
            body.advance();
            let expected = (n as f64 * 7.3) % 360.0;
            assert_relative_eq!(body.angle(), expected, epsilon = 1e-9);
            assert!((0.0..360.0).contains(&body.angle()));
            assert_position_consistent(&body);
        }
        assert_eq!(body.frames_advanced(), 500);
    }

    #[test]
    fn test_earth_full_revolution() {
        let mut body = earth();
        for _ in 0..3600 {
            body.advance();
        }
        assert_eq!(body.angle(), 0.0);
        assert_relative_eq!(body.position(), Point2::new(740.0, 360.0));
    }

    #[test]
    fn test_hit_test_boundary() {
        let body = earth();
        // Body sits at (740, 360) with radius 10
        assert!(body.hit_test(&Point2::new(740.0, 360.0)));
        assert!(body.hit_test(&Point2::new(750.0, 360.0)));
        assert!(body.hit_test(&Point2::new(740.0, 350.0)));
        assert!(!body.hit_test(&Point2::new(750.0 + 1e-9, 360.0)));
        assert!(!body.hit_test(&Point2::new(748.0, 368.0)));
    }

    #[test]
    fn test_period() {
        assert_relative_eq!(earth().period_frames().unwrap(), 3600.0);

        let mut still = earth();
        still.info.speed = 0.0;
        assert_eq!(still.period_frames(), None);
    }

    #[test]
    fn test_render() {
        let mut body = earth();
        for _ in 0..900 {
            body.advance();
        }

        let mut canvas = DrawList::new();
        body.render(&mut canvas);

        let position = body.position();
        let commands = canvas.commands();
        assert_eq!(commands.len(), 5);
        assert_eq!(
            commands[0],
            DrawCommand::StrokeCircle {
                center: sun_center(),
                radius: 100.0,
                color: GREEN,
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::Line {
                from: position,
                to: sun_center(),
                color: WHITE,
            }
        );
        assert_eq!(
            commands[2],
            DrawCommand::FillCircle {
                center: position,
                radius: 10.0,
                color: BLUE,
            }
        );
        assert_eq!(
            commands[3],
            DrawCommand::Text {
                text: "0.10 deg/frame".to_owned(),
                at: Point2::new(position.x + 10.0 + 5.0, position.y - 10.0),
                color: WHITE,
            }
        );
        assert_eq!(
            commands[4],
            DrawCommand::Text {
                text: "90.00°".to_owned(),
                at: Point2::new(position.x + 10.0 + 5.0, position.y + 10.0),
                color: WHITE,
            }
        );

        // Rendering leaves the body alone
        assert_eq!(body.frames_advanced(), 900);
        assert_eq!(body.position(), position);
    }

    #[test]
    #[should_panic]
    fn test_rejects_zero_radius() {
        let mut info = earth().info;
        info.radius = 0.0;
        let _ = OrbitingBody::new(info, sun_center());
    }
}
