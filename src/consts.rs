use nalgebra::{Point2, Point3};

// Window
pub const WINDOW_TITLE: &str = "Solar System";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;
pub const FPS: u64 = 60;

// Sun, sitting in the middle of the window
pub const SUN_NAME: &str = "Sun";
pub const SUN_RADIUS: f64 = 30.0;
pub const SUN_X: f64 = (WINDOW_WIDTH / 2) as f64;
pub const SUN_Y: f64 = (WINDOW_HEIGHT / 2) as f64;

/// Pixels per astronomical unit.
pub const AU: f64 = 100.0;

// Text layout, in screen pixels
pub const TEXT_SIZE: f32 = 20.0;
pub const SUN_TEXT_POS: (f64, f64) = (20.0, 20.0);
pub const SELECTION_TEXT_POS: (f64, f64) = (20.0, WINDOW_HEIGHT as f64 - 30.0);
pub const LABEL_GAP: f64 = 5.0;
pub const LABEL_RISE: f64 = 10.0;

/// Number of straight segments used to approximate an orbit guide.
pub const ORBIT_SEGMENTS: usize = 128;

/// An 8-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Converts to the normalized form kiss3d expects.
    pub fn to_point(self) -> Point3<f32> {
        let Rgb(r, g, b) = self;
        Point3::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
}

// Palette
pub const BLACK: Rgb = Rgb(0, 0, 0);
pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const YELLOW: Rgb = Rgb(255, 255, 0);
pub const BLUE: Rgb = Rgb(0, 0, 255);
pub const RED: Rgb = Rgb(255, 0, 0);
pub const GRAY: Rgb = Rgb(80, 80, 80);
pub const GREEN: Rgb = Rgb(0, 255, 0);
pub const ORANGE: Rgb = Rgb(255, 165, 0);
pub const LIGHT_BLUE: Rgb = Rgb(173, 216, 230);
pub const DARK_RED: Rgb = Rgb(139, 0, 0);

pub fn sun_center() -> Point2<f64> {
    Point2::new(SUN_X, SUN_Y)
}
