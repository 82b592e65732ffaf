use std::any::Any;
use std::panic;
use std::rc::Rc;

use color_eyre::eyre::{self, eyre};
use kiss3d::event::EventManager;
use kiss3d::scene::PlanarSceneNode;
use kiss3d::text::Font;
use kiss3d::window::Window;
use nalgebra::{Point2, Translation2};
use tracing::info;

use super::canvas::Canvas;
use crate::consts::{Rgb, ORBIT_SEGMENTS, TEXT_SIZE};
use crate::math::geometry::circle_path;

/// Owns the window and everything needed to draw into it.
pub struct RenderContext {
    window: Window,
    font: Rc<Font>,
    width: f64,
    height: f64,
    // kiss3d only draws filled shapes as scene nodes, so we keep a pool of unit
    // discs and hand them out in draw order each frame.
    discs: Vec<PlanarSceneNode>,
    discs_used: usize,
}

impl RenderContext {
    pub fn new(title: &str, width: u32, height: u32) -> eyre::Result<Self> {
        let owned_title = title.to_owned();
        // kiss3d panics instead of returning an error when there's no display
        let mut window =
            catch_quietly(move || Window::new_with_size(&owned_title, width, height)).map_err(
                |payload| {
                    eyre!(
                        "Could not open a {}x{} window: {}",
                        width,
                        height,
                        panic_message(&*payload)
                    )
                },
            )?;
        // FrameClock does the pacing
        window.set_framerate_limit(None);
        info!(title, width, height, "opened window");

        Ok(RenderContext {
            window,
            font: Font::default(),
            width: width as f64,
            height: height as f64,
            discs: vec![],
            discs_used: 0,
        })
    }

    /// Physical pixels per logical pixel.
    pub fn scale_factor(&self) -> f64 {
        self.window.scale_factor()
    }

    /// Events received since the last call to `present`.
    pub fn events(&self) -> EventManager {
        self.window.events()
    }

    /// Shows the frame. Returns false once the window has been closed.
    pub fn present(&mut self) -> bool {
        for disc in self.discs[self.discs_used..].iter_mut() {
            disc.set_visible(false);
        }
        self.discs_used = 0;
        self.window.render()
    }

    fn to_planar(&self, pt: Point2<f64>) -> Point2<f32> {
        screen_to_planar(pt, self.width, self.height)
    }
}

/// kiss3d's planar camera puts the origin at the middle of the window with y
/// pointing up.
pub fn screen_to_planar(pt: Point2<f64>, width: f64, height: f64) -> Point2<f32> {
    Point2::new((pt.x - width / 2.0) as f32, (height / 2.0 - pt.y) as f32)
}

/// Like `catch_unwind`, but without the panic hook reporting the panic first;
/// the caller reports it instead.
fn catch_quietly<F, T>(f: F) -> Result<T, Box<dyn Any + Send>>
where
    F: FnOnce() -> T + panic::UnwindSafe,
{
    let hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let result = panic::catch_unwind(f);
    panic::set_hook(hook);
    result
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown error"
    }
}

impl Canvas for RenderContext {
    fn clear(&mut self, color: Rgb) {
        let color = color.to_point();
        self.window.set_background_color(color.x, color.y, color.z);
    }

    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: Rgb) {
        let center = self.to_planar(center);
        if self.discs_used == self.discs.len() {
            self.discs.push(self.window.add_circle(1.0));
        }
        let disc = &mut self.discs[self.discs_used];
        self.discs_used += 1;

        let color = color.to_point();
        disc.set_color(color.x, color.y, color.z);
        disc.set_local_scale(radius as f32, radius as f32);
        disc.set_local_translation(Translation2::new(center.x, center.y));
        disc.set_visible(true);
    }

    fn stroke_circle(&mut self, center: Point2<f64>, radius: f64, color: Rgb) {
        let color = color.to_point();
        let (width, height) = (self.width, self.height);
        let mut prev_pt = None;
        for pt in circle_path(center, radius, ORBIT_SEGMENTS) {
            let pt = screen_to_planar(pt, width, height);
            if let Some(prev_pt) = prev_pt {
                self.window.draw_planar_line(&prev_pt, &pt, &color);
            }
            prev_pt = Some(pt);
        }
    }

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb) {
        let (from, to) = (self.to_planar(from), self.to_planar(to));
        self.window
            .draw_planar_line(&from, &to, &color.to_point());
    }

    fn text(&mut self, text: &str, at: Point2<f64>, color: Rgb) {
        // Text is laid out in physical pixels, everything else in logical ones
        let scale = self.window.scale_factor() as f32;
        let at = Point2::new(at.x as f32 * scale, at.y as f32 * scale);
        self.window
            .draw_text(text, &at, TEXT_SIZE * scale, &self.font, &color.to_point());
    }
}
