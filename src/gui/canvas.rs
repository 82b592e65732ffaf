use nalgebra::Point2;

use crate::consts::Rgb;

/// Immediate-mode drawing surface. Coordinates are screen pixels: origin at the
/// top-left corner, y pointing down.
pub trait Canvas {
    fn clear(&mut self, color: Rgb);
    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: Rgb);
    /// A 1px circle outline.
    fn stroke_circle(&mut self, center: Point2<f64>, radius: f64, color: Rgb);
    /// A 1px line.
    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb);
    /// `at` is the top-left corner of the text.
    fn text(&mut self, text: &str, at: Point2<f64>, color: Rgb);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Clear(Rgb),
    FillCircle {
        center: Point2<f64>,
        radius: f64,
        color: Rgb,
    },
    StrokeCircle {
        center: Point2<f64>,
        radius: f64,
        color: Rgb,
    },
    Line {
        from: Point2<f64>,
        to: Point2<f64>,
        color: Rgb,
    },
    Text {
        text: String,
        at: Point2<f64>,
        color: Rgb,
    },
}

/// A canvas that just remembers what was drawn on it, in order.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Canvas for DrawList {
    fn clear(&mut self, color: Rgb) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_circle(&mut self, center: Point2<f64>, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point2<f64>, radius: f64, color: Rgb) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            color,
        });
    }

    fn line(&mut self, from: Point2<f64>, to: Point2<f64>, color: Rgb) {
        self.commands.push(DrawCommand::Line { from, to, color });
    }

    fn text(&mut self, text: &str, at: Point2<f64>, color: Rgb) {
        self.commands.push(DrawCommand::Text {
            text: text.to_owned(),
            at,
            color,
        });
    }
}
