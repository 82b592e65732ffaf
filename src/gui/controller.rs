use kiss3d::event::{Action, WindowEvent};
use nalgebra::Point2;

use super::LoopState;
use crate::model::Scene;

/// The only inputs the scene cares about.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Quit,
    /// Mouse press at a screen position.
    PointerPress(Point2<f64>),
    Other,
}

pub struct InputRouter {
    // Button events don't carry a position, so we track the cursor ourselves.
    // Stored in logical pixels, same as the scene.
    cursor: Option<Point2<f64>>,
    // Cursor events arrive in physical pixels
    scale_factor: f64,
}

impl InputRouter {
    pub fn new() -> Self {
        InputRouter {
            cursor: None,
            scale_factor: 1.0,
        }
    }

    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        assert!(
            scale_factor > 0.0,
            "Scale factor must be positive, got {}",
            scale_factor
        );
        self.scale_factor = scale_factor;
    }

    pub fn translate(&mut self, event: &WindowEvent) -> InputEvent {
        match *event {
            WindowEvent::Close => InputEvent::Quit,
            WindowEvent::CursorPos(x, y, _) => {
                let scale = self.scale_factor;
                self.cursor = Some(Point2::new(x / scale, y / scale));
                InputEvent::Other
            }
            WindowEvent::MouseButton(_, Action::Press, _) => match self.cursor {
                Some(pt) => InputEvent::PointerPress(pt),
                None => InputEvent::Other,
            },
            _ => InputEvent::Other,
        }
    }

    pub fn route(&self, event: InputEvent, scene: &mut Scene) -> LoopState {
        match event {
            InputEvent::Quit => LoopState::Terminated,
            InputEvent::PointerPress(pt) => {
                scene.select_at(&pt);
                LoopState::Running
            }
            InputEvent::Other => LoopState::Running,
        }
    }

    pub fn process_event(&mut self, event: &WindowEvent, scene: &mut Scene) -> LoopState {
        let event = self.translate(event);
        self.route(event, scene)
    }
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}
