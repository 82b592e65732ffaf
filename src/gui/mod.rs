use kiss3d::event::{EventManager, WindowEvent};
use tracing::info;

use self::canvas::Canvas;
use self::clock::FrameClock;
use self::controller::InputRouter;
use crate::consts::FPS;
use crate::model::Scene;

pub mod canvas;
pub mod clock;
pub mod controller;
pub mod render_context;

pub use self::render_context::RenderContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminated,
}

pub struct FrameLoop {
    scene: Scene,
    router: InputRouter,
    clock: FrameClock,
    state: LoopState,
}

impl FrameLoop {
    pub fn new(scene: Scene) -> Self {
        FrameLoop {
            scene,
            router: InputRouter::new(),
            clock: FrameClock::new(FPS),
            state: LoopState::Running,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn run(&mut self, context: &mut RenderContext) {
        info!("starting frame loop");
        while self.state == LoopState::Running {
            self.step(context);
        }
        info!(
            frames = self.clock.frames(),
            fps = self.clock.fps(),
            "frame loop finished"
        );
    }

    fn step(&mut self, context: &mut RenderContext) {
        self.router.set_scale_factor(context.scale_factor());
        let mut events = context.events();
        self.process_user_input(&mut events);
        self.scene.update_all();
        self.scene.render_all(context);

        if !context.present() {
            self.state = LoopState::Terminated;
        }
        self.clock.wait();
    }

    fn process_user_input(&mut self, events: &mut EventManager) {
        for mut event in events.iter() {
            if !keeps_default_handling(&event.value) {
                event.inhibited = true;
            }
            self.handle_event(&event.value);
        }
    }

    /// Input, update and draw for one frame, everything but presenting and
    /// pacing. A quit only stops the loop before the next frame.
    pub fn advance_frame<I>(&mut self, events: I, canvas: &mut dyn Canvas)
    where
        I: IntoIterator<Item = WindowEvent>,
    {
        self.handle_events(events);
        self.scene.update_all();
        self.scene.render_all(canvas);
    }

    fn handle_events<I>(&mut self, events: I)
    where
        I: IntoIterator<Item = WindowEvent>,
    {
        for event in events {
            self.handle_event(&event);
        }
    }

    fn handle_event(&mut self, event: &WindowEvent) {
        if self.router.process_event(event, &mut self.scene) == LoopState::Terminated
            && self.state == LoopState::Running
        {
            info!("quit requested");
            self.state = LoopState::Terminated;
        }
    }
}

/// Whether kiss3d should still apply its own handling to `event`. Only closing
/// the window may do anything; otherwise Escape would quit and the mouse would
/// move the planar camera.
pub fn keeps_default_handling(event: &WindowEvent) -> bool {
    matches!(event, WindowEvent::Close)
}
