use std::collections::HashSet;

use nalgebra::Point2;
use tracing::debug;

use super::body::{BodyID, BodyInfo, OrbitingBody};
use super::facts::FactTable;
use crate::consts::{Rgb, BLACK, SELECTION_TEXT_POS, SUN_NAME, SUN_TEXT_POS, WHITE};
use crate::gui::canvas::Canvas;

/// The fixed star everything orbits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sun {
    pub center: Point2<f64>,
    pub radius: f64,
    pub color: Rgb,
}

pub struct Scene {
    sun: Sun,
    // Order matters: it's the draw order, and the first body hit wins a click.
    bodies: Vec<OrbitingBody>,
    selected: Option<BodyID>,
    facts: FactTable,
}

impl Scene {
    pub fn new(sun: Sun, infos: Vec<BodyInfo>, facts: FactTable) -> Self {
        assert!(facts.covers(SUN_NAME), "No fact for {}", SUN_NAME);

        let mut names = HashSet::new();
        for info in infos.iter() {
            assert!(
                names.insert(info.name.as_str()),
                "Duplicate body name {}",
                info.name
            );
            assert!(facts.covers(&info.name), "No fact for {}", info.name);
        }

        let bodies = infos
            .into_iter()
            .map(|info| OrbitingBody::new(info, sun.center))
            .collect();

        Scene {
            sun,
            bodies,
            selected: None,
            facts,
        }
    }

    pub fn sun(&self) -> &Sun {
        &self.sun
    }

    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    pub fn body(&self, id: BodyID) -> &OrbitingBody {
        &self.bodies[id.0]
    }

    pub fn find_body(&self, name: &str) -> Option<BodyID> {
        self.bodies
            .iter()
            .position(|b| b.name() == name)
            .map(BodyID)
    }

    pub fn facts(&self) -> &FactTable {
        &self.facts
    }

    pub fn selected(&self) -> Option<BodyID> {
        self.selected
    }

    pub fn selected_body(&self) -> Option<&OrbitingBody> {
        self.selected.map(|id| self.body(id))
    }

    pub fn update_all(&mut self) {
        for body in self.bodies.iter_mut() {
            body.advance();
        }
    }

    /// Selects the first body under `point`. Returns the body that was hit, if
    /// any; a miss leaves the current selection in place.
    pub fn select_at(&mut self, point: &Point2<f64>) -> Option<BodyID> {
        let hit = self
            .bodies
            .iter()
            .position(|b| b.hit_test(point))
            .map(BodyID)?;

        if self.selected != Some(hit) {
            debug!(body = self.body(hit).name(), "selected");
        }
        self.selected = Some(hit);
        Some(hit)
    }

    pub fn render_all(&self, canvas: &mut dyn Canvas) {
        canvas.clear(BLACK);
        canvas.fill_circle(self.sun.center, self.sun.radius, self.sun.color);

        for body in self.bodies.iter() {
            body.render(canvas);
        }

        let (x, y) = SUN_TEXT_POS;
        canvas.text(self.facts.lookup(SUN_NAME), Point2::new(x, y), WHITE);

        if let Some(body) = self.selected_body() {
            let (x, y) = SELECTION_TEXT_POS;
            canvas.text(self.facts.lookup(body.name()), Point2::new(x, y), WHITE);
        }
    }
}
