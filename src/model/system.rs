//! The compiled-in solar system.

use super::{BodyInfo, FactTable, Scene, Sun};
use crate::consts::{
    sun_center, Rgb, AU, BLUE, DARK_RED, GRAY, LIGHT_BLUE, ORANGE, RED, SUN_RADIUS, WHITE,
    YELLOW,
};

pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: f64,
    pub color: Rgb,
    pub distance_au: f64,
    /// Degrees per frame.
    pub speed: f64,
}

// Neptune really does reuse Earth's blue.
pub const PLANETS: [PlanetSpec; 8] = [
    PlanetSpec {
        name: "Mercury",
        radius: 5.0,
        color: GRAY,
        distance_au: 0.39,
        speed: 0.15,
    },
    PlanetSpec {
        name: "Venus",
        radius: 9.0,
        color: WHITE,
        distance_au: 0.72,
        speed: 0.12,
    },
    PlanetSpec {
        name: "Earth",
        radius: 10.0,
        color: BLUE,
        distance_au: 1.0,
        speed: 0.1,
    },
    PlanetSpec {
        name: "Mars",
        radius: 7.0,
        color: RED,
        distance_au: 1.52,
        speed: 0.08,
    },
    PlanetSpec {
        name: "Jupiter",
        radius: 20.0,
        color: ORANGE,
        distance_au: 2.2,
        speed: 0.04,
    },
    PlanetSpec {
        name: "Saturn",
        radius: 16.0,
        color: LIGHT_BLUE,
        distance_au: 3.0,
        speed: 0.032,
    },
    PlanetSpec {
        name: "Uranus",
        radius: 13.0,
        color: DARK_RED,
        distance_au: 3.7,
        speed: 0.024,
    },
    PlanetSpec {
        name: "Neptune",
        radius: 13.0,
        color: BLUE,
        distance_au: 4.5,
        speed: 0.02,
    },
];

impl PlanetSpec {
    pub fn to_info(&self) -> BodyInfo {
        BodyInfo {
            name: self.name.to_owned(),
            radius: self.radius,
            color: self.color,
            distance: self.distance_au * AU,
            speed: self.speed,
        }
    }
}

pub fn sun() -> Sun {
    Sun {
        center: sun_center(),
        radius: SUN_RADIUS,
        color: YELLOW,
    }
}

pub fn solar_system() -> Scene {
    let infos = PLANETS.iter().map(PlanetSpec::to_info).collect();
    Scene::new(sun(), infos, FactTable::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::consts::SUN_NAME;

    #[test]
    fn test_facts_cover_every_body() {
        let facts = FactTable::new();
        assert!(!facts.lookup(SUN_NAME).is_empty());
        for planet in PLANETS.iter() {
            assert!(
                facts.get(planet.name).map_or(false, |f| !f.is_empty()),
                "missing fact for {}",
                planet.name
            );
        }
    }

    #[test]
    fn test_orbits_clear_the_sun_center() {
        // Needed for a click on the sun to never select a planet
        for planet in PLANETS.iter() {
            assert!(planet.distance_au * AU > planet.radius, "{}", planet.name);
        }
    }

    #[test]
    fn test_scene_keeps_table_order() {
        let scene = solar_system();
        let names: Vec<_> = scene.bodies().iter().map(|b| b.name()).collect();
        assert_eq!(
            names,
            ["Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune"]
        );
        assert_eq!(scene.body(scene.find_body("Earth").unwrap()).info.distance, 100.0);
    }
}
