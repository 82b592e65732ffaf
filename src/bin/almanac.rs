use clap::Parser;
use color_eyre::eyre::{self, eyre};

use solar_system::consts::{Rgb, AU, FPS, SUN_NAME};
use solar_system::model::system::solar_system;
use solar_system::model::{OrbitingBody, Scene};

/// Prints the compiled-in characteristics of a body.
#[derive(Debug, Parser)]
struct Args {
    /// Body to describe (case-insensitive). Lists every body when omitted.
    name: Option<String>,
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    let scene = solar_system();

    let name = match args.name {
        None => {
            println!("{}", SUN_NAME);
            for body in scene.bodies() {
                println!("{}", body.name());
            }
            return Ok(());
        }
        Some(name) => name,
    };

    if name.eq_ignore_ascii_case(SUN_NAME) {
        print_sun(&scene);
        return Ok(());
    }

    let body = scene
        .bodies()
        .iter()
        .find(|b| b.name().eq_ignore_ascii_case(&name))
        .ok_or_else(|| eyre!("No body named {:?}", name))?;
    print_body(&scene, body);
    Ok(())
}

fn print_sun(scene: &Scene) {
    let sun = scene.sun();
    println!("Characteristics for {}", SUN_NAME);
    println!("- Display radius: {} px", sun.radius);
    println!("- Color: {}", format_color(sun.color));
    println!("- Position: ({}, {})", sun.center.x, sun.center.y);
    println!("- {}", scene.facts().lookup(SUN_NAME));
}

fn print_body(scene: &Scene, body: &OrbitingBody) {
    let info = &body.info;
    println!("Orbital characteristics for {}", info.name);
    println!("- Display radius: {} px", info.radius);
    println!("- Color: {}", format_color(info.color));
    println!(
        "- Orbital distance: {:.2} AU ({:.0} px)",
        info.distance / AU,
        info.distance
    );
    println!("- Angular speed: {} deg/frame", info.speed);
    match body.period_frames() {
        Some(frames) => println!(
            "- Period: {:.0} frames ({:.1} s at {} FPS)",
            frames,
            frames / FPS as f64,
            FPS
        ),
        None => println!("- Period: never"),
    }
    println!("- {}", scene.facts().lookup(&info.name));
}

fn format_color(Rgb(r, g, b): Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}
