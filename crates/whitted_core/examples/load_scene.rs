//! Example: Load and inspect a JSON scene file.
//!
//! Run with: cargo run --example load_scene -- scenes/default.json
//! Without an argument the built-in scene is shown.

use std::env;

use whitted_core::{default_scene, load_scene, Thing};

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    let scene = if args.len() < 2 {
        println!("No scene file given, using the built-in scene");
        default_scene()
    } else {
        let path = &args[1];
        println!("Loading scene file: {}", path);
        match load_scene(path) {
            Ok(scene) => scene,
            Err(e) => {
                eprintln!("Error loading scene file: {}", e);
                return;
            }
        }
    };

    println!("\n=== Scene ===");
    println!("Things: {}", scene.thing_count());
    println!("Lights: {}", scene.light_count());

    println!("\n--- Things ---");
    for (i, thing) in scene.things().iter().enumerate() {
        match thing {
            Thing::Sphere(s) => println!(
                "  [{}] Sphere at ({:.2}, {:.2}, {:.2}) r={:.2} {:?}",
                i, s.center.x, s.center.y, s.center.z, s.radius, s.surface
            ),
            Thing::Plane(p) => println!(
                "  [{}] Plane n=({:.2}, {:.2}, {:.2}) d={:.2} {:?}",
                i, p.normal.x, p.normal.y, p.normal.z, p.offset, p.surface
            ),
        }
    }

    println!("\n--- Lights ---");
    for (i, light) in scene.lights().iter().enumerate() {
        println!(
            "  [{}] at ({:.2}, {:.2}, {:.2}) color ({:.2}, {:.2}, {:.2})",
            i,
            light.position.x,
            light.position.y,
            light.position.z,
            light.color.x,
            light.color.y,
            light.color.z
        );
    }

    let camera = scene.camera();
    println!("\n--- Camera ---");
    println!(
        "  Position: ({:.2}, {:.2}, {:.2})",
        camera.position.x, camera.position.y, camera.position.z
    );
    println!(
        "  Forward:  ({:.2}, {:.2}, {:.2})",
        camera.forward.x, camera.forward.y, camera.forward.z
    );
}
