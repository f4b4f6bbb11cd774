//! Simple ray tracer example.
//!
//! Renders the built-in scene and saves it in PPM format.

use whitted_core::default_scene;
use whitted_renderer::{render_parallel, ImageBuffer, RenderConfig, DEFAULT_BUCKET_SIZE};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() {
    println!("Whitted Ray Tracer - Simple Example");
    println!("===================================");

    let scene = default_scene();
    println!(
        "Scene: {} things, {} lights",
        scene.thing_count(),
        scene.light_count()
    );

    let (width, height) = (500, 500);
    let config = RenderConfig::default();

    println!(
        "Rendering {}x{} @ max depth {}...",
        width, height, config.max_depth
    );

    let start = std::time::Instant::now();
    let image = render_parallel(&scene, width, height, &config, DEFAULT_BUCKET_SIZE)
        .expect("Failed to render");
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&image, filename).expect("Failed to save image");
    println!("Saved to {}", filename);
}

fn save_ppm(image: &ImageBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P3")?;
    writeln!(writer, "{} {}", image.width, image.height)?;
    writeln!(writer, "255")?;

    for pixel in image.to_rgb8() {
        writeln!(writer, "{} {} {}", pixel.r, pixel.g, pixel.b)?;
    }

    Ok(())
}
