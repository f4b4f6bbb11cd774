mod diff;
mod output;

use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use structopt::StructOpt;
use whitted_core::{default_scene, load_scene, save_scene, scene_to_json};
use whitted_renderer::{render, render_parallel, ImageBuffer, RenderConfig};

#[derive(Debug, StructOpt)]
#[structopt(name = "whitted", about = "Whitted-style ray tracer", rename_all = "kebab-case")]
enum Command {
    /// Render a scene to an image file
    Render(RenderOpts),
    /// Compare two images pixel by pixel
    Diff {
        source: PathBuf,
        target: PathBuf,
        /// Where to write the difference image when the inputs differ
        #[structopt(short, long, default_value = "diff.png")]
        output: PathBuf,
    },
    /// Print or save the built-in scene as JSON
    DefaultScene {
        #[structopt(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct RenderOpts {
    /// JSON scene file; the built-in scene is used when omitted
    #[structopt(long)]
    scene: Option<PathBuf>,
    #[structopt(long, default_value = "500")]
    width: u32,
    #[structopt(long, default_value = "500")]
    height: u32,
    #[structopt(long, default_value = "5")]
    max_depth: u32,
    /// Render buckets on the rayon thread pool
    #[structopt(long)]
    parallel: bool,
    /// Worker threads for --parallel (0 = one per core)
    #[structopt(long, default_value = "0")]
    threads: usize,
    #[structopt(long, default_value = "64")]
    bucket_size: u32,
    /// Render this many times and report the average time
    #[structopt(long, default_value = "1")]
    iterations: u32,
    #[structopt(short, long, default_value = "RayTracer.png")]
    output: PathBuf,
}

impl RenderOpts {
    fn config(&self) -> RenderConfig {
        RenderConfig {
            max_depth: self.max_depth,
            ..Default::default()
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    match Command::from_args() {
        Command::Render(opts) => run_render(&opts),
        Command::Diff {
            source,
            target,
            output,
        } => run_diff(&source, &target, &output),
        Command::DefaultScene { output } => run_default_scene(output),
    }
}

fn run_render(opts: &RenderOpts) -> Result<()> {
    let scene = match &opts.scene {
        Some(path) => load_scene(path)
            .with_context(|| format!("Failed to load scene {}", path.display()))?,
        None => default_scene(),
    };
    let config = opts.config();

    if opts.parallel && opts.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(opts.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    log::info!(
        "Rendering {}x{} at max depth {} ({} things, {} lights, {})",
        opts.width,
        opts.height,
        config.max_depth,
        scene.thing_count(),
        scene.light_count(),
        if opts.parallel { "parallel" } else { "single-threaded" }
    );

    let iterations = opts.iterations.max(1);
    let mut total = Duration::ZERO;
    let mut image: Option<ImageBuffer> = None;

    for i in 0..iterations {
        let start = Instant::now();
        let frame = if opts.parallel {
            render_parallel(&scene, opts.width, opts.height, &config, opts.bucket_size)?
        } else {
            render(&scene, opts.width, opts.height, &config)?
        };
        let elapsed = start.elapsed();
        total += elapsed;
        log::debug!("Iteration {} rendered in {:?}", i + 1, elapsed);
        image = Some(frame);
    }

    log::info!(
        "Total time for {} iterations = {} ms, avg time = {} ms",
        iterations,
        total.as_millis(),
        total.as_millis() / iterations as u128
    );

    if let Some(image) = image {
        output::save_image(&image, &opts.output)?;
    }

    Ok(())
}

fn run_diff(source: &Path, target: &Path, output: &Path) -> Result<()> {
    let a = image::open(source)
        .with_context(|| format!("Failed to open {}", source.display()))?
        .to_rgb8();
    let b = image::open(target)
        .with_context(|| format!("Failed to open {}", target.display()))?
        .to_rgb8();

    let result = diff::diff_images(&a, &b)?;

    if result.is_identical() {
        println!("Images are the same");
    } else {
        result
            .image
            .save(output)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        println!(
            "Changes detected: {} out of {} pixels do not match (diff written to {})",
            result.changed_pixels,
            result.total_pixels,
            output.display()
        );
    }

    Ok(())
}

fn run_default_scene(output: Option<PathBuf>) -> Result<()> {
    let scene = default_scene();
    match output {
        Some(path) => save_scene(&scene, &path)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{}", scene_to_json(&scene)?),
    }
    Ok(())
}
