use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "parallax", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Trace a scene and write its trajectories as JSON.
    Trace(TraceArgs),
    /// Build a scene JSON from a depth image.
    Scene(SceneArgs),
}

#[derive(Parser, Debug)]
struct TraceArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output trajectories JSON.
    #[arg(long)]
    out: PathBuf,

    /// Also write the visible segments as an SVG document.
    #[arg(long)]
    svg: Option<PathBuf>,

    /// SVG units per grid cell.
    #[arg(long, default_value_t = 1.0)]
    svg_scale: f64,

    /// Test points for occlusion in parallel within each frame.
    #[arg(long, default_value_t = false)]
    parallel: bool,

    /// Override rayon worker threads (parallel mode only).
    #[arg(long)]
    threads: Option<usize>,
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Depth image (any format the `image` crate decodes); luma becomes depth.
    #[arg(long)]
    depth: PathBuf,

    /// Output scene JSON.
    #[arg(long)]
    out: PathBuf,

    /// Track every n-th cell center in both axes.
    #[arg(long, default_value_t = 1)]
    stride: u32,

    /// Curve sharpness.
    #[arg(long)]
    a: Option<f64>,

    /// Depth-to-offset divisor.
    #[arg(long)]
    b: Option<f64>,

    /// Depth value with zero displacement.
    #[arg(long)]
    zero_depth: Option<f64>,

    /// Number of animation frames.
    #[arg(long)]
    frames: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Trace(args) => cmd_trace(args),
        Command::Scene(args) => cmd_scene(args),
    }
}

fn cmd_trace(args: TraceArgs) -> anyhow::Result<()> {
    let scene = parallax::Scene::from_path(&args.in_path)?;
    let prepared = parallax::PreparedScene::from_scene(&scene)?;

    let threading = parallax::TraceThreading {
        parallel: args.parallel,
        threads: args.threads,
    };
    let (trajectories, stats) = parallax::trace_trajectories_with_stats(&prepared, &threading)?;

    write_json(&args.out, &trajectories)?;
    eprintln!("wrote {}", args.out.display());

    if let Some(svg_path) = &args.svg {
        let opts = parallax::SvgExportOpts {
            width: prepared.field().width(),
            height: prepared.field().height(),
            scale: args.svg_scale,
            ..parallax::SvgExportOpts::default()
        };
        let doc = parallax::trajectories_to_svg(&trajectories, &opts);
        ensure_parent_dir(svg_path)?;
        std::fs::write(svg_path, doc)
            .with_context(|| format!("write svg '{}'", svg_path.display()))?;
        eprintln!("wrote {}", svg_path.display());
    }

    let fp = parallax::fingerprint_trajectories(&trajectories);
    eprintln!(
        "frames={} points={} layers={} visible={} occluded={} segments={} fingerprint={:016x}{:016x}",
        stats.frames,
        stats.points,
        stats.layers,
        stats.visible_samples,
        stats.occluded_samples,
        stats.segments,
        fp.hi,
        fp.lo
    );
    Ok(())
}

fn cmd_scene(args: SceneArgs) -> anyhow::Result<()> {
    let bytes = std::fs::read(&args.depth)
        .with_context(|| format!("read depth image '{}'", args.depth.display()))?;
    let field = parallax::decode_depth_image(&bytes)?;

    let defaults = parallax::ParallaxConfig::default();
    let config = parallax::ParallaxConfig {
        a: args.a.unwrap_or(defaults.a),
        b: args.b.unwrap_or(defaults.b),
        zero_depth: args.zero_depth.unwrap_or(defaults.zero_depth),
        frames: args.frames.unwrap_or(defaults.frames),
    };
    config.validate()?;

    let depth: Vec<Vec<u8>> = (0..field.height())
        .map(|y| {
            (0..field.width())
                .map(|x| field.get(i64::from(x), i64::from(y)))
                .collect()
        })
        .collect();
    let scene = parallax::Scene {
        depth,
        points: parallax::cell_center_points(field.width(), field.height(), args.stride),
        config,
    };

    write_json(&args.out, &scene)?;
    eprintln!(
        "wrote {} ({}x{}, {} points)",
        args.out.display(),
        field.width(),
        field.height(),
        scene.points.len()
    );
    Ok(())
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> anyhow::Result<()> {
    ensure_parent_dir(path)?;
    let f = File::create(path).with_context(|| format!("create '{}'", path.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(f), value)
        .with_context(|| format!("write json '{}'", path.display()))?;
    Ok(())
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}
