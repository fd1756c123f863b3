use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use galaxy_common::Rgb;
use galaxy_controller::{ReconfigureQueue, RegenerationController};
use galaxy_generator::{Parameters, RngSource};
use galaxy_presets::{DEFAULT_PRESET, PresetStore};
use galaxy_render::{BufferRegistry, DebugTextRenderer, PointMaterial, PointsRenderer};
use galaxy_tools::FieldInspector;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "galaxy-cli", about = "Generate and inspect procedural galaxy point fields")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print crate versions
    Info,
    /// Generate one field and print a description of it
    Generate {
        /// Preset to start from
        #[arg(short, long, default_value = DEFAULT_PRESET)]
        preset: String,
        /// Preset file (.json store or .yaml mapping) merged over the built-ins
        #[arg(long)]
        presets: Option<PathBuf>,
        /// Override the point count
        #[arg(short, long)]
        count: Option<usize>,
        /// Override the inside color (hex, e.g. #ff6030)
        #[arg(long)]
        inside: Option<String>,
        /// Override the outside color (hex, e.g. #1b3984)
        #[arg(long)]
        outside: Option<String>,
        /// Seed for a reproducible field
        #[arg(short, long)]
        seed: Option<u64>,
        /// Number of points to list individually
        #[arg(long, default_value = "4")]
        samples: usize,
        /// Write parameters and buffers as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Simulate dragging the count control, then a few discrete edits
    Sweep {
        /// Intermediate values emitted while dragging
        #[arg(long, default_value = "10")]
        steps: usize,
        /// Preset to start from
        #[arg(short, long, default_value = DEFAULT_PRESET)]
        preset: String,
        /// RNG seed
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
    /// List available presets
    Presets {
        /// Preset file (.json store or .yaml mapping) merged over the built-ins
        #[arg(long)]
        presets: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct FieldExport<'a> {
    generation: u64,
    parameters: &'a Parameters,
    material: PointMaterial,
    positions: &'a [f32],
    colors: &'a [f32],
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .init();

    match cli.command {
        Commands::Info => {
            println!("galaxy-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", galaxy_common::crate_info());
            println!("generator: {}", galaxy_generator::crate_info());
            println!("controller: {}", galaxy_controller::crate_info());
            println!("render: {}", galaxy_render::crate_info());
            println!("tools: {}", galaxy_tools::crate_info());
            println!("presets: {}", galaxy_presets::crate_info());
        }
        Commands::Generate {
            preset,
            presets,
            count,
            inside,
            outside,
            seed,
            samples,
            output,
        } => {
            let store = load_presets(presets.as_deref())?;
            let mut params = *store.get(&preset)?;
            if let Some(count) = count {
                params.count = count;
            }
            if let Some(hex) = inside {
                params.inside_color = Rgb::from_hex(&hex).context("--inside")?;
            }
            if let Some(hex) = outside {
                params.outside_color = Rgb::from_hex(&hex).context("--outside")?;
            }

            tracing::info!(%preset, count = params.count, ?seed, "generating field");
            let mut controller = RegenerationController::with_hook(BufferRegistry::new());
            match seed {
                Some(seed) => controller.reconfigure_with(params, &mut RngSource::seeded(seed))?,
                None => controller.reconfigure(params)?,
            };
            let (registry, current) = controller.hook_and_current();
            let live = current.context("controller empty after reconfigure")?;
            registry.upload(live);

            let material = PointMaterial::from_parameters(live.parameters());
            print!("{}", DebugTextRenderer::with_samples(samples).render(live, &material));
            println!("{}", FieldInspector::summary(live.field()));

            if let Some(path) = output {
                let export = FieldExport {
                    generation: live.generation(),
                    parameters: live.parameters(),
                    material,
                    positions: live.field().positions(),
                    colors: live.field().colors(),
                };
                let file = std::fs::File::create(&path)
                    .with_context(|| format!("creating {}", path.display()))?;
                serde_json::to_writer(std::io::BufWriter::new(file), &export)?;
                println!("Wrote {}", path.display());
            }
        }
        Commands::Sweep {
            steps,
            preset,
            seed,
        } => {
            let store = PresetStore::with_builtins();
            let base = *store.get(&preset)?;
            let mut source = RngSource::seeded(seed);
            let mut controller = RegenerationController::with_hook(BufferRegistry::new());
            let mut queue = ReconfigureQueue::new();

            println!("Dragging count over {steps} steps to {}", base.count);
            let lo = Parameters::MIN.count;
            for step in 1..=steps.max(1) {
                let count = lo + (base.count.saturating_sub(lo)) * step / steps.max(1);
                queue.submit(Parameters { count, ..base });
            }
            queue.flush_with(&mut controller, &mut source)?;
            upload_current(&mut controller);

            for spin in [0.5, 1.5, -2.0] {
                queue.submit(Parameters { spin, ..base });
                queue.flush_with(&mut controller, &mut source)?;
                upload_current(&mut controller);
            }

            // A rejected edit leaves the last field in place.
            queue.submit(Parameters {
                concentration_power: 0.5,
                ..base
            });
            if let Err(err) = queue.flush_with(&mut controller, &mut source) {
                println!("Rejected edit: {err}");
            }

            let live = controller.current()?;
            println!(
                "Edits: applied={} superseded={}",
                queue.applied(),
                queue.superseded()
            );
            println!(
                "Current: generation={} spin={:.2} points={}",
                live.generation(),
                live.parameters().spin,
                live.field().len()
            );
            let registry = controller.hook();
            println!(
                "Buffers: resident={} released={} released_bytes={}",
                registry.resident_count(),
                registry.released_count(),
                registry.released_bytes()
            );
        }
        Commands::Presets { presets } => {
            let store = load_presets(presets.as_deref())?;
            for name in store.names() {
                let p = store.get(name)?;
                println!(
                    "{name}: count={} branches={} radius={:.2} spin={:.2} randomness={:.2} power={:.2} {}->{}",
                    p.count,
                    p.branches,
                    p.radius,
                    p.spin,
                    p.randomness,
                    p.concentration_power,
                    p.inside_color.to_hex(),
                    p.outside_color.to_hex()
                );
            }
        }
    }

    Ok(())
}

fn load_presets(path: Option<&Path>) -> anyhow::Result<PresetStore> {
    let Some(path) = path else {
        return Ok(PresetStore::with_builtins());
    };
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml" | "yml")
    );
    let mut store = PresetStore::with_builtins();
    if is_yaml {
        store
            .import_yaml(path)
            .with_context(|| format!("importing {}", path.display()))?;
    } else {
        let loaded = PresetStore::load(path).with_context(|| format!("loading {}", path.display()))?;
        for name in loaded.names() {
            store.insert(name, *loaded.get(name)?)?;
        }
    }
    Ok(store)
}

fn upload_current(controller: &mut RegenerationController<BufferRegistry>) {
    if let (registry, Some(live)) = controller.hook_and_current() {
        registry.upload(live);
    }
}
