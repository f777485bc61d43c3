use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Instant;

use modelo3d::config::FileConfig;
use modelo3d::domain::{
    CubeParams, CylinderParams, HollowBoxParams, ModelKind, Primitive, SphereParams, validate,
};
use modelo3d::generator::generate;
use modelo3d::mesh::{analyze, facet_count, write_stl};
use modelo3d::storage::Storage;

/// Generate 3D-printable STL primitives
///
/// Examples:
///   # Generate a 10mm cube into the export directory
///   modelo3d cube -s 10
///
///   # Generate a smooth cylinder and write it to a specific file
///   modelo3d cylinder -r 5 -H 10 --segments 64 -o cylinder.stl
///
///   # Generate an open hollow box with 2mm walls
///   modelo3d box -l 20 -w 15 -H 10 -t 2
///
///   # List everything generated so far
///   modelo3d list
#[derive(Parser, Debug)]
#[command(name = "modelo3d")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches modelo3d.toml if not provided)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Export directory for generated files (overrides config)
    #[arg(long, global = true)]
    export_dir: Option<PathBuf>,

    /// Write the STL to this exact path instead of the export directory
    #[arg(short = 'o', long, global = true)]
    output: Option<PathBuf>,

    /// Enable verbose output (mesh diagnostics)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a cube
    Cube {
        /// Edge length in mm
        #[arg(short = 's', long)]
        size: f32,
    },
    /// Generate a cylinder
    Cylinder {
        /// Radius in mm
        #[arg(short = 'r', long)]
        radius: f32,
        /// Height in mm
        #[arg(short = 'H', long)]
        height: f32,
        /// Tessellation resolution, clamped to [6, 256]
        #[arg(long)]
        segments: Option<u32>,
    },
    /// Generate a sphere
    Sphere {
        /// Radius in mm
        #[arg(short = 'r', long)]
        radius: f32,
        /// Tessellation resolution, clamped to [6, 128]
        #[arg(long)]
        segments: Option<u32>,
    },
    /// Generate an open hollow box
    Box {
        /// Outer length in mm
        #[arg(short = 'l', long)]
        length: f32,
        /// Outer width in mm
        #[arg(short = 'w', long)]
        width: f32,
        /// Outer height in mm
        #[arg(short = 'H', long)]
        height: f32,
        /// Wall thickness in mm (must be under half the smaller footprint side)
        #[arg(short = 't', long)]
        wall_thickness: f32,
    },
    /// List generated models in the export directory
    List {
        /// Only show one model kind (cube, cylinder, sphere, hollow_box)
        #[arg(short = 'k', long)]
        kind: Option<String>,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let verbose = args.verbose || file_config.verbose;
    let export_dir = args
        .export_dir
        .clone()
        .unwrap_or_else(|| file_config.export_dir.clone());

    match &args.command {
        Command::List { kind } => run_list(&export_dir, kind.as_deref()),
        command => {
            let primitive = build_primitive(command, file_config.segments);
            run_generate(
                primitive,
                args.output.as_deref(),
                &export_dir,
                file_config.max_files,
                verbose,
            )
        }
    }
}

fn build_primitive(command: &Command, default_segments: u32) -> Primitive {
    match *command {
        Command::Cube { size } => Primitive::Cube(CubeParams { size }),
        Command::Cylinder {
            radius,
            height,
            segments,
        } => Primitive::Cylinder(CylinderParams {
            radius,
            height,
            segments: segments.unwrap_or(default_segments),
        }),
        Command::Sphere { radius, segments } => Primitive::Sphere(SphereParams {
            radius,
            segments: segments.unwrap_or(default_segments),
        }),
        Command::Box {
            length,
            width,
            height,
            wall_thickness,
        } => Primitive::HollowBox(HollowBoxParams {
            length,
            width,
            height,
            wall_thickness,
        }),
        Command::List { .. } => unreachable!("list is handled separately"),
    }
}

fn run_generate(
    primitive: Primitive,
    output: Option<&std::path::Path>,
    export_dir: &std::path::Path,
    max_files: usize,
    verbose: bool,
) -> Result<()> {
    println!("modelo3d - 3D Printable Model Generator");
    println!("=======================================");
    println!();

    validate(&primitive).context("Invalid model parameters")?;

    let spinner = create_spinner(&format!("Generating {} mesh...", primitive.kind()));
    let start = Instant::now();
    let result = generate(&primitive)?;
    spinner.finish_with_message(format!(
        "Generated {} triangles [{:.1}s]",
        result.metadata.triangles,
        start.elapsed().as_secs_f32()
    ));

    let stl = result.to_stl();

    if verbose {
        let report = analyze(&result.mesh);
        println!("  Mesh: {}", report.summary());
        match facet_count(&stl) {
            Some(count) if count == result.metadata.triangles => {
                println!(
                    "  Serialized facets: {} (expected {})",
                    count,
                    primitive.expected_triangles()
                );
            }
            other => bail!("Serialized facet count mismatch: {:?}", other),
        }
    }

    let spinner = create_spinner("Writing STL file...");
    let start = Instant::now();

    let written_path = if let Some(path) = output {
        write_stl(path, &result.mesh).context("Failed to write STL file")?;
        path.to_path_buf()
    } else {
        let mut storage = Storage::open(export_dir)?;
        let entry = storage.save(&stl, &result.metadata)?;
        let removed = storage.cleanup(max_files)?;
        if verbose && removed > 0 {
            println!("  Pruned {} old file(s) from the export directory", removed);
        }
        storage
            .path_of(&entry.filename)
            .context("Saved file missing from storage")?
    };

    spinner.finish_with_message(format!(
        "Wrote {} triangles ({:.1} KB) [{:.1}s]",
        result.metadata.triangles,
        stl.len() as f64 / 1024.0,
        start.elapsed().as_secs_f32()
    ));

    println!();
    println!("Output: {}", written_path.display());

    Ok(())
}

fn run_list(export_dir: &std::path::Path, kind: Option<&str>) -> Result<()> {
    let kind: Option<ModelKind> = match kind {
        Some(s) => Some(s.parse()?),
        None => None,
    };

    let mut storage = Storage::open(export_dir)?;
    let files = storage.list()?;
    let files: Vec<_> = files
        .into_iter()
        .filter(|f| kind.is_none_or(|k| f.model_type == k))
        .collect();

    if files.is_empty() {
        println!("No generated models in {}", export_dir.display());
        return Ok(());
    }

    println!("Generated models in {}:", export_dir.display());
    for file in &files {
        println!(
            "  {}  {}  {} triangles  {:.1} KB  {}",
            file.filename,
            file.model_type,
            file.triangles,
            file.size_bytes as f64 / 1024.0,
            file.created_at
        );
    }
    println!();
    println!("{} model(s)", files.len());

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
