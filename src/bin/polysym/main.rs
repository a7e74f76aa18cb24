//! Polysym CLI - topological mesh symmetry tool.
//!
//! Usage: polysym <COMMAND> [OPTIONS] <INPUT>
//!
//! Run `polysym --help` for available commands.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use polysym::algo::symmetry::{classify_sides, propagate, SeedSelection, Side};
use polysym::io::{MeshFile, SymmetryFile};
use polysym::topology::{EdgeId, FaceId, MeshTopology, VertexId};

#[derive(Parser)]
#[command(name = "polysym")]
#[command(author, version, about = "Topological mesh symmetry CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display mesh connectivity information
    Info {
        /// Input mesh file (JSON)
        input: PathBuf,
    },

    /// Compute bilateral symmetry from a seed pair
    Compute {
        /// Input mesh file (JSON)
        input: PathBuf,

        /// Seed edge pair, as two mirrored edge indices
        #[arg(long, required = true, value_delimiter = ',', num_args = 2, value_names = ["LEFT", "RIGHT"])]
        edges: Vec<usize>,

        /// Seed face pair, one face per side incident to its seed edge
        #[arg(long, required = true, value_delimiter = ',', num_args = 2, value_names = ["LEFT", "RIGHT"])]
        faces: Vec<usize>,

        /// Seed vertex pair, one endpoint per seed edge
        #[arg(long, required = true, value_delimiter = ',', num_args = 2, value_names = ["LEFT", "RIGHT"])]
        vertices: Vec<usize>,

        /// Vertex known to be on the left side (enables side labels)
        #[arg(long)]
        left: Option<usize>,

        /// Write the result arrays to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Compute {
            input,
            edges,
            faces,
            vertices,
            left,
            output,
        } => {
            cmd_compute(&input, &edges, &faces, &vertices, left, output.as_deref())?;
        }
    }

    Ok(())
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = MeshFile::load(input)?;
    let topo: MeshTopology = mesh.build_topology()?;

    println!("File: {}", input.display());
    println!("Vertices: {}", topo.num_vertices());
    println!("Edges: {}", topo.num_edges());
    println!("Faces: {}", topo.num_faces());

    let boundary = topo.edge_ids().filter(|&e| topo.is_boundary_edge(e)).count();
    if boundary == 0 {
        println!("Topology: Closed (no boundary)");
    } else {
        println!("Topology: Open ({} boundary edges)", boundary);
    }

    let sizes: Vec<usize> = topo.face_ids().map(|f| topo.face_vertices(f).len()).collect();
    if sizes.iter().all(|&n| n == 3) {
        println!("Mesh type: Triangle mesh");
    } else if sizes.iter().all(|&n| n == 4) {
        println!("Mesh type: Quad mesh");
    } else {
        println!("Mesh type: Mixed polygon mesh");
    }

    Ok(())
}

fn cmd_compute(
    input: &PathBuf,
    edges: &[usize],
    faces: &[usize],
    vertices: &[usize],
    left: Option<usize>,
    output: Option<&std::path::Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mesh = MeshFile::load(input)?;
    let topo: MeshTopology = mesh.build_topology()?;

    println!(
        "Loaded: {} vertices, {} edges, {} faces",
        topo.num_vertices(),
        topo.num_edges(),
        topo.num_faces()
    );

    let seed = SeedSelection {
        edges: [EdgeId::new(edges[0]), EdgeId::new(edges[1])],
        faces: [FaceId::new(faces[0]), FaceId::new(faces[1])],
        vertices: [VertexId::new(vertices[0]), VertexId::new(vertices[1])],
        left_vertex: left.map(VertexId::new),
    };
    seed.validate(&topo)?;

    let start = Instant::now();
    let table = propagate(&topo, &seed);
    let left_seeds: Vec<VertexId<u32>> = left.map(VertexId::new).into_iter().collect();
    let sides = classify_sides(&topo, &table, &left_seeds);
    let elapsed = start.elapsed();

    println!(
        "Resolved: {}/{} vertices, {}/{} edges, {}/{} faces ({:.2?})",
        table.resolved_vertex_count(),
        topo.num_vertices(),
        table.resolved_edge_count(),
        topo.num_edges(),
        table.resolved_face_count(),
        topo.num_faces(),
        elapsed
    );

    let centers = topo
        .vertex_ids()
        .filter(|&v| table.is_center_vertex(v))
        .count();
    println!("Center-line vertices: {}", centers);

    if left.is_some() {
        let lefts = sides
            .vertex_sides()
            .iter()
            .filter(|&&s| s == Side::Left)
            .count();
        let rights = sides
            .vertex_sides()
            .iter()
            .filter(|&&s| s == Side::Right)
            .count();
        println!("Sides: {} left, {} right vertices", lefts, rights);
    }

    if let Some(path) = output {
        let results = SymmetryFile::from_results(&table, &sides);
        results.save(path)?;
        println!("Saved: {}", path.display());
    }

    Ok(())
}
