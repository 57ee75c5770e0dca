//! Wideline Inspector — prints the assembled mesh of construction patterns.
//!
//! ```text
//! main.rs      — entry point (this file)
//! patterns.rs  — pattern constructors
//! ```
//!
//! Usage:
//! ```text
//! cargo run --example inspect                 # default (zigzag)
//! cargo run --example inspect -- translucent  # named pattern
//! cargo run --example inspect -- --list
//! ```

mod patterns;

use wideline::query::Ray;
use wideline::Wideline;

fn main() {
    // Default: WARN for everything, INFO for wideline.
    // Override with RUST_LOG env var (e.g. RUST_LOG=wideline=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("inspect=info".parse().unwrap_or_default())
        .add_directive("wideline=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let arg = std::env::args().nth(1);
    let name = arg.as_deref().unwrap_or("zigzag");

    if name == "--list" {
        for (name, _) in patterns::all() {
            println!("{name}");
        }
        return;
    }

    let Some((_, props)) = patterns::all().into_iter().find(|(n, _)| *n == name) else {
        eprintln!("unknown pattern {name:?}, try --list");
        std::process::exit(1);
    };

    let mut line = Wideline::new(props);
    if !line.is_valid() {
        for warning in &line.report().warnings {
            eprintln!("warning: {warning}");
        }
        std::process::exit(1);
    }

    match line.mesh() {
        Ok(mesh) => {
            println!("pattern:   {name}");
            println!("vertices:  {}", mesh.vertex_count());
            println!("triangles: {}", mesh.triangle_count());
            println!("materials: {}", mesh.materials.len());
            println!("ranges:");
            for group in &mesh.groups {
                println!(
                    "  seq {} start {:5} count {:5} material {:2} ({})",
                    group.seq,
                    group.start,
                    group.count,
                    group.material_index,
                    mesh.materials[group.material_index].program.key(),
                );
            }
        }
        Err(err) => {
            eprintln!("build failed: {err}");
            std::process::exit(1);
        }
    }

    // Probe straight down onto the first line point, the way a host picking
    // pass would.
    let Some(first) = line
        .props()
        .points
        .sublines()
        .into_iter()
        .flatten()
        .next()
    else {
        return;
    };
    let ray = Ray::new(
        wideline::math::Point3::new(first.x, first.y, first.z + 5.0),
        wideline::math::Vector3::new(0.0, 0.0, -1.0),
    );
    match line.raycast(&ray) {
        Ok(Some(hit)) => println!(
            "raycast:   hit segment {} at distance {:.3}",
            hit.segment, hit.distance
        ),
        Ok(None) => println!("raycast:   no hit on the endpoint probe"),
        Err(err) => eprintln!("raycast failed: {err}"),
    }

    if let Some((sphere, _)) = line.debug_sphere() {
        println!(
            "sphere:    center ({:.3}, {:.3}, {:.3}) radius {:.3}",
            sphere.center.x, sphere.center.y, sphere.center.z, sphere.radius
        );
    }
}
