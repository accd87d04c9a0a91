//! street_side: end-to-end run of the navcore road stack.
//!
//! Loads a tag taxonomy, builds the road profile chosen on the command line,
//! classifies a few streets with it, then projects house points onto the
//! nearest traversable street and reports which side of it each house is on.

mod streets;

use std::io::Cursor;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use nc_core::MercatorPoint;
use nc_routing::{RoadProfile, VehicleModelFactory, VehicleType};
use nc_search::{ProjectionOnStreet, StreetProjector};
use nc_taxonomy::{Classificator, TypesHolder, load_taxonomy_csv, load_taxonomy_reader};

use streets::{HOUSES, STREETS, Street};

// ── Embedded taxonomy ─────────────────────────────────────────────────────────

// Used unless --taxonomy points at a file.
const TAXONOMY_CSV: &str = "\
path\n\
# road classes\n\
highway|motorway\n\
highway|motorway_link\n\
highway|trunk|bridge\n\
highway|trunk_link\n\
highway|primary\n\
highway|primary_link\n\
highway|secondary\n\
highway|secondary_link\n\
highway|tertiary\n\
highway|tertiary_link\n\
highway|residential\n\
highway|unclassified\n\
highway|service\n\
highway|living_street\n\
highway|road\n\
highway|track\n\
highway|path\n\
highway|steps\n\
highway|pedestrian\n\
highway|footway\n\
highway|bridleway\n\
highway|cycleway\n\
# ferries and piers\n\
route|ferry|motorcar\n\
route|ferry|motor_vehicle\n\
railway|rail|motor_vehicle\n\
man_made|pier\n\
# restrictions\n\
hwtag|oneway\n\
hwtag|nofoot\n\
hwtag|nobicycle\n\
";

// ── CLI ───────────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "street_side")]
#[command(about = "Classify streets with a road profile and find which side of the street houses are on")]
struct Cli {
    /// Road profile: car, pedestrian or bicycle
    #[arg(long, default_value = "car")]
    profile: VehicleType,

    /// Country whose traffic rules apply (e.g. "France")
    #[arg(long)]
    country: Option<String>,

    /// Taxonomy CSV to load instead of the built-in one
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn feature_types(c: &Classificator, street: &Street) -> Result<TypesHolder> {
    let mut types = TypesHolder::new();
    for tag in street.tags {
        let path: Vec<&str> = tag.split('|').collect();
        let t = c
            .require(&path)
            .with_context(|| format!("street {:?}", street.name))?;
        types.add(t);
    }
    Ok(types)
}

fn side_label(p: &ProjectionOnStreet) -> &'static str {
    if p.proj_sign { "right" } else { "left" }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info })
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .init();

    // 1. Taxonomy.
    let classificator = match &cli.taxonomy {
        Some(path) => load_taxonomy_csv(path)
            .with_context(|| format!("loading taxonomy from {}", path.display()))?,
        None => load_taxonomy_reader(Cursor::new(TAXONOMY_CSV))?,
    };
    let classificator = Arc::new(classificator);
    log::info!("taxonomy: {} types", classificator.len());

    // 2. Profile.
    let factory = VehicleModelFactory::new(cli.profile, Arc::clone(&classificator))?;
    let profile: Arc<dyn RoadProfile> = match cli.country.as_deref() {
        Some(country) => factory.vehicle_model_for_country(country),
        None => factory.vehicle_model(),
    };

    println!("=== street_side: {} profile ===", cli.profile);
    if let Some(country) = &cli.country {
        println!("Country: {country}");
    }
    println!("Max speed: {:.1} km/h", profile.max_speed());
    println!();

    // 3. Classify streets.
    let mut roads: Vec<(&Street, StreetProjector)> = Vec::new();
    println!("{:<24} {:>8} {:>6} {:>8}", "street", "km/h", "road", "one-way");
    for street in STREETS {
        let types = feature_types(&classificator, street)?;
        let speed = profile.speed(&types);
        let is_road = profile.is_road(&types);
        println!(
            "{:<24} {:>8.1} {:>6} {:>8}",
            street.name,
            speed,
            is_road,
            profile.is_one_way(&types)
        );
        if is_road {
            let points: Vec<MercatorPoint> = street.geometry().map(|p| p.to_mercator()).collect();
            roads.push((street, StreetProjector::new(&points)));
        }
    }
    println!();

    // 4. Side of street for each house.
    for house in HOUSES {
        let at = house.at.to_mercator();
        let nearest = roads
            .iter()
            .filter_map(|(street, projector)| projector.project(at).map(|p| (*street, p)))
            .min_by(|a, b| a.1.dist_meters.total_cmp(&b.1.dist_meters));

        match nearest {
            Some((street, p)) => println!(
                "{:<20} → {} ({} side, segment {}, {:.0} m)",
                house.label,
                street.name,
                side_label(&p),
                p.seg_index,
                p.dist_meters
            ),
            None => println!("{:<20} → no traversable street", house.label),
        }
    }

    Ok(())
}
