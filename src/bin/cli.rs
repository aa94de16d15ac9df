//! ecoalert CLI - Debug tool for the collection simulation
//!
//! Usage:
//!   ecoalert-cli routes [--json]
//!   ecoalert-cli catalog [--json]
//!   ecoalert-cli simulate --route r1 [--ticks 20] [--lat ... --lng ...]
//!
//! Drives the engine the same way the mobile host does, printing every
//! notification the alert engine fires, to check threshold behavior without
//! a device.

use clap::{Parser, Subcommand};
use ecoalert::engine::CollectionEngine;
use ecoalert::simulator::DEFAULT_TICK_INTERVAL_MS;
use ecoalert::{demo, AlertThresholds, GeoPoint, Notification};

#[derive(Parser)]
#[command(name = "ecoalert-cli")]
#[command(about = "Debug tool for the waste-collection alert engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the demo collection routes
    Routes {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the EcoTachos catalog
    Catalog {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the Huancayo landmarks used for address search
    Landmarks,

    /// Run the truck simulation and print fired alerts
    Simulate {
        /// Route id (e.g. "r1")
        #[arg(short, long, default_value = "r1")]
        route: String,

        /// Number of ticks to simulate
        #[arg(short, long, default_value = "20")]
        ticks: u32,

        /// Milliseconds between ticks
        #[arg(long, default_value_t = DEFAULT_TICK_INTERVAL_MS)]
        interval_ms: u64,

        /// Resident home latitude (default: demo center)
        #[arg(long)]
        lat: Option<f64>,

        /// Resident home longitude (default: demo center)
        #[arg(long)]
        lng: Option<f64>,

        /// Arrival threshold in meters
        #[arg(long, default_value = "50")]
        arrival: f64,

        /// Medium-range threshold in meters
        #[arg(long, default_value = "500")]
        medium: f64,

        /// Long-range threshold in meters
        #[arg(long, default_value = "1000")]
        long: f64,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Routes { json } => run_routes(json),
        Commands::Catalog { json } => run_catalog(json),
        Commands::Landmarks => run_landmarks(),
        Commands::Simulate {
            route,
            ticks,
            interval_ms,
            lat,
            lng,
            arrival,
            medium,
            long,
        } => {
            let home = match (lat, lng) {
                (Some(lat), Some(lng)) => GeoPoint::new(lat, lng),
                _ => demo::DEFAULT_CENTER,
            };
            let thresholds = AlertThresholds {
                arrival,
                medium,
                long,
            };
            run_simulate(&route, ticks, interval_ms, home, thresholds, cli.verbose);
        }
    }
}

fn run_routes(json: bool) {
    let routes = demo::huancayo_routes();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&routes).expect("routes serialize")
        );
        return;
    }

    println!("{}", "=".repeat(60));
    println!("Huancayo demo routes");
    println!("{}", "=".repeat(60));
    for route in &routes {
        println!(
            "  {}  {:<32} {:>2} waypoints  {:>6.0} m",
            route.id,
            route.name,
            route.path.len(),
            route.length_meters()
        );
        println!("      {}", route.description);
    }
}

fn run_catalog(json: bool) {
    let items = demo::catalog_items();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&items).expect("catalog serialize")
        );
        return;
    }

    println!("{}", "=".repeat(60));
    println!("EcoTachos catalog (shop: {})", ecoalert::SHOP_URL);
    println!("{}", "=".repeat(60));
    for item in &items {
        println!(
            "  {}  {:<34} {:>4} L  {}",
            item.id,
            item.name,
            item.capacity_liters,
            item.price_range()
        );
    }
}

fn run_landmarks() {
    println!("{}", "=".repeat(60));
    println!("Huancayo landmarks");
    println!("{}", "=".repeat(60));
    for lm in demo::landmarks() {
        println!(
            "  {:<38} ({:.4}, {:.4})  {}",
            lm.name, lm.location.latitude, lm.location.longitude, lm.address
        );
    }
}

fn run_simulate(
    route_id: &str,
    ticks: u32,
    interval_ms: u64,
    home: GeoPoint,
    thresholds: AlertThresholds,
    verbose: bool,
) {
    let mut engine = CollectionEngine::with_demo_data();

    let mut resident = demo::demo_resident(route_id);
    resident.home = home;
    resident.settings.thresholds = thresholds;
    let resident_id = resident.id.clone();

    if let Err(e) = engine.register_resident(resident) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("{}", "=".repeat(60));
    println!(
        "Simulating route {route_id}: {ticks} ticks every {interval_ms} ms, home at ({:.4}, {:.4})",
        home.latitude, home.longitude
    );
    println!("{}", "=".repeat(60));

    let mut now_ms: i64 = 0;
    match engine.start_collection(route_id, now_ms) {
        Ok(notes) => print_notifications(&notes, now_ms),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }

    for _ in 0..ticks {
        now_ms += interval_ms as i64;
        match engine.tick(now_ms) {
            Ok(notes) => {
                if verbose {
                    if let (Some(truck), Ok(Some(dist))) =
                        (engine.truck(), engine.distance_to_truck(&resident_id))
                    {
                        println!(
                            "  t={:>6}ms truck at ({:.4}, {:.4})  {:>5.0} m from home",
                            now_ms, truck.location.latitude, truck.location.longitude, dist
                        );
                    }
                }
                print_notifications(&notes, now_ms);
            }
            Err(e) => {
                eprintln!("Error during tick: {e}");
                std::process::exit(1);
            }
        }
    }
}

fn print_notifications(notes: &[Notification], now_ms: i64) {
    for n in notes {
        println!(
            "  t={:>6}ms [{:?}] {}: {}",
            now_ms, n.severity, n.title, n.message
        );
    }
}
