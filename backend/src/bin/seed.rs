//! Fills the database with sample parks, staff, activities, plants and
//! reports.
//!
//! ```text
//! seed                            # defaults
//! seed --reports-per-plant 5
//! seed --database other.sqlite --rng-seed 42
//! ```

use backend::db::seed::seed_sample_data;
use backend::db::Database;
use chrono::Local;
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(about = "Seed sample data into the park maintenance database")]
struct Args {
    /// SQLite file to seed (created with the schema if missing).
    #[arg(long, env = "TAMANKOTA_DATABASE", default_value = backend::config::DEFAULT_DATABASE)]
    database: String,

    #[arg(long, default_value_t = 2)]
    reports_per_plant: usize,

    /// Seed for the random choices, for reproducible data.
    #[arg(long)]
    rng_seed: Option<u64>,
}

fn main() -> ExitCode {
    dotenv::dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let args = Args::parse();

    let mut rng = match args.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let now = Local::now().naive_local();

    let result = Database::open(&args.database)
        .map_err(backend::error::ApiError::from)
        .and_then(|db| {
            db.with_connection(|conn| {
                Ok(seed_sample_data(conn, args.reports_per_plant, now, &mut rng)?)
            })
        });

    match result {
        Ok(summary) => {
            info!("Seeding completed");
            println!(" - Taman: {} (existing+new)", summary.parks);
            println!(" - Petugas: {} (existing+new)", summary.staff);
            println!(" - Kegiatan: {} (existing+new)", summary.activities);
            println!(" - Tanaman: {} total rows now", summary.plants);
            println!(" - Laporan: {} total rows now", summary.reports);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Seeding failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
