//! Sample data for demos and manual testing.
//!
//! Parks are upserted by name so re-running the seeder refreshes them;
//! everything else accumulates on repeated runs.

use crate::db::TIMESTAMP_FORMAT;
use chrono::{Duration, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;
use rusqlite::{params, Connection};

const PARKS: [(&str, i64, &str); 4] = [
    ("Taman Mentari", 1200, "Jl. Sudirman"),
    ("Taman Anggrek", 900, "Jl. Melati"),
    ("Taman Nusantara", 2500, "Jl. Merdeka"),
    ("Taman Pelangi", 1500, "Jl. Cemara"),
];

const STAFF: [(&str, &str); 4] = [
    ("Budi Santoso", "Pengawas"),
    ("Sari Utami", "Koordinator"),
    ("Andi Wijaya", "Petugas Lapangan"),
    ("Rina Kartika", "Petugas Lapangan"),
];

const ACTIVITIES: [&str; 6] = [
    "Penyiraman",
    "Pemangkasan",
    "Pemupukan",
    "Penyiangan",
    "Pengendalian Hama",
    "Pembersihan",
];

const PLANTS: [(&str, &str, &str); 6] = [
    ("Bougainvillea", "Bougainvillea glabra", "Semak"),
    ("Pucuk Merah", "Syzygium oleina", "Perdu"),
    ("Ketapang Kencana", "Terminalia mantaly", "Pohon"),
    ("Tabebuya", "Handroanthus chrysotrichus", "Pohon"),
    ("Rumput Gajah Mini", "Pennisetum purpureum cv.", "Groundcover"),
    ("Soka", "Ixora javanica", "Semak"),
];

pub const PLANTS_PER_PARK: usize = 4;

/// Row totals after a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub parks: usize,
    pub staff: usize,
    pub activities: usize,
    pub plants: usize,
    pub reports: usize,
}

/// Seeds all five tables inside one transaction.
///
/// Report timestamps are spread over the 30 days before `now`.
pub fn seed_sample_data<R: Rng>(
    conn: &mut Connection,
    reports_per_plant: usize,
    now: NaiveDateTime,
    rng: &mut R,
) -> rusqlite::Result<SeedSummary> {
    let tx = conn.transaction()?;

    let park_ids = seed_parks(&tx)?;
    let staff_ids = seed_staff(&tx)?;
    let activity_ids = seed_activities(&tx)?;
    let plants = seed_plants(&tx, &park_ids, rng)?;
    seed_reports(
        &tx,
        &plants,
        &staff_ids,
        &activity_ids,
        reports_per_plant,
        now,
        rng,
    )?;

    let summary = SeedSummary {
        parks: park_ids.len(),
        staff: staff_ids.len(),
        activities: activity_ids.len(),
        plants: plants.len(),
        reports: count(&tx, "laporan")?,
    };
    tx.commit()?;
    Ok(summary)
}

fn seed_parks(conn: &Connection) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare(
        "INSERT INTO taman (nama_taman, luas_taman, lokasi) VALUES (?1, ?2, ?3)
         ON CONFLICT(nama_taman) DO UPDATE
         SET luas_taman = excluded.luas_taman, lokasi = excluded.lokasi",
    )?;
    for (name, area, location) in PARKS {
        stmt.execute(params![name, area, location])?;
    }
    ids(conn, "SELECT id_taman FROM taman ORDER BY id_taman")
}

fn seed_staff(conn: &Connection) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare("INSERT INTO petugas (nama_petugas, jabatan) VALUES (?1, ?2)")?;
    for (name, role) in STAFF {
        stmt.execute(params![name, role])?;
    }
    ids(conn, "SELECT id_petugas FROM petugas ORDER BY id_petugas")
}

fn seed_activities(conn: &Connection) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare("INSERT INTO kegiatan (jenis_kegiatan) VALUES (?1)")?;
    for activity_type in ACTIVITIES {
        stmt.execute([activity_type])?;
    }
    ids(conn, "SELECT id_kegiatan FROM kegiatan ORDER BY id_kegiatan")
}

/// Plants a random selection in every park; returns every plant as
/// `(id_tanaman, nama_umum)`, including ones from earlier runs.
fn seed_plants<R: Rng>(
    conn: &Connection,
    park_ids: &[i64],
    rng: &mut R,
) -> rusqlite::Result<Vec<(i64, String)>> {
    let mut stmt = conn.prepare(
        "INSERT INTO tanaman (id_taman, nama_umum, nama_ilmiah, jenis) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for park_id in park_ids {
        for _ in 0..PLANTS_PER_PARK {
            if let Some((common, scientific, kind)) = PLANTS.choose(rng) {
                stmt.execute(params![park_id, common, scientific, kind])?;
            }
        }
    }

    let mut all = conn.prepare(
        "SELECT id_tanaman, COALESCE(nama_umum, '') FROM tanaman ORDER BY id_tanaman",
    )?;
    let rows = all.query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?;
    rows.collect()
}

fn seed_reports<R: Rng>(
    conn: &Connection,
    plants: &[(i64, String)],
    staff_ids: &[i64],
    activity_ids: &[i64],
    reports_per_plant: usize,
    now: NaiveDateTime,
    rng: &mut R,
) -> rusqlite::Result<()> {
    let mut stmt = conn.prepare(
        "INSERT INTO laporan (id_tanaman, id_petugas, id_kegiatan, tanggal, isi_laporan)
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )?;
    for (plant_id, plant_name) in plants {
        for i in 0..reports_per_plant {
            let (Some(staff_id), Some(activity_id)) =
                (staff_ids.choose(rng), activity_ids.choose(rng))
            else {
                return Ok(());
            };
            let when = now
                - Duration::days(rng.gen_range(0..=30))
                - Duration::hours(rng.gen_range(0..=23));
            let content = format!("{}. Catatan {}: kegiatan rutin", i + 1, plant_name);
            stmt.execute(params![
                plant_id,
                staff_id,
                activity_id,
                when.format(TIMESTAMP_FORMAT).to_string(),
                content
            ])?;
        }
    }
    Ok(())
}

fn ids(conn: &Connection, sql: &str) -> rusqlite::Result<Vec<i64>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| row.get(0))?;
    rows.collect()
}

fn count(conn: &Connection, table: &'static str) -> rusqlite::Result<usize> {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
}
