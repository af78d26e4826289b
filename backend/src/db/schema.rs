//! Table definitions.
//!
//! `AUTOINCREMENT` is used on every key so identifiers only ever grow; the
//! counters behind it live in `sqlite_sequence`, which is what an admin reset
//! rewinds.

use rusqlite::Connection;

/// All tables, children before parents. Deleting in this order never trips
/// a foreign key.
pub const TABLES_IN_DELETE_ORDER: [&str; 5] = ["laporan", "tanaman", "petugas", "kegiatan", "taman"];

const DDL: &str = "
CREATE TABLE IF NOT EXISTS taman (
    id_taman     INTEGER PRIMARY KEY AUTOINCREMENT,
    nama_taman   TEXT NOT NULL UNIQUE,
    luas_taman   INTEGER,
    lokasi       TEXT
);

CREATE TABLE IF NOT EXISTS tanaman (
    id_tanaman   INTEGER PRIMARY KEY AUTOINCREMENT,
    id_taman     INTEGER NOT NULL REFERENCES taman(id_taman)
                     ON DELETE CASCADE ON UPDATE CASCADE,
    nama_umum    TEXT,
    nama_ilmiah  TEXT,
    jenis        TEXT
);
CREATE INDEX IF NOT EXISTS ix_tanaman_id_taman ON tanaman(id_taman);

CREATE TABLE IF NOT EXISTS petugas (
    id_petugas    INTEGER PRIMARY KEY AUTOINCREMENT,
    nama_petugas  TEXT NOT NULL,
    jabatan       TEXT
);

CREATE TABLE IF NOT EXISTS kegiatan (
    id_kegiatan    INTEGER PRIMARY KEY AUTOINCREMENT,
    jenis_kegiatan TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS laporan (
    id_laporan   INTEGER PRIMARY KEY AUTOINCREMENT,
    id_tanaman   INTEGER NOT NULL REFERENCES tanaman(id_tanaman)
                     ON DELETE RESTRICT ON UPDATE CASCADE,
    id_petugas   INTEGER NOT NULL REFERENCES petugas(id_petugas)
                     ON DELETE RESTRICT ON UPDATE CASCADE,
    id_kegiatan  INTEGER NOT NULL REFERENCES kegiatan(id_kegiatan)
                     ON DELETE RESTRICT ON UPDATE CASCADE,
    tanggal      TEXT NOT NULL,
    isi_laporan  TEXT
);
CREATE INDEX IF NOT EXISTS ix_laporan_tanaman ON laporan(id_tanaman);
CREATE INDEX IF NOT EXISTS ix_laporan_petugas ON laporan(id_petugas);
CREATE INDEX IF NOT EXISTS ix_laporan_kegiatan ON laporan(id_kegiatan);
CREATE INDEX IF NOT EXISTS ix_laporan_tanggal ON laporan(tanggal);
";

/// Creates any missing table or index. Safe to run on every start.
pub fn initialize(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(DDL)
}
