//! Wire types shared between the park-maintenance API and its clients.
//!
//! Field names on the wire follow the persisted column names (`id_taman`,
//! `nama_taman`, ...) so that existing page shells keep working unchanged.

pub mod model;
pub mod requests;
pub mod responses;
