pub mod activities;
pub mod admin;
pub(crate) mod fields;
pub mod health;
pub mod parks;
pub mod plants;
pub mod report;
pub mod reports;
pub mod staff;
