pub mod activity;
pub mod bundle;
pub mod park;
pub mod plant;
pub mod report;
pub mod staff;
