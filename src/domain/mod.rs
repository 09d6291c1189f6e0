pub mod coerce;
pub mod models;
pub mod scoring;
pub mod session;
