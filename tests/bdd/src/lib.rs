// BDD test support library for Hearty
//
// Holds the shared World used by the report generation features.

pub mod world;

pub use world::ReportWorld;
