//! Data models for the dependency graph and its configuration

pub mod analysis;
pub mod config;
pub mod dependency_graph;

pub use analysis::AnalysisResults;
pub use config::{OutputFormat, PartialSettings, Settings};
pub use dependency_graph::{DependencyEdge, DependencyGraph, GraphStatistics};
