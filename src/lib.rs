//! Space allocation for grid-based garden beds.
//!
//! Given a bed, the plant catalog and the bed's planting events, the engine
//! answers which cells are held by which planting over a date window, which
//! cells are free, and where a new planting of a given footprint fits.
//! All answers are recomputed from the inputs on every call.

pub mod config;
pub mod data;
pub mod error;
pub mod logic;
pub mod models;

pub use config::EngineConfig;
pub use data::catalog::{InMemoryCatalog, PlantCatalog};
pub use data::overrides::{MiGardenerSpacing, SpacingTables};
pub use error::{AllocationError, Result};
pub use logic::engine::AllocationEngine;
pub use logic::spacing::{SpacingProfile, SpacingRule};
pub use logic::succession::{IntervalSuggestion, SuccessionPlan};
pub use models::{
    bed::{GardenBed, PlanningMethod},
    cell::{AvailableCell, BedUsage, CellConflict, FootprintSize, OccupiedCell, PlacementSites},
    event::PlantingEvent,
    plant::{Plant, PlantCategory},
    DateRange, GridCell,
};
