pub mod availability;
pub mod engine;
pub mod footprint;
pub mod occupancy;
pub mod spacing;
pub mod succession;
