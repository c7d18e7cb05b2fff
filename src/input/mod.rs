/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Simulation input
//!
//! A simulation is described by a JSON document:
//!
//! ```json
//! {
//!   "wavelengths": { "start": 400.0, "stop": 800.0, "points": 81 },
//!   "material": { "type": "named", "name": "gold" },
//!   "radius": 20.0,
//!   "options": { "medium": 1.33, "as_efficiency": false }
//! }
//! ```

pub mod config;
pub mod errors;

pub use config::{MaterialSpec, SimulationConfig, WavelengthGrid};
pub use errors::{InputError, Result};
