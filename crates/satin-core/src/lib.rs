//! Steady-state output power of a CO2 laser gain medium for a Gaussian input
//! beam, swept over input powers, saturation intensities and discharge
//! configurations.

pub mod common;
pub mod domain;
pub mod modules;
pub mod numerics;
