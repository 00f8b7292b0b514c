//! Intersection Simulation Library
//!
//! A four-way signalized intersection with crossing pedestrians that can
//! run independently or with a Bevy UI.

pub mod simulation;

#[cfg(feature = "ui")]
pub mod ui;
