//! # Workflows Module
//!
//! The user-facing layer: complete procedures that tie the cluster model
//! and the evaluation backends together. [`energy`] performs a one-shot
//! energy (and optionally force) evaluation; [`bench`] times every
//! requested backend against every requested cluster size and verifies
//! that the backends agree on the physics.

pub mod bench;
pub mod energy;
