//! # Engine Module
//!
//! The execution layer: everything that decides *how* the pairwise
//! Lennard-Jones reduction over a cluster is carried out.
//!
//! ## Overview
//!
//! The same mathematical sum is implemented by several backends so they can
//! be compared against each other:
//!
//! - **dense** - full O(n^2) distance-matrix style evaluation
//! - **pairwise** - scalar upper-triangular loop
//! - **parallel** - multithreaded row-parallel reduction (feature `parallel`)
//! - **blocked** - row-block decomposition with partial-sum reduction
//!   (feature `parallel`)
//!
//! Backends sit behind the [`evaluator::EnergyEvaluator`] trait and are
//! selected through the [`evaluator::Backend`] enum. The [`bench`] module
//! times them against each other; [`config`] carries validated run
//! parameters; [`progress`] lets callers observe long sweeps.

pub mod bench;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod evaluators;
pub mod progress;
