//! # ljclust Core Library
//!
//! A high-performance library for evaluating the Lennard-Jones potential
//! energy (and forces) of point-particle clusters in 3-D space, built around
//! a set of interchangeable evaluation backends so the same reduction can be
//! timed under different execution strategies.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a
//! clear separation of concerns, making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains the stateless cluster model
//!   ([`core::cluster`]), the pure Lennard-Jones kernels
//!   ([`core::potential`]), parameter presets, and XYZ file I/O.
//!
//! - **[`engine`]: The Logic Core.** Hosts the evaluation backends (dense,
//!   pairwise, parallel, blocked) behind a common [`engine::evaluator`]
//!   seam, plus the benchmark harness, configuration builders, and progress
//!   reporting.
//!
//! - **[`workflows`]: The Public API.** Ties `engine` and `core` together
//!   into complete procedures: one-shot energy/force evaluation and the
//!   multi-backend benchmark sweep. This is the entry point for end-users
//!   of the library.

pub mod core;
pub mod engine;
pub mod workflows;
