//! Stitchwork
//!
//! Turns PNG images into cross-stitch patterns.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod services;
