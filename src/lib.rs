//! Abagen builds, transforms and analyzes Assumption-based Argumentation frameworks.

#![warn(missing_docs)]

pub mod aba;

pub mod generator;

pub mod io;

pub mod utils;
