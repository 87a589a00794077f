//! Core library for the `podium` terminal timetable.
//!
//! This crate provides the internal building blocks used by the binary: CLI
//! argument types, configuration parsing, the festival schedule model with
//! its display-window arithmetic, and the terminal UI. The primary
//! user-facing interface is the `podium` command-line application; library
//! APIs may evolve as the CLI grows.
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod logger;
pub mod schedule;
pub mod ui;
