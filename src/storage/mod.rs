//! Storage layer for Payday
//!
//! Loads user snapshots from JSON or YAML files and writes them back
//! atomically.

pub mod file_io;

pub use file_io::{read_snapshot, read_snapshots, write_snapshot_atomic, SnapshotFormat};
