//! Road Network Viewer Library
//!
//! A 2D top-down view of a road network with pan/zoom camera control and a
//! bridge overlay. The core runs independently or with a Bevy UI.

pub mod viewer;

#[cfg(feature = "ui")]
pub mod ui;
