//! Sorting algorithm visualizer.
//!
//! [`sort`] holds the algorithms as step producers; [`ui`] and [`headless`]
//! are the two ways of playing their steps back.

pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod headless;
pub mod logging;
pub mod sort;
pub mod ui;
