//! Twinscope - Digital twin dashboard
//!
//! CSV ingestion with chart projection and column statistics, a toy process
//! simulation advanced on a fixed tick, and synthetic sensor series, behind an
//! egui desktop front end.

pub mod charts;
pub mod config;
pub mod data;
pub mod gui;
pub mod mock;
pub mod sim;
pub mod stats;
