//! Topsis Ranker - Multi-criteria ranking service.
//!
//! This crate ranks alternatives scored on multiple criteria using the
//! TOPSIS method and delivers the ranked table to the caller by email.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
