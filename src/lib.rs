//! COD shipping dashboard: loads the cleaned shipment table and province
//! boundaries once, aggregates them, and serves Plotly figures.

pub mod aggregate;
pub mod api;
pub mod charts;
pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod stats;
pub mod synthetic;
pub mod update;

#[cfg(test)]
mod fixtures;
