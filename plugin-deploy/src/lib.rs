//! Scripts for deploying the strategy-builder plugin contracts through
//! Hardhat Ignition and inspecting their deployments.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod cli;
mod commands;
pub mod constants;
pub mod errors;
pub mod types;
pub mod utils;
