//! Static configuration for the strategy-builder plugin deployments: the
//! supported networks, the plugin contract registry, and the deployment
//! module descriptors handed to Hardhat Ignition.

#![deny(missing_docs)]
#![deny(clippy::missing_docs_in_private_items)]

pub mod constants;
pub mod contracts;
pub mod errors;
pub mod modules;
pub mod networks;
pub mod parameters;
pub mod registry;
