//! Constants shared by the deployment configuration

/// The compiled-in plugin contract registry
pub const PLUGIN_CONTRACTS_JSON: &str = include_str!("../deployments/plugin-contracts.json");

/// The prefix of a hex-encoded address
pub const ADDRESS_PREFIX: &str = "0x";

/// The number of bytes in an EVM address
pub const NUM_BYTES_ADDRESS: usize = 20;

/// The number of characters in a `0x`-prefixed, hex-encoded EVM address
pub const ADDRESS_STRING_LEN: usize = ADDRESS_PREFIX.len() + NUM_BYTES_ADDRESS * 2;

/// The prefix of a per-network parameter file name
pub const PARAMETERS_FILE_PREFIX: &str = "parameters-";

/// The extension of a per-network parameter file
pub const PARAMETERS_FILE_EXTENSION: &str = "json";

/// The key in an Ignition parameter file holding parameters shared by all modules
pub const GLOBAL_PARAMETERS_KEY: &str = "$global";

/// The import path of the Ignition module builder
pub const IGNITION_MODULES_IMPORT: &str = "@nomicfoundation/hardhat-ignition/modules";
