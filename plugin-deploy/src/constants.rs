//! Constants used in the deploy scripts

/// The environment variable holding the target network name.
///
/// This is the variable Hardhat itself reads the network from.
pub const NETWORK_ENV_VAR: &str = "HARDHAT_NETWORK";

/// The environment variable holding the Hardhat project root
pub const PROJECT_ROOT_ENV_VAR: &str = "PLUGIN_PROJECT_ROOT";

/// The environment variable holding the program used to launch Hardhat
pub const FRAMEWORK_BIN_ENV_VAR: &str = "IGNITION_BIN";

/// The default Hardhat project root
pub const DEFAULT_PROJECT_ROOT: &str = ".";

/// The default program used to launch Hardhat
pub const DEFAULT_FRAMEWORK_BIN: &str = "npx";

/// The name of the Hardhat command
pub const HARDHAT_COMMAND: &str = "hardhat";

/// The name of the Ignition task
pub const IGNITION_COMMAND: &str = "ignition";

/// The name of the deploy subtask
pub const DEPLOY_COMMAND: &str = "deploy";

/// The flag selecting the network to deploy to
pub const NETWORK_FLAG: &str = "--network";

/// The flag pointing Ignition at a parameter file
pub const PARAMETERS_FLAG: &str = "--parameters";

/// The Ignition directory within the Hardhat project
pub const IGNITION_PATH_SEGMENT: &str = "ignition";

/// The directory holding the Ignition module sources
pub const MODULES_PATH_SEGMENT: &str = "modules";

/// The directory holding the per-network parameter files
pub const PARAMETERS_PATH_SEGMENT: &str = "parameters";
