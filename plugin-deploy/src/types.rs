//! Type definitions used throughout the scripts

use std::path::PathBuf;

use plugin_config::{networks::Network, parameters::parameters_path};

use crate::constants::{IGNITION_PATH_SEGMENT, MODULES_PATH_SEGMENT, PARAMETERS_PATH_SEGMENT};

/// The options shared by every command
#[derive(Debug, Clone)]
pub struct ScriptContext {
    /// The network to target
    pub network: Network,
    /// The root of the Hardhat project
    pub project_root: PathBuf,
    /// The program used to launch Hardhat
    pub framework_bin: String,
}

impl ScriptContext {
    /// The directory holding the Ignition module sources
    pub fn modules_dir(&self) -> PathBuf {
        self.project_root
            .join(IGNITION_PATH_SEGMENT)
            .join(MODULES_PATH_SEGMENT)
    }

    /// The directory holding the per-network parameter files
    pub fn parameters_dir(&self) -> PathBuf {
        self.project_root
            .join(IGNITION_PATH_SEGMENT)
            .join(PARAMETERS_PATH_SEGMENT)
    }

    /// The parameter file for the target network
    pub fn parameters_path(&self) -> PathBuf {
        parameters_path(&self.parameters_dir(), self.network)
    }
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use plugin_config::networks::Network;

    use super::ScriptContext;

    #[test]
    fn test_project_paths() {
        let ctx = ScriptContext {
            network: Network::ArbitrumSepolia,
            project_root: PathBuf::from("/work/plugins"),
            framework_bin: "npx".to_string(),
        };

        assert_eq!(ctx.modules_dir(), Path::new("/work/plugins/ignition/modules"));
        assert_eq!(
            ctx.parameters_path(),
            Path::new("/work/plugins/ignition/parameters/parameters-arbitrumSepolia.json")
        );
    }
}
