//! Utilities for the deploy scripts.

use std::{
    fs,
    path::{Path, PathBuf},
    process::Stdio,
};

use plugin_config::{
    modules::DeploymentModule,
    networks::Network,
    parameters::{ParameterFile, ResolvedParameters},
};
use tokio::process::Command;

use crate::{
    constants::{DEPLOY_COMMAND, HARDHAT_COMMAND, IGNITION_COMMAND, NETWORK_FLAG, PARAMETERS_FLAG},
    errors::ScriptError,
};

/// Load the parameter file at the given path and resolve the parameters
/// of the given module from it
pub fn load_module_parameters(
    path: &Path,
    module: DeploymentModule,
) -> Result<ResolvedParameters, ScriptError> {
    module.validate()?;
    let parameters = ParameterFile::load(path)?.resolve(module)?;
    Ok(parameters)
}

/// Build the command deploying a module through Hardhat Ignition:
///
/// `<bin> hardhat ignition deploy <module> --network <network> --parameters <file>`
pub fn ignition_deploy_command(
    framework_bin: &str,
    module_path: &Path,
    network: Network,
    parameters_path: &Path,
) -> Command {
    let mut cmd = Command::new(framework_bin);
    cmd.arg(HARDHAT_COMMAND)
        .arg(IGNITION_COMMAND)
        .arg(DEPLOY_COMMAND)
        .arg(module_path)
        .arg(NETWORK_FLAG)
        .arg(network.name())
        .arg(PARAMETERS_FLAG)
        .arg(parameters_path);

    cmd
}

/// Run a command to completion, streaming its output, and fail if it
/// exits unsuccessfully
pub async fn run_command(mut cmd: Command) -> Result<(), ScriptError> {
    cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
    let status = cmd
        .status()
        .await
        .map_err(|e| ScriptError::FrameworkInvocation(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(ScriptError::FrameworkInvocation(format!(
            "command failed with {}",
            status
        )))
    }
}

/// Write the rendered source of every module into the given directory,
/// returning the paths written
pub fn write_module_sources(out_dir: &Path) -> Result<Vec<PathBuf>, ScriptError> {
    fs::create_dir_all(out_dir).map_err(|e| ScriptError::WriteFile(e.to_string()))?;

    DeploymentModule::ALL
        .iter()
        .map(|module| {
            let path = out_dir.join(module.source_file());
            fs::write(&path, module.render_ignition_module())
                .map_err(|e| ScriptError::WriteFile(format!("{}: {}", path.display(), e)))?;
            Ok(path)
        })
        .collect()
}

/// Find the module sources in the given directory that are missing or
/// differ from their rendered descriptors
pub fn stale_module_sources(out_dir: &Path) -> Result<Vec<String>, ScriptError> {
    let mut stale = Vec::new();
    for module in DeploymentModule::ALL {
        let path = out_dir.join(module.source_file());
        let current = match fs::read_to_string(&path) {
            Ok(contents) => Some(contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(ScriptError::ReadFile(format!("{}: {}", path.display(), e))),
        };

        if current.as_deref() != Some(module.render_ignition_module().as_str()) {
            stale.push(module.source_file().to_string());
        }
    }

    Ok(stale)
}

#[cfg(test)]
mod tests {
    use std::{ffi::OsStr, path::Path};

    use plugin_config::networks::Network;

    use super::ignition_deploy_command;

    #[test]
    fn test_ignition_deploy_command() {
        let cmd = ignition_deploy_command(
            "npx",
            Path::new("ignition/modules/AaveV3ActionsModule.ts"),
            Network::ArbitrumSepolia,
            Path::new("ignition/parameters/parameters-arbitrumSepolia.json"),
        );
        let cmd = cmd.as_std();

        assert_eq!(cmd.get_program(), "npx");
        let args: Vec<&OsStr> = cmd.get_args().collect();
        assert_eq!(
            args,
            [
                "hardhat",
                "ignition",
                "deploy",
                "ignition/modules/AaveV3ActionsModule.ts",
                "--network",
                "arbitrumSepolia",
                "--parameters",
                "ignition/parameters/parameters-arbitrumSepolia.json",
            ]
        );
    }
}
