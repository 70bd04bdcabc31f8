//! Per-network Ignition parameter files.
//!
//! A parameter file is a JSON object keyed by module id, holding the named
//! parameters each module reads. Entries under `$global` apply to every
//! module unless the module overrides them.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde_json::Value;

use crate::{
    constants::{GLOBAL_PARAMETERS_KEY, PARAMETERS_FILE_EXTENSION, PARAMETERS_FILE_PREFIX},
    contracts::ContractAddress,
    errors::PluginConfigError,
    modules::{DeploymentModule, ModuleParameter},
    networks::Network,
};

/// The path of the parameter file for the given network,
/// `<dir>/parameters-<network>.json`
pub fn parameters_path(dir: &Path, network: Network) -> PathBuf {
    dir.join(format!(
        "{PARAMETERS_FILE_PREFIX}{}.{PARAMETERS_FILE_EXTENSION}",
        network.name()
    ))
}

/// A parsed parameter file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterFile {
    /// Parameters shared by all modules
    global: BTreeMap<String, Value>,
    /// Parameters keyed by module id
    modules: BTreeMap<String, BTreeMap<String, Value>>,
}

impl ParameterFile {
    /// Parse a parameter file from its JSON form
    pub fn from_json(json: &str) -> Result<Self, PluginConfigError> {
        let mut modules: BTreeMap<String, BTreeMap<String, Value>> =
            serde_json::from_str(json).map_err(|e| PluginConfigError::Deserialize(e.to_string()))?;
        let global = modules.remove(GLOBAL_PARAMETERS_KEY).unwrap_or_default();

        Ok(ParameterFile { global, modules })
    }

    /// Read and parse the parameter file at the given path
    pub fn load(path: &Path) -> Result<Self, PluginConfigError> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PluginConfigError::ReadFile(format!("{}: {}", path.display(), e)))?;

        Self::from_json(&contents)
    }

    /// Get the raw value of a parameter for a module, falling back to the
    /// global parameters
    fn raw(&self, module: DeploymentModule, param: ModuleParameter) -> Option<&Value> {
        self.modules
            .get(module.id())
            .and_then(|params| params.get(param.name()))
            .or_else(|| self.global.get(param.name()))
    }

    /// Resolve every parameter the module requires.
    ///
    /// Entries the module does not read are ignored.
    pub fn resolve(
        &self,
        module: DeploymentModule,
    ) -> Result<ResolvedParameters, PluginConfigError> {
        let mut values = Vec::new();
        for param in module.parameters() {
            let raw = self
                .raw(module, param)
                .ok_or(PluginConfigError::MissingParameter {
                    module: module.id(),
                    parameter: param.name(),
                })?;

            let invalid = || PluginConfigError::InvalidParameter {
                module: module.id(),
                parameter: param.name(),
                value: raw.to_string(),
            };
            let address = raw
                .as_str()
                .ok_or_else(invalid)
                .and_then(|s| ContractAddress::parse(s).map_err(|_| invalid()))?;

            values.push((param, address));
        }

        Ok(ResolvedParameters { module, values })
    }
}

/// The validated parameters of a single module
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedParameters {
    /// The module the parameters were resolved for
    module: DeploymentModule,
    /// The parameter values, in module parameter order
    values: Vec<(ModuleParameter, ContractAddress)>,
}

impl ResolvedParameters {
    /// The module the parameters were resolved for
    pub fn module(&self) -> DeploymentModule {
        self.module
    }

    /// Get the value of a parameter
    pub fn get(&self, param: ModuleParameter) -> Option<&ContractAddress> {
        self.values
            .iter()
            .find(|(p, _)| *p == param)
            .map(|(_, address)| address)
    }

    /// Iterate over the parameters in module parameter order
    pub fn iter(&self) -> impl Iterator<Item = (ModuleParameter, &ContractAddress)> {
        self.values.iter().map(|(param, address)| (*param, address))
    }

    /// The number of resolved parameters
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the module reads no parameters
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
