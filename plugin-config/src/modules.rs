//! Declarative descriptions of the Hardhat Ignition deployment modules.
//!
//! Each module lists the contracts it deploys and the constructor arguments
//! wired into them. The descriptors are the source of truth for the module
//! files the framework executes, and for the parameters a per-network
//! parameter file must provide.

use std::{
    collections::HashSet,
    fmt::{self, Display},
};

use clap::ValueEnum;
use itertools::Itertools;

use crate::{constants::IGNITION_MODULES_IMPORT, errors::PluginConfigError};

/// A named parameter read by a module from the parameter file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleParameter {
    /// The Aave V3 pool
    Pool,
    /// The wrapped native asset used as the base asset
    BaseAsset,
    /// The Aave V3 price oracle
    Oracle,
}

impl ModuleParameter {
    /// The parameter name as it appears in the parameter file
    pub fn name(&self) -> &'static str {
        match self {
            ModuleParameter::Pool => "pool",
            ModuleParameter::BaseAsset => "WETH",
            ModuleParameter::Oracle => "oracle",
        }
    }
}

impl Display for ModuleParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single constructor argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructorArg {
    /// A value read from the parameter file
    Parameter(ModuleParameter),
    /// The address of a contract deployed earlier in the same module,
    /// referenced by its binding
    Contract(&'static str),
}

impl ConstructorArg {
    /// The identifier the argument is referred to by in a module source
    pub fn ident(&self) -> &'static str {
        match self {
            ConstructorArg::Parameter(param) => param.name(),
            ConstructorArg::Contract(binding) => *binding,
        }
    }
}

/// A contract deployed by a module
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractDeployment {
    /// The name the deployed contract is bound to, and returned under
    pub binding: &'static str,
    /// The name of the compiled contract artifact
    pub contract: &'static str,
    /// The constructor arguments, in order
    pub args: &'static [ConstructorArg],
}

/// The contracts deployed by the Aave V3 actions module
const AAVE_V3_ACTIONS_CONTRACTS: &[ContractDeployment] = &[ContractDeployment {
    binding: "aaveV3Action",
    contract: "AaveV3Actions",
    args: &[
        ConstructorArg::Parameter(ModuleParameter::Pool),
        ConstructorArg::Parameter(ModuleParameter::BaseAsset),
        ConstructorArg::Parameter(ModuleParameter::Oracle),
    ],
}];

/// The contracts deployed by the Aave V3 conditions module
const AAVE_V3_CONDITIONS_CONTRACTS: &[ContractDeployment] = &[
    ContractDeployment {
        binding: "healthFactor",
        contract: "HealthFactorCondition",
        args: &[],
    },
    ContractDeployment {
        binding: "aaveV3PositionBalance",
        contract: "AaveV3PositionBalance",
        args: &[
            ConstructorArg::Parameter(ModuleParameter::Pool),
            ConstructorArg::Parameter(ModuleParameter::BaseAsset),
            ConstructorArg::Parameter(ModuleParameter::Oracle),
            ConstructorArg::Contract("healthFactor"),
        ],
    },
];

/// The contracts deployed by the send coin action module
const SEND_COIN_ACTION_CONTRACTS: &[ContractDeployment] = &[ContractDeployment {
    binding: "sendCoinAction",
    contract: "SendCoinAction",
    args: &[],
}];

/// An Ignition deployment module
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeploymentModule {
    /// The Aave V3 strategy actions
    #[value(name = "actions")]
    AaveV3Actions,
    /// The Aave V3 strategy conditions
    #[value(name = "conditions")]
    AaveV3Conditions,
    /// The native coin transfer action
    #[value(name = "send-coin-action")]
    SendCoinAction,
}

impl DeploymentModule {
    /// All deployment modules
    pub const ALL: [DeploymentModule; 3] = [
        DeploymentModule::AaveV3Actions,
        DeploymentModule::AaveV3Conditions,
        DeploymentModule::SendCoinAction,
    ];

    /// The Ignition module id, which also keys the module's entry in a
    /// parameter file
    pub fn id(&self) -> &'static str {
        match self {
            DeploymentModule::AaveV3Actions => "AAVEV3ActionsModule",
            DeploymentModule::AaveV3Conditions => "AAVEV3ConditionsModule",
            DeploymentModule::SendCoinAction => "SendCoinActionModule",
        }
    }

    /// The file name of the module source within the Ignition modules directory
    pub fn source_file(&self) -> &'static str {
        match self {
            DeploymentModule::AaveV3Actions => "AaveV3ActionsModule.ts",
            DeploymentModule::AaveV3Conditions => "AaveV3ConditionsModule.ts",
            DeploymentModule::SendCoinAction => "SendCoinAction.ts",
        }
    }

    /// The name the module is declared and exported under in its source
    pub fn export_name(&self) -> &'static str {
        match self {
            DeploymentModule::AaveV3Actions => "AaveV3ActionsModule",
            DeploymentModule::AaveV3Conditions => "AaveV3ConditionsModule",
            DeploymentModule::SendCoinAction => "SendCoinActionModule",
        }
    }

    /// The contracts deployed by the module, in deployment order
    pub fn contracts(&self) -> &'static [ContractDeployment] {
        match self {
            DeploymentModule::AaveV3Actions => AAVE_V3_ACTIONS_CONTRACTS,
            DeploymentModule::AaveV3Conditions => AAVE_V3_CONDITIONS_CONTRACTS,
            DeploymentModule::SendCoinAction => SEND_COIN_ACTION_CONTRACTS,
        }
    }

    /// The parameters the module reads, in order of first use
    pub fn parameters(&self) -> Vec<ModuleParameter> {
        self.contracts()
            .iter()
            .flat_map(|deployment| deployment.args)
            .filter_map(|arg| match arg {
                ConstructorArg::Parameter(param) => Some(*param),
                ConstructorArg::Contract(_) => None,
            })
            .unique()
            .collect()
    }

    /// Check that bindings are unique and that every contract argument
    /// refers to a contract deployed earlier in the module
    pub fn validate(&self) -> Result<(), PluginConfigError> {
        validate_contracts(self.id(), self.contracts())
    }

    /// Render the module as an Ignition module source file
    pub fn render_ignition_module(&self) -> String {
        let export_name = self.export_name();
        let mut lines = vec![
            format!("import {{ buildModule }} from \"{IGNITION_MODULES_IMPORT}\";"),
            String::new(),
            format!(
                "const {export_name} = buildModule(\"{}\", (m) => {{",
                self.id()
            ),
        ];

        let params = self.parameters();
        for param in &params {
            lines.push(format!("  const {param} = m.getParameter(\"{param}\");"));
        }
        if !params.is_empty() {
            lines.push(String::new());
        }

        for deployment in self.contracts() {
            let args = deployment.args.iter().map(ConstructorArg::ident).join(", ");
            lines.push(format!(
                "  const {} = m.contract(\"{}\", [{args}]);",
                deployment.binding, deployment.contract
            ));
        }

        let returns = self.contracts().iter().map(|d| d.binding).join(", ");
        lines.push(String::new());
        lines.push(format!("  return {{ {returns} }};"));
        lines.push("});".to_string());
        lines.push(String::new());
        lines.push(format!("export default {export_name};"));
        lines.push(String::new());

        lines.join("\n")
    }
}

/// Validate the bindings of an ordered list of contract deployments
fn validate_contracts(
    module: &'static str,
    contracts: &[ContractDeployment],
) -> Result<(), PluginConfigError> {
    let mut bound: HashSet<&str> = HashSet::new();
    for deployment in contracts {
        for arg in deployment.args {
            if let ConstructorArg::Contract(binding) = *arg {
                if !bound.contains(binding) {
                    return Err(PluginConfigError::DanglingContractReference { module, binding });
                }
            }
        }

        if !bound.insert(deployment.binding) {
            return Err(PluginConfigError::DuplicateBinding {
                module,
                binding: deployment.binding,
            });
        }
    }

    Ok(())
}

impl Display for DeploymentModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
