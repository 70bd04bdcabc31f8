//! Definitions of errors that can occur while loading or validating the
//! deployment configuration

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

use crate::{contracts::ContractRole, networks::Network};

/// Errors that can occur while loading or validating the deployment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginConfigError {
    /// A network name outside of the supported set
    UnknownNetwork(String),
    /// No plugin contracts are deployed on the given network
    NetworkNotDeployed(Network),
    /// A role tag outside of the supported set
    UnknownRole {
        /// The network whose record contains the tag
        network: Network,
        /// The unrecognized tag
        tag: String,
    },
    /// A network record is missing the address for a role
    MissingRole {
        /// The network whose record is incomplete
        network: Network,
        /// The role with no address
        role: ContractRole,
    },
    /// A network record lists the same role more than once
    DuplicateRole {
        /// The network whose record repeats the role
        network: Network,
        /// The repeated role
        role: ContractRole,
    },
    /// The registry holds more than one record for a network
    DuplicateNetwork(Network),
    /// A string that is not a `0x`-prefixed, 20 byte hex address
    InvalidAddress(String),
    /// A parameter required by a deployment module is absent
    MissingParameter {
        /// The Ignition module id
        module: &'static str,
        /// The name of the parameter
        parameter: &'static str,
    },
    /// A parameter required by a deployment module is not a valid address
    InvalidParameter {
        /// The Ignition module id
        module: &'static str,
        /// The name of the parameter
        parameter: &'static str,
        /// The offending value, as found in the parameter file
        value: String,
    },
    /// A constructor argument references a contract not deployed earlier in the module
    DanglingContractReference {
        /// The Ignition module id
        module: &'static str,
        /// The unresolved binding
        binding: &'static str,
    },
    /// Two contracts in a module share a binding name
    DuplicateBinding {
        /// The Ignition module id
        module: &'static str,
        /// The repeated binding
        binding: &'static str,
    },
    /// Error reading a configuration file
    ReadFile(String),
    /// Error deserializing configuration JSON
    Deserialize(String),
}

impl Display for PluginConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PluginConfigError::UnknownNetwork(name) => write!(f, "unknown network: {}", name),
            PluginConfigError::NetworkNotDeployed(network) => {
                write!(f, "no plugin contracts deployed on {}", network)
            }
            PluginConfigError::UnknownRole { network, tag } => {
                write!(f, "unknown contract role `{}` in {} record", tag, network)
            }
            PluginConfigError::MissingRole { network, role } => {
                write!(f, "{} record is missing an address for {}", network, role)
            }
            PluginConfigError::DuplicateRole { network, role } => {
                write!(f, "{} record lists {} more than once", network, role)
            }
            PluginConfigError::DuplicateNetwork(network) => {
                write!(f, "more than one record for {}", network)
            }
            PluginConfigError::InvalidAddress(s) => write!(f, "invalid address: {}", s),
            PluginConfigError::MissingParameter { module, parameter } => {
                write!(f, "module {} requires parameter `{}`", module, parameter)
            }
            PluginConfigError::InvalidParameter {
                module,
                parameter,
                value,
            } => write!(
                f,
                "parameter `{}` of module {} is not a valid address: {}",
                parameter, module, value
            ),
            PluginConfigError::DanglingContractReference { module, binding } => write!(
                f,
                "module {} references `{}` before it is deployed",
                module, binding
            ),
            PluginConfigError::DuplicateBinding { module, binding } => {
                write!(f, "module {} binds `{}` more than once", module, binding)
            }
            PluginConfigError::ReadFile(s) => write!(f, "error reading file: {}", s),
            PluginConfigError::Deserialize(s) => write!(f, "error deserializing JSON: {}", s),
        }
    }
}

impl Error for PluginConfigError {}
