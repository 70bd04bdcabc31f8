//! The networks the plugin contracts may be deployed to

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use clap::ValueEnum;

use crate::errors::PluginConfigError;

/// A supported deployment target.
///
/// The names match the network names configured in the Hardhat project, and
/// are the only accepted string form of a network.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Network {
    /// Arbitrum One mainnet
    #[value(name = "arbitrum")]
    Arbitrum,
    /// The Arbitrum Sepolia testnet
    #[value(name = "arbitrumSepolia")]
    ArbitrumSepolia,
    /// A local Hardhat node
    #[value(name = "localhost")]
    Localhost,
}

impl Network {
    /// All supported networks
    pub const ALL: [Network; 3] = [
        Network::Arbitrum,
        Network::ArbitrumSepolia,
        Network::Localhost,
    ];

    /// The Hardhat network name
    pub fn name(&self) -> &'static str {
        match self {
            Network::Arbitrum => "arbitrum",
            Network::ArbitrumSepolia => "arbitrumSepolia",
            Network::Localhost => "localhost",
        }
    }

    /// The EIP-155 chain id of the network
    pub fn chain_id(&self) -> u64 {
        match self {
            Network::Arbitrum => 42161,
            Network::ArbitrumSepolia => 421614,
            Network::Localhost => 31337,
        }
    }

    /// Whether the network holds no real value
    pub fn is_testnet(&self) -> bool {
        !matches!(self, Network::Arbitrum)
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Network {
    type Err = PluginConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::ALL
            .into_iter()
            .find(|network| network.name() == s)
            .ok_or_else(|| PluginConfigError::UnknownNetwork(s.to_string()))
    }
}
