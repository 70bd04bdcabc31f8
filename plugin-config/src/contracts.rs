//! The plugin contract roles and the addresses they are deployed at

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use alloy_primitives::Address;

use crate::{
    constants::{ADDRESS_PREFIX, ADDRESS_STRING_LEN},
    errors::PluginConfigError,
};

/// A logical role filled by one of the deployed plugin contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContractRole {
    /// The contract collecting strategy fees
    FeeHandler,
    /// The contract configuring fee rates
    FeeController,
    /// The price oracle consulted when computing fees
    PriceOracle,
    /// The strategy builder plugin itself
    StrategyBuilderPlugin,
}

impl ContractRole {
    /// All roles, in declaration order
    pub const ALL: [ContractRole; 4] = [
        ContractRole::FeeHandler,
        ContractRole::FeeController,
        ContractRole::PriceOracle,
        ContractRole::StrategyBuilderPlugin,
    ];

    /// The tag identifying the role in the registry and in parameter files
    pub fn tag(&self) -> &'static str {
        match self {
            ContractRole::FeeHandler => "FeeHandler",
            ContractRole::FeeController => "FeeController",
            ContractRole::PriceOracle => "PriceOracle",
            ContractRole::StrategyBuilderPlugin => "StrategyBuilderPlugin",
        }
    }

    /// Look up a role by its tag
    pub fn from_tag(tag: &str) -> Option<Self> {
        ContractRole::ALL.into_iter().find(|role| role.tag() == tag)
    }
}

impl Display for ContractRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A syntactically valid EVM contract address.
///
/// Only the shape of the address is checked (`0x` followed by 40 hex digits);
/// mixed-case checksums are not verified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContractAddress(Address);

impl ContractAddress {
    /// Parse a `0x`-prefixed, hex-encoded address
    pub fn parse(s: &str) -> Result<Self, PluginConfigError> {
        if !s.starts_with(ADDRESS_PREFIX) || s.len() != ADDRESS_STRING_LEN {
            return Err(PluginConfigError::InvalidAddress(s.to_string()));
        }

        Address::from_str(s)
            .map(ContractAddress)
            .map_err(|_| PluginConfigError::InvalidAddress(s.to_string()))
    }

    /// The underlying address
    pub fn address(&self) -> Address {
        self.0
    }
}

impl FromStr for ContractAddress {
    type Err = PluginConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ContractAddress::parse(s)
    }
}

impl Display for ContractAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::{constants::ADDRESS_STRING_LEN, errors::PluginConfigError};

    use super::{ContractAddress, ContractRole};

    #[test]
    fn test_role_tags() {
        let tags: Vec<_> = ContractRole::ALL.iter().map(|role| role.tag()).collect();
        assert_eq!(
            tags,
            ["FeeHandler", "FeeController", "PriceOracle", "StrategyBuilderPlugin"]
        );

        for role in ContractRole::ALL {
            assert_eq!(ContractRole::from_tag(role.tag()), Some(role));
        }
        assert_eq!(ContractRole::from_tag("FEE_HANDLER"), None);
    }

    #[test]
    fn test_parse_address() {
        let s = "0x8804615641422382359690192207736354395780";
        let addr = ContractAddress::parse(s).unwrap();
        assert_eq!(addr.to_string(), s);
        assert_eq!(addr.to_string().len(), ADDRESS_STRING_LEN);

        // Mixed case is accepted and displayed in lowercase
        let mixed = "0xAbCdEf0000000000000000000000000000000001";
        let addr = ContractAddress::parse(mixed).unwrap();
        assert_eq!(addr.to_string(), mixed.to_lowercase());
    }

    #[test]
    fn test_reject_malformed_address() {
        let malformed = [
            "",
            "0x",
            // Missing prefix
            "8804615641422382359690192207736354395780",
            // Too short
            "0x880461564142238235969019220773635439578",
            // Too long
            "0x88046156414223823596901922077363543957800",
            // Non-hex digit
            "0x880461564142238235969019220773635439578g",
            // Uppercase prefix
            "0X8804615641422382359690192207736354395780",
        ];

        for s in malformed {
            assert_eq!(
                ContractAddress::parse(s),
                Err(PluginConfigError::InvalidAddress(s.to_string())),
                "{s} should be rejected"
            );
        }
    }
}
