//! The registry of deployed plugin contract addresses, keyed by network

use std::{
    collections::BTreeMap,
    fmt::{self, Formatter},
    marker::PhantomData,
};

use serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
};

use crate::{
    constants::PLUGIN_CONTRACTS_JSON,
    contracts::{ContractAddress, ContractRole},
    errors::PluginConfigError,
    networks::Network,
};

/// The plugin contract addresses on a single network.
///
/// Every role is a required field, so a record can only be built once an
/// address is known for each of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginDeployment {
    /// The fee handler contract
    pub fee_handler: ContractAddress,
    /// The fee controller contract
    pub fee_controller: ContractAddress,
    /// The price oracle contract
    pub price_oracle: ContractAddress,
    /// The strategy builder plugin contract
    pub strategy_builder_plugin: ContractAddress,
}

impl PluginDeployment {
    /// Get the address deployed for the given role
    pub fn get(&self, role: ContractRole) -> &ContractAddress {
        match role {
            ContractRole::FeeHandler => &self.fee_handler,
            ContractRole::FeeController => &self.fee_controller,
            ContractRole::PriceOracle => &self.price_oracle,
            ContractRole::StrategyBuilderPlugin => &self.strategy_builder_plugin,
        }
    }

    /// Iterate over every role and its address, in role declaration order
    pub fn iter(&self) -> impl Iterator<Item = (ContractRole, &ContractAddress)> {
        ContractRole::ALL.into_iter().map(|role| (role, self.get(role)))
    }

    /// Build a record from the raw `roleTag -> address` entries of a network,
    /// in the order they appear in the document
    fn from_entries(
        network: Network,
        entries: Vec<(String, String)>,
    ) -> Result<Self, PluginConfigError> {
        let mut addresses = BTreeMap::new();
        for (tag, raw) in entries {
            let role = ContractRole::from_tag(&tag)
                .ok_or(PluginConfigError::UnknownRole { network, tag })?;
            if addresses.insert(role, raw).is_some() {
                return Err(PluginConfigError::DuplicateRole { network, role });
            }
        }

        let mut take = |role: ContractRole| {
            let raw = addresses
                .remove(&role)
                .ok_or(PluginConfigError::MissingRole { network, role })?;
            ContractAddress::parse(&raw)
        };

        let deployment = PluginDeployment {
            fee_handler: take(ContractRole::FeeHandler)?,
            fee_controller: take(ContractRole::FeeController)?,
            price_oracle: take(ContractRole::PriceOracle)?,
            strategy_builder_plugin: take(ContractRole::StrategyBuilderPlugin)?,
        };

        Ok(deployment)
    }
}

/// The deployed plugin contracts on every network they exist on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeploymentRegistry {
    /// The per-network records
    deployments: BTreeMap<Network, PluginDeployment>,
}

impl DeploymentRegistry {
    /// Parse and validate a registry from its JSON form,
    /// `{ "<network>": { "<role tag>": "<address>", ... }, ... }`
    pub fn from_json(json: &str) -> Result<Self, PluginConfigError> {
        let raw: JsonEntries<JsonEntries<String>> =
            serde_json::from_str(json).map_err(|e| PluginConfigError::Deserialize(e.to_string()))?;

        let mut deployments = BTreeMap::new();
        for (name, entries) in raw.0 {
            let network: Network = name.parse()?;
            let deployment = PluginDeployment::from_entries(network, entries.0)?;
            if deployments.insert(network, deployment).is_some() {
                return Err(PluginConfigError::DuplicateNetwork(network));
            }
        }

        Ok(DeploymentRegistry { deployments })
    }

    /// The registry compiled into this crate
    pub fn builtin() -> Result<Self, PluginConfigError> {
        Self::from_json(PLUGIN_CONTRACTS_JSON)
    }

    /// Get the plugin contracts deployed on the given network
    pub fn lookup(&self, network: Network) -> Result<&PluginDeployment, PluginConfigError> {
        self.deployments
            .get(&network)
            .ok_or(PluginConfigError::NetworkNotDeployed(network))
    }

    /// Get the address of a single plugin contract on the given network
    pub fn address(
        &self,
        network: Network,
        role: ContractRole,
    ) -> Result<&ContractAddress, PluginConfigError> {
        self.lookup(network).map(|deployment| deployment.get(role))
    }

    /// The networks with a deployment record
    pub fn networks(&self) -> impl Iterator<Item = Network> + '_ {
        self.deployments.keys().copied()
    }
}

/// The members of a JSON object in document order.
///
/// Unlike a map, repeated keys are all kept so that the caller can reject
/// them instead of silently keeping the last value.
struct JsonEntries<V>(Vec<(String, V)>);

impl<'de, V: Deserialize<'de>> Deserialize<'de> for JsonEntries<V> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        /// Collects every member of an object, duplicates included
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = JsonEntries<V>;

            fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
                formatter.write_str("a JSON object")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::new();
                while let Some(entry) = map.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(JsonEntries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::{
        constants::{ADDRESS_PREFIX, ADDRESS_STRING_LEN},
        contracts::ContractRole,
        errors::PluginConfigError,
        networks::Network,
    };

    use super::DeploymentRegistry;

    /// A complete record for a single network
    fn full_record() -> serde_json::Value {
        json!({
            "FeeHandler": "0x8804615641422382359690192207736354395780",
            "FeeController": "0x0120811264322271481810714614225099001790",
            "PriceOracle": "0x7865283127140966149241704597935173581970",
            "StrategyBuilderPlugin": "0x9955190000000000000000000000000000000000",
        })
    }

    #[test]
    fn test_builtin_registry_is_complete() {
        let registry = DeploymentRegistry::builtin().unwrap();
        assert!(registry.networks().count() > 0);

        for network in registry.networks() {
            let deployment = registry.lookup(network).unwrap();
            let roles: Vec<_> = deployment.iter().map(|(role, _)| role).collect();
            assert_eq!(roles, ContractRole::ALL);

            for (_, address) in deployment.iter() {
                let s = address.to_string();
                assert_eq!(s.len(), ADDRESS_STRING_LEN);
                assert!(s.starts_with(ADDRESS_PREFIX));
            }
        }
    }

    #[test]
    fn test_arbitrum_sepolia_fee_handler() {
        let registry = DeploymentRegistry::builtin().unwrap();
        let fee_handler = registry
            .address(Network::ArbitrumSepolia, ContractRole::FeeHandler)
            .unwrap()
            .to_string();

        assert_eq!(fee_handler.len(), 42);
        assert!(fee_handler.starts_with("0x"));
        assert_eq!(fee_handler, "0x8804615641422382359690192207736354395780");
    }

    #[test]
    fn test_unlisted_network_not_found() {
        let registry = DeploymentRegistry::builtin().unwrap();
        assert_eq!(
            registry.lookup(Network::Arbitrum),
            Err(PluginConfigError::NetworkNotDeployed(Network::Arbitrum))
        );
        assert_eq!(
            registry.address(Network::Localhost, ContractRole::PriceOracle),
            Err(PluginConfigError::NetworkNotDeployed(Network::Localhost))
        );
    }

    #[test]
    fn test_reject_missing_role() {
        let mut record = full_record();
        record.as_object_mut().unwrap().remove("PriceOracle");
        let json = json!({ "arbitrumSepolia": record }).to_string();

        assert_eq!(
            DeploymentRegistry::from_json(&json),
            Err(PluginConfigError::MissingRole {
                network: Network::ArbitrumSepolia,
                role: ContractRole::PriceOracle,
            })
        );
    }

    #[test]
    fn test_reject_unknown_role() {
        let mut record = full_record();
        record["SwapRouter"] = json!("0x0000000000000000000000000000000000000001");
        let json = json!({ "arbitrumSepolia": record }).to_string();

        assert_eq!(
            DeploymentRegistry::from_json(&json),
            Err(PluginConfigError::UnknownRole {
                network: Network::ArbitrumSepolia,
                tag: "SwapRouter".to_string(),
            })
        );
    }

    #[test]
    fn test_reject_malformed_address() {
        let mut record = full_record();
        record["FeeController"] = json!("0x1234");
        let json = json!({ "arbitrumSepolia": record }).to_string();

        assert_eq!(
            DeploymentRegistry::from_json(&json),
            Err(PluginConfigError::InvalidAddress("0x1234".to_string()))
        );
    }

    #[test]
    fn test_reject_unknown_network() {
        let json = json!({ "goerli": full_record() }).to_string();
        assert_eq!(
            DeploymentRegistry::from_json(&json),
            Err(PluginConfigError::UnknownNetwork("goerli".to_string()))
        );
    }

    #[test]
    fn test_reject_non_string_address() {
        let mut record = full_record();
        record["FeeHandler"] = json!(null);
        let json = json!({ "arbitrumSepolia": record }).to_string();

        assert!(matches!(
            DeploymentRegistry::from_json(&json),
            Err(PluginConfigError::Deserialize(_))
        ));
    }

    #[test]
    fn test_reject_duplicate_role() {
        // `json!` cannot repeat a key, so the document is written out by hand
        let json = r#"{
            "arbitrumSepolia": {
                "FeeHandler": "0x1111111111111111111111111111111111111111",
                "FeeController": "0x0120811264322271481810714614225099001790",
                "PriceOracle": "0x7865283127140966149241704597935173581970",
                "StrategyBuilderPlugin": "0x9955190000000000000000000000000000000000",
                "FeeHandler": "0x2222222222222222222222222222222222222222"
            }
        }"#;

        assert_eq!(
            DeploymentRegistry::from_json(json),
            Err(PluginConfigError::DuplicateRole {
                network: Network::ArbitrumSepolia,
                role: ContractRole::FeeHandler,
            })
        );
    }

    #[test]
    fn test_reject_duplicate_network() {
        let record = full_record();
        let json = format!(r#"{{ "localhost": {record}, "localhost": {record} }}"#);

        assert_eq!(
            DeploymentRegistry::from_json(&json),
            Err(PluginConfigError::DuplicateNetwork(Network::Localhost))
        );
    }

    #[test]
    fn test_reject_non_object_record() {
        let json = json!({ "arbitrumSepolia": ["0x8804615641422382359690192207736354395780"] });

        assert!(matches!(
            DeploymentRegistry::from_json(&json.to_string()),
            Err(PluginConfigError::Deserialize(_))
        ));
    }

    #[test]
    fn test_multiple_networks() {
        let json = json!({
            "arbitrumSepolia": full_record(),
            "localhost": full_record(),
        })
        .to_string();

        let registry = DeploymentRegistry::from_json(&json).unwrap();
        let networks: Vec<_> = registry.networks().collect();
        assert_eq!(networks, [Network::ArbitrumSepolia, Network::Localhost]);
        assert!(registry.lookup(Network::Arbitrum).is_err());
    }
}
