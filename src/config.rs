use serde::Deserialize;

use crate::model::common::Address;

/// Ledger configuration.
///
/// With no creators listed, any principal may create and deactivate
/// elections.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Principals allowed to create and deactivate elections.
    #[serde(default)]
    creators: Vec<Address>,
}

impl Config {
    /// A configuration that lets any principal administer elections.
    pub fn open() -> Self {
        Self::default()
    }

    /// Restrict election administration to the given principals.
    pub fn with_creators(creators: Vec<Address>) -> Self {
        Self { creators }
    }

    /// Whether the given principal may create or deactivate elections.
    pub fn may_administer(&self, who: &Address) -> bool {
        self.creators.is_empty() || self.creators.contains(who)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_config_admits_anyone() {
        assert!(Config::open().may_administer(&Address::example1()));
    }

    #[test]
    fn allowlist_restricts_administration() {
        let config = Config::with_creators(vec![Address::example1()]);

        assert!(config.may_administer(&Address::example1()));
        assert!(!config.may_administer(&Address::example2()));
    }

    #[test]
    fn creators_normalise_on_deserialise() {
        let config: Config =
            serde_json::from_str(r#"{"creators": ["0xA11CE0000000000000000000000000000000000A"]}"#)
                .unwrap();

        assert!(config.may_administer(&Address::example1()));
        assert!(!config.may_administer(&Address::example2()));
    }
}
