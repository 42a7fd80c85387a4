use crate::amount::Amount;
use crate::constants;
use crate::error::ConfigurationError;
use crate::name::NodeParam;
use crate::time::Millis;
use crate::value::ParamValue;

/// Node-tier settings: the only parameters a configuration file may change.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodeSettings {
    pub max_dependency_blocks: u64,
    pub max_discarded_blocks: u64,
    pub max_future_processing_blocks: u64,
    pub future_block_processing_max_periods: u64,
    pub force_keep_final_period: u64,
    pub final_history_length: u64,
    pub stats_timespan: Millis,
    pub block_db_prune_interval: Millis,
    pub message_timeout: Millis,
    pub ask_peer_list_interval: Millis,
    pub node_send_channel_size: u64,
    pub controller_channel_size: u64,
    pub minimal_fees: Amount,
}

impl Default for NodeSettings {
    fn default() -> Self {
        Self {
            max_dependency_blocks: constants::MAX_DEPENDENCY_BLOCKS,
            max_discarded_blocks: constants::MAX_DISCARDED_BLOCKS,
            max_future_processing_blocks: constants::MAX_FUTURE_PROCESSING_BLOCKS,
            future_block_processing_max_periods: constants::FUTURE_BLOCK_PROCESSING_MAX_PERIODS,
            force_keep_final_period: constants::FORCE_KEEP_FINAL_PERIOD,
            final_history_length: constants::FINAL_HISTORY_LENGTH,
            stats_timespan: constants::STATS_TIMESPAN,
            block_db_prune_interval: constants::BLOCK_DB_PRUNE_INTERVAL,
            message_timeout: constants::MESSAGE_TIMEOUT,
            ask_peer_list_interval: constants::ASK_PEER_LIST_INTERVAL,
            node_send_channel_size: constants::NODE_SEND_CHANNEL_SIZE,
            controller_channel_size: constants::CONTROLLER_CHANNEL_SIZE,
            minimal_fees: constants::MINIMAL_FEES,
        }
    }
}

impl NodeSettings {
    pub fn value(&self, param: NodeParam) -> ParamValue {
        use ParamValue::{Duration, Integer};
        match param {
            NodeParam::MaxDependencyBlocks => Integer(self.max_dependency_blocks),
            NodeParam::MaxDiscardedBlocks => Integer(self.max_discarded_blocks),
            NodeParam::MaxFutureProcessingBlocks => Integer(self.max_future_processing_blocks),
            NodeParam::FutureBlockProcessingMaxPeriods => {
                Integer(self.future_block_processing_max_periods)
            }
            NodeParam::ForceKeepFinalPeriod => Integer(self.force_keep_final_period),
            NodeParam::FinalHistoryLength => Integer(self.final_history_length),
            NodeParam::StatsTimespan => Duration(self.stats_timespan),
            NodeParam::BlockDbPruneInterval => Duration(self.block_db_prune_interval),
            NodeParam::MessageTimeout => Duration(self.message_timeout),
            NodeParam::AskPeerListInterval => Duration(self.ask_peer_list_interval),
            NodeParam::NodeSendChannelSize => Integer(self.node_send_channel_size),
            NodeParam::ControllerChannelSize => Integer(self.controller_channel_size),
            NodeParam::MinimalFees => ParamValue::Amount(self.minimal_fees),
        }
    }

    /// Writes one setting from its raw configuration value.
    pub(crate) fn apply(
        &mut self,
        param: NodeParam,
        raw: &toml::Value,
    ) -> Result<(), ConfigurationError> {
        let name = param.as_str();
        match param {
            NodeParam::MaxDependencyBlocks => self.max_dependency_blocks = integer(name, raw)?,
            NodeParam::MaxDiscardedBlocks => self.max_discarded_blocks = integer(name, raw)?,
            NodeParam::MaxFutureProcessingBlocks => {
                self.max_future_processing_blocks = integer(name, raw)?
            }
            NodeParam::FutureBlockProcessingMaxPeriods => {
                self.future_block_processing_max_periods = integer(name, raw)?
            }
            NodeParam::ForceKeepFinalPeriod => self.force_keep_final_period = integer(name, raw)?,
            NodeParam::FinalHistoryLength => self.final_history_length = integer(name, raw)?,
            NodeParam::StatsTimespan => self.stats_timespan = integer(name, raw)?.into(),
            NodeParam::BlockDbPruneInterval => {
                self.block_db_prune_interval = integer(name, raw)?.into()
            }
            NodeParam::MessageTimeout => self.message_timeout = integer(name, raw)?.into(),
            NodeParam::AskPeerListInterval => {
                self.ask_peer_list_interval = integer(name, raw)?.into()
            }
            NodeParam::NodeSendChannelSize => self.node_send_channel_size = integer(name, raw)?,
            NodeParam::ControllerChannelSize => {
                self.controller_channel_size = integer(name, raw)?
            }
            NodeParam::MinimalFees => self.minimal_fees = amount(name, raw)?,
        }
        Ok(())
    }
}

fn integer(name: &'static str, raw: &toml::Value) -> Result<u64, ConfigurationError> {
    let v = raw.as_integer().ok_or_else(|| ConfigurationError::Malformed {
        name,
        reason: format!("expected an integer, got {}", raw.type_str()),
    })?;
    u64::try_from(v).map_err(|_| ConfigurationError::Malformed {
        name,
        reason: format!("must not be negative (got {v})"),
    })
}

// Strings are decimal amounts; integers are whole coins.
fn amount(name: &'static str, raw: &toml::Value) -> Result<Amount, ConfigurationError> {
    match raw {
        toml::Value::String(s) => s.parse().map_err(|e| ConfigurationError::Malformed {
            name,
            reason: format!("{e}"),
        }),
        toml::Value::Integer(_) => {
            let units = integer(name, raw)?;
            Amount::from_units(units).ok_or_else(|| ConfigurationError::Malformed {
                name,
                reason: format!("{units} coins overflows the amount range"),
            })
        }
        other => Err(ConfigurationError::Malformed {
            name,
            reason: format!("expected a decimal string or integer, got {}", other.type_str()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::NodeSettings;
    use crate::amount::Amount;
    use crate::error::ConfigurationError;
    use crate::name::NodeParam;
    use crate::time::Millis;

    #[test]
    fn apply_typed_values() {
        let mut s = NodeSettings::default();
        s.apply(NodeParam::MessageTimeout, &toml::Value::Integer(7_500))
            .expect("timeout");
        s.apply(NodeParam::MinimalFees, &toml::Value::String("0.01".into()))
            .expect("fees");
        s.apply(NodeParam::FinalHistoryLength, &toml::Value::Integer(250))
            .expect("history");
        assert_eq!(s.message_timeout, Millis::from_millis(7_500));
        assert_eq!(s.minimal_fees, Amount::from_raw(10_000_000));
        assert_eq!(s.final_history_length, 250);

        s.apply(NodeParam::MinimalFees, &toml::Value::Integer(2))
            .expect("whole coins");
        assert_eq!(s.minimal_fees, Amount::from_raw(2_000_000_000));
    }

    #[test]
    fn apply_rejects_wrong_shapes() {
        let mut s = NodeSettings::default();
        let before = s.clone();

        let err = s
            .apply(NodeParam::MessageTimeout, &toml::Value::String("5s".into()))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::Malformed { name: "MESSAGE_TIMEOUT", .. }
        ));

        let err = s
            .apply(NodeParam::MaxDependencyBlocks, &toml::Value::Integer(-1))
            .unwrap_err();
        assert!(err.to_string().contains("must not be negative"));

        let err = s
            .apply(NodeParam::MinimalFees, &toml::Value::Boolean(true))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::Malformed { name: "MINIMAL_FEES", .. }
        ));

        let err = s
            .apply(NodeParam::MinimalFees, &toml::Value::String("0.0000000001".into()))
            .unwrap_err();
        assert!(err.to_string().contains("more than 9 fractional digits"));

        assert_eq!(s, before);
    }
}
