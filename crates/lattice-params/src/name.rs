//! Closed catalogue of parameter names.
//!
//! Protocol-tier and node-tier names are separate enums so that nothing which
//! accepts a [`NodeParam`] can be handed a consensus-critical constant.

use core::fmt;
use core::str::FromStr;

use crate::error::UnknownParameterError;
use crate::value::Category;

/// Protocol-fixed constants. Never overridable: they affect wire and
/// consensus compatibility.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ProtocolParam {
    ThreadCount,
    T0,
    GenesisTimestamp,
    EndTimestamp,
    PeriodsPerCycle,
    PosLockCycles,
    PosLookbackCycles,
    PosSavedCycles,
    OperationValidityPeriods,
    DeltaF0,
    EndorsementCount,

    HashSizeBytes,
    AddressSizeBytes,
    BlockIdSizeBytes,
    OperationIdSizeBytes,
    OperationIdPrefixSizeBytes,
    EndorsementIdSizeBytes,
    SlotKeySize,
    PublicKeySizeBytes,
    SignatureSizeBytes,
    BootstrapRandomnessSizeBytes,

    MaxBlockSize,
    MaxMessageSize,
    MaxBootstrapMessageSize,
    LedgerPartSizeMessageBytes,
    MaxDatastoreKeyLength,
    MaxDatastoreValueLength,

    MaxOperationsPerBlock,
    MaxGasPerBlock,
    MaxAdvertiseLength,
    MaxAskBlocksPerMessage,
    MaxOperationsPerMessage,
    MaxEndorsementsPerMessage,

    MaxBootstrapBlocks,
    MaxBootstrapCliques,
    MaxBootstrapDeps,
    MaxBootstrapChildren,
    MaxBootstrapPosCycles,
    MaxBootstrapPosEntries,

    RollPrice,
    BlockReward,
    LedgerCostPerByte,

    GenesisKeys,
    InitialDrawSeed,
}

impl ProtocolParam {
    /// Catalogue order. The fingerprint encodes parameters in this order.
    pub const ALL: [ProtocolParam; 44] = [
        ProtocolParam::ThreadCount,
        ProtocolParam::T0,
        ProtocolParam::GenesisTimestamp,
        ProtocolParam::EndTimestamp,
        ProtocolParam::PeriodsPerCycle,
        ProtocolParam::PosLockCycles,
        ProtocolParam::PosLookbackCycles,
        ProtocolParam::PosSavedCycles,
        ProtocolParam::OperationValidityPeriods,
        ProtocolParam::DeltaF0,
        ProtocolParam::EndorsementCount,
        ProtocolParam::HashSizeBytes,
        ProtocolParam::AddressSizeBytes,
        ProtocolParam::BlockIdSizeBytes,
        ProtocolParam::OperationIdSizeBytes,
        ProtocolParam::OperationIdPrefixSizeBytes,
        ProtocolParam::EndorsementIdSizeBytes,
        ProtocolParam::SlotKeySize,
        ProtocolParam::PublicKeySizeBytes,
        ProtocolParam::SignatureSizeBytes,
        ProtocolParam::BootstrapRandomnessSizeBytes,
        ProtocolParam::MaxBlockSize,
        ProtocolParam::MaxMessageSize,
        ProtocolParam::MaxBootstrapMessageSize,
        ProtocolParam::LedgerPartSizeMessageBytes,
        ProtocolParam::MaxDatastoreKeyLength,
        ProtocolParam::MaxDatastoreValueLength,
        ProtocolParam::MaxOperationsPerBlock,
        ProtocolParam::MaxGasPerBlock,
        ProtocolParam::MaxAdvertiseLength,
        ProtocolParam::MaxAskBlocksPerMessage,
        ProtocolParam::MaxOperationsPerMessage,
        ProtocolParam::MaxEndorsementsPerMessage,
        ProtocolParam::MaxBootstrapBlocks,
        ProtocolParam::MaxBootstrapCliques,
        ProtocolParam::MaxBootstrapDeps,
        ProtocolParam::MaxBootstrapChildren,
        ProtocolParam::MaxBootstrapPosCycles,
        ProtocolParam::MaxBootstrapPosEntries,
        ProtocolParam::RollPrice,
        ProtocolParam::BlockReward,
        ProtocolParam::LedgerCostPerByte,
        ProtocolParam::GenesisKeys,
        ProtocolParam::InitialDrawSeed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProtocolParam::ThreadCount => "THREAD_COUNT",
            ProtocolParam::T0 => "T0",
            ProtocolParam::GenesisTimestamp => "GENESIS_TIMESTAMP",
            ProtocolParam::EndTimestamp => "END_TIMESTAMP",
            ProtocolParam::PeriodsPerCycle => "PERIODS_PER_CYCLE",
            ProtocolParam::PosLockCycles => "POS_LOCK_CYCLES",
            ProtocolParam::PosLookbackCycles => "POS_LOOKBACK_CYCLES",
            ProtocolParam::PosSavedCycles => "POS_SAVED_CYCLES",
            ProtocolParam::OperationValidityPeriods => "OPERATION_VALIDITY_PERIODS",
            ProtocolParam::DeltaF0 => "DELTA_F0",
            ProtocolParam::EndorsementCount => "ENDORSEMENT_COUNT",

            ProtocolParam::HashSizeBytes => "HASH_SIZE_BYTES",
            ProtocolParam::AddressSizeBytes => "ADDRESS_SIZE_BYTES",
            ProtocolParam::BlockIdSizeBytes => "BLOCK_ID_SIZE_BYTES",
            ProtocolParam::OperationIdSizeBytes => "OPERATION_ID_SIZE_BYTES",
            ProtocolParam::OperationIdPrefixSizeBytes => "OPERATION_ID_PREFIX_SIZE_BYTES",
            ProtocolParam::EndorsementIdSizeBytes => "ENDORSEMENT_ID_SIZE_BYTES",
            ProtocolParam::SlotKeySize => "SLOT_KEY_SIZE",
            ProtocolParam::PublicKeySizeBytes => "PUBLIC_KEY_SIZE_BYTES",
            ProtocolParam::SignatureSizeBytes => "SIGNATURE_SIZE_BYTES",
            ProtocolParam::BootstrapRandomnessSizeBytes => "BOOTSTRAP_RANDOMNESS_SIZE_BYTES",

            ProtocolParam::MaxBlockSize => "MAX_BLOCK_SIZE",
            ProtocolParam::MaxMessageSize => "MAX_MESSAGE_SIZE",
            ProtocolParam::MaxBootstrapMessageSize => "MAX_BOOTSTRAP_MESSAGE_SIZE",
            ProtocolParam::LedgerPartSizeMessageBytes => "LEDGER_PART_SIZE_MESSAGE_BYTES",
            ProtocolParam::MaxDatastoreKeyLength => "MAX_DATASTORE_KEY_LENGTH",
            ProtocolParam::MaxDatastoreValueLength => "MAX_DATASTORE_VALUE_LENGTH",

            ProtocolParam::MaxOperationsPerBlock => "MAX_OPERATIONS_PER_BLOCK",
            ProtocolParam::MaxGasPerBlock => "MAX_GAS_PER_BLOCK",
            ProtocolParam::MaxAdvertiseLength => "MAX_ADVERTISE_LENGTH",
            ProtocolParam::MaxAskBlocksPerMessage => "MAX_ASK_BLOCKS_PER_MESSAGE",
            ProtocolParam::MaxOperationsPerMessage => "MAX_OPERATIONS_PER_MESSAGE",
            ProtocolParam::MaxEndorsementsPerMessage => "MAX_ENDORSEMENTS_PER_MESSAGE",

            ProtocolParam::MaxBootstrapBlocks => "MAX_BOOTSTRAP_BLOCKS",
            ProtocolParam::MaxBootstrapCliques => "MAX_BOOTSTRAP_CLIQUES",
            ProtocolParam::MaxBootstrapDeps => "MAX_BOOTSTRAP_DEPS",
            ProtocolParam::MaxBootstrapChildren => "MAX_BOOTSTRAP_CHILDREN",
            ProtocolParam::MaxBootstrapPosCycles => "MAX_BOOTSTRAP_POS_CYCLES",
            ProtocolParam::MaxBootstrapPosEntries => "MAX_BOOTSTRAP_POS_ENTRIES",

            ProtocolParam::RollPrice => "ROLL_PRICE",
            ProtocolParam::BlockReward => "BLOCK_REWARD",
            ProtocolParam::LedgerCostPerByte => "LEDGER_COST_PER_BYTE",

            ProtocolParam::GenesisKeys => "GENESIS_KEYS",
            ProtocolParam::InitialDrawSeed => "INITIAL_DRAW_SEED",
        }
    }

    pub fn category(self) -> Category {
        match self {
            ProtocolParam::ThreadCount
            | ProtocolParam::T0
            | ProtocolParam::PeriodsPerCycle
            | ProtocolParam::PosLockCycles
            | ProtocolParam::PosLookbackCycles
            | ProtocolParam::OperationValidityPeriods => Category::Timing,

            ProtocolParam::GenesisTimestamp | ProtocolParam::EndTimestamp => {
                Category::DerivedTestOverride
            }

            ProtocolParam::HashSizeBytes
            | ProtocolParam::AddressSizeBytes
            | ProtocolParam::BlockIdSizeBytes
            | ProtocolParam::OperationIdSizeBytes
            | ProtocolParam::OperationIdPrefixSizeBytes
            | ProtocolParam::EndorsementIdSizeBytes
            | ProtocolParam::SlotKeySize
            | ProtocolParam::PublicKeySizeBytes
            | ProtocolParam::SignatureSizeBytes
            | ProtocolParam::BootstrapRandomnessSizeBytes
            | ProtocolParam::MaxBlockSize
            | ProtocolParam::MaxMessageSize
            | ProtocolParam::MaxBootstrapMessageSize
            | ProtocolParam::LedgerPartSizeMessageBytes
            | ProtocolParam::MaxDatastoreKeyLength
            | ProtocolParam::MaxDatastoreValueLength => Category::SizeLimit,

            ProtocolParam::PosSavedCycles
            | ProtocolParam::DeltaF0
            | ProtocolParam::EndorsementCount
            | ProtocolParam::MaxOperationsPerBlock
            | ProtocolParam::MaxGasPerBlock
            | ProtocolParam::MaxAdvertiseLength
            | ProtocolParam::MaxAskBlocksPerMessage
            | ProtocolParam::MaxOperationsPerMessage
            | ProtocolParam::MaxEndorsementsPerMessage
            | ProtocolParam::MaxBootstrapBlocks
            | ProtocolParam::MaxBootstrapCliques
            | ProtocolParam::MaxBootstrapDeps
            | ProtocolParam::MaxBootstrapChildren
            | ProtocolParam::MaxBootstrapPosCycles
            | ProtocolParam::MaxBootstrapPosEntries => Category::CountLimit,

            ProtocolParam::RollPrice
            | ProtocolParam::BlockReward
            | ProtocolParam::LedgerCostPerByte => Category::Monetary,

            ProtocolParam::GenesisKeys | ProtocolParam::InitialDrawSeed => {
                Category::CryptographicMaterial
            }
        }
    }
}

/// Node-level settings, the only tier a configuration file may set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum NodeParam {
    MaxDependencyBlocks,
    MaxDiscardedBlocks,
    MaxFutureProcessingBlocks,
    FutureBlockProcessingMaxPeriods,
    ForceKeepFinalPeriod,
    FinalHistoryLength,
    StatsTimespan,
    BlockDbPruneInterval,
    MessageTimeout,
    AskPeerListInterval,
    NodeSendChannelSize,
    ControllerChannelSize,
    MinimalFees,
}

impl NodeParam {
    pub const ALL: [NodeParam; 13] = [
        NodeParam::MaxDependencyBlocks,
        NodeParam::MaxDiscardedBlocks,
        NodeParam::MaxFutureProcessingBlocks,
        NodeParam::FutureBlockProcessingMaxPeriods,
        NodeParam::ForceKeepFinalPeriod,
        NodeParam::FinalHistoryLength,
        NodeParam::StatsTimespan,
        NodeParam::BlockDbPruneInterval,
        NodeParam::MessageTimeout,
        NodeParam::AskPeerListInterval,
        NodeParam::NodeSendChannelSize,
        NodeParam::ControllerChannelSize,
        NodeParam::MinimalFees,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NodeParam::MaxDependencyBlocks => "MAX_DEPENDENCY_BLOCKS",
            NodeParam::MaxDiscardedBlocks => "MAX_DISCARDED_BLOCKS",
            NodeParam::MaxFutureProcessingBlocks => "MAX_FUTURE_PROCESSING_BLOCKS",
            NodeParam::FutureBlockProcessingMaxPeriods => "FUTURE_BLOCK_PROCESSING_MAX_PERIODS",
            NodeParam::ForceKeepFinalPeriod => "FORCE_KEEP_FINAL_PERIOD",
            NodeParam::FinalHistoryLength => "FINAL_HISTORY_LENGTH",
            NodeParam::StatsTimespan => "STATS_TIMESPAN",
            NodeParam::BlockDbPruneInterval => "BLOCK_DB_PRUNE_INTERVAL",
            NodeParam::MessageTimeout => "MESSAGE_TIMEOUT",
            NodeParam::AskPeerListInterval => "ASK_PEER_LIST_INTERVAL",
            NodeParam::NodeSendChannelSize => "NODE_SEND_CHANNEL_SIZE",
            NodeParam::ControllerChannelSize => "CONTROLLER_CHANNEL_SIZE",
            NodeParam::MinimalFees => "MINIMAL_FEES",
        }
    }

    pub fn category(self) -> Category {
        match self {
            NodeParam::MaxDependencyBlocks
            | NodeParam::MaxDiscardedBlocks
            | NodeParam::MaxFutureProcessingBlocks
            | NodeParam::FinalHistoryLength
            | NodeParam::NodeSendChannelSize
            | NodeParam::ControllerChannelSize => Category::CountLimit,

            NodeParam::FutureBlockProcessingMaxPeriods
            | NodeParam::ForceKeepFinalPeriod
            | NodeParam::StatsTimespan
            | NodeParam::BlockDbPruneInterval
            | NodeParam::MessageTimeout
            | NodeParam::AskPeerListInterval => Category::Timing,

            NodeParam::MinimalFees => Category::Monetary,
        }
    }
}

/// Any registered parameter name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParamName {
    Protocol(ProtocolParam),
    Node(NodeParam),
}

impl ParamName {
    /// Every name, protocol tier first, each tier in catalogue order.
    pub fn all() -> impl Iterator<Item = ParamName> {
        ProtocolParam::ALL
            .into_iter()
            .map(ParamName::Protocol)
            .chain(NodeParam::ALL.into_iter().map(ParamName::Node))
    }

    /// Resolves the canonical `SCREAMING_SNAKE_CASE` spelling or its
    /// all-lowercase form. Mixed case is not a registered name.
    pub fn lookup(name: &str) -> Option<ParamName> {
        let lowercase = !name.bytes().any(|b| b.is_ascii_uppercase());
        Self::all().find(|p| {
            let canonical = p.as_str();
            name == canonical || (lowercase && name.eq_ignore_ascii_case(canonical))
        })
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ParamName::Protocol(p) => p.as_str(),
            ParamName::Node(n) => n.as_str(),
        }
    }

    pub fn category(self) -> Category {
        match self {
            ParamName::Protocol(p) => p.category(),
            ParamName::Node(n) => n.category(),
        }
    }

    pub fn is_configurable(self) -> bool {
        matches!(self, ParamName::Node(_))
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParamName {
    type Err = UnknownParameterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ParamName::lookup(s).ok_or_else(|| UnknownParameterError::new(s))
    }
}

impl From<ProtocolParam> for ParamName {
    fn from(p: ProtocolParam) -> Self {
        ParamName::Protocol(p)
    }
}

impl From<NodeParam> for ParamName {
    fn from(n: NodeParam) -> Self {
        ParamName::Node(n)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{NodeParam, ParamName, ProtocolParam};

    #[test]
    fn names_are_unique_in_both_spellings() {
        let mut seen = HashSet::new();
        for name in ParamName::all() {
            assert!(seen.insert(name.as_str().to_string()), "{name}");
            assert!(seen.insert(name.as_str().to_ascii_lowercase()), "{name}");
        }
        assert_eq!(seen.len(), 2 * (ProtocolParam::ALL.len() + NodeParam::ALL.len()));
    }

    #[test]
    fn lookup_accepts_canonical_and_lowercase_only() {
        assert_eq!(
            ParamName::lookup("THREAD_COUNT"),
            Some(ParamName::Protocol(ProtocolParam::ThreadCount))
        );
        assert_eq!(
            ParamName::lookup("message_timeout"),
            Some(ParamName::Node(NodeParam::MessageTimeout))
        );
        assert_eq!(ParamName::lookup("Thread_Count"), None);
        assert_eq!(ParamName::lookup("THREAD_COUNTS"), None);
        assert_eq!(ParamName::lookup(""), None);
    }

    #[test]
    fn every_name_round_trips_through_lookup() {
        for name in ParamName::all() {
            assert_eq!(ParamName::lookup(name.as_str()), Some(name));
            assert_eq!(name.as_str().parse::<ParamName>().ok(), Some(name));
        }
    }

    #[test]
    fn only_node_tier_is_configurable() {
        assert!(ProtocolParam::ALL
            .iter()
            .all(|p| !ParamName::from(*p).is_configurable()));
        assert!(NodeParam::ALL
            .iter()
            .all(|n| ParamName::from(*n).is_configurable()));
    }
}
