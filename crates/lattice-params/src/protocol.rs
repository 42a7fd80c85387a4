use crate::amount::Amount;
use crate::constants;
use crate::hash::sha3_256;
use crate::name::ProtocolParam;
use crate::time::Millis;
use crate::value::{GenesisKeySet, HexBytes, ParamValue};

/// Protocol-tier constants.
///
/// Nothing in the override path writes to this struct. A sealed registry
/// holds the compiled-in values unless it was built through
/// `Registry::<Test>::from_parameters`, which exists only under the
/// `testing` feature.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtocolConstants {
    pub thread_count: u8,
    pub t0: Millis,
    pub genesis_timestamp: Millis,
    pub end_timestamp: Option<Millis>,
    pub periods_per_cycle: u64,
    pub pos_lock_cycles: u64,
    pub pos_lookback_cycles: u64,
    pub pos_saved_cycles: u64,
    pub operation_validity_periods: u64,
    pub delta_f0: u64,
    pub endorsement_count: u64,

    pub hash_size_bytes: u64,
    pub address_size_bytes: u64,
    pub block_id_size_bytes: u64,
    pub operation_id_size_bytes: u64,
    pub operation_id_prefix_size_bytes: u64,
    pub endorsement_id_size_bytes: u64,
    pub slot_key_size: u64,
    pub public_key_size_bytes: u64,
    pub signature_size_bytes: u64,
    pub bootstrap_randomness_size_bytes: u64,

    pub max_block_size: u64,
    pub max_message_size: u64,
    pub max_bootstrap_message_size: u64,
    pub ledger_part_size_message_bytes: u64,
    pub max_datastore_key_length: u64,
    pub max_datastore_value_length: u64,

    pub max_operations_per_block: u64,
    pub max_gas_per_block: u64,
    pub max_advertise_length: u64,
    pub max_ask_blocks_per_message: u64,
    pub max_operations_per_message: u64,
    pub max_endorsements_per_message: u64,

    pub max_bootstrap_blocks: u64,
    pub max_bootstrap_cliques: u64,
    pub max_bootstrap_deps: u64,
    pub max_bootstrap_children: u64,
    pub max_bootstrap_pos_cycles: u64,
    pub max_bootstrap_pos_entries: u64,

    pub roll_price: Amount,
    pub block_reward: Amount,
    pub ledger_cost_per_byte: Amount,

    pub genesis_keys: GenesisKeySet,
    pub initial_draw_seed: HexBytes,
}

impl ProtocolConstants {
    pub fn production() -> Self {
        Self {
            thread_count: constants::THREAD_COUNT,
            t0: constants::T0,
            genesis_timestamp: constants::GENESIS_TIMESTAMP,
            end_timestamp: constants::END_TIMESTAMP,
            periods_per_cycle: constants::PERIODS_PER_CYCLE,
            pos_lock_cycles: constants::POS_LOCK_CYCLES,
            pos_lookback_cycles: constants::POS_LOOKBACK_CYCLES,
            pos_saved_cycles: constants::POS_SAVED_CYCLES,
            operation_validity_periods: constants::OPERATION_VALIDITY_PERIODS,
            delta_f0: constants::DELTA_F0,
            endorsement_count: constants::ENDORSEMENT_COUNT,

            hash_size_bytes: constants::HASH_SIZE_BYTES,
            address_size_bytes: constants::ADDRESS_SIZE_BYTES,
            block_id_size_bytes: constants::BLOCK_ID_SIZE_BYTES,
            operation_id_size_bytes: constants::OPERATION_ID_SIZE_BYTES,
            operation_id_prefix_size_bytes: constants::OPERATION_ID_PREFIX_SIZE_BYTES,
            endorsement_id_size_bytes: constants::ENDORSEMENT_ID_SIZE_BYTES,
            slot_key_size: constants::SLOT_KEY_SIZE,
            public_key_size_bytes: constants::PUBLIC_KEY_SIZE_BYTES,
            signature_size_bytes: constants::SIGNATURE_SIZE_BYTES,
            bootstrap_randomness_size_bytes: constants::BOOTSTRAP_RANDOMNESS_SIZE_BYTES,

            max_block_size: constants::MAX_BLOCK_SIZE,
            max_message_size: constants::MAX_MESSAGE_SIZE,
            max_bootstrap_message_size: constants::MAX_BOOTSTRAP_MESSAGE_SIZE,
            ledger_part_size_message_bytes: constants::LEDGER_PART_SIZE_MESSAGE_BYTES,
            max_datastore_key_length: constants::MAX_DATASTORE_KEY_LENGTH,
            max_datastore_value_length: constants::MAX_DATASTORE_VALUE_LENGTH,

            max_operations_per_block: constants::MAX_OPERATIONS_PER_BLOCK,
            max_gas_per_block: constants::MAX_GAS_PER_BLOCK,
            max_advertise_length: constants::MAX_ADVERTISE_LENGTH,
            max_ask_blocks_per_message: constants::MAX_ASK_BLOCKS_PER_MESSAGE,
            max_operations_per_message: constants::MAX_OPERATIONS_PER_MESSAGE,
            max_endorsements_per_message: constants::MAX_ENDORSEMENTS_PER_MESSAGE,

            max_bootstrap_blocks: constants::MAX_BOOTSTRAP_BLOCKS,
            max_bootstrap_cliques: constants::MAX_BOOTSTRAP_CLIQUES,
            max_bootstrap_deps: constants::MAX_BOOTSTRAP_DEPS,
            max_bootstrap_children: constants::MAX_BOOTSTRAP_CHILDREN,
            max_bootstrap_pos_cycles: constants::MAX_BOOTSTRAP_POS_CYCLES,
            max_bootstrap_pos_entries: constants::MAX_BOOTSTRAP_POS_ENTRIES,

            roll_price: constants::ROLL_PRICE,
            block_reward: constants::BLOCK_REWARD,
            ledger_cost_per_byte: constants::LEDGER_COST_PER_BYTE,

            genesis_keys: GenesisKeySet {
                genesis_public_key: HexBytes::from(constants::GENESIS_PUBLIC_KEY),
                initial_stakers: constants::INITIAL_STAKER_PUBLIC_KEYS
                    .iter()
                    .map(|k| HexBytes::from(*k))
                    .collect(),
            },
            initial_draw_seed: HexBytes::from(sha3_256(constants::INITIAL_DRAW_SEED_PREIMAGE)),
        }
    }

    /// Production constants with genesis timing re-derived from `start`:
    /// genesis lands `TEST_GENESIS_DELAY` after it and there is no end.
    pub fn test_at(start: Millis) -> Self {
        Self {
            genesis_timestamp: start.saturating_add(constants::TEST_GENESIS_DELAY),
            end_timestamp: None,
            ..Self::production()
        }
    }

    pub fn value(&self, param: ProtocolParam) -> ParamValue {
        use ParamValue::{ByteSize, Integer};
        match param {
            ProtocolParam::ThreadCount => Integer(u64::from(self.thread_count)),
            ProtocolParam::T0 => ParamValue::Duration(self.t0),
            ProtocolParam::GenesisTimestamp => ParamValue::Timestamp(self.genesis_timestamp),
            ProtocolParam::EndTimestamp => ParamValue::OptionalTimestamp(self.end_timestamp),
            ProtocolParam::PeriodsPerCycle => Integer(self.periods_per_cycle),
            ProtocolParam::PosLockCycles => Integer(self.pos_lock_cycles),
            ProtocolParam::PosLookbackCycles => Integer(self.pos_lookback_cycles),
            ProtocolParam::PosSavedCycles => Integer(self.pos_saved_cycles),
            ProtocolParam::OperationValidityPeriods => Integer(self.operation_validity_periods),
            ProtocolParam::DeltaF0 => Integer(self.delta_f0),
            ProtocolParam::EndorsementCount => Integer(self.endorsement_count),

            ProtocolParam::HashSizeBytes => ByteSize(self.hash_size_bytes),
            ProtocolParam::AddressSizeBytes => ByteSize(self.address_size_bytes),
            ProtocolParam::BlockIdSizeBytes => ByteSize(self.block_id_size_bytes),
            ProtocolParam::OperationIdSizeBytes => ByteSize(self.operation_id_size_bytes),
            ProtocolParam::OperationIdPrefixSizeBytes => {
                ByteSize(self.operation_id_prefix_size_bytes)
            }
            ProtocolParam::EndorsementIdSizeBytes => ByteSize(self.endorsement_id_size_bytes),
            ProtocolParam::SlotKeySize => ByteSize(self.slot_key_size),
            ProtocolParam::PublicKeySizeBytes => ByteSize(self.public_key_size_bytes),
            ProtocolParam::SignatureSizeBytes => ByteSize(self.signature_size_bytes),
            ProtocolParam::BootstrapRandomnessSizeBytes => {
                ByteSize(self.bootstrap_randomness_size_bytes)
            }

            ProtocolParam::MaxBlockSize => ByteSize(self.max_block_size),
            ProtocolParam::MaxMessageSize => ByteSize(self.max_message_size),
            ProtocolParam::MaxBootstrapMessageSize => ByteSize(self.max_bootstrap_message_size),
            ProtocolParam::LedgerPartSizeMessageBytes => {
                ByteSize(self.ledger_part_size_message_bytes)
            }
            ProtocolParam::MaxDatastoreKeyLength => ByteSize(self.max_datastore_key_length),
            ProtocolParam::MaxDatastoreValueLength => ByteSize(self.max_datastore_value_length),

            ProtocolParam::MaxOperationsPerBlock => Integer(self.max_operations_per_block),
            ProtocolParam::MaxGasPerBlock => Integer(self.max_gas_per_block),
            ProtocolParam::MaxAdvertiseLength => Integer(self.max_advertise_length),
            ProtocolParam::MaxAskBlocksPerMessage => Integer(self.max_ask_blocks_per_message),
            ProtocolParam::MaxOperationsPerMessage => Integer(self.max_operations_per_message),
            ProtocolParam::MaxEndorsementsPerMessage => {
                Integer(self.max_endorsements_per_message)
            }

            ProtocolParam::MaxBootstrapBlocks => Integer(self.max_bootstrap_blocks),
            ProtocolParam::MaxBootstrapCliques => Integer(self.max_bootstrap_cliques),
            ProtocolParam::MaxBootstrapDeps => Integer(self.max_bootstrap_deps),
            ProtocolParam::MaxBootstrapChildren => Integer(self.max_bootstrap_children),
            ProtocolParam::MaxBootstrapPosCycles => Integer(self.max_bootstrap_pos_cycles),
            ProtocolParam::MaxBootstrapPosEntries => Integer(self.max_bootstrap_pos_entries),

            ProtocolParam::RollPrice => ParamValue::Amount(self.roll_price),
            ProtocolParam::BlockReward => ParamValue::Amount(self.block_reward),
            ProtocolParam::LedgerCostPerByte => ParamValue::Amount(self.ledger_cost_per_byte),

            ProtocolParam::GenesisKeys => ParamValue::GenesisKeys(self.genesis_keys.clone()),
            ProtocolParam::InitialDrawSeed => ParamValue::Bytes(self.initial_draw_seed.clone()),
        }
    }
}
