//! Per-subsystem slices of a registry.
//!
//! Each subsystem constructor takes the view it needs by value instead of
//! reaching for the whole registry.

use crate::amount::Amount;
use crate::profile::Profile;
use crate::registry::Registry;
use crate::time::Millis;
use crate::value::GenesisKeySet;

/// Block graph and slot timing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsensusConfig {
    pub thread_count: u8,
    pub t0: Millis,
    pub genesis_timestamp: Millis,
    pub end_timestamp: Option<Millis>,
    pub periods_per_cycle: u64,
    pub delta_f0: u64,
    pub endorsement_count: u64,
    pub operation_validity_periods: u64,
    pub max_block_size: u64,
    pub max_operations_per_block: u64,
    pub max_gas_per_block: u64,
    pub block_reward: Amount,
    pub genesis_keys: GenesisKeySet,
    pub max_dependency_blocks: u64,
    pub max_discarded_blocks: u64,
    pub max_future_processing_blocks: u64,
    pub future_block_processing_max_periods: u64,
    pub force_keep_final_period: u64,
    pub stats_timespan: Millis,
    pub block_db_prune_interval: Millis,
    pub controller_channel_size: u64,
}

/// Proof-of-stake final state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PosConfig {
    pub periods_per_cycle: u64,
    pub thread_count: u8,
    pub pos_lock_cycles: u64,
    pub pos_lookback_cycles: u64,
    /// number of saved cycles
    pub cycle_history_length: u64,
    pub roll_price: Amount,
    pub initial_draw_seed: Vec<u8>,
    pub initial_stakers: Vec<Vec<u8>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapConfig {
    pub max_bootstrap_message_size: u64,
    pub ledger_part_size_message_bytes: u64,
    pub max_bootstrap_blocks: u64,
    pub max_bootstrap_cliques: u64,
    pub max_bootstrap_deps: u64,
    pub max_bootstrap_children: u64,
    pub max_bootstrap_pos_cycles: u64,
    pub max_bootstrap_pos_entries: u64,
    pub bootstrap_randomness_size_bytes: u64,
    pub final_history_length: u64,
}

/// Peer messaging limits and timers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkConfig {
    pub max_message_size: u64,
    pub max_advertise_length: u64,
    pub max_ask_blocks_per_message: u64,
    pub max_operations_per_message: u64,
    pub max_endorsements_per_message: u64,
    pub message_timeout: Millis,
    pub ask_peer_list_interval: Millis,
    pub node_send_channel_size: u64,
    pub minimal_fees: Amount,
}

impl<P: Profile> From<&Registry<P>> for ConsensusConfig {
    fn from(r: &Registry<P>) -> Self {
        let p = r.protocol();
        let s = r.settings();
        Self {
            thread_count: p.thread_count,
            t0: p.t0,
            genesis_timestamp: p.genesis_timestamp,
            end_timestamp: p.end_timestamp,
            periods_per_cycle: p.periods_per_cycle,
            delta_f0: p.delta_f0,
            endorsement_count: p.endorsement_count,
            operation_validity_periods: p.operation_validity_periods,
            max_block_size: p.max_block_size,
            max_operations_per_block: p.max_operations_per_block,
            max_gas_per_block: p.max_gas_per_block,
            block_reward: p.block_reward,
            genesis_keys: p.genesis_keys.clone(),
            max_dependency_blocks: s.max_dependency_blocks,
            max_discarded_blocks: s.max_discarded_blocks,
            max_future_processing_blocks: s.max_future_processing_blocks,
            future_block_processing_max_periods: s.future_block_processing_max_periods,
            force_keep_final_period: s.force_keep_final_period,
            stats_timespan: s.stats_timespan,
            block_db_prune_interval: s.block_db_prune_interval,
            controller_channel_size: s.controller_channel_size,
        }
    }
}

impl<P: Profile> From<&Registry<P>> for PosConfig {
    fn from(r: &Registry<P>) -> Self {
        let p = r.protocol();
        Self {
            periods_per_cycle: p.periods_per_cycle,
            thread_count: p.thread_count,
            pos_lock_cycles: p.pos_lock_cycles,
            pos_lookback_cycles: p.pos_lookback_cycles,
            cycle_history_length: p.pos_saved_cycles,
            roll_price: p.roll_price,
            initial_draw_seed: p.initial_draw_seed.as_slice().to_vec(),
            initial_stakers: p
                .genesis_keys
                .initial_stakers
                .iter()
                .map(|k| k.as_slice().to_vec())
                .collect(),
        }
    }
}

impl<P: Profile> From<&Registry<P>> for BootstrapConfig {
    fn from(r: &Registry<P>) -> Self {
        let p = r.protocol();
        Self {
            max_bootstrap_message_size: p.max_bootstrap_message_size,
            ledger_part_size_message_bytes: p.ledger_part_size_message_bytes,
            max_bootstrap_blocks: p.max_bootstrap_blocks,
            max_bootstrap_cliques: p.max_bootstrap_cliques,
            max_bootstrap_deps: p.max_bootstrap_deps,
            max_bootstrap_children: p.max_bootstrap_children,
            max_bootstrap_pos_cycles: p.max_bootstrap_pos_cycles,
            max_bootstrap_pos_entries: p.max_bootstrap_pos_entries,
            bootstrap_randomness_size_bytes: p.bootstrap_randomness_size_bytes,
            final_history_length: r.settings().final_history_length,
        }
    }
}

impl<P: Profile> From<&Registry<P>> for NetworkConfig {
    fn from(r: &Registry<P>) -> Self {
        let p = r.protocol();
        let s = r.settings();
        Self {
            max_message_size: p.max_message_size,
            max_advertise_length: p.max_advertise_length,
            max_ask_blocks_per_message: p.max_ask_blocks_per_message,
            max_operations_per_message: p.max_operations_per_message,
            max_endorsements_per_message: p.max_endorsements_per_message,
            message_timeout: s.message_timeout,
            ask_peer_list_interval: s.ask_peer_list_interval,
            node_send_channel_size: s.node_send_channel_size,
            minimal_fees: s.minimal_fees,
        }
    }
}
