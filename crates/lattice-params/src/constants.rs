use crate::amount::Amount;
use crate::time::Millis;

pub const THREAD_COUNT: u8 = 32;
pub const T0: Millis = Millis::from_millis(16_000);
/// 2024-01-03T13:50:00Z
pub const GENESIS_TIMESTAMP: Millis = Millis::from_millis(1_704_289_800_000);
pub const END_TIMESTAMP: Option<Millis> = None;
/// Test networks start this long after the registry is built.
pub const TEST_GENESIS_DELAY: Millis = Millis::from_millis(10_000);

pub const PERIODS_PER_CYCLE: u64 = 128;
pub const POS_LOCK_CYCLES: u64 = 1;
pub const POS_LOOKBACK_CYCLES: u64 = 2;
pub const POS_SAVED_CYCLES: u64 = 4;
pub const OPERATION_VALIDITY_PERIODS: u64 = 10;
pub const ENDORSEMENT_COUNT: u64 = 16;
pub const DELTA_F0: u64 = 64 * (ENDORSEMENT_COUNT + 1);

pub const HASH_SIZE_BYTES: u64 = 32;
pub const ADDRESS_SIZE_BYTES: u64 = HASH_SIZE_BYTES;
pub const BLOCK_ID_SIZE_BYTES: u64 = HASH_SIZE_BYTES;
pub const OPERATION_ID_SIZE_BYTES: u64 = HASH_SIZE_BYTES;
pub const OPERATION_ID_PREFIX_SIZE_BYTES: u64 = 17;
pub const ENDORSEMENT_ID_SIZE_BYTES: u64 = HASH_SIZE_BYTES;
/// period (8) + thread (1)
pub const SLOT_KEY_SIZE: u64 = 9;
pub const PUBLIC_KEY_SIZE_BYTES: u64 = 32;
pub const SIGNATURE_SIZE_BYTES: u64 = 64;
pub const BOOTSTRAP_RANDOMNESS_SIZE_BYTES: u64 = 32;

pub const MAX_BLOCK_SIZE: u64 = 1_000_000;
pub const MAX_MESSAGE_SIZE: u64 = 1_048_576_000;
pub const MAX_BOOTSTRAP_MESSAGE_SIZE: u64 = 1_048_576_000;
pub const LEDGER_PART_SIZE_MESSAGE_BYTES: u64 = 1_000_000;
pub const MAX_DATASTORE_KEY_LENGTH: u64 = 255;
pub const MAX_DATASTORE_VALUE_LENGTH: u64 = 10_000_000;

pub const MAX_OPERATIONS_PER_BLOCK: u64 = 5_000;
pub const MAX_GAS_PER_BLOCK: u64 = u32::MAX as u64;
pub const MAX_ADVERTISE_LENGTH: u64 = 10_000;
pub const MAX_ASK_BLOCKS_PER_MESSAGE: u64 = 128;
pub const MAX_OPERATIONS_PER_MESSAGE: u64 = 1_024;
pub const MAX_ENDORSEMENTS_PER_MESSAGE: u64 = 1_024;

pub const MAX_BOOTSTRAP_BLOCKS: u64 = 1_000_000;
pub const MAX_BOOTSTRAP_CLIQUES: u64 = 1_000;
pub const MAX_BOOTSTRAP_DEPS: u64 = 1_000;
pub const MAX_BOOTSTRAP_CHILDREN: u64 = 1_000;
pub const MAX_BOOTSTRAP_POS_CYCLES: u64 = 5;
pub const MAX_BOOTSTRAP_POS_ENTRIES: u64 = 1_000_000_000;

pub const ROLL_PRICE: Amount = Amount::from_raw(100_000_000_000);
pub const BLOCK_REWARD: Amount = Amount::from_raw(300_000_000);
pub const LEDGER_COST_PER_BYTE: Amount = Amount::from_raw(100_000);

/// Hashed with SHA3-256 to produce `INITIAL_DRAW_SEED`.
pub const INITIAL_DRAW_SEED_PREIMAGE: &[u8] = b"LATTICEv1-initial-draw-seed/";

pub const GENESIS_PUBLIC_KEY: [u8; 32] = [
    0xac, 0xac, 0x56, 0xac, 0x05, 0x6e, 0x4f, 0x9a, //
    0x2e, 0x96, 0x94, 0x29, 0x5a, 0x94, 0x69, 0x3e, //
    0x63, 0x55, 0x1c, 0x06, 0xe4, 0x20, 0x9e, 0x69, //
    0xb1, 0x17, 0xb9, 0xe6, 0x1d, 0xe2, 0x82, 0xff,
];

pub const INITIAL_STAKER_PUBLIC_KEYS: [[u8; 32]; 3] = [
    [
        0x94, 0xc1, 0x16, 0x84, 0x72, 0xdc, 0x0b, 0x52, //
        0xb5, 0x07, 0xb9, 0x80, 0x6d, 0xb2, 0x6d, 0x4e, //
        0xe1, 0xac, 0x26, 0x17, 0x8c, 0x92, 0xa0, 0x62, //
        0xfe, 0x20, 0x8c, 0xeb, 0x58, 0x90, 0xe5, 0x4e,
    ],
    [
        0xd1, 0xb5, 0x0c, 0xf2, 0xb1, 0xe6, 0x97, 0x30, //
        0x39, 0x4e, 0x71, 0x7c, 0xf7, 0x32, 0x2c, 0x6e, //
        0x50, 0x94, 0x6e, 0x72, 0x04, 0x59, 0xb0, 0x5c, //
        0x08, 0x8b, 0x0b, 0x31, 0x85, 0x05, 0x73, 0xee,
    ],
    [
        0x99, 0xe8, 0x7f, 0x1b, 0x47, 0x74, 0x6b, 0xc1, //
        0xe8, 0x08, 0x48, 0xc9, 0x1b, 0x8f, 0x73, 0xb9, //
        0xa9, 0xcf, 0x97, 0x7b, 0xa2, 0x8f, 0x62, 0x89, //
        0x31, 0xd1, 0x0b, 0x89, 0x4d, 0x46, 0xa2, 0xd1,
    ],
];

// Node-tier defaults.
pub const MAX_DEPENDENCY_BLOCKS: u64 = 2_048;
pub const MAX_DISCARDED_BLOCKS: u64 = 100;
pub const MAX_FUTURE_PROCESSING_BLOCKS: u64 = 400;
pub const FUTURE_BLOCK_PROCESSING_MAX_PERIODS: u64 = 100;
pub const FORCE_KEEP_FINAL_PERIOD: u64 = 20;
pub const FINAL_HISTORY_LENGTH: u64 = 100;
pub const STATS_TIMESPAN: Millis = Millis::from_millis(60_000);
pub const BLOCK_DB_PRUNE_INTERVAL: Millis = Millis::from_millis(5_000);
pub const MESSAGE_TIMEOUT: Millis = Millis::from_millis(5_000);
pub const ASK_PEER_LIST_INTERVAL: Millis = Millis::from_millis(30_000);
pub const NODE_SEND_CHANNEL_SIZE: u64 = 10_000;
pub const CONTROLLER_CHANNEL_SIZE: u64 = 1_024;
pub const MINIMAL_FEES: Amount = Amount::ZERO;
