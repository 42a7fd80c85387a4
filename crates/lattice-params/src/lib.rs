pub mod amount;
mod consistency;
pub mod constants;
pub mod error;
pub mod fingerprint;
mod hash;
pub mod name;
pub mod overrides;
pub mod profile;
pub mod protocol;
pub mod registry;
pub mod settings;
pub mod time;
pub mod timeslots;
pub mod value;
pub mod views;

pub use amount::{Amount, AmountError};
pub use error::{
    ConfigurationError, ConsistencyError, ParamsError, UnknownParameterError, Violation,
};
pub use fingerprint::protocol_fingerprint;
pub use name::{NodeParam, ParamName, ProtocolParam};
pub use overrides::Overrides;
pub use profile::{Production, Profile, Test};
pub use protocol::ProtocolConstants;
pub use registry::{ParameterSet, Registry, RegistryGate};
pub use settings::NodeSettings;
pub use time::Millis;
pub use timeslots::{Slot, SlotClock, SlotError};
pub use value::{Category, GenesisKeySet, HexBytes, ParamValue};
pub use views::{BootstrapConfig, ConsensusConfig, NetworkConfig, PosConfig};
