use core::fmt::Debug;

use crate::protocol::ProtocolConstants;
use crate::registry::ParameterSet;
use crate::settings::NodeSettings;
use crate::time::Millis;

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Production {}
    impl Sealed for super::Test {}
}

/// Compile-time profile of a registry. `Registry<Production>` and
/// `Registry<Test>` are different types and cannot be passed for each other.
pub trait Profile: sealed::Sealed + Debug + Send + Sync + 'static {
    const NAME: &'static str;

    /// Compiled-in parameter set for this profile, anchored at `start`.
    fn base_parameters(start: Millis) -> ParameterSet;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Production;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Test;

impl Profile for Production {
    const NAME: &'static str = "production";

    fn base_parameters(_start: Millis) -> ParameterSet {
        ParameterSet {
            protocol: ProtocolConstants::production(),
            settings: NodeSettings::default(),
        }
    }
}

impl Profile for Test {
    const NAME: &'static str = "test";

    fn base_parameters(start: Millis) -> ParameterSet {
        ParameterSet {
            protocol: ProtocolConstants::test_at(start),
            settings: NodeSettings::default(),
        }
    }
}
