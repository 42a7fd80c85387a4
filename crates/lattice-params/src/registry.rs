use core::fmt;
use core::marker::PhantomData;
use std::collections::BTreeSet;
use std::sync::{Arc, OnceLock};

use crate::error::{ConfigurationError, ConsistencyError, UnknownParameterError};
use crate::fingerprint::protocol_fingerprint;
use crate::name::{NodeParam, ParamName};
use crate::overrides::Overrides;
use crate::profile::{Production, Profile, Test};
use crate::protocol::ProtocolConstants;
use crate::settings::NodeSettings;
use crate::time::Millis;
use crate::value::ParamValue;

/// Both parameter tiers, not yet validated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParameterSet {
    pub protocol: ProtocolConstants,
    pub settings: NodeSettings,
}

impl ParameterSet {
    pub fn production() -> Self {
        Production::base_parameters(Millis::now())
    }

    /// Test-profile defaults for harnesses that edit fields before sealing.
    #[cfg(any(test, feature = "testing"))]
    pub fn test_at(start: Millis) -> Self {
        Test::base_parameters(start)
    }

    pub fn value(&self, name: ParamName) -> ParamValue {
        match name {
            ParamName::Protocol(p) => self.protocol.value(p),
            ParamName::Node(n) => self.settings.value(n),
        }
    }
}

/// Validated, immutable parameter table for one profile.
///
/// Construction is the only write. Share it as `Arc<Registry<P>>` or hand
/// subsystems one of the view structs.
pub struct Registry<P: Profile> {
    params: ParameterSet,
    overridden: BTreeSet<NodeParam>,
    fingerprint: [u8; 32],
    _profile: PhantomData<fn() -> P>,
}

impl<P: Profile> Registry<P> {
    /// Compiled-in defaults for `P`, node tier overridden by `overrides`,
    /// consistency checked as a whole.
    pub fn initialize(overrides: &Overrides) -> Result<Self, ConfigurationError> {
        Self::initialize_from(P::base_parameters(Millis::now()), overrides)
    }

    fn initialize_from(
        mut params: ParameterSet,
        overrides: &Overrides,
    ) -> Result<Self, ConfigurationError> {
        let result = overrides
            .apply(P::NAME, &mut params.settings)
            .and_then(|overridden| {
                Self::seal(params, overridden).map_err(ConfigurationError::from)
            });
        match &result {
            Ok(registry) => tracing::info!(
                profile = P::NAME,
                overrides = registry.overridden.len(),
                fingerprint = %registry.fingerprint_hex(),
                "parameter registry initialized"
            ),
            Err(e) => tracing::warn!(
                profile = P::NAME,
                key = e.offending_name().unwrap_or("-"),
                error = %e,
                "parameter configuration rejected"
            ),
        }
        result
    }

    fn seal(
        params: ParameterSet,
        overridden: BTreeSet<NodeParam>,
    ) -> Result<Self, ConsistencyError> {
        params.validate_consistency()?;
        let fingerprint = protocol_fingerprint(P::NAME, &params.protocol);
        Ok(Self {
            params,
            overridden,
            fingerprint,
            _profile: PhantomData,
        })
    }

    pub fn profile(&self) -> &'static str {
        P::NAME
    }

    /// Value of a registered name, in canonical or all-lowercase spelling.
    pub fn get(&self, name: &str) -> Result<ParamValue, UnknownParameterError> {
        ParamName::lookup(name)
            .map(|n| self.value(n))
            .ok_or_else(|| UnknownParameterError::new(name))
    }

    pub fn value(&self, name: impl Into<ParamName>) -> ParamValue {
        self.params.value(name.into())
    }

    pub fn protocol(&self) -> &ProtocolConstants {
        &self.params.protocol
    }

    pub fn settings(&self) -> &NodeSettings {
        &self.params.settings
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.params
    }

    pub fn is_overridden(&self, param: NodeParam) -> bool {
        self.overridden.contains(&param)
    }

    /// Re-runs the consistency check. Always `Ok` for a constructed registry.
    pub fn validate_consistency(&self) -> Result<(), ConsistencyError> {
        self.params.validate_consistency()
    }

    pub fn fingerprint(&self) -> [u8; 32] {
        self.fingerprint
    }

    pub fn fingerprint_hex(&self) -> String {
        hex::encode(self.fingerprint)
    }

    /// Every parameter in catalogue order, protocol tier first.
    pub fn entries(&self) -> impl Iterator<Item = (ParamName, ParamValue)> + '_ {
        ParamName::all().map(move |n| (n, self.value(n)))
    }
}

impl Registry<Production> {
    pub fn as_production_configuration(overrides: &Overrides) -> Result<Self, ConfigurationError> {
        Self::initialize(overrides)
    }
}

impl Registry<Test> {
    /// Genesis is derived from the current instant, never earlier.
    pub fn as_test_configuration(overrides: &Overrides) -> Result<Self, ConfigurationError> {
        Self::initialize(overrides)
    }

    pub fn as_test_configuration_at(
        start: Millis,
        overrides: &Overrides,
    ) -> Result<Self, ConfigurationError> {
        Self::initialize_from(Test::base_parameters(start), overrides)
    }

    /// Arbitrary values, protocol tier included. Only built for harnesses;
    /// a node binary has no path to a protocol tier other than the
    /// compiled-in one.
    #[cfg(any(test, feature = "testing"))]
    pub fn from_parameters(params: ParameterSet) -> Result<Self, ConsistencyError> {
        Self::seal(params, BTreeSet::new())
    }
}

impl<P: Profile> Clone for Registry<P> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            overridden: self.overridden.clone(),
            fingerprint: self.fingerprint,
            _profile: PhantomData,
        }
    }
}

impl<P: Profile> fmt::Debug for Registry<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("profile", &P::NAME)
            .field("fingerprint", &self.fingerprint_hex())
            .field("overridden", &self.overridden)
            .field("params", &self.params)
            .finish()
    }
}

/// One-time establishment of the process registry.
///
/// Owned by the entry point; uninitialized until the first successful
/// `initialize`, initialized forever after.
pub struct RegistryGate<P: Profile> {
    cell: OnceLock<Arc<Registry<P>>>,
}

impl<P: Profile> RegistryGate<P> {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// A failed initialization leaves the gate uninitialized.
    pub fn initialize(&self, overrides: &Overrides) -> Result<Arc<Registry<P>>, ConfigurationError> {
        if self.is_initialized() {
            return Err(ConfigurationError::AlreadyInitialized);
        }
        self.publish(Registry::initialize(overrides)?)
    }

    /// Publishes a registry built through another construction path.
    pub fn publish(&self, registry: Registry<P>) -> Result<Arc<Registry<P>>, ConfigurationError> {
        let registry = Arc::new(registry);
        self.cell
            .set(Arc::clone(&registry))
            .map_err(|_| ConfigurationError::AlreadyInitialized)?;
        Ok(registry)
    }

    pub fn get(&self) -> Option<Arc<Registry<P>>> {
        self.cell.get().cloned()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<P: Profile> Default for RegistryGate<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Profile> fmt::Debug for RegistryGate<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryGate")
            .field("profile", &P::NAME)
            .field("initialized", &self.is_initialized())
            .finish()
    }
}
