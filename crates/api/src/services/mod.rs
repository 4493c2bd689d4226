// Path: crates/api/src/services/mod.rs
//! Traits for dispatchable registry services.

use crate::fees::FeeCollector;
use crate::state::StateAccess;
use crate::transaction::context::TxContext;
use async_trait::async_trait;
use attest_types::error::RegistryError;
use std::any::Any;

/// The base trait for a service whose methods are dispatched by name.
///
/// Methods follow the `name@v1` convention; parameters and success payloads
/// are canonical SCALE bytes. Each call executes to completion before the
/// next is processed, so implementations need no internal locking as long as
/// the host serializes access to the shared state.
#[async_trait]
pub trait RegistryService: Any + Send + Sync {
    /// A unique, static, lowercase string identifier for the service.
    fn id(&self) -> &str;

    /// The version of the ABI the service expects from the host.
    fn abi_version(&self) -> u32;

    /// A string identifying the schema of the state this service reads/writes.
    fn state_schema(&self) -> &str;

    /// Provides access to the concrete type for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Handles a dispatched call. Returns the SCALE-encoded success payload,
    /// or exactly one failure code; never a partial result.
    async fn handle_service_call(
        &self,
        state: &mut dyn StateAccess,
        fees: &mut dyn FeeCollector,
        method: &str,
        params: &[u8],
        ctx: &TxContext,
    ) -> Result<Vec<u8>, RegistryError>;
}
