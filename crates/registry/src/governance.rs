// Path: crates/registry/src/governance.rs
//! Administrative governance: the admin principal, the verification fee
//! parameter, the detection-method catalog, and advisory verifier roles.
//!
//! Every mutation here is gated on the singleton admin principal. Role
//! assignments are advisory metadata only; they never grant the admin-gated
//! operations themselves.

use attest_api::state::StateAccess;
use attest_api::transaction::context::TxContext;
use attest_types::app::{AccountId, VerifierRole};
use attest_types::codec;
use attest_types::error::{RegistryError, StateError};
use attest_types::keys::{
    ADMIN_KEY, DETECTION_METHOD_PREFIX, VERIFICATION_FEE_KEY, VERIFIER_ROLE_PREFIX,
};
use attest_types::service_configs::RegistryParams;

use crate::validation;

/// Gates and applies all admin-only mutations.
pub struct GovernanceController<'a> {
    params: &'a RegistryParams,
}

impl<'a> GovernanceController<'a> {
    /// Binds the controller to the service configuration.
    pub fn new(params: &'a RegistryParams) -> Self {
        Self { params }
    }

    fn detection_method_key(method_id: u64) -> Vec<u8> {
        [DETECTION_METHOD_PREFIX, &method_id.to_le_bytes()].concat()
    }

    fn role_key(principal: &AccountId) -> Vec<u8> {
        [VERIFIER_ROLE_PREFIX, principal.as_ref()].concat()
    }

    /// Seeds the governance singleton at system initialization: the admin
    /// principal and the default verification fee.
    pub fn init_genesis<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        admin: AccountId,
    ) -> Result<(), RegistryError> {
        state.insert(ADMIN_KEY, &codec::to_bytes_canonical(&admin)?)?;
        state.insert(
            VERIFICATION_FEE_KEY,
            &self.params.verification_fee.to_le_bytes(),
        )?;
        log::info!(
            "[Governance] Initialized with admin {} and fee {}",
            admin,
            self.params.verification_fee
        );
        Ok(())
    }

    /// Reads the current admin principal. Read-only, no authorization gate.
    pub fn admin<S: StateAccess + ?Sized>(state: &S) -> Result<AccountId, RegistryError> {
        let bytes = state.get(ADMIN_KEY)?.ok_or(StateError::KeyNotFound)?;
        Ok(codec::from_bytes_canonical(&bytes)?)
    }

    /// Fails `NotAuthorized` unless the caller is the current admin.
    pub fn require_admin<S: StateAccess + ?Sized>(
        state: &S,
        ctx: &TxContext,
    ) -> Result<(), RegistryError> {
        if Self::admin(state)? != ctx.signer_account_id {
            return Err(RegistryError::NotAuthorized);
        }
        Ok(())
    }

    /// Reads the verification fee charged per submission, falling back to the
    /// configured default when the state key has not been seeded.
    pub fn current_fee<S: StateAccess + ?Sized>(&self, state: &S) -> Result<u64, RegistryError> {
        match state.get(VERIFICATION_FEE_KEY)? {
            Some(bytes) => {
                let raw: [u8; 8] = bytes.try_into().map_err(|_| {
                    StateError::InvalidValue("Invalid verification fee bytes".into())
                })?;
                Ok(u64::from_le_bytes(raw))
            }
            None => Ok(self.params.verification_fee),
        }
    }

    /// Sets the global fee charged by future submissions. Does not affect
    /// already-stored per-oracle registration fees.
    pub fn set_verification_fee<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        ctx: &TxContext,
        new_fee: u64,
    ) -> Result<(), RegistryError> {
        Self::require_admin(state, ctx)?;
        state.insert(VERIFICATION_FEE_KEY, &new_fee.to_le_bytes())?;
        log::info!("[Governance] Verification fee set to {}", new_fee);
        Ok(())
    }

    /// Inserts or overwrites a detection-method catalog entry.
    pub fn register_detection_method<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        ctx: &TxContext,
        method_id: u64,
        method: &str,
    ) -> Result<(), RegistryError> {
        Self::require_admin(state, ctx)?;
        if !validation::detection_method_valid(method) {
            return Err(RegistryError::InvalidDetectionMethod);
        }
        state.insert(
            &Self::detection_method_key(method_id),
            &codec::to_bytes_canonical(&method.to_string())?,
        )?;
        Ok(())
    }

    /// Reads a detection-method catalog entry.
    pub fn detection_method<S: StateAccess + ?Sized>(
        state: &S,
        method_id: u64,
    ) -> Result<Option<String>, RegistryError> {
        match state.get(&Self::detection_method_key(method_id))? {
            Some(bytes) => Ok(Some(codec::from_bytes_canonical(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Inserts or overwrites an advisory role assignment. The wire format is
    /// a string, validated into the closed [`VerifierRole`] enumeration.
    pub fn assign_verifier_role<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        ctx: &TxContext,
        verifier: AccountId,
        role: &str,
    ) -> Result<(), RegistryError> {
        Self::require_admin(state, ctx)?;
        let role = VerifierRole::parse(role)
            .ok_or_else(|| RegistryError::InvalidRole(role.to_string()))?;
        state.insert(
            &Self::role_key(&verifier),
            &codec::to_bytes_canonical(&role)?,
        )?;
        Ok(())
    }

    /// Reads the advisory role assigned to a principal, if any.
    pub fn role_of<S: StateAccess + ?Sized>(
        state: &S,
        principal: &AccountId,
    ) -> Result<Option<VerifierRole>, RegistryError> {
        match state.get(&Self::role_key(principal))? {
            Some(bytes) => Ok(Some(codec::from_bytes_canonical(&bytes)?)),
            None => Ok(None),
        }
    }

    /// Replaces the admin principal, effective immediately for all subsequent
    /// calls. No validation is performed on the new identity.
    pub fn transfer_admin<S: StateAccess + ?Sized>(
        &self,
        state: &mut S,
        ctx: &TxContext,
        new_admin: AccountId,
    ) -> Result<(), RegistryError> {
        Self::require_admin(state, ctx)?;
        state.insert(ADMIN_KEY, &codec::to_bytes_canonical(&new_admin)?)?;
        log::info!(
            "[Governance] Admin transferred from {} to {}",
            ctx.signer_account_id,
            new_admin
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use attest_api::state::MemoryState;

    const ADMIN: AccountId = AccountId([1u8; 32]);
    const STRANGER: AccountId = AccountId([9u8; 32]);

    fn setup() -> (MemoryState, RegistryParams) {
        let params = RegistryParams::default();
        let mut state = MemoryState::new();
        GovernanceController::new(&params)
            .init_genesis(&mut state, ADMIN)
            .unwrap();
        (state, params)
    }

    #[test]
    fn genesis_seeds_admin_and_fee() {
        let (state, params) = setup();
        let gov = GovernanceController::new(&params);
        assert_eq!(GovernanceController::admin(&state).unwrap(), ADMIN);
        assert_eq!(gov.current_fee(&state).unwrap(), 500);
    }

    #[test]
    fn fee_update_is_admin_gated() {
        let (mut state, params) = setup();
        let gov = GovernanceController::new(&params);

        let err = gov
            .set_verification_fee(&mut state, &TxContext::new(STRANGER, 0), 600)
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotAuthorized));
        assert_eq!(gov.current_fee(&state).unwrap(), 500);

        gov.set_verification_fee(&mut state, &TxContext::new(ADMIN, 0), 600)
            .unwrap();
        assert_eq!(gov.current_fee(&state).unwrap(), 600);
    }

    #[test]
    fn detection_method_catalog() {
        let (mut state, params) = setup();
        let gov = GovernanceController::new(&params);
        let ctx = TxContext::new(ADMIN, 0);

        let err = gov
            .register_detection_method(&mut state, &ctx, 1, "")
            .unwrap_err();
        assert!(matches!(err, RegistryError::InvalidDetectionMethod));

        gov.register_detection_method(&mut state, &ctx, 1, "AI Scan")
            .unwrap();
        assert_eq!(
            GovernanceController::detection_method(&state, 1).unwrap(),
            Some("AI Scan".to_string())
        );

        // Overwrite is allowed.
        gov.register_detection_method(&mut state, &ctx, 1, "Spectral")
            .unwrap();
        assert_eq!(
            GovernanceController::detection_method(&state, 1).unwrap(),
            Some("Spectral".to_string())
        );
    }

    #[test]
    fn role_assignment_rejects_unknown_roles() {
        let (mut state, params) = setup();
        let gov = GovernanceController::new(&params);
        let ctx = TxContext::new(ADMIN, 0);

        for bad in ["root", "Admin", "", "superuser"] {
            let err = gov
                .assign_verifier_role(&mut state, &ctx, STRANGER, bad)
                .unwrap_err();
            assert!(matches!(err, RegistryError::InvalidRole(_)), "{}", bad);
        }

        gov.assign_verifier_role(&mut state, &ctx, STRANGER, "oracle")
            .unwrap();
        assert_eq!(
            GovernanceController::role_of(&state, &STRANGER).unwrap(),
            Some(VerifierRole::Oracle)
        );
    }

    #[test]
    fn admin_transfer_is_immediate() {
        let (mut state, params) = setup();
        let gov = GovernanceController::new(&params);

        gov.transfer_admin(&mut state, &TxContext::new(ADMIN, 0), STRANGER)
            .unwrap();
        assert_eq!(GovernanceController::admin(&state).unwrap(), STRANGER);

        // The old admin lost its powers in the same logical instant.
        let err = gov
            .set_verification_fee(&mut state, &TxContext::new(ADMIN, 0), 1)
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotAuthorized));
        gov.set_verification_fee(&mut state, &TxContext::new(STRANGER, 0), 1)
            .unwrap();
    }

    #[test]
    fn roles_do_not_grant_admin_powers() {
        let (mut state, params) = setup();
        let gov = GovernanceController::new(&params);

        gov.assign_verifier_role(&mut state, &TxContext::new(ADMIN, 0), STRANGER, "admin")
            .unwrap();
        let err = gov
            .set_verification_fee(&mut state, &TxContext::new(STRANGER, 0), 1)
            .unwrap_err();
        assert!(matches!(err, RegistryError::NotAuthorized));
    }
}
