//! Authorization of privileged operations.

use diamond_primitives::Address;
use tracing::info;

use crate::errors::RegistryError;

/// Decides whether a caller may perform privileged operations such as cutting the selector table.
pub trait Authorizer {
    /// Returns true if `caller` is permitted to mutate the router.
    fn is_authorized(&self, caller: &Address) -> bool;
}

impl<F> Authorizer for F
where
    F: Fn(&Address) -> bool,
{
    fn is_authorized(&self, caller: &Address) -> bool {
        self(caller)
    }
}

/// Single-owner access control with two-step ownership transfer.
///
/// The owner first nominates a successor, who then has to accept. Until then the current owner
/// stays in charge and can nominate someone else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafeOwnable {
    owner: Address,
    nominee: Option<Address>,
}

impl SafeOwnable {
    /// Creates a new instance owned by `owner`.
    pub const fn new(owner: Address) -> Self {
        Self {
            owner,
            nominee: None,
        }
    }

    /// Returns the current owner.
    pub const fn owner(&self) -> Address {
        self.owner
    }

    /// Returns the nominated successor, if any.
    pub const fn nominee(&self) -> Option<Address> {
        self.nominee
    }

    /// Fails with [`RegistryError::NotAuthorized`] unless `caller` is the owner.
    pub fn ensure_owner(&self, caller: &Address) -> Result<(), RegistryError> {
        if *caller != self.owner {
            return Err(RegistryError::NotAuthorized { caller: *caller });
        }

        Ok(())
    }

    /// Nominates `nominee` as the next owner.
    pub fn transfer_ownership(
        &mut self,
        caller: &Address,
        nominee: Address,
    ) -> Result<(), RegistryError> {
        self.ensure_owner(caller)?;

        info!(owner = %self.owner, %nominee, "nominated new owner");
        self.nominee = Some(nominee);

        Ok(())
    }

    /// Completes a transfer started by [`SafeOwnable::transfer_ownership`].
    pub fn accept_ownership(&mut self, caller: &Address) -> Result<(), RegistryError> {
        if self.nominee != Some(*caller) {
            return Err(RegistryError::NotNominee { caller: *caller });
        }

        info!(previous = %self.owner, owner = %caller, "ownership transferred");
        self.owner = *caller;
        self.nominee = None;

        Ok(())
    }
}

impl Authorizer for SafeOwnable {
    fn is_authorized(&self, caller: &Address) -> bool {
        *caller == self.owner
    }
}
