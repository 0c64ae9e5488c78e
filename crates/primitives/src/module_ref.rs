//! References to implementation modules.

use std::{fmt, str::FromStr};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// An opaque handle to an implementation module (a "facet").
///
/// This is just the address the module lives at. The zero address is reserved as
/// [`ModuleRef::NONE`] and denotes "unbound".
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleRef(Address);

impl ModuleRef {
    /// The reference that denotes the absence of a module.
    pub const NONE: Self = Self(Address::ZERO);

    /// Creates a new reference to the module at the given address.
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Returns the address of the referenced module.
    pub const fn address(&self) -> Address {
        self.0
    }

    /// Returns true if this is [`ModuleRef::NONE`].
    pub fn is_none(&self) -> bool {
        self.0 == Address::ZERO
    }

    /// Returns true if this refers to an actual module.
    pub fn is_some(&self) -> bool {
        !self.is_none()
    }
}

impl From<Address> for ModuleRef {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl From<ModuleRef> for Address {
    fn from(module: ModuleRef) -> Self {
        module.0
    }
}

impl FromStr for ModuleRef {
    type Err = <Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Address>().map(Self)
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "NONE")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
