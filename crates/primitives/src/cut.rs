//! Types describing mutations of the selector table ("diamond cuts") and views of it.

use std::fmt;

use alloy_primitives::Bytes;
use serde::{Deserialize, Serialize};

use crate::{errors::CutActionError, module_ref::ModuleRef, selector::Selector};

/// What a [`FacetCut`] does to each of its selectors.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum CutAction {
    /// Bind currently unbound selectors to the target.
    Add = 0,

    /// Rebind selectors from whatever module currently serves them to the target.
    Replace = 1,

    /// Unbind selectors. The target must be [`ModuleRef::NONE`].
    Remove = 2,
}

impl TryFrom<u8> for CutAction {
    type Error = CutActionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Add),
            1 => Ok(Self::Replace),
            2 => Ok(Self::Remove),
            other => Err(CutActionError::Unknown(other)),
        }
    }
}

impl From<CutAction> for u8 {
    fn from(action: CutAction) -> Self {
        action as u8
    }
}

impl fmt::Display for CutAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CutAction::Add => write!(f, "add"),
            CutAction::Replace => write!(f, "replace"),
            CutAction::Remove => write!(f, "remove"),
        }
    }
}

/// A single mutation request: apply `action` to every selector in `selectors` with respect to
/// `target`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCut {
    /// The module the selectors are bound to, or [`ModuleRef::NONE`] for removals.
    pub target: ModuleRef,

    /// The action to apply.
    pub action: CutAction,

    /// The selectors the action applies to, in order.
    pub selectors: Vec<Selector>,
}

impl FacetCut {
    /// Creates a cut that binds `selectors` to `target`.
    pub fn add(target: ModuleRef, selectors: impl Into<Vec<Selector>>) -> Self {
        Self {
            target,
            action: CutAction::Add,
            selectors: selectors.into(),
        }
    }

    /// Creates a cut that rebinds `selectors` to `target`.
    pub fn replace(target: ModuleRef, selectors: impl Into<Vec<Selector>>) -> Self {
        Self {
            target,
            action: CutAction::Replace,
            selectors: selectors.into(),
        }
    }

    /// Creates a cut that unbinds `selectors`.
    pub fn remove(selectors: impl Into<Vec<Selector>>) -> Self {
        Self {
            target: ModuleRef::NONE,
            action: CutAction::Remove,
            selectors: selectors.into(),
        }
    }
}

/// The optional one-time initialization call that follows a batch of cuts.
///
/// Either both fields are empty (no initialization) or both are set.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitCall {
    /// The module to invoke.
    pub target: ModuleRef,

    /// The opaque payload handed to the module.
    #[serde(default)]
    pub calldata: Bytes,
}

impl InitCall {
    /// No initialization.
    pub fn none() -> Self {
        Self::default()
    }

    /// Initialization of `target` with `calldata`.
    pub fn new(target: ModuleRef, calldata: impl Into<Bytes>) -> Self {
        Self {
            target,
            calldata: calldata.into(),
        }
    }

    /// Returns true if there is nothing to initialize.
    pub fn is_empty(&self) -> bool {
        self.target.is_none() && self.calldata.is_empty()
    }
}

/// A module together with all the selectors currently bound to it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facet {
    /// The module.
    pub address: ModuleRef,

    /// The selectors bound to the module, in reverse-index order.
    pub selectors: Vec<Selector>,
}
