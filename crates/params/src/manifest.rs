//! Description of a batch of cuts to apply to a running router.

use diamond_primitives::{
    cut::{CutAction, FacetCut, InitCall},
    module_ref::ModuleRef,
    selector::{parse_signature, Selector},
};
use serde::{Deserialize, Serialize};

use crate::errors::ParamsError;

/// A batch of cuts followed by an optional initialization call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutManifest {
    /// The cuts, applied in order.
    #[serde(default)]
    pub cuts: Vec<CutParams>,

    /// The initialization call run after every cut has been applied.
    #[serde(default)]
    pub init: InitCall,
}

impl CutManifest {
    /// Returns the cuts of this manifest.
    pub fn facet_cuts(&self) -> Result<Vec<FacetCut>, ParamsError> {
        self.cuts
            .iter()
            .enumerate()
            .map(|(index, cut)| cut.to_cut(index))
            .collect()
    }
}

/// A single cut of a [`CutManifest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CutParams {
    /// What to do with the selectors.
    pub action: CutAction,

    /// The module to bind the selectors to. Must be left out for removals.
    #[serde(default)]
    pub target: Option<ModuleRef>,

    /// Canonical signatures of the functions to cut.
    #[serde(default)]
    pub signatures: Vec<String>,

    /// Raw selectors to cut, on top of those derived from `signatures`.
    #[serde(default)]
    pub selectors: Vec<Selector>,
}

impl CutParams {
    /// Returns the cut described by these parameters. `index` locates the cut in error messages.
    pub fn to_cut(&self, index: usize) -> Result<FacetCut, ParamsError> {
        let target = self.target.unwrap_or(ModuleRef::NONE);
        let what = || format!("cut #{index}");

        match self.action {
            CutAction::Remove if target.is_some() => {
                return Err(ParamsError::UnexpectedTarget(what()))
            }
            CutAction::Add | CutAction::Replace if target.is_none() => {
                return Err(ParamsError::MissingTarget(what()))
            }
            _ => {}
        }

        let mut selectors = self
            .signatures
            .iter()
            .map(|signature| parse_signature(signature))
            .collect::<Result<Vec<_>, _>>()?;
        selectors.extend_from_slice(&self.selectors);

        Ok(FacetCut {
            target,
            action: self.action,
            selectors,
        })
    }
}

#[cfg(test)]
mod tests {
    use diamond_primitives::{selector::selector_of, Address, Bytes};

    use super::*;

    #[test]
    fn manifest_from_toml() {
        let manifest = r#"
            [[cuts]]
            action = "remove"
            signatures = ["burn(uint256)"]

            [[cuts]]
            action = "replace"
            target = "0x0000000000000000000000000000000000000003"
            signatures = ["mint(address,uint256)"]

            [init]
            target = "0x0000000000000000000000000000000000000003"
            calldata = "0xdeadbeef"
        "#;

        let manifest = toml::from_str::<CutManifest>(manifest).unwrap();
        let module = ModuleRef::new(Address::with_last_byte(3));

        assert_eq!(
            manifest.facet_cuts().unwrap(),
            vec![
                FacetCut::remove(vec![selector_of("burn(uint256)")]),
                FacetCut::replace(module, vec![selector_of("mint(address,uint256)")]),
            ]
        );
        assert_eq!(
            manifest.init,
            InitCall::new(module, Bytes::from_static(&[0xde, 0xad, 0xbe, 0xef]))
        );
    }

    #[test]
    fn manifest_without_init() {
        let manifest = toml::from_str::<CutManifest>(
            r#"
            [[cuts]]
            action = "add"
            target = "0x0000000000000000000000000000000000000001"
            selectors = ["0x00000000"]
        "#,
        )
        .unwrap();

        assert!(manifest.init.is_empty());
        assert_eq!(manifest.facet_cuts().unwrap()[0].selectors, vec![Selector::ZERO]);
    }

    #[test]
    fn targets_are_checked() {
        let remove = CutParams {
            action: CutAction::Remove,
            target: Some(ModuleRef::new(Address::with_last_byte(1))),
            signatures: vec!["burn(uint256)".to_string()],
            selectors: vec![],
        };
        assert_eq!(
            remove.to_cut(2),
            Err(ParamsError::UnexpectedTarget("cut #2".to_string()))
        );

        let add = CutParams {
            action: CutAction::Add,
            target: None,
            ..remove
        };
        assert_eq!(
            add.to_cut(0),
            Err(ParamsError::MissingTarget("cut #0".to_string()))
        );
    }
}
