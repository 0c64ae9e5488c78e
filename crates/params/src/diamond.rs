//! Parameters a router is constructed from.

use diamond_primitives::{
    cut::FacetCut,
    module_ref::ModuleRef,
    selector::{parse_signature, InterfaceId, Selector},
    Address,
};
use serde::{Deserialize, Serialize};

use crate::{
    default::{DEFAULT_FALLBACK, DEFAULT_OWNER},
    errors::ParamsError,
};

/// The initial configuration of a router.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiamondParams {
    /// The account allowed to cut the selector table.
    pub owner: Address,

    /// The module serving selectors that are not bound to anything.
    #[serde(default = "default_fallback")]
    pub fallback: ModuleRef,

    /// Interfaces supported on top of the standard ones.
    #[serde(default)]
    pub interfaces: Vec<InterfaceId>,

    /// The facets bound at construction, in order.
    #[serde(default)]
    pub facets: Vec<FacetParams>,
}

const fn default_fallback() -> ModuleRef {
    DEFAULT_FALLBACK
}

impl Default for DiamondParams {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER,
            fallback: DEFAULT_FALLBACK,
            interfaces: Vec::new(),
            facets: Vec::new(),
        }
    }
}

impl DiamondParams {
    /// Returns the batch of cuts that binds every configured facet, one `add` cut per facet.
    pub fn initial_cuts(&self) -> Result<Vec<FacetCut>, ParamsError> {
        self.facets.iter().map(FacetParams::to_cut).collect()
    }
}

/// A module and the functions it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetParams {
    /// Human-readable name, for logs and error messages only.
    pub name: String,

    /// Where the module lives.
    pub address: ModuleRef,

    /// Canonical signatures of the functions the module serves.
    #[serde(default)]
    pub signatures: Vec<String>,

    /// Raw selectors the module serves, on top of those derived from `signatures`.
    #[serde(default)]
    pub selectors: Vec<Selector>,
}

impl FacetParams {
    /// Returns every selector of this facet: first those derived from the signatures, then the raw
    /// ones.
    pub fn all_selectors(&self) -> Result<Vec<Selector>, ParamsError> {
        let mut selectors = self
            .signatures
            .iter()
            .map(|signature| parse_signature(signature))
            .collect::<Result<Vec<_>, _>>()?;
        selectors.extend_from_slice(&self.selectors);

        Ok(selectors)
    }

    /// Returns the `add` cut binding this facet.
    pub fn to_cut(&self) -> Result<FacetCut, ParamsError> {
        if self.address.is_none() {
            return Err(ParamsError::MissingTarget(format!("facet {:?}", self.name)));
        }

        Ok(FacetCut::add(self.address, self.all_selectors()?))
    }
}

#[cfg(test)]
mod tests {
    use diamond_primitives::{cut::CutAction, selector::selector_of};

    use super::*;

    const PARAMS: &str = r#"
        owner = "0x3f5d53eb3cd50d4efd9cc9ae1f73097c4072f6f0"
        interfaces = ["0x80ac58cd"]

        [[facets]]
        name = "NFTFacet"
        address = "0x0000000000000000000000000000000000000001"
        signatures = ["mint(address,uint256)", "burn(uint256)"]

        [[facets]]
        name = "AdminFacet"
        address = "0x0000000000000000000000000000000000000002"
        signatures = ["setFee(uint256)"]
        selectors = ["0x00000000"]
    "#;

    #[test]
    fn params_from_toml() {
        let params = toml::from_str::<DiamondParams>(PARAMS).unwrap();

        assert_eq!(params.fallback, ModuleRef::NONE);
        assert_eq!(params.interfaces, vec![InterfaceId::new([0x80, 0xac, 0x58, 0xcd])]);

        let cuts = params.initial_cuts().unwrap();
        assert_eq!(cuts.len(), 2);
        assert!(cuts.iter().all(|cut| cut.action == CutAction::Add));
        assert_eq!(
            cuts[0].selectors,
            vec![selector_of("mint(address,uint256)"), selector_of("burn(uint256)")]
        );
        assert_eq!(
            cuts[1].selectors,
            vec![selector_of("setFee(uint256)"), Selector::ZERO]
        );
        assert_eq!(cuts[1].target, ModuleRef::new(Address::with_last_byte(2)));
    }

    #[test]
    fn params_serde() {
        let params = toml::from_str::<DiamondParams>(PARAMS).unwrap();
        let serialized = toml::to_string(&params).unwrap();

        assert_eq!(toml::from_str::<DiamondParams>(&serialized).unwrap(), params);
    }

    #[test]
    fn default_params() {
        let params = DiamondParams::default();

        assert!(!params.owner.is_zero());
        assert_eq!(params.initial_cuts(), Ok(vec![]));
    }

    #[test]
    fn facet_validation() {
        let mut facet = FacetParams {
            name: "Broken".to_string(),
            address: ModuleRef::NONE,
            signatures: vec!["ok()".to_string()],
            selectors: vec![],
        };
        assert_eq!(
            facet.to_cut(),
            Err(ParamsError::MissingTarget("facet \"Broken\"".to_string()))
        );

        facet.address = ModuleRef::new(Address::with_last_byte(1));
        facet.signatures.push("not a signature".to_string());
        assert!(matches!(
            facet.to_cut(),
            Err(ParamsError::MalformedSignature(_))
        ));
    }
}
