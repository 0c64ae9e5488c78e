pub(crate) mod cut;
pub(crate) mod inspect;
pub(crate) mod selectors;

use anyhow::Context;
use diamond_params::prelude::DiamondParams;
use diamond_primitives::cut::InitCall;
use diamond_registry::Diamond;
use tracing::info;

/// Builds the router described by `params`, with every configured facet bound.
///
/// No module code is installed: the router can be inspected and cut, but dispatching to it fails.
pub(crate) fn build_diamond(params: &DiamondParams) -> anyhow::Result<Diamond> {
    let owner = params.owner;
    let mut diamond = Diamond::new(owner);

    for id in &params.interfaces {
        diamond.set_supports_interface(&owner, *id, true)?;
    }
    diamond.set_fallback_address(&owner, params.fallback)?;

    let cuts = params.initial_cuts()?;
    if !cuts.is_empty() {
        diamond
            .diamond_cut(&owner, &cuts, &InitCall::none())
            .context("invalid initial facets")?;
    }

    info!(facets = cuts.len(), selectors = diamond.selector_count(), "built router");

    Ok(diamond)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::{io::Write, path::PathBuf};

    use tempfile::TempDir;

    pub(crate) const PARAMS: &str = r#"
        owner = "0x0000000000000000000000000000000000000abc"

        [[facets]]
        name = "NFTFacet"
        address = "0x0000000000000000000000000000000000000001"
        signatures = ["fn0()", "fn1()", "fn2()", "fn3()", "fn4()", "fn5()", "fn6()", "fn7()"]

        [[facets]]
        name = "AdminFacet"
        address = "0x0000000000000000000000000000000000000002"
        signatures = ["setFee(uint256)"]
    "#;

    /// Writes `contents` to `name` inside `dir`.
    pub(crate) fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();

        path
    }
}
