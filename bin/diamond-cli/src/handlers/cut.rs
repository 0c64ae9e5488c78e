use anyhow::Context;
use diamond_params::prelude::{CutManifest, DiamondParams};
use tracing::warn;

use crate::{
    cli::CutArgs,
    handlers::build_diamond,
    params::parse_toml,
    report::{CutReport, Report},
};

pub(crate) fn handle_cut(args: CutArgs) -> anyhow::Result<Report> {
    let params = parse_toml::<DiamondParams>(&args.params)?;
    let manifest = parse_toml::<CutManifest>(&args.manifest)?;

    let mut diamond = build_diamond(&params)?;
    let caller = args.caller.unwrap_or(params.owner);
    let cuts = manifest.facet_cuts()?;

    let receipt = diamond
        .diamond_cut(&caller, &cuts, &manifest.init)
        .inspect_err(|err| warn!(%err, %caller, "cut rejected, selector table unchanged"))
        .context("cut rejected")?;

    Ok(Report::Cut(CutReport::new(receipt, &diamond)))
}

#[cfg(test)]
mod tests {
    use diamond_primitives::{module_ref::ModuleRef, selector::selector_of, Address};
    use diamond_registry::RegistryError;

    use super::*;
    use crate::handlers::tests::{write_file, PARAMS};

    const MANIFEST: &str = r#"
        [[cuts]]
        action = "remove"
        signatures = ["fn7()"]

        [[cuts]]
        action = "replace"
        target = "0x0000000000000000000000000000000000000002"
        signatures = ["fn0()"]
    "#;

    fn args(dir: &tempfile::TempDir, manifest: &str, caller: Option<Address>) -> CutArgs {
        CutArgs {
            params: write_file(dir, "params.toml", PARAMS),
            manifest: write_file(dir, "manifest.toml", manifest),
            caller,
        }
    }

    #[test]
    fn applies_manifest() {
        let dir = tempfile::tempdir().unwrap();

        let Report::Cut(report) = handle_cut(args(&dir, MANIFEST, None)).unwrap() else {
            panic!("expected a cut report");
        };

        assert_eq!((report.added, report.replaced, report.removed), (0, 1, 1));
        // fn7() sat in the full first slot and setFee(uint256) moved into its lane.
        assert_eq!(report.slots_written, 2);
        assert_eq!(report.table.slot_occupancy, vec![8]);

        let admin = ModuleRef::new(Address::with_last_byte(2));
        let admin_facet = report
            .table
            .facets
            .iter()
            .find(|facet| facet.address == admin)
            .unwrap();
        assert_eq!(
            admin_facet.selectors,
            vec![selector_of("setFee(uint256)"), selector_of("fn0()")]
        );
    }

    #[test]
    fn rejects_stranger() {
        let dir = tempfile::tempdir().unwrap();
        let stranger = Address::repeat_byte(0x42);

        let err = handle_cut(args(&dir, MANIFEST, Some(stranger))).unwrap_err();

        assert_eq!(
            err.downcast_ref::<RegistryError>(),
            Some(&RegistryError::NotAuthorized { caller: stranger })
        );
    }
}
