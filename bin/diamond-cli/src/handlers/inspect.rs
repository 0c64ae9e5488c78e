use diamond_params::prelude::DiamondParams;

use crate::{
    cli::InspectArgs,
    handlers::build_diamond,
    params::parse_toml,
    report::{Report, TableReport},
};

pub(crate) fn handle_inspect(args: InspectArgs) -> anyhow::Result<Report> {
    let params = parse_toml::<DiamondParams>(&args.params)?;
    let diamond = build_diamond(&params)?;

    Ok(Report::Table(TableReport::from(&diamond)))
}

#[cfg(test)]
mod tests {
    use diamond_primitives::module_ref::ModuleRef;

    use super::*;
    use crate::handlers::tests::{write_file, PARAMS};

    #[test]
    fn inspects_initial_table() {
        let dir = tempfile::tempdir().unwrap();
        let params = write_file(&dir, "params.toml", PARAMS);

        let Report::Table(table) = handle_inspect(InspectArgs { params }).unwrap() else {
            panic!("expected a table");
        };

        assert_eq!(table.selector_count, 9);
        assert_eq!(table.slot_occupancy, vec![8, 1]);
        assert_eq!(table.facets.len(), 2);
        assert_eq!(table.fallback, ModuleRef::NONE);
        assert_eq!(table.interfaces.len(), 4);
    }

    #[test]
    fn rejects_duplicate_selectors() {
        let dir = tempfile::tempdir().unwrap();
        let params = format!(
            "{PARAMS}{}",
            r#"
        [[facets]]
        name = "Clash"
        address = "0x0000000000000000000000000000000000000003"
        signatures = ["fn0()"]
        "#
        );
        let params = write_file(&dir, "params.toml", &params);

        assert!(handle_inspect(InspectArgs { params }).is_err());
    }
}
