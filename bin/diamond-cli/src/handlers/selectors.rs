use diamond_primitives::selector::parse_signature;

use crate::{
    cli::SelectorsArgs,
    report::{Report, SelectorEntry},
};

pub(crate) fn handle_selectors(args: SelectorsArgs) -> anyhow::Result<Report> {
    let entries = args
        .signatures
        .into_iter()
        .map(|signature| -> anyhow::Result<SelectorEntry> {
            let selector = parse_signature(&signature)?;
            Ok(SelectorEntry {
                signature,
                selector,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Report::Selectors(entries))
}

#[cfg(test)]
mod tests {
    use diamond_primitives::selector::Selector;

    use super::*;

    #[test]
    fn derives_selectors() {
        let args = SelectorsArgs {
            signatures: vec!["transfer(address,uint256)".to_string()],
        };

        let Report::Selectors(entries) = handle_selectors(args).unwrap() else {
            panic!("expected selectors");
        };
        assert_eq!(
            entries,
            vec![SelectorEntry {
                signature: "transfer(address,uint256)".to_string(),
                selector: Selector::from([0xa9, 0x05, 0x9c, 0xbb]),
            }]
        );
    }

    #[test]
    fn rejects_malformed_signatures() {
        let args = SelectorsArgs {
            signatures: vec!["transfer(address, uint256)".to_string()],
        };

        assert!(handle_selectors(args).is_err());
    }
}
