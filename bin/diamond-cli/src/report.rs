//! What the commands print, as text or as JSON.

use std::fmt;

use diamond_primitives::{
    cut::Facet,
    module_ref::ModuleRef,
    selector::{InterfaceId, Selector},
    Address,
};
use diamond_registry::{CutReceipt, Diamond};
use serde::Serialize;

use crate::cli::OutputFormat;

/// Output of any command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum Report {
    Selectors(Vec<SelectorEntry>),
    Table(TableReport),
    Cut(CutReport),
}

impl Report {
    pub(crate) fn print(&self, format: OutputFormat) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => print!("{self}"),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(self)?),
        }

        Ok(())
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Selectors(entries) => entries
                .iter()
                .try_for_each(|entry| writeln!(f, "{} -> {}", entry.signature, entry.selector)),
            Report::Table(table) => write!(f, "{table}"),
            Report::Cut(cut) => write!(f, "{cut}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct SelectorEntry {
    pub(crate) signature: String,
    pub(crate) selector: Selector,
}

/// A snapshot of a router's selector table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct TableReport {
    pub(crate) owner: Address,
    pub(crate) fallback: ModuleRef,
    pub(crate) interfaces: Vec<InterfaceId>,
    pub(crate) selector_count: usize,
    pub(crate) slot_occupancy: Vec<usize>,
    pub(crate) facets: Vec<Facet>,
}

impl From<&Diamond> for TableReport {
    fn from(diamond: &Diamond) -> Self {
        Self {
            owner: diamond.owner(),
            fallback: diamond.fallback_address(),
            interfaces: diamond.supported_interfaces().to_vec(),
            selector_count: diamond.selector_count(),
            slot_occupancy: diamond.registry().slot_occupancy(),
            facets: diamond.facets(),
        }
    }
}

impl fmt::Display for TableReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "owner: {}", self.owner)?;
        writeln!(f, "fallback: {}", self.fallback)?;

        let interfaces = self
            .interfaces
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        writeln!(f, "interfaces: {}", interfaces.join(", "))?;

        writeln!(
            f,
            "selectors: {} in {} slot(s) {:?}",
            self.selector_count,
            self.slot_occupancy.len(),
            self.slot_occupancy
        )?;

        for facet in &self.facets {
            writeln!(f, "facet {} ({} selectors)", facet.address, facet.selectors.len())?;
            for selector in &facet.selectors {
                writeln!(f, "  {selector}")?;
            }
        }

        Ok(())
    }
}

/// The outcome of a committed cut.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct CutReport {
    pub(crate) added: usize,
    pub(crate) replaced: usize,
    pub(crate) removed: usize,
    pub(crate) slots_written: usize,
    pub(crate) table: TableReport,
}

impl CutReport {
    pub(crate) fn new(receipt: CutReceipt, diamond: &Diamond) -> Self {
        Self {
            added: receipt.added,
            replaced: receipt.replaced,
            removed: receipt.removed,
            slots_written: receipt.slots_written,
            table: TableReport::from(diamond),
        }
    }
}

impl fmt::Display for CutReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "committed: {} added, {} replaced, {} removed, {} slot(s) written",
            self.added, self.replaced, self.removed, self.slots_written
        )?;

        write!(f, "{}", self.table)
    }
}
