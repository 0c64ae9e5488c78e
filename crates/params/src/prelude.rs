//! Just import this if you want a no-brainer `use` statement to get the most of the params.

pub use crate::{
    diamond::{DiamondParams, FacetParams},
    errors::ParamsError,
    manifest::{CutManifest, CutParams},
};
