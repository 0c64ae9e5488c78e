//! This crate contains the parameters a router is constructed from (its owner and the facets it
//! starts with) as well as the description of later cuts, all deserializable from TOML.

mod default;
pub mod diamond;
pub mod errors;
pub mod manifest;
pub mod prelude;
