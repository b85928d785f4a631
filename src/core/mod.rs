//! Core data types: package records and search queries.

pub mod package;
pub mod query;

pub use package::{Package, PackageList, ProviderOutput};
pub use query::QueryTerms;
