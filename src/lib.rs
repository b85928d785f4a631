//! clib - a package manager front-end for C
//!
//! This crate provides the library behind the `clib` command dispatcher and
//! the `clib-search` family of tools: provider discovery, provider
//! invocation, result aggregation and filtering, and a time-boxed cache for
//! remotely fetched package lists.

pub mod core;
pub mod ops;
pub mod sources;
pub mod util;

pub use core::{package::Package, package::PackageList, package::ProviderOutput, query::QueryTerms};

pub use util::context::GlobalContext;
