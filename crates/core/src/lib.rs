//! Core of the parameter store client.
//!
//! This crate holds everything that does not depend on a concrete backend:
//! - [`types`]: [`Parameter`], [`ParameterSet`], [`HistoryEntry`], [`Page`]
//! - [`error`]: [`Error`] and the pass-through [`TransportError`]
//! - [`store`]: the [`ParameterStore`] transport contract
//! - [`paging`]: helpers that drain or search paginated listings
//! - [`resolver`]: single-key and subtree resolution with version pinning

#![warn(missing_docs)]

pub mod error;
pub mod paging;
pub mod resolver;
pub mod store;
pub mod types;

pub use error::{Error, Result, TransportError, PARAMETER_NOT_FOUND};
pub use resolver::{parse_version, Resolver};
pub use store::{ParameterStore, TransportResult};
pub use types::{HistoryEntry, Page, Parameter, ParameterSet, Version};
