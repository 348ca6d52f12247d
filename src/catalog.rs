//! Agent Catalog
//!
//! Static directory data: agent records, category reference data, and the
//! catalog store with its embedded seed.

mod records;
mod store;

pub use records::{Agent, AgentCategory};
pub use store::{AgentCatalog, ValidationResult};
