//! Individual configuration sources composed by the merge service.

pub mod environment;
pub mod global_file;
pub mod workspace_file;
