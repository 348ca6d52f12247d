//! Configuration merge: default policy plus source composition.

pub(crate) mod merge_policy;
pub mod service;
