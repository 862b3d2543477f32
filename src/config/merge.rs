//! Merge rules applied while loading host configuration.

pub(crate) mod merge_policy;
