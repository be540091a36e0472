//! Domain logic - pure version selection rules independent of git operations

pub mod selector;
pub mod version;

pub use selector::select_versions;
pub use version::ParsedVersion;
