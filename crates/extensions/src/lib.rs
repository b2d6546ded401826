//! Extension registry and built-in extension modules.
//!
//! Each extension implements [`cloudguard::Extension`] and is registered in
//! the [`ExtensionRegistry`] under a stable name. New operations are added as
//! new modules in this crate plus one registration line — no changes anywhere
//! else in the workspace.
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** Extensions sequence calls against the
//! [`cloudguard::PostureApi`] port; they contain no transport details and no
//! registry logic of their own.
//!
//! ## Fault isolation
//!
//! A unit that fails to construct is reported as a per-unit diagnostic by
//! [`ExtensionRegistry::list`]; one broken extension never blocks visibility
//! of the others and never aborts a run.

pub mod accounts;
pub mod registry;
pub mod users;

pub use registry::{ExtensionRegistry, ListOutcome};
