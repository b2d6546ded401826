//! Compiled registry of named extension units.
//!
//! Units are `(name, constructor)` pairs registered at startup. Listing and
//! loading go through the constructor, so a unit that cannot be built is
//! caught here — as an [`ExtensionError::Load`] diagnostic during a listing,
//! or as a typed error from [`ExtensionRegistry::load`] — instead of taking
//! the process down.

use cloudguard::{Extension, ExtensionDescriptor, ExtensionError};

/// Builds one extension instance, or explains why it cannot be built.
pub type Constructor = fn() -> Result<Box<dyn Extension>, ExtensionError>;

struct RegistryEntry {
    name: &'static str,
    construct: Constructor,
}

/// One entry of a registry listing.
///
/// `Unavailable` is a diagnostic, not a propagated failure: iteration
/// continues past it.
#[derive(Debug)]
pub enum ListOutcome {
    /// The unit loaded; here is its descriptor.
    Available(ExtensionDescriptor),
    /// The unit failed to load; the listing reports it and moves on.
    Unavailable {
        /// Name of the unit as registered.
        unit: String,
        /// Why the unit could not be loaded.
        error: ExtensionError,
    },
}

/// Registry of every extension compiled into this build.
///
/// Listing order is registration order and is stable within a run.
pub struct ExtensionRegistry {
    entries: Vec<RegistryEntry>,
}

impl ExtensionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Creates the registry pre-populated with the built-in extensions.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register("list-users", || Ok(Box::new(crate::users::ListUsers)));
        registry.register("cloud-accounts", || {
            Ok(Box::new(crate::accounts::CloudAccounts))
        });
        registry
    }

    /// Registers a unit under a stable name.
    pub fn register(&mut self, name: &'static str, construct: Constructor) {
        self.entries.push(RegistryEntry { name, construct });
    }

    /// Lazily lists every registered unit, loading each one independently.
    ///
    /// A unit whose constructor fails yields [`ListOutcome::Unavailable`];
    /// the remaining units are still produced.
    pub fn list(&self) -> impl Iterator<Item = ListOutcome> + '_ {
        self.entries.iter().map(|entry| match (entry.construct)() {
            Ok(extension) => ListOutcome::Available(extension.describe()),
            Err(error) => {
                tracing::warn!(unit = entry.name, %error, "extension failed to load");
                ListOutcome::Unavailable {
                    unit: entry.name.to_string(),
                    error,
                }
            }
        })
    }

    /// Loads one unit by name.
    pub fn load(&self, name: &str) -> Result<Box<dyn Extension>, ExtensionError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| ExtensionError::NotFound {
                name: name.to_string(),
            })?;
        (entry.construct)()
    }
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failing_unit() -> Result<Box<dyn Extension>, ExtensionError> {
        Err(ExtensionError::Load {
            unit: "broken".to_string(),
            message: "missing describe operation".to_string(),
        })
    }

    #[test]
    fn builtin_listing_is_stable_and_complete() {
        let registry = ExtensionRegistry::builtin();
        let names: Vec<String> = registry
            .list()
            .map(|outcome| match outcome {
                ListOutcome::Available(descriptor) => descriptor.name,
                ListOutcome::Unavailable { unit, .. } => panic!("{unit} failed to load"),
            })
            .collect();
        assert_eq!(names, ["list-users", "cloud-accounts"]);
    }

    #[test]
    fn one_broken_unit_never_blocks_the_listing() {
        let mut registry = ExtensionRegistry::builtin();
        registry.register("broken", failing_unit);
        registry.register("list-users-again", || Ok(Box::new(crate::users::ListUsers)));

        let outcomes: Vec<ListOutcome> = registry.list().collect();
        assert_eq!(outcomes.len(), 4);
        match &outcomes[2] {
            ListOutcome::Unavailable { unit, error } => {
                assert_eq!(unit, "broken");
                assert!(matches!(error, ExtensionError::Load { .. }));
            }
            other => panic!("expected the broken unit third, got {other:?}"),
        }
        // The unit registered after the broken one is still produced.
        assert!(matches!(outcomes[3], ListOutcome::Available(_)));
    }

    #[test]
    fn load_resolves_registered_names() {
        let registry = ExtensionRegistry::builtin();
        let extension = registry.load("list-users").unwrap();
        assert_eq!(extension.describe().name, "list-users");
    }

    #[test]
    fn load_rejects_unknown_names() {
        let registry = ExtensionRegistry::builtin();
        match registry.load("no-such-module") {
            Err(ExtensionError::NotFound { name }) => assert_eq!(name, "no-such-module"),
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn load_surfaces_constructor_failures() {
        let mut registry = ExtensionRegistry::new();
        registry.register("broken", failing_unit);
        assert!(matches!(
            registry.load("broken"),
            Err(ExtensionError::Load { .. })
        ));
    }
}
