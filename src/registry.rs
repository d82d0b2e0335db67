//! User-registered variable expanders.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};

/// A resolver mapping a variable name to its replacement text.
pub type Expander = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A table of custom variable expanders.
///
/// Custom expanders take precedence over the built-in `date`, `time`,
/// `lib`, `os` and `liburl` expanders, which live in a separate immutable
/// layer (see [`crate::expand`]) and can never be removed or replaced.
///
/// A registry is an ordinary value: tests and embedders can keep isolated
/// instances and pass them to
/// [`Document::field_with`](crate::document::Document::field_with), while
/// [`ExpanderRegistry::global`] offers one shared process-wide table for
/// hosts that want every document to see the same expanders.
///
/// The table is guarded internally, so registration and expansion may run
/// concurrently from multiple threads.
#[derive(Default)]
pub struct ExpanderRegistry {
    custom: RwLock<HashMap<String, Expander>>,
}

static GLOBAL: LazyLock<ExpanderRegistry> = LazyLock::new(ExpanderRegistry::default);

impl ExpanderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry used by
    /// [`Document::field`](crate::document::Document::field).
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Registers `expander` for `name`.
    ///
    /// The first registration for a name wins: when the name is already
    /// taken this returns `false` and leaves the table unchanged. Remove
    /// the old entry first to replace it.
    pub fn add<F>(&self, name: impl Into<String>, expander: F) -> bool
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        let mut custom = self.custom.write().unwrap_or_else(PoisonError::into_inner);
        match custom.entry(name.into()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(expander));
                true
            }
        }
    }

    /// Removes the expander registered for `name`. Removing an absent name
    /// is a silent no-op.
    pub fn remove(&self, name: &str) {
        self.custom
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name);
    }

    /// Runs the custom expander registered for `name`, if any.
    pub(crate) fn resolve(&self, name: &str) -> Option<String> {
        let expander = self
            .custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()?;
        // Run outside the lock; an expander may itself trigger expansion.
        Some(expander(name))
    }
}

impl fmt::Debug for ExpanderRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<String> = self
            .custom
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        f.debug_struct("ExpanderRegistry")
            .field("custom", &names)
            .finish()
    }
}
