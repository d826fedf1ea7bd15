//! Runtime-replaceable property functions.
//!
//! Each property function is a [`Pluggable`] living in a `static`, with a
//! plain accessor function that forwards to it:
//!
//! ```
//! use geoptics_core::store::Pluggable;
//!
//! pub static CORE_INDEX: Pluggable<(), f64> =
//!     Pluggable::new(module_path!(), "core_index", |()| 1.6);
//!
//! pub fn core_index() -> f64 {
//!     CORE_INDEX.call(())
//! }
//!
//! assert_eq!(core_index(), 1.6);
//! CORE_INDEX.replace_implementation(|()| 1.59);
//! assert_eq!(core_index(), 1.59);
//! CORE_INDEX.reset_implementation();
//! assert_eq!(core_index(), 1.6);
//! ```
//!
//! The original implementation is a plain `fn` pointer and is never changed.
//! A replacement is any `Fn` closure of the same signature. Entries join a
//! process-wide ledger when they are first used or explicitly registered;
//! the ledger answers which entries are currently replaced and can reset
//! all of them at once.
//!
//! ## Locking
//!
//! Every entry guards its active slot with its own `RwLock`. The ledger of
//! known entries sits behind one global `Mutex`. Calls hold the entry lock
//! only long enough to clone the active closure, so a replacement may call
//! other pluggable functions (or its own original) freely.

use std::any::Any;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::debug;
use parking_lot::{Mutex, RwLock};
use thiserror::Error;

use crate::units::{Quantity, UnitError};

/// Misuse of the store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("No pluggable function named '{0}' is registered")]
    NotRegistered(String),

    #[error("'{0}' is ambiguous, use the qualified name")]
    Ambiguous(String),

    #[error("Pluggable function '{name}' does not return {expected}")]
    SignatureMismatch { name: String, expected: &'static str },

    #[error(transparent)]
    Unit(#[from] UnitError),
}

type Replacement<A, R> = Arc<dyn Fn(A) -> R + Send + Sync>;

/// A property function whose implementation can be swapped at runtime.
pub struct Pluggable<A: 'static, R: 'static> {
    module: &'static str,
    name: &'static str,
    original: fn(A) -> R,
    replacement: RwLock<Option<Replacement<A, R>>>,
    registered: AtomicBool,
}

impl<A: 'static, R: 'static> Pluggable<A, R> {
    pub const fn new(module: &'static str, name: &'static str, original: fn(A) -> R) -> Self {
        Self {
            module,
            name,
            original,
            replacement: RwLock::new(None),
            registered: AtomicBool::new(false),
        }
    }

    /// Invoke the active implementation.
    pub fn call(&'static self, args: A) -> R {
        self.register();
        let active = self.replacement.read().clone();
        match active {
            Some(f) => f(args),
            None => (self.original)(args),
        }
    }

    pub fn replace_implementation<F>(&'static self, f: F)
    where
        F: Fn(A) -> R + Send + Sync + 'static,
    {
        self.register();
        debug!("replacing {}::{}", self.module, self.name);
        *self.replacement.write() = Some(Arc::new(f));
    }

    pub fn reset_implementation(&self) {
        if self.replacement.write().take().is_some() {
            debug!("reset {}::{} to original", self.module, self.name);
        }
    }

    pub fn is_original(&self) -> bool {
        self.replacement.read().is_none()
    }

    pub fn original_impl(&self) -> fn(A) -> R {
        self.original
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn module(&self) -> &'static str {
        self.module
    }

    /// Add this entry to the process-wide ledger. Idempotent.
    pub fn register(&'static self) {
        if !self.registered.swap(true, Ordering::AcqRel) {
            register(self);
        }
    }
}

impl<A: 'static, R: 'static> fmt::Debug for Pluggable<A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pluggable")
            .field("module", &self.module)
            .field("name", &self.name)
            .field("is_original", &self.is_original())
            .finish()
    }
}

/// Type-erased view of a [`Pluggable`], as kept in the ledger.
pub trait PluggableEntry: Send + Sync {
    fn name(&self) -> &'static str;

    fn module(&self) -> &'static str;

    fn qualified_name(&self) -> String {
        format!("{}::{}", self.module(), self.name())
    }

    fn is_original(&self) -> bool;

    fn reset_implementation(&self);

    fn as_any(&self) -> &dyn Any;
}

impl<A: 'static, R: 'static> PluggableEntry for Pluggable<A, R> {
    fn name(&self) -> &'static str {
        self.name
    }

    fn module(&self) -> &'static str {
        self.module
    }

    fn is_original(&self) -> bool {
        Pluggable::is_original(self)
    }

    fn reset_implementation(&self) {
        Pluggable::reset_implementation(self)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

static LEDGER: Mutex<BTreeMap<String, &'static dyn PluggableEntry>> = Mutex::new(BTreeMap::new());

/// Add an entry to the ledger. Registering twice is a no-op.
pub fn register(entry: &'static dyn PluggableEntry) {
    LEDGER.lock().entry(entry.qualified_name()).or_insert(entry);
}

/// All registered entries, ordered by qualified name.
pub fn registered() -> Vec<&'static dyn PluggableEntry> {
    LEDGER.lock().values().copied().collect()
}

/// Qualified names of all entries that currently run a replacement.
///
/// Plain names may repeat across modules, so each entry is reported as
/// `module::name`.
pub fn get_replaced() -> BTreeSet<String> {
    LEDGER
        .lock()
        .iter()
        .filter(|(_, e)| !e.is_original())
        .map(|(qualified, _)| qualified.clone())
        .collect()
}

pub fn is_all_original() -> bool {
    LEDGER.lock().values().all(|e| e.is_original())
}

/// Restore the original implementation of every registered entry.
pub fn reset_all_to_original() {
    let entries = registered();
    for entry in entries {
        entry.reset_implementation();
    }
}

/// Find an entry by plain name (`fiber_core_refractive_index`) or by
/// qualified name (`geoptics_materials::fibers::fiber_core_refractive_index`).
pub fn lookup(name: &str) -> Result<&'static dyn PluggableEntry, StoreError> {
    let ledger = LEDGER.lock();
    if let Some(entry) = ledger.get(name) {
        return Ok(*entry);
    }
    let mut matches = ledger.values().filter(|e| e.name() == name);
    match (matches.next(), matches.next()) {
        (Some(entry), None) => Ok(*entry),
        (Some(_), Some(_)) => Err(StoreError::Ambiguous(name.to_string())),
        (None, _) => Err(StoreError::NotRegistered(name.to_string())),
    }
}

/// Reset a single entry by name.
pub fn reset(name: &str) -> Result<(), StoreError> {
    lookup(name)?.reset_implementation();
    Ok(())
}

/// Replace a constant-valued entry by name.
///
/// Works for `Pluggable<(), f64>` and for `Pluggable<(), Quantity>`, where the
/// value is taken in the unit of the original implementation.
pub fn replace_constant(name: &str, value: f64) -> Result<(), StoreError> {
    let entry = lookup(name)?;
    let any = entry.as_any();
    if let Some(p) = any.downcast_ref::<Pluggable<(), f64>>() {
        p.replace_implementation(move |()| value);
        return Ok(());
    }
    if let Some(p) = any.downcast_ref::<Pluggable<(), Quantity>>() {
        let unit = (p.original_impl())(()).unit();
        let q = Quantity::new(value, unit);
        p.replace_implementation(move |()| q);
        return Ok(());
    }
    Err(StoreError::SignatureMismatch {
        name: entry.qualified_name(),
        expected: "a constant",
    })
}

/// Replace a quantity-valued entry by name.
///
/// The quantity must have the dimension of the original value. Plain `f64`
/// entries accept dimensionless quantities.
pub fn replace_quantity(name: &str, quantity: Quantity) -> Result<(), StoreError> {
    let entry = lookup(name)?;
    let any = entry.as_any();
    if let Some(p) = any.downcast_ref::<Pluggable<(), Quantity>>() {
        let unit = (p.original_impl())(()).unit();
        let q = quantity.to(unit)?;
        p.replace_implementation(move |()| q);
        return Ok(());
    }
    if let Some(p) = any.downcast_ref::<Pluggable<(), f64>>() {
        let value = quantity.value_in(crate::units::Unit::DIMENSIONLESS)?;
        p.replace_implementation(move |()| value);
        return Ok(());
    }
    Err(StoreError::SignatureMismatch {
        name: entry.qualified_name(),
        expected: "a quantity",
    })
}
