//! Name-to-function registry and dispatch.

use hashbrown::HashMap;

use crate::error::ExternError;
use crate::ffi::{extern_entries, ExternCall, ExternFn};
use crate::value::Value;

/// Extern functions by qualified name, plus the random source handed to
/// functions that need one (`gostr.Shuffle`).
pub struct ExternRegistry {
    funcs: HashMap<&'static str, ExternFn>,
    rng: fastrand::Rng,
}

impl ExternRegistry {
    /// Registry with every entry of `EXTERN_TABLE` and a randomly seeded
    /// generator.
    pub fn new() -> Self {
        Self::from_table(fastrand::Rng::new())
    }

    /// Like [`ExternRegistry::new`], with a reproducible generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_table(fastrand::Rng::with_seed(seed))
    }

    /// Registry with no functions.
    pub fn empty() -> Self {
        Self {
            funcs: HashMap::new(),
            rng: fastrand::Rng::new(),
        }
    }

    fn from_table(rng: fastrand::Rng) -> Self {
        let mut registry = Self {
            funcs: HashMap::new(),
            rng,
        };
        for entry in extern_entries() {
            if let Err(e) = registry.register(entry.name, entry.func) {
                log::warn!("skipping extern table entry: {e}");
            }
        }
        log::debug!("extern registry built with {} functions", registry.len());
        registry
    }

    /// Register `func` under `name`. Names are unique.
    pub fn register(&mut self, name: &'static str, func: ExternFn) -> Result<(), ExternError> {
        if self.funcs.contains_key(name) {
            return Err(ExternError::Duplicate(name.to_string()));
        }
        self.funcs.insert(name, func);
        Ok(())
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<ExternFn> {
        self.funcs.get(name).copied()
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.funcs.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Reseed the generator used by `gostr.Shuffle`.
    pub fn seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    /// Call the function registered under `name` and collect its returns.
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Vec<Value>, ExternError> {
        let func = self
            .get(name)
            .ok_or_else(|| ExternError::UnknownFunction(name.to_string()))?;
        log::trace!("extern call {name} with {} args", args.len());
        let mut call = ExternCall::new(name, args, &mut self.rng);
        func(&mut call)?;
        Ok(call.into_rets())
    }
}

impl Default for ExternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ExternRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExternRegistry")
            .field("funcs", &self.names())
            .finish()
    }
}
