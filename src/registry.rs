/*!
Registry of the algorithms the binding knows about.

The registry is populated once, the first time it is reached, by walking the
backend catalogs, and never changes afterwards. Concurrent reads from many
sessions need no synchronization.
*/

use once_cell::sync::Lazy;

use crate::backend::{kem, sig};
use crate::error::{Error, Result};

/// The two algorithm families the binding exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmFamily {
    Kem,
    Sig,
}

struct FamilyCatalog {
    supported: Vec<&'static str>,
    enabled: Vec<&'static str>,
}

impl FamilyCatalog {
    fn collect<I>(entries: I) -> Self
    where
        I: Iterator<Item = (&'static str, bool)>,
    {
        let mut supported = Vec::new();
        let mut enabled = Vec::new();
        for (name, is_enabled) in entries {
            supported.push(name);
            if is_enabled {
                enabled.push(name);
            }
        }
        Self { supported, enabled }
    }
}

/// Immutable view of supported and enabled algorithms, per family.
pub struct Registry {
    kem: FamilyCatalog,
    sig: FamilyCatalog,
}

static REGISTRY: Lazy<Registry> = Lazy::new(Registry::build);

/// Access the process-wide registry, building it on first use.
pub fn registry() -> &'static Registry {
    &REGISTRY
}

impl Registry {
    fn build() -> Self {
        let kem = FamilyCatalog::collect(
            kem::KEM_CATALOG
                .iter()
                .map(|entry| (entry.name, entry.is_enabled())),
        );
        let sig = FamilyCatalog::collect(
            sig::SIG_CATALOG
                .iter()
                .map(|entry| (entry.name, entry.is_enabled())),
        );
        log::debug!(
            "algorithm registry initialized: {} KEMs ({} enabled), {} signature schemes ({} enabled)",
            kem.supported.len(),
            kem.enabled.len(),
            sig.supported.len(),
            sig.enabled.len(),
        );
        Self { kem, sig }
    }

    fn family(&self, family: AlgorithmFamily) -> &FamilyCatalog {
        match family {
            AlgorithmFamily::Kem => &self.kem,
            AlgorithmFamily::Sig => &self.sig,
        }
    }

    /// Number of algorithms the binding knows about, enabled or not.
    pub fn max_count(&self, family: AlgorithmFamily) -> usize {
        self.family(family).supported.len()
    }

    /// Name of the algorithm at `index` in catalog order.
    pub fn name_at(&self, family: AlgorithmFamily, index: usize) -> Result<&'static str> {
        let supported = &self.family(family).supported;
        supported.get(index).copied().ok_or(Error::OutOfRange {
            index,
            max: supported.len(),
        })
    }

    /// All recognized names, in catalog order.
    pub fn supported_names(&self, family: AlgorithmFamily) -> &[&'static str] {
        &self.family(family).supported
    }

    /// The subset of supported names usable in this build.
    pub fn enabled_names(&self, family: AlgorithmFamily) -> &[&'static str] {
        &self.family(family).enabled
    }

    pub fn is_supported(&self, family: AlgorithmFamily, name: &str) -> bool {
        self.family(family).supported.iter().any(|&n| n == name)
    }

    pub fn is_enabled(&self, family: AlgorithmFamily, name: &str) -> bool {
        self.family(family).enabled.iter().any(|&n| n == name)
    }
}
