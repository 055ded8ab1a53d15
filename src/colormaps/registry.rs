//! Named gradient registry.
//!
//! The registry is an ordinary value handed to whoever needs named lookups;
//! there is no process-wide instance. Registration is last-write-wins.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

use super::gradient::{reversed_name, ColorGradient};
use super::{diverging, sequential};
use crate::error::{PestvizError, Result};

/// Registry of gradients addressable by case-insensitive name.
///
/// Lookups of `<name>_r` fall back to the reversed `<name>` entry when no
/// gradient was registered under the suffixed name itself.
#[derive(Debug, Default)]
pub struct GradientRegistry {
    entries: RwLock<HashMap<String, Arc<ColorGradient>>>,
}

impl GradientRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry preloaded with the built-in gradients
    pub fn with_builtins() -> Result<Self> {
        let registry = Self::new();
        let builtins = [
            diverging::coolwarm()?,
            diverging::seismic()?,
            diverging::bwr()?,
            diverging::rdbu()?,
            diverging::spectral()?,
            diverging::puor()?,
            diverging::brbg()?,
            sequential::jet()?,
            sequential::viridis()?,
            sequential::plasma()?,
            sequential::inferno()?,
            sequential::magma()?,
            sequential::cividis()?,
            sequential::turbo()?,
        ];
        for gradient in builtins {
            let name = gradient.name().unwrap_or_default().to_string();
            registry.register(&name, gradient);
        }
        Ok(registry)
    }

    /// Store `gradient` under `name`, returning whatever it replaced
    pub fn register(&self, name: &str, gradient: ColorGradient) -> Option<Arc<ColorGradient>> {
        let key = name.to_lowercase();
        debug!(gradient = %key, stops = gradient.len(), "Registering gradient");
        self.entries.write().insert(key, Arc::new(gradient))
    }

    /// Look up a gradient by name
    pub fn get(&self, name: &str) -> Option<Arc<ColorGradient>> {
        let key = name.to_lowercase();
        let entries = self.entries.read();
        if let Some(gradient) = entries.get(&key) {
            return Some(Arc::clone(gradient));
        }
        let base = key.strip_suffix("_r")?;
        entries.get(base).map(|g| Arc::new(g.reversed()))
    }

    /// Look up a gradient by name with error handling
    pub fn get_checked(&self, name: &str) -> Result<Arc<ColorGradient>> {
        self.get(name).ok_or_else(|| PestvizError::InvalidParameter {
            param: "colormap".to_string(),
            message: format!("Unknown colormap: {}", name),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Registered names, sorted; reversed variants are implied, not listed
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.entries.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Name under which a gradient's reversed variant resolves
pub fn reversed_key(name: &str) -> String {
    reversed_name(&name.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colormaps::gradient::Rgba;

    fn two_tone() -> ColorGradient {
        ColorGradient::from_colors(&[
            Rgba::new(0.0, 0.0, 0.0, 1.0),
            Rgba::new(1.0, 1.0, 1.0, 1.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = GradientRegistry::with_builtins().unwrap();
        for name in ["coolwarm", "seismic", "bwr", "rdbu", "jet", "viridis"] {
            assert!(registry.contains(name), "missing {}", name);
        }
        assert!(registry.get("not-a-colormap").is_none());
        assert!(registry.get_checked("not-a-colormap").is_err());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = GradientRegistry::with_builtins().unwrap();
        assert!(registry.get("RdBu").is_some());
        assert!(registry.get("CoolWarm").is_some());
    }

    #[test]
    fn test_reversed_lookup() {
        let registry = GradientRegistry::with_builtins().unwrap();
        let jet = registry.get("jet").unwrap();
        let jet_r = registry.get(&reversed_key("jet")).unwrap();

        assert_eq!(jet_r.sample(0.0), jet.sample(1.0));
        assert_eq!(jet_r.name(), Some("jet_r"));
        assert!(!registry.names().contains(&"jet_r".to_string()));
    }

    #[test]
    fn test_register_is_last_write_wins() {
        let registry = GradientRegistry::new();
        assert!(registry.is_empty());

        assert!(registry.register("shiftedcmap", two_tone()).is_none());
        let previous = registry.register("shiftedcmap", two_tone().reversed());
        assert!(previous.is_some());

        assert_eq!(registry.len(), 1);
        let current = registry.get("shiftedcmap").unwrap();
        assert_eq!(current.sample(0.0), Rgba::new(1.0, 1.0, 1.0, 1.0));
    }

    #[test]
    fn test_explicit_reversed_entry_wins() {
        let registry = GradientRegistry::new();
        registry.register("tone", two_tone());
        registry.register("tone_r", two_tone());

        let explicit = registry.get("tone_r").unwrap();
        assert_eq!(explicit.sample(0.0), Rgba::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn test_registry_shared_across_threads() {
        let registry = Arc::new(GradientRegistry::new());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry.register(&format!("tone{}", i), two_tone());
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(registry.len(), 4);
    }
}
