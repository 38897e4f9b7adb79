//! Registry mapping pattern keys to generators.

use sandkit_core::{GeometryConfig, Path};
use std::collections::BTreeMap;

use crate::circle::CircleGenerator;
use crate::coordinate_list::CoordinateListGenerator;
use crate::diameters::DiametersGenerator;
use crate::error::{PatternError, PatternResult};
use crate::free_draw::FreeDrawGenerator;
use crate::gcode_import::GcodeImportGenerator;
use crate::generator::PatternGenerator;
use crate::params::{ParamValue, PatternParams, PatternSpec};
use crate::spiral::SpiralGenerator;

/// Set of available pattern generators, in display order
pub struct PatternRegistry {
    generators: Vec<Box<dyn PatternGenerator>>,
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for PatternRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternRegistry")
            .field("keys", &self.keys())
            .finish()
    }
}

impl PatternRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self {
            generators: Vec::new(),
        }
    }

    /// Creates a registry holding every built-in pattern
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(CircleGenerator::new()));
        registry.register(Box::new(SpiralGenerator::new()));
        registry.register(Box::new(DiametersGenerator::new()));
        registry.register(Box::new(CoordinateListGenerator::new()));
        registry.register(Box::new(GcodeImportGenerator::new()));
        registry.register(Box::new(FreeDrawGenerator::new()));
        registry
    }

    /// Adds a generator, replacing any generator with the same key
    pub fn register(&mut self, generator: Box<dyn PatternGenerator>) {
        let key = generator.key();
        if let Some(slot) = self.generators.iter_mut().find(|g| g.key() == key) {
            tracing::debug!("Replacing pattern generator '{}'", key);
            *slot = generator;
        } else {
            self.generators.push(generator);
        }
    }

    pub fn get(&self, key: &str) -> Option<&dyn PatternGenerator> {
        self.generators
            .iter()
            .find(|g| g.key() == key)
            .map(|g| g.as_ref())
    }

    /// Looks up a generator, failing with [`PatternError::UnknownPattern`]
    pub fn require(&self, key: &str) -> PatternResult<&dyn PatternGenerator> {
        self.get(key)
            .ok_or_else(|| PatternError::UnknownPattern(key.to_string()))
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Registered keys in display order
    pub fn keys(&self) -> Vec<&'static str> {
        self.generators.iter().map(|g| g.key()).collect()
    }

    /// Specs of every registered pattern
    pub fn specs(&self) -> Vec<PatternSpec> {
        self.generators.iter().map(|g| g.spec()).collect()
    }

    pub fn len(&self) -> usize {
        self.generators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Runs the generator registered under `key`
    pub fn generate(
        &self,
        key: &str,
        config: &GeometryConfig,
        params: &PatternParams,
    ) -> PatternResult<Path> {
        self.require(key)?.generate(config, params)
    }

    /// Runs a generator with named values applied over its defaults
    pub fn generate_from_values(
        &self,
        key: &str,
        config: &GeometryConfig,
        values: &BTreeMap<String, ParamValue>,
    ) -> PatternResult<Path> {
        let generator = self.require(key)?;
        let mut params = generator.default_params();
        for (name, value) in values {
            params.set(name, value.clone())?;
        }
        generator.generate(config, &params)
    }
}
