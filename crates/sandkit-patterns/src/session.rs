//! Pattern selection state.
//!
//! A [`PatternSession`] holds exactly one active pattern. Selecting another
//! key discards the current parameters, loads the new pattern's defaults, and
//! regenerates the path. Any parameter change also regenerates the path from
//! scratch.

use sandkit_core::{BoundaryReport, DistanceAccumulator, GeometryConfig, Path, Point};

use crate::error::{PatternError, PatternResult};
use crate::params::{ParamValue, PatternParams};
use crate::registry::PatternRegistry;

/// The active pattern, its parameters, and the latest generated path
#[derive(Debug)]
pub struct PatternSession {
    registry: PatternRegistry,
    config: GeometryConfig,
    active_key: &'static str,
    params: PatternParams,
    path: Path,
    distance: DistanceAccumulator,
}

impl PatternSession {
    /// Starts a session with `initial_key` active and its defaults loaded
    pub fn new(
        registry: PatternRegistry,
        config: GeometryConfig,
        initial_key: &str,
    ) -> PatternResult<Self> {
        let generator = registry.require(initial_key)?;
        let active_key = generator.key();
        let params = generator.default_params();
        let mut session = Self {
            registry,
            config,
            active_key,
            params,
            path: Path::new(),
            distance: DistanceAccumulator::new(),
        };
        session.regenerate()?;
        Ok(session)
    }

    pub fn active_key(&self) -> &'static str {
        self.active_key
    }

    pub fn params(&self) -> &PatternParams {
        &self.params
    }

    pub fn config(&self) -> &GeometryConfig {
        &self.config
    }

    /// The most recently generated path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn registry(&self) -> &PatternRegistry {
        &self.registry
    }

    /// Distance of every path generated since the last reset
    pub fn total_distance(&self) -> f64 {
        self.distance.total()
    }

    pub fn reset_distance(&mut self) {
        self.distance.reset();
    }

    /// Boundary check of the current path
    pub fn boundary_report(&self) -> BoundaryReport {
        BoundaryReport::check(&self.config, &self.path)
    }

    /// Switches to another pattern, loading its defaults
    pub fn select(&mut self, key: &str) -> PatternResult<&Path> {
        let generator = self.registry.require(key)?;
        let new_key = generator.key();
        let new_params = generator.default_params();
        tracing::info!("Switching pattern from '{}' to '{}'", self.active_key, new_key);
        self.apply(new_key, new_params)
    }

    /// Changes one parameter of the active pattern
    pub fn set_param(&mut self, name: &str, value: impl Into<ParamValue>) -> PatternResult<&Path> {
        let mut params = self.params.clone();
        params.set(name, value.into())?;
        self.apply(self.active_key, params)
    }

    /// Replaces every parameter of the active pattern
    pub fn set_params(&mut self, params: PatternParams) -> PatternResult<&Path> {
        if params.key() != self.active_key {
            return Err(PatternError::ParamsMismatch {
                expected: self.active_key,
                found: params.key(),
            });
        }
        self.apply(self.active_key, params)
    }

    /// Replaces the bed geometry and regenerates
    pub fn set_config(&mut self, config: GeometryConfig) -> PatternResult<&Path> {
        config.validate()?;
        let previous = std::mem::replace(&mut self.config, config);
        let regenerated = self.regenerate().map(|_| ());
        if let Err(e) = regenerated {
            self.config = previous;
            return Err(e);
        }
        Ok(&self.path)
    }

    /// Feeds a free-draw drag event (centered coordinates).
    ///
    /// Returns `Ok(false)` if the point is off the bed or the active pattern
    /// is not free draw.
    pub fn drag_to(&mut self, point: Point) -> PatternResult<bool> {
        let PatternParams::FreeDraw(draw) = &self.params else {
            return Ok(false);
        };
        let mut draw = draw.clone();
        if !draw.drag_to(&self.config, point) {
            return Ok(false);
        }
        self.apply(self.active_key, PatternParams::FreeDraw(draw))?;
        Ok(true)
    }

    /// Regenerates the path from the current state
    pub fn regenerate(&mut self) -> PatternResult<&Path> {
        let path = self
            .registry
            .generate(self.active_key, &self.config, &self.params)?;
        self.distance.add_path(&path);
        self.path = path;
        Ok(&self.path)
    }

    fn apply(&mut self, key: &'static str, params: PatternParams) -> PatternResult<&Path> {
        let path = self.registry.generate(key, &self.config, &params)?;
        self.active_key = key;
        self.params = params;
        self.distance.add_path(&path);
        self.path = path;
        Ok(&self.path)
    }
}
