//! Show/hide state of the prediction layers
//!
//! Each prediction key is either hidden or visible. Selecting a hidden key
//! aligns its predictions, hands the layer to the [`DisplaySurface`] and keeps
//! the handle the surface returns; deselecting gives the handle back.
//! Repeated events in the same direction change nothing.

use crate::align::{prediction_layer, SeriesLayer};
use crate::config::ViewConfig;
use crate::data::{NeedSeries, PredictionSet};
use crate::error::{Result, ViewError};
use log::{info, trace};

/// Something that can draw and remove chart layers
pub trait DisplaySurface {
    /// Identifies a layer that has been added
    type Handle;

    /// Add a layer and return a handle to it
    fn add_layer(&mut self, layer: SeriesLayer) -> Self::Handle;

    /// Remove a previously added layer
    fn remove_layer(&mut self, handle: Self::Handle);
}

/// Result of a selection event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The key went from hidden to visible
    Shown,
    /// The key went from visible to hidden
    Hidden,
    /// The key was already in the requested state
    Unchanged,
}

struct KeyState<H> {
    key: i32,
    layer: Option<H>,
}

/// Tracks which prediction keys currently have a live layer
pub struct SeriesToggleController<'a, D: DisplaySurface> {
    needs: &'a NeedSeries,
    predictions: &'a PredictionSet,
    config: &'a ViewConfig,
    states: Vec<KeyState<D::Handle>>,
}

impl<'a, D: DisplaySurface> SeriesToggleController<'a, D> {
    /// Create a controller with every key hidden
    pub fn new(
        needs: &'a NeedSeries,
        predictions: &'a PredictionSet,
        config: &'a ViewConfig,
    ) -> Self {
        let states = predictions
            .keys()
            .map(|key| KeyState { key, layer: None })
            .collect();

        Self {
            needs,
            predictions,
            config,
            states,
        }
    }

    fn state_mut(&mut self, key: i32) -> Result<&mut KeyState<D::Handle>> {
        self.states
            .iter_mut()
            .find(|s| s.key == key)
            .ok_or(ViewError::UnknownKey(key))
    }

    /// Make the layer for `key` visible
    pub fn select(&mut self, key: i32, surface: &mut D) -> Result<Transition> {
        let (needs, predictions, config) = (self.needs, self.predictions, self.config);
        let state = self.state_mut(key)?;
        if state.layer.is_some() {
            trace!("n = {} already visible", key);
            return Ok(Transition::Unchanged);
        }

        let layer = prediction_layer(needs, predictions, key, config)?;
        info!("showing layer '{}' ({} points)", layer.name, layer.points.len());
        state.layer = Some(surface.add_layer(layer));

        Ok(Transition::Shown)
    }

    /// Remove the layer for `key`
    pub fn deselect(&mut self, key: i32, surface: &mut D) -> Result<Transition> {
        let state = self.state_mut(key)?;
        match state.layer.take() {
            Some(handle) => {
                surface.remove_layer(handle);
                info!("hid layer for n = {}", key);
                Ok(Transition::Hidden)
            }
            None => {
                trace!("n = {} already hidden", key);
                Ok(Transition::Unchanged)
            }
        }
    }

    /// Apply a checkbox change: `true` selects, `false` deselects
    pub fn set_visible(&mut self, key: i32, visible: bool, surface: &mut D) -> Result<Transition> {
        if visible {
            self.select(key, surface)
        } else {
            self.deselect(key, surface)
        }
    }

    /// Hide every visible layer, returning how many were removed
    pub fn hide_all(&mut self, surface: &mut D) -> usize {
        let mut removed = 0;
        for state in &mut self.states {
            if let Some(handle) = state.layer.take() {
                surface.remove_layer(handle);
                removed += 1;
            }
        }
        if removed > 0 {
            info!("hid {} prediction layers", removed);
        }
        removed
    }

    /// Check whether `key` currently has a live layer
    pub fn is_visible(&self, key: i32) -> Result<bool> {
        self.states
            .iter()
            .find(|s| s.key == key)
            .map(|s| s.layer.is_some())
            .ok_or(ViewError::UnknownKey(key))
    }

    /// Visible keys in insertion order
    pub fn visible_keys(&self) -> Vec<i32> {
        self.states
            .iter()
            .filter(|s| s.layer.is_some())
            .map(|s| s.key)
            .collect()
    }

    /// All keys in insertion order, i.e. the order of the selection controls
    pub fn keys(&self) -> impl Iterator<Item = i32> + '_ {
        self.states.iter().map(|s| s.key)
    }
}
