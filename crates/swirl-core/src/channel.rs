//! Scalar channel identifiers and definitions.
//!
//! A grid carries one or more scalar channels (a single density, three
//! colour channels, four ink channels, ...). Every channel is diffused and
//! advected identically; channels differ only in how they fade between
//! frames and whether their values are clamped.

use indexmap::IndexMap;
use std::fmt;

use crate::error::ConfigError;

/// Identifies a scalar channel within a grid.
///
/// `ChannelId(n)` is the n-th channel in configuration order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChannelId(pub u32);

impl ChannelId {
    /// Position of the channel in configuration order.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ChannelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Definition of a scalar channel.
///
/// ```
/// use swirl_core::ChannelDef;
///
/// let red = ChannelDef::new("red").with_decay(0.005);
/// let ink = ChannelDef::ink("cyan");
/// assert_eq!(ink.clamp_min, Some(0.0));
/// assert_eq!(red.clamp_min, None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChannelDef {
    /// Unique channel name.
    pub name: String,
    /// Amount subtracted from every cell by each `decay()` call. Must be >= 0.
    pub decay: f32,
    /// Lower clamp applied after decay.
    pub clamp_min: Option<f32>,
    /// Upper clamp applied after decay.
    pub clamp_max: Option<f32>,
}

impl ChannelDef {
    /// An unbounded channel with no decay.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            decay: 0.0,
            clamp_min: None,
            clamp_max: None,
        }
    }

    /// An ink channel: fades by `0.005` per frame and never drops below 0.
    pub fn ink(name: impl Into<String>) -> Self {
        Self::new(name).with_decay(0.005).with_clamp_min(0.0)
    }

    /// Set the per-frame decay amount.
    pub fn with_decay(mut self, decay: f32) -> Self {
        self.decay = decay;
        self
    }

    /// Set the lower clamp.
    pub fn with_clamp_min(mut self, min: f32) -> Self {
        self.clamp_min = Some(min);
        self
    }

    /// Set the upper clamp.
    pub fn with_clamp_max(mut self, max: f32) -> Self {
        self.clamp_max = Some(max);
        self
    }

    /// Set both clamps.
    pub fn with_bounds(self, min: f32, max: f32) -> Self {
        self.with_clamp_min(min).with_clamp_max(max)
    }

    /// Check decay and clamp invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidChannel {
            name: self.name.clone(),
            reason,
        };
        if self.name.is_empty() {
            return Err(invalid("name must not be empty".into()));
        }
        if !(self.decay >= 0.0) || !self.decay.is_finite() {
            return Err(invalid(format!(
                "decay must be finite and >= 0, got {}",
                self.decay
            )));
        }
        if self.clamp_min.is_some_and(f32::is_nan) || self.clamp_max.is_some_and(f32::is_nan) {
            return Err(invalid("clamp bounds must not be NaN".into()));
        }
        if let (Some(lo), Some(hi)) = (self.clamp_min, self.clamp_max) {
            if lo > hi {
                return Err(invalid(format!(
                    "clamp_min ({lo}) must be <= clamp_max ({hi})"
                )));
            }
        }
        Ok(())
    }
}

/// Ordered, name-indexed set of channel definitions.
///
/// Insertion order defines [`ChannelId`]s. Names are unique.
#[derive(Clone, Debug)]
pub struct ChannelSet {
    defs: IndexMap<String, ChannelDef>,
}

impl ChannelSet {
    /// Build a channel set, validating every definition.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NoChannels`] for an empty list,
    /// [`ConfigError::DuplicateChannel`] for a repeated name, and
    /// [`ConfigError::InvalidChannel`] for a definition that fails
    /// [`ChannelDef::validate`].
    pub fn new(defs: Vec<ChannelDef>) -> Result<Self, ConfigError> {
        if defs.is_empty() {
            return Err(ConfigError::NoChannels);
        }
        let mut map = IndexMap::with_capacity(defs.len());
        for def in defs {
            def.validate()?;
            if map.contains_key(&def.name) {
                return Err(ConfigError::DuplicateChannel { name: def.name });
            }
            map.insert(def.name.clone(), def);
        }
        Ok(Self { defs: map })
    }

    /// Number of channels.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Always `false`: construction rejects empty sets.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Definition for `id`, if configured.
    pub fn get(&self, id: ChannelId) -> Option<&ChannelDef> {
        self.defs.get_index(id.index()).map(|(_, def)| def)
    }

    /// Look up a channel id by name.
    pub fn id_of(&self, name: &str) -> Option<ChannelId> {
        self.defs
            .get_index_of(name)
            .map(|i| ChannelId(i as u32))
    }

    /// Iterate `(id, definition)` pairs in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (ChannelId, &ChannelDef)> {
        self.defs
            .values()
            .enumerate()
            .map(|(i, def)| (ChannelId(i as u32), def))
    }
}
