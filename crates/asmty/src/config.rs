//! Arena configuration.

/// Configuration for a [`TypeArena`](crate::TypeArena).
///
/// Deserializable so hosts can embed it in their own configuration files;
/// missing fields take their defaults.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Compound slots reserved up front.
    pub(crate) capacity: usize,
    /// Maximum number of compound types the arena accepts.
    pub(crate) limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 64,
            limit: None,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many compound slots to reserve.
    pub fn capacity(mut self, value: usize) -> Self {
        self.capacity = value;
        self
    }

    /// Cap the number of compound types.
    pub fn limit(mut self, value: usize) -> Self {
        self.limit = Some(value);
        self
    }

    /// Remove the compound type cap.
    pub fn unlimited(mut self) -> Self {
        self.limit = None;
        self
    }
}
