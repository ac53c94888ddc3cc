//! User preference for the interpolation kernel.

use serde::{Deserialize, Serialize};

use super::{InterpolationKind, Kernel};

/// Persisted interpolation settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InterpolationConfig {
    /// Kernel used wherever a module defers to the user's choice.
    pub pixel_interpolator: InterpolationKind,
}

/// What a caller asks the catalog for: a concrete kind, or whatever the
/// user configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationSelector {
    Kind(InterpolationKind),
    #[default]
    UserPreference,
}

impl InterpolationSelector {
    /// Concrete kind for this selector under `config`.
    pub fn resolve(self, config: &InterpolationConfig) -> InterpolationKind {
        match self {
            Self::Kind(kind) => kind,
            Self::UserPreference => {
                tracing::debug!(
                    "interpolation follows user preference: {}",
                    config.pixel_interpolator
                );
                config.pixel_interpolator
            }
        }
    }

    /// Kernel descriptor for this selector under `config`.
    pub fn kernel(self, config: &InterpolationConfig) -> &'static Kernel {
        Kernel::lookup(self.resolve(config))
    }
}

impl From<InterpolationKind> for InterpolationSelector {
    fn from(kind: InterpolationKind) -> Self {
        Self::Kind(kind)
    }
}
