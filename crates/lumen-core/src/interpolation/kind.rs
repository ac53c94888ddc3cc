//! Interpolation kinds and their persisted integer identities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::LumenError;

/// Available interpolation kernels.
///
/// The discriminant is the id stored in user configuration. It must never
/// be renumbered: previously saved values depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
#[repr(u32)]
pub enum InterpolationKind {
    /// Bilinear interpolation (tent filter). Default.
    #[default]
    Bilinear = 0,
    /// Bicubic interpolation with `a = -0.5` (Catmull-Rom).
    Bicubic = 1,
    /// Lanczos with 2 lobes.
    Lanczos2 = 2,
    /// Lanczos with 3 lobes.
    Lanczos3 = 3,
}

impl InterpolationKind {
    /// First concrete kind, for iteration.
    pub const FIRST: Self = Self::Bilinear;
    /// Last concrete kind, for iteration.
    pub const LAST: Self = Self::Lanczos3;
    /// Kind used when nothing else is known.
    pub const DEFAULT: Self = Self::Bilinear;
    /// Every concrete kind in id order.
    pub const ALL: [Self; 4] = [Self::Bilinear, Self::Bicubic, Self::Lanczos2, Self::Lanczos3];

    /// Persisted integer id.
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Kind for a persisted id, if it names one.
    pub const fn from_id(id: u32) -> Option<Self> {
        match id {
            0 => Some(Self::Bilinear),
            1 => Some(Self::Bicubic),
            2 => Some(Self::Lanczos2),
            3 => Some(Self::Lanczos3),
            _ => None,
        }
    }

    /// Internal name, used in configuration and logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
            Self::Lanczos2 => "lanczos2",
            Self::Lanczos3 => "lanczos3",
        }
    }

    /// Half width of the kernel support, in samples.
    pub const fn half_width(self) -> usize {
        match self {
            Self::Bilinear => 1,
            Self::Bicubic => 2,
            Self::Lanczos2 => 2,
            Self::Lanczos3 => 3,
        }
    }

    /// Iterate `FIRST..=LAST`.
    pub fn iter() -> impl Iterator<Item = Self> {
        (Self::FIRST.id()..=Self::LAST.id()).filter_map(Self::from_id)
    }
}

/// Lenient conversion used when loading configuration: an id this build
/// does not know resolves to [`InterpolationKind::DEFAULT`].
impl From<u32> for InterpolationKind {
    fn from(id: u32) -> Self {
        Self::from_id(id).unwrap_or_else(|| {
            tracing::debug!("unknown interpolation id {id}, using {}", Self::DEFAULT);
            Self::DEFAULT
        })
    }
}

impl From<InterpolationKind> for u32 {
    fn from(kind: InterpolationKind) -> Self {
        kind.id()
    }
}

impl fmt::Display for InterpolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationKind {
    type Err = LumenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| LumenError::UnknownInterpolation(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_are_stable() {
        assert_eq!(InterpolationKind::Bilinear.id(), 0);
        assert_eq!(InterpolationKind::Bicubic.id(), 1);
        assert_eq!(InterpolationKind::Lanczos2.id(), 2);
        assert_eq!(InterpolationKind::Lanczos3.id(), 3);
    }

    #[test]
    fn test_iteration_covers_all_concrete_kinds() {
        let kinds: Vec<_> = InterpolationKind::iter().collect();
        assert_eq!(kinds, InterpolationKind::ALL);
    }

    #[test]
    fn test_unknown_id_falls_back_to_default() {
        assert_eq!(InterpolationKind::from_id(4), None);
        assert_eq!(InterpolationKind::from(4), InterpolationKind::Bilinear);
        assert_eq!(InterpolationKind::from(u32::MAX), InterpolationKind::Bilinear);
        assert_eq!(InterpolationKind::from(2), InterpolationKind::Lanczos2);
    }

    #[test]
    fn test_name_parsing() {
        for kind in InterpolationKind::ALL {
            assert_eq!(kind.name().parse::<InterpolationKind>().unwrap(), kind);
        }
        assert_eq!(
            " Lanczos3 ".parse::<InterpolationKind>().unwrap(),
            InterpolationKind::Lanczos3
        );
        assert!(matches!(
            "nearest".parse::<InterpolationKind>(),
            Err(LumenError::UnknownInterpolation(name)) if name == "nearest"
        ));
    }

    #[test]
    fn test_serializes_as_id() {
        let json = serde_json::to_string(&InterpolationKind::Lanczos2).unwrap();
        assert_eq!(json, "2");
        let kind: InterpolationKind = serde_json::from_str("1").unwrap();
        assert_eq!(kind, InterpolationKind::Bicubic);
        let kind: InterpolationKind = serde_json::from_str("17").unwrap();
        assert_eq!(kind, InterpolationKind::Bilinear);
    }
}
