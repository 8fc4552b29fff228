//! Storefront configuration
use serde::{Deserialize, Serialize};

/// Default rotation interval between gallery images.
pub const DEFAULT_ROTATION_INTERVAL_MS: u32 = 3000;

const MIN_ROTATION_INTERVAL_MS: u32 = 500;
const MAX_ROTATION_INTERVAL_MS: u32 = 60_000;

/// Rotation behavior knobs; user-adjustable and persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationCfg {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u32,
    /// When set, galleries rotate only inside the product modal.
    #[serde(default = "default_true")]
    pub modal_only: bool,
}

impl Default for RotationCfg {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_ms: DEFAULT_ROTATION_INTERVAL_MS,
            modal_only: true,
        }
    }
}

impl RotationCfg {
    /// Whether a session may start or resume in the given placement.
    /// A session already running is unaffected until its next attempt.
    #[must_use]
    pub fn allows(&self, in_modal: bool) -> bool {
        self.enabled && (!self.modal_only || in_modal)
    }

    /// Clamp values coming from persisted preferences into a sane range.
    #[must_use]
    pub fn clamped(mut self) -> Self {
        self.interval_ms = self
            .interval_ms
            .clamp(MIN_ROTATION_INTERVAL_MS, MAX_ROTATION_INTERVAL_MS);
        self
    }
}

/// Grid reveal timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCfg {
    /// Per-card delay of the fade/slide reveal.
    #[serde(default = "default_stagger_ms")]
    pub stagger_ms: u32,
    /// Duration of one card's reveal animation.
    #[serde(default = "default_reveal_ms")]
    pub reveal_ms: u32,
    /// Ceiling after which the render-in-progress flag is force-cleared
    /// even if the staggered-completion callback was skipped.
    #[serde(default = "default_safety_ceiling_ms")]
    pub safety_ceiling_ms: u32,
}

impl Default for GridCfg {
    fn default() -> Self {
        Self {
            stagger_ms: default_stagger_ms(),
            reveal_ms: default_reveal_ms(),
            safety_ceiling_ms: default_safety_ceiling_ms(),
        }
    }
}

impl GridCfg {
    /// Expected time for `count` cards to finish revealing.
    #[must_use]
    pub fn reveal_budget_ms(&self, count: usize) -> u32 {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        count.saturating_mul(self.stagger_ms).saturating_add(self.reveal_ms)
    }
}

/// Top-level storefront configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub rotation: RotationCfg,
    #[serde(default)]
    pub grid: GridCfg,
}

impl StorefrontConfig {
    /// Load configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed into a valid
    /// configuration document.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

fn default_true() -> bool {
    true
}

fn default_interval_ms() -> u32 {
    DEFAULT_ROTATION_INTERVAL_MS
}

fn default_stagger_ms() -> u32 {
    80
}

fn default_reveal_ms() -> u32 {
    400
}

fn default_safety_ceiling_ms() -> u32 {
    4000
}

#[cfg(test)]
mod tests {
    use super::{RotationCfg, StorefrontConfig};

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let cfg = StorefrontConfig::from_json(r#"{"rotation": {"enabled": false}}"#).unwrap();
        assert!(!cfg.rotation.enabled);
        assert_eq!(cfg.rotation.interval_ms, 3000);
        assert!(cfg.rotation.modal_only);
        assert_eq!(cfg.grid.stagger_ms, 80);
    }

    #[test]
    fn allows_honors_scope_and_enabled() {
        let cfg = RotationCfg::default();
        assert!(cfg.allows(true));
        assert!(!cfg.allows(false));
        let everywhere = RotationCfg {
            modal_only: false,
            ..cfg
        };
        assert!(everywhere.allows(false));
        let disabled = RotationCfg {
            enabled: false,
            ..cfg
        };
        assert!(!disabled.allows(true));
    }

    #[test]
    fn clamped_bounds_persisted_intervals() {
        let cfg = RotationCfg {
            interval_ms: 10,
            ..RotationCfg::default()
        };
        assert_eq!(cfg.clamped().interval_ms, 500);
        let cfg = RotationCfg {
            interval_ms: 600_000,
            ..RotationCfg::default()
        };
        assert_eq!(cfg.clamped().interval_ms, 60_000);
    }
}
