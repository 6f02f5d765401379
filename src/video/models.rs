//! Seedance model catalogue and wire-id resolution.

use crate::video::types::GenerationMode;

/// Seedance model variants, by the names the ModelArk console shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedanceModel {
    /// Seedance 1.0 Pro - text and image to video.
    Pro,
    /// Seedance 1.0 Lite, text-to-video build.
    LiteT2v,
    /// Seedance 1.0 Lite, image-to-video build (also frames and references).
    LiteI2v,
}

impl SeedanceModel {
    /// All models, in display order.
    pub const ALL: [Self; 3] = [Self::Pro, Self::LiteT2v, Self::LiteI2v];

    /// Returns the logical model name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Pro => "Bytedance-Seedance-1.0-pro",
            Self::LiteT2v => "Bytedance-Seedance-1.0-Lite-t2v",
            Self::LiteI2v => "Bytedance-Seedance-1.0-Lite-i2v",
        }
    }

    /// Returns the environment variable that overrides the wire id.
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Pro => "MODEL_SEEDANCE_PRO_API",
            Self::LiteT2v => "MODEL_SEEDANCE_LITE_T2V_API",
            Self::LiteI2v => "MODEL_SEEDANCE_LITE_I2V_API",
        }
    }

    /// Returns the built-in wire id.
    pub fn default_id(&self) -> &'static str {
        match self {
            Self::Pro => "seedance-1-0-pro-250528",
            Self::LiteT2v => "seedance-1-0-lite-t2v-250428",
            Self::LiteI2v => "seedance-1-0-lite-i2v-250428",
        }
    }

    /// Looks a model up by logical name or short alias (`pro`, `lite-t2v`, `lite-i2v`).
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.display_name().to_lowercase() == lower)
            .or(match lower.as_str() {
                "pro" => Some(Self::Pro),
                "lite-t2v" | "lite_t2v" => Some(Self::LiteT2v),
                "lite-i2v" | "lite_i2v" => Some(Self::LiteI2v),
                _ => None,
            })
    }

    /// Returns true if this model serves the given mode.
    pub fn supports(&self, mode: GenerationMode) -> bool {
        match mode {
            GenerationMode::TextToVideo => matches!(self, Self::Pro | Self::LiteT2v),
            GenerationMode::ImageToVideo => matches!(self, Self::Pro | Self::LiteI2v),
            GenerationMode::FirstLastFrame | GenerationMode::ImageRefs => {
                matches!(self, Self::LiteI2v)
            }
        }
    }

    /// Returns the model used when a request names none (or an unsupported one).
    pub fn default_for(mode: GenerationMode) -> Self {
        match mode {
            GenerationMode::TextToVideo => Self::LiteT2v,
            GenerationMode::ImageToVideo
            | GenerationMode::FirstLastFrame
            | GenerationMode::ImageRefs => Self::LiteI2v,
        }
    }
}

impl std::fmt::Display for SeedanceModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Logical model → wire model id table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelTable {
    pro: String,
    lite_t2v: String,
    lite_i2v: String,
}

impl Default for ModelTable {
    fn default() -> Self {
        Self {
            pro: SeedanceModel::Pro.default_id().to_string(),
            lite_t2v: SeedanceModel::LiteT2v.default_id().to_string(),
            lite_i2v: SeedanceModel::LiteI2v.default_id().to_string(),
        }
    }
}

impl ModelTable {
    /// Builds the table from `MODEL_SEEDANCE_*_API` env vars, falling back to
    /// the built-in ids.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the table from an arbitrary key lookup. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let resolve = |model: SeedanceModel| {
            lookup(model.env_var())
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| model.default_id().to_string())
        };
        Self {
            pro: resolve(SeedanceModel::Pro),
            lite_t2v: resolve(SeedanceModel::LiteT2v),
            lite_i2v: resolve(SeedanceModel::LiteI2v),
        }
    }

    /// Overrides the wire id of one model.
    pub fn with_id(mut self, model: SeedanceModel, id: impl Into<String>) -> Self {
        *self.slot_mut(model) = id.into();
        self
    }

    /// Returns the wire id of a model.
    pub fn id(&self, model: SeedanceModel) -> &str {
        match model {
            SeedanceModel::Pro => &self.pro,
            SeedanceModel::LiteT2v => &self.lite_t2v,
            SeedanceModel::LiteI2v => &self.lite_i2v,
        }
    }

    fn slot_mut(&mut self, model: SeedanceModel) -> &mut String {
        match model {
            SeedanceModel::Pro => &mut self.pro,
            SeedanceModel::LiteT2v => &mut self.lite_t2v,
            SeedanceModel::LiteI2v => &mut self.lite_i2v,
        }
    }

    /// Picks the model for a mode, falling back to the mode default when the
    /// requested one is missing or unsupported.
    pub fn select(&self, mode: GenerationMode, requested: Option<SeedanceModel>) -> SeedanceModel {
        match requested {
            Some(model) if model.supports(mode) => model,
            Some(model) => {
                let fallback = SeedanceModel::default_for(mode);
                tracing::warn!(
                    %mode,
                    requested = %model,
                    fallback = %fallback,
                    "model does not support this mode, using default"
                );
                fallback
            }
            None => SeedanceModel::default_for(mode),
        }
    }

    /// Resolves the wire id for a mode and optional requested model.
    pub fn resolve(&self, mode: GenerationMode, requested: Option<SeedanceModel>) -> &str {
        self.id(self.select(mode, requested))
    }
}
