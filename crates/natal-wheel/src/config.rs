use crate::chart::WheelSettings;
use std::fs;
use std::path::Path;

impl WheelSettings {
    /// Parse settings from TOML; fields not present keep their defaults.
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let settings: WheelSettings = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject combinations the wheel cannot be drawn with
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.radius > 0.0) {
            anyhow::bail!("radius must be positive, got {}", self.radius);
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            anyhow::bail!(
                "canvas must have a positive size, got {}x{}",
                self.width,
                self.height
            );
        }
        if !(self.zoom_step > 0.0) {
            anyhow::bail!("zoom_step must be positive, got {}", self.zoom_step);
        }
        if self.zoom_min > self.zoom_max {
            anyhow::bail!(
                "zoom_min ({}) is above zoom_max ({})",
                self.zoom_min,
                self.zoom_max
            );
        }
        if !(self.zoom_min > 0.0) {
            anyhow::bail!("zoom_min must be positive, got {}", self.zoom_min);
        }
        // Views open at 1.0
        if self.zoom_min > 1.0 || self.zoom_max < 1.0 {
            anyhow::bail!(
                "zoom range [{}, {}] must contain 1.0",
                self.zoom_min,
                self.zoom_max
            );
        }
        if self.min_glyph_separation < 0.0 {
            anyhow::bail!(
                "min_glyph_separation must not be negative, got {}",
                self.min_glyph_separation
            );
        }
        Ok(())
    }
}

/// Load wheel settings from a TOML file.
pub fn load_wheel_settings(path: impl AsRef<Path>) -> anyhow::Result<WheelSettings> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Could not read settings {}: {}", path.display(), e))?;
    let settings = WheelSettings::from_toml_str(&text)
        .map_err(|e| anyhow::anyhow!("Invalid settings {}: {}", path.display(), e))?;
    log::info!("Loaded wheel settings from {}", path.display());
    Ok(settings)
}
