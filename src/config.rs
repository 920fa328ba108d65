//! Renderer configuration.
//!
//! Layered the usual way: built-in defaults, then an optional JSON file named by
//! `CALCERT_CONFIG`, then individual `CALCERT_*` environment variables. A `.env` file in the
//! working directory is read first when loading from the environment.

use crate::canvas::PageSetup;
use crate::document::Assets;
use crate::labels::Labels;
use crate::layout::Margins;
use crate::pagesize::{self, Orientation};
use crate::pagination::Thresholds;
use crate::units::Mm;
use crate::RenderError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const ENV_PREFIX: &str = "CALCERT_";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Paper name understood by [pagesize::by_name]
    pub page_size: String,
    pub orientation: Orientation,
    /// Margin on all four sides
    pub margin_mm: f32,
    /// Room kept above the bottom margin for the page number line
    pub footer_height_mm: f32,
    pub thresholds: Thresholds,
    /// TrueType font replacing the built-in Helvetica
    pub font_regular: Option<PathBuf>,
    pub font_bold: Option<PathBuf>,
    /// PNG or JPEG printed in the company header
    pub logo: Option<PathBuf>,
    /// Start of generated file names, `<prefix>_<YYYYMMDD_HHMMSS>.pdf`
    pub filename_prefix: String,
    pub labels: Labels,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            page_size: "A4".into(),
            orientation: Orientation::Landscape,
            margin_mm: 8.0,
            footer_height_mm: 6.0,
            thresholds: Thresholds::default(),
            font_regular: None,
            font_bold: None,
            logo: None,
            filename_prefix: "certificate".into(),
            labels: Labels::default(),
        }
    }
}

impl RenderConfig {
    /// Read a JSON configuration file; anything it leaves out keeps its default
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<RenderConfig, RenderError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Load `.env` if there is one, then build the configuration from the process
    /// environment
    pub fn from_env() -> Result<RenderConfig, RenderError> {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
        RenderConfig::from_vars(std::env::vars())
    }

    /// Build the configuration from `CALCERT_*` variables; other variables are ignored
    pub fn from_vars<I, K, V>(vars: I) -> Result<RenderConfig, RenderError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let vars: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.as_ref()
                    .strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_string(), value.into()))
            })
            .collect();

        let mut config = match vars.iter().find(|(key, _)| key == "CONFIG") {
            Some((_, path)) => RenderConfig::from_json_file(path)?,
            None => RenderConfig::default(),
        };
        for (key, value) in &vars {
            config.apply_var(key, value)?;
        }
        Ok(config)
    }

    fn apply_var(&mut self, key: &str, value: &str) -> Result<(), RenderError> {
        match key {
            "CONFIG" => {}
            "PAGE_SIZE" => {
                pagesize::by_name(value)
                    .ok_or_else(|| RenderError::Config(format!("unknown page size '{value}'")))?;
                self.page_size = value.to_string();
            }
            "ORIENTATION" => {
                self.orientation = value.parse().map_err(RenderError::Config)?;
            }
            "MARGIN_MM" => self.margin_mm = parse_mm(key, value)?.0,
            "FOOTER_HEIGHT_MM" => self.footer_height_mm = parse_mm(key, value)?.0,
            "THRESHOLD_PARTY_DEVICE" => self.thresholds.party_device = parse_mm(key, value)?,
            "THRESHOLD_MEASUREMENT_TABLE" => {
                self.thresholds.measurement_table = parse_mm(key, value)?
            }
            "THRESHOLD_CONFORMITY" => self.thresholds.conformity = parse_mm(key, value)?,
            "THRESHOLD_SIGN_OFF" => self.thresholds.sign_off = parse_mm(key, value)?,
            "THRESHOLD_STANDARDS" => self.thresholds.standards = parse_mm(key, value)?,
            "FONT_REGULAR" => self.font_regular = non_empty_path(value),
            "FONT_BOLD" => self.font_bold = non_empty_path(value),
            "LOGO" => self.logo = non_empty_path(value),
            "FILENAME_PREFIX" => self.filename_prefix = value.to_string(),
            other => tracing::warn!(variable = %format!("{ENV_PREFIX}{other}"), "unknown setting"),
        }
        Ok(())
    }

    /// Geometry every page of a certificate starts from
    pub fn page_setup(&self) -> Result<PageSetup, RenderError> {
        let size = pagesize::by_name(&self.page_size).ok_or_else(|| {
            RenderError::Config(format!("unknown page size '{}'", self.page_size))
        })?;
        if self.margin_mm < 0.0 || self.footer_height_mm < 0.0 {
            return Err(RenderError::Config(
                "margin and footer height can't be negative".into(),
            ));
        }
        Ok(PageSetup {
            size,
            orientation: self.orientation,
            margins: Margins::all(Mm(self.margin_mm)),
            footer_height: Mm(self.footer_height_mm),
        })
    }

    /// Load the fonts and logo named by the configuration
    pub fn load_assets(&self) -> Result<Assets, RenderError> {
        Assets::load(
            self.font_regular.as_deref(),
            self.font_bold.as_deref(),
            self.logo.as_deref(),
        )
    }
}

fn parse_mm(key: &str, value: &str) -> Result<Mm, RenderError> {
    value
        .trim()
        .parse::<f32>()
        .ok()
        .filter(|mm| mm.is_finite())
        .map(Mm)
        .ok_or_else(|| RenderError::Config(format!("{ENV_PREFIX}{key}: '{value}' is not a length")))
}

fn non_empty_path(value: &str) -> Option<PathBuf> {
    let value = value.trim();
    (!value.is_empty()).then(|| PathBuf::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_landscape_a4_with_8mm_margins() {
        let setup = RenderConfig::default().page_setup().unwrap();
        assert_eq!(setup.size, pagesize::A4);
        assert_eq!(setup.orientation, Orientation::Landscape);
        assert_eq!(setup.margins, Margins::all(Mm(8.0)));
    }

    #[test]
    fn variables_override_defaults() {
        let config = RenderConfig::from_vars([
            ("CALCERT_PAGE_SIZE", "Letter"),
            ("CALCERT_ORIENTATION", "portrait"),
            ("CALCERT_MARGIN_MM", "12.5"),
            ("CALCERT_THRESHOLD_CONFORMITY", "240"),
            ("CALCERT_FILENAME_PREFIX", "kalibrasyon"),
            ("CALCERT_LOGO", ""),
            ("PATH", "/usr/bin"),
        ])
        .unwrap();
        assert_eq!(config.page_size, "Letter");
        assert_eq!(config.orientation, Orientation::Portrait);
        assert_eq!(config.margin_mm, 12.5);
        assert_eq!(config.thresholds.conformity, Mm(240.0));
        assert_eq!(config.thresholds.party_device, Mm(170.0));
        assert_eq!(config.filename_prefix, "kalibrasyon");
        assert_eq!(config.logo, None);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        for (key, value) in [
            ("CALCERT_MARGIN_MM", "wide"),
            ("CALCERT_PAGE_SIZE", "B7"),
            ("CALCERT_ORIENTATION", "diagonal"),
        ] {
            assert!(matches!(
                RenderConfig::from_vars([(key, value)]),
                Err(RenderError::Config(_))
            ));
        }
    }

    #[test]
    fn file_layer_sits_under_variables() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"margin_mm": 10, "labels": {{"page": "Sayfa"}}, "filename_prefix": "from-file"}}"#
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();
        let config = RenderConfig::from_vars([
            ("CALCERT_CONFIG".to_string(), path),
            ("CALCERT_FILENAME_PREFIX".to_string(), "from-env".to_string()),
        ])
        .unwrap();
        assert_eq!(config.margin_mm, 10.0);
        assert_eq!(config.labels.page, "Sayfa");
        assert_eq!(config.labels.pass, "Pass");
        assert_eq!(config.filename_prefix, "from-env");
    }
}
