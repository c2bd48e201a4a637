use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::charset::{CHARSET_DEFAULT, Charset};
use crate::error::ConvertError;

/// Poids de luminance par défaut (R, G, B).
pub const DEFAULT_WEIGHTS: (f64, f64, f64) = (0.2989, 0.5866, 0.1145);

/// Options d'une conversion. Lecture seule pendant le pipeline.
///
/// # Example
/// ```
/// use tg_core::config::{Options, RenderMode};
/// let options = Options::default();
/// assert_eq!(options.mode(), RenderMode::Text);
/// assert!((options.transparency_threshold - 1.0).abs() < f64::EPSILON);
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Debug)]
pub struct Options {
    /// Chemin local ou URL http(s) de l'image.
    pub image: String,
    /// Inverser les couleurs avant conversion.
    pub invert: bool,
    /// Centrer l'image dans le terminal (ou la page HTML).
    pub center: bool,
    /// Sortie en niveaux de gris.
    pub grayscale: bool,
    /// Document HTML au lieu de séquences ANSI.
    pub html: bool,
    /// Demi-blocs : deux lignes de pixels par ligne de terminal.
    pub pixel: bool,
    /// Honor the alpha channel.
    pub transparent: bool,
    /// Fraction [0.0, 1.0] of full opacity at or below which a pixel is
    /// treated as transparent: `alpha <= (1 - threshold) * max`.
    pub transparency_threshold: f64,
    /// Largeur demandée, 0 = non spécifiée.
    pub width: u32,
    /// Hauteur demandée, 0 = non spécifiée.
    pub height: u32,
    /// Glyphes du plus clairsemé au plus dense.
    pub charset: String,
    /// Red luminance weight.
    pub red_weight: f64,
    /// Green luminance weight.
    pub green_weight: f64,
    /// Blue luminance weight.
    pub blue_weight: f64,
}

/// Mode de rendu, dérivé des flags `html` et `pixel`.
///
/// # Example
/// ```
/// use tg_core::config::{Options, RenderMode};
/// let options = Options { pixel: true, ..Options::default() };
/// assert_eq!(options.mode(), RenderMode::Pixel);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// One colored character per cell.
    #[default]
    Text,
    /// Half-block glyphs, two pixel rows per terminal row.
    Pixel,
    /// Standalone HTML document.
    Html,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            image: String::new(),
            invert: false,
            center: false,
            grayscale: false,
            html: false,
            pixel: false,
            transparent: false,
            transparency_threshold: 1.0,
            width: 0,
            height: 0,
            charset: CHARSET_DEFAULT.to_string(),
            red_weight: DEFAULT_WEIGHTS.0,
            green_weight: DEFAULT_WEIGHTS.1,
            blue_weight: DEFAULT_WEIGHTS.2,
        }
    }
}

impl Options {
    /// Active render mode. HTML wins if both flags are set; [`Options::validate`]
    /// rejects that combination before any conversion.
    #[must_use]
    pub fn mode(&self) -> RenderMode {
        if self.html {
            RenderMode::Html
        } else if self.pixel {
            RenderMode::Pixel
        } else {
            RenderMode::Text
        }
    }

    /// Clamp numeric fields to their valid ranges.
    /// Called after TOML deserialization and CLI overrides.
    pub fn clamp_all(&mut self) {
        let threshold = self.transparency_threshold;
        if threshold.is_nan() {
            log::warn!("Seuil de transparence NaN, utilisation de 1.0");
            self.transparency_threshold = 1.0;
        } else if !(0.0..=1.0).contains(&threshold) {
            self.transparency_threshold = threshold.clamp(0.0, 1.0);
            log::warn!(
                "Seuil de transparence {threshold} hors de [0, 1], ramené à {}",
                self.transparency_threshold
            );
        }
    }

    /// Reject contradictory options.
    ///
    /// # Errors
    /// Returns [`ConvertError::InvalidConfiguration`] when HTML and pixel
    /// mode are both requested or the charset is empty.
    ///
    /// # Example
    /// ```
    /// use tg_core::config::Options;
    /// let options = Options { html: true, pixel: true, ..Options::default() };
    /// assert!(options.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), ConvertError> {
        if self.html && self.pixel {
            return Err(ConvertError::InvalidConfiguration(
                "cannot use --html and --pixel at the same time".into(),
            ));
        }
        if self.charset.is_empty() {
            return Err(ConvertError::InvalidConfiguration(
                "charset must contain at least one character".into(),
            ));
        }
        Ok(())
    }

    /// Parsed charset, falling back to the default one if empty.
    #[must_use]
    pub fn charset(&self) -> Charset {
        Charset::new(&self.charset).unwrap_or_default()
    }

    /// Luminance weights as an (R, G, B) tuple.
    #[must_use]
    pub fn weights(&self) -> (f64, f64, f64) {
        (self.red_weight, self.green_weight, self.blue_weight)
    }
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
    weights: Option<WeightsSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[allow(clippy::struct_excessive_bools)]
#[derive(Deserialize)]
struct RenderSection {
    invert: Option<bool>,
    center: Option<bool>,
    grayscale: Option<bool>,
    html: Option<bool>,
    pixel: Option<bool>,
    transparent: Option<bool>,
    transparency_threshold: Option<f64>,
    width: Option<u32>,
    height: Option<u32>,
    charset: Option<String>,
}

/// Luminance weights section, all fields optional.
#[derive(Deserialize)]
struct WeightsSection {
    red: Option<f64>,
    green: Option<f64>,
    blue: Option<f64>,
}

/// Parse TOML content and merge it over the default options.
///
/// # Errors
/// Returns an error if the content is not valid TOML for this schema.
///
/// # Example
/// ```
/// use tg_core::config::parse_config;
/// let options = parse_config("[render]\npixel = true\nwidth = 40\n").unwrap();
/// assert!(options.pixel);
/// assert_eq!(options.width, 40);
/// ```
pub fn parse_config(content: &str) -> Result<Options> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;
    let mut options = Options::default();

    if let Some(r) = file.render {
        if let Some(v) = r.invert {
            options.invert = v;
        }
        if let Some(v) = r.center {
            options.center = v;
        }
        if let Some(v) = r.grayscale {
            options.grayscale = v;
        }
        if let Some(v) = r.html {
            options.html = v;
        }
        if let Some(v) = r.pixel {
            options.pixel = v;
        }
        if let Some(v) = r.transparent {
            options.transparent = v;
        }
        if let Some(v) = r.transparency_threshold {
            options.transparency_threshold = v;
        }
        if let Some(v) = r.width {
            options.width = v;
        }
        if let Some(v) = r.height {
            options.height = v;
        }
        if let Some(v) = r.charset {
            options.charset = v;
        }
    }

    if let Some(w) = file.weights {
        if let Some(v) = w.red {
            options.red_weight = v;
        }
        if let Some(v) = w.green {
            options.green_weight = v;
        }
        if let Some(v) = w.blue {
            options.blue_weight = v;
        }
    }

    options.clamp_all();
    Ok(options)
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
/// ```no_run
/// use tg_core::config::load_config;
/// use std::path::Path;
/// let options = load_config(Path::new("termglyph.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<Options> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    let options = parse_config(&content)
        .with_context(|| format!("Configuration invalide dans {}", path.display()))?;
    log::debug!("Configuration chargée : {}", path.display());
    Ok(options)
}
