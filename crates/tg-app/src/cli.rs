use std::path::PathBuf;

use clap::Parser;
use tg_core::config::Options;

/// termglyph — convert an image into 256-color character art.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Image à convertir : chemin local ou URL http(s).
    pub image: String,

    /// Inverser les couleurs de l'image.
    #[arg(short = 'i', long, default_value_t = false)]
    pub invert: bool,

    /// Centrer l'image.
    #[arg(short = 't', long, default_value_t = false)]
    pub center: bool,

    /// Sortie en niveaux de gris.
    #[arg(short = 'g', long, default_value_t = false)]
    pub grayscale: bool,

    /// Produire un document HTML.
    #[arg(short = 'm', long, default_value_t = false, conflicts_with = "pixel")]
    pub html: bool,

    /// Mode pixel (demi-blocs).
    #[arg(short = 'p', long, default_value_t = false)]
    pub pixel: bool,

    /// Respecter la transparence de l'image.
    #[arg(short = 'T', long, default_value_t = false)]
    pub transparent: bool,

    /// Seuil de transparence, entre 0.0 et 1.0 (défaut 1.0).
    #[arg(short = 'X', long)]
    pub transparency_threshold: Option<f64>,

    /// Largeur de sortie.
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Hauteur de sortie.
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Glyphes de sortie, du plus clair au plus dense.
    #[arg(short = 'c', long)]
    pub charset: Option<String>,

    /// Poids du rouge (défaut 0.2989).
    #[arg(short = 'R', long)]
    pub red_weight: Option<f64>,

    /// Poids du vert (défaut 0.5866).
    #[arg(short = 'G', long)]
    pub green_weight: Option<f64>,

    /// Poids du bleu (défaut 0.1145).
    #[arg(short = 'B', long)]
    pub blue_weight: Option<f64>,

    /// Fichier de configuration TOML optionnel.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    /// Apply command-line values on top of `options`.
    ///
    /// Boolean flags only switch on; valued flags replace when given.
    pub fn apply(&self, options: &mut Options) {
        options.image.clone_from(&self.image);
        options.invert |= self.invert;
        options.center |= self.center;
        options.grayscale |= self.grayscale;
        options.html |= self.html;
        options.pixel |= self.pixel;
        options.transparent |= self.transparent;
        if let Some(threshold) = self.transparency_threshold {
            options.transparency_threshold = threshold;
        }
        if let Some(width) = self.width {
            options.width = width;
        }
        if let Some(height) = self.height {
            options.height = height;
        }
        if let Some(ref charset) = self.charset {
            options.charset.clone_from(charset);
        }
        if let Some(red) = self.red_weight {
            options.red_weight = red;
        }
        if let Some(green) = self.green_weight {
            options.green_weight = green;
        }
        if let Some(blue) = self.blue_weight {
            options.blue_weight = blue;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn short_flags_parse() {
        let cli = Cli::try_parse_from([
            "termglyph", "-i", "-t", "-g", "-p", "-T", "-X", "0.5", "-W", "40", "-H", "20",
            "-c", "ab", "-R", "1", "-G", "0", "-B", "0", "pic.png",
        ])
        .unwrap();
        assert!(cli.invert && cli.center && cli.grayscale && cli.pixel && cli.transparent);
        assert_eq!(cli.transparency_threshold, Some(0.5));
        assert_eq!((cli.width, cli.height), (Some(40), Some(20)));
        assert_eq!(cli.charset.as_deref(), Some("ab"));
        assert_eq!(cli.image, "pic.png");
    }

    #[test]
    fn html_and_pixel_conflict() {
        let err = Cli::try_parse_from(["termglyph", "-m", "-p", "pic.png"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn image_is_required() {
        assert!(Cli::try_parse_from(["termglyph", "-g"]).is_err());
    }

    #[test]
    fn overrides_keep_unset_values() {
        let cli = Cli::try_parse_from(["termglyph", "-W", "12", "pic.png"]).unwrap();
        let mut options = Options {
            center: true,
            height: 7,
            charset: "xy".into(),
            ..Options::default()
        };
        cli.apply(&mut options);
        assert_eq!(options.image, "pic.png");
        assert!(options.center);
        assert_eq!((options.width, options.height), (12, 7));
        assert_eq!(options.charset, "xy");
    }
}
