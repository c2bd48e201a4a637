use std::io::{self, BufWriter};

use anyhow::{Context, Result};
use clap::Parser;
use tg_app::asciifier::Asciifier;
use tg_app::cli::Cli;
use tg_app::terminal::Terminal;
use tg_core::config::Options;

fn main() -> Result<()> {
    // 1. Parser CLI
    let cli = Cli::parse();

    // 2. Initialiser le logging
    env_logger::Builder::new()
        .filter_level(cli.log_level.parse().unwrap_or(log::LevelFilter::Warn))
        .init();

    // 3. Charger la config, puis appliquer les overrides CLI
    let mut options = resolve_config(&cli)?;
    cli.apply(&mut options);
    options.clamp_all();
    options.validate()?;

    // 4. Convertir vers stdout
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    Asciifier::new(options)
        .asciify(&Terminal, &mut out)
        .with_context(|| format!("Conversion de {} impossible", cli.image))?;

    Ok(())
}

/// Options de départ : fichier `--config` s'il existe, sinon défauts.
fn resolve_config(cli: &Cli) -> Result<Options> {
    match cli.config {
        Some(ref path) if path.exists() => tg_core::config::load_config(path),
        Some(ref path) => {
            log::warn!(
                "Config introuvable : {}. Utilisation des défauts.",
                path.display()
            );
            Ok(Options::default())
        }
        None => Ok(Options::default()),
    }
}
