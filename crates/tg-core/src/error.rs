use thiserror::Error;

/// Errors that abort a conversion.
///
/// Every variant is terminal for the current conversion; nothing in the
/// pipeline retries.
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The image file or URL could not be opened or fetched.
    #[error("Source indisponible : {locator} ({reason})")]
    SourceUnavailable {
        /// Path or URL that was requested.
        locator: String,
        /// Underlying filesystem or network failure.
        reason: String,
    },

    /// The bytes are not a recognized image format.
    #[error("Impossible de décoder l'image : {0}")]
    DecodeFailure(String),

    /// Terminal dimensions were needed but could not be determined.
    #[error("Cannot determine terminal size")]
    TerminalSizeUnknown,

    /// Contradictory or out-of-domain options.
    #[error("Configuration invalide : {0}")]
    InvalidConfiguration(String),

    /// The resampler rejected the source or destination buffer.
    #[error("Échec du redimensionnement : {0}")]
    Scale(String),

    /// Writing the rendered output failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
