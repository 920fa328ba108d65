use thiserror::Error;

/// Everything that can make a certificate render fail. Degraded input (missing fields, text
/// that overflows a block) is never an error; it renders placeholders or flows onto new pages.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    /// An I/O error occurred while loading assets or writing the document
    Io(#[from] std::io::Error),

    #[error("failed to parse font: {0}")]
    /// [owned_ttf_parser] failed to parse a configured font file
    FontParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to decode the configured logo
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// Certificate data or configuration JSON could not be parsed
    Json(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    /// A configuration value was present but unusable
    Config(String),

    #[error("font {0} is not loaded in the asset set")]
    /// A page refers to a font that the asset set doesn't hold
    MissingFont(usize),
}
