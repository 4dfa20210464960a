use halftone::HalftoneError;
use thiserror::Error;

/// Errors surfaced by the CLI's own plumbing, plus pipeline errors
/// forwarded from the `halftone` crate.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported color type: {0}")]
    UnsupportedColorType(String),

    #[error("Preset error: {0}")]
    Preset(String),

    #[error("Pipeline error: {0}")]
    Pipeline(#[from] HalftoneError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use halftone::ConfigError;

    #[test]
    fn test_png_decode_message() {
        let error = CliError::PngDecode("bad chunk".to_string());
        assert_eq!(error.to_string(), "PNG decode error: bad chunk");
    }

    #[test]
    fn test_preset_message() {
        let error = CliError::Preset("missing field".to_string());
        assert_eq!(error.to_string(), "Preset error: missing field");
    }

    #[test]
    fn test_pipeline_error_wraps_config_error() {
        let inner: HalftoneError = ConfigError::UnknownAlgorithm("x".to_string()).into();
        let error: CliError = inner.into();
        assert_eq!(
            error.to_string(),
            "Pipeline error: invalid configuration: unknown dither algorithm 'x'"
        );
    }
}
