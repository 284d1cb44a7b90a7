/// Encode targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    Webp,
    Png,
}

impl MediaFormat {
    /// Get primary file extension
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Webp => "webp",
            Self::Png => "png",
        }
    }

    /// Get MIME type
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Webp => "image/webp",
            Self::Png => "image/png",
        }
    }

    /// Check if the format takes a quality parameter when encoding
    pub fn is_lossy(&self) -> bool {
        matches!(self, Self::Webp)
    }
}

impl std::fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension().to_uppercase())
    }
}

/// Conversion direction selected for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionMode {
    /// Any image input, WebP output
    ToWebp,
    /// WebP input only, PNG output
    ToPng,
}

impl ConversionMode {
    /// Target format produced in this mode
    pub fn target(&self) -> MediaFormat {
        match self {
            Self::ToWebp => MediaFormat::Webp,
            Self::ToPng => MediaFormat::Png,
        }
    }

    /// Intake filter: is a file with this declared MIME type convertible?
    ///
    /// `ToPng` only accepts files already in the WebP container; `ToWebp`
    /// accepts any image type.
    pub fn accepts(&self, mime_type: &str) -> bool {
        match self {
            Self::ToPng => mime_type == MediaFormat::Webp.mime_type(),
            Self::ToWebp => mime_type.starts_with("image/"),
        }
    }

    /// Whether the quality setting applies (lossless targets ignore it)
    pub fn uses_quality(&self) -> bool {
        self.target().is_lossy()
    }
}

impl Default for ConversionMode {
    fn default() -> Self {
        Self::ToWebp
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_extensions() {
        assert_eq!(ConversionMode::ToWebp.target().extension(), "webp");
        assert_eq!(ConversionMode::ToPng.target().extension(), "png");
    }

    #[test]
    fn test_intake_filter_webp_mode() {
        let mode = ConversionMode::ToWebp;
        assert!(mode.accepts("image/jpeg"));
        assert!(mode.accepts("image/png"));
        assert!(mode.accepts("image/webp"));
        assert!(!mode.accepts("application/pdf"));
        assert!(!mode.accepts("text/plain"));
    }

    #[test]
    fn test_intake_filter_png_mode() {
        let mode = ConversionMode::ToPng;
        assert!(mode.accepts("image/webp"));
        assert!(!mode.accepts("image/jpeg"));
        assert!(!mode.accepts("image/png"));
    }

    #[test]
    fn test_quality_relevance() {
        assert!(ConversionMode::ToWebp.uses_quality());
        assert!(!ConversionMode::ToPng.uses_quality());
    }
}
