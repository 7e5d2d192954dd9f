pub mod errors;

pub use errors::{ExitMapping, ParserResult, SklError, SklErrorCategory, SklResult};

use std::path::PathBuf;

/// Everything one conversion run needs, captured once from the CLI.
///
/// The legacy converter kept these in module-level globals shared across
/// subroutines; here the request is built once and passed by reference into
/// the selector and writer.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertRequest {
    pub input_path: PathBuf,
    pub output_dir: PathBuf,
    /// Uniform multiplier applied to every covalent radius, exactly once.
    pub radius_scale: f64,
    /// Element allow-list; empty means show all atoms.
    pub elements: Vec<String>,
    pub greyscale: bool,
}

impl ConvertRequest {
    pub fn new(input_path: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_dir: output_dir.into(),
            radius_scale: 1.0,
            elements: Vec::new(),
            greyscale: false,
        }
    }

    pub fn with_radius_scale(mut self, radius_scale: f64) -> Self {
        self.radius_scale = radius_scale;
        self
    }

    pub fn with_elements(mut self, elements: Vec<String>) -> Self {
        self.elements = elements;
        self
    }

    pub fn with_greyscale(mut self, greyscale: bool) -> Self {
        self.greyscale = greyscale;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub relative_path: PathBuf,
}

impl OutputArtifact {
    pub fn new(relative_path: impl Into<PathBuf>) -> Self {
        Self {
            relative_path: relative_path.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ConvertRequest;

    #[test]
    fn request_defaults_to_unscaled_show_all() {
        let request = ConvertRequest::new("structure.skl", ".");
        assert_eq!(request.radius_scale, 1.0);
        assert!(request.elements.is_empty());
        assert!(!request.greyscale);
    }

    #[test]
    fn request_builders_apply_run_settings() {
        let request = ConvertRequest::new("structure.skl", "out")
            .with_radius_scale(2.5)
            .with_elements(vec!["Si".to_string(), "O".to_string()])
            .with_greyscale(true);

        assert_eq!(request.radius_scale, 2.5);
        assert_eq!(request.elements.len(), 2);
        assert!(request.greyscale);
    }
}
