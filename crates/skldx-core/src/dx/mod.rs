mod model;

use crate::domain::{ConvertRequest, OutputArtifact, SklError, SklResult};
use crate::elements::{ColorMode, scaled_element_table};
use crate::select::{SelectionCriteria, select};
use crate::serialization::write_text_artifact;
use crate::skeleton::read_skeleton_file;
use model::{render_atoms_document, render_box_document};
use serde::Serialize;
use std::fs;

pub const BOX_OUTPUT: &str = "box.dx";
pub const ATOMS_OUTPUT: &str = "atoms.dx";

/// One-shot converter: skeleton structure in, two OpenDX documents out.
pub struct ConvertModule;

/// Run summary reported by the CLI, optionally serialized as JSON.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionSummary {
    pub input: String,
    pub atoms_total: usize,
    pub atoms_included: usize,
    pub radius_scale: f64,
    pub greyscale: bool,
    pub artifacts: Vec<String>,
}

impl ConversionSummary {
    pub fn to_json_string(&self) -> SklResult<String> {
        serde_json::to_string_pretty(self).map_err(|source| {
            SklError::internal(
                "SYS.SUMMARY_SERIALIZE",
                format!("failed to serialize conversion summary: {}", source),
            )
        })
    }
}

impl ConvertModule {
    pub fn expected_outputs(&self) -> Vec<OutputArtifact> {
        vec![
            OutputArtifact::new(BOX_OUTPUT),
            OutputArtifact::new(ATOMS_OUTPUT),
        ]
    }

    /// Runs the whole pipeline: read structure, scale the element table
    /// once, select atoms, then write the box document followed by the atom
    /// document. Each file is written in one pass; a failure after the box
    /// document is flushed leaves it in place (the tool is re-run from
    /// scratch on failure).
    pub fn execute(
        &self,
        request: &ConvertRequest,
    ) -> SklResult<(Vec<OutputArtifact>, ConversionSummary)> {
        validate_radius_scale(request.radius_scale)?;

        let structure = read_skeleton_file(&request.input_path)?;
        let table = scaled_element_table(request.radius_scale);
        let criteria = SelectionCriteria::from_names(&request.elements);
        let mask = select(structure.atoms(), &criteria);
        let mode = if request.greyscale {
            ColorMode::Greyscale
        } else {
            ColorMode::Full
        };

        fs::create_dir_all(&request.output_dir).map_err(|source| {
            SklError::io_system(
                "IO.OUTPUT_DIRECTORY",
                format!(
                    "failed to create output directory '{}': {}",
                    request.output_dir.display(),
                    source
                ),
            )
        })?;

        let box_path = request.output_dir.join(BOX_OUTPUT);
        write_text_artifact(&box_path, &render_box_document(&structure)).map_err(|source| {
            SklError::io_system(
                "IO.BOX_WRITE",
                format!("failed to write '{}': {}", box_path.display(), source),
            )
        })?;

        let atoms_path = request.output_dir.join(ATOMS_OUTPUT);
        let atoms_document = render_atoms_document(&structure, &table, &mask, mode)?;
        write_text_artifact(&atoms_path, &atoms_document).map_err(|source| {
            SklError::io_system(
                "IO.ATOMS_WRITE",
                format!("failed to write '{}': {}", atoms_path.display(), source),
            )
        })?;

        let summary = ConversionSummary {
            input: request.input_path.display().to_string(),
            atoms_total: structure.atom_count(),
            atoms_included: mask.included_count(),
            radius_scale: request.radius_scale,
            greyscale: request.greyscale,
            artifacts: vec![BOX_OUTPUT.to_string(), ATOMS_OUTPUT.to_string()],
        };

        Ok((self.expected_outputs(), summary))
    }
}

fn validate_radius_scale(radius_scale: f64) -> SklResult<()> {
    if !radius_scale.is_finite() || radius_scale <= 0.0 {
        return Err(SklError::input_validation(
            "INPUT.RADIUS_SCALE",
            format!(
                "radius scale factor must be a positive real, got {}",
                radius_scale
            ),
        ));
    }
    Ok(())
}
