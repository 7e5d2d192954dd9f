use std::fs;
use std::path::Path;

pub fn format_fixed_f64(value: f64, width: usize, precision: usize) -> String {
    format!(
        "{value:>width$.precision$}",
        width = width,
        precision = precision
    )
}

/// Renders one whitespace-separated vector row, e.g. a lattice delta line
/// or an atom position triple.
pub fn format_vector3(values: [f64; 3], width: usize, precision: usize) -> String {
    values
        .iter()
        .map(|value| format_fixed_f64(*value, width, precision))
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn normalize_text_artifact(content: &str) -> String {
    let mut normalized = content.replace("\r\n", "\n").replace('\r', "\n");
    if !normalized.is_empty() && !normalized.ends_with('\n') {
        normalized.push('\n');
    }
    normalized
}

pub fn write_text_artifact(path: &Path, content: &str) -> std::io::Result<()> {
    fs::write(path, normalize_text_artifact(content))
}
