use super::model::{AtomSite, StructureModel};
use crate::domain::{ParserResult, SklError};
use crate::elements::atomic_number_for_symbol;

/// Parses skeleton source text into a structure model.
///
/// The format is line oriented: a `lattice` keyword followed by three
/// vector rows, then `atoms N` followed by N rows of `Symbol x y z`.
/// Keywords are case-insensitive, `#` and `!` start comment lines, and
/// Fortran `D` exponents are accepted in numeric fields.
pub fn parse_skeleton_source(source: &str) -> ParserResult<StructureModel> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !is_comment_line(line));

    let mut lattice: Option<[[f64; 3]; 3]> = None;
    let mut atoms: Option<Vec<AtomSite>> = None;

    while let Some((line_number, line)) = lines.next() {
        let keyword = line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match keyword.as_str() {
            "lattice" => {
                let mut vectors = [[0.0_f64; 3]; 3];
                for vector in &mut vectors {
                    let (vector_line_number, vector_line) = lines.next().ok_or_else(|| {
                        SklError::input_validation(
                            "INPUT.SKELETON_LATTICE",
                            "skeleton file ends before all 3 lattice vectors are given",
                        )
                    })?;
                    *vector = parse_vector3(vector_line, vector_line_number)?;
                }
                lattice = Some(vectors);
            }
            "atoms" => {
                let declared_count = line
                    .split_whitespace()
                    .nth(1)
                    .and_then(|token| token.parse::<usize>().ok())
                    .ok_or_else(|| {
                        SklError::input_validation(
                            "INPUT.SKELETON_ATOM_COUNT",
                            format!(
                                "line {}: 'atoms' keyword requires a positive atom count",
                                line_number
                            ),
                        )
                    })?;

                let mut sites = Vec::with_capacity(declared_count);
                for _ in 0..declared_count {
                    let (atom_line_number, atom_line) = lines.next().ok_or_else(|| {
                        SklError::input_validation(
                            "INPUT.SKELETON_ATOM_COUNT",
                            format!(
                                "skeleton file declares {} atoms but ends after {}",
                                declared_count,
                                sites.len()
                            ),
                        )
                    })?;
                    sites.push(parse_atom_line(atom_line, atom_line_number)?);
                }
                atoms = Some(sites);
            }
            _ => {
                return Err(SklError::input_validation(
                    "INPUT.SKELETON_KEYWORD",
                    format!("line {}: unrecognized keyword '{}'", line_number, keyword),
                ));
            }
        }
    }

    let lattice = lattice.ok_or_else(|| {
        SklError::input_validation(
            "INPUT.SKELETON_LATTICE",
            "skeleton file has no 'lattice' section",
        )
    })?;
    let atoms = atoms.ok_or_else(|| {
        SklError::input_validation(
            "INPUT.SKELETON_ATOMS",
            "skeleton file has no 'atoms' section",
        )
    })?;

    Ok(StructureModel::new(lattice, atoms))
}

fn is_comment_line(line: &str) -> bool {
    line.starts_with('#') || line.starts_with('!')
}

fn parse_atom_line(line: &str, line_number: usize) -> ParserResult<AtomSite> {
    let mut tokens = line.split_whitespace();
    let symbol = tokens.next().ok_or_else(|| {
        SklError::input_validation(
            "INPUT.SKELETON_ATOM_LINE",
            format!("line {}: empty atom row", line_number),
        )
    })?;

    let atomic_number = atomic_number_for_symbol(symbol).ok_or_else(|| {
        SklError::input_validation(
            "INPUT.SKELETON_ELEMENT",
            format!("line {}: unknown element symbol '{}'", line_number, symbol),
        )
    })?;

    let coordinates = tokens
        .map(parse_numeric_token)
        .collect::<Option<Vec<f64>>>()
        .filter(|values| values.len() == 3)
        .ok_or_else(|| {
            SklError::input_validation(
                "INPUT.SKELETON_ATOM_LINE",
                format!(
                    "line {}: atom row must read 'Symbol x y z', got '{}'",
                    line_number, line
                ),
            )
        })?;

    Ok(AtomSite {
        symbol: symbol.to_string(),
        atomic_number,
        position: [coordinates[0], coordinates[1], coordinates[2]],
    })
}

fn parse_vector3(line: &str, line_number: usize) -> ParserResult<[f64; 3]> {
    let values = line
        .split_whitespace()
        .map(parse_numeric_token)
        .collect::<Option<Vec<f64>>>()
        .filter(|values| values.len() == 3)
        .ok_or_else(|| {
            SklError::input_validation(
                "INPUT.SKELETON_LATTICE",
                format!(
                    "line {}: lattice vector must hold exactly 3 reals, got '{}'",
                    line_number, line
                ),
            )
        })?;

    Ok([values[0], values[1], values[2]])
}

fn parse_numeric_token(token: &str) -> Option<f64> {
    // Legacy skeleton files carry Fortran double-precision exponents.
    let normalized = token.replace(['D', 'd'], "E");
    normalized.parse::<f64>().ok()
}
