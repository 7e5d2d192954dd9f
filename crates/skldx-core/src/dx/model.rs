use crate::domain::{SklError, SklResult};
use crate::elements::{ColorMode, ElementTable};
use crate::select::InclusionMask;
use crate::serialization::{format_fixed_f64, format_vector3};
use crate::skeleton::StructureModel;

const POSITION_WIDTH: usize = 12;
const POSITION_PRECISION: usize = 6;
const SCALAR_WIDTH: usize = 10;
const SCALAR_PRECISION: usize = 4;

/// Renders the lattice bounding-box document.
///
/// The skeleton is fixed: a 2x2x2 grid whose deltas are the three lattice
/// vectors, a matching connections grid, and eight unit data values. Only
/// the delta rows depend on the input.
pub(super) fn render_box_document(structure: &StructureModel) -> String {
    let mut document = String::new();
    document.push_str("object 1 class gridpositions counts 2 2 2\n");
    document.push_str("origin 0 0 0\n");
    for vector in structure.lattice() {
        document.push_str("delta ");
        document.push_str(&format_vector3(*vector, POSITION_WIDTH, POSITION_PRECISION));
        document.push('\n');
    }
    document.push_str("object 2 class gridconnections counts 2 2 2\n");
    document.push_str("object 3 class array type float rank 0 items 8 data follows\n");
    document.push_str("1.0 1.0 1.0 1.0 1.0 1.0 1.0 1.0\n");
    document.push_str("attribute \"dep\" string \"positions\"\n");
    document.push_str("object \"box\" class field\n");
    document.push_str("component \"positions\" value 1\n");
    document.push_str("component \"connections\" value 2\n");
    document.push_str("component \"data\" value 3\n");
    document.push_str("end\n");
    document
}

/// Renders the atom-position document: three parallel arrays (positions,
/// color data, sizes) plus the combining field.
///
/// All three arrays enumerate the same included atoms in ascending original
/// order, and every `items` count comes from the inclusion mask.
pub(super) fn render_atoms_document(
    structure: &StructureModel,
    table: &ElementTable,
    mask: &InclusionMask,
    mode: ColorMode,
) -> SklResult<String> {
    let included = structure
        .atoms()
        .iter()
        .enumerate()
        .filter(|(index, _)| mask.is_included(*index))
        .map(|(_, atom)| atom)
        .collect::<Vec<_>>();
    let item_count = mask.included_count();
    debug_assert_eq!(included.len(), item_count);

    let mut document = String::new();

    document.push_str(&format!(
        "object 1 class array type float rank 1 shape 3 items {} data follows\n",
        item_count
    ));
    for atom in &included {
        document.push_str(&format_vector3(
            atom.position,
            POSITION_WIDTH,
            POSITION_PRECISION,
        ));
        document.push('\n');
    }

    document.push_str(&format!(
        "object 2 class array type float rank 0 items {} data follows\n",
        item_count
    ));
    for atom in &included {
        let color = table
            .color_for_mode(atom.atomic_number, mode)
            .ok_or_else(|| attribute_error(atom.atomic_number, "color"))?;
        document.push_str(&format_fixed_f64(color, SCALAR_WIDTH, SCALAR_PRECISION));
        document.push('\n');
    }
    document.push_str("attribute \"dep\" string \"positions\"\n");

    document.push_str(&format!(
        "object 3 class array type float rank 0 items {} data follows\n",
        item_count
    ));
    for atom in &included {
        let radius = table
            .scaled_radius(atom.atomic_number)
            .ok_or_else(|| attribute_error(atom.atomic_number, "covalent radius"))?;
        document.push_str(&format_fixed_f64(radius, SCALAR_WIDTH, SCALAR_PRECISION));
        document.push('\n');
    }
    document.push_str("attribute \"dep\" string \"positions\"\n");

    document.push_str("object \"atoms\" class field\n");
    document.push_str("component \"positions\" value 1\n");
    document.push_str("component \"data\" value 2\n");
    document.push_str("component \"sizes\" value 3\n");
    document.push_str("end\n");

    Ok(document)
}

fn attribute_error(atomic_number: usize, attribute: &str) -> SklError {
    SklError::computation(
        "RUN.ELEMENT_ATTRIBUTE",
        format!(
            "element dataset has no {} for atomic number {}",
            attribute, atomic_number
        ),
    )
}
