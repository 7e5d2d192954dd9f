//! Static periodic-table dataset and the per-run element attribute table.
//!
//! Covalent radii follow the Cordero (2008) compilation in Angstrom; display
//! colors are the scalar colormap values carried over from the legacy
//! converter's element table. Lookups are keyed by atomic number, 1-based.

pub const MAX_ATOMIC_NUMBER: usize = 103;

const ATOMIC_SYMBOLS: [&str; MAX_ATOMIC_NUMBER] = [
    "H", "He", "Li", "Be", "B", "C", "N", "O", "F", "Ne", "Na", "Mg", "Al", "Si", "P", "S", "Cl",
    "Ar", "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As",
    "Se", "Br", "Kr", "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In",
    "Sn", "Sb", "Te", "I", "Xe", "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb",
    "Dy", "Ho", "Er", "Tm", "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl",
    "Pb", "Bi", "Po", "At", "Rn", "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk",
    "Cf", "Es", "Fm", "Md", "No", "Lr",
];

/// Covalent radii in Angstrom, index = atomic number - 1.
const COVALENT_RADII: [f64; MAX_ATOMIC_NUMBER] = [
    /* H  */ 0.31, 0.28, 1.28, 0.96, 0.84, 0.76, 0.71, 0.66, 0.57, 0.58,
    /* Na */ 1.66, 1.41, 1.21, 1.11, 1.07, 1.05, 1.02, 1.06, 2.03, 1.76,
    /* Sc */ 1.70, 1.60, 1.53, 1.39, 1.39, 1.32, 1.26, 1.24, 1.32, 1.22,
    /* Ga */ 1.22, 1.20, 1.19, 1.20, 1.20, 1.16, 2.20, 1.95, 1.90, 1.75,
    /* Nb */ 1.64, 1.54, 1.47, 1.46, 1.42, 1.39, 1.45, 1.44, 1.42, 1.39,
    /* Sb */ 1.39, 1.38, 1.39, 1.40, 2.44, 2.15, 2.07, 2.04, 2.03, 2.01,
    /* Pm */ 1.99, 1.98, 1.98, 1.96, 1.94, 1.92, 1.92, 1.89, 1.90, 1.87,
    /* Lu */ 1.87, 1.75, 1.70, 1.62, 1.51, 1.44, 1.41, 1.36, 1.36, 1.32,
    /* Tl */ 1.45, 1.46, 1.48, 1.40, 1.50, 1.50, 2.60, 2.21, 2.15, 2.06,
    /* Pa */ 2.00, 1.96, 1.90, 1.87, 1.80, 1.69, 1.68, 1.68, 1.65, 1.67,
    /* Md */ 1.73, 1.76, 1.61,
];

/// Full-color scalar values fed to the downstream colormap, index = z - 1.
/// Chemically related elements share a value; common light elements carry
/// hand-assigned overrides so Si, O, C, N stay distinguishable.
const DISPLAY_COLORS: [f64; MAX_ATOMIC_NUMBER] = [
    /* H  */ 0.95, 0.85, 0.70, 0.65, 0.42, 0.20, 0.58, 0.05, 0.12, 0.85,
    /* Na */ 0.70, 0.65, 0.48, 0.35, 0.55, 0.32, 0.12, 0.85, 0.70, 0.65,
    /* Sc */ 0.50, 0.50, 0.50, 0.50, 0.50, 0.45, 0.50, 0.50, 0.52, 0.53,
    /* Ga */ 0.48, 0.38, 0.55, 0.32, 0.12, 0.85, 0.70, 0.65, 0.50, 0.50,
    /* Nb */ 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.52, 0.53, 0.48, 0.38,
    /* Sb */ 0.55, 0.32, 0.12, 0.85, 0.70, 0.65, 0.60, 0.60, 0.60, 0.60,
    /* Pm */ 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60,
    /* Lu */ 0.60, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.50, 0.52, 0.53,
    /* Tl */ 0.48, 0.38, 0.55, 0.32, 0.12, 0.85, 0.70, 0.65, 0.60, 0.60,
    /* Pa */ 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60, 0.60,
    /* Md */ 0.60, 0.60, 0.60,
];

const GREY_FLOOR: f64 = 0.10;
const GREY_SPAN: f64 = 0.80;

pub fn symbol(atomic_number: usize) -> Option<&'static str> {
    index_1_based(atomic_number).map(|index| ATOMIC_SYMBOLS[index])
}

pub fn base_covalent_radius(atomic_number: usize) -> Option<f64> {
    index_1_based(atomic_number).map(|index| COVALENT_RADII[index])
}

/// Case-insensitive symbol lookup, e.g. "si" and "SI" both resolve to 14.
pub fn atomic_number_for_symbol(symbol: &str) -> Option<usize> {
    ATOMIC_SYMBOLS
        .iter()
        .position(|candidate| candidate.eq_ignore_ascii_case(symbol))
        .map(|index| index + 1)
}

fn index_1_based(atomic_number: usize) -> Option<usize> {
    if atomic_number == 0 || atomic_number > MAX_ATOMIC_NUMBER {
        None
    } else {
        Some(atomic_number - 1)
    }
}

/// Color-assignment scheme, decided once per run from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    #[default]
    Full,
    Greyscale,
}

/// Per-run view of the element dataset.
///
/// Radii are copied out of the static table so `apply_scale` can multiply
/// them in place. Applying the scale twice compounds multiplicatively; the
/// conversion pipeline invokes it exactly once per run.
#[derive(Debug, Clone)]
pub struct ElementTable {
    radii: Vec<f64>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self {
            radii: COVALENT_RADII.to_vec(),
        }
    }

    pub fn apply_scale(&mut self, factor: f64) {
        for radius in &mut self.radii {
            *radius *= factor;
        }
    }

    pub fn scaled_radius(&self, atomic_number: usize) -> Option<f64> {
        index_1_based(atomic_number).map(|index| self.radii[index])
    }

    pub fn color(&self, atomic_number: usize) -> Option<f64> {
        index_1_based(atomic_number).map(|index| DISPLAY_COLORS[index])
    }

    /// Grey gradient over the whole table, compressed to 0.1..0.9 so the
    /// lightest and darkest elements stay visible against the background.
    pub fn grey_color(&self, atomic_number: usize) -> Option<f64> {
        index_1_based(atomic_number).map(|index| {
            GREY_FLOOR + GREY_SPAN * index as f64 / (MAX_ATOMIC_NUMBER - 1) as f64
        })
    }

    pub fn color_for_mode(&self, atomic_number: usize, mode: ColorMode) -> Option<f64> {
        match mode {
            ColorMode::Full => self.color(atomic_number),
            ColorMode::Greyscale => self.grey_color(atomic_number),
        }
    }
}

impl Default for ElementTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the per-run table with the radius scale already applied once.
pub fn scaled_element_table(factor: f64) -> ElementTable {
    let mut table = ElementTable::new();
    table.apply_scale(factor);
    table
}

#[cfg(test)]
mod tests {
    use super::{
        ColorMode, ElementTable, MAX_ATOMIC_NUMBER, atomic_number_for_symbol,
        base_covalent_radius, symbol,
    };

    #[test]
    fn symbol_lookup_is_one_based() {
        assert_eq!(symbol(1), Some("H"));
        assert_eq!(symbol(14), Some("Si"));
        assert_eq!(symbol(103), Some("Lr"));
        assert_eq!(symbol(0), None);
        assert_eq!(symbol(104), None);
    }

    #[test]
    fn symbol_resolution_is_case_insensitive() {
        assert_eq!(atomic_number_for_symbol("Si"), Some(14));
        assert_eq!(atomic_number_for_symbol("si"), Some(14));
        assert_eq!(atomic_number_for_symbol("SI"), Some(14));
        assert_eq!(atomic_number_for_symbol("Xx"), None);
    }

    #[test]
    fn scaled_radius_is_base_radius_times_factor() {
        let mut table = ElementTable::new();
        table.apply_scale(2.0);

        for z in 1..=MAX_ATOMIC_NUMBER {
            let base = base_covalent_radius(z).expect("base radius should exist");
            let scaled = table.scaled_radius(z).expect("scaled radius should exist");
            assert!(
                (scaled - base * 2.0).abs() < 1.0e-12,
                "z={} scaled {} != base {} * 2",
                z,
                scaled,
                base
            );
        }
    }

    #[test]
    fn applying_scale_twice_compounds_multiplicatively() {
        let mut table = ElementTable::new();
        table.apply_scale(2.0);
        table.apply_scale(3.0);

        let base = base_covalent_radius(8).expect("O radius should exist");
        let scaled = table.scaled_radius(8).expect("scaled radius should exist");
        assert!((scaled - base * 6.0).abs() < 1.0e-12);
    }

    #[test]
    fn grey_gradient_is_monotone_and_bounded() {
        let table = ElementTable::new();
        let mut previous = f64::NEG_INFINITY;
        for z in 1..=MAX_ATOMIC_NUMBER {
            let grey = table.grey_color(z).expect("grey value should exist");
            assert!(grey > previous);
            assert!((0.1..=0.9).contains(&grey));
            previous = grey;
        }
    }

    #[test]
    fn color_mode_selects_between_full_and_grey() {
        let table = ElementTable::new();
        assert_eq!(table.color_for_mode(14, ColorMode::Full), table.color(14));
        assert_eq!(
            table.color_for_mode(14, ColorMode::Greyscale),
            table.grey_color(14)
        );
    }

    #[test]
    fn unknown_atomic_number_yields_no_attributes() {
        let table = ElementTable::new();
        assert_eq!(table.color(0), None);
        assert_eq!(table.grey_color(200), None);
        assert_eq!(table.scaled_radius(104), None);
    }
}
