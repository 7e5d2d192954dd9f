/// One atom from the skeleton file: resolved element, Cartesian position in
/// Angstrom. Immutable after the structure is read.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomSite {
    pub symbol: String,
    pub atomic_number: usize,
    pub position: [f64; 3],
}

/// Parsed skeleton structure: three lattice vectors plus the atom list, in
/// file order. The selector and writer only ever read this.
#[derive(Debug, Clone, PartialEq)]
pub struct StructureModel {
    lattice: [[f64; 3]; 3],
    atoms: Vec<AtomSite>,
}

impl StructureModel {
    pub(super) fn new(lattice: [[f64; 3]; 3], atoms: Vec<AtomSite>) -> Self {
        Self { lattice, atoms }
    }

    pub fn lattice(&self) -> &[[f64; 3]; 3] {
        &self.lattice
    }

    pub fn atoms(&self) -> &[AtomSite] {
        &self.atoms
    }

    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }
}

#[cfg(test)]
mod tests {
    use super::{AtomSite, StructureModel};

    #[test]
    fn structure_exposes_lattice_and_atoms_read_only() {
        let lattice = [[5.0, 0.0, 0.0], [0.0, 5.0, 0.0], [0.0, 0.0, 5.0]];
        let atoms = vec![AtomSite {
            symbol: "Si".to_string(),
            atomic_number: 14,
            position: [0.0, 0.0, 0.0],
        }];
        let structure = StructureModel::new(lattice, atoms);

        assert_eq!(structure.atom_count(), 1);
        assert_eq!(structure.lattice()[1][1], 5.0);
        assert_eq!(structure.atoms()[0].atomic_number, 14);
    }
}
