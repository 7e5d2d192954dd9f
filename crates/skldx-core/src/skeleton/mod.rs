mod model;
mod parser;

pub use model::{AtomSite, StructureModel};
pub use parser::parse_skeleton_source;

use crate::domain::{SklError, SklResult};
use std::fs;
use std::path::Path;

pub fn read_skeleton_file(path: &Path) -> SklResult<StructureModel> {
    let source = fs::read_to_string(path).map_err(|source| {
        SklError::io_system(
            "IO.SKELETON_READ",
            format!("failed to read skeleton file '{}': {}", path.display(), source),
        )
    })?;
    parse_skeleton_source(&source)
}

#[cfg(test)]
mod tests {
    use super::read_skeleton_file;
    use crate::domain::SklErrorCategory;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_structure_from_disk() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("structure.skl");
        fs::write(
            &path,
            "lattice\n4 0 0\n0 4 0\n0 0 4\natoms 1\nFe 2 2 2\n",
        )
        .expect("fixture should be staged");

        let structure = read_skeleton_file(&path).expect("skeleton file should parse");
        assert_eq!(structure.atom_count(), 1);
        assert_eq!(structure.atoms()[0].atomic_number, 26);
    }

    #[test]
    fn missing_file_is_an_io_error_naming_the_path() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("absent.skl");

        let error = read_skeleton_file(&path).expect_err("missing file should fail");
        assert_eq!(error.category(), SklErrorCategory::IoSystemError);
        assert_eq!(error.code(), "IO.SKELETON_READ");
        assert!(error.message().contains("absent.skl"));
    }
}
