use skldx_core::domain::ConvertRequest;
use skldx_core::dx::{ATOMS_OUTPUT, BOX_OUTPUT, ConvertModule};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const THREE_ATOM_FIXTURE: &str = "# Si2O test cell, 5 Angstrom cube
lattice
  5.0 0.0 0.0
  0.0 5.0 0.0
  0.0 0.0 5.0
atoms 3
  Si 0.00 0.00 0.00
  Si 1.25 1.25 1.25
  O  2.50 2.50 2.50
";

const SI_BASE_RADIUS: f64 = 1.11;
const O_BASE_RADIUS: f64 = 0.66;

fn stage_fixture(dir: &Path) -> PathBuf {
    fs::create_dir_all(dir).expect("input dir should exist");
    let path = dir.join("structure.skl");
    fs::write(&path, THREE_ATOM_FIXTURE).expect("skeleton should be staged");
    path
}

fn data_rows(document: &str, object_header_prefix: &str, rows: usize) -> Vec<Vec<f64>> {
    let lines = document.lines().collect::<Vec<_>>();
    let start = lines
        .iter()
        .position(|line| line.starts_with(object_header_prefix))
        .unwrap_or_else(|| panic!("header '{}' should exist", object_header_prefix))
        + 1;
    lines[start..start + rows]
        .iter()
        .map(|line| {
            line.split_whitespace()
                .map(|token| token.parse::<f64>().expect("token should be numeric"))
                .collect()
        })
        .collect()
}

#[test]
fn unfiltered_run_reproduces_the_reference_scenario() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = stage_fixture(&temp.path().join("inputs"));
    let output_dir = temp.path().join("outputs");

    let request = ConvertRequest::new(&input, &output_dir).with_radius_scale(2.0);
    let (artifacts, summary) = ConvertModule
        .execute(&request)
        .expect("conversion should succeed");

    assert_eq!(artifacts.len(), 2);
    assert_eq!(summary.atoms_included, 3);

    let box_document =
        fs::read_to_string(output_dir.join(BOX_OUTPUT)).expect("box.dx should be readable");
    let deltas = box_document
        .lines()
        .filter(|line| line.starts_with("delta "))
        .map(|line| {
            line.split_whitespace()
                .skip(1)
                .map(|token| token.parse::<f64>().expect("delta token should be numeric"))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    assert_eq!(
        deltas,
        vec![
            vec![5.0, 0.0, 0.0],
            vec![0.0, 5.0, 0.0],
            vec![0.0, 0.0, 5.0]
        ]
    );

    let atoms_document =
        fs::read_to_string(output_dir.join(ATOMS_OUTPUT)).expect("atoms.dx should be readable");
    assert_eq!(atoms_document.matches("items 3 data follows").count(), 3);

    let positions = data_rows(&atoms_document, "object 1 ", 3);
    assert_eq!(positions[0], vec![0.0, 0.0, 0.0]);
    assert_eq!(positions[1], vec![1.25, 1.25, 1.25]);
    assert_eq!(positions[2], vec![2.5, 2.5, 2.5]);

    // Two Si atoms share one color value, the O atom differs from it.
    let colors = data_rows(&atoms_document, "object 2 ", 3);
    assert!((colors[0][0] - colors[1][0]).abs() < 1.0e-9);
    assert!((colors[0][0] - colors[2][0]).abs() > 1.0e-6);

    let radii = data_rows(&atoms_document, "object 3 ", 3);
    assert!((radii[0][0] - SI_BASE_RADIUS * 2.0).abs() < 1.0e-4);
    assert!((radii[1][0] - SI_BASE_RADIUS * 2.0).abs() < 1.0e-4);
    assert!((radii[2][0] - O_BASE_RADIUS * 2.0).abs() < 1.0e-4);
}

#[test]
fn element_filter_removes_atoms_from_all_three_objects() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = stage_fixture(&temp.path().join("inputs"));
    let output_dir = temp.path().join("outputs");

    let request =
        ConvertRequest::new(&input, &output_dir).with_elements(vec!["si".to_string()]);
    let (_, summary) = ConvertModule
        .execute(&request)
        .expect("filtered conversion should succeed");

    assert_eq!(summary.atoms_total, 3);
    assert_eq!(summary.atoms_included, 2);

    let atoms_document =
        fs::read_to_string(output_dir.join(ATOMS_OUTPUT)).expect("atoms.dx should be readable");
    assert_eq!(atoms_document.matches("items 2 data follows").count(), 3);

    let positions = data_rows(&atoms_document, "object 1 ", 2);
    assert_eq!(positions[0], vec![0.0, 0.0, 0.0]);
    assert_eq!(positions[1], vec![1.25, 1.25, 1.25]);

    let radii = data_rows(&atoms_document, "object 3 ", 2);
    assert!((radii[0][0] - SI_BASE_RADIUS).abs() < 1.0e-4);
    assert!((radii[1][0] - SI_BASE_RADIUS).abs() < 1.0e-4);
}

#[test]
fn filter_matching_no_atoms_still_emits_well_formed_documents() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = stage_fixture(&temp.path().join("inputs"));
    let output_dir = temp.path().join("outputs");

    let request =
        ConvertRequest::new(&input, &output_dir).with_elements(vec!["au".to_string()]);
    let (_, summary) = ConvertModule
        .execute(&request)
        .expect("empty-result conversion should succeed");

    assert_eq!(summary.atoms_included, 0);

    let atoms_document =
        fs::read_to_string(output_dir.join(ATOMS_OUTPUT)).expect("atoms.dx should be readable");
    assert_eq!(atoms_document.matches("items 0 data follows").count(), 3);
    assert!(atoms_document.contains("object \"atoms\" class field"));
    assert!(atoms_document.ends_with("end\n"));
}

#[test]
fn box_document_is_independent_of_the_filter() {
    let temp = TempDir::new().expect("tempdir should be created");
    let input = stage_fixture(&temp.path().join("inputs"));

    let unfiltered_dir = temp.path().join("unfiltered");
    let filtered_dir = temp.path().join("filtered");
    ConvertModule
        .execute(&ConvertRequest::new(&input, &unfiltered_dir))
        .expect("unfiltered run should succeed");
    ConvertModule
        .execute(
            &ConvertRequest::new(&input, &filtered_dir).with_elements(vec!["o".to_string()]),
        )
        .expect("filtered run should succeed");

    let unfiltered = fs::read(unfiltered_dir.join(BOX_OUTPUT)).expect("box.dx exists");
    let filtered = fs::read(filtered_dir.join(BOX_OUTPUT)).expect("box.dx exists");
    assert_eq!(unfiltered, filtered);
}
