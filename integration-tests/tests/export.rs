use std::fs;

use integration_tests::{planning, portfolio};
use triad_compiler::{Config, compile};
use triad_lp::{ExportError, Lp, export};

#[test]
fn exported_files_match_the_rendered_text() {
    let dir = tempfile::tempdir().unwrap();

    let linear = compile(&planning(), &Config::default()).unwrap();
    let quadratic = compile(&portfolio(), &Config::default()).unwrap();

    let linear_path = export(&linear, dir.path()).unwrap();
    let quadratic_path = export(&quadratic, dir.path()).unwrap();

    assert_eq!(linear_path, dir.path().join("planning.lp"));
    assert_eq!(quadratic_path, dir.path().join("portfolio.lp"));
    assert_eq!(fs::read_to_string(linear_path).unwrap(), Lp::new(&linear).to_string());
    assert_eq!(
        fs::read_to_string(quadratic_path).unwrap(),
        Lp::new(&quadratic).to_string()
    );
}

#[test]
fn repeated_exports_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let mut model = compile(&planning(), &Config::default()).unwrap();
    model.normalize();

    let first = fs::read(export(&model, dir.path().join("a.lp")).unwrap()).unwrap();
    let second = fs::read(export(&model, dir.path().join("b.lp")).unwrap()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn corrupted_model_is_not_exported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("planning.lp");
    fs::write(&path, "previous contents").unwrap();

    let mut model = compile(&planning(), &Config::default()).unwrap();
    model.constraints.names.pop();

    let err = export(&model, &path).unwrap_err();

    assert!(matches!(err, ExportError::Invalid(_)));
    assert_eq!(fs::read_to_string(&path).unwrap(), "previous contents");
}
