use sheetkit_core::{CalibrationState, CoordUnit, Point, ReferenceAnchor};
use sheetkit_geometry::{CutList, CutRecord, ProjectFile, SheetEntry, SheetPlacement};

#[test]
fn test_cuts_json_roundtrip_is_verbatim() {
    // The exact record shape the persistence layer stores per sheet.
    let stored = concat!(
        r#"[{"p1":{"x":-120.5,"y":33.0},"p2":{"x":90.25,"y":-41.0},"flipped":true},"#,
        r#"{"p1":{"x":0.0,"y":0.0},"p2":{"x":10.0,"y":10.0},"flipped":false}]"#
    );
    let cuts: CutList = serde_json::from_str(stored).unwrap();
    assert_eq!(cuts.len(), 2);
    assert!(cuts.as_slice()[0].flipped);

    let back = serde_json::to_string(&cuts).unwrap();
    assert_eq!(back, stored);
}

#[test]
fn test_records_without_flip_flag_still_load() {
    let cuts: CutList = serde_json::from_str(
        r#"[{"p1":{"x":1.0,"y":2.0},"p2":{"x":3.0,"y":4.0}}]"#,
    )
    .unwrap();
    assert!(!cuts.as_slice()[0].flipped);
}

#[test]
fn test_legacy_crop_migration() {
    assert!(CutList::from_legacy_crop(0.0, 0.0, 0.0, 0.0, true).is_empty());

    let cuts = CutList::from_legacy_crop(12.0, 8.0, 640.0, 480.0, false);
    assert_eq!(cuts.len(), 1);
    assert_eq!(cuts.as_slice()[0].p1, Point::new(12.0, 8.0));
    assert_eq!(cuts.as_slice()[0].p2, Point::new(640.0, 480.0));
}

#[test]
fn test_calibration_state_roundtrip() {
    let calib = CalibrationState {
        pixels_per_meter: Some(87.5),
        unit: CoordUnit::Degrees,
        origin: Point::new(14.0, -3.0),
        reference: Some(ReferenceAnchor::new(
            Point::new(153.02, -27.47),
            Point::new(400.0, 300.0),
            12.5,
        )),
    };
    let json = serde_json::to_string(&calib).unwrap();
    let back: CalibrationState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, calib);
}

#[test]
fn test_project_file_roundtrip_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("riverbank.skproj");

    let mut project = ProjectFile::new("Riverbank Substation");
    project.calibration.pixels_per_meter = Some(120.0);
    project.calibration.unit = CoordUnit::Degrees;

    let mut cuts = CutList::new();
    cuts.push(CutRecord::new(
        Point::new(-40.0, -90.0),
        Point::new(55.0, 90.0),
    ));
    cuts.flip_last();
    project.sheets.push(SheetEntry {
        name: "Overview".to_string(),
        width: 3508.0,
        height: 2480.0,
        placement: SheetPlacement::new(250.0, 125.0, -1.5),
        cuts,
    });

    project.save(&path).unwrap();
    let loaded = ProjectFile::load(&path).unwrap();

    assert_eq!(loaded.metadata.name, "Riverbank Substation");
    assert_eq!(loaded.calibration, project.calibration);
    assert_eq!(loaded.sheets.len(), 1);
    assert_eq!(loaded.sheets[0].placement, project.sheets[0].placement);
    assert_eq!(loaded.sheets[0].cuts, project.sheets[0].cuts);
    assert!(loaded.sheets[0].cuts.as_slice()[0].flipped);
}

#[test]
fn test_load_missing_file_reports_path() {
    let err = ProjectFile::load(std::path::Path::new("/nonexistent/nowhere.skproj")).unwrap_err();
    assert!(err.to_string().contains("nowhere.skproj"));
}
