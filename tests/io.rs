#![forbid(unsafe_code)]
use std::fs;
use tempfile::tempdir;
use turnos::{
    io, DayRecord, DirectorySink, ExportSink, JsonSnapshotStore, Period, ScheduleSnapshot,
    SnapshotStore, StaffId, StaffMember,
};

#[test]
fn import_groups_rows_by_staff() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.csv");
    fs::write(
        &path,
        "staff_id,display_name,day,is_novelty,attention_type_code,hours\n\
         s1,Ana,1,false,CE,8\n\
         s2,Bruno,1,,UR,\n\
         s1,Ana,2,sí,Licencia,4.5\n\
         ,Carla,3,0,HO,6\n",
    )
    .unwrap();

    let staff = io::import_records_csv(&path, Period::new(2025, 2).unwrap()).unwrap();
    assert_eq!(staff.len(), 3);
    assert_eq!(staff[0].id, StaffId::new("s1"));
    assert_eq!(staff[0].records.len(), 2);
    assert!(staff[0].records[1].is_novelty);
    assert_eq!(staff[0].records[1].hours, 4.5);
    assert_eq!(staff[1].records[0].hours, 0.0);
    assert_eq!(staff[2].display_name, "Carla");
    assert!(!staff[2].id.as_str().is_empty());
}

#[test]
fn import_rejects_days_outside_period() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.csv");
    fs::write(
        &path,
        "staff_id,display_name,day,is_novelty,attention_type_code,hours\n\
         s1,Ana,29,false,CE,8\n",
    )
    .unwrap();

    assert!(io::import_records_csv(&path, Period::new(2025, 2).unwrap()).is_err());
    assert!(io::import_records_csv(&path, Period::new(2024, 2).unwrap()).is_ok());
}

#[test]
fn snapshot_store_roundtrip() {
    let dir = tempdir().unwrap();
    let store = JsonSnapshotStore::open(dir.path().join("snapshot.json")).unwrap();
    let mut snapshot = ScheduleSnapshot::new(Period::new(2024, 2).unwrap());
    snapshot.facility = Some("Hospital Central".into());
    snapshot.staff.push(
        StaffMember::new(StaffId::new("s1"), "Ana")
            .with_records(vec![DayRecord::shift(29, "CE", 8.0)]),
    );

    store.save(&snapshot).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded, snapshot);
    assert!(loaded.invalid_records().is_empty());
}

#[test]
fn snapshot_with_invalid_month_fails_to_load() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    fs::write(&path, r#"{"period":{"year":2025,"month":13},"staff":[]}"#).unwrap();
    let store = JsonSnapshotStore::open(&path).unwrap();
    assert!(store.load().is_err());
}

#[test]
fn import_keeps_ids_and_names_apart() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.csv");
    fs::write(
        &path,
        "staff_id,display_name,day,is_novelty,attention_type_code,hours\n\
         s1,Ana,1,false,CE,8\n\
         ,s1,2,false,UR,8\n\
         s1,Ana,3,false,HO,8\n",
    )
    .unwrap();

    let staff = io::import_records_csv(&path, Period::new(2025, 2).unwrap()).unwrap();
    assert_eq!(staff.len(), 2);
    assert_eq!(staff[0].id, StaffId::new("s1"));
    assert_eq!(staff[0].records.len(), 2);
    assert_eq!(staff[1].display_name, "s1");
    assert_ne!(staff[1].id, StaffId::new("s1"));
}

#[test]
fn import_errors_point_at_the_record_line() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("records.csv");
    fs::write(
        &path,
        "staff_id,display_name,day,is_novelty,attention_type_code,hours\n\
         s1,\"Ana\nMaría\",1,false,CE,8\n\
         s2,Bruno,x,false,CE,8\n",
    )
    .unwrap();

    let err = io::import_records_csv(&path, Period::new(2025, 2).unwrap()).unwrap_err();
    assert!(format!("{err:#}").contains("line 4"), "{err:#}");
}

#[test]
fn directory_sink_writes_export() {
    let dir = tempdir().unwrap();
    let sink = DirectorySink::new(dir.path().join("out"));
    let path = sink.write("turnos_enero_2025.csv", "\"a\"").unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "\"a\"");
    assert!(sink.write("../escape.csv", "x").is_err());
}
