#![forbid(unsafe_code)]
use csv::ReaderBuilder;
use turnos::{
    build_grid_rows, render_filename, to_csv, AggregateOptions, DayRecord, GridLabels, Period,
    ScheduleAggregator, StaffId, StaffMember,
};

fn ana() -> StaffMember {
    StaffMember::new(StaffId::new("a1"), "Pérez, \"Ana\"").with_records(vec![
        DayRecord::shift(3, "CE", 0.0),
        DayRecord::novelty(3, "Licencia", 6.0),
    ])
}

#[test]
fn csv_quotes_every_field() {
    let period = Period::new(2025, 2).unwrap();
    let aggregator = ScheduleAggregator::new(AggregateOptions {
        hours_per_shift: 12.0,
        include_novelties: true,
        ..AggregateOptions::default()
    });
    let csv = aggregator.to_csv(period, &[ana()]).unwrap();

    insta::assert_snapshot!(csv, @r#"
    "Profesional","1","2","3","4","5","6","7","8","9","10","11","12","13","14","15","16","17","18","19","20","21","22","23","24","25","26","27","28","Total Horas"
    "Pérez, ""Ana""","","","CE","","","","","","","","","","","","","","","","","","","","","","","","","",""
    "Horas","0","0","12","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","12"
    "Justificación","","","Licencia","","","","","","","","","","","","","","","","","","","","","","","","","",""
    "Horas novedad","0","0","6","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","6"
    "Total horas por día","0","0","18","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","0","18"
    "#);
    assert!(!csv.ends_with('\n'));
}

#[test]
fn csv_reads_back_to_the_same_cells() {
    let period = Period::new(2024, 4).unwrap();
    let staff = vec![
        ana(),
        StaffMember::new(StaffId::new("b"), "O'Brien").with_records(vec![
            DayRecord::shift(30, "A,B", 0.0),
            DayRecord::novelty(30, "dijo \"no\"", 1.5),
        ]),
    ];
    let labels = GridLabels::default();
    let rows = build_grid_rows(period, &staff, 7.5, true);
    let csv = to_csv(&rows, period.days(), &labels).unwrap();

    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .from_reader(csv.as_bytes());
    let records: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(records.len(), rows.len() + 1);

    let header = &records[0];
    assert_eq!(header.len(), 32);
    assert_eq!(&header[0], "Profesional");
    assert_eq!(&header[30], "30");
    assert_eq!(&header[31], "Total Horas");

    for (row, rec) in rows.iter().zip(records.iter().skip(1)) {
        assert_eq!(&rec[0], row.label);
        for (i, cell) in row.cells.iter().enumerate() {
            assert_eq!(rec[i + 1], cell.to_string());
        }
        assert_eq!(rec[31], row.total.to_string());
    }

    let obrien = &records[5];
    assert_eq!(&obrien[0], "O'Brien");
    assert_eq!(&obrien[30], "A,B");
    assert_eq!(&records[7][30], "dijo \"no\"");
    assert_eq!(&records[6][30], "7.5");
}

#[test]
fn export_names_file_from_period() {
    let period = Period::new(2025, 2).unwrap();
    assert_eq!(
        render_filename("turnos_{{month}}_{{year}}.csv", period),
        "turnos_febrero_2025.csv"
    );
    assert_eq!(render_filename("plain.csv", period), "plain.csv");

    let export = ScheduleAggregator::default()
        .export(period, &[], "{{year}}-{{month}}.csv")
        .unwrap();
    assert_eq!(export.file_name, "2025-febrero.csv");
    assert!(export.contents.starts_with("\"Profesional\",\"1\","));
    assert_eq!(export.contents.lines().count(), 1);
}
