use std::io::Write;

use rstest::rstest;
use tempfile::NamedTempFile;
use temp_bar_chart::{
    ChartError, ChartMode, ConfigError, Scale, chart_file, chart_file_with, read_temperatures,
};

fn temp_file(text: &str) -> NamedTempFile {
    let mut f = NamedTempFile::new().unwrap();
    f.write_all(text.as_bytes()).unwrap();
    f
}

fn path(f: &NamedTempFile) -> String {
    f.path().display().to_string()
}

#[test]
fn rejects_out_of_range_and_keeps_order() {
    let f = temp_file("50 -10 200 72");
    let (report, text) = chart_file(&path(&f), ChartMode::Magnitude).unwrap();

    assert_eq!(report.rejected.len(), 1);
    assert_eq!(report.rejected[0].value, 200);

    let rows: Vec<_> = text.lines().filter(|l| l.starts_with("Hour")).collect();
    assert_eq!(
        rows,
        vec![
            format!("Hour  1 |   50°F |{}", "*".repeat(27)),
            format!("Hour  2 |  -10°F |{}", "*".repeat(7)),
            format!("Hour  3 |   72°F |{}", "*".repeat(34)),
        ]
    );
    assert!(text.contains("Total hours recorded: 3"));
}

#[rstest]
#[case::magnitude(ChartMode::Magnitude)]
#[case::centered(ChartMode::Centered)]
fn row_count_matches_input(#[case] mode: ChartMode) {
    let values: Vec<i32> = (-30..=120).step_by(7).collect();
    let body = values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    let f = temp_file(&body);
    let (report, text) = chart_file(&path(&f), mode).unwrap();

    assert_eq!(report.readings.len(), values.len());
    let rows = text.lines().filter(|l| l.contains("°F |")).count();
    assert_eq!(rows, values.len());
    assert!(text.contains(&format!("Total hours recorded: {}", values.len())));
}

#[test]
fn same_file_renders_identically() {
    let f = temp_file("12 -4 0 99\n7");
    let (_, first) = chart_file(&path(&f), ChartMode::Centered).unwrap();
    let (_, second) = chart_file(&path(&f), ChartMode::Centered).unwrap();
    assert_eq!(first, second);
}

#[rstest]
#[case::empty("")]
#[case::blank("   \n \t \n")]
#[case::all_rejected("500 -100")]
#[case::leading_garbage("hello 10 20")]
fn no_valid_data_is_empty_result(#[case] body: &str) {
    let f = temp_file(body);
    let err = chart_file(&path(&f), ChartMode::Magnitude).unwrap_err();
    assert!(matches!(err, ChartError::EmptyResult));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn missing_file_is_source_unavailable() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("gone.txt").display().to_string();
    let err = chart_file(&missing, ChartMode::Magnitude).unwrap_err();
    assert!(matches!(err, ChartError::SourceUnavailable { ref path, .. } if *path == missing));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn centered_zero_is_a_lone_axis() {
    let f = temp_file("0");
    let (_, text) = chart_file(&path(&f), ChartMode::Centered).unwrap();
    let row = text.lines().find(|l| l.starts_with("   0°F")).unwrap();
    assert_eq!(row, format!("   0°F |{}|", " ".repeat(10)));
}

#[test]
fn custom_scale_via_builder() {
    let f = temp_file("-5 0 5 50 51");
    let (report, text) = chart_file_with(
        &path(&f),
        Scale::builder().range(0..=50).degrees_per_star(5),
        ChartMode::Magnitude,
    )
    .unwrap();
    assert_eq!(report.rejected.len(), 2);
    assert!(text.contains("Range: 0°F to 50°F"));
    assert!(text.contains(&format!("Hour  3 |   50°F |{}", "*".repeat(10))));
}

#[test]
fn bad_scale_is_a_config_error() {
    let f = temp_file("1");
    let err = chart_file_with(
        &path(&f),
        Scale::builder().range(10..=0),
        ChartMode::Magnitude,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        ChartError::Config(ConfigError::InvalidRange { low: 10, high: 0 })
    ));
}

#[test]
fn boundary_values() {
    let r = read_temperatures("-31 -30 120 121".as_bytes(), &Scale::default()).unwrap();
    assert_eq!(r.values().collect::<Vec<_>>(), vec![-30, 120]);
    let rejected: Vec<_> = r.rejected.iter().map(|x| x.value).collect();
    assert_eq!(rejected, vec![-31, 121]);
}
