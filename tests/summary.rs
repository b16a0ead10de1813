// tests/summary.rs
use std::fs;
use std::path::PathBuf;

use pitch_scrape::cli::{panel_reports, parse_args, summary, Command, PanelSet, Status};
use pitch_scrape::config::options::PlotOptions;
use pitch_scrape::error::{Error, SelectError};

fn write(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let p = dir.path().join(name);
    fs::write(&p, body).unwrap();
    p
}

const LEFT: &str = "\
batter,ball_type,runs,bounce_x,bounce_y
IYER,Seam,4,5.0,0.1
IYER,Seam,0,9.0,0.2
IYER,Spin,1,3.0,0.0
";

const RIGHT: &str = "\
batter,ball_type,runs,bounce_x,bounce_y
GILL,Spin,6,6.5,0.3
GILL,Spin,-1,1.0,-0.1
GILL,Spin,0,7.5,0.0
";

fn plot(args: &str) -> (PlotOptions, PanelSet) {
    let argv = std::iter::once("summary").chain(args.split_whitespace()).map(String::from);
    match parse_args(argv) {
        Ok(Command::Summary(o, set)) => (o, set),
        _ => panic!("expected summary for {args:?}"),
    }
}

#[test]
fn panels_read_their_own_file_and_batter() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(&dir, "a.csv", LEFT);
    let b = write(&dir, "b.csv", RIGHT);

    let (opts, set) = plot(&format!(
        "-f {} -b IYER --file2 {} --batter2 GILL",
        a.display(),
        b.display()
    ));
    let reports = panel_reports(&opts, set).unwrap();
    assert_eq!(reports.len(), 2);

    let left = reports[0].lengths.as_ref().unwrap();
    assert_eq!(reports[0].batter, "IYER");
    assert_eq!(left.total, 2);
    assert_eq!(left.get("full").unwrap().total, 1);

    let right = reports[1].lengths.as_ref().unwrap();
    assert_eq!(reports[1].batter, "GILL");
    assert_eq!(right.total, 3);
    assert_eq!(right.get("back of length").unwrap().total, 1);
    assert_eq!(right.get("short").unwrap().total, 1);
    assert_eq!(right.get("yorker").unwrap().wickets(), 1);

    assert_eq!(summary(&opts, set).unwrap(), Status::Clean);
}

#[test]
fn right_panel_defaults_to_left_source() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(&dir, "a.csv", LEFT);

    // GILL is not in a.csv: the right side reads the left file.
    let (opts, set) = plot(&format!("-f {} -b IYER --batter2 GILL", a.display()));
    let reports = panel_reports(&opts, set).unwrap();
    assert_eq!(reports[0].lengths.as_ref().unwrap().total, 2);
    assert_eq!(
        reports[1].lengths,
        Err(SelectError::Empty { batter: "GILL".into(), ball_type: "Spin".into() })
    );
}

#[test]
fn one_empty_panel_is_still_clean() {
    let dir = tempfile::tempdir().unwrap();
    let b = write(&dir, "b.csv", RIGHT);

    // GILL only faced spin.
    let (opts, set) = plot(&format!("-f {} -b GILL", b.display()));
    assert_eq!(set, PanelSet::Both);
    let reports = panel_reports(&opts, set).unwrap();
    assert!(reports[0].lengths.is_err());
    assert!(reports[1].lengths.is_ok());
    assert_eq!(summary(&opts, set).unwrap(), Status::Clean);
}

#[test]
fn no_panel_to_show_is_incomplete() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(&dir, "a.csv", LEFT);

    let (opts, set) = plot(&format!("-f {} -b NOBODY", a.display()));
    assert_eq!(summary(&opts, set).unwrap(), Status::Incomplete);

    let (opts, set) = plot(&format!("-f {} -b IYER --ball-type Wrist", a.display()));
    assert_eq!(set, PanelSet::First);
    assert_eq!(panel_reports(&opts, set).unwrap().len(), 1);
    assert_eq!(summary(&opts, set).unwrap(), Status::Incomplete);
}

#[test]
fn unreadable_second_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let a = write(&dir, "a.csv", LEFT);
    let missing = dir.path().join("nope.csv");

    let (opts, set) = plot(&format!("-f {} -b IYER --file2 {}", a.display(), missing.display()));
    assert!(matches!(summary(&opts, set), Err(Error::Load(_))));
}
