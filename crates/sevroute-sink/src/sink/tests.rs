//! Behaviour tests for console and file sinks.

use std::fs;
use std::io::{self, Write};

use camino::Utf8PathBuf;
use rstest::{fixture, rstest};
use tempfile::TempDir;

use super::*;

struct BrokenWriter;

impl Write for BrokenWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[fixture]
fn workdir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

fn target(dir: &TempDir, name: &str) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf8 temp path")
}

#[test]
fn console_writes_exact_bytes() {
    let mut sink = Sink::console(Vec::new());
    sink.print("x").expect("print");
    let written = sink.into_console().expect("console sink");
    assert_eq!(written, b"x");
}

#[test]
fn console_does_not_append_newline() {
    let mut sink = Sink::console(Vec::new());
    sink.print("first").expect("print");
    sink.print("second").expect("print");
    assert_eq!(sink.into_console().expect("console sink"), b"firstsecond");
}

#[rstest]
fn file_holds_exactly_the_payload(workdir: TempDir) {
    let path = target(&workdir, "DataFile.txt");
    let mut sink: Sink<Vec<u8>> = Sink::file(path.clone());
    sink.print("x").expect("print");
    assert_eq!(fs::read_to_string(&path).expect("read back"), "x");
}

#[rstest]
fn file_discards_previous_content(workdir: TempDir) {
    let path = target(&workdir, "DataFile.txt");
    fs::write(&path, "a much longer previous payload").expect("seed file");
    let mut sink: Sink<Vec<u8>> = Sink::file(path.clone());
    sink.print("x").expect("print");
    assert_eq!(fs::read_to_string(&path).expect("read back"), "x");
}

#[rstest]
fn file_open_failure_is_surfaced(workdir: TempDir) {
    let path = target(&workdir, "missing/DataFile.txt");
    let mut sink: Sink<Vec<u8>> = Sink::file(path.clone());
    let error = sink.print("x").expect_err("open must fail");
    assert!(matches!(error, SinkError::Open { .. }));
    assert_eq!(error.path(), Some(path.as_path()));
}

#[test]
fn console_failure_is_surfaced() {
    let mut sink = Sink::console(BrokenWriter);
    let error = sink.print("x").expect_err("write must fail");
    assert!(matches!(error, SinkError::Console(_)));
    assert!(error.path().is_none());
}

#[rstest]
#[case::console(Sink::console(Vec::new()), SinkKind::Console)]
#[case::file(Sink::file("DataFile.txt"), SinkKind::File)]
fn reports_kind(#[case] sink: Sink<Vec<u8>>, #[case] expected: SinkKind) {
    assert_eq!(sink.kind(), expected);
}

#[rstest]
fn print_all_reaches_every_sink(workdir: TempDir) {
    let path = target(&workdir, "DataFile.txt");
    let mut sinks = vec![Sink::console(Vec::new()), Sink::file(path.clone())];
    print_all(&mut sinks, "Command is everywhere!\n").expect("print all");

    assert_eq!(
        fs::read_to_string(&path).expect("read back"),
        "Command is everywhere!\n"
    );
    let console = sinks.swap_remove(0).into_console().expect("console sink");
    assert_eq!(console, b"Command is everywhere!\n");
}

#[rstest]
fn print_all_stops_at_first_failure(workdir: TempDir) {
    let missing = target(&workdir, "missing/DataFile.txt");
    let mut sinks = vec![Sink::file(missing), Sink::console(Vec::new())];
    assert!(print_all(&mut sinks, "x").is_err());
    let console = sinks.swap_remove(1).into_console().expect("console sink");
    assert!(console.is_empty());
}
