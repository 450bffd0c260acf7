//! Tests for output renderers and the row guard.

use super::*;
use crate::test_support::{RecordingSink, SinkEvent};

fn render<S, F>(sink: S, rows: F) -> S
where
    S: OutputSink,
    F: FnOnce(&mut S) -> io::Result<()>,
{
    let mut sink = sink;
    rows(&mut sink).unwrap();
    sink
}

fn text(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes).unwrap()
}

/// One source with a value, one blank, another value.
fn mixed_row<S: OutputSink>(sink: &mut S) -> io::Result<()> {
    sink.begin_row("doc1")?;
    sink.emit_value("hello")?;
    sink.emit_blank()?;
    sink.emit_value("world")?;
    sink.end_row()
}

// =========================================================================
// PrefixedOutput
// =========================================================================

#[test]
fn test_prefixed_writes_label_and_value_per_line() {
    let out = render(PrefixedOutput::new(Vec::new()), mixed_row).into_inner();

    assert_eq!(text(out), "doc1:hello\ndoc1:world\n");
}

#[test]
fn test_prefixed_blanks_produce_empty_values() {
    let out = render(PrefixedOutput::new(Vec::new()).with_blanks(true), mixed_row).into_inner();

    assert_eq!(text(out), "doc1:hello\ndoc1:\ndoc1:world\n");
}

#[test]
fn test_prefixed_only_lists_blanks() {
    let sink = PrefixedOutput::new(Vec::new()).with_blanks(true).with_only(true);
    let out = render(sink, mixed_row).into_inner();

    assert_eq!(text(out), "doc1:\n");
}

#[test]
fn test_prefixed_only_without_blanks_is_ignored() {
    let sink = PrefixedOutput::new(Vec::new()).with_only(true);
    let out = render(sink, mixed_row).into_inner();

    assert_eq!(text(out), "doc1:hello\ndoc1:world\n");
}

#[test]
fn test_prefixed_without_title() {
    let sink = PrefixedOutput::new(Vec::new()).with_no_title(true);
    let out = render(sink, mixed_row).into_inner();

    assert_eq!(text(out), "hello\nworld\n");
}

#[test]
fn test_prefixed_empty_label_has_no_prefix() {
    let out = render(PrefixedOutput::new(Vec::new()), |sink| {
        sink.begin_row("")?;
        sink.emit_value("bare")?;
        sink.end_row()
    })
    .into_inner();

    assert_eq!(text(out), "bare\n");
}

#[test]
fn test_prefixed_custom_separator_and_relabel() {
    let sink = PrefixedOutput::new(Vec::new()).with_separator(" => ");
    let out = render(sink, |sink| {
        sink.begin_row("a.xml")?;
        sink.emit_value("1")?;
        sink.end_row()?;
        sink.begin_row("b.xml")?;
        sink.emit_value("2")?;
        sink.end_row()
    })
    .into_inner();

    assert_eq!(text(out), "a.xml => 1\nb.xml => 2\n");
}

// =========================================================================
// DelimitedOutput
// =========================================================================

#[test]
fn test_delimited_row() {
    let out = render(DelimitedOutput::new(Vec::new()), mixed_row).into_inner();

    assert_eq!(text(out), "doc1\thello\t\tworld\n");
}

#[test]
fn test_delimited_custom_delimiter() {
    let out = render(DelimitedOutput::new(Vec::new()).with_delimiter("|"), mixed_row).into_inner();

    assert_eq!(text(out), "doc1|hello||world\n");
}

#[test]
fn test_delimited_writes_cells_verbatim() {
    let out = render(DelimitedOutput::new(Vec::new()), |sink| {
        sink.begin_row("x")?;
        sink.emit_value("say \"hi\"")?;
        sink.end_row()
    })
    .into_inner();

    assert_eq!(text(out), "x\tsay \"hi\"\n");
}

// =========================================================================
// QuotedOutput
// =========================================================================

#[test]
fn test_quoted_row() {
    let out = render(QuotedOutput::new(Vec::new()), mixed_row).into_inner();

    assert_eq!(text(out), "\"doc1\",\"hello\",\"\",\"world\"\n");
}

#[test]
fn test_quoted_doubles_embedded_quotes() {
    let out = render(QuotedOutput::new(Vec::new()), |sink| {
        sink.begin_row("a\"b")?;
        sink.emit_value("say \"hi\"")?;
        sink.end_row()
    })
    .into_inner();

    assert_eq!(text(out), "\"a\"\"b\",\"say \"\"hi\"\"\"\n");
}

#[test]
fn test_table_renderers_agree_on_cell_count() {
    let delimited = text(render(DelimitedOutput::new(Vec::new()), mixed_row).into_inner());
    let quoted = text(render(QuotedOutput::new(Vec::new()), mixed_row).into_inner());

    assert_eq!(delimited.lines().count(), quoted.lines().count());
    assert_eq!(
        delimited.trim_end().split('\t').count(),
        quoted.trim_end().split(',').count()
    );
}

// =========================================================================
// RowGuard
// =========================================================================

#[test]
fn test_guard_finish_ends_row_once() {
    let mut sink = RecordingSink::default();

    let mut row = RowGuard::begin(&mut sink, "doc").unwrap();
    row.value("v").unwrap();
    row.blank().unwrap();
    row.finish().unwrap();

    assert_eq!(
        sink.events,
        vec![
            SinkEvent::Begin("doc".to_string()),
            SinkEvent::Value("v".to_string()),
            SinkEvent::Blank,
            SinkEvent::End,
        ]
    );
}

#[test]
fn test_guard_drop_ends_abandoned_row() {
    let mut sink = RecordingSink::failing();

    let result = (|| -> io::Result<()> {
        let mut row = RowGuard::begin(&mut sink, "doc")?;
        row.value("boom")?;
        row.finish()
    })();

    assert!(result.is_err());
    assert_eq!(sink.count(&SinkEvent::End), 1);
    assert!(sink.rows()[0].ended);
}

#[test]
fn test_guard_works_through_trait_object() {
    let mut sink = RecordingSink::default();
    let dynamic: &mut dyn OutputSink = &mut sink;

    let row = RowGuard::begin(dynamic, "doc").unwrap();
    drop(row);

    assert_eq!(sink.count(&SinkEvent::Begin(String::new())), 1);
    assert_eq!(sink.count(&SinkEvent::End), 1);
}
