//! Tests for line scanning.

use super::*;

const ABCD: &[u8] = b"a\nb\nc\nd\n";

fn text(scan: Scan<Line>) -> String {
    scan.into_item().expect("expected a line").into_text()
}

// ===== read_forward =====

#[test]
fn read_forward_returns_lines_in_order() {
    let mut scanner = LineScanner::new(ABCD);
    assert_eq!(text(scanner.read_forward()), "a");
    assert_eq!(scanner.cursor(), 2);
    assert_eq!(text(scanner.read_forward()), "b");
    assert_eq!(text(scanner.read_forward()), "c");
    assert_eq!(text(scanner.read_forward()), "d");
    assert_eq!(scanner.cursor(), ABCD.len());
    assert_eq!(scanner.read_forward(), Scan::EndOfFile);
}

#[test]
fn read_forward_at_end_returns_eof_without_moving() {
    let mut scanner = LineScanner::at(ABCD, ABCD.len());
    assert_eq!(scanner.read_forward(), Scan::EndOfFile);
    assert_eq!(scanner.cursor(), ABCD.len());
    assert_eq!(scanner.read_forward(), Scan::EndOfFile);
    assert_eq!(scanner.cursor(), ABCD.len());
}

#[test]
fn read_forward_tags_unterminated_final_line() {
    let mut scanner = LineScanner::new(b"one\ntwo");
    let first = scanner.read_forward().into_item().unwrap();
    assert!(first.is_terminated());
    let last = scanner.read_forward().into_item().unwrap();
    assert_eq!(last.text(), "two");
    assert!(!last.is_terminated());
    assert_eq!(scanner.read_forward(), Scan::EndOfFile);
}

#[test]
fn read_forward_terminated_last_line_is_not_partial() {
    let mut scanner = LineScanner::at(ABCD, 6);
    let last = scanner.read_forward().into_item().unwrap();
    assert_eq!(last.text(), "d");
    assert!(last.is_terminated());
}

#[test]
fn read_forward_treats_carriage_return_as_boundary() {
    let mut scanner = LineScanner::new(b"x\r\ny");
    assert_eq!(text(scanner.read_forward()), "x");
    assert_eq!(text(scanner.read_forward()), "");
    assert_eq!(text(scanner.read_forward()), "y");
}

#[test]
fn read_forward_returns_empty_lines() {
    let mut scanner = LineScanner::new(b"\n\nz");
    assert_eq!(text(scanner.read_forward()), "");
    assert_eq!(text(scanner.read_forward()), "");
    assert_eq!(text(scanner.read_forward()), "z");
}

#[test]
fn read_forward_on_empty_view_is_eof() {
    let mut scanner = LineScanner::new(b"");
    assert_eq!(scanner.read_forward(), Scan::EndOfFile);
}

#[test]
fn read_forward_decodes_invalid_utf8_lossily() {
    let mut scanner = LineScanner::new(b"ok \xff\n");
    assert_eq!(text(scanner.read_forward()), "ok \u{fffd}");
}

// ===== read_backward =====

#[test]
fn read_backward_from_end_returns_lines_in_reverse() {
    let mut scanner = LineScanner::at(ABCD, ABCD.len());
    assert_eq!(text(scanner.read_backward()), "d");
    assert_eq!(scanner.cursor(), 6);
    assert_eq!(text(scanner.read_backward()), "c");
    assert_eq!(text(scanner.read_backward()), "b");
    assert_eq!(text(scanner.read_backward()), "a");
    assert_eq!(scanner.cursor(), 0);
    assert_eq!(scanner.read_backward(), Scan::BeginOfFile);
}

#[test]
fn read_backward_at_zero_returns_bof_without_moving() {
    let mut scanner = LineScanner::new(ABCD);
    assert_eq!(scanner.read_backward(), Scan::BeginOfFile);
    assert_eq!(scanner.cursor(), 0);
}

#[test]
fn read_backward_returns_unterminated_last_line() {
    let bytes = b"one\ntwo";
    let mut scanner = LineScanner::at(bytes, bytes.len());
    let last = scanner.read_backward().into_item().unwrap();
    assert_eq!(last.text(), "two");
    assert!(!last.is_terminated());
    assert_eq!(scanner.cursor(), 4);
    assert_eq!(text(scanner.read_backward()), "one");
}

#[test]
fn read_backward_handles_empty_first_line() {
    let bytes = b"\nx\n";
    let mut scanner = LineScanner::at(bytes, bytes.len());
    assert_eq!(text(scanner.read_backward()), "x");
    assert_eq!(scanner.cursor(), 1);
    assert_eq!(text(scanner.read_backward()), "");
    assert_eq!(scanner.cursor(), 0);
    assert_eq!(scanner.read_backward(), Scan::BeginOfFile);
}

#[test]
fn read_backward_does_not_leak_previous_line_into_first_line() {
    let bytes = b"x\nabc";
    let mut scanner = LineScanner::at(bytes, bytes.len());
    assert_eq!(text(scanner.read_backward()), "abc");
    assert_eq!(text(scanner.read_backward()), "x");
}

#[test]
fn forward_then_backward_returns_same_line() {
    let mut scanner = LineScanner::at(ABCD, 2);
    let forward = text(scanner.read_forward());
    let backward = text(scanner.read_backward());
    assert_eq!(forward, backward);
    assert_eq!(scanner.cursor(), 2);
}

// ===== skip_forward / skip_backward =====

#[test]
fn skip_forward_reports_success_when_all_lines_exist() {
    let mut scanner = LineScanner::new(ABCD);
    assert!(scanner.skip_forward(2));
    assert_eq!(scanner.cursor(), 4);
    assert!(scanner.skip_forward(2));
    assert_eq!(scanner.cursor(), ABCD.len());
}

#[test]
fn skip_forward_reports_failure_past_end() {
    let mut scanner = LineScanner::new(ABCD);
    assert!(!scanner.skip_forward(5));
    assert_eq!(scanner.cursor(), ABCD.len());
}

#[test]
fn skip_forward_counts_unterminated_last_line() {
    let mut scanner = LineScanner::new(b"a\nb");
    assert!(scanner.skip_forward(2));
    assert!(scanner.is_at_underflow());
}

#[test]
fn skip_zero_lines_always_succeeds_in_place() {
    let mut scanner = LineScanner::at(ABCD, ABCD.len());
    assert!(scanner.skip_forward(0));
    assert!(scanner.skip_backward(0));
    assert_eq!(scanner.cursor(), ABCD.len());
}

#[test]
fn skip_backward_lands_on_line_starts() {
    let mut scanner = LineScanner::at(ABCD, ABCD.len());
    assert!(scanner.skip_backward(1));
    assert_eq!(scanner.cursor(), 6);
    assert!(scanner.skip_backward(2));
    assert_eq!(scanner.cursor(), 2);
    assert!(!scanner.skip_backward(2));
    assert_eq!(scanner.cursor(), 0);
}

// ===== count_lines_between / underflow =====

#[test]
fn count_lines_between_counts_lines_starting_in_range() {
    let scanner = LineScanner::new(ABCD);
    assert_eq!(scanner.count_lines_between(0, ABCD.len()), 4);
    assert_eq!(scanner.count_lines_between(2, 6), 2);
    assert_eq!(scanner.count_lines_between(4, 4), 0);
}

#[test]
fn count_lines_between_does_not_move_cursor() {
    let scanner = LineScanner::at(ABCD, 4);
    let _ = scanner.count_lines_between(0, ABCD.len());
    assert_eq!(scanner.cursor(), 4);
}

#[test]
fn count_lines_includes_partial_last_line() {
    assert_eq!(LineScanner::new(b"a\nb").count_lines(), 2);
    assert_eq!(LineScanner::new(b"a\nb\n").count_lines(), 2);
    assert_eq!(LineScanner::new(b"").count_lines(), 0);
    assert_eq!(LineScanner::new(b"\n").count_lines(), 1);
}

#[test]
fn underflow_only_at_end() {
    assert!(!LineScanner::at(ABCD, 7).is_at_underflow());
    assert!(LineScanner::at(ABCD, 8).is_at_underflow());
}

#[test]
#[should_panic(expected = "outside byte view")]
fn cursor_past_end_is_a_contract_violation() {
    let _ = LineScanner::at(ABCD, ABCD.len() + 1);
}

#[test]
#[should_panic(expected = "outside byte view")]
fn set_cursor_past_end_panics() {
    let mut scanner = LineScanner::new(b"abc");
    scanner.set_cursor(4);
}
