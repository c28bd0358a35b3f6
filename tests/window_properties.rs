//! Property-based tests for the scrolling window.
//!
//! Random files built from a tiny alphabet (including bare `\r` and `\r\n`)
//! are driven through random operation sequences. After every operation the
//! window must describe a contiguous run of the file's lines no longer than
//! its spread limit.

use logscroll::model::Line;
use logscroll::scanner::LineScanner;
use logscroll::source::ScrollingWindow;
use proptest::prelude::*;
use std::fs;

// ===== Strategies =====

#[derive(Debug, Clone, Copy)]
enum Op {
    StepForward,
    StepBackward,
    LeapForward,
    LeapBackward,
    JumpToBeginning,
    JumpToEnd,
    SetTop(usize),
}

fn arb_contents() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(
        prop_oneof![Just(b'a'), Just(b'b'), Just(b'\n'), Just(b'\r')],
        0..64,
    )
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::StepForward),
        3 => Just(Op::StepBackward),
        1 => Just(Op::LeapForward),
        1 => Just(Op::LeapBackward),
        1 => Just(Op::JumpToBeginning),
        1 => Just(Op::JumpToEnd),
        1 => (1usize..40).prop_map(Op::SetTop),
    ]
}

// ===== Helpers =====

/// Every boundary byte ends a line; a non-empty tail is one more line.
fn reference_lines(bytes: &[u8]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = Vec::new();
    for &byte in bytes {
        if byte == b'\n' || byte == b'\r' {
            lines.push(String::from_utf8_lossy(&current).into_owned());
            current.clear();
        } else {
            current.push(byte);
        }
    }
    if !current.is_empty() {
        lines.push(String::from_utf8_lossy(&current).into_owned());
    }
    lines
}

fn texts(lines: Vec<Line>) -> Vec<String> {
    lines.into_iter().map(Line::into_text).collect()
}

fn apply(window: &mut ScrollingWindow, op: Op) {
    match op {
        Op::StepForward => {
            window.step_forward();
        }
        Op::StepBackward => {
            window.step_backward();
        }
        Op::LeapForward => {
            window.leap_forward();
        }
        Op::LeapBackward => {
            window.leap_backward();
        }
        Op::JumpToBeginning => window.jump_to_beginning_of_file(),
        Op::JumpToEnd => window.jump_to_end_of_file(),
        Op::SetTop(line) => {
            // Out-of-range lines are rejected and leave the window alone.
            let _ = window.set_top_line_pos(line);
        }
    }
}

// ===== Properties =====

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn window_always_holds_a_contiguous_bounded_run(
        contents in arb_contents(),
        limit in 1usize..6,
        ops in prop::collection::vec(arb_op(), 0..40),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.log");
        fs::write(&path, &contents).unwrap();
        let expected = reference_lines(&contents);

        let mut window = ScrollingWindow::open(&path, limit).unwrap();

        for op in ops {
            apply(&mut window, op);

            prop_assert!(window.top_line_pos() <= window.bot_line_pos());
            prop_assert!(window.bot_line_pos() <= window.len());
            prop_assert!(window.effective_spread() <= window.spread_limit());

            let first = LineScanner::new(&contents).count_lines_between(0, window.top_line_pos());
            let inner = texts(window.inner_lines());
            prop_assert_eq!(inner.len(), window.effective_spread(), "after {:?}", op);
            prop_assert_eq!(&inner[..], &expected[first..first + inner.len()], "after {:?}", op);
        }
    }

    #[test]
    fn peeks_are_idempotent(
        contents in arb_contents(),
        limit in 1usize..6,
        ops in prop::collection::vec(arb_op(), 0..20),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.log");
        fs::write(&path, &contents).unwrap();

        let mut window = ScrollingWindow::open(&path, limit).unwrap();
        for op in ops {
            apply(&mut window, op);
        }

        let (top, bot) = (window.top_line_pos(), window.bot_line_pos());
        let forward = window.peek_forward();
        let backward = window.peek_backward();

        prop_assert_eq!(window.peek_forward(), forward.clone());
        prop_assert_eq!(window.peek_backward(), backward);
        prop_assert_eq!((window.top_line_pos(), window.bot_line_pos()), (top, bot));

        prop_assert_eq!(window.step_forward(), forward);
    }

    #[test]
    fn set_top_line_fills_from_requested_line(
        contents in arb_contents(),
        limit in 1usize..6,
        line in 1usize..40,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.log");
        fs::write(&path, &contents).unwrap();
        let expected = reference_lines(&contents);

        let mut window = ScrollingWindow::open(&path, limit).unwrap();
        prop_assert_eq!(window.line_count(), expected.len());

        let result = window.set_top_line_pos(line);
        if line > expected.len() {
            prop_assert!(result.is_err());
        } else {
            prop_assert!(result.is_ok());
            let end = (line - 1 + limit).min(expected.len());
            prop_assert_eq!(texts(window.inner_lines()), expected[line - 1..end].to_vec());
        }
    }

    #[test]
    fn leaps_fill_exactly_from_either_end(
        contents in arb_contents(),
        limit in 1usize..6,
    ) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prop.log");
        fs::write(&path, &contents).unwrap();
        let expected = reference_lines(&contents);
        let take = limit.min(expected.len());

        let mut window = ScrollingWindow::open(&path, limit).unwrap();

        window.jump_to_beginning_of_file();
        prop_assert_eq!(texts(window.leap_forward()), expected[..take].to_vec());

        window.jump_to_end_of_file();
        prop_assert_eq!(
            texts(window.leap_backward()),
            expected[expected.len() - take..].to_vec()
        );
    }
}
