//! End-to-end push/drain behaviour over a real source file.

mod common;

use common::source_file;
use errstack::{Diagnostic, DiagnosticStack, RenderStyle, Severity, drain};
use rstest::*;

const SOURCE: &str = "mount /dev/sda1\ncopy archive\nretry loop\n";

/// Pushes the three-record scenario onto a fresh stack.
fn scenario_stack(path: &str) -> DiagnosticStack<'_> {
    let mut stack = DiagnosticStack::new();
    let records = [
        (Severity::Warning, 1, None, "disk full"),
        (Severity::Error, 2, Some(6), "bad input"),
        (Severity::Notice, 3, None, "retrying"),
    ];
    for (severity, line, column, message) in records {
        stack
            .push(Diagnostic::user(
                severity,
                Some("copy"),
                path,
                line,
                column,
                format_args!("{message}"),
            ))
            .expect("push should succeed");
    }
    stack
}

#[rstest]
fn drain_replays_records_in_production_order() {
    let file = source_file(SOURCE);
    let path = file.path().to_str().expect("utf8 temp path").to_owned();
    let mut stack = scenario_stack(&path);

    let mut out = Vec::new();
    drain(&mut stack, &mut out, RenderStyle::Plain).expect("drain should succeed");
    let text = String::from_utf8(out).expect("output should be UTF-8");

    let warning = text.find("warning: disk full").expect("warning rendered");
    let error = text.find("error: bad input").expect("error rendered");
    let notice = text.find("notice: retrying").expect("notice rendered");
    assert!(warning < error && error < notice, "severity order: {text}");

    assert!(text.contains("copy archive\n     ^\n"), "caret block: {text}");

    assert!(stack.is_empty());
    assert_eq!(stack.capacity(), 4, "capacity settles at the shrink floor");
}

#[rstest]
fn stack_is_reusable_after_a_drain() {
    let file = source_file(SOURCE);
    let path = file.path().to_str().expect("utf8 temp path").to_owned();
    let mut stack = scenario_stack(&path);

    let mut out = Vec::new();
    drain(&mut stack, &mut out, RenderStyle::Plain).expect("drain should succeed");
    assert!(stack.is_empty());

    stack
        .push(Diagnostic::user(
            Severity::Notice,
            Some("copy"),
            &path,
            3,
            None,
            format_args!("second round"),
        ))
        .expect("push after drain should succeed");

    let mut again = Vec::new();
    drain(&mut stack, &mut again, RenderStyle::Plain).expect("second drain should succeed");
    let text = String::from_utf8(again).expect("output should be UTF-8");
    assert!(text.contains("notice: second round"), "rerun output: {text}");
}

#[rstest]
fn missing_source_never_aborts_a_drain() {
    let mut stack = scenario_stack("never/created/anywhere.src");

    let mut out = Vec::new();
    drain(&mut stack, &mut out, RenderStyle::Plain).expect("drain should succeed");
    let text = String::from_utf8(out).expect("output should be UTF-8");

    assert!(stack.is_empty());
    assert!(text.contains("warning: disk full"));
    assert!(!text.contains('^'), "no caret without source context: {text}");
}

#[rstest]
fn sub_task_stacks_merge_into_their_parent() {
    let file = source_file(SOURCE);
    let path = file.path().to_str().expect("utf8 temp path").to_owned();

    let mut parent = DiagnosticStack::new();
    parent
        .push(Diagnostic::user(
            Severity::Warning,
            Some("mount"),
            &path,
            1,
            None,
            format_args!("slow spin-up"),
        ))
        .expect("push should succeed");

    let mut child = scenario_stack(&path);
    parent.merge(&mut child).expect("merge should succeed");
    assert!(child.is_empty());
    assert_eq!(parent.len(), 4);

    let mut out = Vec::new();
    drain(&mut parent, &mut out, RenderStyle::Plain).expect("drain should succeed");
    let text = String::from_utf8(out).expect("output should be UTF-8");
    let first = text.find("warning: slow spin-up").expect("parent record");
    let second = text.find("warning: disk full").expect("merged record");
    assert!(first < second, "parent records precede merged ones: {text}");
}
