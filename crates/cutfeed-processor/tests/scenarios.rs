use cutfeed_core::{Program, Thickness};
use cutfeed_processor::{
    compute_totals, discover_parts, rewrite, rewrite_with_report, Decision, PartScope,
    RewriteLimits,
};

/// One cutting block: spindle on, a feed move at the sentinel feed, spindle off
fn block(tag: &str) -> String {
    format!("M03 S18000\nG1 X0 Y0 F1500.0 ({})\nG1 X10 Y0\nM05\n", tag)
}

fn part(name: &str, events: usize) -> String {
    let mut text = format!("(Part: {})\n", name);
    for i in 1..=events {
        text.push_str(&block(&format!("{}-{}", name, i)));
    }
    text
}

fn rewritten_tags(program: &Program) -> Vec<String> {
    program
        .lines()
        .iter()
        .filter(|l| l.contains("F800.0"))
        .filter_map(|l| {
            let start = l.find('(')? + 1;
            let end = l.find(')')?;
            Some(l[start..end].to_string())
        })
        .collect()
}

#[test]
fn test_single_part_five_events_limit_two() {
    let program = Program::parse(&part("Lid", 5));
    let limits = RewriteLimits::new().with_limit("Lid", 2);
    let out = rewrite(&program, &Thickness::Mm8.feed_value(), &limits);
    assert_eq!(rewritten_tags(&out), vec!["Lid-1", "Lid-2", "Lid-4"]);
}

#[test]
fn test_two_parts_independent_cycles() {
    let text = format!("{}{}", part("foo", 3), part("bar", 2));
    let program = Program::parse(&text);
    let limits = RewriteLimits::new().with_limit("foo", 1).with_limit("bar", 5);

    let report = rewrite_with_report(&program, &Thickness::Mm8.feed_value(), &limits);

    let foo: Vec<_> = report.events_for("foo").map(|e| e.decision).collect();
    assert_eq!(foo, vec![Decision::Rewrite, Decision::Skip, Decision::Terminal]);
    let bar: Vec<_> = report.events_for("bar").map(|e| e.decision).collect();
    assert_eq!(bar, vec![Decision::Rewrite, Decision::Terminal]);

    assert_eq!(rewritten_tags(&report.program), vec!["foo-1", "bar-1"]);
}

#[test]
fn test_non_interference_across_parts() {
    let alone = Program::parse(&part("foo", 4));
    let mixed = Program::parse(&format!("{}{}", part("bar", 7), part("foo", 4)));
    let feed = Thickness::Mm5.feed_value();

    let foo_alone = rewrite_with_report(&alone, &feed, &RewriteLimits::new().with_limit("foo", 2));
    let foo_mixed = rewrite_with_report(
        &mixed,
        &feed,
        &RewriteLimits::new().with_limit("foo", 2).with_limit("bar", 1),
    );

    let alone: Vec<_> = foo_alone.events_for("foo").map(|e| e.decision).collect();
    let mixed: Vec<_> = foo_mixed.events_for("foo").map(|e| e.decision).collect();
    assert_eq!(alone, mixed);
}

#[test]
fn test_thickness_selects_replacement() {
    let program = Program::parse(&part("Lid", 2));
    let limits = RewriteLimits::new().with_limit("Lid", 1);

    let out = rewrite(&program, &Thickness::from_selector("8mm").feed_value(), &limits);
    assert!(out.to_text().contains("F800.0 (Lid-1)"));

    let out = rewrite(
        &program,
        &Thickness::from_selector("unrecognized-value").feed_value(),
        &limits,
    );
    assert!(out.to_text().contains("F1500.0 (Lid-1)"));
}

#[test]
fn test_copied_parts_share_counters() {
    let text = format!(
        "{}(Part: copiar de Lid [2])\n{}{}",
        part("Lid", 2),
        block("Lid-3"),
        block("Lid-4")
    );
    let program = Program::parse(&text);
    assert_eq!(compute_totals(&program).get("Lid"), 4);

    let limits = RewriteLimits::new().with_limit("Lid", 5);
    let out = rewrite(&program, &Thickness::Mm8.feed_value(), &limits);
    assert_eq!(rewritten_tags(&out), vec!["Lid-1", "Lid-2", "Lid-3"]);
}

#[test]
fn test_events_before_any_marker_use_unknown_limit() {
    let text = format!("{}{}{}", block("pre-1"), block("pre-2"), part("Lid", 1));
    let program = Program::parse(&text);
    assert_eq!(
        discover_parts(&program, PartScope::PerPart)
            .iter()
            .map(|p| p.as_str())
            .collect::<Vec<_>>(),
        vec!["UNKNOWN", "Lid"]
    );

    let limits = RewriteLimits::new().with_limit("UNKNOWN", 1).with_limit("Lid", 1);
    let out = rewrite(&program, &Thickness::Mm8.feed_value(), &limits);
    assert_eq!(rewritten_tags(&out), vec!["pre-1"]);
}

#[test]
fn test_program_without_events_is_unchanged() {
    let program = Program::parse("G21\n(Part: Lid)\nG1 X1 F1500\nM30\n");
    let out = rewrite(&program, &Thickness::Mm8.feed_value(), &RewriteLimits::new());
    assert_eq!(out, program);
}

#[test]
fn test_last_event_segment_keeps_sentinel() {
    let text = format!("{}{}", part("foo", 6), part("bar", 3));
    let program = Program::parse(&text);
    let limits = RewriteLimits::new().with_limit("foo", 9).with_limit("bar", 9);
    let out = rewrite(&program, &Thickness::Mm8.feed_value(), &limits);

    let text = out.to_text();
    assert!(text.contains("G1 X0 Y0 F1500.0 (foo-6)"));
    assert!(text.contains("G1 X0 Y0 F1500.0 (bar-3)"));
    assert_eq!(rewritten_tags(&out).len(), 5 + 2);
}
