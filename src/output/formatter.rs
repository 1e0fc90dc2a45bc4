use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{Evaluation, LineItem, MultiSubjectDetails};

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Scores are always shown with one decimal place ("25.0", "0.8").
/// Halves round away from zero, so 29.25 shows as "29.3".
pub fn format_points(points: f64) -> String {
    format!("{:.1}", (points * 10.0).round() / 10.0)
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate_text(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Total and per-category scores.
pub fn format_summary(evaluation: &Evaluation, use_colors: bool) -> String {
    let rows = [
        ("학습지도", evaluation.teaching),
        ("생활지도", evaluation.life),
        ("전문성개발", evaluation.dev),
        ("담당업무", evaluation.duty),
    ];

    let total = format_points(evaluation.total);
    let mut lines = vec![if use_colors {
        format!("총점: {}", total.bold())
    } else {
        format!("총점: {}", total)
    }];
    for (label, score) in rows {
        lines.push(format!("  {}: {}", label, format_points(score)));
    }
    lines.join("\n")
}

/// Breakdown rows: section | item | selected | formula | points | note.
/// The middle columns are truncated to the terminal width when attached to one.
pub fn format_breakdown(items: &[LineItem], use_colors: bool) -> String {
    if items.is_empty() {
        return "항목을 입력하면 계산 내역이 표시됩니다".to_string();
    }

    let term_width = get_terminal_width();
    let separator = " | ";

    items
        .iter()
        .map(|line| {
            let points = format!("{:>5}", format_points(line.points));
            let mut detail = format!(
                "{}{}{}{}{}",
                line.item, separator, line.selected, separator, line.formula
            );
            if !line.note.is_empty() {
                detail = format!("{}{}{}", detail, separator, line.note);
            }

            let fixed_width =
                line.section.chars().count() + points.chars().count() + separator.len() * 2;
            let detail = match term_width {
                Some(width) if width > fixed_width + 10 => {
                    truncate_text(&detail, width - fixed_width)
                }
                Some(_) => truncate_text(&detail, 20),
                None => detail,
            };

            if use_colors {
                format!(
                    "{}{}{}{}{}",
                    line.section.cyan(),
                    separator,
                    points.bold(),
                    separator,
                    detail
                )
            } else {
                format!(
                    "{}{}{}{}{}",
                    line.section, separator, points, separator, detail
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_warnings(warnings: &[String], use_colors: bool) -> Option<String> {
    if warnings.is_empty() {
        return None;
    }
    Some(
        warnings
            .iter()
            .map(|w| {
                if use_colors {
                    format!("{} {}", "!".yellow().bold(), w.yellow())
                } else {
                    format!("! {}", w)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// Normalized subject lists per semester. Hidden when no semester has any.
pub fn format_subject_details(details: &MultiSubjectDetails) -> Option<String> {
    if details.is_empty() {
        return None;
    }

    let list = |subjects: &[String]| {
        if subjects.is_empty() {
            "없음".to_string()
        } else {
            subjects.join(", ")
        }
    };

    Some(format!(
        "다과목 지도 상세 정보\n  1학기 과목 ({}개): {}\n  2학기 과목 ({}개): {}",
        details.sem1_count,
        list(&details.sem1_subjects),
        details.sem2_count,
        list(&details.sem2_subjects)
    ))
}

/// The whole report: summary, subject details, breakdown, warnings.
pub fn format_evaluation(evaluation: &Evaluation, use_colors: bool) -> String {
    let mut sections = vec![format_summary(evaluation, use_colors)];
    if let Some(details) = format_subject_details(&evaluation.multi_subject_details) {
        sections.push(details);
    }
    sections.push(format_breakdown(&evaluation.breakdown, use_colors));
    if let Some(warnings) = format_warnings(&evaluation.warnings, use_colors) {
        sections.push(warnings);
    }
    sections.join("\n\n")
}
