//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::climb::{ClimbStatus, DisplayClimb, format_minutes};
use crate::grade::{Category, GradeRegistry};
use crate::stats::{GradeBucket, UserStats};

/// One history line: date, grade, name, gym, type and outcome.
///
/// Grades that were converted show the logged grade alongside.
pub fn format_climb_line(entry: &DisplayClimb<'_>) -> String {
    let climb = entry.climb;
    let mut line = format!(
        "{}  {} {:<6}",
        climb.id.dimmed(),
        climb.date.format("%Y-%m-%d"),
        entry.display_grade.bold()
    );
    if entry.display_grade != climb.grade {
        let _ = write!(line, " ({})", climb.grade.dimmed());
    }
    let _ = write!(line, "  {}", climb.name);
    if !climb.gym.is_empty() {
        let _ = write!(line, " @ {}", climb.gym);
    }
    let _ = write!(
        line,
        "  [{}] {}",
        climb.climb_type,
        format_colored_status(&climb.status)
    );
    if !entry.recognized() {
        let _ = write!(line, " {}", "(unrecognized grade)".yellow());
    }
    line
}

pub fn format_colored_status(status: &ClimbStatus) -> String {
    let name = status.name();
    match status {
        ClimbStatus::Flash => name.yellow().bold().to_string(),
        ClimbStatus::Completed => name.green().to_string(),
        ClimbStatus::Failed => name.red().to_string(),
    }
}

/// Dashboard summary block
pub fn format_stats_console(stats: &UserStats) -> String {
    let border = "━".repeat(40);
    let mut output = String::new();
    let _ = writeln!(output, "{}", border.dimmed());
    let _ = writeln!(
        output,
        "  Level {}   Streak {} day(s)",
        stats.level.bold(),
        stats.streak
    );
    let _ = writeln!(
        output,
        "  Ascents {} / {} climbs ({}%)",
        stats.total_ascents, stats.total_climbs, stats.success_rate
    );
    let _ = writeln!(
        output,
        "  Avg boulder {}   Avg rope {}",
        stats.avg_boulder_grade.unwrap_or("-"),
        stats.avg_rope_grade.unwrap_or("-")
    );
    let _ = writeln!(
        output,
        "  Session time this month {}",
        format_minutes(stats.session_minutes_month)
    );
    let _ = write!(output, "{}", border.dimmed());
    output
}

/// Horizontal bar chart of sends per grade; empty grades are skipped.
pub fn format_distribution_console(buckets: &[GradeBucket]) -> String {
    let width = buckets.iter().map(|b| b.label.len()).max().unwrap_or(0);
    buckets
        .iter()
        .filter(|b| b.sends > 0)
        .map(|b| {
            format!(
                "  {:>width$} {} {}",
                b.label,
                "■".repeat(b.sends as usize).cyan(),
                b.sends,
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Equivalence table for one category, one column per system.
pub fn format_scale_table(registry: &GradeRegistry, category: Category) -> String {
    let scales = registry.scales(category);
    let widths: Vec<usize> = scales
        .iter()
        .map(|s| {
            s.labels()
                .iter()
                .map(|l| l.len())
                .chain(std::iter::once(s.system().name().len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut lines = Vec::new();
    let header: Vec<String> = scales
        .iter()
        .zip(&widths)
        .map(|(s, &w)| format!("{:<w$}", s.system().name(), w = w))
        .collect();
    lines.push(format!("{:>3}  {}", "#", header.join("  ")));

    let rows = scales.iter().map(|s| s.len()).max().unwrap_or(0);
    for i in 0..rows {
        let cells: Vec<String> = scales
            .iter()
            .zip(&widths)
            .map(|(s, &w)| format!("{:<w$}", s.label_at(i).unwrap_or(""), w = w))
            .collect();
        lines.push(format!("{:>3}  {}", i, cells.join("  ").trim_end()));
    }
    lines.join("\n")
}
