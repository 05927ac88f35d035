use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use pikdex::api::{CmdMessage, MessageLevel};
use pikdex::config::PikdexConfig;
use pikdex::index::DisplayEntry;
use pikdex::model::{Color, DecorType, Status};
use pikdex::view::Stats;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 28;
const COLOR_WIDTH: usize = 8;
const DECOR_WIDTH: usize = 16;
const STATUS_WIDTH: usize = 9;
const TIME_WIDTH: usize = 16;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_entries(entries: &[DisplayEntry]) {
    print!("{}", render_entries(entries, Utc::now()));
}

pub(super) fn print_stats(stats: &Stats) {
    print!("{}", render_stats(stats));
}

pub(super) fn print_config(config: &PikdexConfig) {
    for (key, value) in config.list_all() {
        println!("{} = {}", key.as_str().bold(), value);
    }
}

pub(super) fn print_options() {
    print!("{}", render_options());
}

/// One line per entry: number, name, color, decor, stage and relative age.
pub(super) fn render_entries(entries: &[DisplayEntry], now: DateTime<Utc>) -> String {
    if entries.is_empty() {
        return "No entries found.\n".to_string();
    }

    let idx_width = entries
        .iter()
        .map(|dp| format!("{}.", dp.index).width())
        .max()
        .unwrap_or(2);

    let mut out = String::new();
    for dp in entries {
        let entry = &dp.entry;
        let idx = format!("{:>width$}", format!("{}.", dp.index), width = idx_width);
        let name = pad_to_width(&truncate_to_width(&entry.name, NAME_WIDTH), NAME_WIDTH);
        let color = pad_to_width(entry.color.as_str(), COLOR_WIDTH);
        let decor = pad_to_width(entry.decor_type.as_str(), DECOR_WIDTH);
        let status = pad_to_width(entry.status.as_str(), STATUS_WIDTH);
        let time_ago = format_time_ago(entry.created_at_utc(), now);

        out.push_str(&format!(
            "  {} {} {} {} {} {}\n",
            idx.yellow(),
            name,
            color,
            decor.dimmed(),
            status_style(entry.status, status),
            time_ago.dimmed()
        ));
    }
    out
}

pub(super) fn render_stats(stats: &Stats) -> String {
    format!(
        "Total:      {}\nSeedlings:  {}\nPikmin:     {}\nDecor:      {}\nCompletion: {}%\n",
        stats.total,
        stats.seedlings,
        stats.pikmin,
        stats.decor,
        stats.completion.to_string().bold()
    )
}

pub(super) fn render_options() -> String {
    let colors: Vec<&str> = Color::ALL.iter().map(|c| c.as_str()).collect();
    let decor: Vec<&str> = DecorType::ALL.iter().map(|d| d.as_str()).collect();
    let statuses: Vec<&str> = Status::ALL.iter().map(|s| s.as_str()).collect();

    format!(
        "{}\n  {}\n{}\n  {}\n{}\n  {}\n",
        "Colors:".bold(),
        colors.join(", "),
        "Decor categories:".bold(),
        decor.join(", "),
        "Stages:".bold(),
        statuses.join(", ")
    )
}

fn status_style(status: Status, text: String) -> ColoredString {
    match status {
        Status::Seedling => text.normal(),
        Status::Pikmin => text.cyan(),
        Status::Decor => text.green(),
    }
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn format_time_ago(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(timestamp);
    let formatter = Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pikdex::model::{Entry, NewEntry};

    fn display(index: usize, name: &str, minutes_ago: i64, now: DateTime<Utc>) -> DisplayEntry {
        let mut entry = Entry::from_draft(
            NewEntry::new(Color::Red, DecorType::SweetShop)
                .with_name(name)
                .with_status(Status::Decor),
        );
        entry.created_at = (now - Duration::minutes(minutes_ago)).timestamp_millis();
        DisplayEntry { index, entry }
    }

    #[test]
    fn empty_list_message() {
        colored::control::set_override(false);
        assert_eq!(render_entries(&[], Utc::now()), "No entries found.\n");
    }

    #[test]
    fn entry_lines_align() {
        colored::control::set_override(false);
        let now = Utc::now();
        let out = render_entries(
            &[display(9, "Short", 5, now), display(10, "Twin 🌸", 90, now)],
            now,
        );
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("   9. Short"));
        assert!(lines[1].starts_with("  10. Twin 🌸"));
        assert!(lines[0].contains("Sweet Shop"));
        assert!(lines[0].ends_with("5 minutes ago"));
        assert_eq!(lines[0].width(), lines[1].width());
    }

    #[test]
    fn long_names_are_truncated() {
        let long = "x".repeat(40);
        let cut = truncate_to_width(&long, NAME_WIDTH);
        assert_eq!(cut.width(), NAME_WIDTH);
        assert!(cut.ends_with('…'));
        assert_eq!(truncate_to_width("abc", NAME_WIDTH), "abc");
    }

    #[test]
    fn stats_block() {
        colored::control::set_override(false);
        let stats = Stats {
            total: 3,
            seedlings: 1,
            pikmin: 0,
            decor: 2,
            completion: 67,
        };
        let out = render_stats(&stats);
        assert!(out.contains("Total:      3\n"));
        assert!(out.ends_with("Completion: 67%\n"));
    }

    #[test]
    fn options_list_every_label() {
        colored::control::set_override(false);
        let out = render_options();
        assert!(out.contains("Red, Yellow, Blue"));
        assert!(out.contains("Appliance Store"));
        assert!(out.contains("Seedling, Pikmin, Decor"));
    }
}
