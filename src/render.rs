//! Plain-text rendering of a [`BoardView`] for the terminal.

use crate::view::{BoardView, CardView, ColumnView, HeaderBadge};

const CARD_INDENT: &str = "  ";
const DETAIL_INDENT: &str = "      ";

pub fn format_board(view: &BoardView, width: usize) -> String {
    let mut lines = Vec::new();
    let title = format!(
        "Board grouped by {}, ordered by {} ({} tickets)",
        view.grouping, view.sorting, view.total
    );
    lines.push(truncate(&title, width));

    if view.columns.is_empty() {
        lines.push(String::new());
        lines.push("(no tickets)".to_string());
    }

    for column in &view.columns {
        lines.push(String::new());
        push_column(&mut lines, column, width);
    }

    lines.join("\n")
}

fn push_column(lines: &mut Vec<String>, column: &ColumnView, width: usize) {
    let header = match badge_text(&column.badge) {
        Some(badge) => format!("{badge} {} ({})", column.label, column.count),
        None => format!("{} ({})", column.label, column.count),
    };
    lines.push(truncate(&header, width));
    lines.push("-".repeat(header.chars().count().min(width)));

    for card in &column.cards {
        push_card(lines, card, width);
    }
}

fn push_card(lines: &mut Vec<String>, card: &CardView, width: usize) {
    let title_line = format!("{CARD_INDENT}{}  {}", card.id, card.title);
    lines.push(truncate(&title_line, width));

    let mut details = Vec::new();
    if let Some(icon) = &card.status_icon {
        details.push(format!("[{icon}]"));
    }
    if let Some(icon) = &card.priority_icon {
        details.push(format!("[{icon}]"));
    }
    if let Some(tag) = &card.tag {
        details.push(format!("#{tag}"));
    }
    if let Some(avatar) = &card.assignee {
        details.push(format!("@{}", avatar.initials));
    }
    if !details.is_empty() {
        lines.push(truncate(&format!("{DETAIL_INDENT}{}", details.join(" ")), width));
    }
}

fn badge_text(badge: &HeaderBadge) -> Option<String> {
    match badge {
        HeaderBadge::Status { icon } => icon.as_ref().map(|icon| format!("[{icon}]")),
        HeaderBadge::Priority { icon, .. } => icon.as_ref().map(|icon| format!("[{icon}]")),
        HeaderBadge::User { avatar } => avatar.as_ref().map(|avatar| format!("({})", avatar.initials)),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(3);
    let mut out: String = text.chars().take(keep).collect();
    out.push_str("...");
    out
}
