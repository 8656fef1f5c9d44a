use rust_decimal::Decimal;

/// Render a decimal as a dollar amount with thousand separators,
/// e.g. `1234567.89` → `"$1,234,567.89"`. Negative values keep the
/// minus sign in front of the dollar sign.
pub(crate) fn format_amount(val: Decimal) -> String {
    let rendered = format!("{:.2}", val.abs());
    let (int_part, dec_part) = rendered.split_once('.').unwrap_or((&rendered, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}${grouped}.{dec_part}")
}

/// Truncate to at most `max` visible characters, ending with "…" when
/// anything was cut. Counts chars, not bytes.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// Move a list cursor down one row, scrolling to keep it on screen.
pub(crate) fn scroll_down(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len == 0 || *index + 1 >= len {
        return;
    }
    *index += 1;
    if page > 0 && *index >= *scroll + page {
        *scroll = index.saturating_sub(page - 1);
    }
}

/// Move a list cursor up one row, scrolling to keep it on screen.
pub(crate) fn scroll_up(index: &mut usize, scroll: &mut usize) {
    *index = index.saturating_sub(1);
    *scroll = (*scroll).min(*index);
}

pub(crate) fn scroll_to_top(index: &mut usize, scroll: &mut usize) {
    *index = 0;
    *scroll = 0;
}

pub(crate) fn scroll_to_bottom(index: &mut usize, scroll: &mut usize, len: usize, page: usize) {
    if len == 0 {
        return;
    }
    *index = len - 1;
    *scroll = index.saturating_sub(page.saturating_sub(1));
}
