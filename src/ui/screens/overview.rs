use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::store::Snapshot;
use crate::ui::theme;
use crate::ui::util::format_amount;

pub(crate) fn render(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // Budget cards
            Constraint::Length(1), // Alert banner
            Constraint::Min(10),   // Daily chart
        ])
        .split(area);

    render_budget_cards(f, chunks[0], snapshot);
    render_alert_banner(f, chunks[1], snapshot);
    render_daily_chart(f, chunks[2], snapshot);
}

fn render_budget_cards(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(area);

    render_card(f, cards[0], "Monthly Limit", snapshot.monthly_limit, theme::ACCENT);
    render_card(
        f,
        cards[1],
        "Tracked",
        snapshot.total_tracked,
        if snapshot.total_tracked >= Decimal::ZERO {
            theme::GREEN
        } else {
            theme::RED
        },
    );
    render_card(
        f,
        cards[2],
        "Remaining",
        snapshot.remaining,
        theme::tier_color(snapshot.remaining_tier),
    );
}

fn render_card(f: &mut Frame, area: Rect, title: &str, amount: Decimal, color: ratatui::style::Color) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            format!(" {title} "),
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    let text = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            format_amount(amount),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
    ])
    .centered()
    .block(block);

    f.render_widget(text, area);
}

fn render_alert_banner(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let message = snapshot.tier.message();
    if message.is_empty() {
        return;
    }
    let style = Style::default()
        .fg(theme::HEADER_BG)
        .bg(theme::tier_color(snapshot.tier))
        .add_modifier(Modifier::BOLD);
    let banner = Paragraph::new(Line::from(Span::styled(format!(" {message} "), style))).centered();
    f.render_widget(banner, area);
}

fn render_daily_chart(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::OVERLAY))
        .title(Span::styled(
            " Daily Expenses & Income ",
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::BOLD),
        ));

    if snapshot.labels.is_empty() {
        let msg = Paragraph::new(Line::from(Span::styled(
            "No data to display in chart.",
            theme::dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    // One group per day, expense bar next to income bar. Group width is
    // two 8-wide bars plus the inner gap; show as many recent days as fit.
    let group_width = 17u16;
    let visible = ((area.width.saturating_sub(2) / (group_width + 1)).max(1)) as usize;
    let skip = snapshot.labels.len().saturating_sub(visible);

    let mut chart = BarChart::default()
        .block(block)
        .bar_width(8)
        .bar_gap(1)
        .group_gap(1);

    for i in skip..snapshot.labels.len() {
        let expense = snapshot.expense_series[i].to_u64().unwrap_or(0);
        let income = snapshot.income_series[i].to_u64().unwrap_or(0);
        // Day labels carry the full date; the month-day tail is enough here.
        let day = snapshot.labels[i]
            .get(5..)
            .unwrap_or(&snapshot.labels[i])
            .to_string();

        let bars = [
            Bar::default()
                .value(expense)
                .style(Style::default().fg(theme::RED))
                .value_style(Style::default().fg(theme::TEXT).bg(theme::RED)),
            Bar::default()
                .value(income)
                .style(Style::default().fg(theme::GREEN))
                .value_style(Style::default().fg(theme::HEADER_BG).bg(theme::GREEN)),
        ];
        chart = chart.data(
            BarGroup::default()
                .label(Line::from(Span::styled(day, theme::dim_style())))
                .bars(&bars),
        );
    }

    f.render_widget(chart, area);
}
