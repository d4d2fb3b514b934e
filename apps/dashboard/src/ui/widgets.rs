use chrono::Local;
use finanzas_core::dashboard::SinkMap;
use finanzas_core::{ConverterForm, DisplayMode};
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Clear, List, ListItem, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use crate::app::{App, Modal};

pub fn mode_bar(frame: &mut Frame, area: Rect, mode: DisplayMode) {
    let titles = DisplayMode::ALL
        .iter()
        .enumerate()
        .map(|(i, m)| format!("F{} {}", i + 1, m.label()));

    let tabs = Tabs::new(titles)
        .select(mode.index())
        .block(Block::bordered().title(" Finanzas "))
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

    frame.render_widget(tabs, area);
}

pub fn value_list(frame: &mut Frame, area: Rect, sinks: &SinkMap, title: &str) {
    let items: Vec<ListItem> = sinks
        .iter()
        .map(|sink| {
            ListItem::new(Text::from(vec![
                Line::from(Span::styled(sink.caption.clone(), Style::default().bold())),
                Line::from(format!("  {}", sink.cell.text())),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::bordered().title(format!(" {} ", title)));
    frame.render_widget(list, area);
}

pub fn converter(frame: &mut Frame, area: Rect, form: &ConverterForm, base_currency: &str) {
    let currency = form
        .selected_currency()
        .map(|c| format!("{} - {}", c.code, c.display_name))
        .unwrap_or_default();

    let lines = vec![
        Line::from("Currency (Up/Down)".bold()),
        Line::from(format!("  < {} >", currency)),
        Line::from(""),
        Line::from(format!("Amount to express in {}", base_currency).bold()),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(
                format!("{}_", form.amount_input()),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
        Line::from("Enter: Convert".dim()),
    ];

    let paragraph = Paragraph::new(lines).block(Block::bordered().title(" Converter "));
    frame.render_widget(paragraph, area);
}

pub fn footer(frame: &mut Frame, area: Rect, app: &App) {
    let status = match app.state.last_tick() {
        Some(report) if report.unavailable > 0 => format!(
            "last refresh {} ({} unavailable)",
            report.finished_at.with_timezone(&Local).format("%H:%M:%S"),
            report.unavailable
        ),
        Some(report) => format!(
            "last refresh {}",
            report.finished_at.with_timezone(&Local).format("%H:%M:%S")
        ),
        None => "waiting for first refresh".to_string(),
    };

    let quit_hint = if app.state.mode() == DisplayMode::Currencies {
        " Tab/F1-F3 switch mode | Esc clear | Ctrl+C quit | "
    } else {
        " Tab/F1-F3 switch mode | Esc quit | "
    };
    let line = Line::from(vec![
        Span::raw(quit_hint).dim(),
        Span::raw(status),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

pub fn modal(frame: &mut Frame, modal: &Modal) {
    let area = centered(frame.area(), 50, 7);
    let border = if modal.is_error {
        Color::Red
    } else {
        Color::Green
    };

    let paragraph = Paragraph::new(vec![
        Line::from(modal.message.clone()),
        Line::from(""),
        Line::from("Enter/Esc to close".dim()),
    ])
    .wrap(Wrap { trim: true })
    .block(
        Block::bordered()
            .title(format!(" {} ", modal.title))
            .border_style(Style::default().fg(border)),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(paragraph, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);
    cell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let outer = Rect::new(0, 0, 100, 40);
        let inner = centered(outer, 50, 7);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 7);
        assert_eq!(inner.x, 25);
        assert!(inner.y > 0 && inner.bottom() < outer.bottom());
    }
}
