//! UI rendering module

mod widgets;

use finanzas_core::DisplayMode;
use ratatui::layout::{Constraint, Layout};
use ratatui::Frame;

use crate::app::App;

/// Main render function - lays out the mode bar, the active panel, and any open dialog
pub fn render(frame: &mut Frame, app: &App) {
    let [tabs_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    widgets::mode_bar(frame, tabs_area, app.state.mode());

    match app.state.mode() {
        DisplayMode::Currencies => {
            let [rates_area, converter_area] =
                Layout::horizontal([Constraint::Percentage(60), Constraint::Percentage(40)])
                    .areas(body_area);
            widgets::value_list(frame, rates_area, app.state.sinks(), "Exchange rates");
            widgets::converter(frame, converter_area, &app.form, &app.base_currency);
        }
        mode => widgets::value_list(frame, body_area, app.state.sinks(), mode.label()),
    }

    widgets::footer(frame, footer_area, app);

    if let Some(modal) = &app.modal {
        widgets::modal(frame, modal);
    }
}
