//! Screen layout.
//!
//! ```text
//! PoE Budget Calculator · session started 09:30 UTC
//! ┌ Mode ─────────────────────────────────────────────────────────────────┐
//! │ [1] Select Switch → …  │ [2] Enter Devices → …                        │
//! └───────────────────────────────────────────────────────────────────────┘
//! ┌ 1. Select Switch ─────────────────────────────────────────────────────┐
//! │ ◄ Netgear GS110TP — 8 ports / 55W budget ►                            │
//! └───────────────────────────────────────────────────────────────────────┘
//! ┌ 2. Assign PoE Class Per Port ──────────┐┌ Total Required Power ───────┐
//! │ > Port 1   Class 3 (15.4W)             ││ 61.6 W                      │
//! │   Port 2   None                        ││ ⚠️ This exceeds the …        │
//! └────────────────────────────────────────┘└─────────────────────────────┘
//! Tab mode · ↑↓ move · ←→ change · r reset · q quit
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use poe_core::CalculatorMode;

use super::App;
use crate::commands::device::get_device_summary;
use crate::commands::port::get_port_summary;
use crate::commands::switch::{list_switches, NO_SWITCH_LABEL};

const HELP: &str = "Tab mode · ↑↓ move · ←→ change · Enter ports · r reset · q quit";
const DEVICE_HELP: &str = "Tab mode · ↑↓ move · 0-9 type count · ←→ step · r reset · q quit";

/// Width share of the device form; the summary column gets the rest.
const DEVICE_FORM_PERCENT: u16 = 55;

fn selected_style() -> Style {
    Style::default().add_modifier(Modifier::REVERSED)
}

fn status_style(ok: bool) -> Style {
    if ok {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Red)
    }
}

fn wrapped<'a>(text: impl Into<ratatui::text::Text<'a>>) -> Paragraph<'a> {
    Paragraph::new(text).wrap(Wrap { trim: true })
}

/// Draws the whole screen for the current state.
pub fn draw(frame: &mut Frame, app: &App) {
    let [header, buttons, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Min(0),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    draw_header(frame, app, header);
    draw_mode_buttons(frame, app, buttons);
    match app.mode() {
        CalculatorMode::ByPort => draw_port_mode(frame, app, body),
        CalculatorMode::ByDevice => draw_device_mode(frame, app, body),
    }
    draw_footer(frame, app, footer);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let started = app.session().with_session(|s| s.started_at());
    let line = Line::from(vec![
        Span::styled(
            "PoE Budget Calculator",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" · session started {}", started.format("%H:%M UTC"))),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_mode_buttons(frame: &mut Frame, app: &App, area: Rect) {
    let areas: [Rect; 2] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);
    let buttons = [
        (CalculatorMode::ByPort, " Per Port "),
        (CalculatorMode::ByDevice, " By Device "),
    ];

    for (i, ((mode, title), area)) in buttons.into_iter().zip(areas).enumerate() {
        let active = mode == app.mode();
        let style = if active {
            selected_style().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let block = Block::bordered().title(title).border_style(if active {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        });
        let button = wrapped(Line::styled(format!("[{}] {}", i + 1, mode.title()), style))
            .block(block);
        frame.render_widget(button, area);
    }
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let line = match app.status() {
        Some(message) => Line::styled(message.to_string(), status_style(false)),
        None => match app.mode() {
            CalculatorMode::ByPort => Line::raw(HELP),
            CalculatorMode::ByDevice => Line::raw(DEVICE_HELP),
        },
    };
    frame.render_widget(wrapped(line), area);
}

// =============================================================================
// Per-port mode
// =============================================================================

fn draw_port_mode(frame: &mut Frame, app: &App, area: Rect) {
    let summary = get_port_summary(app.session(), app.config());
    let [selector, details] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).areas(area);

    let label = summary
        .switch
        .and_then(|sw| list_switches().into_iter().find(|o| o.name == sw.name))
        .map_or_else(|| NO_SWITCH_LABEL.to_string(), |o| o.label);
    let style = if app.port_cursor() == 0 {
        selected_style()
    } else {
        Style::default()
    };
    let selector_widget = Paragraph::new(Line::styled(format!("◄ {} ►", label), style))
        .block(Block::bordered().title(" 1. Select Switch "));
    frame.render_widget(selector_widget, selector);

    if summary.switch.is_none() {
        let hint = wrapped("Choose a switch with ←/→ to assign PoE classes per port.")
            .block(Block::bordered());
        frame.render_widget(hint, details);
        return;
    }

    let [ports_area, summary_area] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .areas(details);

    let items: Vec<ListItem> = summary
        .ports
        .iter()
        .map(|row| ListItem::new(format!("Port {:<3} {}", row.port, row.label)))
        .collect();
    let list = List::new(items)
        .block(Block::bordered().title(" 2. Assign PoE Class Per Port "))
        .highlight_style(selected_style())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(app.port_cursor().checked_sub(1));
    frame.render_stateful_widget(list, ports_area, &mut state);

    let mut lines = Vec::new();
    if let Some(total) = &summary.total_label {
        lines.push(Line::styled(
            total.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    }
    if let (Some(report), Some(message)) = (&summary.report, &summary.status_message) {
        lines.push(Line::styled(
            message.clone(),
            status_style(report.status.is_within()),
        ));
        lines.push(Line::raw(""));
        lines.push(Line::raw(format!(
            "Budget:   {}",
            app.config().format_watts(report.budget)
        )));
        if let Some(headroom) = &summary.headroom_label {
            lines.push(Line::raw(format!("Headroom: {}", headroom)));
        }
        lines.push(Line::raw(format!(
            "Ports:    {} assigned, {} free",
            report.assigned_ports, report.free_ports
        )));
    }
    let panel = wrapped(lines).block(Block::bordered().title(" Total Required Power "));
    frame.render_widget(panel, summary_area);
}

// =============================================================================
// Device mode
// =============================================================================

fn draw_device_mode(frame: &mut Frame, app: &App, area: Rect) {
    let summary = get_device_summary(app.session(), app.config());
    let [form_area, side] = Layout::horizontal([
        Constraint::Percentage(DEVICE_FORM_PERCENT),
        Constraint::Fill(1),
    ])
    .areas(area);

    let items: Vec<ListItem> = summary
        .rows
        .iter()
        .map(|row| {
            let subtotal = app
                .config()
                .format_watts(row.class.wattage().multiply_count(row.count));
            ListItem::new(format!(
                "{:<16} [{:>6}]  {:>10}",
                row.label,
                app.count_input(row.class),
                subtotal
            ))
        })
        .collect();
    let list = List::new(items)
        .block(Block::bordered().title(" Number of Devices per PoE Class "))
        .highlight_style(selected_style())
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.device_cursor()));
    frame.render_stateful_widget(list, form_area, &mut state);

    let [total_area, recommendation_area] =
        Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(side);

    let total = wrapped(vec![
        Line::styled(
            summary.total_label.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Line::raw(format!("{} devices", summary.report.device_count)),
    ])
    .block(Block::bordered().title(" Total Power Required "));
    frame.render_widget(total, total_area);

    let recommendation = wrapped(Line::styled(
        summary.recommendation_message.clone(),
        status_style(summary.has_recommendation()),
    ))
    .block(Block::bordered().title(" Recommended Switch "));
    frame.render_widget(recommendation, recommendation_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConfigState;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use poe_core::power::NO_SWITCH_MESSAGE;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    fn render_buffer(app: &App, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn render(app: &App) -> String {
        let buffer = render_buffer(app, 120, 30);
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    /// Text inside the bordered panel with `title`, wrapped lines joined by
    /// single spaces.
    fn panel_text(buffer: &Buffer, title: &str) -> String {
        let title: Vec<String> = title.chars().map(String::from).collect();
        let width = buffer.area.width;
        for y in 0..buffer.area.height {
            let row: Vec<&str> = (0..width).map(|x| buffer[(x, y)].symbol()).collect();
            let found = (0..row.len().saturating_sub(title.len()))
                .find(|&x| title.iter().enumerate().all(|(i, c)| row[x + i] == c));
            let Some(start) = found else {
                continue;
            };

            let left = (0..start).rev().find(|&x| row[x] == "┌").unwrap() as u16;
            let right = (start..row.len()).find(|&x| row[x] == "┐").unwrap() as u16;
            let mut lines = Vec::new();
            for line_y in y + 1..buffer.area.height {
                if buffer[(left, line_y)].symbol() == "└" {
                    break;
                }
                let line: String = (left + 1..right)
                    .map(|x| buffer[(x, line_y)].symbol())
                    .collect();
                let line = line.trim();
                if !line.is_empty() {
                    lines.push(line.to_string());
                }
            }
            return lines.join(" ");
        }
        panic!("no panel titled {:?}", title.concat());
    }

    fn press(app: &mut App, codes: &[KeyCode]) {
        for code in codes {
            app.handle_key(KeyEvent::new(*code, KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_initial_screen() {
        let screen = render(&App::new(ConfigState::default()));
        assert!(screen.contains("PoE Budget Calculator"));
        assert!(screen.contains("[1] Select Switch → Choose PoE Class Per Port"));
        assert!(screen.contains("[2] Enter Devices → Get Switch Recommendation"));
        assert!(screen.contains(NO_SWITCH_LABEL));
        assert!(!screen.contains("Total Required Power"));
    }

    #[test]
    fn test_port_mode_over_budget() {
        let mut app = App::new(ConfigState::default());
        press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Right]);
        press(&mut app, &[KeyCode::Enter]);
        for _ in 0..4 {
            press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Down]);
        }

        let screen = render(&app);
        assert!(screen.contains("Netgear GS110TP — 8 ports / 55W budget"));
        assert!(screen.contains("Total Required Power"));
        assert!(screen.contains("61.6 W"));
        assert!(screen.contains("This exceeds the switch’s PoE budget (55W)"));
        assert!(screen.contains("Port 1   Class 3 (15.4W)"));
        assert!(screen.contains("Port 5   None"));
        assert!(screen.contains("4 assigned, 4 free"));
    }

    #[test]
    fn test_device_mode_recommendation() {
        let mut app = App::new(ConfigState::default());
        press(&mut app, &[KeyCode::Tab, KeyCode::Down]);
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('0')]);
        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Char('2')]);

        let screen = render(&app);
        assert!(screen.contains("Total Power Required"));
        assert!(screen.contains("130.0 W"));
        assert!(screen.contains("12 devices"));
        assert!(screen.contains("Recommended Switch"));
        assert!(screen.contains("Cisco C9300-24P (445W budget)"));
    }

    #[test]
    fn test_device_mode_no_switch() {
        let mut app = App::new(ConfigState::default());
        press(&mut app, &[KeyCode::Tab]);
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('5'), KeyCode::Char('0')]);

        let screen = render(&app);
        assert!(screen.contains("1000.0 W"));
        assert!(screen.contains("No switch in the list meets this PoE requirement."));
    }

    #[test]
    fn test_status_line_shows_errors() {
        let mut app = App::new(ConfigState::default());
        press(&mut app, &[KeyCode::Enter]);
        assert!(render(&app).contains("Choose a switch first"));
    }

    #[test]
    fn test_narrow_terminal_shows_full_recommendation() {
        let mut app = App::new(ConfigState::default());
        press(&mut app, &[KeyCode::Tab]);
        press(&mut app, &[KeyCode::Char('2'), KeyCode::Char('5'), KeyCode::Char('0')]);

        let buffer = render_buffer(&app, 80, 24);
        let warning = NO_SWITCH_MESSAGE.trim_start_matches("⚠️").trim();
        assert!(panel_text(&buffer, "Recommended Switch").contains(warning));
        assert!(panel_text(&buffer, "Total Power Required").contains("1000.0 W"));

        let form = panel_text(&buffer, "Number of Devices per PoE Class");
        assert!(form.contains("[   250]"));
        assert!(form.contains("1000.0 W"));

        assert!(panel_text(&buffer, "By Device")
            .contains("[2] Enter Devices → Get Switch Recommendation"));
    }

    #[test]
    fn test_narrow_terminal_shows_full_budget_status() {
        let mut app = App::new(ConfigState::default());
        press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Right]);
        press(&mut app, &[KeyCode::Enter]);
        for _ in 0..4 {
            press(&mut app, &[KeyCode::Right, KeyCode::Right, KeyCode::Right, KeyCode::Down]);
        }

        let buffer = render_buffer(&app, 80, 24);
        let panel = panel_text(&buffer, "Total Required Power");
        assert!(panel.contains("61.6 W"));
        assert!(panel.contains("This exceeds the switch’s PoE budget (55W)"));
        assert!(panel.contains("4 assigned, 4 free"));

        assert!(panel_text(&buffer, "Per Port")
            .contains("[1] Select Switch → Choose PoE Class Per Port"));
        assert!(panel_text(&buffer, "1. Select Switch")
            .contains("Netgear GS110TP — 8 ports / 55W budget"));
    }
}
