//! Drawing - turns a RenderState into widgets

use ratatui::{prelude::*, widgets::*};

use crate::constants::{APP_NAME, APP_VERSION, CURRENCY};
use crate::messages::RenderState;
use crate::models::Toast;
use crate::sections::{Fragment, Section};

const SIDEBAR_WIDTH: u16 = 26;
const CARD_HEIGHT: u16 = 6;

pub fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Sidebar + main
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(rows[0]);

    draw_sidebar(f, state, panes[0]);
    draw_main(f, state, panes[1]);
    draw_status_bar(f, state, rows[1]);

    // Popups
    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(toast) = &state.toast {
        draw_toast(f, toast, panes[1]);
    }
}

fn draw_sidebar(f: &mut Frame, state: &RenderState, area: Rect) {
    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", section.index() + 1),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::raw(format!("{} {}", section.icon(), section.as_str())),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Menu "),
        )
        .highlight_style(Style::default().fg(Color::Black).bg(Color::Cyan).bold())
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.active_section.index()));

    f.render_stateful_widget(list, area, &mut list_state);
}

fn draw_main(f: &mut Frame, state: &RenderState, area: Rect) {
    let descriptor = &state.descriptor;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", descriptor.title))
        .title_style(Style::default().fg(Color::White).bold());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cards: Vec<(&String, &Vec<String>)> = descriptor
        .content
        .iter()
        .filter_map(|fragment| match fragment {
            Fragment::Card { title, lines } => Some((title, lines)),
            _ => None,
        })
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Subtitle
            Constraint::Length(if cards.is_empty() { 0 } else { CARD_HEIGHT }),
            Constraint::Min(0), // Text content
        ])
        .split(inner);

    let subtitle = Paragraph::new(descriptor.subtitle.as_str())
        .style(Style::default().fg(Color::Gray));
    f.render_widget(subtitle, chunks[0]);

    if !cards.is_empty() {
        draw_cards(f, &cards, chunks[1]);
    }

    let lines = fragment_lines(&descriptor.content);
    let body = Paragraph::new(lines).wrap(Wrap { trim: false });
    f.render_widget(body, chunks[2]);
}

fn draw_cards(f: &mut Frame, cards: &[(&String, &Vec<String>)], area: Rect) {
    let constraints = vec![Constraint::Ratio(1, cards.len() as u32); cards.len()];
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((title, lines), column) in cards.iter().zip(columns.iter()) {
        let mut text: Vec<Line> = Vec::new();
        for (i, line) in lines.iter().enumerate() {
            // First line is the headline figure
            let style = if i == 0 {
                Style::default().fg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::Gray)
            };
            text.push(Line::from(Span::styled(line.clone(), style)));
        }

        let card = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(format!(" {} ", title)),
            )
            .wrap(Wrap { trim: true });
        f.render_widget(card, *column);
    }
}

/// Non-card fragments as display lines
pub fn fragment_lines(content: &[Fragment]) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    for fragment in content {
        match fragment {
            Fragment::Text(text) => {
                lines.push(Line::from(text.clone()));
                lines.push(Line::default());
            }
            Fragment::List { heading, items } => {
                lines.push(Line::from(heading.clone()));
                for item in items {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", Style::default().fg(Color::Cyan)),
                        Span::raw(item.clone()),
                    ]));
                }
                lines.push(Line::default());
            }
            Fragment::Action(label) => {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!(" {} ", label),
                        Style::default().fg(Color::Black).bg(Color::Green).bold(),
                    ),
                    Span::styled(" (t)", Style::default().fg(Color::DarkGray)),
                ]));
            }
            Fragment::Card { .. } => {}
        }
    }

    lines
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let hints = " ↑/↓:navigate | 1-6:jump | t:top up | r:refresh weather | ?:help | q:quit ";
    let summary = status_summary(state);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(summary.chars().count() as u16 + 1)])
        .split(area);

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(summary)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right),
        chunks[1],
    );
}

/// Weather, balance and location, right of the key hints
pub fn status_summary(state: &RenderState) -> String {
    let mut summary = format!(
        " {} {} | {} {} ",
        state.weather.temperature_label(),
        state.weather.condition,
        state.wallet_balance,
        CURRENCY
    );
    if let Some(location) = state.location {
        summary.push_str(&format!("| 📍 {} ", location));
    }
    summary
}

fn draw_toast(f: &mut Frame, toast: &Toast, area: Rect) {
    let width = area.width.saturating_sub(4).min(50);
    let height = 5.min(area.height);
    let toast_area = Rect::new(
        area.x + area.width.saturating_sub(width + 1),
        area.y + area.height.saturating_sub(height + 1),
        width,
        height,
    );

    let color = Color::Red;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(format!(" {} ", toast.title))
        .title_style(Style::default().fg(color).bold())
        .title_bottom(Line::from(" Esc ").right_aligned())
        .style(Style::default().bg(Color::Black));

    let message = Paragraph::new(toast.message.as_str())
        .block(block)
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, toast_area);
    f.render_widget(message, toast_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(50, 60, area);

    let help_text = format!(
        r#"
 {} v{} - Keyboard Shortcuts

 NAVIGATION
   ↑ / k              Previous section
   ↓ / j              Next section
   1 - 6              Jump to section

 ACTIONS
   t                  Top up wallet
   r                  Refresh weather

 GENERAL
   Esc                Dismiss notification
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
