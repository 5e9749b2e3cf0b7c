//! The UI renders the application state into something visible.
//!
//! The draw function always paints the landing page, then the case-study modal on top of it when
//! one is open. The modal is drawn at the geometry the engine reports for the current instant, so
//! while it is opening it grows out of the card that launched it.

use crate::app_state::{px_to_cells, AppState, View};
use crate::modal::RenderState;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap},
    Frame,
};

/// Rows each landing-page card takes up.
const CARD_HEIGHT: u16 = 4;

/// Renders the landing page and, when open, the modal.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    app.resize(f.area());
    draw_landing(f, app);
    if app.view() == View::CaseStudy {
        if let Some(state) = app.modal.render_state() {
            draw_modal(f, app, &state);
        }
    }
}

fn draw_landing(f: &mut Frame, app: &mut AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(f.area());

    let list_area = chunks[0];
    let fits = usize::from(list_area.height / CARD_HEIGHT).max(1);
    app.visible_cards = fits;
    let offset = app.page.borrow().offset;

    app.card_areas = vec![Rect::default(); app.projects.len()];
    let mut y = list_area.y;
    for (i, title) in app.projects.iter().enumerate().skip(offset).take(fits) {
        let area = Rect::new(list_area.x, y, list_area.width, CARD_HEIGHT).intersection(list_area);
        y += CARD_HEIGHT;
        app.card_areas[i] = area;

        let selected = i == app.current_project_index;
        let border_style = if selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let card = Paragraph::new(Line::from(vec![
            Span::styled(format!("{:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
            Span::raw(title.as_str()),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style),
        );
        f.render_widget(card, area);
    }

    let help = app.message.clone().unwrap_or_else(|| {
        "↑/↓: Select project | Enter: Open case study | q: Quit".to_string()
    });
    let help_widget = Paragraph::new(help).block(Block::default().borders(Borders::ALL));
    f.render_widget(help_widget, chunks[1]);
}

fn draw_modal(f: &mut Frame, app: &AppState, state: &RenderState) {
    let area = state
        .appearance
        .map_or(f.area(), |a| px_to_cells(a.rect, f.area()));
    if area.width < 4 || area.height < 4 {
        return;
    }
    let faded = state.appearance.is_some_and(|a| a.opacity < 0.5);
    let base = if faded {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    f.render_widget(Clear, area);
    let project = app
        .open_project
        .and_then(|i| app.projects.get(i))
        .map_or(app.title.as_str(), String::as_str);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{project} · {}", app.title))
        .title_alignment(Alignment::Left)
        .style(base);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu
            Constraint::Length(1), // Subsection tabs
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Progress
            Constraint::Length(1), // Help
        ])
        .split(inner);

    f.render_widget(menu_line(app, state), chunks[0]);

    if !state.subsections.is_empty() {
        let tabs = Tabs::new(state.subsections.iter().map(String::as_str))
            .select(state.active_subsection)
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_widget(tabs, chunks[1]);
    }

    let heading = match &state.subsection_label {
        Some(sub) => format!("{} › {sub}", state.section_label),
        None => state.section_label.clone(),
    };
    let content = Paragraph::new(vec![
        Line::from(Span::styled(
            heading,
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::styled(
            "Content for this section is supplied by the site.",
            Style::default().fg(Color::DarkGray),
        ),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::TOP));
    f.render_widget(content, chunks[2]);

    f.render_widget(progress_line(state), chunks[3]);

    let help = app.message.clone().unwrap_or_else(|| {
        "←/→: Step | Tab/S-Tab: Section | 1-9: Jump | [/]: Page menu | Esc: Close".to_string()
    });
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(Color::DarkGray)),
        chunks[4],
    );
}

fn menu_line(app: &AppState, state: &RenderState) -> Paragraph<'static> {
    let index = app.modal.index();
    let mut spans = Vec::new();
    spans.push(Span::raw(if state.show_menu_backward { "‹ " } else { "  " }));
    for i in state.visible_menu.clone() {
        let label = index.section_label(i).unwrap_or_default().to_string();
        let style = if i == state.active_section {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }
    if state.show_menu_forward {
        spans.push(Span::raw("›"));
    }
    Paragraph::new(Line::from(spans))
}

fn progress_line(state: &RenderState) -> Paragraph<'static> {
    let dots: String = (0..state.count)
        .map(|i| if i == state.active_section { '●' } else { '○' })
        .collect();
    let marker = if state.transition_in_flight { " …" } else { "" };
    Paragraph::new(format!(
        "{dots}   {} of {}{marker}",
        state.position, state.count
    ))
    .alignment(Alignment::Center)
}
