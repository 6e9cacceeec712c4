//! Terminal control overlay
//!
//! Draws a [`Screen`] and records where each tap target landed so mouse
//! clicks can be mapped back to actions.

use ratatui::{
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use reel_core::{
    theme::hex_to_rgb, Action, ControlGroup, PlayerView, ProgressBar, ReelColors, Screen,
};

/// Horizontal inset of the control strip
const SIDE_MARGIN: u16 = 2;

/// A drawn tap target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub rect: Rect,
    pub label: &'static str,
    pub action: Action,
}

/// Tap targets of the last frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HitMap {
    targets: Vec<Target>,
    /// Area that toggles playback when clicked
    surface: Option<Rect>,
}

impl HitMap {
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    pub fn surface(&self) -> Option<Rect> {
        self.surface
    }

    /// Action for a click at the given cell.
    ///
    /// Options win over the surface; gaps inside the control strip do nothing.
    pub fn action_at(&self, column: u16, row: u16) -> Option<Action> {
        let position = Position::new(column, row);
        if let Some(target) = self.targets.iter().find(|t| t.rect.contains(position)) {
            return Some(target.action);
        }
        self.surface
            .filter(|area| area.contains(position))
            .map(|_| Action::TogglePaused)
    }
}

/// Render one frame
pub fn draw(frame: &mut Frame, screen: &Screen, colors: &ReelColors) -> HitMap {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(color(colors.background))), area);

    match screen {
        Screen::Empty => HitMap::default(),
        Screen::Player(view) => draw_player(frame, area, view, colors),
    }
}

fn draw_player(frame: &mut Frame, area: Rect, view: &PlayerView, colors: &ReelColors) -> HitMap {
    let [surface_area, general_row, _gap, progress_row, _bottom] = Layout::vertical([
        Constraint::Min(0),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    let text = Style::default().fg(color(colors.control_text));
    draw_status(frame, surface_area, view, text);

    let general_row = inset(general_row);
    let columns: [Rect; 3] = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .areas(general_row);

    let mut targets = Vec::new();
    for (group, column) in view.controls.groups().into_iter().zip(columns) {
        targets.extend(draw_group(frame, column, group, text));
    }

    draw_progress(frame, inset(progress_row), &view.controls.progress, colors);

    HitMap {
        targets,
        surface: Some(surface_area),
    }
}

fn draw_status(frame: &mut Frame, area: Rect, view: &PlayerView, style: Style) {
    if area.height == 0 {
        return;
    }
    let state = if view.surface.paused { "paused - click to play" } else { "playing - click to pause" };
    let lines = vec![
        Line::from(Span::styled(state, style.add_modifier(Modifier::BOLD))).centered(),
        Line::from(Span::styled(view.surface.source.as_str(), style)).centered(),
    ];
    let middle = Rect {
        y: area.y + area.height.saturating_sub(2) / 2,
        height: area.height.min(2),
        ..area
    };
    frame.render_widget(Paragraph::new(lines), middle);
}

/// Options centred in `column`, each padded by one cell on both sides
fn draw_group(frame: &mut Frame, column: Rect, group: &ControlGroup, style: Style) -> Vec<Target> {
    let widths: Vec<u16> = group
        .options
        .iter()
        .map(|o| o.label.len() as u16 + 2)
        .collect();
    let total: u16 = widths.iter().sum();
    let mut x = column.x + column.width.saturating_sub(total) / 2;

    let mut targets = Vec::with_capacity(group.options.len());
    for (option, width) in group.options.iter().zip(widths) {
        let rect = Rect::new(x, column.y, width, 1).intersection(column);
        x = x.saturating_add(width);
        if rect.is_empty() {
            continue;
        }

        let style = if option.selected { style.add_modifier(Modifier::BOLD) } else { style };
        let label = Span::styled(format!(" {} ", option.label), style);
        frame.render_widget(Paragraph::new(Line::from(label)), rect);

        targets.push(Target {
            rect,
            label: option.label,
            action: option.action,
        });
    }
    targets
}

fn draw_progress(frame: &mut Frame, row: Rect, progress: &ProgressBar, colors: &ReelColors) {
    let (completed, remaining) = progress.split(row.width);
    let completed_rect = Rect { width: completed, ..row };
    let remaining_rect = Rect {
        x: row.x + completed,
        width: remaining,
        ..row
    };

    let segment = |hex| Block::default().style(Style::default().bg(color(hex)));
    frame.render_widget(segment(colors.progress_completed), completed_rect);
    frame.render_widget(segment(colors.progress_remaining), remaining_rect);
}

fn inset(row: Rect) -> Rect {
    let margin = SIDE_MARGIN.min(row.width / 2);
    Rect {
        x: row.x + margin,
        width: row.width - margin * 2,
        ..row
    }
}

fn color(hex: &str) -> Color {
    hex_to_rgb(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Reset)
}
