//! Stateless rendering of the three screens.

use super::app::App;
use super::layout::ScreenLayout;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_boxes_core::{Outcome, Player, Position, Screen, Target};

/// Draws whichever screen the view has up.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = ScreenLayout::compute(frame.area());

    let title = Paragraph::new("Strictly Boxes - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.header);

    let help = match app.screen() {
        Screen::Start => "Enter/N or click: New game | Q: Quit",
        Screen::Board => "Arrows: Move | Enter/Space or click: Claim | 1-9: Claim cell | Q: Quit",
        Screen::Finish => "Enter/N or click: New game | Q: Quit",
    };
    let help = Paragraph::new(help)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.footer);

    match app.screen() {
        Screen::Start => draw_start(frame, &layout, app),
        Screen::Board => draw_board(frame, &layout, app),
        Screen::Finish => draw_finish(frame, &layout, app),
    }
}

fn draw_start(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let config = app.config();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Tic Tac Toe",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(format!(
            "{} ({}) moves first, {} ({}) second",
            config.name(Player::One),
            config.mark(Player::One),
            config.name(Player::Two),
            config.mark(Player::Two),
        )),
    ];
    let intro = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Start"));
    frame.render_widget(intro, layout.body);

    draw_button(frame, layout.button, app);
}

fn draw_board(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let view = app.view();
    let config = app.config();

    for player in [Player::One, Player::Two] {
        let area = layout.badges[usize::from(player.number() - 1)];
        let label = format!("{} ({})", config.name(player), config.mark(player));
        let style = if view.is_active(player) {
            Style::default()
                .fg(Color::Black)
                .bg(player_color(player))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let badge = Paragraph::new(label)
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(badge, area);
    }

    for pos in Position::ALL {
        draw_cell(frame, layout.cell(pos), pos, app);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, pos: Position, app: &App) {
    let view = app.view();
    let config = app.config();

    let (symbol, style) = match (view.cell(pos), view.hover_at(pos)) {
        (Some(owner), _) => (
            config.mark(owner),
            Style::default()
                .fg(player_color(owner))
                .add_modifier(Modifier::BOLD),
        ),
        (None, Some(marker)) => (
            config.mark(marker),
            Style::default()
                .fg(player_color(marker))
                .add_modifier(Modifier::DIM),
        ),
        (None, None) => ("", Style::default()),
    };

    let border = if pos == app.cursor() {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol.to_string(), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(cell, area);
}

fn draw_finish(frame: &mut Frame, layout: &ScreenLayout, app: &App) {
    let view = app.view();
    let config = app.config();

    let (headline, color) = match view.finish() {
        Some(Outcome::Win(winner)) => (
            format!("{} ({}) wins", config.name(*winner), config.mark(*winner)),
            player_color(*winner),
        ),
        Some(Outcome::Tie) => ("Nobody wins".to_string(), Color::Yellow),
        None => (String::new(), Color::White),
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            view.message().clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(headline),
    ];
    let panel = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title("Game over"),
        );
    frame.render_widget(panel, layout.body);

    draw_button(frame, layout.button, app);
}

fn draw_button(frame: &mut Frame, area: Rect, app: &App) {
    let style = if app.pointer() == Some(Target::NewGame) {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().fg(Color::Cyan)
    };
    let button = Paragraph::new("New game")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(button, area);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Blue,
    }
}
