//! Stateless UI rendering for the board.

use crate::app::App;
use crate::config::TuiConfig;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use rolling_tictactoe::{BoardGeometry, CellView, Player, Position, Scene};

const HELP: &str = "click / arrows+enter / 1-9: place   r: restart   q: quit";

/// Renders one frame and returns where the board landed, for mouse lookup.
pub fn draw(frame: &mut Frame, app: &App, config: &TuiConfig) -> BoardGeometry {
    let area = frame.area();
    let scene = app.game().scene();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Min(0),    // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(area);

    let title = Paragraph::new(format!("Tic-Tac-Toe - {}", scene.variant.title()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let board = config.board();
    let geometry = board_geometry(chunks[1], *board.cell_width(), *board.cell_height());
    draw_board(frame, &geometry, &scene, app.cursor(), config);

    let status = Paragraph::new(scene.status())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    geometry
}

/// Centers a 3x3 board of the given cell size in `area`.
pub fn board_geometry(area: Rect, cell_width: u16, cell_height: u16) -> BoardGeometry {
    let width = cell_width.saturating_mul(3);
    let height = cell_height.saturating_mul(3);
    BoardGeometry::new(
        area.x.saturating_add(area.width.saturating_sub(width) / 2),
        area.y.saturating_add(area.height.saturating_sub(height) / 2),
        cell_width,
        cell_height,
    )
}

fn draw_board(
    frame: &mut Frame,
    geometry: &BoardGeometry,
    scene: &Scene,
    cursor: Position,
    config: &TuiConfig,
) {
    let area = frame.area();
    for pos in Position::ALL {
        let (x, y) = geometry.cell_origin(pos);
        let cell = Rect::new(x, y, geometry.cell_width, geometry.cell_height).intersection(area);
        if cell.is_empty() {
            continue;
        }
        draw_cell(frame, cell, scene.cell(pos), pos == cursor, config);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, view: CellView, selected: bool, config: &TuiConfig) {
    let theme = config.theme();
    let (symbol, color) = match view.mark {
        None => (" ", Color::DarkGray),
        Some(Player::X) => ("X", Color::from(*theme.x_color())),
        Some(Player::O) => ("O", Color::from(*theme.o_color())),
    };

    let mut style = Style::default().fg(color).add_modifier(Modifier::BOLD);
    if view.faded {
        style = Style::default()
            .fg(Color::from(*theme.faded_color()))
            .add_modifier(Modifier::DIM);
    }
    if view.winning {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    // Push the mark to the vertical middle of the bordered cell.
    let pad = area.height.saturating_sub(3) / 2;
    let mut lines = vec![Line::default(); pad as usize];
    lines.push(Line::from(Span::styled(symbol, style)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use rolling_tictactoe::{Command, Variant};

    fn render(app: &App) -> (Terminal<TestBackend>, BoardGeometry) {
        let mut terminal = Terminal::new(TestBackend::new(60, 24)).unwrap();
        let config = TuiConfig::default();
        let mut geometry = None;
        terminal
            .draw(|f| geometry = Some(draw(f, app, &config)))
            .unwrap();
        (terminal, geometry.unwrap())
    }

    #[test]
    fn test_largest_cells_draw_in_small_terminal() {
        use crate::config::MAX_CELL_SIZE;

        let config = TuiConfig::from_toml(&format!(
            "[board]\ncell_width = {MAX_CELL_SIZE}\ncell_height = {MAX_CELL_SIZE}\n"
        ))
        .unwrap();
        let mut app = App::new(Variant::Rolling);
        app.apply(Command::Place(Position::BottomRight));

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        let mut geometry = None;
        terminal
            .draw(|f| geometry = Some(draw(f, &app, &config)))
            .unwrap();
        let geometry = geometry.unwrap();
        assert_eq!(geometry.cell_width, MAX_CELL_SIZE);
        assert_eq!(geometry.position_at(geometry.origin_x, geometry.origin_y), Some(Position::TopLeft));
    }

    #[test]
    fn test_board_is_centered() {
        let geometry = board_geometry(Rect::new(0, 1, 60, 20), 9, 5);
        assert_eq!(geometry, BoardGeometry::new(16, 3, 9, 5));
    }

    #[test]
    fn test_marks_drawn_in_their_cells() {
        let mut app = App::new(Variant::Rolling);
        app.apply(Command::Place(Position::TopLeft));
        app.apply(Command::Place(Position::Center));
        let (terminal, geometry) = render(&app);

        let buffer = terminal.backend().buffer();
        let (x, y) = geometry.cell_origin(Position::TopLeft);
        let mark = &buffer[(x + geometry.cell_width / 2, y + geometry.cell_height / 2)];
        assert_eq!(mark.symbol(), "X");
        assert_eq!(mark.fg, Color::Blue);

        let (x, y) = geometry.cell_origin(Position::Center);
        let mark = &buffer[(x + geometry.cell_width / 2, y + geometry.cell_height / 2)];
        assert_eq!(mark.symbol(), "O");
        assert_eq!(mark.fg, Color::Red);
    }

    #[test]
    fn test_faded_and_winning_styles() {
        let mut app = App::new(Variant::Rolling);
        for pos in [
            Position::TopLeft,
            Position::BottomLeft,
            Position::Center,
            Position::BottomCenter,
            Position::MiddleRight,
        ] {
            app.apply(Command::Place(pos));
        }
        let (terminal, geometry) = render(&app);
        let buffer = terminal.backend().buffer();
        let (x, y) = geometry.cell_origin(Position::TopLeft);
        let faded = &buffer[(x + geometry.cell_width / 2, y + geometry.cell_height / 2)];
        assert_eq!(faded.fg, Color::DarkGray);
        assert!(faded.modifier.contains(Modifier::DIM));

        let mut app = App::new(Variant::Classic);
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
            Position::TopRight,
        ] {
            app.apply(Command::Place(pos));
        }
        let (terminal, geometry) = render(&app);
        let buffer = terminal.backend().buffer();
        let (x, y) = geometry.cell_origin(Position::TopCenter);
        let winning = &buffer[(x + geometry.cell_width / 2, y + geometry.cell_height / 2)];
        assert!(winning.modifier.contains(Modifier::REVERSED));
    }
}
