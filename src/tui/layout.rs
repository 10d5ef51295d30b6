//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use strictly_boxes_core::{Position, Screen, Target};

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
/// Gap between neighbouring cells.
pub const CELL_GAP: u16 = 1;

const BUTTON_WIDTH: u16 = 20;
const BUTTON_HEIGHT: u16 = 3;

/// Rectangles for every widget on every screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub header: Rect,
    /// Main area between header and footer.
    pub body: Rect,
    /// Key help.
    pub footer: Rect,
    /// Player badges, player one first.
    pub badges: [Rect; 2],
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// New-game button on the start and finish screens.
    pub button: Rect,
}

impl ScreenLayout {
    /// Lays out a terminal area.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(0),    // Body
                Constraint::Length(3), // Help
            ])
            .split(area);
        let (header, body, footer) = (rows[0], rows[1], rows[2]);

        let board_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(body);
        let badge_cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(board_rows[0]);

        Self {
            header,
            body,
            footer,
            badges: [badge_cols[0], badge_cols[1]],
            cells: grid_cells(board_rows[1]),
            button: button_rect(body),
        }
    }

    /// Rectangle of one cell.
    pub fn cell(&self, pos: Position) -> Rect {
        self.cells[pos.to_index()]
    }

    /// What sits under the terminal cell at `column`, `row` on `screen`.
    pub fn hit(&self, screen: Screen, column: u16, row: u16) -> Target {
        match screen {
            Screen::Board => Position::ALL
                .into_iter()
                .find(|pos| contains(self.cell(*pos), column, row))
                .map(Target::Cell)
                .unwrap_or(Target::Elsewhere),
            Screen::Start | Screen::Finish if contains(self.button, column, row) => {
                Target::NewGame
            }
            Screen::Start | Screen::Finish => Target::Elsewhere,
        }
    }
}

fn grid_cells(area: Rect) -> [Rect; 9] {
    let grid_width = 3 * CELL_WIDTH + 2 * CELL_GAP;
    let grid_height = 3 * CELL_HEIGHT + 2 * CELL_GAP;
    let x0 = area.x + area.width.saturating_sub(grid_width) / 2;
    let y0 = area.y + area.height.saturating_sub(grid_height) / 2;

    Position::ALL.map(|pos| {
        let x = x0 + pos.col() as u16 * (CELL_WIDTH + CELL_GAP);
        let y = y0 + pos.row() as u16 * (CELL_HEIGHT + CELL_GAP);
        Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area)
    })
}

fn button_rect(body: Rect) -> Rect {
    let x = body.x + body.width.saturating_sub(BUTTON_WIDTH) / 2;
    let y = body.y + body.height / 2 + 1;
    Rect::new(x, y, BUTTON_WIDTH, BUTTON_HEIGHT).intersection(body)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> ScreenLayout {
        ScreenLayout::compute(Rect::new(0, 0, 80, 30))
    }

    #[test]
    fn test_cells_do_not_overlap() {
        let layout = layout();
        for a in Position::ALL {
            for b in Position::ALL {
                if a != b {
                    assert!(!layout.cell(a).intersects(layout.cell(b)), "{a} overlaps {b}");
                }
            }
        }
    }

    #[test]
    fn test_hit_cell_centers() {
        let layout = layout();
        for pos in Position::ALL {
            let rect = layout.cell(pos);
            let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(layout.hit(Screen::Board, x, y), Target::Cell(pos));
        }
    }

    #[test]
    fn test_gap_is_elsewhere() {
        let layout = layout();
        let left = layout.cell(Position::TopLeft);
        assert_eq!(
            layout.hit(Screen::Board, left.right(), left.y),
            Target::Elsewhere
        );
    }

    #[test]
    fn test_button_only_on_start_and_finish() {
        let layout = layout();
        let (x, y) = (layout.button.x + 1, layout.button.y + 1);
        assert_eq!(layout.hit(Screen::Start, x, y), Target::NewGame);
        assert_eq!(layout.hit(Screen::Finish, x, y), Target::NewGame);
        assert_ne!(layout.hit(Screen::Board, x, y), Target::NewGame);
        assert_eq!(layout.hit(Screen::Start, 0, 0), Target::Elsewhere);
    }
}
