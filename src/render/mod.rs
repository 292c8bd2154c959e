mod overlay;
use self::overlay::Overlay;
use crate::consts;
use crate::game::{Coord, Direction, GameState, Snapshot};
use crate::util::{center_rect, get_display_area};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Widget},
    Terminal,
};
use std::io;

/// Something that can show the player a game snapshot
pub(crate) trait Renderer {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()>;
}

/// Draws snapshots on a terminal
#[derive(Debug)]
pub(crate) struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
}

impl<B: Backend> TerminalRenderer<B> {
    pub(crate) fn new(terminal: Terminal<B>) -> Self {
        TerminalRenderer { terminal }
    }
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn render(&mut self, snapshot: &Snapshot<'_>) -> io::Result<()> {
        self.terminal
            .draw(|frame| frame.render_widget(snapshot, frame.area()))?;
        Ok(())
    }
}

impl Widget for &Snapshot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, help_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!(
                " Score: {}  High: {}  Speed: {}",
                self.score, self.high_score, self.difficulty
            ),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let n = self.grid.size();
        let block_size = Size {
            width: n.saturating_mul(consts::CELL_WIDTH).saturating_add(2),
            height: n.saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);

        let mut field = Canvas {
            area: block_area.inner(Margin::new(1, 1)),
            buf,
        };
        for &c in self.snake.iter().skip(1) {
            field.draw_cell(c, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        }
        if let Some(food) = self.food {
            field.draw_cell(food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
        }
        if let Some(&head) = self.snake.front() {
            if self.collision.is_some() {
                field.draw_cell(head, consts::COLLISION_SYMBOL, consts::COLLISION_STYLE);
            } else {
                field.draw_cell(head, head_symbol(self.direction), consts::SNAKE_HEAD_STYLE);
            }
        }

        if let Some(overlay) = Overlay::for_snapshot(self) {
            let overlay_area = center_rect(
                board_area,
                Size {
                    width: Overlay::WIDTH,
                    height: Overlay::HEIGHT,
                },
            );
            overlay.render(overlay_area, buf);
        }

        help_line(self).render(help_area, buf);
    }
}

/// Return the glyph to use for drawing the snake's head
fn head_symbol(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => consts::SNAKE_HEAD_UP_SYMBOL,
        Direction::Down => consts::SNAKE_HEAD_DOWN_SYMBOL,
        Direction::Left => consts::SNAKE_HEAD_LEFT_SYMBOL,
        Direction::Right => consts::SNAKE_HEAD_RIGHT_SYMBOL,
    }
}

fn help_line(snapshot: &Snapshot<'_>) -> Line<'static> {
    let mut line = Line::default();
    let mut first = true;
    let mut entry = |line: &mut Line<'static>, label: &'static str, key: &'static str| {
        if !first {
            line.push_span(" — ");
        }
        first = false;
        line.push_span(format!("{label} ("));
        line.push_span(Span::styled(key, consts::KEY_STYLE));
        line.push_span(")");
    };
    line.push_span(" ");
    match snapshot.state {
        GameState::Ready | GameState::GameOver { .. } => {
            if snapshot.state == GameState::Ready {
                entry(&mut line, "Start", "Space");
            } else {
                entry(&mut line, "New Game", "Enter");
            }
            entry(&mut line, "Speed", "Tab");
            line.push_span(": ");
            line.push_span(Span::styled(
                snapshot.difficulty.label(),
                consts::SELECTION_STYLE,
            ));
        }
        GameState::Playing => {
            entry(&mut line, "Move", "←↓↑→");
            entry(&mut line, "Pause", "Space");
            entry(&mut line, "Restart", "r");
        }
        GameState::Paused => {
            entry(&mut line, "Resume", "Space");
            entry(&mut line, "Restart", "r");
        }
    }
    entry(&mut line, "Quit", "q");
    line
}

#[derive(Debug, Eq, PartialEq)]
struct Canvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
}

impl Canvas<'_> {
    /// Draw a two-column `symbol` at grid cell `pos`.  Cells outside of
    /// `area` are skipped.
    fn draw_cell(&mut self, pos: Coord, symbol: &str, style: Style) {
        let (Ok(gx), Ok(gy)) = (u16::try_from(pos.x), u16::try_from(pos.y)) else {
            return;
        };
        let Some(x) = gx
            .checked_mul(consts::CELL_WIDTH)
            .and_then(|x| x.checked_add(self.area.x))
        else {
            return;
        };
        let Some(y) = gy.checked_add(self.area.y) else {
            return;
        };
        for (ch, x) in symbol.chars().zip(x..) {
            if !self.area.contains((x, y).into()) {
                continue;
            }
            if let Some(cell) = self.buf.cell_mut((x, y)) {
                cell.set_char(ch);
                cell.set_style(Style::reset().patch(style));
            }
        }
    }
}
