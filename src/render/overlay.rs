use crate::game::{Blocker, GameState, Snapshot};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::Line,
    widgets::{
        block::{Block, Padding},
        Clear, Widget,
    },
};

/// A pop-up box shown over the board whenever the game isn't being played
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Overlay {
    title: &'static str,
    lines: [String; 2],
}

impl Overlay {
    /// The width that should be used for the `Rect` passed to
    /// `Overlay::render()`
    pub(super) const WIDTH: u16 = 26;

    /// The height that should be used for the `Rect` passed to
    /// `Overlay::render()`
    pub(super) const HEIGHT: u16 = 4;

    /// Return the overlay for the state in `snapshot`, or `None` while
    /// playing
    pub(super) fn for_snapshot(snapshot: &Snapshot<'_>) -> Option<Overlay> {
        let (title, lines) = match snapshot.state {
            GameState::Playing => return None,
            GameState::Ready => (
                " READY ",
                [
                    String::from("Press Space to start"),
                    String::from("Tab changes speed"),
                ],
            ),
            GameState::Paused => (
                " PAUSED ",
                [
                    format!("Score: {}", snapshot.score),
                    String::from("Press Space to resume"),
                ],
            ),
            GameState::GameOver { won: false } => (
                " GAME OVER ",
                [
                    match snapshot.collision {
                        Some(Blocker::SelfHit) => String::from("You hit yourself"),
                        Some(Blocker::Wall) | None => String::from("You hit the wall"),
                    },
                    final_score(snapshot),
                ],
            ),
            GameState::GameOver { won: true } => (
                " YOU WIN! ",
                [String::from("The board is full!"), final_score(snapshot)],
            ),
        };
        Some(Overlay { title, lines })
    }
}

fn final_score(snapshot: &Snapshot<'_>) -> String {
    format!("Score: {}  Best: {}", snapshot.score, snapshot.high_score)
}

impl Widget for &Overlay {
    /*
     * ┌──────── PAUSED ────────┐
     * │        Score: 0        │
     * │ Press Space to resume  │
     * └────────────────────────┘
     */

    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(self.title)
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .style(Style::reset());
        let inner = block.inner(area);
        Clear.render(area, buf);
        block.render(area, buf);
        for (text, row) in self.lines.iter().zip(inner.rows()) {
            Line::from(text.as_str()).centered().render(row, buf);
        }
    }
}
