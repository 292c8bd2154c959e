use crate::difficulty::Difficulty;
use crate::game::{Direction, Intent};
use crate::util::EnumExt;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Enter,
    Space,
    Esc,
    Next,
    Prev,
    One,
    Two,
    Three,
    N,
    P,
    R,
    Q,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (_, KeyCode::Enter) => Some(Command::Enter),
            (KeyModifiers::NONE, KeyCode::Char(' ')) => Some(Command::Space),
            (_, KeyCode::Esc) => Some(Command::Esc),
            (_, KeyCode::Tab) => Some(Command::Next),
            (_, KeyCode::BackTab) => Some(Command::Prev),
            (KeyModifiers::NONE, KeyCode::Char('1')) => Some(Command::One),
            (KeyModifiers::NONE, KeyCode::Char('2')) => Some(Command::Two),
            (KeyModifiers::NONE, KeyCode::Char('3')) => Some(Command::Three),
            (KeyModifiers::NONE, KeyCode::Char('n')) => Some(Command::N),
            (KeyModifiers::NONE, KeyCode::Char('p')) => Some(Command::P),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::R),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Q),
            _ => None,
        }
    }

    /// Translate the command into a request for the game session.
    /// `difficulty` is the currently-selected difficulty, from which Tab &
    /// BackTab step.  Quit commands and unbound keys yield `None`.
    pub(crate) fn to_intent(self, difficulty: Difficulty) -> Option<Intent> {
        match self {
            Command::Up => Some(Intent::Turn(Direction::Up)),
            Command::Down => Some(Intent::Turn(Direction::Down)),
            Command::Left => Some(Intent::Turn(Direction::Left)),
            Command::Right => Some(Intent::Turn(Direction::Right)),
            Command::Enter | Command::N => Some(Intent::Start),
            Command::Space => Some(Intent::Play),
            Command::Esc | Command::P => Some(Intent::TogglePause),
            Command::R => Some(Intent::Restart),
            Command::One => Some(Intent::SetDifficulty(Difficulty::Easy)),
            Command::Two => Some(Intent::SetDifficulty(Difficulty::Medium)),
            Command::Three => Some(Intent::SetDifficulty(Difficulty::Hard)),
            Command::Next => Some(Intent::SetDifficulty(
                difficulty.next().unwrap_or_else(Difficulty::min),
            )),
            Command::Prev => Some(Intent::SetDifficulty(
                difficulty.prev().unwrap_or_else(Difficulty::max),
            )),
            Command::Quit | Command::Q => None,
        }
    }

    pub(crate) fn quits(self) -> bool {
        matches!(self, Command::Quit | Command::Q)
    }
}
