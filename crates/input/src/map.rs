//! Key mapping from terminal events to game commands.

use crate::types::{GameUpdate, Key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a single key press asks the driver to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Feed a key press into the game.
    Play(Key),
    Restart,
    Quit,
}

impl Command {
    /// The game update for gameplay commands
    pub fn update(&self) -> Option<GameUpdate> {
        match self {
            Command::Play(key) => Some(GameUpdate::KeyPress(*key)),
            Command::Restart | Command::Quit => None,
        }
    }
}

/// Map keyboard input to a command.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(Command::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Play(Key::MoveLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Play(Key::MoveRight),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Play(Key::SoftDrop),
        KeyCode::Char(' ') => Command::Play(Key::HardDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('e')
        | KeyCode::Char('E')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Command::Play(Key::RotateCw),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('z') | KeyCode::Char('Z') => {
            Command::Play(Key::RotateCcw)
        }

        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Esc => Command::Quit,

        _ => return None,
    };
    Some(command)
}
