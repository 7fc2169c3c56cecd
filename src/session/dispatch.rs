//! Key-event dispatch: the synchronous step loop.
//!
//! The dispatcher owns no game state. It reads one decoded key event from
//! an [`EventSource`], maps it to a [`Command`] based on the observable
//! session state, applies it, and hands a fresh [`Snapshot`] to the render
//! callback. One event in, one command (or none), one render.
//!
//! The space bar carries three meanings, disambiguated here rather than in
//! the engine: draw when the cursor sits on the stock, mark when nothing
//! is marked (or the mark is under the cursor), commit otherwise.

use std::collections::VecDeque;

use crate::board::{Direction, PileId};

use super::command::Command;
use super::snapshot::Snapshot;
use super::GameSession;

/// A decoded key event, as delivered by the terminal front-end.
///
/// The front-end is responsible for raw decoding (including aliases such
/// as h/j/k/l for the arrows); the engine only sees these variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyEvent {
    Up,
    Down,
    Left,
    Right,
    Space,
    Char(char),
    /// Terminal resize; affects rendering only, never engine state.
    Resize,
    /// Anything unrecognized.
    Other,
}

/// Source of decoded key events.
///
/// The production implementation blocks on the terminal; tests use
/// [`ScriptedEvents`].
pub trait EventSource {
    /// Block until the next event arrives.
    fn next_event(&mut self) -> KeyEvent;
}

/// Map a key event to a command, given the current session state.
///
/// Returns `None` for events the engine ignores.
#[must_use]
pub fn map_key(session: &GameSession, key: KeyEvent) -> Option<Command> {
    match key {
        KeyEvent::Up => Some(Command::MoveCursor(Direction::Up)),
        KeyEvent::Down => Some(Command::MoveCursor(Direction::Down)),
        KeyEvent::Left => Some(Command::MoveCursor(Direction::Left)),
        KeyEvent::Right => Some(Command::MoveCursor(Direction::Right)),
        KeyEvent::Space => {
            let cursor = session.board().cursor().pile;
            if cursor == PileId::STOCK {
                Some(Command::DrawFromStock)
            } else if session
                .selection()
                .marked_pile()
                .is_some_and(|marked| marked != cursor)
            {
                Some(Command::CommitMove)
            } else {
                Some(Command::ToggleMark)
            }
        }
        KeyEvent::Char('m') => Some(Command::IncreaseMarkCount),
        KeyEvent::Char('n') => Some(Command::DecreaseMarkCount),
        KeyEvent::Char('q' | 'Q') => Some(Command::Quit),
        KeyEvent::Char(_) | KeyEvent::Resize | KeyEvent::Other => None,
    }
}

/// Drives a session from an event source until it is won or quit.
#[derive(Debug)]
pub struct Dispatcher<S> {
    source: S,
}

impl<S: EventSource> Dispatcher<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Process one event. Rejected commands are reported but not fatal.
    pub fn step(&mut self, session: &mut GameSession) -> Result<(), crate::rules::GameError> {
        let key = self.source.next_event();
        match map_key(session, key) {
            Some(command) => session.apply(command),
            None => Ok(()),
        }
    }

    /// Run the step loop to completion, rendering after every event.
    ///
    /// Rejections are swallowed here (the snapshot lets the front-end show
    /// them); the loop ends when the session is won or quit.
    pub fn run(&mut self, session: &mut GameSession, mut render: impl FnMut(&Snapshot)) {
        render(&session.snapshot());
        while !session.is_finished() {
            let _ = self.step(session);
            render(&session.snapshot());
        }
    }
}

/// Scripted event source for tests and replays.
///
/// Once the script runs out it yields `q` so a driving loop always
/// terminates.
#[derive(Clone, Debug, Default)]
pub struct ScriptedEvents {
    events: VecDeque<KeyEvent>,
}

impl ScriptedEvents {
    #[must_use]
    pub fn new(events: impl IntoIterator<Item = KeyEvent>) -> Self {
        Self {
            events: events.into_iter().collect(),
        }
    }
}

impl EventSource for ScriptedEvents {
    fn next_event(&mut self) -> KeyEvent {
        self.events.pop_front().unwrap_or(KeyEvent::Char('q'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameConfig;
    use crate::session::Selection;

    fn session() -> GameSession {
        GameSession::new(GameConfig::default().with_seed(42))
    }

    #[test]
    fn test_arrows_map_to_cursor_moves() {
        let s = session();
        assert_eq!(
            map_key(&s, KeyEvent::Left),
            Some(Command::MoveCursor(Direction::Left))
        );
        assert_eq!(
            map_key(&s, KeyEvent::Down),
            Some(Command::MoveCursor(Direction::Down))
        );
    }

    #[test]
    fn test_space_on_stock_draws() {
        let s = session();
        assert_eq!(s.board().cursor().pile, PileId::STOCK);
        assert_eq!(map_key(&s, KeyEvent::Space), Some(Command::DrawFromStock));
    }

    #[test]
    fn test_space_disambiguates_by_selection() {
        let mut s = session();

        // Idle, cursor on a tableau: mark.
        s.apply(Command::MoveCursor(Direction::Down)).unwrap();
        assert_eq!(map_key(&s, KeyEvent::Space), Some(Command::ToggleMark));

        // Marked, cursor still on the marked pile: unmark.
        s.apply(Command::ToggleMark).unwrap();
        assert!(!s.selection().is_idle());
        assert_eq!(map_key(&s, KeyEvent::Space), Some(Command::ToggleMark));

        // Marked, cursor elsewhere: commit.
        s.apply(Command::MoveCursor(Direction::Right)).unwrap();
        assert_eq!(map_key(&s, KeyEvent::Space), Some(Command::CommitMove));
    }

    #[test]
    fn test_mark_count_keys() {
        let s = session();
        assert_eq!(
            map_key(&s, KeyEvent::Char('m')),
            Some(Command::IncreaseMarkCount)
        );
        assert_eq!(
            map_key(&s, KeyEvent::Char('n')),
            Some(Command::DecreaseMarkCount)
        );
    }

    #[test]
    fn test_quit_keys() {
        let s = session();
        assert_eq!(map_key(&s, KeyEvent::Char('q')), Some(Command::Quit));
        assert_eq!(map_key(&s, KeyEvent::Char('Q')), Some(Command::Quit));
    }

    #[test]
    fn test_ignored_events() {
        let s = session();
        assert_eq!(map_key(&s, KeyEvent::Resize), None);
        assert_eq!(map_key(&s, KeyEvent::Other), None);
        assert_eq!(map_key(&s, KeyEvent::Char('x')), None);
    }

    #[test]
    fn test_run_loop_terminates_on_quit() {
        let mut s = session();
        let mut frames = 0;
        let mut dispatcher = Dispatcher::new(ScriptedEvents::new([
            KeyEvent::Space, // draw
            KeyEvent::Resize,
            KeyEvent::Char('q'),
        ]));

        dispatcher.run(&mut s, |_| frames += 1);

        assert!(s.is_finished());
        // Initial frame plus one per event.
        assert_eq!(frames, 4);
        assert_eq!(s.snapshot().pile(PileId::WASTE).cards.len(), 1);
    }

    #[test]
    fn test_exhausted_script_quits() {
        let mut s = session();
        let mut dispatcher = Dispatcher::new(ScriptedEvents::default());
        dispatcher.run(&mut s, |_| {});
        assert!(s.is_finished());
    }

    #[test]
    fn test_marking_via_keys() {
        let mut s = session();
        let mut dispatcher = Dispatcher::new(ScriptedEvents::new([
            KeyEvent::Down,  // onto tableau 0
            KeyEvent::Space, // mark its face-up card
        ]));
        dispatcher.step(&mut s).unwrap();
        dispatcher.step(&mut s).unwrap();

        assert!(matches!(s.selection(), Selection::Marked { count: 1, .. }));
    }
}
