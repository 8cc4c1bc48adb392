//! Notifications the game pushes to its front-end.
//!
//! Serialized, each event has the exact shape the browser UI listens for:
//! `{ "type": "reveal", "r": 3, "c": 4 }`,
//! `{ "type": "flag", "r": 0, "c": 1, "flagged": true }`,
//! `{ "type": "gameOver", "win": false }`.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum GameEvent {
    /// A cell became revealed, by a direct click or a flood fill.
    Reveal { r: usize, c: usize },
    /// A flag was placed or removed.
    Flag { r: usize, c: usize, flagged: bool },
    /// The game ended. Always the last event of the action that caused it.
    GameOver { win: bool },
}

/// Receiver for [`GameEvent`]s, called synchronously from inside the
/// mutating operations.
pub trait GameObserver {
    fn notify(&mut self, event: &GameEvent);
}

impl<F> GameObserver for F
where
    F: FnMut(&GameEvent),
{
    fn notify(&mut self, event: &GameEvent) {
        self(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shapes() {
        let reveal = serde_json::to_value(GameEvent::Reveal { r: 3, c: 4 }).unwrap();
        assert_eq!(reveal, serde_json::json!({ "type": "reveal", "r": 3, "c": 4 }));

        let flag = serde_json::to_value(GameEvent::Flag { r: 0, c: 1, flagged: true }).unwrap();
        assert_eq!(
            flag,
            serde_json::json!({ "type": "flag", "r": 0, "c": 1, "flagged": true })
        );

        let over = serde_json::to_value(GameEvent::GameOver { win: false }).unwrap();
        assert_eq!(over, serde_json::json!({ "type": "gameOver", "win": false }));
    }

    #[test]
    fn test_closure_observer() {
        let mut seen = Vec::new();
        {
            let mut observer = |event: &GameEvent| seen.push(*event);
            observer.notify(&GameEvent::GameOver { win: true });
        }
        assert_eq!(seen, vec![GameEvent::GameOver { win: true }]);
    }
}
