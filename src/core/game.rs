//! Core game interface driven by the terminal [`Engine`](crate::core::engine::Engine)
use crossterm::event::KeyEvent;
use std::time::Duration;

/// Main game trait: the engine draws, forwards key presses, and never looks inside
pub trait Game {
    /// How long the engine idles between frames
    fn frame_interval(&self) -> Duration {
        Duration::from_millis(16)
    }

    /// Handle one key press. Quit keys are consumed by the engine and never arrive here.
    fn handle_input(&mut self, key: KeyEvent);

    /// Render the current state into the Ratatui Frame
    fn render(&self, frame: &mut ratatui::Frame);
}
