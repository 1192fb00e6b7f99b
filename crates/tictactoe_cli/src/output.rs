//! Rendering snapshots for the terminal.

use super::cli::OutputFormat;
use tictactoe_core::GameSnapshot;

/// Renders a snapshot in the requested format.
pub fn render(snapshot: &GameSnapshot, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => Ok(snapshot.to_string()),
        OutputFormat::Json => snapshot.to_json_pretty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Game;

    #[test]
    fn test_json_output_parses_back() {
        let snapshot = Game::setup("alice", "bob").unwrap().snapshot();
        let rendered = render(&snapshot, OutputFormat::Json).unwrap();
        let parsed: GameSnapshot = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_text_output_ends_with_status() {
        let snapshot = Game::setup("alice", "bob").unwrap().snapshot();
        let rendered = render(&snapshot, OutputFormat::Text).unwrap();
        assert!(rendered.ends_with("alice to move."));
    }
}
