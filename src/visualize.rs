use std::fmt::Display;
use std::fmt::Write;

use crate::state::SessionView;

/// Customize board rendering for CLI output.
#[derive(Clone, Copy, Debug)]
pub struct VisualOptions {
    /// Print card ids next to every cell.
    pub show_ids: bool,
    /// Show the face of every card, including face-down ones. Debugging
    /// aid; defeats the point of the game otherwise.
    pub reveal_all: bool,
    /// Cells per board row.
    pub columns: usize,
}

impl Default for VisualOptions {
    fn default() -> Self {
        Self {
            show_ids: true,
            reveal_all: false,
            columns: 6,
        }
    }
}

pub fn render_session<V: Display>(state: &SessionView<V>) -> String {
    render_session_with_options(state, VisualOptions::default())
}

/// Renders the board and counters as a multi-line string.
///
/// Face-down cards show `#`, face-up cards their value, matched cards
/// their value in parentheses.
pub fn render_session_with_options<V: Display>(
    state: &SessionView<V>,
    options: VisualOptions,
) -> String {
    let mut out = String::new();
    let status = if state.is_complete {
        "complete"
    } else if state.is_locked {
        "resolving"
    } else {
        "awaiting input"
    };
    let _ = writeln!(
        out,
        "Score: {} / {}  |  Moves: {}  |  Status: {status}",
        state.score,
        state.pair_count(),
        state.moves
    );
    let columns = options.columns.max(1);
    for row in state.cards.chunks(columns) {
        let mut line = String::new();
        for card in row {
            let face = if card.is_matched {
                format!("({})", card.value)
            } else if card.is_flipped || options.reveal_all {
                format!("[{}]", card.value)
            } else {
                String::from("[#]")
            };
            if options.show_ids {
                let _ = write!(line, " {:>2}:{face:<5}", card.id);
            } else {
                let _ = write!(line, " {face:<5}");
            }
        }
        let _ = writeln!(out, " {}", line.trim_end());
    }
    out
}
