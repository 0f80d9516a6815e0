//! Python bindings for the badminton scoreboard core.
//!
//! Lets a Python UI shell drive the store and query the rules.
//!
//! # Quick Start
//!
//! ```python
//! import badminton_scoreboard as bs
//!
//! store = bs.MatchStore()
//! store.start_match("mens_doubles", team_a=("Lee", "Tan"), team_b=("Kim", "Cho"))
//!
//! store.score_point("A")
//! print(store.game_state, store.serve_side)
//!
//! # Persist however the host app likes
//! blob = store.snapshot()
//! store = bs.MatchStore.restore(blob)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_rules;
mod py_store;

pub use py_core::*;
pub use py_rules::*;
pub use py_store::*;

/// badminton_scoreboard: match scoring for scoreboard displays.
///
/// This module provides:
/// - The match store (actions, undo, snapshots)
/// - Pure scoring rules
#[pymodule]
fn badminton_scoreboard(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Store
    m.add_class::<PyMatchStore>()?;

    // Rules
    m.add_function(wrap_pyfunction!(classify_game_state, m)?)?;
    m.add_function(wrap_pyfunction!(serve_side, m)?)?;
    m.add_function(wrap_pyfunction!(match_winner, m)?)?;
    m.add_function(wrap_pyfunction!(game_winner, m)?)?;
    m.add_function(wrap_pyfunction!(is_doubles_format, m)?)?;

    Ok(())
}
