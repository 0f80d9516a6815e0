//! Match store bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use crate::core::{ActionOutcome, DoublesTeam, MatchSetup, Slot};
use crate::store::{decode_state, encode_state, MatchStore};

use super::py_core::{game_state_str, parse_format, parse_slot, serve_side_str, slot_str};

/// Python wrapper for MatchStore.
///
/// Every action returns True if it changed the match, False if it was
/// ignored (scoring a decided game, undoing with no history, ...).
#[pyclass(name = "MatchStore", unsendable)]
pub struct PyMatchStore {
    inner: MatchStore,
}

#[pymethods]
impl PyMatchStore {
    /// Create a store holding pre-match defaults.
    #[new]
    fn new() -> Self {
        Self {
            inner: MatchStore::new(),
        }
    }

    /// Restore a store from bytes produced by `snapshot()`.
    #[staticmethod]
    fn restore(data: &[u8]) -> PyResult<Self> {
        let state = decode_state(data).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self {
            inner: MatchStore::with_state(state),
        })
    }

    /// Serialize the whole match.
    fn snapshot<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyBytes>> {
        let bytes =
            encode_state(self.inner.state()).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyBytes::new_bound(py, &bytes))
    }

    /// Start a match.
    ///
    /// # Arguments
    /// - format: "mens_singles", "womens_singles", "mens_doubles",
    ///   "womens_doubles" or "mixed_doubles"
    /// - name_a, name_b: singles names (blank for defaults)
    /// - team_a, team_b: doubles rosters as (player1, player2)
    #[pyo3(signature = (format, name_a = String::new(), name_b = String::new(), team_a = None, team_b = None))]
    fn start_match(
        &mut self,
        format: &str,
        name_a: String,
        name_b: String,
        team_a: Option<(String, String)>,
        team_b: Option<(String, String)>,
    ) -> PyResult<bool> {
        let mut setup = MatchSetup::new(parse_format(format)?).with_names(name_a, name_b);
        if let Some((p1, p2)) = team_a {
            setup = setup.with_team(Slot::A, DoublesTeam::new(p1, p2));
        }
        if let Some((p1, p2)) = team_b {
            setup = setup.with_team(Slot::B, DoublesTeam::new(p1, p2));
        }
        Ok(applied(self.inner.start_match(setup)))
    }

    fn score_point(&mut self, slot: &str) -> PyResult<bool> {
        Ok(applied(self.inner.score_point(parse_slot(slot)?)))
    }

    fn undo(&mut self) -> bool {
        applied(self.inner.undo())
    }

    fn confirm_set_win(&mut self, winner: &str) -> PyResult<bool> {
        Ok(applied(self.inner.confirm_set_win(parse_slot(winner)?)))
    }

    fn reset_game(&mut self) -> bool {
        applied(self.inner.reset_game())
    }

    fn reset_match(&mut self) -> bool {
        applied(self.inner.reset_match())
    }

    fn back_to_setup(&mut self) -> bool {
        applied(self.inner.back_to_setup())
    }

    fn set_name(&mut self, slot: &str, name: String) -> PyResult<bool> {
        Ok(applied(self.inner.set_name(parse_slot(slot)?, name)))
    }

    #[getter]
    fn started(&self) -> bool {
        self.inner.state().is_started()
    }

    #[getter]
    fn format(&self) -> &'static str {
        self.inner.state().format().key()
    }

    #[getter]
    fn game_state(&self) -> &'static str {
        game_state_str(self.inner.game_state())
    }

    #[getter]
    fn serve_side(&self) -> &'static str {
        serve_side_str(self.inner.serve_side())
    }

    #[getter]
    fn current_server(&self) -> &'static str {
        slot_str(self.inner.state().current_server())
    }

    #[getter]
    fn match_winner(&self) -> Option<&'static str> {
        self.inner.match_winner().map(slot_str)
    }

    #[getter]
    fn game_winner(&self) -> Option<&'static str> {
        self.inner.game_winner().map(slot_str)
    }

    /// Banner text for the current game state, if any.
    #[getter]
    fn alert(&self) -> Option<&'static str> {
        self.inner.game_state().label()
    }

    /// Final scores of confirmed games as (score_a, score_b).
    #[getter]
    fn completed_games(&self) -> Vec<(u32, u32)> {
        self.inner
            .state()
            .completed_games()
            .iter()
            .map(|g| (g.score_a, g.score_b))
            .collect()
    }

    #[getter]
    fn history_len(&self) -> usize {
        self.inner.state().history().len()
    }

    fn name(&self, slot: &str) -> PyResult<String> {
        Ok(self.inner.state().name(parse_slot(slot)?).to_string())
    }

    fn score(&self, slot: &str) -> PyResult<u32> {
        Ok(self.inner.state().score(parse_slot(slot)?))
    }

    fn sets_won(&self, slot: &str) -> PyResult<u32> {
        Ok(self.inner.state().sets_won(parse_slot(slot)?))
    }

    fn __repr__(&self) -> String {
        let state = self.inner.state();
        format!(
            "MatchStore({} {}-{}, sets {}-{}, {})",
            state.format().key(),
            state.score(Slot::A),
            state.score(Slot::B),
            state.sets_won(Slot::A),
            state.sets_won(Slot::B),
            game_state_str(state.game_state())
        )
    }
}

fn applied(outcome: ActionOutcome) -> bool {
    outcome.is_applied()
}
