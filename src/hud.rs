//! Score and game-over display capability
//!
//! The host wires these to real DOM elements; when those elements are absent
//! (headless runs, tests) `NullDisplay` turns every write into a no-op
//! instead of throwing or halting the loop.

/// Observable session output: a score readout and a game-over panel
pub trait ScoreDisplay {
    fn set_score(&mut self, score: u64);
    fn show_game_over(&mut self, final_score: u64);
    fn hide_game_over(&mut self);
}

/// No-op display for headless runs
#[derive(Debug, Default)]
pub struct NullDisplay;

impl ScoreDisplay for NullDisplay {
    fn set_score(&mut self, _score: u64) {}
    fn show_game_over(&mut self, _final_score: u64) {}
    fn hide_game_over(&mut self) {}
}

/// Display that reports through the log facade, used by the demo binary
#[derive(Debug, Default)]
pub struct LogDisplay {
    last_logged: Option<u64>,
}

impl ScoreDisplay for LogDisplay {
    fn set_score(&mut self, score: u64) {
        // Only log whole-score changes, not every tick
        if self.last_logged != Some(score) {
            log::debug!("score: {score}");
            self.last_logged = Some(score);
        }
    }

    fn show_game_over(&mut self, final_score: u64) {
        log::info!("game over, final score {final_score}");
    }

    fn hide_game_over(&mut self) {
        log::info!("restarting");
        self.last_logged = None;
    }
}
