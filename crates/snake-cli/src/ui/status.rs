use snake_engine::ScoreDisplay;

/// Score and result text, as last published by the game.
#[derive(Debug, Clone, Default)]
pub(crate) struct StatusPanel {
    score: usize,
    result: String,
}

impl StatusPanel {
    pub(crate) fn score(&self) -> usize {
        self.score
    }

    /// Result message, empty while a game is in progress.
    pub(crate) fn result(&self) -> &str {
        &self.result
    }
}

impl ScoreDisplay for StatusPanel {
    fn set_score(&mut self, score: usize) {
        self.score = score;
    }

    fn set_result(&mut self, message: &str) {
        message.clone_into(&mut self.result);
    }
}
