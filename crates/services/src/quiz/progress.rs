/// Aggregated view of quiz progress, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizProgress {
    pub current: usize,
    pub total: usize,
    pub correct: u32,
    pub incorrect: u32,
    pub is_finished: bool,
}

impl QuizProgress {
    /// Share of questions already left behind, in `[0, 100]`.
    #[must_use]
    pub fn completed_percent(&self) -> u8 {
        quiz_core::model::percentage(
            u32::try_from(self.current).unwrap_or(u32::MAX),
            u32::try_from(self.total).unwrap_or(u32::MAX),
        )
    }
}
