//! One run through the quiz for one player.

use rand::seq::SliceRandom;

use crate::models::{Question, OPTION_COUNT};

/// A quiz in progress. The session snapshots the bank at start, so questions
/// added afterwards only appear in the next run.
#[derive(Debug, Clone)]
pub struct QuizSession {
    username: String,
    active: Vec<Question>,
    current: usize,
    score: u32,
    selected: Option<usize>,
}

impl QuizSession {
    /// Copies the bank and shuffles the copy. The bank itself keeps its
    /// builtin-then-user order.
    pub fn start(username: String, bank: &[Question]) -> Self {
        let mut active = bank.to_vec();
        active.shuffle(&mut rand::thread_rng());
        Self {
            username,
            active,
            current: 0,
            score: 0,
            selected: None,
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.active.get(self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn total(&self) -> usize {
        self.active.len()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_finished(&self) -> bool {
        self.current >= self.active.len()
    }

    /// Returns whether the selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if self.is_finished() || index >= OPTION_COUNT {
            return false;
        }
        let prev = self.selected.replace(index);
        prev != Some(index)
    }

    /// Moves the selection up or down, wrapping at the ends. With nothing
    /// selected yet, down lands on the first option and up on the last.
    pub fn cycle_selection(&mut self, delta: isize) -> bool {
        if self.is_finished() || delta == 0 {
            return false;
        }

        let next = match self.selected {
            None if delta > 0 => 0,
            None => OPTION_COUNT - 1,
            Some(current) => (current as isize + delta).rem_euclid(OPTION_COUNT as isize) as usize,
        };

        let prev = self.selected.replace(next);
        prev != Some(next)
    }

    /// Scores the question being left and moves on. No selection counts as
    /// incorrect; each question is scored exactly once.
    pub fn advance(&mut self) -> bool {
        let Some(question) = self.active.get(self.current) else {
            return false;
        };

        if self.selected.is_some_and(|choice| question.is_correct(choice)) {
            self.score += 1;
        }
        self.current += 1;
        self.selected = None;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/session.rs"]
mod tests;
