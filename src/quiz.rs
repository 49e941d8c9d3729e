use std::rc::Rc;

use log::{debug, info};
use yew::functional::Reducible;

use crate::content::Question;
use crate::notice::Notice;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    ShowingResults,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    Select(usize),
    Advance,
    Reset,
}

/// Feedback bucket used for the completion toast and the results blurb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Top,
    Mid,
    Bottom,
}

impl ScoreTier {
    pub fn for_score(score: usize) -> Self {
        if score >= 7 {
            ScoreTier::Top
        } else if score >= 5 {
            ScoreTier::Mid
        } else {
            ScoreTier::Bottom
        }
    }

    pub fn notice(self, score: usize, total: usize) -> Notice {
        match self {
            ScoreTier::Top => Notice::normal(
                "Excellent! 🏆",
                format!("You scored {}/{}! You're ready for the innovation challenge!", score, total),
            ),
            ScoreTier::Mid => Notice::normal(
                "Good job! 🎯",
                format!("You scored {}/{}! Keep learning and growing!", score, total),
            ),
            ScoreTier::Bottom => Notice::normal(
                "Keep exploring! 💡",
                format!("You scored {}/{}! Innovation is a journey of continuous learning!", score, total),
            ),
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ScoreTier::Top => "Outstanding knowledge! You're innovation-ready! 🚀",
            ScoreTier::Mid => "Good foundation! Keep building your entrepreneurship skills! 💪",
            ScoreTier::Bottom => "Every expert was once a beginner! Keep learning and growing! 🌱",
        }
    }
}

/// Title and color for the big score on the results card.
pub fn score_badge(score: usize) -> (&'static str, &'static str) {
    if score >= 8 {
        ("Innovation Master! 🚀", "#22c55e")
    } else if score >= 6 {
        ("Future Entrepreneur! 💡", "#3b82f6")
    } else if score >= 4 {
        ("Learning Enthusiast! 📚", "#eab308")
    } else {
        ("Innovation Explorer! 🔍", "#ef4444")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    questions: &'static [Question],
    current: usize,
    answers: Vec<Option<usize>>,
    phase: Phase,
    /// Bumped every time the results phase is reached.
    completions: u32,
}

impl QuizSession {
    pub fn new(questions: &'static [Question]) -> Self {
        Self {
            questions,
            current: 0,
            answers: vec![None; questions.len()],
            phase: Phase::NotStarted,
            completions: 0,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&'static Question> {
        self.questions.get(self.current)
    }

    pub fn answer(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    pub fn completions(&self) -> u32 {
        self.completions
    }

    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn can_advance(&self) -> bool {
        self.phase == Phase::InProgress && self.answer(self.current).is_some()
    }

    /// Fraction of the quiz reached, counting the current question.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current + 1) as f64 / self.questions.len() as f64
    }

    pub fn is_correct(&self, index: usize) -> bool {
        match (self.answer(index), self.questions.get(index)) {
            (Some(chosen), Some(q)) => chosen == q.correct,
            _ => false,
        }
    }

    /// Only available once the results are showing.
    pub fn score(&self) -> Option<usize> {
        if self.phase != Phase::ShowingResults {
            return None;
        }
        Some((0..self.questions.len()).filter(|&i| self.is_correct(i)).count())
    }

    pub fn start(&mut self) {
        if self.phase == Phase::NotStarted && !self.questions.is_empty() {
            self.phase = Phase::InProgress;
        }
    }

    pub fn select(&mut self, option: usize) {
        if self.phase != Phase::InProgress {
            return;
        }
        let in_range = self
            .current_question()
            .map_or(false, |q| option < q.options.len());
        if in_range {
            self.answers[self.current] = Some(option);
        }
    }

    /// Moves to the next question or to the results. Returns false when the
    /// current question has no answer yet.
    pub fn advance(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        if self.is_last_question() {
            self.phase = Phase::ShowingResults;
            self.completions = self.completions.wrapping_add(1);
            info!("Quiz finished with score {}/{}", self.score().unwrap_or(0), self.questions.len());
        } else {
            self.current += 1;
            debug!("Quiz question {}", self.current + 1);
        }
        true
    }

    pub fn reset(&mut self) {
        self.current = 0;
        self.answers = vec![None; self.questions.len()];
        self.phase = Phase::NotStarted;
    }
}

impl Reducible for QuizSession {
    type Action = QuizAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            QuizAction::Start => next.start(),
            QuizAction::Select(option) => next.select(option),
            QuizAction::Advance => {
                next.advance();
            }
            QuizAction::Reset => next.reset(),
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::quiz_bank;

    fn play(answers: &[usize]) -> QuizSession {
        let mut quiz = QuizSession::new(quiz_bank());
        quiz.start();
        for &a in answers {
            quiz.select(a);
            assert!(quiz.advance());
        }
        quiz
    }

    #[test]
    fn perfect_answers_score_ten() {
        let quiz = play(&[1, 1, 2, 2, 1, 2, 2, 2, 1, 1]);
        assert_eq!(quiz.phase(), Phase::ShowingResults);
        assert_eq!(quiz.score(), Some(10));
        assert_eq!(ScoreTier::for_score(10), ScoreTier::Top);
        assert_eq!(quiz.completions(), 1);
    }

    #[test]
    fn all_wrong_scores_zero() {
        let quiz = play(&[0; 10]);
        assert_eq!(quiz.score(), Some(0));
        assert!((0..10).all(|i| !quiz.is_correct(i)));
    }

    #[test]
    fn score_counts_exact_matches() {
        let quiz = play(&[1, 0, 2, 0, 1, 0, 2, 0, 1, 0]);
        assert_eq!(quiz.score(), Some(5));
        assert_eq!(ScoreTier::for_score(5), ScoreTier::Mid);
    }

    #[test]
    fn advance_is_refused_until_answered() {
        let mut quiz = QuizSession::new(quiz_bank());
        assert!(!quiz.advance());
        quiz.start();
        assert!(!quiz.can_advance());
        assert!(!quiz.advance());
        assert_eq!(quiz.current_index(), 0);
        quiz.select(3);
        quiz.select(1);
        assert_eq!(quiz.answer(0), Some(1));
        assert!(quiz.advance());
        assert_eq!(quiz.current_index(), 1);
    }

    #[test]
    fn out_of_range_option_is_ignored() {
        let mut quiz = QuizSession::new(quiz_bank());
        quiz.start();
        quiz.select(4);
        assert_eq!(quiz.answer(0), None);
    }

    #[test]
    fn score_is_hidden_until_results() {
        let mut quiz = QuizSession::new(quiz_bank());
        quiz.start();
        quiz.select(1);
        quiz.advance();
        assert_eq!(quiz.score(), None);
    }

    #[test]
    fn reset_clears_answers_and_score() {
        let mut quiz = play(&[1; 10]);
        assert!(quiz.score().is_some());
        quiz.reset();
        assert_eq!(quiz.phase(), Phase::NotStarted);
        assert_eq!(quiz.current_index(), 0);
        assert_eq!(quiz.score(), None);
        assert!((0..10).all(|i| quiz.answer(i).is_none()));
    }

    #[test]
    fn completions_count_every_finished_run() {
        let mut quiz = play(&[1; 10]);
        quiz.reset();
        assert_eq!(quiz.completions(), 1);
        quiz.start();
        for _ in 0..10 {
            quiz.select(2);
            quiz.advance();
        }
        assert_eq!(quiz.completions(), 2);
    }

    #[test]
    fn tiers_follow_thresholds() {
        assert_eq!(ScoreTier::for_score(7), ScoreTier::Top);
        assert_eq!(ScoreTier::for_score(6), ScoreTier::Mid);
        assert_eq!(ScoreTier::for_score(4), ScoreTier::Bottom);
        assert_eq!(ScoreTier::Top.notice(10, 10).body, "You scored 10/10! You're ready for the innovation challenge!");
        assert_eq!(ScoreTier::Bottom.notice(2, 10).title, "Keep exploring! 💡");
        assert_eq!(score_badge(8).0, "Innovation Master! 🚀");
        assert_eq!(score_badge(7).0, "Future Entrepreneur! 💡");
        assert_eq!(score_badge(4).0, "Learning Enthusiast! 📚");
        assert_eq!(score_badge(3).0, "Innovation Explorer! 🔍");
    }

    #[test]
    fn reducer_applies_actions() {
        let quiz = Rc::new(QuizSession::new(quiz_bank()));
        let quiz = quiz.reduce(QuizAction::Start);
        let quiz = quiz.reduce(QuizAction::Advance);
        assert_eq!(quiz.current_index(), 0);
        let quiz = quiz.reduce(QuizAction::Select(2));
        let quiz = quiz.reduce(QuizAction::Advance);
        assert_eq!(quiz.current_index(), 1);
        let quiz = quiz.reduce(QuizAction::Reset);
        assert_eq!(quiz.phase(), Phase::NotStarted);
    }
}
