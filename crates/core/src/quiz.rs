use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const PASS_THRESHOLD_PERCENT: u32 = 70;
pub const QUIZ_BONUS_POINTS: u32 = 50;
pub const QUIZ_MASTER_BADGE: &str = "quiz-master";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub id: u32,
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOutcome {
    pub correct: usize,
    pub total: usize,
    pub score_percent: u32,
    pub passed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    pub total_points: u32,
    pub level: u32,
    pub badges: Vec<String>,
    pub completed_modules: Vec<String>,
    pub current_streak: u32,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            total_points: 1250,
            level: 3,
            badges: vec![
                "water-safety".to_string(),
                "hygiene-expert".to_string(),
                "community-helper".to_string(),
            ],
            completed_modules: vec![
                "water-basics".to_string(),
                "hygiene-practices".to_string(),
                "disease-prevention".to_string(),
            ],
            current_streak: 7,
        }
    }
}

impl UserProgress {
    /// Awards the bonus and badge for a passed quiz. Returns whether anything
    /// changed.
    pub fn apply_quiz(&mut self, outcome: &QuizOutcome) -> bool {
        if !outcome.passed {
            return false;
        }

        self.total_points += QUIZ_BONUS_POINTS;
        if !self.badges.iter().any(|badge| badge == QUIZ_MASTER_BADGE) {
            self.badges.push(QUIZ_MASTER_BADGE.to_string());
        }
        true
    }
}

/// Scores `answers` (question id -> chosen option index). Unanswered
/// questions count as wrong.
pub fn score_quiz(questions: &[QuizQuestion], answers: &HashMap<u32, usize>) -> QuizOutcome {
    let total = questions.len();
    let correct = questions
        .iter()
        .filter(|question| answers.get(&question.id) == Some(&question.correct))
        .count();

    let score_percent = if total == 0 {
        0
    } else {
        ((correct as f64 / total as f64) * 100.0).round() as u32
    };

    QuizOutcome {
        correct,
        total,
        score_percent,
        passed: score_percent >= PASS_THRESHOLD_PERCENT,
    }
}

pub fn builtin_quiz() -> Vec<QuizQuestion> {
    vec![
        question(
            1,
            "What is the recommended minimum time for hand washing?",
            &["10 seconds", "20 seconds", "30 seconds", "1 minute"],
            1,
            "Hand washing should be done for at least 20 seconds with soap and clean water to effectively remove germs.",
        ),
        question(
            2,
            "Which of these is a common sign of water contamination?",
            &["Clear color", "No smell", "Unusual taste or odor", "Normal temperature"],
            2,
            "Unusual taste, odor, or color can indicate water contamination and should be investigated immediately.",
        ),
        question(
            3,
            "What should you do if you suspect a water-borne disease outbreak?",
            &["Wait and see", "Report to health authorities", "Ignore it", "Treat yourself"],
            1,
            "Immediate reporting to health authorities is crucial for early intervention and preventing spread.",
        ),
    ]
}

fn question(
    id: u32,
    text: &str,
    options: &[&str],
    correct: usize,
    explanation: &str,
) -> QuizQuestion {
    QuizQuestion {
        id,
        question: text.to_string(),
        options: options.iter().map(|option| option.to_string()).collect(),
        correct,
        explanation: explanation.to_string(),
    }
}
