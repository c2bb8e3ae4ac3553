// Database row structs

use crate::models::{Answer, TriviaBundle};

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BundleRow {
    pub id: i32,
    pub question: String,
    pub category: String,
    pub show_answer: bool,
}

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AnswerRow {
    pub id: i32,
    pub trivia_bundle_id: i32,
    pub answer_text: String,
    pub is_correct: bool,
}

impl BundleRow {
    /// Assemble the aggregate from the parent row and its child rows.
    pub fn into_bundle(self, answers: Vec<AnswerRow>) -> TriviaBundle {
        TriviaBundle {
            id: Some(self.id),
            question: self.question,
            category: self.category,
            answers: answers.into_iter().map(Answer::from).collect(),
            show_answer: self.show_answer,
        }
    }
}

impl From<AnswerRow> for Answer {
    fn from(row: AnswerRow) -> Self {
        Answer {
            id: Some(row.id),
            trivia_bundle_id: Some(row.trivia_bundle_id),
            answer_text: row.answer_text,
            is_correct: row.is_correct,
        }
    }
}
