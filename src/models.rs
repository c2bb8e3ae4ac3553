use serde::{Deserialize, Deserializer, Serialize};

pub type TriviaBundles = Vec<TriviaBundle>;

/// A trivia question together with its candidate answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriviaBundle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub show_answer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trivia_bundle_id: Option<i32>,
    #[serde(default)]
    pub answer_text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// Missing fields take their zero value, so `"answers": null` reads as no answers.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<Answer>, D::Error> {
    Ok(Option::<Vec<Answer>>::deserialize(d)?.unwrap_or_default())
}

impl Answer {
    pub fn new(answer_text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            id: None,
            trivia_bundle_id: None,
            answer_text: answer_text.into(),
            is_correct,
        }
    }
}
