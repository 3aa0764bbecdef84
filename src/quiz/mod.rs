pub mod keywords;
pub mod notes;
pub mod tokenize;

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,
}

impl Quiz {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Question {
    /// The source sentence with the answer word blanked out.
    pub prompt: String,
    pub answers: Vec<Answer>,
    /// Names the correct answer and quotes the sentence it came from.
    pub explanation: String,
}
impl Question {
    pub fn new(prompt: String, answers: Vec<Answer>, explanation: String) -> Self {
        Self {
            prompt,
            answers,
            explanation,
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Answer {
    pub text: String,
    pub is_correct: bool,
}
impl Answer {
    pub fn new(text: String, is_correct: bool) -> Self {
        Self { text, is_correct }
    }
}
