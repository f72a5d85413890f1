//! Questions, answers and the immutable question set.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::sync::Arc;

/// One candidate response to a question.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, is_correct: bool) -> Self {
        Self {
            text: text.into(),
            is_correct,
        }
    }
}

/// Descriptive question category. Never affects scoring or transitions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionKind {
    #[default]
    MultipleChoice,
    TrueFalse,
    FillInTheBlank,
}

/// One quiz prompt with an ordered list of candidate answers.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub answers: Vec<Answer>,
    #[serde(default)]
    pub kind: QuestionKind,
}

impl Question {
    /// Candidate answer at `index`, if it belongs to this question.
    pub fn answer(&self, index: usize) -> Option<&Answer> {
        self.answers.get(index)
    }

    /// Index of the first answer flagged correct.
    pub fn correct_answer_index(&self) -> Option<usize> {
        self.answers.iter().position(|a| a.is_correct)
    }
}

/// Immutable, cheaply cloneable ordered sequence of questions.
///
/// A set is fixed at construction and shared read-only by every holder, so
/// separate quiz sessions never share mutable state.
///
/// # Example
///
/// ```rust
/// use quizmind::core::QuestionSet;
///
/// let questions = QuestionSet::builtin();
/// assert_eq!(questions.len(), 10);
/// let shared = questions.clone();
/// assert_eq!(shared[0].text, questions[0].text);
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(from = "Vec<Question>", into = "Vec<Question>")]
pub struct QuestionSet {
    questions: Arc<[Question]>,
}

impl QuestionSet {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: questions.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Question> {
        self.questions.iter()
    }

    pub fn as_slice(&self) -> &[Question] {
        &self.questions
    }

    /// The ten general-knowledge questions shipped with the quiz.
    pub fn builtin() -> Self {
        use crate::builder::{fill_in_the_blank, multiple_choice, true_false};

        Self::new(vec![
            multiple_choice(
                "What is the chemical formula for water?",
                "H₂O",
                &["CO₂", "H₂O₂"],
            ),
            true_false("What is the national flower of India?", "lotus", "rose"),
            fill_in_the_blank(
                "The fastest land animal is the ___.",
                "Cheetah",
                &["lion", "rapid", "elephant"],
            ),
            multiple_choice(
                "Where is City Birds Wildlife Sanctuary?",
                "chandigarh",
                &["delhi", "mumbai"],
            ),
            true_false(
                "Who is known as the \"Father of the Nation\" in India?",
                "Mahatma Gandhi",
                "pandit jawahar lal nehru",
            ),
            fill_in_the_blank(
                "Fill in the blank: The largest planet in our solar system is ___.",
                "Jupiter",
                &["pluto", "earth", "mars"],
            ),
            multiple_choice(
                "Who was the first prime minister of India?",
                "pandit Jawaharlal Nehru",
                &["Mahatma Gandhi", "dr.manmohan singh"],
            ),
            multiple_choice(
                "What is the largest mammal in the world?",
                "Blue Whale",
                &["African Elephant", "Great White Shark"],
            ),
            multiple_choice(
                "When did India gain independence?",
                "1947",
                &["1954", "2001"],
            ),
            multiple_choice("What is the square root of 64?", "8", &["6", "7"]),
        ])
    }
}

impl From<Vec<Question>> for QuestionSet {
    fn from(questions: Vec<Question>) -> Self {
        Self::new(questions)
    }
}

impl From<QuestionSet> for Vec<Question> {
    fn from(set: QuestionSet) -> Self {
        set.questions.to_vec()
    }
}

impl Index<usize> for QuestionSet {
    type Output = Question;

    fn index(&self, index: usize) -> &Question {
        &self.questions[index]
    }
}

impl<'a> IntoIterator for &'a QuestionSet {
    type Item = &'a Question;
    type IntoIter = std::slice::Iter<'a, Question>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_set_has_one_correct_answer_each() {
        let questions = QuestionSet::builtin();

        assert_eq!(questions.len(), 10);
        for question in &questions {
            let correct = question.answers.iter().filter(|a| a.is_correct).count();
            assert_eq!(correct, 1, "{}", question.text);
        }
    }

    #[test]
    fn answer_lookup_respects_bounds() {
        let questions = QuestionSet::builtin();
        let first = &questions[0];

        assert_eq!(first.answer(0).map(|a| a.text.as_str()), Some("H₂O"));
        assert!(first.answer(first.answers.len()).is_none());
        assert_eq!(first.correct_answer_index(), Some(0));
    }

    #[test]
    fn clones_share_storage() {
        let questions = QuestionSet::builtin();
        let cloned = questions.clone();

        assert!(std::ptr::eq(questions.as_slice(), cloned.as_slice()));
    }

    #[test]
    fn kind_uses_kebab_case() {
        let json = serde_json::to_string(&QuestionKind::FillInTheBlank).unwrap();
        assert_eq!(json, "\"fill-in-the-blank\"");
    }

    #[test]
    fn set_deserializes_from_plain_list() {
        let json = r#"[
            {"text": "2 + 2?", "answers": [{"text": "4", "is_correct": true}, {"text": "5"}]}
        ]"#;

        let questions: QuestionSet = serde_json::from_str(json).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].kind, QuestionKind::MultipleChoice);
        assert!(!questions[0].answers[1].is_correct);
    }
}
