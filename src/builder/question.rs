//! Fluent builders for questions and question sets.

use crate::builder::error::BuildError;
use crate::core::{Answer, Question, QuestionKind, QuestionSet};

/// Builder for constructing a question with a fluent API.
#[derive(Debug, Default)]
pub struct QuestionBuilder {
    text: Option<String>,
    kind: QuestionKind,
    answers: Vec<Answer>,
}

impl QuestionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the prompt (required).
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the descriptive kind (defaults to multiple choice).
    pub fn kind(mut self, kind: QuestionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Append a candidate answer.
    pub fn answer(mut self, text: impl Into<String>, is_correct: bool) -> Self {
        self.answers.push(Answer::new(text, is_correct));
        self
    }

    pub fn correct(self, text: impl Into<String>) -> Self {
        self.answer(text, true)
    }

    pub fn incorrect(self, text: impl Into<String>) -> Self {
        self.answer(text, false)
    }

    /// Build the question.
    pub fn build(self) -> Result<Question, BuildError> {
        let text = self.text.ok_or(BuildError::MissingText)?;
        if self.answers.is_empty() {
            return Err(BuildError::NoAnswers { text });
        }

        Ok(Question {
            text,
            answers: self.answers,
            kind: self.kind,
        })
    }
}

/// Builder for an ordered, immutable question set.
#[derive(Debug, Default)]
pub struct QuestionSetBuilder {
    questions: Vec<Question>,
}

impl QuestionSetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a question using a builder.
    /// Returns an error if the builder fails validation.
    pub fn question(mut self, builder: QuestionBuilder) -> Result<Self, BuildError> {
        self.questions.push(builder.build()?);
        Ok(self)
    }

    /// Add a pre-built question.
    pub fn push(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    pub fn build(self) -> Result<QuestionSet, BuildError> {
        if self.questions.is_empty() {
            return Err(BuildError::NoQuestions);
        }
        Ok(QuestionSet::new(self.questions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_missing_text() {
        let result = QuestionBuilder::new().correct("yes").build();
        assert_eq!(result, Err(BuildError::MissingText));
    }

    #[test]
    fn builder_validates_missing_answers() {
        let result = QuestionBuilder::new().text("Anything?").build();
        assert!(matches!(result, Err(BuildError::NoAnswers { .. })));
    }

    #[test]
    fn fluent_api_builds_question() {
        let question = QuestionBuilder::new()
            .text("Is the sky blue?")
            .kind(QuestionKind::TrueFalse)
            .correct("yes")
            .incorrect("no")
            .build()
            .unwrap();

        assert_eq!(question.kind, QuestionKind::TrueFalse);
        assert_eq!(question.answers.len(), 2);
        assert_eq!(question.correct_answer_index(), Some(0));
    }

    #[test]
    fn set_builder_requires_questions() {
        assert_eq!(
            QuestionSetBuilder::new().build(),
            Err(BuildError::NoQuestions)
        );
    }

    #[test]
    fn set_builder_preserves_order() {
        let set = QuestionSetBuilder::new()
            .question(QuestionBuilder::new().text("first").correct("a"))
            .unwrap()
            .question(QuestionBuilder::new().text("second").correct("b"))
            .unwrap()
            .build()
            .unwrap();

        let prompts: Vec<_> = set.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(prompts, ["first", "second"]);
    }

    #[test]
    fn set_builder_propagates_question_errors() {
        let result = QuestionSetBuilder::new().question(QuestionBuilder::new().correct("a"));
        assert!(matches!(result, Err(BuildError::MissingText)));
    }
}
