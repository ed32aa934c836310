use strum::{AsRefStr, Display};

use crate::{
    Answers, FlowError, FlowResult, Mode, Question, RandomSource, Snapshot, build_result,
    questions,
};

#[derive(Display, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[strum(serialize_all = "kebab-case")]
pub enum FlowStep {
    #[default]
    ModeSelection,
    Questions,
    Result,
    Celebration,
}

/// Walks one decision from mode selection through the questions to a
/// confirmed suggestion.
#[derive(Debug, Clone, Default)]
pub struct Flow {
    step: FlowStep,
    mode: Option<Mode>,
    answers: Answers,
    question_index: usize,
    result: Option<FlowResult>,
}

impl Flow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> FlowStep {
        self.step
    }

    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn question_index(&self) -> usize {
        self.question_index
    }

    pub fn result(&self) -> Option<&FlowResult> {
        self.result.as_ref()
    }

    /// The question waiting for an answer, if any.
    pub fn current_question(&self) -> Option<&'static Question> {
        if self.step != FlowStep::Questions {
            return None;
        }

        questions(self.mode?).get(self.question_index)
    }

    /// One-based position of the current question and the sequence length.
    pub fn progress(&self) -> Option<(usize, usize)> {
        let mode = self.mode?;
        self.current_question()?;

        Some((self.question_index + 1, questions(mode).len()))
    }

    /// Starts a mode. Generation with an empty pantry skips the questions and
    /// lands straight on [`FlowResult::EmptyPantry`].
    pub fn choose_mode(&mut self, mode: Mode, snapshot: &Snapshot<'_>) -> Result<FlowStep, FlowError> {
        if self.step != FlowStep::ModeSelection {
            return Err(FlowError::WrongStep(self.step));
        }

        self.mode = Some(mode);
        self.answers.clear();
        self.question_index = 0;

        if mode == Mode::Generate && snapshot.pantry.is_empty() {
            tracing::debug!("Pantry is empty, skipping questions");
            self.result = Some(FlowResult::EmptyPantry);
            self.step = FlowStep::Result;

            return Ok(self.step);
        }

        self.result = None;
        self.step = FlowStep::Questions;

        Ok(self.step)
    }

    /// Answers the current question with one of its option values. The last
    /// answer builds the result.
    pub fn answer<R: RandomSource>(
        &mut self,
        value: &str,
        snapshot: &Snapshot<'_>,
        rng: &mut R,
    ) -> Result<FlowStep, FlowError> {
        let (Some(mode), Some(question)) = (self.mode, self.current_question()) else {
            return Err(FlowError::WrongStep(self.step));
        };

        let Some(option) = question.option(value) else {
            return Err(FlowError::InvalidOption {
                key: question.key,
                value: value.to_owned(),
            });
        };

        self.answers.set(question.key, option.value);

        if self.question_index + 1 < questions(mode).len() {
            self.question_index += 1;

            return Ok(self.step);
        }

        self.result = Some(build_result(mode, &self.answers, snapshot, None, rng));
        self.step = FlowStep::Result;

        Ok(self.step)
    }

    /// Steps back one question, or to mode selection from the first one.
    /// Answers already given are kept.
    pub fn back(&mut self) -> Result<FlowStep, FlowError> {
        if self.step != FlowStep::Questions {
            return Err(FlowError::WrongStep(self.step));
        }

        if self.question_index == 0 {
            self.step = FlowStep::ModeSelection;
        } else {
            self.question_index -= 1;
        }

        Ok(self.step)
    }

    /// Replaces the shown suggestion with a different one when the pool
    /// allows it.
    pub fn try_again<R: RandomSource>(
        &mut self,
        snapshot: &Snapshot<'_>,
        rng: &mut R,
    ) -> Result<&FlowResult, FlowError> {
        let mode = self.suggestion_mode()?;
        let exclude = self.result.as_ref().and_then(|r| r.exclusion_key());

        let result = build_result(mode, &self.answers, snapshot, exclude, rng);

        Ok(self.result.insert(result))
    }

    pub fn confirm(&mut self) -> Result<&FlowResult, FlowError> {
        self.suggestion_mode()?;
        self.step = FlowStep::Celebration;

        self.result.as_ref().ok_or(FlowError::NoContent)
    }

    /// Leaves the celebration and resets for the next decision.
    pub fn done(&mut self) -> Result<(), FlowError> {
        if self.step != FlowStep::Celebration {
            return Err(FlowError::WrongStep(self.step));
        }

        self.start_over();

        Ok(())
    }

    pub fn start_over(&mut self) {
        *self = Self::default();
    }

    fn suggestion_mode(&self) -> Result<Mode, FlowError> {
        if self.step != FlowStep::Result {
            return Err(FlowError::WrongStep(self.step));
        }

        match (self.mode, &self.result) {
            (Some(mode), Some(result)) if result.has_content() => Ok(mode),
            _ => Err(FlowError::NoContent),
        }
    }
}
