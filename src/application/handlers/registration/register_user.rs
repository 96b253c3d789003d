//! RegistrationFlow - drives the registration state machine over a console.
//!
//! The state machine itself is pure (see `RegistrationState::apply`); this
//! handler performs the I/O between transitions:
//! - START: show the banner
//! - GET_NAME / GET_DOB: bounded prompts; exhaustion discards the draft
//!   and restarts, or stops the session
//! - PROCESS: show the summary
//! - END: hand the attempt back; `run` then asks about another person

use chrono::{Local, NaiveDate};
use thiserror::Error;
use tracing::{info, warn};

use super::messages;
use super::retry_prompt::{PromptOutcome, RetryPrompt};
use crate::config::AppConfig;
use crate::domain::foundation::ValidationError;
use crate::domain::registration::{
    AgeBounds, DobValidator, ExhaustionPolicy, NameValidator, RegistrationAttempt,
    RegistrationDraft, RegistrationEvent, RegistrationState, DEFAULT_MAX_ATTEMPTS,
};
use crate::ports::{Console, ConsoleError};

/// Everything the flow needs to know up front.
#[derive(Debug, Clone)]
pub struct FlowSettings {
    pub name_validator: NameValidator,
    pub dob_validator: DobValidator,
    pub max_attempts: u32,
    pub on_exhaustion: ExhaustionPolicy,
    /// Fixed "today"; `None` reads the local calendar date at each START.
    pub reference_date: Option<NaiveDate>,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self {
            name_validator: NameValidator::default(),
            dob_validator: DobValidator::default(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            on_exhaustion: ExhaustionPolicy::default(),
            reference_date: None,
        }
    }
}

impl FlowSettings {
    /// Builds settings from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ValidationError> {
        Ok(Self {
            name_validator: NameValidator::new(config.name.policy, config.name.max_length),
            dob_validator: DobValidator::new(AgeBounds::try_new(
                config.age.min_age,
                config.age.max_age,
            )?),
            max_attempts: config.flow.max_attempts,
            on_exhaustion: config.flow.on_exhaustion,
            reference_date: config.flow.reference_date,
        })
    }

    fn reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }
}

/// How a whole session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowOutcome {
    /// The user chose to stop.
    Completed { registered: u32 },
    /// A prompt ran out of attempts under `ExhaustionPolicy::Terminate`.
    Exhausted { registered: u32 },
}

impl FlowOutcome {
    pub fn registered(&self) -> u32 {
        match self {
            FlowOutcome::Completed { registered } | FlowOutcome::Exhausted { registered } => {
                *registered
            }
        }
    }
}

/// Errors that end a session early.
#[derive(Debug, Error)]
pub enum FlowError {
    #[error(transparent)]
    Console(#[from] ConsoleError),

    #[error("registration flow fault: {0}")]
    Flow(#[from] ValidationError),
}

impl FlowError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FlowError::Console(e) if e.is_cancelled())
    }
}

/// Handler running registrations until the user stops.
pub struct RegistrationFlow {
    settings: FlowSettings,
    name_prompt: RetryPrompt,
    dob_prompt: RetryPrompt,
}

impl RegistrationFlow {
    pub fn new(settings: FlowSettings) -> Self {
        let name_prompt = RetryPrompt::new("name", messages::NAME_PROMPT, settings.max_attempts);
        let dob_prompt = RetryPrompt::new("dob", messages::dob_prompt(), settings.max_attempts);
        Self {
            settings,
            name_prompt,
            dob_prompt,
        }
    }

    /// Runs registrations back to back, asking after each whether to go on.
    pub async fn run(&self, console: &mut dyn Console) -> Result<FlowOutcome, FlowError> {
        let mut registered = 0;
        loop {
            match self.register_one(console).await? {
                Some(_) => registered += 1,
                None => return Ok(FlowOutcome::Exhausted { registered }),
            }

            console.write_line("").await?;
            let answer = console.read_line(messages::ANOTHER_PROMPT).await?;
            if !messages::wants_another(&answer) {
                console.write_line(messages::GOODBYE).await?;
                info!(registered, "Registration session finished");
                return Ok(FlowOutcome::Completed { registered });
            }
            console.write_line("").await?;
            console.write_line(messages::NEXT_REGISTRATION).await?;
            console.write_line("").await?;
        }
    }

    /// Runs the state machine from START to END once.
    ///
    /// Returns `None` only when a prompt is exhausted under the terminate
    /// policy; under the restart policy exhaustion loops back to START.
    pub async fn register_one(
        &self,
        console: &mut dyn Console,
    ) -> Result<Option<RegistrationAttempt>, FlowError> {
        let mut state = RegistrationState::Start;
        let mut draft = RegistrationDraft::new();
        let mut reference = self.settings.reference_date();
        let mut completed = None;

        loop {
            state = match state {
                RegistrationState::Start => {
                    console.write_line(messages::BANNER).await?;
                    state.apply(RegistrationEvent::Began)?
                }
                RegistrationState::GetName => {
                    let validator = &self.settings.name_validator;
                    let outcome = self
                        .name_prompt
                        .run(console, |raw| Ok(validator.validate(raw)?))
                        .await?;
                    match outcome {
                        PromptOutcome::Accepted(name) => {
                            draft.set_name(name);
                            state.apply(RegistrationEvent::NameAcquired)?
                        }
                        PromptOutcome::Exhausted { attempts } => {
                            if !self.on_exhausted(console, &draft, "name", attempts).await? {
                                return Ok(None);
                            }
                            draft = RegistrationDraft::new();
                            reference = self.settings.reference_date();
                            state.apply(RegistrationEvent::AttemptsExhausted)?
                        }
                    }
                }
                RegistrationState::GetDob => {
                    let validator = &self.settings.dob_validator;
                    let outcome = self
                        .dob_prompt
                        .run(console, |raw| Ok(validator.validate(raw, reference)?.0))
                        .await?;
                    match outcome {
                        PromptOutcome::Accepted(dob) => {
                            draft.set_dob(dob);
                            state.apply(RegistrationEvent::DobAcquired)?
                        }
                        PromptOutcome::Exhausted { attempts } => {
                            if !self.on_exhausted(console, &draft, "dob", attempts).await? {
                                return Ok(None);
                            }
                            draft = RegistrationDraft::new();
                            reference = self.settings.reference_date();
                            state.apply(RegistrationEvent::AttemptsExhausted)?
                        }
                    }
                }
                RegistrationState::Process => {
                    let attempt = std::mem::take(&mut draft).complete(reference).ok_or_else(|| {
                        ValidationError::invalid_format(
                            "registration",
                            "PROCESS reached without name and date of birth",
                        )
                    })?;
                    self.show_summary(console, &attempt).await?;
                    completed = Some(attempt);
                    state.apply(RegistrationEvent::Summarized)?
                }
                RegistrationState::End => return Ok(completed),
            };
        }
    }

    /// Reports exhaustion; returns true if the flow should restart.
    async fn on_exhausted(
        &self,
        console: &mut dyn Console,
        draft: &RegistrationDraft,
        field: &'static str,
        attempts: u32,
    ) -> Result<bool, FlowError> {
        warn!(
            registration_id = %draft.id(),
            field,
            attempts,
            policy = %self.settings.on_exhaustion,
            "Retry budget exhausted"
        );
        match self.settings.on_exhaustion {
            ExhaustionPolicy::Restart => {
                console.write_line(messages::RESTARTING).await?;
                console.write_line("").await?;
                Ok(true)
            }
            ExhaustionPolicy::Terminate => {
                console.write_line(messages::TERMINATING).await?;
                Ok(false)
            }
        }
    }

    async fn show_summary(
        &self,
        console: &mut dyn Console,
        attempt: &RegistrationAttempt,
    ) -> Result<(), FlowError> {
        console.write_line("").await?;
        console.write_line(messages::SUCCESS).await?;
        for line in attempt.summary_lines() {
            console.write_line(&line).await?;
        }
        info!(
            registration_id = %attempt.id(),
            age = attempt.age(),
            birth_year = attempt.birth_year(),
            "Registration completed"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::console::{ScriptedConsole, ScriptedInput};

    fn settings() -> FlowSettings {
        FlowSettings {
            reference_date: NaiveDate::from_ymd_opt(2026, 1, 2),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn register_one_returns_attempt_and_prints_summary() {
        let flow = RegistrationFlow::new(settings());
        let mut console = ScriptedConsole::new(["jean-luc", "2000-05-20"]);

        let attempt = flow.register_one(&mut console).await.unwrap().unwrap();

        assert_eq!(attempt.name().normalized(), "Jean-Luc");
        assert_eq!(attempt.age(), 25);
        assert_eq!(console.transcript()[0], messages::BANNER);
        assert_eq!(console.lines_starting_with("Name :"), vec!["Name : Jean-Luc"]);
        assert_eq!(console.lines_starting_with("Age  :"), vec!["Age  : 25"]);
    }

    #[tokio::test]
    async fn name_exhaustion_restarts_with_fresh_budget() {
        let flow = RegistrationFlow::new(settings());
        let mut console =
            ScriptedConsole::new(["Bob123", "Xkxkxk", "J", "Marie", "1990-06-15"]);

        let attempt = flow.register_one(&mut console).await.unwrap().unwrap();

        assert_eq!(attempt.name().as_str(), "Marie");
        assert_eq!(console.lines_starting_with(messages::BANNER).len(), 2);
        assert_eq!(console.lines_starting_with(messages::RESTARTING).len(), 1);
    }

    #[tokio::test]
    async fn terminate_policy_stops_on_exhaustion() {
        let flow = RegistrationFlow::new(FlowSettings {
            on_exhaustion: ExhaustionPolicy::Terminate,
            ..settings()
        });
        let mut console = ScriptedConsole::new(["Marie", "x", "y", "z"]);

        let outcome = flow.run(&mut console).await.unwrap();

        assert_eq!(outcome, FlowOutcome::Exhausted { registered: 0 });
        assert_eq!(console.transcript().last().unwrap(), messages::TERMINATING);
    }

    #[tokio::test]
    async fn cancellation_ends_session_with_error() {
        let flow = RegistrationFlow::new(settings());
        let mut console = ScriptedConsole::new(["Marie"]).then(ScriptedInput::Cancel);

        let err = flow.run(&mut console).await.unwrap_err();

        assert!(err.is_cancelled());
    }

    #[test]
    fn from_config_rejects_inverted_age_bounds() {
        let mut config = AppConfig::default();
        config.age.min_age = 80;
        config.age.max_age = 20;

        assert!(FlowSettings::from_config(&config).is_err());
    }
}
