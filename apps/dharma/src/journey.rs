//! The questionnaire itself: welcome, reflection questions, skills, analysis,
//! results and the optional snapshot, strictly in that order.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::Rng;
use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::info;

use crate::calling::report::{build_report, DharmaReport};
use crate::console::presenter;
use crate::console::Prompter;
use crate::errors::AppError;
use crate::models::session::UserSession;
use crate::snapshot::save_snapshot;
use crate::state::AppState;

const CHILDHOOD_QUESTIONS: [&str; 3] = [
    "What activities made you lose track of time as a child?",
    "What did you love doing that felt effortless and joyful?",
    "What were you naturally drawn to before others' expectations came into play?",
];

const PASSION_QUESTIONS: [&str; 3] = [
    "What activities make you lose track of time now?",
    "If money were no object, what would you spend your days doing?",
    "What topics do you find yourself constantly reading about or discussing?",
];

const IMPACT_QUESTION: &str =
    "If you could make any positive impact on the world, what would it be?";

/// What a completed run produced.
#[derive(Debug)]
pub struct JourneyOutcome {
    pub session: UserSession,
    pub report: DharmaReport,
    /// Set when the user agreed to save.
    pub saved_to: Option<PathBuf>,
}

pub struct Journey<'a, R, W, G: ?Sized> {
    state: &'a AppState,
    prompter: Prompter<R, W>,
    rng: &'a mut G,
    /// Directory the snapshot is written to when the user opts in.
    save_dir: &'a Path,
}

impl<'a, R, W, G> Journey<'a, R, W, G>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
    G: Rng + ?Sized,
{
    pub fn new(
        state: &'a AppState,
        prompter: Prompter<R, W>,
        rng: &'a mut G,
        save_dir: &'a Path,
    ) -> Self {
        Self {
            state,
            prompter,
            rng,
            save_dir,
        }
    }

    pub async fn run(mut self) -> Result<JourneyOutcome, AppError> {
        let mut session = self.welcome().await?;
        self.explore_passions(&mut session).await?;
        self.assess_skills(&mut session).await?;

        let report = self.analyze(&session).await?;
        self.prompter
            .say(&presenter::render_results(&session.name, &report))
            .await?;

        let saved_to = if self
            .prompter
            .confirm("Would you like to save your results to a file?")
            .await?
        {
            let path = save_snapshot(self.save_dir, &session, &report)?;
            let filename = path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_default();
            self.prompter.say(&presenter::saved_notice(&filename)).await?;
            Some(path)
        } else {
            None
        };

        self.prompter.say(&presenter::closing()).await?;
        Ok(JourneyOutcome {
            session,
            report,
            saved_to,
        })
    }

    async fn welcome(&mut self) -> Result<UserSession, AppError> {
        self.prompter.say(&presenter::welcome_banner()).await?;
        self.pause(self.state.config.pause * 3).await;

        let name = self.prompter.ask("What's your name?").await?;
        let name = name.trim();
        self.prompter.say(&presenter::greeting(name)).await?;
        self.pause(self.state.config.pause * 3).await;

        Ok(UserSession::new(name))
    }

    async fn explore_passions(&mut self, session: &mut UserSession) -> Result<(), AppError> {
        self.prompter.say(&presenter::passions_banner()).await?;
        self.pause(self.state.config.pause * 3).await;

        self.prompter
            .say(&presenter::heading("Think back to your childhood...", None))
            .await?;
        for question in CHILDHOOD_QUESTIONS {
            let answer = self.prompter.ask(question).await?;
            session.add_childhood_memory(&answer);
        }

        self.prompter
            .say(&presenter::heading("Now think about your current life...", None))
            .await?;
        for question in PASSION_QUESTIONS {
            let answer = self.prompter.ask(question).await?;
            session.add_passion(&answer);
        }

        let impact = self.prompter.ask(IMPACT_QUESTION).await?;
        session.set_dream_impact(&impact);
        Ok(())
    }

    async fn assess_skills(&mut self, session: &mut UserSession) -> Result<(), AppError> {
        self.prompter.say(&presenter::skills_banner()).await?;
        self.pause(self.state.config.pause * 3).await;

        self.prompter
            .say(&presenter::heading(
                "What are your key skills?",
                Some("(Enter one at a time, type 'done' when finished)"),
            ))
            .await?;
        for skill in self.prompter.ask_list("Skill:").await? {
            session.add_skill(&skill);
        }

        self.prompter
            .say(&presenter::heading(
                "What formal qualifications do you have?",
                Some("(Degrees, certifications, etc. Type 'done' when finished)"),
            ))
            .await?;
        for qualification in self.prompter.ask_list("Qualification:").await? {
            session.add_qualification(&qualification);
        }

        info!(
            "Collected {} answers, {} skills, {} qualifications",
            session.responses_raw.len(),
            session.skills.len(),
            session.qualifications.len()
        );
        Ok(())
    }

    async fn analyze(&mut self, session: &UserSession) -> Result<DharmaReport, AppError> {
        self.prompter.say(&presenter::analysis_banner()).await?;

        // Three rows of "Analyzing..."
        for _ in 0..3 {
            self.prompter.say(&presenter::analyzing_line()).await?;
            for _ in 0..3 {
                self.pause(self.state.config.pause).await;
                self.prompter.say(".").await?;
            }
            self.prompter.say("\n").await?;
        }

        Ok(build_report(
            &self.state.catalog,
            session,
            self.state.analyzer.as_ref(),
            &self.state.weights,
            &mut *self.rng,
        ))
    }

    async fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
