//! REPL (Read-Eval-Print Loop) for playing the quiz

use super::input::{ReplCommand, ReplInput, is_yes, parse_input};
use crate::{ConsoleFormatter, ProgressReporter};
use globetrotter_application::{
    GenerateInviteUseCase, InviteError, InviteParams, LoadQuestionsError, LoadQuestionsUseCase,
    NoProgress, ProgressNotifier, TriviaApi, invite_score,
};
use globetrotter_domain::{InviteDialog, QuizPhase, QuizSession};
use reedline::{DefaultPrompt, DefaultPromptSegment, FileBackedHistory, Reedline, Signal};
use std::io;
use std::sync::Arc;
use tracing::{debug, warn};

const HISTORY_SIZE: usize = 200;

/// Interactive quiz REPL
pub struct PlayRepl {
    questions: LoadQuestionsUseCase,
    invites: GenerateInviteUseCase,
    show_progress: bool,
}

impl PlayRepl {
    /// Create a new PlayRepl
    pub fn new(api: Arc<dyn TriviaApi>, params: InviteParams) -> Self {
        Self {
            questions: LoadQuestionsUseCase::new(Arc::clone(&api)),
            invites: GenerateInviteUseCase::new(api, params),
            show_progress: true,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run the interactive REPL until the player quits
    pub async fn run(&self) -> io::Result<()> {
        let mut editor = Self::editor();
        println!("{}", ConsoleFormatter::welcome());

        let Some(mut session) = self.load_session(&mut editor).await? else {
            println!("Bye!");
            return Ok(());
        };
        println!("{}", ConsoleFormatter::question(&session));

        loop {
            let signal = editor.read_line(&Self::prompt(Self::prompt_label(&session)))?;
            let line = match signal {
                Signal::Success(line) => line,
                Signal::CtrlC => {
                    println!("^C");
                    continue;
                }
                _ => {
                    if self.confirm_quit(&mut editor, &session)? {
                        break;
                    }
                    continue;
                }
            };

            match parse_input(&line) {
                ReplInput::Continue => Self::continue_round(&mut session),
                ReplInput::Answer(text) => Self::answer(&mut session, &text),
                ReplInput::Command(command) => match command {
                    ReplCommand::Quit => {
                        if self.confirm_quit(&mut editor, &session)? {
                            break;
                        }
                    }
                    ReplCommand::Help => println!("{}", ConsoleFormatter::help()),
                    ReplCommand::Score => println!("{}", ConsoleFormatter::score(&session)),
                    ReplCommand::Invite => {
                        let score = invite_score(session.score());
                        let total = invite_score(session.total());
                        self.invite(&mut editor, score, total).await?
                    }
                    ReplCommand::Again => self.play_again(&mut session).await,
                    ReplCommand::Unknown(cmd) => {
                        println!("Unknown command: {}", cmd);
                        println!("Type /help for available commands");
                    }
                },
            }
        }

        println!("Bye!");
        Ok(())
    }

    fn editor() -> Reedline {
        let editor = Reedline::create();
        let history_path = dirs::data_dir().map(|p| p.join("globetrotter").join("history.txt"));

        let Some(path) = history_path else {
            return editor;
        };
        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        match FileBackedHistory::with_file(HISTORY_SIZE, path) {
            Ok(history) => editor.with_history(Box::new(history)),
            Err(e) => {
                debug!("History disabled: {}", e);
                editor
            }
        }
    }

    fn prompt(label: &str) -> DefaultPrompt {
        DefaultPrompt::new(
            DefaultPromptSegment::Basic(label.to_string()),
            DefaultPromptSegment::Empty,
        )
    }

    fn prompt_label(session: &QuizSession) -> &'static str {
        match session.phase() {
            QuizPhase::AwaitingAnswer => "answer",
            QuizPhase::Revealed { .. } | QuizPhase::TransitionReady => "continue",
            QuizPhase::Finished => "done",
        }
    }

    /// Read one line for a sub-prompt. `None` when the player cancels.
    fn prompt_line(editor: &mut Reedline, label: &str) -> io::Result<Option<String>> {
        match editor.read_line(&Self::prompt(label))? {
            Signal::Success(line) => Ok(Some(line)),
            _ => Ok(None),
        }
    }

    fn progress(&self) -> Box<dyn ProgressNotifier> {
        if self.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        }
    }

    /// Load the first question set, offering a retry when the API fails.
    async fn load_session(&self, editor: &mut Reedline) -> io::Result<Option<QuizSession>> {
        loop {
            let progress = self.progress();
            match self.questions.start(progress.as_ref()).await {
                Ok(session) => return Ok(Some(session)),
                Err(e) => {
                    println!("{}", ConsoleFormatter::error(&Self::load_error_message(&e)));
                    println!("Press Enter to try again, or type /quit to exit.");
                }
            }

            match Self::prompt_line(editor, "retry")? {
                Some(line) if parse_input(&line) == ReplInput::Continue => continue,
                _ => return Ok(None),
            }
        }
    }

    fn load_error_message(err: &LoadQuestionsError) -> String {
        match err {
            LoadQuestionsError::Api(e) => e.advisory(),
            other => other.to_string(),
        }
    }

    fn answer(session: &mut QuizSession, text: &str) {
        match session.phase() {
            QuizPhase::AwaitingAnswer => {}
            QuizPhase::Revealed { .. } | QuizPhase::TransitionReady => {
                println!("Already answered. Press Enter to continue.");
                return;
            }
            QuizPhase::Finished => {
                println!("The round is over. Type /again to play again.");
                return;
            }
        }

        let Some(choice) = session.current_question().resolve_choice(text) else {
            println!(
                "'{}' is not one of the choices. Enter 1-{} or a city name.",
                text,
                session.current_question().choices().len()
            );
            return;
        };

        let name = choice.name.clone();
        if session.select_choice(&name).is_some() {
            println!();
            print!("{}", ConsoleFormatter::choices(session));
            println!("{}", ConsoleFormatter::feedback(session));
        }
    }

    /// Move past the feedback: to the next question or the final score.
    fn continue_round(session: &mut QuizSession) {
        match session.phase() {
            QuizPhase::AwaitingAnswer => println!("{}", ConsoleFormatter::question(session)),
            QuizPhase::Revealed { .. } | QuizPhase::TransitionReady => {
                if session.acknowledge_reveal() == Some(QuizPhase::Finished) {
                    println!("{}", ConsoleFormatter::final_score(session));
                    return;
                }
                if session.advance() {
                    println!("{}", ConsoleFormatter::question(session));
                }
            }
            QuizPhase::Finished => println!("{}", ConsoleFormatter::final_score(session)),
        }
    }

    async fn play_again(&self, session: &mut QuizSession) {
        if !session.is_finished() {
            println!("Finish the round first, or /quit to leave.");
            return;
        }

        let progress = self.progress();
        if self.questions.play_again(session, progress.as_ref()).await {
            println!("Fresh questions loaded.");
        } else {
            println!("Could not load new questions; replaying this round.");
        }
        println!("{}", ConsoleFormatter::question(session));
    }

    /// Ask before quitting a round in progress.
    fn confirm_quit(&self, editor: &mut Reedline, session: &QuizSession) -> io::Result<bool> {
        if !session.is_dirty() {
            return Ok(true);
        }
        println!("Your round is in progress and will be lost.");
        Ok(Self::prompt_line(editor, "quit? [y/N]")?
            .map(|answer| is_yes(&answer))
            .unwrap_or(true))
    }

    /// Run the invite dialog until a link is produced or the player cancels.
    async fn invite(&self, editor: &mut Reedline, score: u32, total: u32) -> io::Result<()> {
        let mut dialog = InviteDialog::new();
        dialog.open();
        println!(
            "Enter a display name (3-20 letters, digits, '_' or '-'), or a blank line to cancel."
        );

        loop {
            let Some(name) = Self::prompt_line(editor, "name")? else {
                break;
            };
            if name.trim().is_empty() {
                break;
            }

            dialog.set_name(name.trim());
            if dialog.has_input_error() {
                println!(
                    "{}",
                    ConsoleFormatter::error("Names are 3-20 letters, digits, '_' or '-'.")
                );
                continue;
            }

            let progress = self.progress();
            match self
                .invites
                .submit_from_dialog(&mut dialog, score, total, progress.as_ref())
                .await
            {
                Some(Ok(outcome)) => {
                    println!("{}", ConsoleFormatter::invite_outcome(&outcome));
                    break;
                }
                Some(Err(InviteError::Network(e))) => {
                    println!("{}", ConsoleFormatter::error(&e.advisory()));
                    println!("Enter the name again to retry, or a blank line to cancel.");
                }
                Some(Err(e)) => {
                    println!("{}", ConsoleFormatter::error(&e.to_string()));
                    if !e.is_validation() {
                        break;
                    }
                }
                None => {
                    warn!("Invite submit was not started");
                    break;
                }
            }
        }

        dialog.close();
        Ok(())
    }
}
