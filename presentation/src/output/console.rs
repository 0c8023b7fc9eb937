//! Console output formatter for the quiz and the invite flow

use colored::Colorize;
use globetrotter_application::{InviteOutcome, InvitePage};
use globetrotter_domain::{ChoiceMark, MAX_SCORE, PreviewCard, QuizPhase, QuizSession};

const BAR_WIDTH: usize = 20;

/// Formats game state for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    pub fn welcome() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str("╭─────────────────────────────────────────────╮\n");
        output.push_str("│                Globetrotter                 │\n");
        output.push_str("╰─────────────────────────────────────────────╯\n");
        output.push('\n');
        output.push_str("Read the clues and pick the destination they describe.\n");
        output.push_str("Answer with the choice number or the city name.\n");
        output.push_str(&format!("Type {} for commands.\n", "/help".cyan()));
        output
    }

    pub fn help() -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!("{}\n", "Commands:".cyan().bold()));
        output.push_str("  <n> or <city>   - Answer the current question\n");
        output.push_str("  <Enter>         - Continue after an answer\n");
        output.push_str("  /score          - Show your score\n");
        output.push_str("  /invite         - Challenge a friend to beat your score\n");
        output.push_str("  /again          - Play again once the round is over\n");
        output.push_str("  /help, /h, /?   - Show this help\n");
        output.push_str("  /quit, /exit, /q - Exit\n");
        output
    }

    /// The current question: its clues and the numbered choices.
    pub fn question(session: &QuizSession) -> String {
        let question = session.current_question();
        let mut output = String::new();

        output.push_str(&Self::section_header(&format!(
            "Question {}/{}",
            session.current_index() + 1,
            session.total()
        )));

        for clue in &question.correct().clues {
            output.push_str(&format!("  {} {}\n", "?".yellow().bold(), clue.italic()));
        }
        output.push('\n');
        output.push_str(&Self::choices(session));
        output
    }

    /// Numbered choices, marked once the question has been answered.
    pub fn choices(session: &QuizSession) -> String {
        let question = session.current_question();
        question
            .choices()
            .iter()
            .zip(session.choice_marks())
            .enumerate()
            .map(|(i, (choice, mark))| {
                let label = format!("{}. {}", i + 1, choice.display_name());
                match mark {
                    ChoiceMark::Neutral => format!("    {}\n", label),
                    ChoiceMark::Correct => format!("  {} {}\n", "v".green(), label.green().bold()),
                    ChoiceMark::Wrong => format!("  {} {}\n", "x".red(), label.red()),
                }
            })
            .collect()
    }

    /// Feedback for a revealed answer, with the correct destination's fun
    /// facts and trivia. Empty unless the answer is revealed.
    pub fn feedback(session: &QuizSession) -> String {
        let QuizPhase::Revealed { correct } = session.phase() else {
            return String::new();
        };
        let answer = session.current_question().correct();
        let mut output = String::new();

        output.push('\n');
        if correct {
            output.push_str(&format!("{}\n", "Correct! Well travelled.".green().bold()));
        } else {
            output.push_str(&format!(
                "{} The answer was {}.\n",
                "Not quite!".red().bold(),
                answer.display_name().bold()
            ));
        }

        if !answer.fun_facts.is_empty() {
            output.push_str(&format!("\n{}\n", "Fun Fact".cyan().bold()));
            output.push_str(&Self::indent(&answer.fun_facts.join(" "), "  "));
            output.push('\n');
        }
        if !answer.trivia.is_empty() {
            output.push_str(&format!("\n{}\n", "Trivia".cyan().bold()));
            output.push_str(&Self::indent(&answer.trivia.join(" "), "  "));
            output.push('\n');
        }

        let next = if session.is_last_question() {
            "Press Enter to see your final score."
        } else {
            "Press Enter for the next question."
        };
        output.push_str(&format!("\n{}\n", next.dimmed()));
        output
    }

    /// Running score with a percentage bar.
    pub fn score(session: &QuizSession) -> String {
        let percent = session.progress_percent();
        let filled = usize::from(percent) * BAR_WIDTH / 100;
        format!(
            "{} {}/{} [{}{}] {}%",
            "Score:".cyan().bold(),
            session.score(),
            session.total(),
            "#".repeat(filled).green(),
            "-".repeat(BAR_WIDTH - filled),
            percent
        )
    }

    pub fn final_score(session: &QuizSession) -> String {
        let mut output = String::new();
        output.push_str(&Self::header("Round complete"));
        output.push('\n');
        output.push_str(&Self::score(session));
        output.push_str("\n\n");
        output.push_str(&format!(
            "Type {} to play again or {} to challenge a friend.\n",
            "/again".cyan(),
            "/invite".cyan()
        ));
        output
    }

    /// A generated invite: links, share text and share target.
    pub fn invite_outcome(outcome: &InviteOutcome) -> String {
        let mut output = String::new();

        output.push_str(&Self::section_header("Invite Your Friend"));
        if let Some(error) = &outcome.persist_error {
            output.push_str(&format!(
                "{} {}\n{}\n\n",
                "Could not save your score:".yellow().bold(),
                error.advisory(),
                "The link still works, but your friend may not see your score.".dimmed()
            ));
        }

        output.push_str(&format!("{} {}\n", "Link: ".bold(), outcome.links.share_url.underline()));
        output.push_str(&format!("{} {}\n", "Image:".bold(), outcome.links.image_url));
        output.push_str(&format!("\n{}\n", "Share text:".bold()));
        output.push_str(&Self::indent(&outcome.share_text(), "  "));
        output.push_str(&format!("\n\n{} {}\n", "WhatsApp:".green().bold(), outcome.whatsapp_url()));
        output
    }

    /// The invite landing page for a looked-up invitee.
    pub fn invite_page(page: &InvitePage) -> String {
        let mut output = String::new();

        match &page.invitee {
            Some(invitee) => {
                output.push_str(&Self::header(&page.metadata.title));
                output.push('\n');
                output.push_str(&format!(
                    "{} challenged you!\n",
                    invitee.username.yellow().bold()
                ));
                output.push_str(&format!(
                    "They scored {}/{}. Can you beat them?\n",
                    invitee.score.to_string().bold(),
                    MAX_SCORE
                ));
                if let Some(created) = invitee.created_at() {
                    output.push_str(&format!(
                        "{}\n",
                        format!("Challenge issued {}", created.format("%Y-%m-%d")).dimmed()
                    ));
                }
                if let Some(url) = &page.metadata.canonical_url {
                    output.push_str(&format!("\n{} {}\n", "Link: ".bold(), url));
                }
                if let Some(image) = &page.metadata.image {
                    output.push_str(&format!(
                        "{} {} ({}x{})\n",
                        "Image:".bold(),
                        image.url,
                        image.width,
                        image.height
                    ));
                }
            }
            None => {
                output.push_str(&Self::header(&page.metadata.title));
                output.push('\n');
                output.push_str(&format!("{}\n", "Invite not found.".red().bold()));
                output.push_str(&format!("{}\n", page.metadata.description.dimmed()));
            }
        }

        output
    }

    /// The social-preview card as text.
    pub fn preview_card(card: &PreviewCard, image_url: Option<&str>) -> String {
        let (width, height) = card.dimensions();
        let mut output = String::new();
        output.push_str(&Self::header("Globetrotter Challenge"));
        output.push('\n');
        output.push_str(&format!("{}\n", card.headline().yellow().bold()));
        output.push_str(&format!("{}\n", card.score_line()));
        output.push_str(&format!("\n{}\n", format!("{}x{} preview", width, height).dimmed()));
        if let Some(url) = image_url {
            output.push_str(&format!("{} {}\n", "Image:".bold(), url));
        }
        output
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(48);
        format!("{}\n{:^48}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
