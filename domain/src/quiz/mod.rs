//! Quiz subdomain: destinations, questions and the play session.
//!
//! - [`destination::Destination`]: a city with its clues, fun facts and trivia
//! - [`question::QuestionSet`]: the normalized questions for one playthrough
//! - [`session::QuizSession`]: the per-playthrough state machine

pub mod destination;
pub mod question;
pub mod session;
