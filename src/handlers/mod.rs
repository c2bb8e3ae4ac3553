pub mod homepage;
pub mod trivia;
