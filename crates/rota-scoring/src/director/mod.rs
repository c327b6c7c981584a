//! Score director implementations.
//!
//! The score director owns the working solution, applies variable changes
//! to it and keeps its score current. An external optimizer talks to the
//! solution only through a [`ScoreDirector`].

mod factory;
mod simple;
mod traits;

#[cfg(test)]
mod tests;

pub use factory::ScoreDirectorFactory;
pub use simple::SimpleScoreDirector;
pub use traits::ScoreDirector;
