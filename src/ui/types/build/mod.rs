mod error;
mod learners;

pub use error::BuildError;
pub use learners::build_learner;
