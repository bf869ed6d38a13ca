mod induction_params;
mod schema;
mod split_criterion_choice;
mod ui_choice;

pub use induction_params::*;
pub use schema::*;
pub use split_criterion_choice::*;
pub use ui_choice::UIChoice;
