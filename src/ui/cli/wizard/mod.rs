mod wizard;

pub use wizard::{prompt_choice, prompt_params, prompt_path_until_ok, prompt_record};
