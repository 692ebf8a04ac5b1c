//! Interactive questions for the install choices left open by flags and
//! the config file (`tui` feature)

#[cfg(feature = "tui")]
mod prompts;

#[cfg(feature = "tui")]
pub use prompts::prompt_selection;
