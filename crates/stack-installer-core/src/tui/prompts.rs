//! Charm-style prompts for the choices not given on the command line

use crate::config::{Framework, Selection};
use anyhow::Result;

/// Ask for every unset choice; choices already made are only echoed
pub fn prompt_selection(selection: Selection) -> Result<Selection> {
    cliclack::intro("Inertia stack installer")?;

    let framework = match selection.framework {
        Some(framework) => {
            cliclack::log::info(format!("Stack: {}", framework))?;
            framework
        }
        None => cliclack::select("Which stack would you like to install?")
            .item(Framework::React, "React with Inertia", "")
            .item(Framework::Vue, "Vue with Inertia", "")
            .interact()?,
    };

    let typescript = ask(selection.typescript, "Would you like TypeScript support?")?;
    let ssr = ask(selection.ssr, "Would you like server-side rendering support?")?;
    let dark = ask(selection.dark, "Would you like dark mode support?")?;
    let pest = ask(selection.pest, "Would you prefer Pest tests instead of PHPUnit?")?;

    cliclack::outro("Starting the install")?;

    Ok(Selection {
        framework: Some(framework),
        typescript: Some(typescript),
        ssr: Some(ssr),
        dark: Some(dark),
        pest: Some(pest),
    })
}

fn ask(current: Option<bool>, question: &str) -> Result<bool> {
    match current {
        Some(answer) => Ok(answer),
        None => Ok(cliclack::confirm(question).initial_value(false).interact()?),
    }
}
