//! Dark mode flag.

use buildmart_storefront::state::AppState;

use super::CommandError;

const fn describe(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Flip the dark mode flag and print the new theme.
#[allow(clippy::print_stdout)]
pub fn toggle(state: &AppState) -> Result<(), CommandError> {
    let dark = state.theme().toggle()?;
    println!("Theme: {}", describe(dark));
    Ok(())
}

/// Print the current theme.
#[allow(clippy::print_stdout)]
pub fn show(state: &AppState) -> Result<(), CommandError> {
    let dark = state.theme().is_dark_mode()?;
    println!("Theme: {}", describe(dark));
    Ok(())
}
