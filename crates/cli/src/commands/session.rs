//! Session commands.
//!
//! # Usage
//!
//! ```bash
//! bm-cli login -e alice@example.com -u alice
//! bm-cli whoami
//! bm-cli logout
//! ```

use buildmart_storefront::state::AppState;

use super::CommandError;

/// Start a new session, replacing any current one.
///
/// No validation is performed; any email and username are accepted.
#[allow(clippy::print_stdout)]
pub fn login(state: &AppState, email: &str, username: &str) -> Result<(), CommandError> {
    let user = state.session().login(email.trim(), username.trim())?;
    tracing::info!(user_id = %user.id, "Session created");
    println!("Logged in as {} <{}> ({})", user.username, user.email, user.id);
    Ok(())
}

/// End the current session. The cart is left untouched.
#[allow(clippy::print_stdout)]
pub fn logout(state: &AppState) -> Result<(), CommandError> {
    let session = state.session();
    if session.is_logged_in()? {
        session.logout()?;
        println!("Logged out");
    } else {
        println!("No active session");
    }
    Ok(())
}

/// Print the current session.
#[allow(clippy::print_stdout)]
pub fn whoami(state: &AppState) -> Result<(), CommandError> {
    match state.session().current_user()? {
        Some(user) => {
            println!("{} <{}>", user.username, user.email);
            println!("  id:   {}", user.id);
            println!("  role: {}", user.role);
        }
        None => println!("Not logged in"),
    }
    Ok(())
}
