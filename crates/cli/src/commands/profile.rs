//! Profile update.
//!
//! # Usage
//!
//! ```bash
//! # Issues a new user id, like logging in again
//! bm-cli profile -e alice@example.com -u alice2
//!
//! # Keeps the current user id
//! bm-cli profile -e alice@example.com -u alice2 --keep-id
//! ```

use buildmart_storefront::state::AppState;
use buildmart_storefront::stores::IdentityPolicy;
use buildmart_storefront::views::ProfileForm;

use super::CommandError;

/// Apply new display fields to the session.
#[allow(clippy::print_stdout)]
pub fn update(
    state: &AppState,
    email: String,
    username: String,
    phone: String,
    policy: IdentityPolicy,
) -> Result<(), CommandError> {
    let form = ProfileForm {
        username,
        email,
        phone,
    };
    let user = form.submit(&state.session(), policy)?;
    println!("Profile saved: {} <{}> ({})", user.username, user.email, user.id);
    Ok(())
}
