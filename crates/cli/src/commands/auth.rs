//! Account commands.

use tracing::info;

use playlog_client::{
    ForgotPasswordForm, ForgotPasswordOutcome, LoginForm, LoginOutcome, SignupForm, SignupOutcome,
};

use super::{CommandError, connect};

/// Create an account.
///
/// # Errors
///
/// Returns `CommandError::Invalid` if a field fails validation and
/// `CommandError::Failed` if the server refuses the account.
pub async fn signup(username: String, email: String, password: String) -> Result<(), CommandError> {
    let client = connect()?;
    let mut form = SignupForm::new(username, email, password);

    match form.submit(&client).await {
        SignupOutcome::Created { email } => {
            info!(email = %email, "Account created, you can now log in");
            Ok(())
        }
        SignupOutcome::Invalid => {
            let errors = form.errors();
            let messages: Vec<&str> = [&errors.username, &errors.email, &errors.password]
                .into_iter()
                .map(String::as_str)
                .filter(|m| !m.is_empty())
                .collect();
            Err(CommandError::Invalid(messages.join(" ")))
        }
        SignupOutcome::Rejected | SignupOutcome::Failed => {
            Err(CommandError::Failed(form.errors().username.clone()))
        }
    }
}

/// Log in.
///
/// # Errors
///
/// Returns `CommandError::Failed` with the form's message if the login fails.
pub async fn login(email: String, password: String) -> Result<(), CommandError> {
    let client = connect()?;
    let mut form = LoginForm::new(email, password);

    match form.submit(&client).await {
        LoginOutcome::LoggedIn(session) => {
            info!("Welcome, {}", session.display_name());
            Ok(())
        }
        LoginOutcome::Failed => Err(CommandError::Failed(form.error().to_string())),
    }
}

/// Request a password reset email.
///
/// # Errors
///
/// Returns `CommandError::Invalid` for a malformed email and
/// `CommandError::Failed` if no account has it or the request fails.
pub async fn forgot_password(email: String) -> Result<(), CommandError> {
    let client = connect()?;
    let mut form = ForgotPasswordForm::new(email);

    match form.submit(&client).await {
        ForgotPasswordOutcome::Sent { .. } => {
            info!("{}", form.success());
            Ok(())
        }
        ForgotPasswordOutcome::Invalid => Err(CommandError::Invalid(form.error().to_string())),
        ForgotPasswordOutcome::NotFound | ForgotPasswordOutcome::Failed => {
            Err(CommandError::Failed(form.error().to_string()))
        }
    }
}
