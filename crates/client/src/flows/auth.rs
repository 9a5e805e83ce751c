//! Signup, login and password reset forms.

use std::fmt;

use tracing::{error, info, warn};

use playlog_core::{Email, Password, Session, SignupErrors, Username};

use crate::client::PlayLogClient;

/// Username error shown when the server refuses a signup.
pub const SIGNUP_DUPLICATE_MESSAGE: &str = "Duplicate username or email.";

/// Error shown when a login attempt fails for any reason.
pub const LOGIN_FAILED_MESSAGE: &str = "Incorrect e-mail or password!";

/// Error shown when no account has the email a reset was requested for.
pub const RESET_USER_NOT_FOUND_MESSAGE: &str = "No user found with that email address.";

// =============================================================================
// Signup
// =============================================================================

/// Result of submitting the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// A field failed validation; nothing was sent.
    Invalid,
    /// The server refused the account.
    Rejected,
    /// The request did not complete.
    Failed,
    /// Account created. The form moves on to login with this email.
    Created { email: Email },
}

/// Signup form state.
#[derive(Clone)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    password: Password,
    errors: SignupErrors,
}

impl fmt::Debug for SignupForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupForm")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("errors", &self.errors)
            .finish()
    }
}

impl SignupForm {
    #[must_use]
    pub fn new(
        username: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            email: email.into(),
            password: Password::unchecked(password),
            errors: SignupErrors::default(),
        }
    }

    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Password::unchecked(password);
    }

    /// Inline messages under each field.
    #[must_use]
    pub const fn errors(&self) -> &SignupErrors {
        &self.errors
    }

    /// Validate and, if every field passes, create the account.
    pub async fn submit(&mut self, client: &PlayLogClient) -> SignupOutcome {
        self.errors = SignupErrors::check(&self.username, &self.email, self.password.expose());
        if !self.errors.is_empty() {
            return SignupOutcome::Invalid;
        }

        let (Ok(username), Ok(email)) = (Username::parse(&self.username), Email::parse(&self.email))
        else {
            return SignupOutcome::Invalid;
        };

        match client.signup(&username, &email, &self.password).await {
            Ok(()) => {
                info!(username = %username, "Account created");
                SignupOutcome::Created { email }
            }
            Err(e) if e.is_api() => {
                warn!(username = %username, error = %e, "Signup rejected");
                self.errors.username = SIGNUP_DUPLICATE_MESSAGE.to_string();
                self.errors.password.clear();
                SignupOutcome::Rejected
            }
            Err(e) => {
                error!(username = %username, error = %e, "Signup request failed");
                self.errors.username = e.user_message().to_string();
                SignupOutcome::Failed
            }
        }
    }
}

// =============================================================================
// Login
// =============================================================================

/// Result of submitting the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    LoggedIn(Session),
    Failed,
}

/// Login form state.
#[derive(Clone)]
pub struct LoginForm {
    pub email: String,
    password: Password,
    error: String,
}

impl fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginForm")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("error", &self.error)
            .finish()
    }
}

impl LoginForm {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: Password::unchecked(password),
            error: String::new(),
        }
    }

    /// Message under the form, empty when none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Whether the last attempt failed.
    #[must_use]
    pub fn login_failed(&self) -> bool {
        !self.error.is_empty()
    }

    /// Log in. The password is sent as typed; signup rules do not apply.
    pub async fn submit(&mut self, client: &PlayLogClient) -> LoginOutcome {
        let email = match Email::parse(&self.email) {
            Ok(email) => email,
            Err(e) => {
                self.error = e.to_string();
                return LoginOutcome::Failed;
            }
        };

        match client.login(&email, &self.password).await {
            Ok(response) => {
                info!(username = %response.username, "Logged in");
                self.error.clear();
                LoginOutcome::LoggedIn(Session::authenticated(
                    response.username,
                    email.into_inner(),
                ))
            }
            Err(e) => {
                warn!(email = %email, error = %e, "Login failed");
                self.error = LOGIN_FAILED_MESSAGE.to_string();
                LoginOutcome::Failed
            }
        }
    }
}

// =============================================================================
// Password reset
// =============================================================================

/// Result of submitting the password reset form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgotPasswordOutcome {
    /// The email is malformed; nothing was sent.
    Invalid,
    /// No account has this email.
    NotFound,
    /// The request did not complete.
    Failed,
    /// A reset email is on its way.
    Sent { email: Email },
}

/// Password reset form state. Holds either an error or a success message.
#[derive(Debug, Clone, Default)]
pub struct ForgotPasswordForm {
    pub email: String,
    error: String,
    success: String,
}

impl ForgotPasswordForm {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..Self::default()
        }
    }

    /// Error under the form, empty when none.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    /// Confirmation under the form, empty when none.
    #[must_use]
    pub fn success(&self) -> &str {
        &self.success
    }

    /// Request a reset email.
    pub async fn submit(&mut self, client: &PlayLogClient) -> ForgotPasswordOutcome {
        self.success.clear();

        let email = match Email::parse(&self.email) {
            Ok(email) => email,
            Err(e) => {
                self.error = e.to_string();
                return ForgotPasswordOutcome::Invalid;
            }
        };

        match client.forgot_password(&email).await {
            Ok(true) => {
                info!(email = %email, "Password reset email requested");
                self.error.clear();
                self.success = format!("Reset email sent to: {email}");
                ForgotPasswordOutcome::Sent { email }
            }
            Ok(false) => {
                warn!(email = %email, "Password reset requested for unknown email");
                self.error = RESET_USER_NOT_FOUND_MESSAGE.to_string();
                ForgotPasswordOutcome::NotFound
            }
            Err(e) => {
                error!(email = %email, error = %e, "Password reset request failed");
                self.error = e.user_message().to_string();
                ForgotPasswordOutcome::Failed
            }
        }
    }
}
