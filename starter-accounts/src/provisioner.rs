use crate::hasher::PasswordHasher;
use crate::prompt::Prompter;
use crate::store::UserStore;
use chrono::Utc;
use starter_core::config::AdminSettings;
use starter_core::{mask_password, AdminAccountRequest, StarterError, StarterResult};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const NAME_PROMPT: &str = "Name";
pub const EMAIL_PROMPT: &str = "Email";
pub const CONFIRM_PROMPT: &str = "Confirm Password";
pub const DUPLICATE_PROMPT: &str = "Do you want to continue anyway?";

/// How a provisioning run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProvisionOutcome {
    Created {
        user_id: Uuid,
        email: String,
        masked_password: String,
    },
    /// Operator declined to continue after the duplicate-email warning
    Cancelled,
}

/// Standard local-part@domain syntax check
pub fn is_valid_email(email: &str) -> bool {
    validator::validate_email(email)
}

/// Interactive super admin creation
///
/// Every input loop retries until the answer is valid unless
/// `max_attempts` is set, in which case exhausting it is an
/// `InvalidInput` error.
pub struct AdminProvisioner {
    settings: AdminSettings,
}

impl AdminProvisioner {
    pub fn new(settings: AdminSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &AdminSettings {
        &self.settings
    }

    pub fn run<P, S, H>(
        &self,
        prompter: &mut P,
        store: &mut S,
        hasher: &H,
    ) -> StarterResult<ProvisionOutcome>
    where
        P: Prompter + ?Sized,
        S: UserStore + ?Sized,
        H: PasswordHasher + ?Sized,
    {
        let name = self.collect_name(prompter)?;
        let email = self.collect_email(prompter)?;

        if !self.confirm_if_duplicate(prompter, store, &email)? {
            info!("Super admin creation cancelled for {}", email);
            return Ok(ProvisionOutcome::Cancelled);
        }

        let password = self.collect_password(prompter)?;

        let request = AdminAccountRequest {
            name,
            email,
            password,
            locale: self.settings.locale.clone(),
        };
        self.persist(request, store, hasher)
    }

    fn collect_name<P: Prompter + ?Sized>(&self, prompter: &mut P) -> StarterResult<String> {
        let mut attempts = 0;
        loop {
            let name = prompter.input(NAME_PROMPT, &self.settings.default_name)?;
            if !name.trim().is_empty() {
                return Ok(name);
            }
            prompter.error("Name cannot be empty.");
            attempts += 1;
            self.check_attempts(attempts, "name")?;
        }
    }

    fn collect_email<P: Prompter + ?Sized>(&self, prompter: &mut P) -> StarterResult<String> {
        let mut attempts = 0;
        loop {
            let email = prompter.input(EMAIL_PROMPT, &self.settings.default_email)?;
            if is_valid_email(&email) {
                return Ok(email);
            }
            debug!("Rejected email {:?}", email);
            prompter.error("Invalid email format. Please try again.");
            attempts += 1;
            self.check_attempts(attempts, "email")?;
        }
    }

    /// Returns false when the operator declines to continue past a duplicate
    fn confirm_if_duplicate<P, S>(
        &self,
        prompter: &mut P,
        store: &S,
        email: &str,
    ) -> StarterResult<bool>
    where
        P: Prompter + ?Sized,
        S: UserStore + ?Sized,
    {
        let existing = store.find_by_email(email).map_err(into_persistence)?;
        if existing.is_none() {
            return Ok(true);
        }

        warn!("Account with email {} already exists", email);
        prompter.warning("A user with this email already exists!");
        prompter.confirm(DUPLICATE_PROMPT, false)
    }

    fn collect_password<P: Prompter + ?Sized>(&self, prompter: &mut P) -> StarterResult<String> {
        let min_length = self.settings.min_password_length;
        let password_prompt = format!("Password (min {} characters)", min_length);
        let mut mismatches = 0;

        loop {
            let mut attempts = 0;
            let password = loop {
                let password = prompter.secret(&password_prompt)?;
                if password.chars().count() >= min_length {
                    break password;
                }
                prompter.error(&format!(
                    "Password must be at least {} characters long.",
                    min_length
                ));
                attempts += 1;
                self.check_attempts(attempts, "password")?;
            };

            let confirmation = prompter.secret(CONFIRM_PROMPT)?;
            if confirmation == password {
                return Ok(password);
            }

            prompter.error("Passwords do not match. Please try again.");
            mismatches += 1;
            self.check_attempts(mismatches, "password confirmation")?;
        }
    }

    fn persist<S, H>(
        &self,
        request: AdminAccountRequest,
        store: &mut S,
        hasher: &H,
    ) -> StarterResult<ProvisionOutcome>
    where
        S: UserStore + ?Sized,
        H: PasswordHasher + ?Sized,
    {
        let password_hash = hasher.hash(&request.password).map_err(into_persistence)?;
        let masked_password = mask_password(&request.password);
        let email = request.email.clone();

        let user = store
            .create(request.into_new_user(password_hash, Utc::now()))
            .map_err(into_persistence)?;

        // No rollback: a failure here leaves the account without the role
        store
            .assign_role(&user.id, &self.settings.role)
            .map_err(into_persistence)?;

        info!("Created super admin {} <{}>", user.id, email);
        Ok(ProvisionOutcome::Created {
            user_id: user.id,
            email,
            masked_password,
        })
    }

    fn check_attempts(&self, attempts: usize, field: &str) -> StarterResult<()> {
        match self.settings.max_attempts {
            Some(max) if attempts >= max => Err(StarterError::InvalidInput(format!(
                "Too many invalid {} attempts ({})",
                field, attempts
            ))),
            _ => Ok(()),
        }
    }
}

fn into_persistence(err: StarterError) -> StarterError {
    match err {
        StarterError::Persistence(msg) => StarterError::Persistence(msg),
        other => StarterError::Persistence(other.to_string()),
    }
}
