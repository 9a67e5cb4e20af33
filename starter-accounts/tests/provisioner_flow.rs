use pretty_assertions::assert_eq;
use starter_accounts::{
    AdminProvisioner, JsonUserStore, PasswordHasher, ProvisionOutcome, Sha256Hasher, UserStore,
};
use starter_core::config::AdminSettings;
use starter_core::StarterError;
use starter_test::mock::PromptEvent;
use starter_test::{with_test_env, Context, MockHasher, MockPrompter, MockUserStore};

fn provisioner() -> AdminProvisioner {
    AdminProvisioner::new(AdminSettings::default())
}

#[test]
fn test_defaults_accepted_and_account_created() {
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("")
        .secret("password1")
        .secret("password1");
    let mut store = MockUserStore::new();

    let outcome = provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap();

    let ProvisionOutcome::Created { user_id, email, masked_password } = outcome else {
        panic!("Expected account creation");
    };
    assert_eq!(email, "admin@example.com");
    assert_eq!(masked_password, "*********");

    let user = &store.users()[0];
    assert_eq!(user.id, user_id);
    assert_eq!(user.name, "Super Admin");
    assert_eq!(user.locale, "en");
    assert_eq!(user.password_hash, "hashed:password1");
    assert!(user.email_verified_at.is_some());
    assert_eq!(user.roles, vec!["Super Admin"]);
    assert!(prompter.errors().is_empty());
    assert!(prompter.is_exhausted());
}

#[test]
fn test_invalid_email_reprompts() {
    let mut prompter = MockPrompter::new()
        .answer("Jane Admin")
        .answer("not-an-email")
        .answer("jane@example.com")
        .secret("password1")
        .secret("password1");
    let mut store = MockUserStore::new();

    provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap();

    assert_eq!(prompter.times_asked("Email"), 2);
    assert_eq!(prompter.errors(), vec!["Invalid email format. Please try again."]);
    assert_eq!(store.users()[0].email, "jane@example.com");
    assert_eq!(store.users()[0].name, "Jane Admin");
}

#[test]
fn test_short_password_reprompts() {
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("")
        .secret("abcde")
        .secret("abcdefgh")
        .secret("abcdefgh");
    let mut store = MockUserStore::new();

    let outcome = provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap();

    assert!(matches!(outcome, ProvisionOutcome::Created { .. }));
    assert_eq!(prompter.times_asked("Password (min 8 characters)"), 2);
    assert_eq!(
        prompter.errors(),
        vec!["Password must be at least 8 characters long."]
    );
}

#[test]
fn test_mismatched_confirmation_reprompts_both() {
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("")
        .secret("password1")
        .secret("password2")
        .secret("password3")
        .secret("password3");
    let mut store = MockUserStore::new();

    let outcome = provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap();

    let ProvisionOutcome::Created { masked_password, .. } = outcome else {
        panic!("Expected account creation");
    };
    assert_eq!(masked_password, "*********");
    assert_eq!(prompter.times_asked("Password (min 8 characters)"), 2);
    assert_eq!(prompter.times_asked("Confirm Password"), 2);
    assert_eq!(prompter.errors(), vec!["Passwords do not match. Please try again."]);
    assert_eq!(store.users()[0].password_hash, "hashed:password3");
}

#[test]
fn test_duplicate_declined_cancels_without_creating() {
    let mut prompter = MockPrompter::new().answer("").answer("").confirm(false);
    let mut store = MockUserStore::new().with_user("Existing", "admin@example.com");

    let outcome = provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap();

    assert_eq!(outcome, ProvisionOutcome::Cancelled);
    assert_eq!(store.users().len(), 1);
    assert_eq!(store.create_calls(), 0);
    assert_eq!(prompter.warnings(), vec!["A user with this email already exists!"]);
    assert_eq!(
        prompter.events().last(),
        Some(&PromptEvent::Confirm("Do you want to continue anyway?".to_string()))
    );
}

#[test]
fn test_duplicate_confirmed_continues() {
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("")
        .confirm(true)
        .secret("password1")
        .secret("password1");
    let mut store = MockUserStore::new().with_user("Existing", "admin@example.com");

    let outcome = provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap();

    assert!(matches!(outcome, ProvisionOutcome::Created { .. }));
    assert_eq!(store.users().len(), 2);
}

#[test]
fn test_create_failure_is_persistence_error() {
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("")
        .secret("password1")
        .secret("password1");
    let mut store = MockUserStore::new()
        .with_create_failure("SQLSTATE[23000]: Integrity constraint violation");

    let err = provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap_err();

    match err {
        StarterError::Persistence(msg) => {
            assert_eq!(msg, "SQLSTATE[23000]: Integrity constraint violation")
        }
        other => panic!("Expected Persistence error, got {:?}", other),
    }
    assert!(store.users().is_empty());
}

#[test]
fn test_role_failure_leaves_unassigned_account() {
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("")
        .secret("password1")
        .secret("password1");
    let mut store =
        MockUserStore::new().with_assign_failure("There is no role named `Super Admin`.");

    let err = provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap_err();

    assert!(matches!(err, StarterError::Persistence(_)));
    assert_eq!(store.users().len(), 1);
    assert!(store.users()[0].roles.is_empty());
}

#[test]
fn test_hash_failure_is_persistence_error() {
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("")
        .secret("password1")
        .secret("password1");
    let mut store = MockUserStore::new();

    let err = provisioner()
        .run(&mut prompter, &mut store, &MockHasher::new().with_failure("no entropy"))
        .unwrap_err();

    assert!(matches!(err, StarterError::Persistence(_)));
    assert_eq!(store.create_calls(), 0);
}

#[test]
fn test_configured_role_locale_and_length() {
    let settings = AdminSettings {
        role: "Owner".to_string(),
        locale: "da".to_string(),
        min_password_length: 12,
        ..AdminSettings::default()
    };
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("")
        .secret("password1")
        .secret("password1234")
        .secret("password1234");
    let mut store = MockUserStore::new();

    AdminProvisioner::new(settings)
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap();

    let user = &store.users()[0];
    assert_eq!(user.roles, vec!["Owner"]);
    assert_eq!(user.locale, "da");
    assert_eq!(prompter.times_asked("Password (min 12 characters)"), 2);
}

#[test]
fn test_attempt_cap_stops_retrying() {
    let settings = AdminSettings {
        max_attempts: Some(2),
        ..AdminSettings::default()
    };
    let mut prompter = MockPrompter::new()
        .answer("")
        .answer("bad")
        .answer("still-bad");
    let mut store = MockUserStore::new();

    let err = AdminProvisioner::new(settings)
        .run(&mut prompter, &mut store, &MockHasher::new())
        .unwrap_err();

    assert!(matches!(err, StarterError::InvalidInput(_)));
    assert_eq!(prompter.times_asked("Email"), 2);
}

#[test]
fn test_end_to_end_with_json_store() -> starter_test::Result<()> {
    with_test_env(|env| {
        let hasher = Sha256Hasher::with_rounds(5);
        let mut prompter = MockPrompter::new()
            .answer("Ops")
            .answer("ops@example.com")
            .secret("s3cure-pass")
            .secret("s3cure-pass");

        {
            let mut store = JsonUserStore::open(env.accounts_path())?;
            provisioner().run(&mut prompter, &mut store, &hasher)?;
        }

        let store = JsonUserStore::open(env.accounts_path())?;
        let user = store
            .find_by_email("ops@example.com")?
            .context("account was not persisted")?;
        assert!(hasher.verify("s3cure-pass", &user.password_hash));
        assert!(user.has_role("Super Admin"));
        Ok(())
    })
}

#[test]
fn test_duplicate_confirmed_against_json_store_fails_persistence() -> starter_test::Result<()> {
    with_test_env(|env| {
        let hasher = Sha256Hasher::with_rounds(5);
        let answers = || {
            MockPrompter::new()
                .answer("")
                .answer("")
        };

        let mut store = JsonUserStore::open(env.accounts_path())?;
        let mut first = answers().secret("password1").secret("password1");
        provisioner().run(&mut first, &mut store, &hasher)?;

        let mut second = answers().confirm(true).secret("password2").secret("password2");
        let err = provisioner()
            .run(&mut second, &mut store, &hasher)
            .unwrap_err();

        assert!(matches!(err, StarterError::Persistence(_)));
        assert_eq!(store.users().len(), 1);
        Ok(())
    })
}
