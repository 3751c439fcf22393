/// Mutually exclusive terminal outcomes for a login attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failure,
    EmptyValidation,
}

#[derive(Debug, Clone)]
pub struct LoginCase {
    pub username: &'static str,
    pub password: &'static str,
    pub expected: LoginOutcome,
}

/// Fixed scenario table consumed by the login runner: one case per outcome.
pub fn login_cases() -> Vec<LoginCase> {
    vec![
        // Valid credentials. Placeholder pair: swap in a real account or
        // the success case cannot pass against the live site.
        LoginCase {
            username: "demo.user@example.com",
            password: "Dem0Hesap!97",
            expected: LoginOutcome::Success,
        },
        // Invalid credentials
        LoginCase {
            username: "invalid@example.com",
            password: "wrongpassword",
            expected: LoginOutcome::Failure,
        },
        // Empty credentials
        LoginCase {
            username: "",
            password: "",
            expected: LoginOutcome::EmptyValidation,
        },
    ]
}
