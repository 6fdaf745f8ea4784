//! Portal namespace descriptors.
//!
//! DESIGN
//! ======
//! The hub-operator and student portals run the same session machinery with
//! different storage keys and routes. Everything namespace-specific lives in
//! one static descriptor so the invariants hold identically in each portal.

#[cfg(test)]
#[path = "namespace_test.rs"]
mod namespace_test;

/// Static description of one independently authenticated portal.
///
/// Session state never mixes across namespaces: each has its own storage
/// keys and its own route space.
#[derive(Debug)]
pub struct Namespace {
    /// Short name used in API paths (`/auth/{name}/...`).
    pub name: &'static str,
    /// Human-readable portal title for page chrome.
    pub title: &'static str,
    /// localStorage key holding the serialized actor record.
    pub actor_key: &'static str,
    /// localStorage key holding the raw credential token.
    pub token_key: &'static str,
    /// Public sign-in route.
    pub login_path: &'static str,
    /// Public registration route.
    pub register_path: &'static str,
    /// Public route for requesting a password-reset email.
    pub forgot_password_path: &'static str,
    /// Prefix of the tokenized reset route (`{prefix}{token}`).
    pub reset_password_prefix: &'static str,
    /// Default authenticated landing route.
    pub landing_path: &'static str,
}

/// Tutoring-hub operator portal.
pub static COHUB: Namespace = Namespace {
    name: "cohub",
    title: "Hub Operator Portal",
    actor_key: "tutorhub_cohub_actor",
    token_key: "tutorhub_cohub_token",
    login_path: "/cohub/login",
    register_path: "/cohub/register",
    forgot_password_path: "/cohub/forgot-password",
    reset_password_prefix: "/cohub/reset-password/",
    landing_path: "/cohub/dashboard",
};

/// Student portal.
pub static STUDENT: Namespace = Namespace {
    name: "student",
    title: "Student Portal",
    actor_key: "tutorhub_student_actor",
    token_key: "tutorhub_student_token",
    login_path: "/student/login",
    register_path: "/student/register",
    forgot_password_path: "/student/forgot-password",
    reset_password_prefix: "/student/reset-password/",
    landing_path: "/student/dashboard",
};

impl Namespace {
    /// Whether `path` is on this namespace's public allowlist.
    ///
    /// Public routes (login, register, forgot-password, and reset-password
    /// with a non-empty token segment) must never be intercepted by the
    /// route guard, regardless of session state.
    pub fn is_public_path(&self, path: &str) -> bool {
        path == self.login_path
            || path == self.register_path
            || path == self.forgot_password_path
            || path
                .strip_prefix(self.reset_password_prefix)
                .is_some_and(|token| !token.is_empty())
    }
}
