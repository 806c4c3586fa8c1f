use rand::Rng;

/// Commit messages the fabricated history cycles through, picked uniformly
/// per slot.
pub const COMMIT_MESSAGES: &[&str] = &[
    "feat: implement login page",
    "feat: add AI prediction API",
    "feat: integrate payment gateway",
    "fix: bug in dashboard chart rendering",
    "fix: handle null pointer in API",
    "fix: responsive design issue",
    "chore: update dependencies",
    "chore: cleanup unused code",
    "refactor: optimize API service",
    "refactor: improve component structure",
    "docs: update README",
    "docs: add API usage example",
    "test: add unit tests for auth",
    "test: improve coverage for utils",
    "style: improve UI consistency",
];

pub fn pick(rng: &mut impl Rng) -> &'static str {
    COMMIT_MESSAGES[rng.gen_range(0..COMMIT_MESSAGES.len())]
}
