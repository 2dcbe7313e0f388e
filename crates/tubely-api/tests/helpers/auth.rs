/// Signing secret shared by the test config and the token helpers.
pub const TEST_JWT_SECRET: &str = "test-jwt-secret-at-least-32-characters-long";

/// `Authorization` header value for a token
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}
