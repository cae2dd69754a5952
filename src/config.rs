pub const AUTH_TOKEN: &str = "sampleAuthToken";
pub const VOTING_TOKEN: &str = "sampleVotingToken";
pub const NO_VOTES_LEFT_TOKEN: &str = "notEnoughToken";

pub const AUTH_TOKEN_NAME: &str = "auth";
pub const VOTING_TOKEN_NAME: &str = "voting";

pub const TESTER_LOGIN: &str = "tester";
pub const TESTER_PASSWORD: &str = "password123";

pub const VOTE_SCORE: i64 = 10;
pub const TOKEN_POINTS: i64 = 5;

pub const REJECTED_EMAIL: &str = "jan@1231231";
pub const REJECTED_LDAP_GROUP: &str = "szefowie";
pub const LDAP_GROUPS: [&str; 2] = ["studenci", "pracownicy"];

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";
pub const DEFAULT_LOG_FILTER: &str = "info";

pub fn bind_address() -> String {
    std::env::var("ISSUES_MOCK_BIND")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
}

/// Worker count for the native server. `None` leaves the choice to actix.
pub fn worker_count() -> Option<usize> {
    std::env::var("ISSUES_MOCK_WORKERS")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .filter(|n| *n > 0)
}

pub fn log_filter() -> String {
    std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

pub fn json_logs() -> bool {
    std::env::var("ISSUES_MOCK_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}
