use serde::{Serialize, Deserialize};
use std::fmt;
use std::str::FromStr;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Author {
    pub login: String,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Open,
    Declined,
    Resolved,
}

impl IssueStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueStatus::Open => "open",
            IssueStatus::Declined => "declined",
            IssueStatus::Resolved => "resolved",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "open" => Ok(IssueStatus::Open),
            "declined" => Ok(IssueStatus::Declined),
            "resolved" => Ok(IssueStatus::Resolved),
            _ => Err(()),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Issue {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub status: IssueStatus,
    pub score: i64,
    pub author: Author,
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Comment {
    pub id: u64,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<Author>,
    pub created_at: String,
}

/// Issue view with its comments appended after the issue fields.
#[derive(Serialize)]
pub struct IssueWithComments<'a> {
    #[serde(flatten)]
    pub issue: &'a Issue,
    pub comments: &'a [Comment],
}

/// Untyped so that a number or null is refused as bad credentials rather
/// than as a malformed body.
#[derive(Deserialize, Default)]
pub struct Credentials {
    #[serde(default)]
    pub user: serde_json::Value,
    #[serde(default)]
    pub password: serde_json::Value,
}

#[derive(Deserialize, Default)]
pub struct GenerateTokensRequest {
    #[serde(default)]
    pub emails: Vec<String>,
    #[serde(default, rename = "ldapGroups")]
    pub ldap_groups: Vec<String>,
}

/// `status` stays untyped so a number or null reads as an invalid status,
/// not as a malformed body.
#[derive(Deserialize, Default)]
pub struct StatusChange {
    #[serde(default)]
    pub status: serde_json::Value,
}

#[derive(Serialize)]
pub struct LoginResponse<'a> {
    #[serde(rename = "authenticationToken")]
    pub authentication_token: &'a str,
}

#[derive(Serialize)]
pub struct VoteResponse {
    pub score: i64,
}

#[derive(Serialize)]
pub struct TokenInfo {
    pub points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_only_exact_lowercase_names() {
        assert_eq!("open".parse::<IssueStatus>(), Ok(IssueStatus::Open));
        assert_eq!("declined".parse::<IssueStatus>(), Ok(IssueStatus::Declined));
        assert_eq!("resolved".parse::<IssueStatus>(), Ok(IssueStatus::Resolved));
        assert!("Open".parse::<IssueStatus>().is_err());
        assert!("closed".parse::<IssueStatus>().is_err());
        assert!("".parse::<IssueStatus>().is_err());
    }

    #[test]
    fn comment_without_author_omits_the_key() {
        let comment = Comment {
            id: 1,
            text: "hi".to_string(),
            author: None,
            created_at: "2017-05-10T10:03:46+02:00".to_string(),
        };
        let value = serde_json::to_value(&comment).unwrap();
        assert!(value.get("author").is_none());
        assert_eq!(value["text"], "hi");
    }

    #[test]
    fn generate_tokens_request_defaults_missing_lists() {
        let req: GenerateTokensRequest = serde_json::from_str(r#"{"emails":["a@b"]}"#).unwrap();
        assert_eq!(req.emails, vec!["a@b".to_string()]);
        assert!(req.ldap_groups.is_empty());
    }
}
