use std::sync::OnceLock;
use crate::config::LDAP_GROUPS;
use crate::models::models::{Author, Comment, Issue, IssueStatus};

const ISSUE_TITLE: &str = "Nie ma ciepłej wody na trzecim piętrze";
const ISSUE_DESCRIPTION: &str =
    "W męskiej łazience na trzecim piętrze nie ma ciepłej wody w pierszym kranie od lewej";
const ISSUE_CREATED_AT: &str = "2017-05-10T10:03:46+02:00";

/// Canned records served by every handler. Built once, never mutated.
pub struct Fixtures {
    pub issues: Vec<Issue>,
    pub issue_comments: Vec<Comment>,
    pub created_comment: Comment,
    pub ldap_groups: Vec<&'static str>,
}

impl Fixtures {
    /// The issue standing in for "the one you asked for" (id 123).
    pub fn first_issue(&self) -> &Issue {
        &self.issues[0]
    }
}

pub fn fixtures() -> &'static Fixtures {
    static FIXTURES: OnceLock<Fixtures> = OnceLock::new();
    FIXTURES.get_or_init(build)
}

fn author(login: &str, first_name: &str, last_name: &str) -> Author {
    Author {
        login: login.to_string(),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    }
}

fn sample_issue(id: u64) -> Issue {
    Issue {
        id,
        title: ISSUE_TITLE.to_string(),
        description: ISSUE_DESCRIPTION.to_string(),
        status: IssueStatus::Open,
        score: 0,
        author: author("jank", "Jan", "Kowalski"),
        created_at: ISSUE_CREATED_AT.to_string(),
    }
}

fn build() -> Fixtures {
    Fixtures {
        issues: vec![sample_issue(123), sample_issue(234)],
        issue_comments: vec![Comment {
            id: 123,
            text: "Jestem morsem".to_string(),
            author: Some(author("jacekn", "Jacek", "Nowak")),
            created_at: "2017-05-10T10:12:23+02:00".to_string(),
        }],
        created_comment: Comment {
            id: 123,
            text: "Mi tam nie przeszkadza, jestem morsem".to_string(),
            author: None,
            created_at: ISSUE_CREATED_AT.to_string(),
        },
        ldap_groups: LDAP_GROUPS.to_vec(),
    }
}
