use crate::roster::{Person, Team};
use std::collections::HashMap;

/// Derive the commit-email → notification-target mapping from the two roster
/// tables.
///
/// For each person, the target list is built in a fixed order: the direct
/// mention (`@username`) first, then the team channel (`#channel`). A target
/// is skipped when its flag is off or its source value is missing; the person
/// still claims their emails with whatever list remains, possibly empty.
///
/// When several teams share a name the first one in `teams` order is
/// authoritative. When several people share a commit email the later person
/// in `people` order wins.
pub fn resolve(people: &[Person], teams: &[Team]) -> HashMap<String, Vec<String>> {
    let mut result = HashMap::new();
    for person in people {
        let team = teams.iter().find(|t| t.name == person.team);

        let mut channels = Vec::new();
        if person.notify_me {
            if let Some(username) = &person.slack_username {
                channels.push(format!("@{username}"));
            }
        }
        if person.notify_team {
            if let Some(channel) = team.and_then(|t| t.slack_channel.as_ref()) {
                channels.push(format!("#{channel}"));
            }
        }

        for email in &person.git_commit_emails {
            result.insert(email.clone(), channels.clone());
        }
    }
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
