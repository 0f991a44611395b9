//! Board Models
//!
//! Data structures matching the board endpoint payload.

use serde::{Deserialize, Serialize};

/// Ticket data structure (matches endpoint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub title: String,
    pub status: String,
    pub priority: i32,
    /// Assignee reference; may point at no known user
    #[serde(rename = "userId", default)]
    pub user_id: Option<String>,
}

/// User data structure (matches endpoint)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub available: bool,
}

/// Full endpoint response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    #[serde(default)]
    pub users: Vec<User>,
}

impl BoardData {
    /// Name of the user a ticket is assigned to, if that user exists
    pub fn user_name(&self, user_id: Option<&str>) -> Option<&str> {
        find_user_name(&self.users, user_id)
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty() && self.users.is_empty()
    }
}

/// First user whose id matches `user_id`
pub fn find_user_name<'a>(users: &'a [User], user_id: Option<&str>) -> Option<&'a str> {
    let user_id = user_id?;
    users.iter().find(|u| u.id == user_id).map(|u| u.name.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "tickets": [
            {"id": "CAM-1", "title": "Update user profile page UI", "tag": ["Feature request"],
             "userId": "usr-1", "status": "Todo", "priority": 4},
            {"id": "CAM-2", "title": "Add multi-language support", "status": "In progress",
             "priority": 3, "userId": null},
            {"id": "CAM-3", "title": "Optimize database queries", "status": "Backlog", "priority": 0}
        ],
        "users": [
            {"id": "usr-1", "name": "Anoop sharma", "available": false},
            {"id": "usr-2", "name": "Yogesh"}
        ]
    }"#;

    #[test]
    fn test_parse_payload() {
        let data: BoardData = serde_json::from_str(PAYLOAD).expect("payload should parse");

        assert_eq!(data.tickets.len(), 3);
        assert_eq!(data.users.len(), 2);
        assert_eq!(data.tickets[0].user_id.as_deref(), Some("usr-1"));
        // Explicit null and missing key both mean unassigned
        assert_eq!(data.tickets[1].user_id, None);
        assert_eq!(data.tickets[2].user_id, None);
        assert!(!data.users[1].available);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let data: BoardData = serde_json::from_str("{}").unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_user_name_lookup() {
        let data: BoardData = serde_json::from_str(PAYLOAD).unwrap();

        assert_eq!(data.user_name(Some("usr-2")), Some("Yogesh"));
        assert_eq!(data.user_name(Some("usr-9")), None);
        assert_eq!(data.user_name(None), None);
    }
}
