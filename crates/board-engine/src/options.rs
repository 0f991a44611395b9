//! Display Options
//!
//! The two user-selectable board options: how tickets are grouped into
//! columns and how tickets are ordered inside a column.

use serde::{Deserialize, Serialize};

/// Grouping policy for board columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GroupBy {
    /// One column per status label
    #[default]
    Status,
    /// One column per assignee name
    User,
    /// One column per raw priority value
    Priority,
}

impl GroupBy {
    pub const ALL: [GroupBy; 3] = [GroupBy::Status, GroupBy::User, GroupBy::Priority];

    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Status => "status",
            GroupBy::User => "user",
            GroupBy::Priority => "priority",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GroupBy::Status => "Status",
            GroupBy::User => "User",
            GroupBy::Priority => "Priority",
        }
    }

    /// Unknown values group by priority.
    pub fn from_str(s: &str) -> Self {
        match s {
            "status" => GroupBy::Status,
            "user" => GroupBy::User,
            _ => GroupBy::Priority,
        }
    }
}

/// Ordering policy for tickets inside a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Highest priority first
    #[default]
    Priority,
    /// Title, ascending
    Title,
}

impl SortBy {
    pub const ALL: [SortBy; 2] = [SortBy::Priority, SortBy::Title];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Priority => "priority",
            SortBy::Title => "title",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortBy::Priority => "Priority",
            SortBy::Title => "Title",
        }
    }

    /// Unknown values sort by priority.
    pub fn from_str(s: &str) -> Self {
        match s {
            "title" => SortBy::Title,
            _ => SortBy::Priority,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values_parse() {
        for group_by in GroupBy::ALL {
            assert_eq!(GroupBy::from_str(group_by.as_str()), group_by);
        }
        for sort_by in SortBy::ALL {
            assert_eq!(SortBy::from_str(sort_by.as_str()), sort_by);
        }
    }

    #[test]
    fn test_unknown_values_fall_back_to_priority() {
        assert_eq!(GroupBy::from_str(""), GroupBy::Priority);
        assert_eq!(GroupBy::from_str("Status"), GroupBy::Priority);
        assert_eq!(SortBy::from_str("date"), SortBy::Priority);
    }

    #[test]
    fn test_defaults() {
        assert_eq!(GroupBy::default(), GroupBy::Status);
        assert_eq!(SortBy::default(), SortBy::Priority);
    }
}
