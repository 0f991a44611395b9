//! Grouping and Sorting
//!
//! Partitions a ticket list into named columns and orders each column.
//! Pure: the same inputs always produce the same columns.

use std::cmp::Ordering;
use std::collections::HashMap;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::models::{Ticket, User};
use crate::options::{GroupBy, SortBy};

/// Column name for tickets whose `userId` matches no user
pub const UNASSIGNED: &str = "Unassigned";

/// A named, ordered column of tickets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    pub tickets: Vec<Ticket>,
}

impl Group {
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Group tickets into columns and sort each column.
///
/// Columns appear in the order their key is first met while scanning
/// `tickets`. Every ticket lands in exactly one column.
///
/// Priority columns follow the same rule: headers are not re-ordered
/// numerically, so `[2, 0, 2]` yields columns `"2"` then `"0"`.
pub fn arrange(tickets: &[Ticket], users: &[User], group_by: GroupBy, sort_by: SortBy) -> Vec<Group> {
    // First user wins on duplicate ids
    let mut users_by_id: HashMap<&str, &str> = HashMap::new();
    for user in users {
        users_by_id.entry(user.id.as_str()).or_insert(user.name.as_str());
    }

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();
    for ticket in tickets {
        let key = group_key(ticket, &users_by_id, group_by);
        match index.get(&key) {
            Some(&i) => groups[i].tickets.push(ticket.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push(Group { name: key, tickets: vec![ticket.clone()] });
            }
        }
    }

    for group in &mut groups {
        sort_tickets(&mut group.tickets, sort_by);
    }
    groups
}

/// String-option entry point; unknown option values fall back to priority.
pub fn arrange_raw(tickets: &[Ticket], users: &[User], group_by: &str, sort_by: &str) -> Vec<Group> {
    arrange(tickets, users, GroupBy::from_str(group_by), SortBy::from_str(sort_by))
}

/// Column name a ticket belongs to under `group_by`
fn group_key(ticket: &Ticket, users_by_id: &HashMap<&str, &str>, group_by: GroupBy) -> String {
    match group_by {
        GroupBy::Status => ticket.status.clone(),
        GroupBy::User => ticket
            .user_id
            .as_deref()
            .and_then(|id| users_by_id.get(id))
            .map(|name| name.to_string())
            .unwrap_or_else(|| UNASSIGNED.to_string()),
        GroupBy::Priority => ticket.priority.to_string(),
    }
}

// slice::sort_by is stable, so ties keep input order
fn sort_tickets(tickets: &mut [Ticket], sort_by: SortBy) {
    match sort_by {
        SortBy::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortBy::Title => tickets.sort_by(|a, b| compare_titles(&a.title, &b.title)),
    }
}

/// Collation for titles, close to a root-locale collator.
///
/// Compared level by level: base letters (accents and case removed, with
/// punctuation before digits before letters), then accents, then case
/// (lowercase first), then code points.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| accented(a).cmp(accented(b)))
        .then_with(|| {
            a.nfd()
                .zip(b.nfd())
                .find(|(x, y)| x != y)
                .map(|(x, y)| x.is_uppercase().cmp(&y.is_uppercase()))
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.cmp(b))
}

fn base_letters(s: &str) -> impl Iterator<Item = (u8, char)> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), c))
}

// Unaccented sorts first: base letters precede U+0300.. combining marks
fn accented(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

fn char_class(c: char) -> u8 {
    if c.is_alphabetic() {
        2
    } else if c.is_numeric() {
        1
    } else {
        0
    }
}
