//! Shortage records and their field types

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use shortage_util::{TrackerError, eq_ignore_case};
use std::fmt;
use std::str::FromStr;

/// Lowest accepted priority
pub const PRIORITY_MIN: u8 = 1;

/// Highest accepted priority
pub const PRIORITY_MAX: u8 = 10;

/// Room where an item is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Room {
    MeetingRoom,
    Kitchen,
    Bathroom,
}

impl Room {
    pub const ALL: [Room; 3] = [Room::MeetingRoom, Room::Kitchen, Room::Bathroom];

    pub fn as_str(&self) -> &'static str {
        match self {
            Room::MeetingRoom => "MeetingRoom",
            Room::Kitchen => "Kitchen",
            Room::Bathroom => "Bathroom",
        }
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Room {
    type Err = TrackerError;

    /// Symbolic names only, any case. Numeric codes are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Room::ALL
            .into_iter()
            .find(|room| eq_ignore_case(room.as_str(), s))
            .ok_or_else(|| TrackerError::room(s))
    }
}

/// Kind of item that is missing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Food,
    Other,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Electronics, Category::Food, Category::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Food => "Food",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Category::ALL
            .into_iter()
            .find(|category| eq_ignore_case(category.as_str(), s))
            .ok_or_else(|| TrackerError::category(s))
    }
}

/// Parse a priority typed by a user, enforcing the 1-10 range.
pub fn parse_priority(input: &str) -> Result<u8, TrackerError> {
    let invalid = || TrackerError::InvalidPriority {
        input: input.to_string(),
        min: PRIORITY_MIN,
        max: PRIORITY_MAX,
    };

    let value: u8 = input.trim().parse().map_err(|_| invalid())?;
    if !(PRIORITY_MIN..=PRIORITY_MAX).contains(&value) {
        return Err(invalid());
    }
    Ok(value)
}

/// A reported missing item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shortage {
    pub title: String,
    pub reported_by: String,
    pub room: Room,
    pub category: Category,
    pub priority: u8,
    pub created_on: DateTime<Local>,
}

impl Shortage {
    pub fn new(
        title: impl Into<String>,
        reported_by: impl Into<String>,
        room: Room,
        category: Category,
        priority: u8,
        created_on: DateTime<Local>,
    ) -> Self {
        Self {
            title: title.into(),
            reported_by: reported_by.into(),
            room,
            category,
            priority,
            created_on,
        }
    }

    /// Identity used for deduplication
    pub fn key(&self) -> ShortageKey<'_> {
        ShortageKey::new(&self.title, self.room)
    }
}

/// Deduplication key: title (case-insensitive) plus room (exact)
#[derive(Debug, Clone, Copy)]
pub struct ShortageKey<'a> {
    pub title: &'a str,
    pub room: Room,
}

impl<'a> ShortageKey<'a> {
    pub fn new(title: &'a str, room: Room) -> Self {
        Self { title, room }
    }

    /// True if `shortage` has this identity
    pub fn matches(&self, shortage: &Shortage) -> bool {
        self.room == shortage.room && eq_ignore_case(self.title, &shortage.title)
    }
}
