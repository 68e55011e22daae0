//! Caller identity and query filters

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use shortage_util::eq_ignore_case;

use crate::{Category, Room, Shortage};

/// Who is making a request.
///
/// Passed explicitly on every query and delete; the registry keeps no
/// session state of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    pub user: String,
    pub is_admin: bool,
}

impl Caller {
    pub fn new(user: impl Into<String>, is_admin: bool) -> Self {
        Self {
            user: user.into(),
            is_admin,
        }
    }

    pub fn user(user: impl Into<String>) -> Self {
        Self::new(user, false)
    }

    pub fn admin(user: impl Into<String>) -> Self {
        Self::new(user, true)
    }

    /// True if this caller reported `shortage`
    pub fn owns(&self, shortage: &Shortage) -> bool {
        eq_ignore_case(&self.user, &shortage.reported_by)
    }

    /// True if this caller may see or delete `shortage`
    pub fn can_access(&self, shortage: &Shortage) -> bool {
        self.is_admin || self.owns(shortage)
    }
}

/// Optional filters for listing shortages.
///
/// Category and room are kept as the text the caller supplied. Text that
/// names no known value disables that filter instead of failing the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortageQuery {
    /// Case-insensitive substring of the title
    pub title_contains: Option<String>,
    pub category: Option<String>,
    pub room: Option<String>,
    /// Inclusive lower bound on `created_on`
    pub created_on_start: Option<DateTime<Local>>,
    /// Inclusive upper bound on `created_on`
    pub created_on_end: Option<DateTime<Local>>,
}

impl ShortageQuery {
    /// A query with no filters
    pub fn all() -> Self {
        Self::default()
    }

    pub fn title_contains(mut self, text: impl Into<String>) -> Self {
        self.title_contains = Some(text.into());
        self
    }

    pub fn category(mut self, text: impl Into<String>) -> Self {
        self.category = Some(text.into());
        self
    }

    pub fn room(mut self, text: impl Into<String>) -> Self {
        self.room = Some(text.into());
        self
    }

    pub fn with_category(self, category: Category) -> Self {
        self.category(category.as_str())
    }

    pub fn with_room(self, room: Room) -> Self {
        self.room(room.as_str())
    }

    pub fn created_between(
        mut self,
        start: Option<DateTime<Local>>,
        end: Option<DateTime<Local>>,
    ) -> Self {
        self.created_on_start = start;
        self.created_on_end = end;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn shortage_by(user: &str) -> Shortage {
        Shortage::new(
            "Coffee",
            user,
            Room::Kitchen,
            Category::Food,
            4,
            Local.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn ownership_ignores_case() {
        let caller = Caller::user("user1");
        assert!(caller.owns(&shortage_by("User1")));
        assert!(!caller.owns(&shortage_by("User2")));
    }

    #[test]
    fn admin_can_access_anything() {
        let admin = Caller::admin("admin");
        assert!(!admin.owns(&shortage_by("User2")));
        assert!(admin.can_access(&shortage_by("User2")));
    }

    #[test]
    fn builder_sets_filters() {
        let query = ShortageQuery::all()
            .title_contains("speak")
            .with_room(Room::MeetingRoom)
            .category("nonsense");

        assert_eq!(query.title_contains.as_deref(), Some("speak"));
        assert_eq!(query.room.as_deref(), Some("MeetingRoom"));
        assert_eq!(query.category.as_deref(), Some("nonsense"));
        assert!(query.created_on_start.is_none());
    }
}
