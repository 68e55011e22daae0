//! Query filter pipeline
//!
//! Each active filter becomes one predicate; a record is selected when all
//! predicates accept it. The visibility rule is always the first predicate.

use shortage_api::{Caller, Category, Room, Shortage, ShortageQuery};
use shortage_util::contains_ignore_case;
use tracing::warn;

type Predicate<'a> = Box<dyn Fn(&Shortage) -> bool + 'a>;

/// Compiled form of a caller plus a [`ShortageQuery`]
pub struct ShortageFilter<'a> {
    predicates: Vec<Predicate<'a>>,
}

impl<'a> ShortageFilter<'a> {
    pub fn new(caller: &'a Caller, query: &'a ShortageQuery) -> Self {
        let mut predicates: Vec<Predicate<'a>> = Vec::new();

        if !caller.is_admin {
            predicates.push(Box::new(move |s: &Shortage| caller.owns(s)));
        }

        if let Some(text) = query.title_contains.as_deref()
            && !text.is_empty()
        {
            predicates.push(Box::new(move |s: &Shortage| contains_ignore_case(&s.title, text)));
        }

        if let Some(category) = lenient_parse::<Category>("category", query.category.as_deref()) {
            predicates.push(Box::new(move |s: &Shortage| s.category == category));
        }

        if let Some(room) = lenient_parse::<Room>("room", query.room.as_deref()) {
            predicates.push(Box::new(move |s: &Shortage| s.room == room));
        }

        if let Some(start) = query.created_on_start {
            predicates.push(Box::new(move |s: &Shortage| s.created_on >= start));
        }

        if let Some(end) = query.created_on_end {
            predicates.push(Box::new(move |s: &Shortage| s.created_on <= end));
        }

        Self { predicates }
    }

    /// Number of active predicates, visibility included
    pub fn len(&self) -> usize {
        self.predicates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.predicates.is_empty()
    }

    pub fn matches(&self, shortage: &Shortage) -> bool {
        self.predicates.iter().all(|p| p(shortage))
    }
}

/// Parse optional filter text. Blank or unrecognized text disables the filter.
fn lenient_parse<T: std::str::FromStr>(field: &str, text: Option<&str>) -> Option<T> {
    let text = text?.trim();
    if text.is_empty() {
        return None;
    }
    match text.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(field, value = text, "Ignoring unrecognized filter value");
            None
        }
    }
}
