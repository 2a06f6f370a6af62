// Item module
// Schedulable item consumed by the layout engine

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::date::rounded_minutes_between;

/// Display metadata carried through the layout pass untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemMetadata {
    pub title: Option<String>,
    pub color: Option<String>,
    pub category: Option<String>,
}

/// A schedulable entity with a start and end instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Stable identifier, unique among the items of one layout pass
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Containing item, if any. Only root items are laid out.
    pub parent_id: Option<String>,
    #[serde(default)]
    pub metadata: ItemMetadata,
    /// Nested children, used for id lookup only
    #[serde(default)]
    pub sub_items: Vec<Item>,
}

impl Item {
    /// Create a root item.
    ///
    /// # Examples
    /// ```
    /// use timeline_layout::models::item::Item;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let item = Item::new("standup", start, end).unwrap();
    /// assert_eq!(item.duration_minutes(), 60);
    /// ```
    pub fn new(
        id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, String> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err("Item id cannot be empty".to_string());
        }

        if end <= start {
            return Err("Item end time must be after start time".to_string());
        }

        Ok(Self::unchecked(id, start, end))
    }

    /// Create an item without validating its interval.
    ///
    /// The layout pass tolerates inverted intervals, so callers holding data
    /// from an external store can hand it over as-is.
    pub fn unchecked(id: impl Into<String>, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            parent_id: None,
            metadata: ItemMetadata::default(),
            sub_items: Vec::new(),
        }
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.metadata.color = Some(color.into());
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.metadata.category = Some(category.into());
        self
    }

    pub fn with_sub_items(mut self, sub_items: Vec<Item>) -> Self {
        self.sub_items = sub_items;
        self
    }

    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Check that the interval is non-empty
    pub fn has_valid_interval(&self) -> bool {
        self.start < self.end
    }

    /// Duration in whole minutes, rounded. Zero for inverted intervals.
    pub fn duration_minutes(&self) -> i64 {
        rounded_minutes_between(self.start, self.end)
    }
}

/// Depth-first search for an item by id, descending into sub-items.
pub fn find_item_by_id<'a>(items: &'a [Item], id: &str) -> Option<&'a Item> {
    for item in items {
        if item.id == id {
            return Some(item);
        }
        if let Some(found) = find_item_by_id(&item.sub_items, id) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn nine_am() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 4)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_new_rejects_inverted_interval() {
        let start = nine_am();
        assert!(Item::new("a", start, start).is_err());
        assert!(Item::new("a", start, start - Duration::minutes(5)).is_err());
    }

    #[test]
    fn test_new_rejects_blank_id() {
        let start = nine_am();
        assert!(Item::new("  ", start, start + Duration::hours(1)).is_err());
    }

    #[test]
    fn test_unchecked_accepts_inverted_interval() {
        let start = nine_am();
        let item = Item::unchecked("a", start, start - Duration::hours(1));
        assert!(!item.has_valid_interval());
        assert_eq!(item.duration_minutes(), 0);
    }

    #[test]
    fn test_metadata_builders() {
        let start = nine_am();
        let item = Item::new("a", start, start + Duration::hours(1))
            .unwrap()
            .with_title("Planning")
            .with_color("#3366ff")
            .with_category("work");
        assert_eq!(
            item.metadata,
            ItemMetadata {
                title: Some("Planning".to_string()),
                color: Some("#3366ff".to_string()),
                category: Some("work".to_string()),
            }
        );
    }

    #[test]
    fn test_with_parent_marks_child() {
        let start = nine_am();
        let item = Item::new("child", start, start + Duration::hours(1))
            .unwrap()
            .with_parent("root");
        assert!(!item.is_root());
    }

    #[test]
    fn test_find_item_by_id_descends_into_sub_items() {
        let start = nine_am();
        let end = start + Duration::hours(1);
        let leaf = Item::new("leaf", start, end).unwrap().with_parent("mid");
        let mid = Item::new("mid", start, end)
            .unwrap()
            .with_parent("root")
            .with_sub_items(vec![leaf]);
        let root = Item::new("root", start, end).unwrap().with_sub_items(vec![mid]);
        let items = vec![root];

        assert_eq!(find_item_by_id(&items, "leaf").map(|i| i.id.as_str()), Some("leaf"));
        assert_eq!(find_item_by_id(&items, "root").map(|i| i.id.as_str()), Some("root"));
        assert!(find_item_by_id(&items, "missing").is_none());
    }
}
