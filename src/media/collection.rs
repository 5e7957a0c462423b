/// Per-account media collection
use super::MediaItem;
use crate::error::{MediaError, MediaResult};
use std::collections::HashMap;

/// Ordered media items with a uid index.
///
/// Items stay in insertion order; `index` maps each uid to its position in
/// `items` and is kept in step on every mutation.
#[derive(Debug, Clone, Default)]
pub struct MediaCollection {
    items: Vec<MediaItem>,
    index: HashMap<i64, usize>,
}

impl MediaCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new item. Fails with `Conflict` if the uid is already taken,
    /// leaving the collection untouched.
    pub fn add(&mut self, item: MediaItem) -> MediaResult<MediaItem> {
        if self.index.contains_key(&item.uid) {
            return Err(MediaError::Conflict(format!(
                "Media item with uid {} already exists; use update instead",
                item.uid
            )));
        }

        self.index.insert(item.uid, self.items.len());
        self.items.push(item.clone());
        Ok(item)
    }

    /// Replace every field of an existing item except its uid.
    ///
    /// Never creates: an unknown uid is `NotFound`.
    pub fn update(&mut self, uid: i64, patch: MediaItem) -> MediaResult<MediaItem> {
        let position = *self.index.get(&uid).ok_or_else(|| {
            MediaError::NotFound(format!(
                "Media item with uid {} not found; use add instead",
                uid
            ))
        })?;

        let item = &mut self.items[position];
        *item = MediaItem { uid, ..patch };
        Ok(item.clone())
    }

    /// Remove the item with the given uid.
    pub fn remove(&mut self, uid: i64) -> MediaResult<()> {
        let position = self
            .index
            .remove(&uid)
            .ok_or_else(|| MediaError::NotFound(format!("Media item with uid {} not found", uid)))?;

        self.items.remove(position);
        for (offset, item) in self.items[position..].iter().enumerate() {
            self.index.insert(item.uid, position + offset);
        }

        Ok(())
    }

    pub fn get(&self, uid: i64) -> Option<&MediaItem> {
        self.index.get(&uid).map(|&position| &self.items[position])
    }

    /// All items in stored order
    pub fn list(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(uid: i64, title: &str) -> MediaItem {
        MediaItem {
            uid,
            title: title.to_string(),
            medium: "book".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_add_then_list_preserves_insertion_order() {
        let mut media = MediaCollection::new();
        media.add(item(5, "Dune")).unwrap();
        media.add(item(1, "Neuromancer")).unwrap();
        media.add(item(3, "Hyperion")).unwrap();

        let uids: Vec<i64> = media.list().iter().map(|m| m.uid).collect();
        assert_eq!(uids, vec![5, 1, 3]);
    }

    #[test]
    fn test_add_duplicate_uid_conflicts() {
        let mut media = MediaCollection::new();
        media.add(item(1, "Dune")).unwrap();

        let result = media.add(item(1, "Dune2"));
        assert!(matches!(result, Err(MediaError::Conflict(_))));
        assert_eq!(media.len(), 1);
        assert_eq!(media.get(1).unwrap().title, "Dune");
    }

    #[test]
    fn test_update_unknown_uid_is_not_found() {
        let mut media = MediaCollection::new();
        media.add(item(1, "Dune")).unwrap();

        let result = media.update(2, item(2, "Other"));
        assert!(matches!(result, Err(MediaError::NotFound(_))));
        assert_eq!(media.len(), 1);
        assert!(media.get(2).is_none());
    }

    #[test]
    fn test_update_replaces_fields_but_keeps_uid() {
        let mut media = MediaCollection::new();
        media.add(item(1, "Dune")).unwrap();

        let patch = MediaItem {
            uid: 99,
            title: "Dune2".to_string(),
            rating: 4,
            notes: "reread".to_string(),
            ..Default::default()
        };
        let updated = media.update(1, patch).unwrap();

        assert_eq!(updated.uid, 1);
        assert_eq!(updated.title, "Dune2");
        assert_eq!(updated.rating, 4);
        assert_eq!(updated.medium, "");
        assert_eq!(media.len(), 1);
        assert!(media.get(99).is_none());
        assert_eq!(media.get(1).unwrap(), &updated);
    }

    #[test]
    fn test_remove_twice_is_not_found() {
        let mut media = MediaCollection::new();
        media.add(item(1, "Dune")).unwrap();

        media.remove(1).unwrap();
        assert!(media.is_empty());
        assert!(matches!(media.remove(1), Err(MediaError::NotFound(_))));
    }

    #[test]
    fn test_remove_reindexes_following_items() {
        let mut media = MediaCollection::new();
        for uid in 1..=4 {
            media.add(item(uid, &format!("title {}", uid))).unwrap();
        }

        media.remove(2).unwrap();

        assert_eq!(media.get(3).unwrap().title, "title 3");
        assert_eq!(media.get(4).unwrap().title, "title 4");
        media.update(4, item(4, "four")).unwrap();
        let titles: Vec<&str> = media.list().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["title 1", "title 3", "four"]);

        // uid 2 is free again
        media.add(item(2, "back")).unwrap();
        assert_eq!(media.list().last().unwrap().uid, 2);
    }

    #[test]
    fn test_dune_lifecycle() {
        let mut media = MediaCollection::new();

        media.add(item(1, "Dune")).unwrap();
        assert!(matches!(
            media.add(item(1, "Dune2")),
            Err(MediaError::Conflict(_))
        ));
        assert_eq!(media.len(), 1);
        assert_eq!(media.list()[0].title, "Dune");

        media.update(1, item(1, "Dune2")).unwrap();
        assert_eq!(media.len(), 1);
        assert_eq!(media.list()[0].title, "Dune2");

        media.remove(1).unwrap();
        assert!(media.is_empty());
        assert!(matches!(media.remove(1), Err(MediaError::NotFound(_))));
    }
}
