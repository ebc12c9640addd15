use crate::Bookmark;

use uuid::Uuid;

/// Ordered bookmark sequence. Insertion order is display order and storage order.
///
/// Duplicate paths are allowed; entries are told apart by [`Bookmark::id`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookmarkList {
    items: Vec<Bookmark>,
}

impl BookmarkList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a bookmark at the end.
    pub fn push(&mut self, bookmark: Bookmark) {
        self.items.push(bookmark);
    }

    /// Remove the bookmark at `index`, keeping the order of the rest.
    pub fn remove_at(&mut self, index: usize) -> Option<Bookmark> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove the bookmark with the given id.
    pub fn remove_by_id(&mut self, id: Uuid) -> Option<Bookmark> {
        let index = self.position(id)?;
        self.remove_at(index)
    }

    /// Index of the bookmark with the given id.
    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.items.iter().position(|b| b.id == id)
    }

    /// Bookmark with the given id.
    pub fn find(&self, id: Uuid) -> Option<&Bookmark> {
        self.items.iter().find(|b| b.id == id)
    }

    /// Bookmark at `index`.
    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.items.get(index)
    }

    /// Iterate in display order.
    pub fn iter(&self) -> std::slice::Iter<'_, Bookmark> {
        self.items.iter()
    }

    /// Number of bookmarks.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no bookmarks are stored.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the bookmarks as a slice.
    pub fn as_slice(&self) -> &[Bookmark] {
        &self.items
    }
}

impl From<Vec<Bookmark>> for BookmarkList {
    fn from(items: Vec<Bookmark>) -> Self {
        Self { items }
    }
}

impl FromIterator<Bookmark> for BookmarkList {
    fn from_iter<I: IntoIterator<Item = Bookmark>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for BookmarkList {
    type Item = Bookmark;
    type IntoIter = std::vec::IntoIter<Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a BookmarkList {
    type Item = &'a Bookmark;
    type IntoIter = std::slice::Iter<'a, Bookmark>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
