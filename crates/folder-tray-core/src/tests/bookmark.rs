use crate::{Bookmark, BookmarkList, display_name};

/// WHAT: Display name is the final path segment
/// WHY: Menu labels must match the folder the user picked
#[test]
fn given_nested_path_when_creating_bookmark_then_name_is_final_segment() {
    // Given: An absolute folder path
    let path = "/home/u/proj";

    // When: Creating a bookmark from it
    let bookmark = Bookmark::from_path(path);

    // Then: Name is the last segment and path is kept verbatim
    assert_eq!(bookmark.name, "proj");
    assert_eq!(bookmark.path, "/home/u/proj");
}

/// WHAT: Trailing separators do not produce an empty name
/// WHY: Folder pickers on some platforms return paths ending in a slash
#[test]
fn given_trailing_slash_when_deriving_name_then_last_component_used() {
    // Given/When: Deriving a name from a path with a trailing slash
    let name = display_name("/home/u/docs/");

    // Then: The directory name is used
    assert_eq!(name, "docs");
}

/// WHAT: A root path is named after itself
/// WHY: A root has no final segment and an empty label is unusable
#[test]
fn given_root_path_when_deriving_name_then_whole_path_used() {
    // Given/When: Deriving a name for the filesystem root
    let name = display_name("/");

    // Then: The path text is the label
    assert_eq!(name, "/");
}

/// WHAT: Two bookmarks for the same path get distinct ids
/// WHY: Duplicates are allowed and must be individually removable
#[test]
fn given_same_path_twice_when_creating_bookmarks_then_ids_differ() {
    // Given/When: Two bookmarks for one folder
    let first = Bookmark::from_path("/srv/app");
    let second = Bookmark::from_path("/srv/app");

    // Then: Paths match but identities do not
    assert_eq!(first.path, second.path);
    assert_ne!(first.id, second.id);
}

/// WHAT: Removing by index keeps the order of the remaining entries
/// WHY: Display order is insertion order and must survive removals
#[test]
#[allow(clippy::unwrap_used)]
fn given_three_bookmarks_when_removing_middle_then_others_keep_order() {
    // Given: A list of three bookmarks
    let mut list: BookmarkList = ["/a", "/b", "/c"].into_iter().map(Bookmark::from_path).collect();

    // When: Removing index 1
    let removed = list.remove_at(1).unwrap();

    // Then: Exactly that element is gone and the rest keep their order
    assert_eq!(removed.path, "/b");
    assert_eq!(list.len(), 2);
    let paths: Vec<&str> = list.iter().map(|b| b.path.as_str()).collect();
    assert_eq!(paths, vec!["/a", "/c"]);
}

/// WHAT: Out-of-range index removal is a no-op
/// WHY: A stale index must never remove some other entry
#[test]
fn given_short_list_when_removing_out_of_range_then_nothing_removed() {
    // Given: A single-entry list
    let mut list: BookmarkList = vec![Bookmark::from_path("/a")].into();

    // When: Removing an index past the end
    let removed = list.remove_at(5);

    // Then: Nothing changes
    assert!(removed.is_none());
    assert_eq!(list.len(), 1);
}

/// WHAT: Removing by id removes only that duplicate
/// WHY: Stable ids make removal independent of position
#[test]
#[allow(clippy::unwrap_used)]
fn given_duplicate_paths_when_removing_by_id_then_only_that_entry_removed() {
    // Given: Two bookmarks for the same folder
    let first = Bookmark::from_path("/dup");
    let second = Bookmark::from_path("/dup");
    let mut list: BookmarkList = vec![first.clone(), second.clone()].into();

    // When: Removing the second by id
    let removed = list.remove_by_id(second.id).unwrap();

    // Then: The first remains
    assert_eq!(removed.id, second.id);
    assert_eq!(list.as_slice(), &[first]);
}
