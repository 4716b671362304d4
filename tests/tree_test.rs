//! Tests for the directory tree operations

use rstest::rstest;

use rstree::domain::{DirectoryTree, TreeError};

#[ctor::ctor]
fn init() {
    rstree::util::testing::init_test_setup();
}

fn entries(tree: &DirectoryTree) -> Vec<(usize, String)> {
    tree.list()
        .map(|(depth, name)| (depth, name.to_string()))
        .collect()
}

fn entry(depth: usize, name: &str) -> (usize, String) {
    (depth, name.to_string())
}

#[test]
fn given_nested_path_when_creating_then_every_segment_exists() {
    // Arrange
    let mut tree = DirectoryTree::new();

    // Act
    tree.create("a/b/c");

    // Assert
    assert_eq!(
        entries(&tree),
        vec![entry(1, "a"), entry(2, "b"), entry(3, "c")]
    );
}

#[test]
fn given_existing_path_when_creating_again_then_tree_unchanged() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("a/b/c");
    let before = entries(&tree);

    // Act
    tree.create("a/b/c");

    // Assert
    assert_eq!(entries(&tree), before);
}

#[test]
fn given_partially_existing_path_when_creating_then_only_suffix_added() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("a/b");

    // Act
    tree.create("a/b/c/d");

    // Assert
    assert_eq!(
        entries(&tree),
        vec![entry(1, "a"), entry(2, "b"), entry(3, "c"), entry(4, "d")]
    );
}

#[test]
fn given_unordered_creation_when_listing_then_siblings_sorted_by_name() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("b");
    tree.create("a");
    tree.create("c/z");
    tree.create("c/y");

    // Act / Assert
    assert_eq!(
        entries(&tree),
        vec![
            entry(1, "a"),
            entry(1, "b"),
            entry(1, "c"),
            entry(2, "y"),
            entry(2, "z")
        ]
    );
}

#[test]
fn given_subtree_when_moving_then_children_travel_with_it() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("x/y/w");
    tree.create("z");

    // Act
    tree.move_node("x/y", "z").unwrap();

    // Assert
    assert_eq!(
        entries(&tree),
        vec![entry(1, "x"), entry(1, "z"), entry(2, "y"), entry(3, "w")]
    );
}

#[test]
fn given_missing_source_when_moving_then_error_and_no_mutation() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("z");
    let before = entries(&tree);

    // Act
    let result = tree.move_node("missing/path", "z");

    // Assert
    assert_eq!(
        result.unwrap_err(),
        TreeError::SegmentNotFound {
            operation: "move",
            path: "missing/path".to_string(),
            segment: "missing".to_string(),
        }
    );
    assert_eq!(entries(&tree), before);
}

#[test]
fn given_missing_destination_when_moving_then_error_and_no_mutation() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("x/y");
    let before = entries(&tree);

    // Act
    let result = tree.move_node("x/y", "nowhere");

    // Assert
    assert_eq!(
        result.unwrap_err(),
        TreeError::SegmentNotFound {
            operation: "move",
            path: "nowhere".to_string(),
            segment: "nowhere".to_string(),
        }
    );
    assert_eq!(entries(&tree), before);
}

#[test]
fn given_same_named_child_at_destination_when_moving_then_it_is_replaced() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("a/n/one");
    tree.create("b/n/two");

    // Act
    tree.move_node("a/n", "b").unwrap();

    // Assert: b/n is now the moved node; the old b/n/two subtree is gone
    assert_eq!(
        entries(&tree),
        vec![entry(1, "a"), entry(1, "b"), entry(2, "n"), entry(3, "one")]
    );
}

#[rstest]
#[case("a", "a")]
#[case("a", "a/b")]
#[case("a", "a/b/c")]
fn given_destination_inside_source_when_moving_then_rejected(
    #[case] from: &str,
    #[case] to: &str,
) {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("a/b/c");
    let before = entries(&tree);

    // Act
    let result = tree.move_node(from, to);

    // Assert
    assert_eq!(
        result.unwrap_err(),
        TreeError::DestinationInsideSource {
            from: from.to_string(),
            to: to.to_string(),
        }
    );
    assert_eq!(entries(&tree), before);
}

#[test]
fn given_populated_tree_when_deleting_empty_path_then_everything_resets() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("fruits/apples");
    tree.create("vegetables");

    // Act
    tree.delete("").unwrap();

    // Assert
    assert!(entries(&tree).is_empty());

    // The reset tree behaves like a fresh one
    tree.create("again");
    assert_eq!(entries(&tree), vec![entry(1, "again")]);
}

#[test]
fn given_nested_entry_when_deleting_then_only_that_subtree_removed() {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("fruits/apples/fuji");
    tree.create("fruits/oranges");

    // Act
    tree.delete("fruits/apples").unwrap();

    // Assert
    assert_eq!(entries(&tree), vec![entry(1, "fruits"), entry(2, "oranges")]);
}

#[rstest]
#[case("missing/path", "missing")]
#[case("fruits/missing/deep", "missing")]
fn given_unresolvable_path_when_deleting_then_error_names_first_missing_segment(
    #[case] path: &str,
    #[case] segment: &str,
) {
    // Arrange
    let mut tree = DirectoryTree::new();
    tree.create("fruits/apples");
    let before = entries(&tree);

    // Act
    let err = tree.delete(path).unwrap_err();

    // Assert
    assert_eq!(
        err,
        TreeError::SegmentNotFound {
            operation: "delete",
            path: path.to_string(),
            segment: segment.to_string(),
        }
    );
    assert_eq!(entries(&tree), before);
}

#[test]
fn given_delete_error_when_displayed_then_matches_transcript_format() {
    let mut tree = DirectoryTree::new();
    let err = tree.delete("fruits/apples").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Cannot delete fruits/apples - fruits does not exist"
    );
}

#[test]
fn given_full_scenario_when_run_then_listings_match() {
    let mut tree = DirectoryTree::new();

    tree.create("fruits");
    tree.create("vegetables");
    tree.create("grains");
    tree.create("fruits/apples");
    tree.create("fruits/apples/fuji");
    assert_eq!(
        entries(&tree),
        vec![
            entry(1, "fruits"),
            entry(2, "apples"),
            entry(3, "fuji"),
            entry(1, "grains"),
            entry(1, "vegetables"),
        ]
    );

    tree.create("grains/squash");
    tree.move_node("grains/squash", "vegetables").unwrap();
    tree.create("foods");
    tree.move_node("grains", "foods").unwrap();
    tree.move_node("fruits", "foods").unwrap();
    tree.move_node("vegetables", "foods").unwrap();
    assert_eq!(
        entries(&tree),
        vec![
            entry(1, "foods"),
            entry(2, "fruits"),
            entry(3, "apples"),
            entry(4, "fuji"),
            entry(2, "grains"),
            entry(2, "vegetables"),
            entry(3, "squash"),
        ]
    );

    // fruits moved under foods, so the root-relative path no longer resolves
    let err = tree.delete("fruits/apples").unwrap_err();
    assert_eq!(
        err,
        TreeError::SegmentNotFound {
            operation: "delete",
            path: "fruits/apples".to_string(),
            segment: "fruits".to_string(),
        }
    );
    tree.delete("foods/fruits/apples").unwrap();
    assert_eq!(
        entries(&tree),
        vec![
            entry(1, "foods"),
            entry(2, "fruits"),
            entry(2, "grains"),
            entry(2, "vegetables"),
            entry(3, "squash"),
        ]
    );
}
