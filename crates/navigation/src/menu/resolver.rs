use super::MenuNode;

/// Find the entry whose key equals `target_key`, searching the whole tree.
///
/// Pre-order depth-first: each node is tested before its children, siblings
/// in display order. Keys are unique across the tree, so the first match is
/// the only one. Absence is an ordinary `None`, not an error; callers fall
/// back to a default display label.
pub fn find_by_key<'a>(nodes: &'a [MenuNode], target_key: &str) -> Option<&'a MenuNode> {
    for node in nodes {
        if node.key == target_key {
            return Some(node);
        }
        if node.has_children() {
            if let Some(found) = find_by_key(&node.children, target_key) {
                return Some(found);
            }
        }
    }
    None
}

/// Breadcrumb label for a path, or `fallback` when no entry matches.
pub fn label_for_key<'a>(nodes: &'a [MenuNode], target_key: &str, fallback: &'a str) -> &'a str {
    find_by_key(nodes, target_key)
        .map(|node| node.label.as_str())
        .unwrap_or(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::tree_from_json;

    fn sample_tree() -> Vec<MenuNode> {
        vec![
            MenuNode::leaf("/home", "Home"),
            MenuNode::group(
                "/order",
                "Orders",
                vec![
                    MenuNode::leaf("/order/list", "Order List"),
                    MenuNode::leaf("/order/refund", "Refunds"),
                ],
            ),
        ]
    }

    #[test]
    fn test_finds_nested_leaf() {
        let tree = sample_tree();
        let node = find_by_key(&tree, "/order/refund").unwrap();
        assert_eq!(node.key, "/order/refund");
        assert_eq!(node.label, "Refunds");
    }

    #[test]
    fn test_finds_parent_with_children() {
        let tree = sample_tree();
        let node = find_by_key(&tree, "/order").unwrap();
        assert_eq!(node.key, "/order");
        assert_eq!(node.children.len(), 2);
    }

    #[test]
    fn test_missing_key_is_none() {
        let tree = sample_tree();
        assert!(find_by_key(&tree, "/missing").is_none());
    }

    #[test]
    fn test_empty_tree_is_none() {
        assert!(find_by_key(&[], "/home").is_none());
    }

    #[test]
    fn test_empty_children_same_as_no_children() {
        let mut leaf = MenuNode::leaf("/home", "Home");
        leaf.children = Vec::new();
        let explicit = vec![leaf];
        let plain = vec![MenuNode::leaf("/home", "Home")];
        assert_eq!(
            find_by_key(&explicit, "/home").map(|n| &n.key),
            find_by_key(&plain, "/home").map(|n| &n.key)
        );
        assert!(find_by_key(&explicit, "/home/anything").is_none());
    }

    #[test]
    fn test_null_sibling_does_not_break_traversal() {
        let tree = tree_from_json(r#"[null, {"key": "/a", "label": "A"}]"#).unwrap();
        let node = find_by_key(&tree, "/a").unwrap();
        assert_eq!(node.key, "/a");
    }

    #[test]
    fn test_sibling_order_wins_over_depth() {
        // First sibling is tested (and descended) before the second
        let tree = vec![
            MenuNode::group(
                "/a",
                "A",
                vec![MenuNode::leaf("/a/deep", "Deep")],
            ),
            MenuNode::leaf("/b", "B"),
        ];
        assert_eq!(find_by_key(&tree, "/a/deep").unwrap().label, "Deep");
        assert_eq!(find_by_key(&tree, "/b").unwrap().label, "B");
    }

    #[test]
    fn test_repeated_calls_do_not_disturb_tree() {
        let tree = sample_tree();
        let snapshot = tree.clone();
        let _ = find_by_key(&tree, "/order/list");
        let _ = find_by_key(&tree, "/missing");
        assert_eq!(tree, snapshot);
    }

    #[test]
    fn test_label_fallback() {
        let tree = sample_tree();
        assert_eq!(label_for_key(&tree, "/order/list", "Console"), "Order List");
        assert_eq!(label_for_key(&tree, "/missing", "Console"), "Console");
    }
}
