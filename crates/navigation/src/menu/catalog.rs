//! Static menu tree for the console.
//!
//! Built once at startup and shared read-only by every caller; the resolver
//! walks it on each navigation event.

use once_cell::sync::Lazy;

use super::MenuNode;

/// Title shown when the current path matches no menu entry
pub const CONSOLE_TITLE: &str = "Education Admin Console";

/// The console navigation tree
pub static CONSOLE_MENU: Lazy<Vec<MenuNode>> = Lazy::new(|| {
    vec![
        MenuNode::leaf("/home", "Home").with_icon("home"),
        MenuNode::leaf("/course", "Courses").with_icon("desktop"),
        MenuNode::group(
            "/order",
            "Orders",
            vec![
                MenuNode::leaf("/order/list", "Order List"),
                MenuNode::leaf("/order/refund", "Refunds"),
            ],
        )
        .with_icon("file"),
        MenuNode::group(
            "/user",
            "Users",
            vec![
                MenuNode::leaf("/user/student", "Students"),
                MenuNode::leaf("/user/teacher", "Teachers"),
            ],
        )
        .with_icon("user"),
        MenuNode::group(
            "/info",
            "Content",
            vec![
                MenuNode::leaf("/info/carousel", "Carousels"),
                MenuNode::leaf("/info/article", "Articles"),
            ],
        )
        .with_icon("image"),
        MenuNode::group(
            "/promotion",
            "Promotions",
            vec![
                MenuNode::leaf("/promotion/seckill", "Flash Sales"),
                MenuNode::leaf("/promotion/coupon", "Coupons"),
            ],
        )
        .with_icon("tag"),
    ]
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::resolver::find_by_key;

    fn collect_keys<'a>(nodes: &'a [MenuNode], out: &mut Vec<&'a str>) {
        for node in nodes {
            out.push(node.key.as_str());
            collect_keys(&node.children, out);
        }
    }

    #[test]
    fn test_keys_are_unique_and_path_like() {
        let mut keys = Vec::new();
        collect_keys(&CONSOLE_MENU, &mut keys);
        assert!(keys.iter().all(|k| k.starts_with('/')));
        let mut deduped = keys.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(keys.len(), deduped.len());
    }

    #[test]
    fn test_every_key_resolves_to_its_node() {
        let mut keys = Vec::new();
        collect_keys(&CONSOLE_MENU, &mut keys);
        for key in keys {
            let node = find_by_key(&CONSOLE_MENU, key).unwrap();
            assert_eq!(node.key, key);
        }
    }

    #[test]
    fn test_section_labels() {
        assert_eq!(
            find_by_key(&CONSOLE_MENU, "/order/refund").unwrap().label,
            "Refunds"
        );
        assert_eq!(find_by_key(&CONSOLE_MENU, "/home").unwrap().label, "Home");
        assert!(find_by_key(&CONSOLE_MENU, "/login").is_none());
    }
}
