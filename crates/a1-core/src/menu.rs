use crate::models::MenuItem;

/// Sort a menu tree by `position`, recursively.
///
/// Each level is sorted on its own; items without a position sort as `0`.
/// The sort is stable, so equal positions keep their CMS order.
pub fn sort_menu(items: &mut [MenuItem]) {
    items.sort_by_key(|item| item.position.unwrap_or(0));
    for item in items.iter_mut() {
        sort_menu(&mut item.children);
    }
}

/// Owned variant of [`sort_menu`].
pub fn sorted_menu(mut items: Vec<MenuItem>) -> Vec<MenuItem> {
    sort_menu(&mut items);
    items
}
