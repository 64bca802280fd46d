//! Select-menu options built from the user list.

use super::ElementBuilder;
use super::Lookup;
use crate::dom::{Document, NodeId};
use crate::domain::User;

/// Build one detached `option` per user, in input order.
///
/// Each option's `value` is the user id and its label is the user name.
/// Duplicates are kept and nothing is sorted. `None` when `users` is absent.
pub fn select_options(document: &mut Document, users: Option<&[User]>) -> Option<Vec<NodeId>> {
    let users = users?;
    let options = users
        .iter()
        .map(|user| {
            let option = ElementBuilder::new("option")
                .text(&user.name)
                .build(document);
            document.set_attribute(option, "value", user.id.to_string());
            option
        })
        .collect();
    Some(options)
}

/// Append one option per user to the select menu.
///
/// Returns [`Lookup::Skipped`] when `users` is absent and
/// [`Lookup::NotFound`] when the page has no select menu.
pub fn populate_select_menu(
    document: &mut Document,
    select_menu: Option<NodeId>,
    users: Option<&[User]>,
) -> Lookup<NodeId> {
    let Some(users) = users else {
        return Lookup::Skipped;
    };
    let Some(select_menu) = select_menu else {
        return Lookup::NotFound;
    };
    for option in select_options(document, Some(users)).unwrap_or_default() {
        document.append_child(select_menu, option);
    }
    Lookup::Found(select_menu)
}
