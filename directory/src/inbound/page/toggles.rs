//! Comment visibility toggles keyed by `data-post-id`.

use tracing::debug;

use super::{HIDDEN_CLASS, HIDE_COMMENTS, Lookup, POST_ID_KEY, SHOW_COMMENTS};
use crate::dom::{Document, Event, NodeId, Selector};
use crate::domain::ZeroIdPolicy;

/// Section and button touched by one comment toggle.
///
/// Either side is `None` when the page has no element for the post id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentToggle {
    /// Comment section whose `hide` class was toggled.
    pub section: Option<NodeId>,
    /// Button whose label was flipped.
    pub button: Option<NodeId>,
}

fn by_post_id(tag: &str, post_id: u64) -> Selector {
    Selector::tag(tag).with_data(POST_ID_KEY, post_id.to_string())
}

/// Toggle the `hide` class of the post's comment section.
pub fn toggle_comment_section(
    document: &mut Document,
    post_id: Option<u64>,
    policy: ZeroIdPolicy,
) -> Lookup<NodeId> {
    let Some(post_id) = policy.admit(post_id) else {
        return Lookup::Skipped;
    };
    let Some(section) = document.query_selector(&by_post_id("section", post_id)) else {
        return Lookup::NotFound;
    };
    document.toggle_class(section, HIDDEN_CLASS);
    Lookup::Found(section)
}

/// Flip the post's toggle button between "Show Comments" and "Hide Comments".
pub fn toggle_comment_button(
    document: &mut Document,
    post_id: Option<u64>,
    policy: ZeroIdPolicy,
) -> Lookup<NodeId> {
    let Some(post_id) = policy.admit(post_id) else {
        return Lookup::Skipped;
    };
    let Some(button) = document.query_selector(&by_post_id("button", post_id)) else {
        return Lookup::NotFound;
    };
    let label = if document.text_content(button) == SHOW_COMMENTS {
        HIDE_COMMENTS
    } else {
        SHOW_COMMENTS
    };
    document.set_text_content(button, label);
    Lookup::Found(button)
}

/// Click handler body: toggle both the section and the button of a post.
///
/// `None` when the post id is not admitted.
pub fn toggle_comments(
    document: &mut Document,
    event: Option<&Event>,
    post_id: Option<u64>,
    policy: ZeroIdPolicy,
) -> Option<CommentToggle> {
    let post_id = policy.admit(post_id)?;
    debug!(post_id, node = ?event.map(Event::target), "toggling comments");
    let section = toggle_comment_section(document, Some(post_id), policy).found();
    let button = toggle_comment_button(document, Some(post_id), policy).found();
    Some(CommentToggle { section, button })
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::dom::EventKind;

    struct PostControls {
        document: Document,
        section: NodeId,
        button: NodeId,
    }

    #[fixture]
    fn controls() -> PostControls {
        let mut document = Document::page_skeleton();
        let main = document
            .query_selector(&Selector::tag("main"))
            .expect("skeleton has a main region");
        let button = document.create_element("button");
        document.set_text_content(button, SHOW_COMMENTS);
        document.set_data(button, POST_ID_KEY, "4");
        let section = document.create_element("section");
        document.set_data(section, POST_ID_KEY, "4");
        document.set_class_name(section, "comments hide");
        document.append_child(main, button);
        document.append_child(main, section);
        PostControls {
            document,
            section,
            button,
        }
    }

    #[rstest]
    fn double_toggle_restores_the_hidden_section(mut controls: PostControls) {
        let policy = ZeroIdPolicy::default();

        let first = toggle_comment_section(&mut controls.document, Some(4), policy);
        assert_eq!(first, Lookup::Found(controls.section));
        assert!(!controls.document.has_class(controls.section, HIDDEN_CLASS));

        toggle_comment_section(&mut controls.document, Some(4), policy);
        assert_eq!(controls.document.class_name(controls.section), "comments hide");
    }

    #[rstest]
    fn double_toggle_restores_the_show_label(mut controls: PostControls) {
        let policy = ZeroIdPolicy::default();

        toggle_comment_button(&mut controls.document, Some(4), policy);
        assert_eq!(controls.document.text_content(controls.button), HIDE_COMMENTS);

        toggle_comment_button(&mut controls.document, Some(4), policy);
        assert_eq!(controls.document.text_content(controls.button), SHOW_COMMENTS);
    }

    #[rstest]
    #[case::absent(None)]
    #[case::zero(Some(0))]
    fn falsy_post_ids_skip_both_toggles(mut controls: PostControls, #[case] post_id: Option<u64>) {
        let policy = ZeroIdPolicy::TreatAsAbsent;

        assert!(toggle_comment_section(&mut controls.document, post_id, policy).is_skipped());
        assert!(toggle_comment_button(&mut controls.document, post_id, policy).is_skipped());
        assert_eq!(toggle_comments(&mut controls.document, None, post_id, policy), None);
        assert!(controls.document.has_class(controls.section, HIDDEN_CLASS));
    }

    #[rstest]
    fn unknown_post_ids_are_not_found(mut controls: PostControls) {
        let policy = ZeroIdPolicy::default();

        assert_eq!(
            toggle_comment_section(&mut controls.document, Some(9), policy),
            Lookup::NotFound
        );
        assert_eq!(
            toggle_comment_button(&mut controls.document, Some(9), policy),
            Lookup::NotFound
        );
        assert_eq!(
            toggle_comments(&mut controls.document, None, Some(9), policy),
            Some(CommentToggle {
                section: None,
                button: None,
            })
        );
    }

    #[rstest]
    fn combined_toggle_returns_the_pair(mut controls: PostControls) {
        let event = Event::new(EventKind::Click, controls.button);

        let toggled = toggle_comments(
            &mut controls.document,
            Some(&event),
            Some(4),
            ZeroIdPolicy::default(),
        );

        assert_eq!(
            toggled,
            Some(CommentToggle {
                section: Some(controls.section),
                button: Some(controls.button),
            })
        );
        assert_eq!(controls.document.text_content(controls.button), HIDE_COMMENTS);
    }

    #[test]
    fn detached_controls_are_not_toggled() {
        let mut document = Document::page_skeleton();
        let section = document.create_element("section");
        document.set_data(section, POST_ID_KEY, "4");

        assert_eq!(
            toggle_comment_section(&mut document, Some(4), ZeroIdPolicy::default()),
            Lookup::NotFound
        );
    }
}
