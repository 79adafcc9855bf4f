//! Item Edit State Machine
//!
//! Local view/edit mode of a single item row. Transitions never touch the
//! shared collection themselves; they report what should happen to it as a
//! [`CollectionChange`] and leave applying it to the caller.

use crate::models::Item;
use crate::todos;

/// Keys the edit field reacts to
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditKey {
    Enter,
    Escape,
    Other,
}

impl From<&str> for EditKey {
    fn from(key: &str) -> Self {
        match key {
            "Enter" => EditKey::Enter,
            "Escape" => EditKey::Escape,
            _ => EditKey::Other,
        }
    }
}

/// User intents routed through the state machine
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EditAction {
    /// Double-click on the label
    Begin,
    /// New text typed into the edit field
    Draft(String),
    /// Form submit or blur of the edit field
    Commit,
    /// Key pressed while the edit field has focus
    Key(EditKey),
}

/// What the owner of the collection should do after a transition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CollectionChange {
    #[default]
    Keep,
    Rename(String),
    Remove,
}

impl CollectionChange {
    /// Build the replacement collection, or `None` when nothing changes
    pub fn apply(&self, items: &[Item], id: u32) -> Option<Vec<Item>> {
        match self {
            CollectionChange::Keep => None,
            CollectionChange::Rename(title) => Some(todos::rename_item(items, id, title)),
            CollectionChange::Remove => Some(todos::remove_item(items, id)),
        }
    }
}

/// Outcome of a single transition
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transition {
    pub change: CollectionChange,
    /// Set when `Editing` was just entered; the edit field should take focus
    /// once it is mounted.
    pub focus_edit_field: bool,
}

impl Transition {
    fn change(change: CollectionChange) -> Self {
        Self {
            change,
            focus_edit_field: false,
        }
    }
}

/// Mode of one item row
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { draft: String },
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Viewing => None,
            EditState::Editing { draft } => Some(draft),
        }
    }

    /// Advance the machine. `title` is the item's committed title.
    ///
    /// Anything other than `Begin` is ignored while viewing, so a blur that
    /// trails an Enter or Escape cannot commit a second time.
    pub fn apply(&mut self, title: &str, action: EditAction) -> Transition {
        if !self.is_editing() {
            if action != EditAction::Begin {
                return Transition::default();
            }
            *self = EditState::Editing {
                draft: title.to_string(),
            };
            return Transition {
                change: CollectionChange::Keep,
                focus_edit_field: true,
            };
        }

        let EditState::Editing { draft } = &mut *self else {
            return Transition::default();
        };
        match action {
            EditAction::Begin | EditAction::Key(EditKey::Other) => Transition::default(),
            EditAction::Draft(text) => {
                *draft = text;
                Transition::default()
            }
            EditAction::Commit => {
                let change = if draft.is_empty() {
                    CollectionChange::Remove
                } else if draft.as_str() != title {
                    CollectionChange::Rename(std::mem::take(draft))
                } else {
                    CollectionChange::Keep
                };
                *self = EditState::Viewing;
                Transition::change(change)
            }
            // Enter renames but never deletes, even with an empty draft.
            EditAction::Key(EditKey::Enter) => {
                let change = if draft.as_str() != title {
                    CollectionChange::Rename(std::mem::take(draft))
                } else {
                    CollectionChange::Keep
                };
                *self = EditState::Viewing;
                Transition::change(change)
            }
            EditAction::Key(EditKey::Escape) => {
                *self = EditState::Viewing;
                Transition::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TITLE: &str = "Buy milk";

    fn editing_with(draft: &str) -> EditState {
        let mut state = EditState::default();
        state.apply(TITLE, EditAction::Begin);
        state.apply(TITLE, EditAction::Draft(draft.to_string()));
        state
    }

    #[test]
    fn test_starts_viewing() {
        let state = EditState::default();
        assert!(!state.is_editing());
        assert_eq!(state.draft(), None);
    }

    #[test]
    fn test_begin_seeds_draft_and_requests_focus() {
        let mut state = EditState::default();
        let t = state.apply(TITLE, EditAction::Begin);

        assert_eq!(state.draft(), Some(TITLE));
        assert!(t.focus_edit_field);
        assert_eq!(t.change, CollectionChange::Keep);
    }

    #[test]
    fn test_begin_while_editing_keeps_draft() {
        let mut state = editing_with("half typed");
        let t = state.apply(TITLE, EditAction::Begin);

        assert_eq!(state.draft(), Some("half typed"));
        assert!(!t.focus_edit_field);
    }

    #[test]
    fn test_commit_changed_title_renames() {
        let mut state = editing_with("Buy oat milk");
        let t = state.apply(TITLE, EditAction::Commit);

        assert_eq!(t.change, CollectionChange::Rename("Buy oat milk".into()));
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_commit_unchanged_title_keeps() {
        let mut state = editing_with(TITLE);
        let t = state.apply(TITLE, EditAction::Commit);

        assert_eq!(t.change, CollectionChange::Keep);
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_commit_empty_draft_removes() {
        let mut state = editing_with("");
        let t = state.apply(TITLE, EditAction::Commit);

        assert_eq!(t.change, CollectionChange::Remove);
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_commit_empty_draft_removes_even_when_title_empty() {
        let mut state = EditState::default();
        state.apply("", EditAction::Begin);
        let t = state.apply("", EditAction::Commit);

        assert_eq!(t.change, CollectionChange::Remove);
    }

    #[test]
    fn test_enter_renames() {
        let mut state = editing_with("Buy oat milk");
        let t = state.apply(TITLE, EditAction::Key(EditKey::Enter));

        assert_eq!(t.change, CollectionChange::Rename("Buy oat milk".into()));
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_enter_with_empty_draft_does_not_remove() {
        let mut state = editing_with("");
        let t = state.apply(TITLE, EditAction::Key(EditKey::Enter));

        assert_eq!(t.change, CollectionChange::Rename(String::new()));
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_escape_discards_draft() {
        let mut state = editing_with("something else");
        let t = state.apply(TITLE, EditAction::Key(EditKey::Escape));

        assert_eq!(t.change, CollectionChange::Keep);
        assert_eq!(state, EditState::Viewing);

        // Next edit starts from the committed title again.
        state.apply(TITLE, EditAction::Begin);
        assert_eq!(state.draft(), Some(TITLE));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut state = editing_with("abc");
        let t = state.apply(TITLE, EditAction::Key(EditKey::from("a")));

        assert_eq!(t, Transition::default());
        assert_eq!(state.draft(), Some("abc"));
    }

    #[test]
    fn test_blur_after_enter_is_ignored() {
        let mut state = editing_with("Buy oat milk");
        state.apply(TITLE, EditAction::Key(EditKey::Enter));
        let t = state.apply(TITLE, EditAction::Commit);

        assert_eq!(t.change, CollectionChange::Keep);
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_draft_ignored_while_viewing() {
        let mut state = EditState::default();
        state.apply(TITLE, EditAction::Draft("x".into()));
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_key_from_str() {
        assert_eq!(EditKey::from("Enter"), EditKey::Enter);
        assert_eq!(EditKey::from("Escape"), EditKey::Escape);
        assert_eq!(EditKey::from("Tab"), EditKey::Other);
    }

    #[test]
    fn test_empty_blur_scenario() {
        let items = vec![Item::new(1, TITLE)];
        let mut state = EditState::default();

        state.apply(TITLE, EditAction::Begin);
        assert_eq!(state.draft(), Some(TITLE));
        state.apply(TITLE, EditAction::Draft(String::new()));
        let t = state.apply(TITLE, EditAction::Commit);

        assert_eq!(t.change.apply(&items, 1), Some(vec![]));
        assert!(!state.is_editing());
    }

    #[test]
    fn test_enter_rename_scenario() {
        let items = vec![Item::new(1, TITLE)];
        let mut state = EditState::default();

        state.apply(TITLE, EditAction::Begin);
        state.apply(TITLE, EditAction::Draft("Buy oat milk".into()));
        let t = state.apply(TITLE, EditAction::Key(EditKey::Enter));

        assert_eq!(t.change.apply(&items, 1), Some(vec![Item::new(1, "Buy oat milk")]));
        assert!(!state.is_editing());
    }

    #[test]
    fn test_keep_applies_to_nothing() {
        let items = vec![Item::new(1, TITLE)];
        assert_eq!(CollectionChange::Keep.apply(&items, 1), None);
    }
}
