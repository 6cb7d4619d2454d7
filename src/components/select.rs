use indexmap::IndexMap;
use thiserror::Error;

use crate::{
    SharedString,
    overlay::{DismissReason, OverlayHost, OverlayRoot},
    state::{ChangeOutcome, ControlHost, SingleRule},
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SelectItemError {
    #[error("An item with this name doesn't exist.")]
    InvalidName,
    #[error("This item is disabled.")]
    ItemDisabled,
}

/// A registered option carrying an arbitrary payload.
pub struct SelectEntry<V> {
    pub value: V,
    pub disabled: bool,
}

/// A dropdown single-select: a trigger displaying the selection and a
/// non-modal listbox overlay with a keyboard highlight.
///
/// The highlight is presentation state and moves freely over enabled items;
/// the selection only changes on confirmation or an explicit item click.
pub struct Select<V> {
    id: SharedString,
    items: IndexMap<SharedString, SelectEntry<V>>,
    selection: ControlHost<SingleRule>,
    highlighted: Option<SharedString>,
    menu: OverlayHost,
}

impl<V> Select<V> {
    pub fn new(id: impl Into<SharedString>, root: &OverlayRoot) -> Self {
        Self::resolve(id, root, None)
    }

    /// `selected` picks controlled mode for the selection, exactly as for
    /// any other control host.
    pub fn resolve(
        id: impl Into<SharedString>,
        root: &OverlayRoot,
        selected: Option<Option<SharedString>>,
    ) -> Self {
        Self {
            id: id.into(),
            items: IndexMap::new(),
            selection: ControlHost::resolve(SingleRule::default(), None, selected),
            highlighted: None,
            menu: OverlayHost::new(root, false, None),
        }
    }

    pub fn on_change(mut self, on_change: impl Fn(&Option<SharedString>) + 'static) -> Self {
        self.selection.set_on_change(on_change);
        self
    }

    pub fn item(mut self, name: impl Into<SharedString>, value: V) -> Self {
        self.push_item(name, value);
        self
    }

    pub fn disabled_item(mut self, name: impl Into<SharedString>, value: V) -> Self {
        let name = name.into();
        self.selection.rule_mut().declare(name.clone());
        self.items.insert(
            name,
            SelectEntry {
                value,
                disabled: true,
            },
        );
        self
    }

    pub fn push_item(&mut self, name: impl Into<SharedString>, value: V) {
        let name = name.into();
        self.selection.rule_mut().declare(name.clone());
        self.items.insert(
            name,
            SelectEntry {
                value,
                disabled: false,
            },
        );
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SelectEntry<V>> {
        self.items.get(name)
    }

    pub fn selected(&self) -> Option<&SharedString> {
        self.selection.value().as_ref()
    }

    pub fn selected_value(&self) -> Option<&V> {
        let name = self.selection.value().as_ref()?;
        self.items.get(name.as_str()).map(|entry| &entry.value)
    }

    pub fn is_controlled(&self) -> bool {
        self.selection.is_controlled()
    }

    pub fn highlighted(&self) -> Option<&SharedString> {
        self.highlighted.as_ref()
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Opens the listbox and seeds the highlight from the selection.
    pub fn open_menu(&mut self, trigger: Option<&str>) -> ChangeOutcome {
        let outcome = self.menu.request_open(trigger);
        if outcome.is_applied() {
            self.sync_highlight_to_selection();
        }
        outcome
    }

    pub fn close_menu(&mut self, reason: DismissReason) -> ChangeOutcome {
        self.menu.dismiss(reason)
    }

    pub fn handle_escape(&mut self) -> ChangeOutcome {
        self.menu.handle_escape()
    }

    pub fn handle_outside_interaction(&mut self) -> ChangeOutcome {
        self.menu.handle_outside_interaction()
    }

    pub fn take_restored_focus(&mut self) -> Option<SharedString> {
        self.menu.take_restored_focus()
    }

    /// Programmatic selection. Unlike [`Select::request_select`] this reports
    /// why a name was rejected.
    pub fn select_item(&mut self, name: impl Into<SharedString>) -> Result<(), SelectItemError> {
        let name = name.into();

        let entry = self
            .items
            .get(name.as_str())
            .ok_or(SelectItemError::InvalidName)?;
        if entry.disabled {
            return Err(SelectItemError::ItemDisabled);
        }

        self.selection.request_change(name);
        Ok(())
    }

    /// Interaction-driven selection: rejections are silent no-ops, and a
    /// valid pick closes the menu even when it re-picks the current
    /// selection.
    pub fn request_select(&mut self, name: impl Into<SharedString>) -> ChangeOutcome {
        let name = name.into();

        let Some(entry) = self.items.get(name.as_str()) else {
            return ChangeOutcome::Ignored;
        };
        if entry.disabled {
            return ChangeOutcome::Ignored;
        }

        let outcome = self.selection.request_change(name);
        self.menu.dismiss(DismissReason::CloseRequested);
        outcome
    }

    pub fn remove_selection(&mut self) -> ChangeOutcome {
        self.selection.request_replace(None)
    }

    /// Controlled consumers push the new selection here.
    pub fn set_selected(&mut self, selected: Option<SharedString>) {
        self.selection.sync_external(selected);
    }

    pub fn move_highlight_up(&mut self) {
        self.move_highlight(|index, len| if index == 0 { len - 1 } else { index - 1 }, |len| len - 1);
    }

    pub fn move_highlight_down(&mut self) {
        self.move_highlight(|index, len| if index + 1 >= len { 0 } else { index + 1 }, |_| 0);
    }

    fn move_highlight(
        &mut self,
        step: impl Fn(usize, usize) -> usize,
        seed: impl Fn(usize) -> usize,
    ) {
        let len = self.items.len();
        if len == 0 || self.items.values().all(|entry| entry.disabled) {
            return;
        }

        let mut index = match &self.highlighted {
            None => seed(len),
            Some(name) => match self.items.get_index_of(name.as_str()) {
                Some(index) => step(index, len),
                None => 0,
            },
        };

        // Disabled items are skipped; the all-disabled case is handled above.
        while self.items[index].disabled {
            index = step(index, len);
        }

        if let Some((name, _)) = self.items.get_index(index) {
            self.highlighted = Some(name.clone());
        }
    }

    /// Enter while the listbox is open.
    pub fn confirm_highlight(&mut self) -> ChangeOutcome {
        let Some(name) = self.highlighted.clone() else {
            return ChangeOutcome::Ignored;
        };
        self.request_select(name)
    }

    /// Re-seeds the highlight from the selection, clearing it when the
    /// selected item no longer exists.
    pub fn sync_highlight_to_selection(&mut self) {
        self.highlighted = self
            .selection
            .value()
            .clone()
            .filter(|name| self.items.contains_key(name.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select() -> Select<u32> {
        Select::new("fruit", &OverlayRoot::new())
            .item("apple", 1)
            .item("banana", 2)
            .item("cherry", 3)
    }

    #[test]
    fn test_select_item_by_name() {
        let mut select = select();

        select.select_item("banana").unwrap();
        assert_eq!(select.selected().unwrap(), "banana");
        assert_eq!(select.selected_value(), Some(&2));
    }

    #[test]
    fn test_unknown_name_is_an_error() {
        let mut select = select();
        assert_eq!(
            select.select_item("durian"),
            Err(SelectItemError::InvalidName)
        );
        assert_eq!(select.selected(), None);
    }

    #[test]
    fn test_disabled_item_is_not_selectable() {
        let mut select = Select::new("fruit", &OverlayRoot::new())
            .item("apple", 1)
            .disabled_item("banana", 2);

        assert_eq!(
            select.select_item("banana"),
            Err(SelectItemError::ItemDisabled)
        );
        assert!(select.request_select("banana").is_ignored());
    }

    #[test]
    fn test_request_select_closes_the_menu() {
        let mut select = select();
        select.open_menu(None);

        assert!(select.request_select("apple").is_applied());
        assert!(!select.is_menu_open(), "Picking an item should close the listbox");
        assert_eq!(select.selected().unwrap(), "apple");
    }

    #[test]
    fn test_highlight_wraps_both_ways() {
        let mut select = select();

        select.move_highlight_down();
        assert_eq!(select.highlighted().unwrap(), "apple", "Down from nothing starts at the top");

        select.move_highlight_up();
        assert_eq!(select.highlighted().unwrap(), "cherry", "Up from the top wraps to the bottom");

        select.move_highlight_down();
        assert_eq!(select.highlighted().unwrap(), "apple", "Down from the bottom wraps to the top");
    }

    #[test]
    fn test_highlight_up_from_nothing_starts_at_bottom() {
        let mut select = select();
        select.move_highlight_up();
        assert_eq!(select.highlighted().unwrap(), "cherry");
    }

    #[test]
    fn test_highlight_skips_disabled_items() {
        let mut select = Select::new("fruit", &OverlayRoot::new())
            .item("apple", 1)
            .disabled_item("banana", 2)
            .item("cherry", 3);

        select.move_highlight_down();
        select.move_highlight_down();
        assert_eq!(
            select.highlighted().unwrap(),
            "cherry",
            "The highlight should step over disabled items"
        );
    }

    #[test]
    fn test_highlight_noop_on_empty_or_all_disabled() {
        let mut empty: Select<u32> = Select::new("fruit", &OverlayRoot::new());
        empty.move_highlight_down();
        assert_eq!(empty.highlighted(), None);

        let mut frozen = Select::new("fruit", &OverlayRoot::new()).disabled_item("apple", 1);
        frozen.move_highlight_down();
        assert_eq!(frozen.highlighted(), None);
    }

    #[test]
    fn test_confirm_highlight_selects_and_closes() {
        let mut select = select();
        select.open_menu(None);
        select.move_highlight_down();
        select.move_highlight_down();

        assert!(select.confirm_highlight().is_applied());
        assert_eq!(select.selected().unwrap(), "banana");
        assert!(!select.is_menu_open());
    }

    #[test]
    fn test_opening_seeds_highlight_from_selection() {
        let mut select = select();
        select.select_item("cherry").unwrap();

        select.open_menu(None);
        assert_eq!(select.highlighted().unwrap(), "cherry");
    }

    #[test]
    fn test_remove_selection_clears_and_mirrors() {
        use std::cell::Cell;
        use std::rc::Rc;

        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();

        let mut select = select().on_change(move |_| counter.set(counter.get() + 1));
        select.select_item("apple").unwrap();

        assert!(select.remove_selection().is_applied());
        assert_eq!(select.selected(), None);
        assert_eq!(calls.get(), 2, "Both the pick and the clear should mirror");

        assert!(select.remove_selection().is_ignored(), "Clearing twice is a no-op");
    }

    #[test]
    fn test_controlled_select_forwards_without_mutating() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let forwarded = Rc::new(RefCell::new(Vec::new()));
        let sink = forwarded.clone();

        let mut select = Select::resolve("fruit", &OverlayRoot::new(), Some(None))
            .item("apple", 1)
            .item("banana", 2)
            .on_change(move |selected: &Option<SharedString>| {
                sink.borrow_mut().push(selected.clone())
            });

        select.open_menu(None);
        assert!(select.request_select("banana").is_forwarded());
        assert_eq!(select.selected(), None, "A controlled select is inert without the consumer");
        assert!(!select.is_menu_open(), "The menu still closes on a forwarded pick");
        assert_eq!(forwarded.borrow()[0].as_deref(), Some("banana"));

        select.set_selected(Some("banana".into()));
        assert_eq!(select.selected().unwrap(), "banana");
        assert_eq!(select.selected_value(), Some(&2));
    }

    #[test]
    fn test_escape_closes_without_selecting() {
        let mut select = select();
        select.open_menu(None);
        select.move_highlight_down();

        select.handle_escape();
        assert!(!select.is_menu_open());
        assert_eq!(select.selected(), None, "Escape must not commit the highlight");
    }
}
