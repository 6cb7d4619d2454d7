use indexmap::IndexSet;

use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, TransitionRule},
};

/// Whether one or several accordion items may be expanded at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionMode {
    #[default]
    Single,
    Multiple,
}

/// Expansion over a declared item set. The value is an expanded set in both
/// modes; single mode holds at most one entry, replacing on a new item and
/// clearing when the expanded item is requested again.
#[derive(Debug, Clone, Default)]
pub struct AccordionRule {
    mode: AccordionMode,
    items: IndexSet<SharedString>,
}

impl AccordionRule {
    pub fn new<I, S>(mode: AccordionMode, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            mode,
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    pub fn declare(&mut self, item: impl Into<SharedString>) {
        self.items.insert(item.into());
    }

    pub fn items(&self) -> &IndexSet<SharedString> {
        &self.items
    }
}

impl TransitionRule for AccordionRule {
    type Value = IndexSet<SharedString>;
    type Candidate = SharedString;

    fn next(
        &self,
        current: &IndexSet<SharedString>,
        candidate: SharedString,
    ) -> Option<IndexSet<SharedString>> {
        if !self.items.contains(candidate.as_str()) {
            return None;
        }

        let mut next = current.clone();
        match self.mode {
            AccordionMode::Single => {
                if !next.shift_remove(candidate.as_str()) {
                    next.clear();
                    next.insert(candidate);
                }
            }
            AccordionMode::Multiple => {
                if !next.shift_remove(candidate.as_str()) {
                    next.insert(candidate);
                }
            }
        }

        Some(next)
    }
}

/// A vertically stacked set of expandable items.
pub struct Accordion {
    id: SharedString,
    host: ControlHost<AccordionRule>,
    disabled_items: IndexSet<SharedString>,
}

impl Accordion {
    pub fn new(id: impl Into<SharedString>, mode: AccordionMode) -> Self {
        Self::resolve(id, mode, IndexSet::new(), None)
    }

    pub fn resolve(
        id: impl Into<SharedString>,
        mode: AccordionMode,
        default_expanded: IndexSet<SharedString>,
        expanded: Option<IndexSet<SharedString>>,
    ) -> Self {
        Self {
            id: id.into(),
            host: ControlHost::resolve(
                AccordionRule::new(mode, Vec::<SharedString>::new()),
                default_expanded,
                expanded,
            ),
            disabled_items: IndexSet::new(),
        }
    }

    pub fn item(mut self, item: impl Into<SharedString>) -> Self {
        self.host.rule_mut().declare(item);
        self
    }

    pub fn items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        for item in items {
            self.host.rule_mut().declare(item);
        }
        self
    }

    pub fn default_expanded<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        self.host
            .set_initial(items.into_iter().map(Into::into).collect());
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.host.set_disabled(disabled);
        self
    }

    pub fn disable_item(mut self, item: impl Into<SharedString>) -> Self {
        self.disabled_items.insert(item.into());
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(&IndexSet<SharedString>) + 'static) -> Self {
        self.host.set_on_change(on_change);
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn expanded(&self) -> &IndexSet<SharedString> {
        self.host.value()
    }

    pub fn is_expanded(&self, item: &str) -> bool {
        self.host.value().contains(item)
    }

    pub fn is_item_disabled(&self, item: &str) -> bool {
        self.host.is_disabled() || self.disabled_items.contains(item)
    }

    pub fn toggle(&mut self, item: impl Into<SharedString>) -> ChangeOutcome {
        let item = item.into();
        if self.disabled_items.contains(item.as_str()) {
            return ChangeOutcome::Ignored;
        }
        self.host.request_change(item)
    }

    /// Controlled consumers push the new expanded set here.
    pub fn set_expanded(&mut self, expanded: IndexSet<SharedString>) {
        self.host.sync_external(expanded);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single() -> Accordion {
        Accordion::new("faq", AccordionMode::Single).items(["item-1", "item-2", "item-3"])
    }

    #[test]
    fn test_single_mode_collapses_on_retrigger() {
        let mut accordion = single();

        accordion.toggle("item-1");
        assert!(accordion.is_expanded("item-1"));

        accordion.toggle("item-1");
        assert!(
            accordion.expanded().is_empty(),
            "Triggering the expanded item should collapse it"
        );
    }

    #[test]
    fn test_single_mode_replaces() {
        let mut accordion = single();

        accordion.toggle("item-1");
        accordion.toggle("item-2");

        assert!(accordion.is_expanded("item-2"));
        assert!(!accordion.is_expanded("item-1"), "Single mode holds at most one item");
        assert_eq!(accordion.expanded().len(), 1);
    }

    #[test]
    fn test_multiple_mode_is_independent() {
        let mut accordion =
            Accordion::new("faq", AccordionMode::Multiple).items(["item-1", "item-2"]);

        accordion.toggle("item-1");
        accordion.toggle("item-2");
        assert!(accordion.is_expanded("item-1"));
        assert!(accordion.is_expanded("item-2"));

        accordion.toggle("item-1");
        assert!(!accordion.is_expanded("item-1"));
        assert!(accordion.is_expanded("item-2"));
    }

    #[test]
    fn test_undeclared_item_is_ignored() {
        let mut accordion = single();
        assert!(accordion.toggle("item-9").is_ignored());
    }

    #[test]
    fn test_disabled_item_cannot_toggle() {
        let mut accordion = single().disable_item("item-2").default_expanded(["item-1"]);

        assert!(accordion.toggle("item-2").is_ignored());
        assert!(accordion.is_expanded("item-1"), "The expanded item should be untouched");
    }

    #[test]
    fn test_controlled_accordion_forwards_without_mutating() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let forwarded = Rc::new(RefCell::new(Vec::new()));
        let sink = forwarded.clone();

        let mut accordion =
            Accordion::resolve("faq", AccordionMode::Single, IndexSet::new(), Some(IndexSet::new()))
                .items(["item-1", "item-2"])
                .on_change(move |expanded| sink.borrow_mut().push(expanded.clone()));

        assert!(accordion.toggle("item-1").is_forwarded());
        assert!(
            accordion.expanded().is_empty(),
            "A controlled accordion is inert without the consumer"
        );
        assert!(forwarded.borrow()[0].contains("item-1"));

        accordion.set_expanded(forwarded.borrow()[0].clone());
        assert!(accordion.is_expanded("item-1"));

        assert!(accordion.toggle("item-1").is_forwarded());
        assert!(
            forwarded.borrow()[1].is_empty(),
            "Toggle-off should forward the cleared set"
        );
    }

    #[test]
    fn test_default_expanded() {
        let accordion = Accordion::new("faq", AccordionMode::Multiple)
            .items(["item-1", "item-2"])
            .default_expanded(["item-1", "item-2"]);

        assert_eq!(accordion.expanded().len(), 2);
    }
}
