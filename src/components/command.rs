use std::rc::Rc;

use indexmap::IndexMap;

use crate::{
    SharedString,
    overlay::{DismissReason, OverlayHost, OverlayRoot},
    state::ChangeOutcome,
};

pub type OnCommandFn = Rc<dyn Fn(&SharedString)>;

struct CommandEntry {
    label: SharedString,
    keywords: Vec<SharedString>,
}

/// A modal command launcher: a text query filters a flat command list and a
/// keyboard highlight runs over the filtered view.
///
/// Matching is a case-insensitive substring test against the label and any
/// extra keywords. Editing the query re-seeds the highlight onto the first
/// match, so Enter always runs something visible.
pub struct CommandPalette {
    id: SharedString,
    overlay: OverlayHost,
    commands: IndexMap<SharedString, CommandEntry>,
    query: String,
    highlighted: Option<SharedString>,
    on_command: Option<OnCommandFn>,
}

impl CommandPalette {
    pub fn new(id: impl Into<SharedString>, root: &OverlayRoot) -> Self {
        Self::resolve(id, root, None)
    }

    /// `open` picks controlled mode, exactly as for any other control host.
    pub fn resolve(
        id: impl Into<SharedString>,
        root: &OverlayRoot,
        open: Option<bool>,
    ) -> Self {
        Self {
            id: id.into(),
            overlay: OverlayHost::new(root, true, open),
            commands: IndexMap::new(),
            query: String::new(),
            highlighted: None,
            on_command: None,
        }
    }

    pub fn on_open_change(mut self, on_change: impl Fn(&bool) + 'static) -> Self {
        self.overlay.set_on_open_change(on_change);
        self
    }

    pub fn command(mut self, name: impl Into<SharedString>, label: impl Into<SharedString>) -> Self {
        self.commands.insert(
            name.into(),
            CommandEntry {
                label: label.into(),
                keywords: Vec::new(),
            },
        );
        self
    }

    pub fn keyword(mut self, name: &str, keyword: impl Into<SharedString>) -> Self {
        if let Some(entry) = self.commands.get_mut(name) {
            entry.keywords.push(keyword.into());
        }
        self
    }

    pub fn on_command(mut self, on_command: impl Fn(&SharedString) + 'static) -> Self {
        self.on_command = Some(Rc::new(on_command));
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn highlighted(&self) -> Option<&SharedString> {
        self.highlighted.as_ref()
    }

    /// Opens with a fresh query and the highlight on the first command.
    pub fn open(&mut self, trigger: Option<&str>) -> ChangeOutcome {
        let outcome = self.overlay.request_open(trigger);
        if outcome.is_applied() {
            self.reset_view();
        }
        outcome
    }

    /// Controlled consumers push the new open state here. The query resets
    /// once the consumer actually opens the palette.
    pub fn set_open(&mut self, open: bool) {
        let was_open = self.overlay.is_open();
        self.overlay.sync_open(open);
        if !was_open && self.overlay.is_open() {
            self.reset_view();
        }
    }

    fn reset_view(&mut self) {
        self.query.clear();
        self.highlighted = self.filtered().first().cloned();
    }

    pub fn handle_escape(&mut self) -> ChangeOutcome {
        self.overlay.handle_escape()
    }

    pub fn handle_outside_interaction(&mut self) -> ChangeOutcome {
        self.overlay.handle_outside_interaction()
    }

    pub fn take_restored_focus(&mut self) -> Option<SharedString> {
        self.overlay.take_restored_focus()
    }

    /// The command names currently visible, in declaration order.
    pub fn filtered(&self) -> Vec<SharedString> {
        self.commands
            .iter()
            .filter(|(_, entry)| self.matches(entry))
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.highlighted = self.filtered().first().cloned();
    }

    pub fn move_highlight_down(&mut self) {
        self.move_highlight(|index, len| (index + 1) % len);
    }

    pub fn move_highlight_up(&mut self) {
        self.move_highlight(|index, len| if index == 0 { len - 1 } else { index - 1 });
    }

    /// Enter: runs the highlighted command and closes the palette.
    pub fn confirm(&mut self) -> ChangeOutcome {
        if !self.overlay.is_open() {
            return ChangeOutcome::Ignored;
        }

        let Some(name) = self.highlighted.clone() else {
            return ChangeOutcome::Ignored;
        };

        if let Some(on_command) = &self.on_command {
            (on_command)(&name);
        }
        self.overlay.dismiss(DismissReason::CloseRequested);
        ChangeOutcome::Applied
    }

    fn matches(&self, entry: &CommandEntry) -> bool {
        if self.query.is_empty() {
            return true;
        }

        let query = self.query.to_lowercase();
        entry.label.to_lowercase().contains(&query)
            || entry
                .keywords
                .iter()
                .any(|keyword| keyword.to_lowercase().contains(&query))
    }

    fn move_highlight(&mut self, step: fn(usize, usize) -> usize) {
        let filtered = self.filtered();
        if filtered.is_empty() {
            return;
        }

        let index = self
            .highlighted
            .as_ref()
            .and_then(|name| filtered.iter().position(|entry| entry == name));

        self.highlighted = Some(match index {
            Some(index) => filtered[step(index, filtered.len())].clone(),
            None => filtered[0].clone(),
        });
    }
}
