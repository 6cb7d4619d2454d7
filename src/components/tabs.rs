use indexmap::IndexSet;

use crate::{
    SharedString,
    state::{ChangeOutcome, ControlHost, SingleRule},
};

/// A tab strip. Exactly one tab is active once a selection exists; only the
/// active tab's panel is considered visible.
pub struct Tabs {
    id: SharedString,
    host: ControlHost<SingleRule>,
    disabled_tabs: IndexSet<SharedString>,
}

impl Tabs {
    pub fn new(id: impl Into<SharedString>) -> Self {
        Self::resolve(id, None, None)
    }

    pub fn resolve(
        id: impl Into<SharedString>,
        default_active: Option<SharedString>,
        active: Option<Option<SharedString>>,
    ) -> Self {
        Self {
            id: id.into(),
            host: ControlHost::resolve(SingleRule::default(), default_active, active),
            disabled_tabs: IndexSet::new(),
        }
    }

    pub fn tab(mut self, tab: impl Into<SharedString>) -> Self {
        self.host.rule_mut().declare(tab);
        self
    }

    pub fn tabs<I, S>(mut self, tabs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        for tab in tabs {
            self.host.rule_mut().declare(tab);
        }
        self
    }

    pub fn default_active(mut self, tab: impl Into<SharedString>) -> Self {
        self.host.set_initial(Some(tab.into()));
        self
    }

    pub fn disable_tab(mut self, tab: impl Into<SharedString>) -> Self {
        self.disabled_tabs.insert(tab.into());
        self
    }

    pub fn on_change(mut self, on_change: impl Fn(&Option<SharedString>) + 'static) -> Self {
        self.host.set_on_change(on_change);
        self
    }

    pub fn id(&self) -> &SharedString {
        &self.id
    }

    pub fn active(&self) -> Option<&SharedString> {
        self.host.value().as_ref()
    }

    pub fn is_active(&self, tab: &str) -> bool {
        self.host.value().as_deref() == Some(tab)
    }

    pub fn is_tab_disabled(&self, tab: &str) -> bool {
        self.disabled_tabs.contains(tab)
    }

    /// Activating a disabled or undeclared tab is a no-op; so is activating
    /// the already-active one.
    pub fn activate(&mut self, tab: impl Into<SharedString>) -> ChangeOutcome {
        let tab = tab.into();
        if self.disabled_tabs.contains(tab.as_str()) {
            return ChangeOutcome::Ignored;
        }
        self.host.request_change(tab)
    }

    pub fn set_active(&mut self, tab: Option<SharedString>) {
        self.host.sync_external(tab);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> Tabs {
        Tabs::new("settings").tabs(["general", "appearance", "advanced"])
    }

    #[test]
    fn test_activation_is_exclusive() {
        let mut tabs = tabs();

        tabs.activate("general");
        assert!(tabs.is_active("general"));

        tabs.activate("advanced");
        assert!(tabs.is_active("advanced"));
        assert!(!tabs.is_active("general"), "Only one tab may be active");
    }

    #[test]
    fn test_active_tab_cannot_be_cleared_by_reactivation() {
        let mut tabs = tabs().default_active("general");
        assert!(tabs.activate("general").is_ignored());
        assert!(tabs.is_active("general"));
    }

    #[test]
    fn test_disabled_tab_is_not_activatable() {
        let mut tabs = tabs().disable_tab("advanced").default_active("general");

        assert!(tabs.activate("advanced").is_ignored());
        assert!(tabs.is_active("general"), "The previous tab should stay active");
    }

    #[test]
    fn test_undeclared_tab_is_ignored() {
        let mut tabs = tabs();
        assert!(tabs.activate("secret").is_ignored());
        assert_eq!(tabs.active(), None);
    }

    #[test]
    fn test_controlled_tabs_forward() {
        let mut tabs = Tabs::resolve("settings", None, Some(None)).tabs(["general", "advanced"]);

        assert!(tabs.activate("general").is_forwarded());
        assert_eq!(tabs.active(), None);

        tabs.set_active(Some("general".into()));
        assert!(tabs.is_active("general"));
    }
}
