use indexmap::IndexSet;

use crate::SharedString;

/// How a value of a given shape responds to an interaction candidate.
///
/// `next` returns `None` when the interaction is a no-op: an undeclared
/// candidate, or a candidate that would not change the value. Rules are pure;
/// ownership and callback semantics live in [`super::ControlHost`].
pub trait TransitionRule {
    type Value: Clone + PartialEq;
    type Candidate;

    fn next(&self, current: &Self::Value, candidate: Self::Candidate) -> Option<Self::Value>;
}

/// Flips a boolean unconditionally. Used by Switch, Collapsible and Toggle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToggleRule;

impl TransitionRule for ToggleRule {
    type Value = bool;
    type Candidate = ();

    fn next(&self, current: &bool, _candidate: ()) -> Option<bool> {
        Some(!current)
    }
}

/// Sets a boolean to an explicit desired state. Used by overlay open state,
/// where "open" and "close" requests must be idempotent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SetRule;

impl TransitionRule for SetRule {
    type Value = bool;
    type Candidate = bool;

    fn next(&self, current: &bool, candidate: bool) -> Option<bool> {
        (*current != candidate).then_some(candidate)
    }
}

/// Single selection over a declared option set. Undeclared candidates and
/// re-selections of the current value are no-ops. Used by Tabs, RadioGroup
/// and Select.
#[derive(Debug, Clone, Default)]
pub struct SingleRule {
    options: IndexSet<SharedString>,
}

impl SingleRule {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn declare(&mut self, option: impl Into<SharedString>) {
        self.options.insert(option.into());
    }

    pub fn options(&self) -> &IndexSet<SharedString> {
        &self.options
    }
}

impl TransitionRule for SingleRule {
    type Value = Option<SharedString>;
    type Candidate = SharedString;

    fn next(
        &self,
        current: &Option<SharedString>,
        candidate: SharedString,
    ) -> Option<Option<SharedString>> {
        if !self.options.contains(candidate.as_str()) {
            return None;
        }

        if current.as_ref() == Some(&candidate) {
            return None;
        }

        Some(Some(candidate))
    }
}

/// Single selection where re-activating the active value clears it back to
/// unset. Used by single-mode ToggleGroup and Menubar.
#[derive(Debug, Clone, Default)]
pub struct SingleToggleOffRule {
    options: IndexSet<SharedString>,
}

impl SingleToggleOffRule {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn declare(&mut self, option: impl Into<SharedString>) {
        self.options.insert(option.into());
    }

    pub fn options(&self) -> &IndexSet<SharedString> {
        &self.options
    }
}

impl TransitionRule for SingleToggleOffRule {
    type Value = Option<SharedString>;
    type Candidate = SharedString;

    fn next(
        &self,
        current: &Option<SharedString>,
        candidate: SharedString,
    ) -> Option<Option<SharedString>> {
        if !self.options.contains(candidate.as_str()) {
            return None;
        }

        if current.as_ref() == Some(&candidate) {
            return Some(None);
        }

        Some(Some(candidate))
    }
}

/// Multi selection with symmetric-difference semantics: a present candidate
/// is removed, an absent one is added. Used by multiple-mode ToggleGroup and
/// DropdownMenu checkbox items.
#[derive(Debug, Clone, Default)]
pub struct MultiRule {
    options: IndexSet<SharedString>,
}

impl MultiRule {
    pub fn new<I, S>(options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SharedString>,
    {
        Self {
            options: options.into_iter().map(Into::into).collect(),
        }
    }

    pub fn declare(&mut self, option: impl Into<SharedString>) {
        self.options.insert(option.into());
    }

    pub fn options(&self) -> &IndexSet<SharedString> {
        &self.options
    }
}

impl TransitionRule for MultiRule {
    type Value = IndexSet<SharedString>;
    type Candidate = SharedString;

    fn next(
        &self,
        current: &IndexSet<SharedString>,
        candidate: SharedString,
    ) -> Option<IndexSet<SharedString>> {
        if !self.options.contains(candidate.as_str()) {
            return None;
        }

        let mut next = current.clone();
        if !next.shift_remove(candidate.as_str()) {
            next.insert(candidate);
        }

        Some(next)
    }
}
