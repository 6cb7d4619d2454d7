use std::rc::Rc;

use super::TransitionRule;

/// What a [`ControlHost::request_change`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOutcome {
    /// The host is uncontrolled and mutated its internal value.
    Applied,
    /// The host is controlled; the computed value was forwarded to the
    /// consumer's callback and internal state was left untouched.
    Forwarded,
    /// The interaction was a no-op (disabled host, undeclared candidate, or
    /// a candidate that would not change the value). No callback fired.
    Ignored,
}

impl ChangeOutcome {
    pub fn is_applied(self) -> bool {
        matches!(self, ChangeOutcome::Applied)
    }

    pub fn is_forwarded(self) -> bool {
        matches!(self, ChangeOutcome::Forwarded)
    }

    pub fn is_ignored(self) -> bool {
        matches!(self, ChangeOutcome::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Controlled,
    Uncontrolled,
}

pub type ChangeCallback<V> = Rc<dyn Fn(&V)>;

/// Owns or mirrors a component value, per the controlled/uncontrolled
/// contract.
///
/// The mode is latched at construction and cannot change for the lifetime of
/// the host: a host is controlled iff an external value was supplied. A
/// controlled host never mutates its own value in response to interactions;
/// it computes the candidate next value and forwards it to the consumer, who
/// may push it back through [`ControlHost::sync_external`]. An uncontrolled
/// host mutates its value and mirrors every successful change to the
/// callback so consumers can observe without taking over control.
pub struct ControlHost<R: TransitionRule> {
    rule: R,
    mode: Mode,
    value: R::Value,
    disabled: bool,
    on_change: Option<ChangeCallback<R::Value>>,
}

impl<R: TransitionRule> ControlHost<R> {
    /// Resolves the host's mode from whether an external value was supplied.
    pub fn resolve(rule: R, initial: R::Value, external: Option<R::Value>) -> Self {
        match external {
            Some(value) => Self::controlled(rule, value),
            None => Self::uncontrolled(rule, initial),
        }
    }

    pub fn uncontrolled(rule: R, initial: R::Value) -> Self {
        Self {
            rule,
            mode: Mode::Uncontrolled,
            value: initial,
            disabled: false,
            on_change: None,
        }
    }

    pub fn controlled(rule: R, external: R::Value) -> Self {
        Self {
            rule,
            mode: Mode::Controlled,
            value: external,
            disabled: false,
            on_change: None,
        }
    }

    pub fn is_controlled(&self) -> bool {
        self.mode == Mode::Controlled
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// The displayed value.
    pub fn value(&self) -> &R::Value {
        &self.value
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn rule_mut(&mut self) -> &mut R {
        &mut self.rule
    }

    pub fn set_on_change(&mut self, on_change: impl Fn(&R::Value) + 'static) {
        self.on_change = Some(Rc::new(on_change));
    }

    /// The state-machine transition entry point, invoked by a part on a
    /// qualifying interaction.
    pub fn request_change(&mut self, candidate: R::Candidate) -> ChangeOutcome {
        if self.disabled {
            return ChangeOutcome::Ignored;
        }

        let Some(next) = self.rule.next(&self.value, candidate) else {
            return ChangeOutcome::Ignored;
        };

        if next == self.value {
            return ChangeOutcome::Ignored;
        }

        match self.mode {
            Mode::Controlled => {
                if let Some(on_change) = &self.on_change {
                    (on_change)(&next);
                }
                ChangeOutcome::Forwarded
            }
            Mode::Uncontrolled => {
                self.value = next;
                if let Some(on_change) = &self.on_change {
                    (on_change)(&self.value);
                }
                ChangeOutcome::Applied
            }
        }
    }

    /// Programmatic replacement. Skips the rule (the caller has already
    /// validated the value) but honors ownership: an uncontrolled host
    /// adopts the value and mirrors it to the callback, a controlled host
    /// only forwards it.
    pub fn request_replace(&mut self, value: R::Value) -> ChangeOutcome {
        if value == self.value {
            return ChangeOutcome::Ignored;
        }

        match self.mode {
            Mode::Controlled => {
                if let Some(on_change) = &self.on_change {
                    (on_change)(&value);
                }
                ChangeOutcome::Forwarded
            }
            Mode::Uncontrolled => {
                self.value = value;
                if let Some(on_change) = &self.on_change {
                    (on_change)(&self.value);
                }
                ChangeOutcome::Applied
            }
        }
    }

    /// Replaces the starting value of an uncontrolled host. Builder-phase
    /// configuration only; ignored on controlled hosts.
    pub fn set_initial(&mut self, value: R::Value) {
        if self.mode == Mode::Uncontrolled {
            self.value = value;
        }
    }

    /// Adopts a new externally supplied value. Only meaningful on controlled
    /// hosts; silently ignored on uncontrolled ones, where the host owns its
    /// value.
    pub fn sync_external(&mut self, value: R::Value) {
        if self.mode == Mode::Controlled {
            self.value = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;
    use crate::state::{SingleRule, ToggleRule};

    #[test]
    fn test_uncontrolled_switch_double_toggle_returns_to_false() {
        let mut host = ControlHost::uncontrolled(ToggleRule, false);

        assert!(host.request_change(()).is_applied());
        assert_eq!(*host.value(), true);

        assert!(host.request_change(()).is_applied());
        assert_eq!(*host.value(), false, "Two toggles should return to the start");
    }

    #[test]
    fn test_controlled_host_is_inert_without_consumer_cooperation() {
        let forwarded = Rc::new(RefCell::new(Vec::new()));
        let mut host = ControlHost::controlled(ToggleRule, false);

        let sink = forwarded.clone();
        host.set_on_change(move |value| sink.borrow_mut().push(*value));

        for _ in 0..5 {
            assert!(host.request_change(()).is_forwarded());
        }

        assert_eq!(
            *host.value(),
            false,
            "A controlled host must display exactly the last externally supplied value"
        );
        assert_eq!(
            *forwarded.borrow(),
            vec![true; 5],
            "Each interaction should forward the computed candidate"
        );
    }

    #[test]
    fn test_controlled_host_adopts_synced_value() {
        let mut host = ControlHost::controlled(ToggleRule, false);

        host.request_change(());
        host.sync_external(true);

        assert_eq!(*host.value(), true);
        assert!(
            host.is_controlled(),
            "Syncing must not change the host's mode"
        );
    }

    #[test]
    fn test_uncontrolled_callback_fires_once_per_successful_change() {
        let calls = Rc::new(Cell::new(0));
        let rule = SingleRule::new(["a", "b"]);
        let mut host = ControlHost::uncontrolled(rule, None);

        let counter = calls.clone();
        host.set_on_change(move |_| counter.set(counter.get() + 1));

        assert!(host.request_change("a".into()).is_applied());
        assert!(host.request_change("a".into()).is_ignored(), "Re-selection is a no-op");
        assert!(host.request_change("z".into()).is_ignored(), "Undeclared is a no-op");
        assert!(host.request_change("b".into()).is_applied());

        assert_eq!(calls.get(), 2, "The callback should fire exactly once per applied change");
    }

    #[test]
    fn test_disabled_host_ignores_everything() {
        let calls = Rc::new(Cell::new(0));
        let mut host = ControlHost::uncontrolled(ToggleRule, false);
        host.set_disabled(true);

        let counter = calls.clone();
        host.set_on_change(move |_| counter.set(counter.get() + 1));

        assert!(host.request_change(()).is_ignored());
        assert_eq!(*host.value(), false, "A disabled host must not mutate");
        assert_eq!(calls.get(), 0, "A disabled host must not fire callbacks");
    }

    #[test]
    fn test_request_replace_honors_ownership() {
        let forwarded = Rc::new(RefCell::new(Vec::new()));

        let mut host = ControlHost::uncontrolled(SingleRule::new(["a"]), None);
        let sink = forwarded.clone();
        host.set_on_change(move |value: &Option<crate::SharedString>| {
            sink.borrow_mut().push(value.clone())
        });

        assert!(host.request_replace(None).is_ignored(), "Same value is a no-op");
        assert!(host.request_replace(Some("z".into())).is_applied());
        assert_eq!(host.value().as_deref(), Some("z"), "Replacement skips the rule");

        let mut host = ControlHost::controlled(SingleRule::new(["a"]), None);
        let sink = forwarded.clone();
        host.set_on_change(move |value: &Option<crate::SharedString>| {
            sink.borrow_mut().push(value.clone())
        });

        assert!(host.request_replace(Some("a".into())).is_forwarded());
        assert_eq!(*host.value(), None, "A controlled host never adopts a replacement");
        assert_eq!(forwarded.borrow().len(), 2, "Both hosts should mirror to the callback");
    }

    #[test]
    fn test_sync_external_ignored_on_uncontrolled_host() {
        let mut host = ControlHost::uncontrolled(ToggleRule, false);
        host.sync_external(true);
        assert_eq!(
            *host.value(),
            false,
            "An uncontrolled host owns its value; external syncs are ignored"
        );
    }

    #[test]
    fn test_resolve_latches_mode_from_external_value() {
        let controlled = ControlHost::resolve(ToggleRule, false, Some(true));
        assert!(controlled.is_controlled());
        assert_eq!(*controlled.value(), true);

        let uncontrolled = ControlHost::resolve(ToggleRule, true, None);
        assert!(!uncontrolled.is_controlled());
        assert_eq!(*uncontrolled.value(), true);
    }

    #[test]
    fn test_random_interaction_sequences_preserve_invariants() {
        use rand::Rng;

        let mut rng = rand::rng();
        let options = ["a", "b", "c", "d"];

        for _ in 0..50 {
            let rule = SingleRule::new(options);
            let callback_count = Rc::new(Cell::new(0));
            let applied_count = Rc::new(Cell::new(0));

            let mut host = ControlHost::uncontrolled(rule, None);
            let counter = callback_count.clone();
            host.set_on_change(move |_| counter.set(counter.get() + 1));

            for _ in 0..20 {
                let candidate = if rng.random_bool(0.2) {
                    "undeclared"
                } else {
                    options[rng.random_range(0..options.len())]
                };

                if host.request_change(candidate.into()).is_applied() {
                    applied_count.set(applied_count.get() + 1);
                    assert_eq!(
                        host.value().as_deref(),
                        Some(candidate),
                        "An applied change must land on the candidate"
                    );
                }
            }

            assert_eq!(
                callback_count.get(),
                applied_count.get(),
                "Callback count must equal the number of applied changes"
            );
        }
    }
}
