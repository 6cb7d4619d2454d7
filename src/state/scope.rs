use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    sync::atomic::{AtomicU64, Ordering},
};

use thiserror::Error;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(0);

fn next_scope_id() -> ScopeId {
    ScopeId(NEXT_SCOPE_ID.fetch_add(1, Ordering::SeqCst))
}

/// Identifies one root component's composition scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u64);

/// A part was used outside of its required composition scope.
///
/// This is the one loud error in the library: silently defaulting here would
/// produce confusing rendering bugs far from the point of misuse.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("this part's root component no longer exists.")]
    RootDropped,
    #[error("this part belongs to a different root component.")]
    ForeignScope { expected: ScopeId, found: ScopeId },
}

/// The root side of the shared-state channel. Holds the single strong
/// reference to the shared state; parts hold [`ScopeHandle`]s.
pub struct Scope<T> {
    id: ScopeId,
    state: Rc<RefCell<T>>,
}

impl<T> Scope<T> {
    pub fn new(state: T) -> Self {
        Self {
            id: next_scope_id(),
            state: Rc::new(RefCell::new(state)),
        }
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn handle(&self) -> ScopeHandle<T> {
        ScopeHandle {
            id: self.id,
            state: Rc::downgrade(&self.state),
        }
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.state.borrow())
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }
}

/// A part's weak reference to its root's shared state.
pub struct ScopeHandle<T> {
    id: ScopeId,
    state: Weak<RefCell<T>>,
}

impl<T> Clone for ScopeHandle<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            state: self.state.clone(),
        }
    }
}

impl<T> ScopeHandle<T> {
    pub fn id(&self) -> ScopeId {
        self.id
    }

    /// Fails fast when this handle belongs to a different root.
    pub fn expect_scope(&self, expected: ScopeId) -> Result<(), ScopeError> {
        if self.id != expected {
            return Err(ScopeError::ForeignScope {
                expected,
                found: self.id,
            });
        }

        Ok(())
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> Result<R, ScopeError> {
        let state = self.state.upgrade().ok_or(ScopeError::RootDropped)?;
        let result = f(&state.borrow());
        Ok(result)
    }

    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> Result<R, ScopeError> {
        let state = self.state.upgrade().ok_or(ScopeError::RootDropped)?;
        let result = f(&mut state.borrow_mut());
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_reads_and_writes_shared_state() {
        let scope = Scope::new(0_u32);
        let handle = scope.handle();

        handle.with_mut(|value| *value = 42).unwrap();
        assert_eq!(scope.with(|value| *value), 42);
    }

    #[test]
    fn test_handle_fails_after_root_dropped() {
        let scope = Scope::new(());
        let handle = scope.handle();
        drop(scope);

        assert_eq!(
            handle.with(|_| ()),
            Err(ScopeError::RootDropped),
            "A part whose root is gone must fail loudly"
        );
    }

    #[test]
    fn test_foreign_scope_detected() {
        let a = Scope::new(());
        let b = Scope::new(());
        let handle = a.handle();

        assert!(handle.expect_scope(a.id()).is_ok());
        assert!(
            matches!(handle.expect_scope(b.id()), Err(ScopeError::ForeignScope { .. })),
            "Attaching a part to a different root must be rejected"
        );
    }

    #[test]
    fn test_scope_ids_are_unique() {
        let a = Scope::new(());
        let b = Scope::new(());
        assert_ne!(a.id(), b.id());
    }
}
