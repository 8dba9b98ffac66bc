//! Verified-user gate supplied by the host application.
//!
//! The identity/session provider is external; the engine depends only on a
//! boolean "is a verified user active" signal that gates whether the
//! cart/checkout flow is reachable at all.

/// Source of the "verified user active" signal.
pub trait IdentityGate {
    /// Whether a verified user session is currently active.
    fn verified_user_active(&self) -> bool;
}

/// Gate with a fixed answer, for hosts that resolve the session up front
/// and for tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticGate(pub bool);

impl IdentityGate for StaticGate {
    fn verified_user_active(&self) -> bool {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_gate() {
        assert!(StaticGate(true).verified_user_active());
        assert!(!StaticGate(false).verified_user_active());
        assert!(!StaticGate::default().verified_user_active());
    }
}
