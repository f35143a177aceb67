//! Role gate run at the start of every operation.
//!
//! The caller's identity is resolved upstream; this only decides whether
//! that identity's role may invoke the operation at all.

use crate::domain::{Role, User};

/// Which roles may call an operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleGuard {
    /// Any authenticated user, whatever their role.
    Any,
    /// Only the listed roles.
    Only(&'static [Role]),
}

impl RoleGuard {
    pub fn permits(&self, role: Role) -> bool {
        match self {
            RoleGuard::Any => true,
            RoleGuard::Only(roles) => roles.contains(&role),
        }
    }
}

/// Checks `user` against `rule`, mapping a refusal to the caller's own
/// "not authorized" error.
pub fn guard<E>(user: &User, rule: RoleGuard, denied: E) -> Result<(), E> {
    if rule.permits(user.role) {
        Ok(())
    } else {
        tracing::warn!(user_id = user.id, role = ?user.role, ?rule, "Role not permitted");
        Err(denied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_permits_every_role() {
        for role in [Role::Client, Role::Owner, Role::Delivery] {
            assert!(RoleGuard::Any.permits(role));
        }
    }

    #[test]
    fn test_only_is_not_inferred_from_set_size() {
        const ALL: &[Role] = &[Role::Client, Role::Owner, Role::Delivery];
        assert!(RoleGuard::Only(ALL).permits(Role::Delivery));

        const EMPTY: &[Role] = &[];
        assert!(!RoleGuard::Only(EMPTY).permits(Role::Owner));
    }

    #[test]
    fn test_guard_returns_supplied_error() {
        let rider = User::new(3, "rider@example.com", Role::Delivery);
        assert_eq!(guard(&rider, RoleGuard::Only(&[Role::Owner]), "denied"), Err("denied"));
        assert_eq!(guard(&rider, RoleGuard::Only(&[Role::Delivery]), "denied"), Ok(()));
    }
}
