//! Role-based access control (RBAC) extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does
//! not meet the minimum requirement, before any handler code runs. Gated
//! pages therefore never receive privileged data regardless of fetch
//! timing: the rejection happens at extraction, not after a query.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tecnica_core::error::CoreError;
use tecnica_core::roles::ROLE_ADMIN;
use tecnica_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `admin` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn admin_only(RequireAdmin(user): RequireAdmin) -> AppResult<Json<()>> {
///     // user is guaranteed to be an admin here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireAdmin(pub AuthUser);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required".into(),
            )));
        }
        Ok(RequireAdmin(user))
    }
}

/// Requires any authenticated user (any valid role).
///
/// Functionally equivalent to [`AuthUser`] but named explicitly for use in
/// route definitions where the intent "this route requires authentication"
/// should be self-documenting.
pub struct RequireAuth(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        Ok(RequireAuth(user))
    }
}

/// Reject unless the caller owns the row (`owner_uid`) or is an admin.
///
/// This is the single ownership check every mutating handler goes through;
/// per-row ownership is `created_by_uid` (or `usuario_id` for personas).
pub fn ensure_owner_or_admin(user: &AuthUser, owner_uid: Option<DbId>) -> Result<(), AppError> {
    if user.is_admin() || owner_uid == Some(user.usuario_id) {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::Forbidden(
            "You can only modify your own records".into(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use tecnica_core::roles::ROLE_MIEMBRO;

    fn member(id: DbId) -> AuthUser {
        AuthUser {
            usuario_id: id,
            role: ROLE_MIEMBRO.to_string(),
        }
    }

    fn admin(id: DbId) -> AuthUser {
        AuthUser {
            usuario_id: id,
            role: ROLE_ADMIN.to_string(),
        }
    }

    #[test]
    fn test_owner_passes() {
        assert!(ensure_owner_or_admin(&member(7), Some(7)).is_ok());
    }

    #[test]
    fn test_non_owner_rejected_as_forbidden() {
        assert_matches!(
            ensure_owner_or_admin(&member(7), Some(8)),
            Err(AppError::Core(CoreError::Forbidden(_)))
        );
        assert_matches!(
            ensure_owner_or_admin(&member(7), None),
            Err(AppError::Core(CoreError::Forbidden(_)))
        );
    }

    #[test]
    fn test_admin_overrides_ownership() {
        assert!(ensure_owner_or_admin(&admin(1), Some(99)).is_ok());
        assert!(ensure_owner_or_admin(&admin(1), None).is_ok());
    }
}
