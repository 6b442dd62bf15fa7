use sqlx::PgPool;
use uuid::Uuid;

use crate::db::memberships::find_membership;
use crate::error::{AppError, AppResult};
use crate::models::membership::{Membership, MembershipRole};

/// Loads the caller's active membership in `organization_id`, requiring
/// `role` when given. Missing or inactive memberships are `Forbidden`.
pub async fn require_membership(
    db: &PgPool,
    user_id: Uuid,
    organization_id: Uuid,
    role: Option<MembershipRole>,
) -> AppResult<Membership> {
    let membership = find_membership(db, user_id, organization_id)
        .await?
        .ok_or(AppError::Forbidden)?;

    check_role(&membership, role)?;
    Ok(membership)
}

pub fn check_role(membership: &Membership, role: Option<MembershipRole>) -> AppResult<()> {
    if !membership.is_active {
        return Err(AppError::Forbidden);
    }
    match role {
        Some(required) if membership.role != required => {
            tracing::warn!(
                user_id = %membership.user_id,
                organization_id = %membership.organization_id,
                required = ?required,
                "Membership role check failed"
            );
            Err(AppError::Forbidden)
        }
        _ => Ok(()),
    }
}
