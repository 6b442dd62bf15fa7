use sqlx::PgPool;
use uuid::Uuid;

use crate::models::membership::Membership;

pub async fn find_membership(
    db: &PgPool,
    user_id: Uuid,
    organization_id: Uuid,
) -> Result<Option<Membership>, sqlx::Error> {
    sqlx::query_as::<_, Membership>(
        r#"
        SELECT id, user_id, organization_id, role, is_active, created_at
        FROM memberships
        WHERE user_id = $1 AND organization_id = $2
        "#,
    )
    .bind(user_id)
    .bind(organization_id)
    .fetch_optional(db)
    .await
}
