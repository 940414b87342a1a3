//! Repository for the `work_origins` table.

use collections_core::types::DbId;
use sqlx::PgExecutor;

use crate::models::work_origin::WorkOrigin;

/// Read access to work origins; they are exposed read-only.
pub struct WorkOriginRepo;

impl WorkOriginRepo {
    pub async fn list_by_work<'e>(
        executor: impl PgExecutor<'e>,
        work_id: DbId,
    ) -> Result<Vec<WorkOrigin>, sqlx::Error> {
        sqlx::query_as::<_, WorkOrigin>(
            r#"SELECT id, work_id, geographic_location, "order" FROM work_origins
               WHERE work_id = $1
               ORDER BY "order" ASC, id ASC"#,
        )
        .bind(work_id)
        .fetch_all(executor)
        .await
    }
}
