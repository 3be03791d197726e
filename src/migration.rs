//! Schema migration for the `pets` table. Safe to run on every start.

use crate::models::PetStatus;
use sqlx::PgPool;

fn quote_literal(s: &str) -> String {
    format!("'{}'", s.replace('\'', "''"))
}

/// DDL statements in execution order.
pub fn pets_ddl() -> Vec<String> {
    let statuses: Vec<String> = PetStatus::ALL.iter().map(|s| quote_literal(s.as_str())).collect();
    vec![
        format!(
            r#"
            CREATE TABLE IF NOT EXISTS pets (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL CHECK (btrim(name) <> ''),
                tag TEXT,
                status TEXT CHECK (status IN ({}))
            )
            "#,
            statuses.join(", ")
        ),
        "CREATE INDEX IF NOT EXISTS pets_tag_idx ON pets (tag)".to_string(),
    ]
}

/// Create the `pets` table and its index if absent.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    for ddl in pets_ddl() {
        sqlx::query(&ddl).execute(pool).await?;
    }
    tracing::info!("schema migration complete");
    Ok(())
}
