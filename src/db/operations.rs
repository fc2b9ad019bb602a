//! Dynamic DDL and batched inserts for uploaded frames.
//!
//! Table and column names come from sanitized user input, so every
//! identifier is double-quoted; the sanitizer lowercases, which also keeps
//! quoted names consistent with Postgres's fold-to-lowercase behavior.

use sqlx::{PgPool, Postgres, QueryBuilder};
use tracing::debug;

use crate::tabular::Frame;
use crate::types::AppResult;

// Postgres caps a single statement at 65535 bind parameters.
const MAX_BIND_PARAMS: usize = 65535;

pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

fn create_table_sql(table: &str, columns: &[String]) -> String {
    let column_list = columns
        .iter()
        .map(|c| format!("{} TEXT", quote_ident(c)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quote_ident(table),
        column_list
    )
}

/// Declare the table if it does not exist yet. Every column is TEXT; an
/// existing table is left untouched whatever its shape.
pub async fn ensure_table(pool: &PgPool, table: &str, columns: &[String]) -> AppResult<()> {
    let ddl = create_table_sql(table, columns);
    debug!(table = %table, "Ensuring table: {}", ddl);
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Insert every frame row into the named table inside one transaction,
/// batching statements to stay under the bind parameter ceiling. Returns
/// the affected-row count reported by the store, falling back to the
/// frame's own row count if the store reports nothing.
pub async fn insert_frame(pool: &PgPool, table: &str, frame: &Frame) -> AppResult<u64> {
    if frame.rows.is_empty() {
        return Ok(0);
    }

    let column_list = frame
        .columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ");
    let insert_prefix = format!("INSERT INTO {} ({}) ", quote_ident(table), column_list);
    let batch_size = rows_per_batch(frame.column_count());

    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;
    for chunk in frame.rows.chunks(batch_size) {
        let mut builder = QueryBuilder::<Postgres>::new(insert_prefix.as_str());
        builder.push_values(chunk, |mut values, row| {
            for cell in row {
                values.push_bind(cell.as_str());
            }
        });
        let result = builder.build().execute(&mut *tx).await?;
        inserted += result.rows_affected();
    }
    tx.commit().await?;

    if inserted == 0 {
        inserted = frame.row_count() as u64;
    }
    Ok(inserted)
}

fn rows_per_batch(column_count: usize) -> usize {
    (MAX_BIND_PARAMS / column_count.max(1)).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("people"), "\"people\"");
        assert_eq!(quote_ident("2024_report"), "\"2024_report\"");
        assert_eq!(quote_ident("user"), "\"user\"");
    }

    #[test]
    fn escapes_embedded_quotes() {
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }

    #[test]
    fn builds_create_table_ddl() {
        let ddl = create_table_sql("people", &["name".to_string(), "age".to_string()]);
        assert_eq!(
            ddl,
            "CREATE TABLE IF NOT EXISTS \"people\" (\"name\" TEXT, \"age\" TEXT)"
        );
    }

    #[test]
    fn batch_size_respects_bind_parameter_ceiling() {
        assert_eq!(rows_per_batch(2), 32767);
        assert_eq!(rows_per_batch(65535), 1);
        // a degenerate wide frame still makes progress one row at a time
        assert_eq!(rows_per_batch(100_000), 1);
        assert_eq!(rows_per_batch(0), MAX_BIND_PARAMS);
    }
}
