use sqlx::{Pool, Sqlite};

use crate::storage::validate_sqlite_table_schema;
use crate::userdb::{
    errors::UserError,
    types::{NewUser, User},
};

use super::config::DB_TABLE_USERS;

// SQLite implementations
pub(super) async fn create_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    // AUTOINCREMENT keeps ids from being reused after the highest row is deleted
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT NOT NULL,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            phone TEXT NOT NULL,
            address TEXT NOT NULL,
            country TEXT NOT NULL
        )
        "#
    ))
    .execute(pool)
    .await?;

    Ok(())
}

/// Validates that the users table schema matches what we expect
pub(super) async fn validate_user_tables_sqlite(pool: &Pool<Sqlite>) -> Result<(), UserError> {
    let users_table = DB_TABLE_USERS.as_str();

    let expected_columns = vec![
        ("user_id", "INTEGER"),
        ("name", "TEXT"),
        ("email", "TEXT"),
        ("phone", "TEXT"),
        ("address", "TEXT"),
        ("country", "TEXT"),
    ];

    validate_sqlite_table_schema(pool, users_table, &expected_columns, UserError::Schema).await?;

    // A table created without AUTOINCREMENT hands out the highest deleted id again
    let table_sql: Option<String> =
        sqlx::query_scalar("SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?")
            .bind(users_table)
            .fetch_optional(pool)
            .await?;

    let autoincrement = table_sql
        .map(|sql| sql.to_ascii_uppercase().contains("AUTOINCREMENT"))
        .unwrap_or(false);

    if !autoincrement {
        return Err(UserError::Schema(format!(
            "Schema validation failed: Column 'user_id' of table '{users_table}' must be AUTOINCREMENT"
        )));
    }

    Ok(())
}

pub(super) async fn insert_user_sqlite(
    pool: &Pool<Sqlite>,
    user: &NewUser,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        INSERT INTO {table_name} (name, email, phone, address, country)
        VALUES (?, ?, ?, ?, ?)
        "#
    ))
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.address)
    .bind(&user.country)
    .execute(pool)
    .await?;

    Ok(user.clone().with_id(result.last_insert_rowid()))
}

pub(super) async fn get_all_users_sqlite(pool: &Pool<Sqlite>) -> Result<Vec<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let users = sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT user_id, name, email, phone, address, country
        FROM {table_name} ORDER BY user_id ASC
        "#
    ))
    .fetch_all(pool)
    .await?;

    Ok(users)
}

pub(super) async fn get_user_by_id_sqlite(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT user_id, name, email, phone, address, country
        FROM {table_name} WHERE user_id = ?
        "#
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

/// The stored row equals `user` after a successful update, so it is echoed back
pub(super) async fn update_user_sqlite(
    pool: &Pool<Sqlite>,
    user: &User,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        UPDATE {table_name}
        SET name = ?, email = ?, phone = ?, address = ?, country = ?
        WHERE user_id = ?
        "#
    ))
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.address)
    .bind(&user.country)
    .bind(user.user_id)
    .execute(pool)
    .await?;

    Ok((result.rows_affected() > 0).then(|| user.clone()))
}

pub(super) async fn delete_user_sqlite(
    pool: &Pool<Sqlite>,
    user_id: i64,
) -> Result<bool, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE user_id = ?
        "#
    ))
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
