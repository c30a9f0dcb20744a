use sqlx::{Pool, Postgres};

use crate::storage::validate_postgres_table_schema;
use crate::userdb::{
    errors::UserError,
    types::{NewUser, User},
};

use super::config::DB_TABLE_USERS;

// PostgreSQL implementations
pub(super) async fn create_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table_name} (
            user_id BIGSERIAL PRIMARY KEY,
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
pub(super) async fn validate_user_tables_postgres(pool: &Pool<Postgres>) -> Result<(), UserError> {
    let users_table = DB_TABLE_USERS.as_str();

    // information_schema reports lowercase type names
    let expected_columns = vec![
        ("user_id", "bigint"),
        ("name", "text"),
        ("email", "text"),
        ("phone", "text"),
        ("address", "text"),
        ("country", "text"),
    ];

    validate_postgres_table_schema(pool, users_table, &expected_columns, UserError::Schema).await
}

pub(super) async fn insert_user_postgres(
    pool: &Pool<Postgres>,
    user: &NewUser,
) -> Result<User, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let inserted = sqlx::query_as::<_, User>(&format!(
        r#"
        INSERT INTO {table_name} (name, email, phone, address, country)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING user_id, name, email, phone, address, country
        "#
    ))
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.address)
    .bind(&user.country)
    .fetch_one(pool)
    .await?;

    Ok(inserted)
}

pub(super) async fn get_all_users_postgres(pool: &Pool<Postgres>) -> Result<Vec<User>, UserError> {
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

pub(super) async fn get_user_by_id_postgres(
    pool: &Pool<Postgres>,
    user_id: i64,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let user = sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT user_id, name, email, phone, address, country
        FROM {table_name} WHERE user_id = $1
        "#
    ))
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub(super) async fn update_user_postgres(
    pool: &Pool<Postgres>,
    user: &User,
) -> Result<Option<User>, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let updated = sqlx::query_as::<_, User>(&format!(
        r#"
        UPDATE {table_name}
        SET name = $1, email = $2, phone = $3, address = $4, country = $5
        WHERE user_id = $6
        RETURNING user_id, name, email, phone, address, country
        "#
    ))
    .bind(&user.name)
    .bind(&user.email)
    .bind(&user.phone)
    .bind(&user.address)
    .bind(&user.country)
    .bind(user.user_id)
    .fetch_optional(pool)
    .await?;

    Ok(updated)
}

pub(super) async fn delete_user_postgres(
    pool: &Pool<Postgres>,
    user_id: i64,
) -> Result<bool, UserError> {
    let table_name = DB_TABLE_USERS.as_str();

    let result = sqlx::query(&format!(
        r#"
        DELETE FROM {table_name} WHERE user_id = $1
        "#
    ))
    .bind(user_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
