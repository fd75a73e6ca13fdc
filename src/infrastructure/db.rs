use sea_orm::{ConnectionTrait, Database, DatabaseConnection, DbErr, Statement};

/// Connect and bring the schema up to date.
///
/// sqlx opens SQLite connections with `foreign_keys = ON`, which the loan
/// table relies on to reject unknown tool/member ids.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(database_url).await?;

    run_migrations(&db).await?;

    tracing::info!("Database ready at {}", database_url);
    Ok(db)
}

async fn run_migrations(db: &DatabaseConnection) -> Result<(), DbErr> {
    let statements = [
        r#"
        CREATE TABLE IF NOT EXISTS tools (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            type TEXT NOT NULL,
            name TEXT NOT NULL,
            condition TEXT NOT NULL CHECK (condition IN ('Good', 'Fair', 'Poor')),
            notes TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS members (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            full_name TEXT NOT NULL,
            document TEXT NOT NULL UNIQUE,
            phone TEXT,
            email TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        // Deleting a tool or member is guarded against open loans, so only
        // closed loan history is ever removed by the cascade.
        r#"
        CREATE TABLE IF NOT EXISTS loans (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            tool_id INTEGER NOT NULL REFERENCES tools(id) ON DELETE CASCADE,
            member_id INTEGER NOT NULL REFERENCES members(id) ON DELETE CASCADE,
            loan_date TEXT NOT NULL,
            return_date TEXT,
            observations TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )
        "#,
        "CREATE INDEX IF NOT EXISTS idx_loans_tool_open ON loans (tool_id, return_date)",
        "CREATE INDEX IF NOT EXISTS idx_loans_member_open ON loans (member_id, return_date)",
    ];

    for sql in statements {
        db.execute(Statement::from_string(
            db.get_database_backend(),
            sql.to_owned(),
        ))
        .await?;
    }

    Ok(())
}
