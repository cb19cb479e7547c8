use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_path: Option<&str>) -> anyhow::Result<()> {
    let conn = connect(db_path.unwrap_or("target/db/transtats.db")).await?;
    create_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> &'static DatabaseConnection {
    DB_CONN
        .get()
        .expect("Database connection has not been initialized")
}

/// Open (and create if needed) the SQLite database at `db_file`.
pub async fn connect(db_file: &str) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = std::path::Path::new(db_file).parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if std::path::Path::new(db_file).is_absolute() {
        std::path::PathBuf::from(db_file)
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    let conn = Database::connect(&db_url).await?;
    Ok(conn)
}

/// Ensure every table of the storage contract exists.
///
/// Domain tables carry the `ts_` prefix, system tables the `sys_` prefix.
pub async fn create_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for (table, create_sql) in TABLES {
        ensure_table(conn, table, create_sql).await?;
    }

    // Columns added after the first release; backfill older databases
    ensure_column(
        conn,
        "ts_packages",
        "component",
        "ALTER TABLE ts_packages ADD COLUMN component TEXT;",
    )
    .await?;

    Ok(())
}

async fn ensure_table(
    conn: &DatabaseConnection,
    table: &str,
    create_sql: &str,
) -> anyhow::Result<()> {
    let check = format!(
        "SELECT name FROM sqlite_master WHERE type='table' AND name='{}';",
        table
    );
    let existing = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, check))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating {} table", table);
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_sql.to_string(),
        ))
        .await?;
    }
    Ok(())
}

async fn ensure_column(
    conn: &DatabaseConnection,
    table: &str,
    column: &str,
    alter_sql: &str,
) -> anyhow::Result<()> {
    let pragma = format!("PRAGMA table_info('{}');", table);
    let cols = conn
        .query_all(Statement::from_string(DatabaseBackend::Sqlite, pragma))
        .await?;
    for row in cols {
        let name: String = row.try_get("", "name").unwrap_or_default();
        if name == column {
            return Ok(());
        }
    }
    tracing::info!("Adding {} column to {}", column, table);
    conn.execute(Statement::from_string(
        DatabaseBackend::Sqlite,
        alter_sql.to_string(),
    ))
    .await?;
    Ok(())
}

const TABLES: &[(&str, &str)] = &[
    (
        "ts_locales",
        r#"
        CREATE TABLE ts_locales (
            locale_id TEXT PRIMARY KEY NOT NULL,
            lang_name TEXT NOT NULL UNIQUE,
            locale_alias TEXT UNIQUE,
            locale_script TEXT,
            lang_status INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "ts_langset",
        r#"
        CREATE TABLE ts_langset (
            lang_set_id INTEGER PRIMARY KEY AUTOINCREMENT,
            lang_set_name TEXT NOT NULL,
            lang_set_slug TEXT NOT NULL UNIQUE,
            lang_set_color TEXT NOT NULL UNIQUE,
            locale_ids TEXT NOT NULL DEFAULT '[]'
        );
    "#,
    ),
    (
        "ts_transplatforms",
        r#"
        CREATE TABLE ts_transplatforms (
            platform_id INTEGER PRIMARY KEY AUTOINCREMENT,
            engine_name TEXT NOT NULL,
            subject TEXT,
            api_url TEXT NOT NULL UNIQUE,
            platform_slug TEXT NOT NULL UNIQUE,
            server_status INTEGER NOT NULL DEFAULT 0,
            projects_json TEXT,
            projects_last_updated TEXT,
            auth_login_id TEXT,
            auth_token_key TEXT
        );
    "#,
    ),
    (
        "ts_relstreams",
        r#"
        CREATE TABLE ts_relstreams (
            relstream_id INTEGER PRIMARY KEY AUTOINCREMENT,
            relstream_name TEXT NOT NULL,
            relstream_slug TEXT NOT NULL UNIQUE,
            relstream_server TEXT NOT NULL UNIQUE,
            relstream_built TEXT,
            relstream_built_tags TEXT NOT NULL DEFAULT '[]',
            built_tags_last_updated TEXT,
            srcpkg_format TEXT,
            top_url TEXT NOT NULL UNIQUE,
            web_url TEXT UNIQUE,
            krb_service TEXT,
            auth_type TEXT,
            amqp_server TEXT,
            msgbus_exchange TEXT,
            major_milestones TEXT NOT NULL DEFAULT '[]',
            relstream_phases TEXT NOT NULL DEFAULT '[]',
            relstream_status INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "ts_relbranches",
        r#"
        CREATE TABLE ts_relbranches (
            relbranch_id INTEGER PRIMARY KEY AUTOINCREMENT,
            relbranch_name TEXT NOT NULL,
            relbranch_slug TEXT NOT NULL UNIQUE,
            relstream_slug TEXT NOT NULL,
            lang_set TEXT NOT NULL,
            scm_branch TEXT,
            created_on TEXT NOT NULL,
            current_phase TEXT,
            calendar_url TEXT UNIQUE,
            schedule_json TEXT,
            sync_calendar INTEGER NOT NULL DEFAULT 1,
            notifications_flag INTEGER NOT NULL DEFAULT 1,
            track_trans_flag INTEGER NOT NULL DEFAULT 1,
            created_by TEXT
        );
    "#,
    ),
    (
        "ts_packages",
        r#"
        CREATE TABLE ts_packages (
            package_id INTEGER PRIMARY KEY AUTOINCREMENT,
            package_name TEXT NOT NULL UNIQUE,
            upstream_name TEXT,
            component TEXT,
            upstream_url TEXT NOT NULL UNIQUE,
            platform_slug TEXT NOT NULL
                REFERENCES ts_transplatforms(platform_slug) ON DELETE RESTRICT,
            platform_name TEXT,
            platform_url TEXT,
            release_streams TEXT NOT NULL DEFAULT '[]',
            details_json TEXT,
            details_json_last_updated TEXT,
            name_map_json TEXT,
            release_branch_map_json TEXT,
            mapping_last_updated TEXT,
            stats_diff_json TEXT,
            stats_last_updated TEXT,
            upstream_latest_stats_json TEXT,
            upstream_last_updated TEXT,
            downstream_last_updated TEXT,
            translation_file_ext TEXT NOT NULL DEFAULT 'po',
            created_by TEXT,
            maintainers_json TEXT
        );
    "#,
    ),
    (
        "ts_jobtemplates",
        r#"
        CREATE TABLE ts_jobtemplates (
            job_template_id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_template_type TEXT NOT NULL UNIQUE,
            job_template_name TEXT NOT NULL,
            job_template_desc TEXT,
            job_template_params TEXT NOT NULL DEFAULT '[]',
            job_template_json TEXT,
            last_accessed TEXT
        );
    "#,
    ),
    (
        "ts_jobs",
        r#"
        CREATE TABLE ts_jobs (
            job_id INTEGER PRIMARY KEY AUTOINCREMENT,
            job_uuid TEXT NOT NULL UNIQUE,
            job_type TEXT NOT NULL,
            start_time TEXT NOT NULL,
            end_time TEXT,
            yml_text TEXT,
            log_json TEXT,
            job_result INTEGER,
            remarks TEXT,
            template_id INTEGER
                REFERENCES ts_jobtemplates(job_template_id) ON DELETE RESTRICT,
            params_json TEXT,
            output_json TEXT,
            triggered_by TEXT,
            visible_on_url INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "ts_syncstats",
        r#"
        CREATE TABLE ts_syncstats (
            sync_id INTEGER PRIMARY KEY AUTOINCREMENT,
            package_name TEXT NOT NULL,
            job_uuid TEXT NOT NULL,
            project_version TEXT,
            source TEXT,
            stats_raw_json TEXT,
            stats_processed_json TEXT,
            sync_iter_count INTEGER NOT NULL DEFAULT 0,
            sync_visibility INTEGER NOT NULL DEFAULT 0
        );
    "#,
    ),
    (
        "ts_graphrules",
        r#"
        CREATE TABLE ts_graphrules (
            graph_rule_id INTEGER PRIMARY KEY AUTOINCREMENT,
            rule_name TEXT NOT NULL UNIQUE,
            rule_packages TEXT NOT NULL DEFAULT '[]',
            rule_langs TEXT NOT NULL DEFAULT '[]',
            rule_relbranch TEXT NOT NULL,
            created_on TEXT NOT NULL,
            rule_status INTEGER NOT NULL DEFAULT 1,
            rule_visibility_public INTEGER NOT NULL DEFAULT 0,
            created_by TEXT
        );
    "#,
    ),
    (
        "ts_cacheapi",
        r#"
        CREATE TABLE ts_cacheapi (
            cache_api_id INTEGER PRIMARY KEY AUTOINCREMENT,
            base_url TEXT NOT NULL,
            resource TEXT NOT NULL,
            request_args TEXT NOT NULL DEFAULT '[]',
            request_kwargs TEXT NOT NULL DEFAULT '',
            response_content TEXT NOT NULL DEFAULT '',
            response_content_json TEXT,
            expiry TEXT NOT NULL
        );
    "#,
    ),
    (
        "ts_reports",
        r#"
        CREATE TABLE ts_reports (
            report_id INTEGER PRIMARY KEY AUTOINCREMENT,
            report_subject TEXT NOT NULL UNIQUE,
            report_json TEXT,
            report_updated TEXT
        );
    "#,
    ),
    (
        "ts_visitors",
        r#"
        CREATE TABLE ts_visitors (
            visitor_id INTEGER PRIMARY KEY AUTOINCREMENT,
            visitor_ip TEXT NOT NULL,
            visitor_user_agent TEXT NOT NULL,
            visitor_accept TEXT,
            visitor_encoding TEXT,
            visitor_language TEXT,
            visitor_host TEXT,
            first_visit_time TEXT NOT NULL,
            last_visit_time TEXT NOT NULL
        );
    "#,
    ),
    (
        "sys_users",
        r#"
        CREATE TABLE sys_users (
            id TEXT PRIMARY KEY NOT NULL,
            username TEXT NOT NULL UNIQUE,
            email TEXT,
            password_hash TEXT NOT NULL,
            full_name TEXT,
            is_active INTEGER NOT NULL DEFAULT 1,
            is_admin INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL,
            last_login_at TEXT,
            created_by TEXT
        );
    "#,
    ),
    (
        "sys_api_tokens",
        r#"
        CREATE TABLE sys_api_tokens (
            token_key TEXT PRIMARY KEY NOT NULL,
            user_id TEXT NOT NULL UNIQUE
                REFERENCES sys_users(id) ON DELETE CASCADE,
            created_at TEXT NOT NULL
        );
    "#,
    ),
    (
        "sys_settings",
        r#"
        CREATE TABLE sys_settings (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            description TEXT,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
    "#,
    ),
];
