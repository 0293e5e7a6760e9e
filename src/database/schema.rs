use sqlx::SqlitePool;

// Applied at startup (and against in-memory databases in tests). Statements
// are idempotent so a restart against an existing database is a no-op.
const SCHEMA_STATEMENTS: &[&str] = &[
    r#"
CREATE TABLE IF NOT EXISTS accounts (
  id            TEXT PRIMARY KEY,
  username      TEXT NOT NULL UNIQUE,
  password_hash TEXT NOT NULL,
  role          TEXT NOT NULL DEFAULT 'user',
  phone         TEXT,
  joined_at     TEXT NOT NULL DEFAULT (datetime('now'))
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS activities (
  id                   TEXT PRIMARY KEY,
  title                TEXT NOT NULL,
  description          TEXT NOT NULL DEFAULT '',
  category             TEXT NOT NULL,
  date                 TEXT NOT NULL,
  location             TEXT NOT NULL DEFAULT '',
  max_participants     INTEGER NOT NULL,
  current_participants INTEGER NOT NULL DEFAULT 0,
  created_at           TEXT NOT NULL DEFAULT (datetime('now'))
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS bookings (
  id          TEXT PRIMARY KEY,
  user_id     TEXT NOT NULL,
  activity_id TEXT NOT NULL,
  booked_at   TEXT NOT NULL DEFAULT (datetime('now')),
  UNIQUE (user_id, activity_id)
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS comments (
  id          TEXT PRIMARY KEY,
  user_id     TEXT NOT NULL,
  activity_id TEXT NOT NULL,
  text        TEXT NOT NULL,
  is_deleted  INTEGER NOT NULL DEFAULT 0,
  is_edited   INTEGER NOT NULL DEFAULT 0,
  created_at  TEXT NOT NULL DEFAULT (datetime('now'))
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS market_items (
  id           TEXT PRIMARY KEY,
  seller_id    TEXT NOT NULL,
  title        TEXT NOT NULL,
  description  TEXT NOT NULL DEFAULT '',
  price        REAL NOT NULL,
  category     TEXT NOT NULL,
  contact_info TEXT NOT NULL,
  image_url    TEXT,
  created_at   TEXT NOT NULL DEFAULT (datetime('now'))
)
"#,
    r#"
CREATE TABLE IF NOT EXISTS banned_words (
  id   TEXT PRIMARY KEY,
  word TEXT NOT NULL UNIQUE
)
"#,
    r#"CREATE INDEX IF NOT EXISTS idx_bookings_user ON bookings (user_id)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_comments_activity ON comments (activity_id)"#,
    r#"CREATE INDEX IF NOT EXISTS idx_market_items_seller ON market_items (seller_id)"#,
];

pub async fn ensure_schema(pool: &SqlitePool) -> sqlx::Result<()> {
    for statement in SCHEMA_STATEMENTS {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}
