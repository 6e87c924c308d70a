//! SQL schema for the Paralympics SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS countries (
    id           INTEGER PRIMARY KEY AUTOINCREMENT,
    country_name TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS hosts (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    place_name TEXT NOT NULL,
    latitude   REAL,
    longitude  REAL,
    country_id INTEGER REFERENCES countries(id) ON DELETE SET NULL
);

CREATE TABLE IF NOT EXISTS games (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    event_type     TEXT NOT NULL CHECK (event_type IN ('winter', 'summer')),
    year           INTEGER NOT NULL CHECK (year BETWEEN 1960 AND 9999),
    start_date     TEXT,
    end_date       TEXT,
    countries      INTEGER,
    events         INTEGER,
    sports         INTEGER,
    participants_m INTEGER,
    participants_f INTEGER,
    participants   INTEGER,
    highlights     TEXT,
    url            TEXT
);

-- At most one host per Games edition.
CREATE TABLE IF NOT EXISTS games_host (
    games_id INTEGER PRIMARY KEY REFERENCES games(id) ON DELETE CASCADE,
    host_id  INTEGER NOT NULL REFERENCES hosts(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS teams (
    code        TEXT PRIMARY KEY,
    name        TEXT NOT NULL,
    region      TEXT CHECK (region IN ('Asia', 'Europe', 'Africa', 'America', 'Oceania')),
    member_type TEXT NOT NULL
                CHECK (member_type IN ('country', 'team', 'dissolved', 'construct')),
    notes       TEXT,
    country_id  INTEGER REFERENCES countries(id) ON DELETE SET NULL
);

CREATE TABLE IF NOT EXISTS disabilities (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS questions (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    question_text TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS responses (
    id            INTEGER PRIMARY KEY AUTOINCREMENT,
    question_id   INTEGER REFERENCES questions(id) ON DELETE CASCADE,
    response_text TEXT NOT NULL,
    is_correct    INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS hosts_country_idx      ON hosts(country_id);
CREATE INDEX IF NOT EXISTS games_host_host_idx    ON games_host(host_id);
CREATE INDEX IF NOT EXISTS teams_country_idx      ON teams(country_id);
CREATE INDEX IF NOT EXISTS responses_question_idx ON responses(question_id);

PRAGMA user_version = 1;
";
