use paralympics_core::team::{Team, TeamPatch};
use rusqlite::{Connection, OptionalExtension as _, Row, params};

use crate::encode::{parsed, parsed_opt};

fn from_row(row: &Row<'_>) -> rusqlite::Result<Team> {
  Ok(Team {
    code:        row.get(0)?,
    name:        row.get(1)?,
    region:      parsed_opt(row, 2)?,
    member_type: parsed(row, 3)?,
    notes:       row.get(4)?,
    country_id:  row.get(5)?,
  })
}

pub fn select(conn: &Connection, code: &str) -> rusqlite::Result<Option<Team>> {
  conn
    .query_row(
      "SELECT code, name, region, member_type, notes, country_id FROM teams WHERE code = ?1",
      params![code],
      from_row,
    )
    .optional()
}

pub fn select_all(conn: &Connection) -> rusqlite::Result<Vec<Team>> {
  let mut stmt = conn.prepare(
    "SELECT code, name, region, member_type, notes, country_id FROM teams ORDER BY code",
  )?;
  let rows = stmt
    .query_map([], from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

/// A duplicate code violates the primary key and fails as a constraint
/// error.
pub fn insert(conn: &Connection, t: Team) -> rusqlite::Result<Team> {
  write(
    conn,
    "INSERT INTO teams (code, name, region, member_type, notes, country_id)
     VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
    &t,
  )?;
  Ok(t)
}

pub fn update(conn: &Connection, code: &str, patch: TeamPatch) -> rusqlite::Result<Option<Team>> {
  let Some(current) = select(conn, code)? else {
    return Ok(None);
  };
  let t = current.merged(patch);
  write(
    conn,
    "UPDATE teams SET name = ?2, region = ?3, member_type = ?4, notes = ?5, country_id = ?6
     WHERE code = ?1",
    &t,
  )?;
  Ok(Some(t))
}

pub fn delete(conn: &Connection, code: &str) -> rusqlite::Result<bool> {
  Ok(conn.execute("DELETE FROM teams WHERE code = ?1", params![code])? > 0)
}

fn write(conn: &Connection, sql: &str, t: &Team) -> rusqlite::Result<usize> {
  conn.execute(
    sql,
    params![
      t.code,
      t.name,
      t.region.map(|r| r.as_str()),
      t.member_type.as_str(),
      t.notes,
      t.country_id,
    ],
  )
}
