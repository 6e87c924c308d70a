use paralympics_core::disability::{Disability, DisabilityPatch, NewDisability};
use rusqlite::{Connection, OptionalExtension as _, Row, params};

fn from_row(row: &Row<'_>) -> rusqlite::Result<Disability> {
  Ok(Disability { id: row.get(0)?, description: row.get(1)? })
}

pub fn select(conn: &Connection, id: i64) -> rusqlite::Result<Option<Disability>> {
  conn
    .query_row(
      "SELECT id, description FROM disabilities WHERE id = ?1",
      params![id],
      from_row,
    )
    .optional()
}

pub fn select_all(conn: &Connection) -> rusqlite::Result<Vec<Disability>> {
  let mut stmt = conn.prepare("SELECT id, description FROM disabilities ORDER BY id")?;
  let rows = stmt
    .query_map([], from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

pub fn insert(conn: &Connection, d: NewDisability) -> rusqlite::Result<Disability> {
  conn.execute(
    "INSERT INTO disabilities (description) VALUES (?1)",
    params![d.description],
  )?;
  Ok(d.with_id(conn.last_insert_rowid()))
}

pub fn update(
  conn: &Connection,
  id: i64,
  patch: DisabilityPatch,
) -> rusqlite::Result<Option<Disability>> {
  let Some(current) = select(conn, id)? else {
    return Ok(None);
  };
  let d = current.merged(patch);
  conn.execute(
    "UPDATE disabilities SET description = ?2 WHERE id = ?1",
    params![d.id, d.description],
  )?;
  Ok(Some(d))
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(conn.execute("DELETE FROM disabilities WHERE id = ?1", params![id])? > 0)
}
