use paralympics_core::place::{Country, CountryPatch, Host, HostPatch, NewCountry, NewHost};
use rusqlite::{Connection, OptionalExtension as _, Row, params};

// ─── Countries ───────────────────────────────────────────────────────────────

fn country_from_row(row: &Row<'_>) -> rusqlite::Result<Country> {
  Ok(Country { id: row.get(0)?, country_name: row.get(1)? })
}

pub fn select_country(conn: &Connection, id: i64) -> rusqlite::Result<Option<Country>> {
  conn
    .query_row(
      "SELECT id, country_name FROM countries WHERE id = ?1",
      params![id],
      country_from_row,
    )
    .optional()
}

pub fn select_countries(conn: &Connection) -> rusqlite::Result<Vec<Country>> {
  let mut stmt = conn.prepare("SELECT id, country_name FROM countries ORDER BY id")?;
  let rows = stmt
    .query_map([], country_from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

pub fn insert_country(conn: &Connection, c: NewCountry) -> rusqlite::Result<Country> {
  conn.execute(
    "INSERT INTO countries (country_name) VALUES (?1)",
    params![c.country_name],
  )?;
  Ok(c.with_id(conn.last_insert_rowid()))
}

pub fn update_country(
  conn: &Connection,
  id: i64,
  patch: CountryPatch,
) -> rusqlite::Result<Option<Country>> {
  let Some(current) = select_country(conn, id)? else {
    return Ok(None);
  };
  let c = current.merged(patch);
  conn.execute(
    "UPDATE countries SET country_name = ?2 WHERE id = ?1",
    params![c.id, c.country_name],
  )?;
  Ok(Some(c))
}

pub fn delete_country(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(conn.execute("DELETE FROM countries WHERE id = ?1", params![id])? > 0)
}

// ─── Hosts ───────────────────────────────────────────────────────────────────

/// Expects columns `id, place_name, latitude, longitude, country_id`.
pub fn host_from_row(row: &Row<'_>) -> rusqlite::Result<Host> {
  Ok(Host {
    id:         row.get(0)?,
    place_name: row.get(1)?,
    latitude:   row.get(2)?,
    longitude:  row.get(3)?,
    country_id: row.get(4)?,
  })
}

pub fn select_host(conn: &Connection, id: i64) -> rusqlite::Result<Option<Host>> {
  conn
    .query_row(
      "SELECT id, place_name, latitude, longitude, country_id FROM hosts WHERE id = ?1",
      params![id],
      host_from_row,
    )
    .optional()
}

pub fn select_hosts(conn: &Connection) -> rusqlite::Result<Vec<Host>> {
  let mut stmt = conn.prepare(
    "SELECT id, place_name, latitude, longitude, country_id FROM hosts ORDER BY id",
  )?;
  let rows = stmt
    .query_map([], host_from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

pub fn insert_host(conn: &Connection, h: NewHost) -> rusqlite::Result<Host> {
  conn.execute(
    "INSERT INTO hosts (place_name, latitude, longitude, country_id) VALUES (?1, ?2, ?3, ?4)",
    params![h.place_name, h.latitude, h.longitude, h.country_id],
  )?;
  Ok(h.with_id(conn.last_insert_rowid()))
}

pub fn update_host(conn: &Connection, id: i64, patch: HostPatch) -> rusqlite::Result<Option<Host>> {
  let Some(current) = select_host(conn, id)? else {
    return Ok(None);
  };
  let h = current.merged(patch);
  conn.execute(
    "UPDATE hosts SET place_name = ?2, latitude = ?3, longitude = ?4, country_id = ?5
     WHERE id = ?1",
    params![h.id, h.place_name, h.latitude, h.longitude, h.country_id],
  )?;
  Ok(Some(h))
}

pub fn delete_host(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(conn.execute("DELETE FROM hosts WHERE id = ?1", params![id])? > 0)
}
