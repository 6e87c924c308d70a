use paralympics_core::{
  games::{Games, GamesPatch, NewGames},
  place::Host,
};
use rusqlite::{Connection, OptionalExtension as _, Row, params};

use super::places;
use crate::encode::parsed;

fn from_row(row: &Row<'_>) -> rusqlite::Result<Games> {
  Ok(Games {
    id:             row.get(0)?,
    event_type:     parsed(row, 1)?,
    year:           row.get(2)?,
    start_date:     row.get(3)?,
    end_date:       row.get(4)?,
    countries:      row.get(5)?,
    events:         row.get(6)?,
    sports:         row.get(7)?,
    participants_m: row.get(8)?,
    participants_f: row.get(9)?,
    participants:   row.get(10)?,
    highlights:     row.get(11)?,
    url:            row.get(12)?,
  })
}

pub fn select(conn: &Connection, id: i64) -> rusqlite::Result<Option<Games>> {
  conn
    .query_row(
      "SELECT id, event_type, year, start_date, end_date, countries, events, sports,
              participants_m, participants_f, participants, highlights, url
       FROM games WHERE id = ?1",
      params![id],
      from_row,
    )
    .optional()
}

pub fn select_all(conn: &Connection) -> rusqlite::Result<Vec<Games>> {
  let mut stmt = conn.prepare(
    "SELECT id, event_type, year, start_date, end_date, countries, events, sports,
            participants_m, participants_f, participants, highlights, url
     FROM games ORDER BY id",
  )?;
  let rows = stmt
    .query_map([], from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

pub fn insert(conn: &Connection, g: NewGames) -> rusqlite::Result<Games> {
  conn.execute(
    "INSERT INTO games (
       event_type, year, start_date, end_date, countries, events, sports,
       participants_m, participants_f, participants, highlights, url
     ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
    params![
      g.event_type.as_str(),
      g.year,
      g.start_date,
      g.end_date,
      g.countries,
      g.events,
      g.sports,
      g.participants_m,
      g.participants_f,
      g.participants,
      g.highlights,
      g.url,
    ],
  )?;
  Ok(g.with_id(conn.last_insert_rowid()))
}

pub fn update(conn: &Connection, id: i64, patch: GamesPatch) -> rusqlite::Result<Option<Games>> {
  let Some(current) = select(conn, id)? else {
    return Ok(None);
  };
  let g = current.merged(patch);
  conn.execute(
    "UPDATE games SET
       event_type = ?2, year = ?3, start_date = ?4, end_date = ?5, countries = ?6,
       events = ?7, sports = ?8, participants_m = ?9, participants_f = ?10,
       participants = ?11, highlights = ?12, url = ?13
     WHERE id = ?1",
    params![
      g.id,
      g.event_type.as_str(),
      g.year,
      g.start_date,
      g.end_date,
      g.countries,
      g.events,
      g.sports,
      g.participants_m,
      g.participants_f,
      g.participants,
      g.highlights,
      g.url,
    ],
  )?;
  Ok(Some(g))
}

pub fn delete(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(conn.execute("DELETE FROM games WHERE id = ?1", params![id])? > 0)
}

// ─── Host link ───────────────────────────────────────────────────────────────

pub fn select_host(conn: &Connection, games_id: i64) -> rusqlite::Result<Option<Host>> {
  conn
    .query_row(
      "SELECT h.id, h.place_name, h.latitude, h.longitude, h.country_id
       FROM games_host gh
       JOIN hosts h ON h.id = gh.host_id
       WHERE gh.games_id = ?1",
      params![games_id],
      places::host_from_row,
    )
    .optional()
}

pub fn link_host(conn: &Connection, games_id: i64, host_id: i64) -> rusqlite::Result<Option<Host>> {
  if select(conn, games_id)?.is_none() {
    return Ok(None);
  }
  let Some(host) = places::select_host(conn, host_id)? else {
    return Ok(None);
  };
  conn.execute(
    "INSERT INTO games_host (games_id, host_id) VALUES (?1, ?2)
     ON CONFLICT (games_id) DO UPDATE SET host_id = excluded.host_id",
    params![games_id, host_id],
  )?;
  Ok(Some(host))
}
