use paralympics_core::chart::ChartRow;
use rusqlite::Connection;

use crate::encode::parsed;

/// Inner join: only editions with a host whose country resolves produce a
/// row.
pub fn select_all(conn: &Connection) -> rusqlite::Result<Vec<ChartRow>> {
  let mut stmt = conn.prepare(
    "SELECT c.country_name, g.event_type, g.year, h.place_name,
            g.events, g.sports, g.countries,
            g.participants_m, g.participants_f, g.participants,
            g.start_date, g.end_date, h.latitude, h.longitude
     FROM games g
     JOIN games_host gh ON gh.games_id = g.id
     JOIN hosts h       ON h.id = gh.host_id
     JOIN countries c   ON c.id = h.country_id
     ORDER BY g.year, g.id",
  )?;
  let rows = stmt
    .query_map([], |row| {
      Ok(ChartRow {
        country_name:   row.get(0)?,
        event_type:     parsed(row, 1)?,
        year:           row.get(2)?,
        place_name:     row.get(3)?,
        events:         row.get(4)?,
        sports:         row.get(5)?,
        countries:      row.get(6)?,
        participants_m: row.get(7)?,
        participants_f: row.get(8)?,
        participants:   row.get(9)?,
        start_date:     row.get(10)?,
        end_date:       row.get(11)?,
        latitude:       row.get(12)?,
        longitude:      row.get(13)?,
      })
    })?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}
