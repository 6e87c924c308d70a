use paralympics_core::quiz::{
  NewQuestion, NewResponse, Question, QuestionPatch, Response, ResponsePatch,
};
use rusqlite::{Connection, OptionalExtension as _, Row, params};

// ─── Questions ───────────────────────────────────────────────────────────────

fn question_from_row(row: &Row<'_>) -> rusqlite::Result<Question> {
  Ok(Question { id: row.get(0)?, question_text: row.get(1)? })
}

pub fn select_question(conn: &Connection, id: i64) -> rusqlite::Result<Option<Question>> {
  conn
    .query_row(
      "SELECT id, question_text FROM questions WHERE id = ?1",
      params![id],
      question_from_row,
    )
    .optional()
}

pub fn select_questions(conn: &Connection) -> rusqlite::Result<Vec<Question>> {
  let mut stmt = conn.prepare("SELECT id, question_text FROM questions ORDER BY id")?;
  let rows = stmt
    .query_map([], question_from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

pub fn insert_question(conn: &Connection, q: NewQuestion) -> rusqlite::Result<Question> {
  conn.execute(
    "INSERT INTO questions (question_text) VALUES (?1)",
    params![q.question_text],
  )?;
  Ok(q.with_id(conn.last_insert_rowid()))
}

pub fn update_question(
  conn: &Connection,
  id: i64,
  patch: QuestionPatch,
) -> rusqlite::Result<Option<Question>> {
  let Some(current) = select_question(conn, id)? else {
    return Ok(None);
  };
  let q = current.merged(patch);
  conn.execute(
    "UPDATE questions SET question_text = ?2 WHERE id = ?1",
    params![q.id, q.question_text],
  )?;
  Ok(Some(q))
}

/// Responses go with it via `ON DELETE CASCADE`.
pub fn delete_question(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(conn.execute("DELETE FROM questions WHERE id = ?1", params![id])? > 0)
}

// ─── Responses ───────────────────────────────────────────────────────────────

fn response_from_row(row: &Row<'_>) -> rusqlite::Result<Response> {
  Ok(Response {
    id:            row.get(0)?,
    question_id:   row.get(1)?,
    response_text: row.get(2)?,
    is_correct:    row.get(3)?,
  })
}

pub fn select_response(conn: &Connection, id: i64) -> rusqlite::Result<Option<Response>> {
  conn
    .query_row(
      "SELECT id, question_id, response_text, is_correct FROM responses WHERE id = ?1",
      params![id],
      response_from_row,
    )
    .optional()
}

pub fn select_responses(conn: &Connection) -> rusqlite::Result<Vec<Response>> {
  let mut stmt = conn.prepare(
    "SELECT id, question_id, response_text, is_correct FROM responses ORDER BY id",
  )?;
  let rows = stmt
    .query_map([], response_from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(rows)
}

/// `None` distinguishes an unknown question from one without responses.
pub fn select_responses_for(
  conn: &Connection,
  question_id: i64,
) -> rusqlite::Result<Option<Vec<Response>>> {
  if select_question(conn, question_id)?.is_none() {
    return Ok(None);
  }
  let mut stmt = conn.prepare(
    "SELECT id, question_id, response_text, is_correct FROM responses
     WHERE question_id = ?1 ORDER BY id",
  )?;
  let rows = stmt
    .query_map(params![question_id], response_from_row)?
    .collect::<rusqlite::Result<Vec<_>>>()?;
  Ok(Some(rows))
}

pub fn insert_response(conn: &Connection, r: NewResponse) -> rusqlite::Result<Response> {
  conn.execute(
    "INSERT INTO responses (question_id, response_text, is_correct) VALUES (?1, ?2, ?3)",
    params![r.question_id, r.response_text, r.is_correct],
  )?;
  Ok(r.with_id(conn.last_insert_rowid()))
}

pub fn update_response(
  conn: &Connection,
  id: i64,
  patch: ResponsePatch,
) -> rusqlite::Result<Option<Response>> {
  let Some(current) = select_response(conn, id)? else {
    return Ok(None);
  };
  let r = current.merged(patch);
  conn.execute(
    "UPDATE responses SET question_id = ?2, response_text = ?3, is_correct = ?4 WHERE id = ?1",
    params![r.id, r.question_id, r.response_text, r.is_correct],
  )?;
  Ok(Some(r))
}

pub fn delete_response(conn: &Connection, id: i64) -> rusqlite::Result<bool> {
  Ok(conn.execute("DELETE FROM responses WHERE id = ?1", params![id])? > 0)
}
