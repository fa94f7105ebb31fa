//! Contact message database operations

use chrono::{NaiveDateTime, Utc};

use super::super::{Database, StoreError};
use crate::models::ContactMessage;

impl Database {
    /// Insert a submission and return the stored row.
    ///
    /// `created_at` is left to the schema default so the timestamp is
    /// assigned by the store at insertion time. Field content is stored
    /// exactly as submitted.
    pub fn save_message(
        &self,
        name: &str,
        email: &str,
        message: &str,
    ) -> Result<ContactMessage, StoreError> {
        let guard = self.conn.lock().unwrap();
        let conn = guard.as_ref().ok_or(StoreError::NotConnected)?;

        conn.execute(
            "INSERT INTO contact_messages (name, email, message) VALUES (?1, ?2, ?3)",
            rusqlite::params![name, email, message],
        )?;

        let id = conn.last_insert_rowid();

        let mut stmt = conn.prepare(
            "SELECT id, name, email, message, created_at
             FROM contact_messages WHERE id = ?1",
        )?;
        let saved = stmt.query_row([id], Self::row_to_contact_message)?;

        Ok(saved)
    }

    fn row_to_contact_message(row: &rusqlite::Row) -> rusqlite::Result<ContactMessage> {
        let created_at_str: String = row.get(4)?;

        Ok(ContactMessage {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            message: row.get(3)?,
            // datetime('now') stores UTC as "YYYY-MM-DD HH:MM:SS"
            created_at: NaiveDateTime::parse_from_str(&created_at_str, "%Y-%m-%d %H:%M:%S")
                .map(|dt| dt.and_utc())
                .unwrap_or_else(|_| Utc::now()),
        })
    }
}
