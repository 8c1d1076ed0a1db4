use trivia_core::model::{CategoryId, Question, QuestionId};

use super::SqliteRepository;
use super::mapping::{
    category_id_to_i64, map_question_row, question_id_from_i64, question_id_to_i64,
};
use crate::repository::{NewQuestionRecord, QuestionRepository, StorageError};

#[async_trait::async_trait]
impl QuestionRepository for SqliteRepository {
    async fn insert_question(
        &self,
        record: NewQuestionRecord,
    ) -> Result<QuestionId, StorageError> {
        let res = sqlx::query(
            r"
            INSERT INTO questions (question, answer, category_id, difficulty)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(record.question)
        .bind(record.answer)
        .bind(category_id_to_i64(record.category)?)
        .bind(i64::from(record.difficulty))
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        question_id_from_i64(res.last_insert_rowid())
    }

    async fn delete_question(&self, id: QuestionId) -> Result<Option<Question>, StorageError> {
        let id = question_id_to_i64(id)?;

        // Fetch and delete under one transaction so the returned value is
        // exactly the row that was removed.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        let row = sqlx::query(
            r"
            SELECT id, question, answer, category_id, difficulty
            FROM questions
            WHERE id = ?1
            ",
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let Some(row) = row else {
            return Ok(None);
        };
        let question = map_question_row(&row)?;

        sqlx::query("DELETE FROM questions WHERE id = ?1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| StorageError::Connection(e.to_string()))?;

        Ok(Some(question))
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, question, answer, category_id, difficulty
            FROM questions
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            questions.push(map_question_row(&row)?);
        }
        Ok(questions)
    }

    async fn list_questions_by_category(
        &self,
        category: CategoryId,
    ) -> Result<Vec<Question>, StorageError> {
        let rows = sqlx::query(
            r"
            SELECT id, question, answer, category_id, difficulty
            FROM questions
            WHERE category_id = ?1
            ORDER BY id ASC
            ",
        )
        .bind(category_id_to_i64(category)?)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            questions.push(map_question_row(&row)?);
        }
        Ok(questions)
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StorageError> {
        if term.trim().is_empty() {
            return self.list_questions().await;
        }

        // instr() keeps the term verbatim; LIKE would give % and _ special
        // meaning.
        let rows = sqlx::query(
            r"
            SELECT id, question, answer, category_id, difficulty
            FROM questions
            WHERE instr(lower(question), lower(?1)) > 0
            ORDER BY id ASC
            ",
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StorageError::Connection(e.to_string()))?;

        let mut questions = Vec::with_capacity(rows.len());
        for row in rows {
            questions.push(map_question_row(&row)?);
        }
        Ok(questions)
    }
}
