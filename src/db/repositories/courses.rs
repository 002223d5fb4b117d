//! Course queries.

use sqlx::PgPool;

use crate::error::ApiError;
use crate::models::{Course, CreateCourseRequest};

#[derive(Debug, Clone)]
pub struct CourseRepository {
    pool: PgPool,
}

impl CourseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All courses, in whatever order the store returns them.
    pub async fn list(&self) -> Result<Vec<Course>, ApiError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT id, title, description, department FROM courses",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    /// Insert a course unconditionally. The created row is not returned.
    pub async fn create(&self, request: CreateCourseRequest) -> Result<(), ApiError> {
        sqlx::query("INSERT INTO courses (title, description, department) VALUES ($1, $2, $3)")
            .bind(request.title)
            .bind(request.description)
            .bind(request.department)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Courses the given user is enrolled in.
    ///
    /// A missing user id binds as SQL NULL, which matches no enrollment row,
    /// so the result is an empty list.
    pub async fn list_enrolled(&self, user_id: Option<i64>) -> Result<Vec<Course>, ApiError> {
        let courses = sqlx::query_as::<_, Course>(
            "SELECT c.id, c.title, c.description, c.department \
             FROM courses c \
             JOIN enrollments e ON c.id = e.course_id \
             WHERE e.user_id = $1",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }
}
