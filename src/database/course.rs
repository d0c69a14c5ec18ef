use crate::{
    database::{Database, StoreError},
    model::{
        assignment::AssignmentInfo,
        course::{Course, CourseInfo},
        role::Role,
        user::UserItem,
    },
};

impl Database {
    pub async fn create_course(&self, code: &str, name: &str) -> Result<Course, StoreError> {
        let mut transaction = self.pool.begin().await?;

        let course = sqlx::query_as::<_, Course>(
            "INSERT INTO courses (code, name) VALUES (?, ?)
            RETURNING id, code, name;",
        )
        .bind(code)
        .bind(name)
        .fetch_one(&mut *transaction)
        .await?;

        transaction.commit().await?;
        Ok(course)
    }

    pub async fn get_course(&self, course_id: i64) -> Result<Option<Course>, StoreError> {
        let course =
            sqlx::query_as::<_, Course>("SELECT id, code, name FROM courses WHERE id = ?;")
                .bind(course_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(course)
    }

    pub async fn get_all_courses(&self) -> Result<Vec<Course>, StoreError> {
        let courses =
            sqlx::query_as::<_, Course>("SELECT id, code, name FROM courses ORDER BY id ASC;")
                .fetch_all(&self.pool)
                .await?;

        Ok(courses)
    }

    /// Deletes a course together with its memberships and assignments, in one transaction
    pub async fn delete_course(&self, course_id: i64) -> Result<(), StoreError> {
        let mut transaction = self.pool.begin().await?;

        for role in [Role::Instructor, Role::Student] {
            sqlx::query(&format!(
                "DELETE FROM {} WHERE course_id = ?;",
                role.join_table()
            ))
            .bind(course_id)
            .execute(&mut *transaction)
            .await?;
        }

        sqlx::query("DELETE FROM assignments WHERE course_id = ?;")
            .bind(course_id)
            .execute(&mut *transaction)
            .await?;

        sqlx::query("DELETE FROM courses WHERE id = ?;")
            .bind(course_id)
            .execute(&mut *transaction)
            .await?;

        transaction.commit().await?;
        Ok(())
    }

    /// Builds the full view of `course`: assignments, instructors and students
    pub async fn get_course_info(&self, course: Course) -> Result<CourseInfo, StoreError> {
        let assignments = self
            .get_assignments_for_course(course.id)
            .await?
            .into_iter()
            .map(AssignmentInfo::from)
            .collect();

        let instructors = self
            .get_course_members(course.id, Role::Instructor)
            .await?
            .into_iter()
            .map(UserItem::from)
            .collect();

        let students = self
            .get_course_members(course.id, Role::Student)
            .await?
            .into_iter()
            .map(UserItem::from)
            .collect();

        Ok(CourseInfo {
            id: course.id,
            code: course.code,
            name: course.name,
            assignments,
            instructors,
            students,
        })
    }
}
