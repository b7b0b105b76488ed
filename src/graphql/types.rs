use async_graphql::*;
use std::sync::Arc;

use crate::model::{Course, Grade, NewCourse, NewGrade, NewStudent, Student};
use crate::store::SchoolStore;

fn store<'a>(ctx: &Context<'a>) -> Result<&'a Arc<dyn SchoolStore>> {
    ctx.data::<Arc<dyn SchoolStore>>()
}

#[ComplexObject]
impl Course {
    /// Students enrolled in this course
    async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        Ok(store(ctx)?.students_in_course(self.id).await)
    }
}

#[ComplexObject]
impl Student {
    /// Grades given to this student
    async fn grades(&self, ctx: &Context<'_>) -> Result<Vec<Grade>> {
        Ok(store(ctx)?.grades_for_student(self.id).await)
    }
}

#[ComplexObject]
impl Grade {
    /// The graded student, or null if it no longer exists
    async fn student(&self, ctx: &Context<'_>) -> Result<Option<Student>> {
        Ok(store(ctx)?.student(self.student_id).await)
    }
}

/// Root Query
pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    /// List of All Courses
    #[graphql(name = "Courses")]
    pub async fn courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>> {
        Ok(store(ctx)?.courses().await)
    }

    /// List of All Students
    #[graphql(name = "Students")]
    pub async fn students(&self, ctx: &Context<'_>) -> Result<Vec<Student>> {
        Ok(store(ctx)?.students().await)
    }

    /// List of All Grades
    #[graphql(name = "Grades")]
    pub async fn grades(&self, ctx: &Context<'_>) -> Result<Vec<Grade>> {
        Ok(store(ctx)?.grades().await)
    }

    /// Particular Course
    #[graphql(name = "Course")]
    pub async fn course(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Course>> {
        let store = store(ctx)?;
        Ok(match id {
            Some(id) => store.course(id).await,
            None => None,
        })
    }

    /// Particular Student
    #[graphql(name = "Student")]
    pub async fn student(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Student>> {
        let store = store(ctx)?;
        Ok(match id {
            Some(id) => store.student(id).await,
            None => None,
        })
    }

    /// Particular Grade
    #[graphql(name = "Grade")]
    pub async fn grade(&self, ctx: &Context<'_>, id: Option<i32>) -> Result<Option<Grade>> {
        let store = store(ctx)?;
        Ok(match id {
            Some(id) => store.grade(id).await,
            None => None,
        })
    }
}

/// Root Mutation
pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    /// Add a course
    pub async fn add_course(
        &self,
        ctx: &Context<'_>,
        name: String,
        description: String,
    ) -> Result<Course> {
        store(ctx)?
            .insert_course(NewCourse { name, description })
            .await
            .map_err(|e| Error::new(e.to_string()))
    }

    /// Add a student
    pub async fn add_student(
        &self,
        ctx: &Context<'_>,
        name: String,
        lastname: String,
        course_id: i32,
    ) -> Result<Student> {
        store(ctx)?
            .insert_student(NewStudent {
                name,
                lastname,
                course_id,
            })
            .await
            .map_err(|e| Error::new(e.to_string()))
    }

    /// Add a grade
    pub async fn add_grade(
        &self,
        ctx: &Context<'_>,
        course_id: i32,
        student_id: i32,
        grade: i32,
    ) -> Result<Grade> {
        store(ctx)?
            .insert_grade(NewGrade {
                course_id,
                student_id,
                grade,
            })
            .await
            .map_err(|e| Error::new(e.to_string()))
    }

    /// Delete a Course
    pub async fn delete_course(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<Course>> {
        Ok(store(ctx)?.remove_course(id).await)
    }

    /// Delete a Student
    pub async fn delete_student(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<Student>> {
        Ok(store(ctx)?.remove_student(id).await)
    }

    /// Delete a Grade
    pub async fn delete_grade(&self, ctx: &Context<'_>, id: i32) -> Result<Vec<Grade>> {
        Ok(store(ctx)?.remove_grade(id).await)
    }
}
