use async_graphql::SimpleObject;
use serde::{Deserialize, Serialize};

/// Records that live in a [`crate::store::Collection`].
///
/// The accessor is not called `id` because `SimpleObject` already derives an
/// inherent `id` resolver on every entity.
pub trait Record: Clone + Send + Sync {
    fn record_id(&self) -> i32;
}

/// Represent courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Course {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Represent students
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub lastname: String,
    /// Id of the course the student is enrolled in
    pub course_id: i32,
}

/// Represent grades
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, SimpleObject)]
#[serde(rename_all = "camelCase")]
#[graphql(complex)]
pub struct Grade {
    pub id: i32,
    pub course_id: i32,
    pub student_id: i32,
    pub grade: i32,
}

impl Record for Course {
    fn record_id(&self) -> i32 {
        self.id
    }
}

impl Record for Student {
    fn record_id(&self) -> i32 {
        self.id
    }
}

impl Record for Grade {
    fn record_id(&self) -> i32 {
        self.id
    }
}

/// Input for creating a course. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewCourse {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewStudent {
    pub name: String,
    pub lastname: String,
    pub course_id: i32,
}

#[derive(Debug, Clone)]
pub struct NewGrade {
    pub course_id: i32,
    pub student_id: i32,
    pub grade: i32,
}

impl NewCourse {
    pub fn into_record(self, id: i32) -> Course {
        Course {
            id,
            name: self.name,
            description: self.description,
        }
    }
}

impl NewStudent {
    pub fn into_record(self, id: i32) -> Student {
        Student {
            id,
            name: self.name,
            lastname: self.lastname,
            course_id: self.course_id,
        }
    }
}

impl NewGrade {
    pub fn into_record(self, id: i32) -> Grade {
        Grade {
            id,
            course_id: self.course_id,
            student_id: self.student_id,
            grade: self.grade,
        }
    }
}
