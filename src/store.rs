use crate::model::{Course, Grade, NewCourse, NewGrade, NewStudent, Record, Student};
use crate::seed::SeedData;
use async_trait::async_trait;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// Errors returned by store mutations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Course {0} does not exist")]
    MissingCourse(i32),

    #[error("Student {0} does not exist")]
    MissingStudent(i32),

    /// The id counter of a collection would overflow a GraphQL `Int`.
    #[error("No ids left in the {0} collection")]
    IdExhausted(&'static str),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// How foreign keys are treated by mutations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityMode {
    /// Reject inserts with dangling references and cascade deletes.
    #[default]
    Strict,
    /// Accept any reference and leave orphans behind on delete.
    Lenient,
}

/// Data access used by the GraphQL resolvers.
///
/// Lookups never fail: a missing record is `None` (or an empty list).
/// Removals return the remaining collection whether or not anything matched.
#[async_trait]
pub trait SchoolStore: Send + Sync {
    async fn courses(&self) -> Vec<Course>;
    async fn course(&self, id: i32) -> Option<Course>;
    async fn insert_course(&self, course: NewCourse) -> StoreResult<Course>;
    /// Under [`IntegrityMode::Strict`] this also removes the course's
    /// students, every grade of those students, and every grade recorded
    /// against the course even when the graded student belongs elsewhere.
    async fn remove_course(&self, id: i32) -> Vec<Course>;

    async fn students(&self) -> Vec<Student>;
    async fn student(&self, id: i32) -> Option<Student>;
    async fn students_in_course(&self, course_id: i32) -> Vec<Student>;
    async fn insert_student(&self, student: NewStudent) -> StoreResult<Student>;
    /// Under [`IntegrityMode::Strict`] this also removes the student's grades.
    async fn remove_student(&self, id: i32) -> Vec<Student>;

    async fn grades(&self) -> Vec<Grade>;
    async fn grade(&self, id: i32) -> Option<Grade>;
    async fn grades_for_student(&self, student_id: i32) -> Vec<Grade>;
    async fn insert_grade(&self, grade: NewGrade) -> StoreResult<Grade>;
    async fn remove_grade(&self, id: i32) -> Vec<Grade>;
}

/// An ordered set of records with its own id counter.
///
/// The counter only moves forward, so ids freed by a removal are never
/// handed out again.
#[derive(Debug, Clone)]
pub struct Collection<T> {
    name: &'static str,
    records: Vec<T>,
    next_id: i64,
}

impl<T: Record> Collection<T> {
    pub fn new(name: &'static str, records: Vec<T>) -> Self {
        let next_id = records
            .iter()
            .map(|r| i64::from(r.record_id()) + 1)
            .max()
            .map_or(1, |next| next.max(1));
        Self {
            name,
            records,
            next_id,
        }
    }

    pub fn list(&self) -> Vec<T> {
        self.records.clone()
    }

    pub fn get(&self, id: i32) -> Option<T> {
        self.records.iter().find(|r| r.record_id() == id).cloned()
    }

    pub fn contains(&self, id: i32) -> bool {
        self.records.iter().any(|r| r.record_id() == id)
    }

    pub fn filter<F>(&self, predicate: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.records.iter().filter(|r| predicate(r)).cloned().collect()
    }

    /// Builds a record from the next id and appends it.
    pub fn push_with<F>(&mut self, build: F) -> StoreResult<T>
    where
        F: FnOnce(i32) -> T,
    {
        let id = i32::try_from(self.next_id).map_err(|_| StoreError::IdExhausted(self.name))?;
        let record = build(id);
        self.records.push(record.clone());
        self.next_id += 1;
        Ok(record)
    }

    /// Removes every record matching `predicate`, keeping the order of the rest.
    /// Returns how many were removed.
    pub fn remove_where<F>(&mut self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let before = self.records.len();
        self.records.retain(|r| !predicate(r));
        before - self.records.len()
    }
}

#[derive(Debug)]
struct Tables {
    courses: Collection<Course>,
    students: Collection<Student>,
    grades: Collection<Grade>,
}

/// Process-lifetime store holding all three collections behind one lock.
#[derive(Debug)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
    integrity: IntegrityMode,
}

impl InMemoryStore {
    pub fn new(seed: SeedData, integrity: IntegrityMode) -> Self {
        let SeedData {
            courses,
            students,
            grades,
        } = seed;
        Self {
            tables: RwLock::new(Tables {
                courses: Collection::new("course", courses),
                students: Collection::new("student", students),
                grades: Collection::new("grade", grades),
            }),
            integrity,
        }
    }

    pub fn integrity(&self) -> IntegrityMode {
        self.integrity
    }

    fn strict(&self) -> bool {
        self.integrity == IntegrityMode::Strict
    }
}

#[async_trait]
impl SchoolStore for InMemoryStore {
    async fn courses(&self) -> Vec<Course> {
        self.tables.read().await.courses.list()
    }

    async fn course(&self, id: i32) -> Option<Course> {
        debug!("Looking up course {}", id);
        self.tables.read().await.courses.get(id)
    }

    async fn insert_course(&self, course: NewCourse) -> StoreResult<Course> {
        let mut tables = self.tables.write().await;
        let course = tables.courses.push_with(|id| course.into_record(id))?;
        info!("Added course {} ({})", course.id, course.name);
        Ok(course)
    }

    /// Strict cascade: students with `course_id == id`, their grades, and any
    /// grade with `course_id == id`.
    async fn remove_course(&self, id: i32) -> Vec<Course> {
        let mut tables = self.tables.write().await;
        let removed = tables.courses.remove_where(|c| c.id == id);
        if removed > 0 && self.strict() {
            let student_ids: Vec<i32> = tables
                .students
                .filter(|s| s.course_id == id)
                .iter()
                .map(|s| s.id)
                .collect();
            let students = tables.students.remove_where(|s| s.course_id == id);
            let grades = tables
                .grades
                .remove_where(|g| g.course_id == id || student_ids.contains(&g.student_id));
            info!(
                "Deleted course {} with {} students and {} grades",
                id, students, grades
            );
        } else if removed > 0 {
            info!("Deleted course {}", id);
        }
        tables.courses.list()
    }

    async fn students(&self) -> Vec<Student> {
        self.tables.read().await.students.list()
    }

    async fn student(&self, id: i32) -> Option<Student> {
        debug!("Looking up student {}", id);
        self.tables.read().await.students.get(id)
    }

    async fn students_in_course(&self, course_id: i32) -> Vec<Student> {
        self.tables
            .read()
            .await
            .students
            .filter(|s| s.course_id == course_id)
    }

    async fn insert_student(&self, student: NewStudent) -> StoreResult<Student> {
        let mut tables = self.tables.write().await;
        if self.strict() && !tables.courses.contains(student.course_id) {
            return Err(StoreError::MissingCourse(student.course_id));
        }
        let student = tables.students.push_with(|id| student.into_record(id))?;
        info!(
            "Added student {} ({} {}) to course {}",
            student.id, student.name, student.lastname, student.course_id
        );
        Ok(student)
    }

    async fn remove_student(&self, id: i32) -> Vec<Student> {
        let mut tables = self.tables.write().await;
        let removed = tables.students.remove_where(|s| s.id == id);
        if removed > 0 && self.strict() {
            let grades = tables.grades.remove_where(|g| g.student_id == id);
            info!("Deleted student {} with {} grades", id, grades);
        } else if removed > 0 {
            info!("Deleted student {}", id);
        }
        tables.students.list()
    }

    async fn grades(&self) -> Vec<Grade> {
        self.tables.read().await.grades.list()
    }

    async fn grade(&self, id: i32) -> Option<Grade> {
        debug!("Looking up grade {}", id);
        self.tables.read().await.grades.get(id)
    }

    async fn grades_for_student(&self, student_id: i32) -> Vec<Grade> {
        self.tables
            .read()
            .await
            .grades
            .filter(|g| g.student_id == student_id)
    }

    async fn insert_grade(&self, grade: NewGrade) -> StoreResult<Grade> {
        let mut tables = self.tables.write().await;
        if self.strict() {
            if !tables.courses.contains(grade.course_id) {
                return Err(StoreError::MissingCourse(grade.course_id));
            }
            if !tables.students.contains(grade.student_id) {
                return Err(StoreError::MissingStudent(grade.student_id));
            }
        }
        let grade = tables.grades.push_with(|id| grade.into_record(id))?;
        info!(
            "Added grade {} for student {} in course {}",
            grade.id, grade.student_id, grade.course_id
        );
        Ok(grade)
    }

    async fn remove_grade(&self, id: i32) -> Vec<Grade> {
        let mut tables = self.tables.write().await;
        if tables.grades.remove_where(|g| g.id == id) > 0 {
            info!("Deleted grade {}", id);
        }
        tables.grades.list()
    }
}
