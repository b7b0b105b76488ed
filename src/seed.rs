//! Seed data read once at startup.
//!
//! The data directory holds one JSON array per entity: `Courses.json`,
//! `Students.json` and `Grades.json`. Mutations never write back to these
//! files.

use crate::model::{Course, Grade, Student};
use log::{info, warn};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

pub const COURSES_FILE: &str = "Courses.json";
pub const STUDENTS_FILE: &str = "Students.json";
pub const GRADES_FILE: &str = "Grades.json";

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse seed file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The three collections as loaded from disk.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedData {
    pub courses: Vec<Course>,
    pub students: Vec<Student>,
    pub grades: Vec<Grade>,
}

impl SeedData {
    /// Loads all three seed files from `dir`. Every file must exist.
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self, SeedError> {
        let dir = dir.as_ref();
        let seed = Self {
            courses: read_collection(&dir.join(COURSES_FILE))?,
            students: read_collection(&dir.join(STUDENTS_FILE))?,
            grades: read_collection(&dir.join(GRADES_FILE))?,
        };
        info!(
            "Loaded {} courses, {} students and {} grades from {}",
            seed.courses.len(),
            seed.students.len(),
            seed.grades.len(),
            dir.display()
        );
        seed.warn_on_orphans();
        Ok(seed)
    }

    /// Records whose foreign keys point at nothing. Seeds are never rejected
    /// for this, only reported.
    pub fn orphan_count(&self) -> usize {
        let course_exists = |id: i32| self.courses.iter().any(|c| c.id == id);
        let student_exists = |id: i32| self.students.iter().any(|s| s.id == id);

        let students = self
            .students
            .iter()
            .filter(|s| !course_exists(s.course_id))
            .count();
        let grades = self
            .grades
            .iter()
            .filter(|g| !course_exists(g.course_id) || !student_exists(g.student_id))
            .count();
        students + grades
    }

    fn warn_on_orphans(&self) {
        let orphans = self.orphan_count();
        if orphans > 0 {
            warn!("Seed data contains {} records with dangling references", orphans);
        }
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, SeedError> {
    let file = File::open(path).map_err(|source| SeedError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| SeedError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
