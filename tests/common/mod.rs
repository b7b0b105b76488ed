//! Shared fixtures for the gradebook integration tests.

#![allow(dead_code)]

use async_graphql::{Request, Variables};
use gradebook::graphql::{build_schema, AppSchema};
use gradebook::model::{Course, Grade, Student};
use gradebook::seed::SeedData;
use gradebook::{InMemoryStore, IntegrityMode, SchoolStore};
use serde_json::Value;
use std::sync::Arc;

pub fn course(id: i32, name: &str) -> Course {
    Course {
        id,
        name: name.to_string(),
        description: format!("About {}", name),
    }
}

pub fn student(id: i32, name: &str, course_id: i32) -> Student {
    Student {
        id,
        name: name.to_string(),
        lastname: "Tester".to_string(),
        course_id,
    }
}

pub fn grade(id: i32, course_id: i32, student_id: i32, value: i32) -> Grade {
    Grade {
        id,
        course_id,
        student_id,
        grade: value,
    }
}

/// Two courses, three students, four grades, all references valid.
pub fn sample_seed() -> SeedData {
    SeedData {
        courses: vec![course(1, "Math"), course(2, "History")],
        students: vec![
            student(1, "Ana", 1),
            student(2, "Luis", 1),
            student(3, "Sofia", 2),
        ],
        grades: vec![
            grade(1, 1, 1, 90),
            grade(2, 1, 2, 75),
            grade(3, 2, 3, 88),
            grade(4, 1, 1, 60),
        ],
    }
}

pub fn schema_with(seed: SeedData, integrity: IntegrityMode) -> AppSchema {
    gradebook::logging::init_for_tests();
    let store: Arc<dyn SchoolStore> = Arc::new(InMemoryStore::new(seed, integrity));
    build_schema(store)
}

/// Execute `query` and return `data` as JSON, panicking on GraphQL errors.
pub async fn run(schema: &AppSchema, query: &str, variables: Value) -> Value {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    assert!(
        response.errors.is_empty(),
        "unexpected errors: {:?}",
        response.errors
    );
    response.data.into_json().unwrap()
}

/// Execute `query` and return the error messages it produced.
pub async fn run_err(schema: &AppSchema, query: &str, variables: Value) -> Vec<String> {
    let response = schema
        .execute(Request::new(query).variables(Variables::from_json(variables)))
        .await;
    response.errors.into_iter().map(|e| e.message).collect()
}

pub fn ids(list: &Value) -> Vec<i64> {
    list.as_array()
        .unwrap()
        .iter()
        .map(|item| item["id"].as_i64().unwrap())
        .collect()
}
