mod common;

use common::{course, ids, run, run_err, sample_seed, schema_with, student};
use gradebook::graphql::queries::{
    ADD_COURSE_MUTATION, ADD_GRADE_MUTATION, ADD_STUDENT_MUTATION, ALL_COURSES_QUERY,
    COURSE_QUERY, DELETE_COURSE_MUTATION, DELETE_GRADE_MUTATION, DELETE_STUDENT_MUTATION,
    STUDENT_QUERY,
};
use gradebook::seed::SeedData;
use gradebook::IntegrityMode;
use serde_json::json;

#[tokio::test]
async fn add_course_after_single_seed_course_gets_id_two() {
    let seed = SeedData {
        courses: vec![course(1, "Art")],
        ..Default::default()
    };
    let schema = schema_with(seed, IntegrityMode::Strict);

    let data = run(
        &schema,
        ADD_COURSE_MUTATION,
        json!({ "name": "Math", "description": "desc" }),
    )
    .await;
    assert_eq!(
        data["addCourse"],
        json!({ "id": 2, "name": "Math", "description": "desc" })
    );

    let data = run(&schema, ALL_COURSES_QUERY, json!({})).await;
    assert_eq!(data["Courses"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn new_course_has_no_students() {
    let schema = schema_with(sample_seed(), IntegrityMode::Strict);

    let data = run(
        &schema,
        ADD_COURSE_MUTATION,
        json!({ "name": "X", "description": "Y" }),
    )
    .await;
    let id = data["addCourse"]["id"].as_i64().unwrap();

    let data = run(&schema, COURSE_QUERY, json!({ "id": id })).await;
    assert_eq!(data["Course"]["name"], "X");
    assert_eq!(data["Course"]["description"], "Y");
    assert_eq!(data["Course"]["students"], json!([]));
}

#[tokio::test]
async fn delete_student_is_idempotent() {
    let schema = schema_with(sample_seed(), IntegrityMode::Strict);

    let first = run(&schema, DELETE_STUDENT_MUTATION, json!({ "id": 2 })).await;
    assert_eq!(ids(&first["deleteStudent"]), vec![1, 3]);

    let second = run(&schema, DELETE_STUDENT_MUTATION, json!({ "id": 2 })).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn deleted_student_is_no_longer_found() {
    let seed = SeedData {
        students: vec![student(1, "Ana", 1)],
        ..Default::default()
    };
    let schema = schema_with(seed, IntegrityMode::Lenient);

    let data = run(&schema, DELETE_STUDENT_MUTATION, json!({ "id": 1 })).await;
    assert_eq!(data["deleteStudent"], json!([]));

    let data = run(&schema, STUDENT_QUERY, json!({ "id": 1 })).await;
    assert!(data["Student"].is_null());
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let schema = schema_with(sample_seed(), IntegrityMode::Strict);

    run(&schema, DELETE_GRADE_MUTATION, json!({ "id": 2 })).await;
    let data = run(
        &schema,
        ADD_GRADE_MUTATION,
        json!({ "courseId": 1, "studentId": 2, "grade": 70 }),
    )
    .await;
    assert_eq!(data["addGrade"]["id"], 5);

    let data = run(&schema, "{ Grades { id } }", json!({})).await;
    assert_eq!(ids(&data["Grades"]), vec![1, 3, 4, 5]);
}

#[tokio::test]
async fn add_student_links_to_course() {
    let schema = schema_with(sample_seed(), IntegrityMode::Strict);

    let data = run(
        &schema,
        ADD_STUDENT_MUTATION,
        json!({ "name": "Marta", "lastname": "Ruiz", "courseId": 2 }),
    )
    .await;
    assert_eq!(data["addStudent"]["id"], 4);
    assert_eq!(data["addStudent"]["courseId"], 2);

    let data = run(&schema, COURSE_QUERY, json!({ "id": 2 })).await;
    assert_eq!(ids(&data["Course"]["students"]), vec![3, 4]);
}

#[tokio::test]
async fn strict_mode_rejects_dangling_foreign_keys() {
    let schema = schema_with(sample_seed(), IntegrityMode::Strict);

    let errors = run_err(
        &schema,
        ADD_STUDENT_MUTATION,
        json!({ "name": "Marta", "lastname": "Ruiz", "courseId": 9 }),
    )
    .await;
    assert_eq!(errors, vec!["Course 9 does not exist".to_string()]);

    let errors = run_err(
        &schema,
        ADD_GRADE_MUTATION,
        json!({ "courseId": 1, "studentId": 9, "grade": 70 }),
    )
    .await;
    assert_eq!(errors, vec!["Student 9 does not exist".to_string()]);

    let data = run(&schema, "{ Students { id } Grades { id } }", json!({})).await;
    assert_eq!(data["Students"].as_array().unwrap().len(), 3);
    assert_eq!(data["Grades"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn strict_mode_cascades_course_delete() {
    let schema = schema_with(sample_seed(), IntegrityMode::Strict);

    let data = run(&schema, DELETE_COURSE_MUTATION, json!({ "id": 1 })).await;
    assert_eq!(ids(&data["deleteCourse"]), vec![2]);

    let data = run(&schema, "{ Students { id } Grades { id } }", json!({})).await;
    assert_eq!(ids(&data["Students"]), vec![3]);
    assert_eq!(ids(&data["Grades"]), vec![3]);
}

#[tokio::test]
async fn lenient_mode_keeps_orphans() {
    let schema = schema_with(sample_seed(), IntegrityMode::Lenient);

    run(&schema, DELETE_COURSE_MUTATION, json!({ "id": 1 })).await;
    let data = run(&schema, "{ Students { id } }", json!({})).await;
    assert_eq!(ids(&data["Students"]), vec![1, 2, 3]);

    let data = run(
        &schema,
        ADD_STUDENT_MUTATION,
        json!({ "name": "Ghost", "lastname": "Course", "courseId": 77 }),
    )
    .await;
    assert_eq!(data["addStudent"]["courseId"], 77);
}

#[tokio::test]
async fn delete_of_unknown_id_returns_full_list() {
    let schema = schema_with(sample_seed(), IntegrityMode::Strict);

    let data = run(&schema, DELETE_COURSE_MUTATION, json!({ "id": 99 })).await;
    assert_eq!(ids(&data["deleteCourse"]), vec![1, 2]);
}

#[tokio::test]
async fn type_coercion_rejects_bad_arguments() {
    let schema = schema_with(sample_seed(), IntegrityMode::Strict);

    let errors = run_err(
        &schema,
        r#"mutation { addCourse(name: "Math") { id } }"#,
        json!({}),
    )
    .await;
    assert!(!errors.is_empty());

    let errors = run_err(
        &schema,
        r#"mutation { deleteGrade(id: "one") { id } }"#,
        json!({}),
    )
    .await;
    assert!(!errors.is_empty());

    let data = run(&schema, ALL_COURSES_QUERY, json!({})).await;
    assert_eq!(data["Courses"].as_array().unwrap().len(), 2);
}
