pub const ALL_COURSES_QUERY: &str = r#"
    {
        Courses {
            id
            name
            description
        }
    }
"#;

pub const COURSE_QUERY: &str = r#"
    query Course($id: Int) {
        Course(id: $id) {
            id
            name
            description
            students {
                id
                name
                lastname
            }
        }
    }
"#;

pub const STUDENT_QUERY: &str = r#"
    query Student($id: Int) {
        Student(id: $id) {
            id
            name
            lastname
            courseId
            grades {
                id
                courseId
                studentId
                grade
            }
        }
    }
"#;

pub const ALL_GRADES_QUERY: &str = r#"
    {
        Grades {
            id
            grade
            student {
                id
                name
            }
        }
    }
"#;

pub const ADD_COURSE_MUTATION: &str = r#"
    mutation AddCourse($name: String!, $description: String!) {
        addCourse(name: $name, description: $description) {
            id
            name
            description
        }
    }
"#;

pub const ADD_STUDENT_MUTATION: &str = r#"
    mutation AddStudent($name: String!, $lastname: String!, $courseId: Int!) {
        addStudent(name: $name, lastname: $lastname, courseId: $courseId) {
            id
            name
            lastname
            courseId
        }
    }
"#;

pub const ADD_GRADE_MUTATION: &str = r#"
    mutation AddGrade($courseId: Int!, $studentId: Int!, $grade: Int!) {
        addGrade(courseId: $courseId, studentId: $studentId, grade: $grade) {
            id
            courseId
            studentId
            grade
        }
    }
"#;

pub const DELETE_COURSE_MUTATION: &str = r#"
    mutation DeleteCourse($id: Int!) {
        deleteCourse(id: $id) {
            id
        }
    }
"#;

pub const DELETE_STUDENT_MUTATION: &str = r#"
    mutation DeleteStudent($id: Int!) {
        deleteStudent(id: $id) {
            id
            name
        }
    }
"#;

pub const DELETE_GRADE_MUTATION: &str = r#"
    mutation DeleteGrade($id: Int!) {
        deleteGrade(id: $id) {
            id
        }
    }
"#;
