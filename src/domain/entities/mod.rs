//! # Domain Entities
//!
//! Entities owned by the three data services. The gateway never persists
//! them; it reads them through the client traits declared next to each
//! entity and forwards create/update/delete requests unchanged.
//!
//! - **Course**: capacity-bearing course offered to students
//! - **Enrollment**: a student's (assigned or waitlisted) seat request
//! - **Student**: student profile
//!
//! ## Client Traits
//!
//! Each entity has an associated client trait defining the remote operations
//! the gateway may invoke. These traits are implemented in the infrastructure
//! layer on top of the message transport.

mod course;
mod enrollment;
mod student;

pub use course::{Course, CourseChanges, CourseClient, CourseName, NewCourse};
pub use enrollment::{
    CourseCount, CourseGrade, Enrollment, EnrollmentChanges, EnrollmentClient, NewEnrollment,
};
pub use student::{NewStudent, Student, StudentChanges, StudentClient};

#[cfg(test)]
pub use course::MockCourseClient;
#[cfg(test)]
pub use enrollment::MockEnrollmentClient;
#[cfg(test)]
pub use student::MockStudentClient;
