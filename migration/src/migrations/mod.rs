pub mod m202510180001_create_classes;
pub mod m202510180002_create_students;
pub mod m202510180003_create_lessons;
pub mod m202510180004_create_attendance;
pub mod m202510180005_create_lesson_tokens;
pub mod m202510180006_create_ip_registrations;
