pub mod attendance;
pub mod class;
pub mod ip_registration;
pub mod lesson;
pub mod lesson_token;
pub mod student;

pub use attendance::Entity as Attendance;
pub use class::Entity as Class;
pub use ip_registration::Entity as IpRegistration;
pub use lesson::Entity as Lesson;
pub use lesson_token::Entity as LessonToken;
pub use student::Entity as Student;
