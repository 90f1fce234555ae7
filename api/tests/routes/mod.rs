mod checkin_test;
mod guard_test;
mod health_test;
mod lessons_test;
