pub mod attendance;
pub mod curriculum;
pub mod score;
pub mod student;
pub mod volunteer;
