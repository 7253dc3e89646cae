pub mod admin;
pub mod creator;
pub mod student;

pub use admin::AdminDashboard;
pub use creator::CreatorDashboard;
pub use student::StudentDashboard;
