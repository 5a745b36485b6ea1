pub mod app;
pub mod buy_courses;
pub mod course_card;
pub mod course_video;
pub mod loader;
pub mod navbar;
pub mod purchase_form;
pub mod search_bar;
pub mod status_message;

pub use app::App;
pub use buy_courses::BuyCourses;
pub use loader::{use_loading, Loader, LoadingStateProvider};
pub use navbar::Navbar;
