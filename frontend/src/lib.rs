pub mod app;
pub mod driver;
pub mod haptics;
pub mod scroll;
pub mod styles;

pub use app::App;
