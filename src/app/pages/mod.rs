pub mod dashboard;
pub mod device;
pub mod routes;

pub use dashboard::{Dashboard, DashboardIndex};
pub use device::{Fan, Light};
pub use routes::{App, Route};
