mod page_view;
pub mod view;

pub use view::Dashboard;
