mod layout;
pub use layout::{use_notice, use_page_loading, MainLayout};

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod offer;
pub use offer::Offer;
