mod home;
mod profile;
mod supply_list;

pub use home::Home;
pub use profile::ProfilePage;
pub use supply_list::SupplyListPage;
