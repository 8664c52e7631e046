pub mod admin_departements;
pub mod admin_employees;
pub mod employee_detail;
pub mod home;
pub mod login;
pub mod portal;

pub use admin_departements::AdminDepartementsPage;
pub use admin_employees::AdminEmployeesPage;
pub use employee_detail::EmployeeDetailPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use portal::PortalPage;
