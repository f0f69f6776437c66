mod components;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod dashboard;
pub use dashboard::Dashboard;

mod employees;
pub use employees::{EmployeeDetail, EmployeeList};

mod placeholder;
pub use placeholder::{Activity, Leave, Payroll};

mod settings;
pub use settings::Settings;

mod not_found;
pub use not_found::NotFound;
