// Backend API calls

pub mod users;
