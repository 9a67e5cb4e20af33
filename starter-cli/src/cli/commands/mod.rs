pub mod check_updates;
pub mod create_super_admin;
