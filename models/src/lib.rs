pub mod cells;
pub mod internet;
pub mod modem;
pub mod schema;
pub mod system;
