pub mod console;
pub mod drivers;
pub mod wizard;
