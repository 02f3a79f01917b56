pub mod window;


pub use window::last_value_window;
