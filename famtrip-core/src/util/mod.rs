pub mod country;
pub mod debounce;
