mod io;

pub use io::{load_policy, save_policy};
