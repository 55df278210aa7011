mod hostname;

pub use hostname::*;
