mod declarations;

pub use declarations::*;
