mod compose;

pub use compose::compose_row;
