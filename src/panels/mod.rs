mod toolbar;

pub use toolbar::Toolbar;
