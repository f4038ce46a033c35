pub mod clock;
pub mod theme_toggle;
