//! UI layer: the heart burst component, its trigger button and styling

pub mod theme;
pub mod widgets;
