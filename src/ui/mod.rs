pub mod diff_view;
pub mod input_panel;
pub mod toolbar;
pub mod viewport;
