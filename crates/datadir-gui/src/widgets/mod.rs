/// UI widgets for the chooser dialog.

pub mod button_bar;
pub mod dir_field;
pub mod status_line;
