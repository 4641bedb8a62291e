pub mod date_field;
pub mod entry_form;
pub mod header;
pub mod select_field;
