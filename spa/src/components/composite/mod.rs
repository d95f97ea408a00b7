pub mod language_select;
pub mod login_form;
pub mod navigation_bar;
pub mod pagination_controls;
pub mod points_table;
