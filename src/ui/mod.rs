pub mod result_list;
pub mod search_field;
pub mod theme;
