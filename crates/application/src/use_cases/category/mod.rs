pub mod create_category;
