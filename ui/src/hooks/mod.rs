pub mod use_api_checker;
pub mod use_page;
