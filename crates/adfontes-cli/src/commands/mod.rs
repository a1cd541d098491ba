pub mod define;
pub mod prompt;
pub mod site;
