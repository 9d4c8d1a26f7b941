pub mod flows;
pub mod models;
pub mod prompter;
#[cfg(test)]
mod tests;
