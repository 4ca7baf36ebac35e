pub mod errors;
pub mod db;
pub mod flight;
pub mod document;

#[cfg(test)]
mod tests;
