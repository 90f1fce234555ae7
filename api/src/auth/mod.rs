pub mod guards;
pub mod middleware;
