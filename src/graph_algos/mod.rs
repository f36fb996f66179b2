
pub mod bfs;
pub mod dfs;
pub mod ucs;
pub mod depth_limited;
pub mod a_star;
mod frontier;
mod route;

pub use route::Route;
