mod observer;
mod session_rng;

pub mod snake;

pub use observer::GameObserver;
pub use session_rng::SessionRng;
