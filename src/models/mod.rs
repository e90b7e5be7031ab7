pub mod film;
pub mod receipt;
pub mod seat;

pub use film::{Film, FilmKind};
pub use receipt::Receipt;
pub use seat::SeatStatus;
