use thiserror::Error;

use crate::models::seat::seat_label;

// Все ошибки, которые видит слой представления. Занятое место и пустой
// выбор - пользовательские ситуации, устранимые повторной попыткой;
// остальные - валидация идентификаторов на границе API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    #[error("seat {} is already sold", seat_label(*index))]
    SeatTaken { index: usize },

    #[error("no seats selected")]
    EmptySelection,

    #[error("seat index {index} is out of range")]
    UnknownSeat { index: usize },

    #[error("film {id} is not in the catalog")]
    UnknownFilm { id: i64 },
}
