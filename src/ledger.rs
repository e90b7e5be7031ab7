use crate::error::BookingError;

// Журнал занятости зала: фиксированный ряд мест, индексы стабильны на весь
// сеанс, продажа необратима
#[derive(Debug, Clone)]
pub struct SeatLedger {
    sold: Vec<bool>,
}

impl SeatLedger {
    pub fn new(seat_count: usize) -> Self {
        Self {
            sold: vec![false; seat_count],
        }
    }

    pub fn seat_count(&self) -> usize {
        self.sold.len()
    }

    pub fn is_sold(&self, index: usize) -> Result<bool, BookingError> {
        self.sold
            .get(index)
            .copied()
            .ok_or(BookingError::UnknownSeat { index })
    }

    pub fn sold_count(&self) -> usize {
        self.sold.iter().filter(|&&s| s).count()
    }

    // Единственный путь места в SOLD - подтверждение брони
    pub(crate) fn mark_sold(&mut self, index: usize) -> Result<(), BookingError> {
        match self.sold.get_mut(index) {
            Some(slot) => {
                *slot = true;
                Ok(())
            }
            None => Err(BookingError::UnknownSeat { index }),
        }
    }
}
