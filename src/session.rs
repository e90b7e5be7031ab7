use std::collections::BTreeSet;

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::HallConfig;
use crate::error::BookingError;
use crate::ledger::SeatLedger;
use crate::models::film::format_rupiah;
use crate::models::receipt::Receipt;
use crate::models::seat::{seat_label, SeatStatus, SeatView};

// Сеанс бронирования: журнал мест, текущий выбор и активный фильм.
// Передается явно через операции, глобального состояния нет.
#[derive(Debug, Clone)]
pub struct BookingSession {
    ledger: SeatLedger,
    selection: BTreeSet<usize>,
    active_film: i64,
    seats_per_row: usize,
}

impl BookingSession {
    pub fn new(catalog: &Catalog, hall: &HallConfig) -> Self {
        Self {
            ledger: SeatLedger::new(hall.seat_count),
            selection: BTreeSet::new(),
            active_film: catalog.first_film_id(),
            seats_per_row: hall.seats_per_row.max(1),
        }
    }

    pub fn ledger(&self) -> &SeatLedger {
        &self.ledger
    }

    pub fn active_film(&self) -> i64 {
        self.active_film
    }

    pub fn selected_seats(&self) -> Vec<usize> {
        self.selection.iter().copied().collect()
    }

    pub fn seat_status(&self, index: usize) -> Result<SeatStatus, BookingError> {
        if self.ledger.is_sold(index)? {
            Ok(SeatStatus::Sold)
        } else if self.selection.contains(&index) {
            Ok(SeatStatus::Selected)
        } else {
            Ok(SeatStatus::Available)
        }
    }

    // AVAILABLE -> SELECTED; повторный select уже выбранного места - no-op
    pub fn select(&mut self, index: usize) -> Result<(), BookingError> {
        if self.ledger.is_sold(index)? {
            warn!("{} is already sold, selection rejected", seat_label(index));
            return Err(BookingError::SeatTaken { index });
        }
        self.selection.insert(index);
        debug!("{} selected", seat_label(index));
        Ok(())
    }

    // SELECTED -> AVAILABLE
    pub fn deselect(&mut self, index: usize) -> Result<(), BookingError> {
        if index >= self.ledger.seat_count() {
            return Err(BookingError::UnknownSeat { index });
        }
        if self.selection.remove(&index) {
            debug!("{} deselected", seat_label(index));
        }
        Ok(())
    }

    // Клик по месту в сетке зала
    pub fn toggle(&mut self, index: usize) -> Result<SeatStatus, BookingError> {
        if self.seat_status(index)? == SeatStatus::Selected {
            self.deselect(index)?;
            Ok(SeatStatus::Available)
        } else {
            self.select(index)?;
            Ok(SeatStatus::Selected)
        }
    }

    // Смена фильма безусловно сбрасывает выбор: места общие для зала,
    // но выбор имеет смысл только относительно активного фильма
    pub fn set_active_film(&mut self, catalog: &Catalog, film_id: i64) -> Result<(), BookingError> {
        let film = catalog.find(film_id)?;
        self.active_film = film.id;
        self.selection.clear();
        debug!("active film is now '{}', selection cleared", film.title);
        Ok(())
    }

    // Фиксация брони: все выбранные места переходят в SOLD одной операцией
    pub fn confirm(&mut self, catalog: &Catalog) -> Result<Receipt, BookingError> {
        if self.selection.is_empty() {
            warn!("confirm rejected: no seats selected");
            return Err(BookingError::EmptySelection);
        }

        let film = catalog.find(self.active_film)?;
        let unit_price = catalog.price_of(film.id)?;

        // Перепроверяем перед фиксацией: ни одно место из выбора не должно
        // быть продано
        for &index in &self.selection {
            if self.ledger.is_sold(index)? {
                return Err(BookingError::SeatTaken { index });
            }
        }

        let seats: Vec<usize> = self.selection.iter().copied().collect();
        for &index in &seats {
            self.ledger.mark_sold(index)?;
        }
        self.selection.clear();

        let seat_labels: Vec<String> = seats.iter().map(|&i| seat_label(i)).collect();
        let total = seats.len() as i64 * unit_price;
        let receipt = Receipt {
            id: Uuid::new_v4(),
            film_id: film.id,
            film_title: film.title.clone(),
            seats,
            seat_labels,
            unit_price,
            total,
            issued_at: Utc::now().naive_utc(),
        };

        info!(
            "🎫 booking confirmed: {} x{} = {}",
            receipt.film_title,
            receipt.seats.len(),
            format_rupiah(receipt.total)
        );
        Ok(receipt)
    }

    // Строка состояния над сеткой: "Название (3D Premium) | Rp50,000"
    pub fn active_film_summary(&self, catalog: &Catalog) -> Result<String, BookingError> {
        let film = catalog.find(self.active_film)?;
        let price = catalog.price_of(film.id)?;
        Ok(format!("{} | {}", film.info(), format_rupiah(price)))
    }

    pub fn seat_map(&self) -> Vec<SeatView> {
        (0..self.ledger.seat_count())
            .map(|index| SeatView {
                index,
                label: seat_label(index),
                row: (index / self.seats_per_row + 1) as u32,
                number: (index % self.seats_per_row + 1) as u32,
                status: self.seat_status(index).unwrap_or(SeatStatus::Available),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PricingConfig;
    use crate::models::film::{Film, FilmKind};

    fn catalog() -> Catalog {
        Catalog::with_default_films(&PricingConfig {
            base_price: 35_000,
            premium_surcharge: 15_000,
        })
    }

    fn hall() -> HallConfig {
        HallConfig {
            seat_count: 25,
            seats_per_row: 5,
        }
    }

    fn session(catalog: &Catalog) -> BookingSession {
        BookingSession::new(catalog, &hall())
    }

    #[test]
    fn starts_on_first_film_with_empty_selection() {
        let catalog = catalog();
        let session = session(&catalog);
        assert_eq!(session.active_film(), 1);
        assert!(session.selected_seats().is_empty());
        assert_eq!(session.ledger().sold_count(), 0);
    }

    #[test]
    fn select_and_deselect_toggle_status() {
        let catalog = catalog();
        let mut session = session(&catalog);

        session.select(3).unwrap();
        assert_eq!(session.seat_status(3).unwrap(), SeatStatus::Selected);

        session.deselect(3).unwrap();
        assert_eq!(session.seat_status(3).unwrap(), SeatStatus::Available);
    }

    #[test]
    fn select_is_idempotent() {
        let catalog = catalog();
        let mut session = session(&catalog);
        session.select(4).unwrap();
        session.select(4).unwrap();
        assert_eq!(session.selected_seats(), vec![4]);
    }

    #[test]
    fn toggle_flips_between_available_and_selected() {
        let catalog = catalog();
        let mut session = session(&catalog);
        assert_eq!(session.toggle(0).unwrap(), SeatStatus::Selected);
        assert_eq!(session.toggle(0).unwrap(), SeatStatus::Available);
        assert!(session.selected_seats().is_empty());
    }

    #[test]
    fn confirm_computes_premium_total_and_sells_seats() {
        let catalog = catalog();
        let mut session = session(&catalog);

        session.set_active_film(&catalog, 2).unwrap();
        for index in [0, 1, 2] {
            session.select(index).unwrap();
        }

        let receipt = session.confirm(&catalog).unwrap();
        assert_eq!(receipt.unit_price, 50_000);
        assert_eq!(receipt.total, 150_000);
        assert_eq!(receipt.seats, vec![0, 1, 2]);
        assert_eq!(receipt.seat_labels, vec!["K1", "K2", "K3"]);

        assert!(session.selected_seats().is_empty());
        for index in [0, 1, 2] {
            assert_eq!(session.seat_status(index).unwrap(), SeatStatus::Sold);
        }
    }

    #[test]
    fn sold_seat_cannot_be_selected_again() {
        let catalog = catalog();
        let mut session = session(&catalog);

        session.select(0).unwrap();
        session.confirm(&catalog).unwrap();

        assert_eq!(
            session.select(0).unwrap_err(),
            BookingError::SeatTaken { index: 0 }
        );
        assert!(session.selected_seats().is_empty());
        assert_eq!(session.seat_status(0).unwrap(), SeatStatus::Sold);
    }

    #[test]
    fn empty_confirm_changes_nothing() {
        let catalog = catalog();
        let mut session = session(&catalog);

        assert_eq!(
            session.confirm(&catalog).unwrap_err(),
            BookingError::EmptySelection
        );
        assert_eq!(session.ledger().sold_count(), 0);
        assert!(session
            .seat_map()
            .iter()
            .all(|s| s.status == SeatStatus::Available));
    }

    #[test]
    fn switching_film_clears_selection_without_selling() {
        let catalog = catalog();
        let mut session = session(&catalog);

        session.select(0).unwrap();
        session.select(1).unwrap();
        session.set_active_film(&catalog, 3).unwrap();

        assert!(session.selected_seats().is_empty());
        assert_eq!(session.seat_status(0).unwrap(), SeatStatus::Available);
        assert_eq!(session.seat_status(1).unwrap(), SeatStatus::Available);
    }

    #[test]
    fn switching_to_unknown_film_keeps_selection() {
        let catalog = catalog();
        let mut session = session(&catalog);

        session.select(0).unwrap();
        assert_eq!(
            session.set_active_film(&catalog, 42).unwrap_err(),
            BookingError::UnknownFilm { id: 42 }
        );
        assert_eq!(session.selected_seats(), vec![0]);
        assert_eq!(session.active_film(), 1);
    }

    #[test]
    fn seat_map_exposes_grid_coordinates() {
        let catalog = catalog();
        let session = session(&catalog);
        let map = session.seat_map();

        assert_eq!(map.len(), 25);
        assert_eq!(map[0].label, "K1");
        assert_eq!((map[0].row, map[0].number), (1, 1));
        assert_eq!((map[4].row, map[4].number), (1, 5));
        assert_eq!((map[5].row, map[5].number), (2, 1));
        assert_eq!((map[24].row, map[24].number), (5, 5));
    }

    #[test]
    fn selection_survives_only_under_active_film() {
        let catalog = Catalog::new(
            vec![
                Film::new(10, "A", FilmKind::Standard, 35_000, 90),
                Film::new(11, "B", FilmKind::Premium, 35_000, 90),
            ],
            PricingConfig {
                base_price: 35_000,
                premium_surcharge: 15_000,
            },
        );
        let mut session = BookingSession::new(&catalog, &hall());
        assert_eq!(session.active_film(), 10);

        session.select(7).unwrap();
        session.set_active_film(&catalog, 11).unwrap();
        assert!(session.selected_seats().is_empty());

        session.select(7).unwrap();
        let receipt = session.confirm(&catalog).unwrap();
        assert_eq!(receipt.film_title, "B");
        assert_eq!(receipt.total, 50_000);
    }
}
