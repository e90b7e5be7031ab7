use serde::Serialize;

use crate::config::PricingConfig;
use crate::error::BookingError;
use crate::models::film::{format_rupiah, Film, FilmKind};

// Афиша сеанса: упорядоченный список фильмов, собирается один раз на старте
// и дальше не меняется
#[derive(Debug, Clone)]
pub struct Catalog {
    films: Vec<Film>,
    pricing: PricingConfig,
}

// Карточка фильма для слоя представления
#[derive(Debug, Clone, Serialize)]
pub struct FilmOption {
    pub id: i64,
    pub title: String,
    pub kind_label: &'static str,
    pub price: i64,
    pub price_display: String,
}

impl Catalog {
    pub fn new(films: Vec<Film>, pricing: PricingConfig) -> Self {
        Self { films, pricing }
    }

    // Афиша демонстрационного сеанса
    pub fn with_default_films(pricing: &PricingConfig) -> Self {
        let base = pricing.base_price;
        Self::new(
            vec![
                Film::new(1, "Avatar Fire And Rush", FilmKind::Standard, base, 100),
                Film::new(2, "Guna Guna Istri Muda", FilmKind::Premium, base, 140),
                Film::new(3, "Penjara Kematian", FilmKind::Standard, base, 120),
            ],
            pricing.clone(),
        )
    }

    pub fn list_films(&self) -> &[Film] {
        &self.films
    }

    pub fn find(&self, film_id: i64) -> Result<&Film, BookingError> {
        self.films
            .iter()
            .find(|f| f.id == film_id)
            .ok_or(BookingError::UnknownFilm { id: film_id })
    }

    // Чистая функция цены: база плюс наценка за вид показа
    pub fn price_of(&self, film_id: i64) -> Result<i64, BookingError> {
        let film = self.find(film_id)?;
        Ok(film.base_price + film.kind.surcharge(self.pricing.premium_surcharge))
    }

    pub fn film_options(&self) -> Vec<FilmOption> {
        self.films
            .iter()
            .map(|film| {
                let price = film.base_price + film.kind.surcharge(self.pricing.premium_surcharge);
                FilmOption {
                    id: film.id,
                    title: film.title.clone(),
                    kind_label: film.kind.label(),
                    price,
                    price_display: format_rupiah(price),
                }
            })
            .collect()
    }

    pub(crate) fn first_film_id(&self) -> i64 {
        self.films.first().map_or(0, |f| f.id)
    }
}
