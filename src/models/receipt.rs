use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

use super::film::format_rupiah;

// Итог успешного подтверждения брони
#[derive(Debug, Clone, Serialize)]
pub struct Receipt {
    pub id: Uuid,
    pub film_id: i64,
    pub film_title: String,
    pub seats: Vec<usize>,
    pub seat_labels: Vec<String>,
    pub unit_price: i64,
    pub total: i64,
    pub issued_at: NaiveDateTime,
}

impl Receipt {
    pub fn summary(&self) -> String {
        format!(
            "Film: {} | Seats: {} | Total: {}",
            self.film_title,
            self.seat_labels.join(", "),
            format_rupiah(self.total)
        )
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn summary_lists_labels_and_total() {
        let receipt = Receipt {
            id: Uuid::new_v4(),
            film_id: 2,
            film_title: "Guna Guna Istri Muda".to_string(),
            seats: vec![0, 1, 2],
            seat_labels: vec!["K1".into(), "K2".into(), "K3".into()],
            unit_price: 50_000,
            total: 150_000,
            issued_at: Utc::now().naive_utc(),
        };
        assert_eq!(
            receipt.summary(),
            "Film: Guna Guna Istri Muda | Seats: K1, K2, K3 | Total: Rp150,000"
        );
    }
}
