use serde::{Deserialize, Serialize};

// Статус места для отрисовки; SOLD терминальный, обратного перехода нет
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SeatStatus {
    Available,
    Selected,
    Sold,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatView {
    pub index: usize,
    pub label: String,
    pub row: u32,
    pub number: u32,
    pub status: SeatStatus,
}

// Места нумеруются с единицы: K1..K25
pub fn seat_label(index: usize) -> String {
    format!("K{}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_one_based() {
        assert_eq!(seat_label(0), "K1");
        assert_eq!(seat_label(24), "K25");
    }
}
