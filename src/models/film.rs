use serde::{Deserialize, Serialize};

// Вид показа определяет наценку; обычный сеанс идет по базовой цене
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilmKind {
    Standard,
    Premium,
}

impl FilmKind {
    pub fn label(&self) -> &'static str {
        match self {
            FilmKind::Standard => "2D Regular",
            FilmKind::Premium => "3D Premium",
        }
    }

    pub fn surcharge(&self, premium_surcharge: i64) -> i64 {
        match self {
            FilmKind::Standard => 0,
            FilmKind::Premium => premium_surcharge,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Film {
    pub id: i64,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: FilmKind,
    pub base_price: i64,
    pub duration_min: u32,
}

impl Film {
    pub fn new(
        id: i64,
        title: impl Into<String>,
        kind: FilmKind,
        base_price: i64,
        duration_min: u32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            kind,
            base_price,
            duration_min,
        }
    }

    // Строка для шапки афиши: "Название (3D Premium)"
    pub fn info(&self) -> String {
        format!("{} ({})", self.title, self.kind.label())
    }
}

// Цена с разделителями тысяч: 35000 -> "Rp35,000"
pub fn format_rupiah(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if amount < 0 {
        format!("-Rp{grouped}")
    } else {
        format!("Rp{grouped}")
    }
}
