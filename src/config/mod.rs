use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub hall: HallConfig,
    pub pricing: PricingConfig,
    pub splash: SplashConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub environment: String,
    pub rust_log: String,
}

// Настройки зала: фиксированная сетка мест
#[derive(Debug, Clone, Deserialize)]
pub struct HallConfig {
    pub seat_count: usize,
    pub seats_per_row: usize,
}

// Настройки ценообразования: базовая цена и наценка за 3D
#[derive(Debug, Clone, Deserialize)]
pub struct PricingConfig {
    pub base_price: i64,
    pub premium_surcharge: i64,
}

// Настройки заставки
#[derive(Debug, Clone, Deserialize)]
pub struct SplashConfig {
    pub delay_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_booking=debug".to_string()),
            },
            hall: HallConfig {
                seat_count: env::var("SEAT_COUNT")
                    .unwrap_or_else(|_| "25".to_string())
                    .parse()
                    .expect("SEAT_COUNT must be a valid number"),
                seats_per_row: env::var("SEATS_PER_ROW")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .expect("SEATS_PER_ROW must be a valid number"),
            },
            pricing: PricingConfig {
                base_price: env::var("BASE_PRICE")
                    .unwrap_or_else(|_| "35000".to_string())
                    .parse()
                    .expect("BASE_PRICE must be a valid number"),
                premium_surcharge: env::var("PREMIUM_SURCHARGE")
                    .unwrap_or_else(|_| "15000".to_string())
                    .parse()
                    .expect("PREMIUM_SURCHARGE must be a valid number"),
            },
            splash: SplashConfig {
                delay_ms: env::var("SPLASH_DELAY_MS")
                    .unwrap_or_else(|_| "2500".to_string())
                    .parse()
                    .expect("SPLASH_DELAY_MS must be a valid number"),
            },
        }
    }
}
