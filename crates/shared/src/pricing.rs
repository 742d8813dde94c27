use crate::models::SelectedSeat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceTier {
    pub tier: u32,
    pub price: u32,
    pub label: &'static str,
}

pub const PRICE_TIERS: [PriceTier; 5] = [
    PriceTier { tier: 1, price: 250, label: "Premium" },
    PriceTier { tier: 2, price: 150, label: "Gold" },
    PriceTier { tier: 3, price: 100, label: "Silver" },
    PriceTier { tier: 4, price: 75, label: "Bronze" },
    PriceTier { tier: 5, price: 50, label: "General" },
];

pub const UNKNOWN_TIER_LABEL: &str = "Unknown";

pub fn tier(price_tier: u32) -> Option<&'static PriceTier> {
    PRICE_TIERS.iter().find(|t| t.tier == price_tier)
}

/// Price of a seat in whole dollars. Unmapped tiers cost 0.
pub fn seat_price(price_tier: u32) -> u32 {
    tier(price_tier).map(|t| t.price).unwrap_or(0)
}

pub fn tier_label(price_tier: u32) -> &'static str {
    tier(price_tier).map(|t| t.label).unwrap_or(UNKNOWN_TIER_LABEL)
}

pub fn total(seats: &[SelectedSeat]) -> u32 {
    seats.iter().map(|s| seat_price(s.seat.price_tier)).sum()
}

/// Format a whole-dollar amount as US currency, e.g. `$1,250.00`.
pub fn format_currency(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}.00", grouped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Seat, SeatStatus};

    fn selected(id: &str, price_tier: u32) -> SelectedSeat {
        SelectedSeat::new(
            Seat {
                id: id.to_string(),
                col: 1,
                x: 0.0,
                y: 0.0,
                price_tier,
                status: SeatStatus::Available,
            },
            "A",
            1,
        )
    }

    #[test]
    fn test_known_tiers() {
        assert_eq!(seat_price(1), 250);
        assert_eq!(seat_price(3), 100);
        assert_eq!(seat_price(5), 50);
        assert_eq!(tier_label(2), "Gold");
        assert_eq!(tier_label(4), "Bronze");
    }

    #[test]
    fn test_unknown_tier_defaults() {
        assert_eq!(seat_price(0), 0);
        assert_eq!(seat_price(6), 0);
        assert_eq!(tier_label(42), "Unknown");
        assert!(tier(9).is_none());
    }

    #[test]
    fn test_total_sums_tier_prices() {
        let seats = vec![selected("a", 1), selected("b", 1)];
        assert_eq!(total(&seats), 500);
    }

    #[test]
    fn test_total_ignores_unknown_tiers() {
        let seats = vec![selected("a", 2), selected("b", 99), selected("c", 5)];
        assert_eq!(total(&seats), 200);
        assert_eq!(total(&[]), 0);
    }

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0), "$0.00");
        assert_eq!(format_currency(75), "$75.00");
        assert_eq!(format_currency(500), "$500.00");
        assert_eq!(format_currency(1250), "$1,250.00");
        assert_eq!(format_currency(2000000), "$2,000,000.00");
    }
}
