pub mod geometry;
pub mod locale;
pub mod preferences;
pub mod prize;
pub mod promo;
pub mod validation;
pub mod wheel;

#[cfg(test)]
mod tests {
    use crate::locale::{translations, Locale};
    use crate::prize::prize_catalog;
    use crate::promo::{is_valid_promo_code, Outcome};
    use crate::wheel::{FixedDraw, WheelState};
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    #[test]
    fn test_forced_spin_reports_gift_50_with_code() {
        let prizes = prize_catalog(translations(Locale::En));
        assert_eq!(prizes.len(), 8);

        let mut wheel = WheelState::new();
        let mut draw = FixedDraw { index: 3, jitter: 0.0 };
        let plan = wheel.begin_spin(prizes.len(), true, &mut draw).unwrap();
        assert!(wheel.is_spinning());

        let index = wheel.finish_spin(plan.ticket).unwrap();
        assert_eq!(index, plan.index);
        let winner = prizes[index].clone();
        assert_eq!(winner.id, "gift-50");
        assert!(!wheel.is_spinning());

        let mut rng = SmallRng::seed_from_u64(7);
        let outcome = Outcome::new(winner, &mut rng);
        let code = outcome.promo_code.as_deref().unwrap();
        assert!(is_valid_promo_code(code));
    }
}
