#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sampling::error::SamplingError;
    use sampling::Die;

    #[test]
    fn test_default_die() {
        assert_eq!(Die::default().sides(), 6);
        assert_eq!(Die::new(0), Err(SamplingError::InvalidSides(0)));
    }

    #[test]
    fn test_rolls_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(42);

        for sides in [1, 2, 6, 20] {
            let die = Die::new(sides).unwrap();
            let rolls = die.roll_many(&mut rng, 1000);
            assert_eq!(rolls.len(), 1000);
            assert!(rolls.iter().all(|v| (1..=sides).contains(v)));
        }
    }

    #[test]
    fn test_every_face_shows_up() {
        let mut rng = StdRng::seed_from_u64(7);
        let die = Die::default();

        let mut seen = [false; 6];
        for v in die.roll_many(&mut rng, 600) {
            seen[(v - 1) as usize] = true;
        }

        assert!(seen.iter().all(|v| *v));
    }

    #[test]
    fn test_one_sided_die() {
        let mut rng = StdRng::seed_from_u64(1);
        let die = Die::new(1).unwrap();

        assert_eq!(die.roll(&mut rng), 1);
    }
}
