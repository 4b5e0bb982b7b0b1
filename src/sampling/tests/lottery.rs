#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use sampling::error::SamplingError;
    use sampling::lottery::draw;
    use sampling::lottery::format_ticket;
    use sampling::lottery::is_winner;
    use sampling::lottery::winning_ticket;
    use sampling::lottery::POOL;
    use sampling::lottery::TICKET_SIZE;
    use sampling::TicketItem;

    #[test]
    fn test_pool() {
        assert_eq!(POOL.len(), 15);
        let unique = POOL.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), 15);
        assert_eq!(
            POOL.iter()
                .filter(|v| matches!(v, TicketItem::Letter(_)))
                .count(),
            5
        );
    }

    #[test]
    fn test_winning_ticket_is_four_unique_items_from_pool() {
        let mut rng = StdRng::seed_from_u64(2024);

        for _ in 0..200 {
            let ticket = winning_ticket(&mut rng).unwrap();
            assert_eq!(ticket.len(), TICKET_SIZE);

            let unique = ticket.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), TICKET_SIZE);
            assert!(ticket.iter().all(|v| POOL.contains(v)));
        }
    }

    #[test]
    fn test_draw_limits() {
        let mut rng = StdRng::seed_from_u64(3);

        assert_eq!(draw(&mut rng, &POOL, 15).unwrap().len(), 15);
        assert!(draw(&mut rng, &POOL, 0).unwrap().is_empty());
        assert_eq!(
            draw(&mut rng, &POOL, 16),
            Err(SamplingError::SampleTooLarge {
                requested: 16,
                available: 15
            })
        );
    }

    #[test]
    fn test_is_winner() {
        let winning = vec![
            TicketItem::Number(3),
            TicketItem::Letter('A'),
            TicketItem::Number(7),
            TicketItem::Letter('P'),
        ];

        let mut reordered = winning.clone();
        reordered.reverse();
        assert!(is_winner(&reordered, &winning));

        let mut other = winning.clone();
        other[0] = TicketItem::Number(4);
        assert!(!is_winner(&other, &winning));

        let duplicated = vec![
            TicketItem::Number(3),
            TicketItem::Number(3),
            TicketItem::Letter('A'),
            TicketItem::Number(7),
        ];
        assert!(!is_winner(&duplicated, &winning));
        assert!(!is_winner(&winning[..3], &winning));
    }

    #[test]
    fn test_format_ticket() {
        let ticket = vec![
            TicketItem::Number(3),
            TicketItem::Letter('A'),
            TicketItem::Number(10),
            TicketItem::Letter('P'),
        ];

        assert_eq!(format_ticket(&ticket), "[3, 'A', 10, 'P']");
        assert_eq!(format_ticket(&[]), "[]");
    }
}
