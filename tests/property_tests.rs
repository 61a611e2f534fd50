#[cfg(test)]
mod property_tests {
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use yop::bounce::Bouncer;
    use yop::replay_buffer::{Experience, ReplayBuffer};
    use yop::world::{Direction, Outcome, Position, World};

    fn direction_strategy() -> impl Strategy<Value = Direction> {
        (0usize..4).prop_map(|i| Direction::ALL[i])
    }

    proptest! {
        #[test]
        fn test_yop_never_leaves_grid(
            size in 1i32..30,
            seed in any::<u64>(),
            moves in prop::collection::vec(direction_strategy(), 0..200)
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut world = World::new(size, &mut rng).unwrap();
            for direction in moves {
                let transition = world.step(direction, &mut rng);
                prop_assert!((-1..=1).contains(&transition.reward));
                prop_assert!(transition.next.contains(transition.next.yop));
                prop_assert!(transition.next.contains(transition.next.food));
                if transition.outcome == Outcome::Blocked {
                    prop_assert_eq!(&transition.next, &world);
                } else {
                    prop_assert_eq!(transition.next.yop.manhattan(world.yop), 1);
                }
                world = transition.next;
            }
        }

        #[test]
        fn test_bouncer_stays_in_bounds(
            width in 1i32..40,
            height in 1i32..40,
            steps in 0usize..500
        ) {
            let mut bouncer = Bouncer::new(width, height).unwrap();
            for _ in 0..steps {
                bouncer.step();
                let pos = bouncer.position();
                prop_assert!((0..width).contains(&pos.x));
                prop_assert!((0..height).contains(&pos.y));
            }
        }

        #[test]
        fn test_replay_buffer_never_exceeds_capacity(
            capacity in 0usize..50,
            additions in 0usize..200,
            seed in any::<u64>()
        ) {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = World::with_positions(3, Position::new(0, 0), Position::new(1, 1)).unwrap();
            let mut buffer = ReplayBuffer::new(capacity);
            for i in 0..additions {
                buffer.add(Experience {
                    state: state.clone(),
                    action: Direction::Up,
                    reward: i as f32,
                    next_state: state.clone(),
                }, &mut rng);
            }
            prop_assert_eq!(buffer.len(), additions.min(capacity));
        }
    }
}
