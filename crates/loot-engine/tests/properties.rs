//! Property-based tests for the loot engine.
use loot_engine::{DrawConfig, ErrorKind, LootTable, draw, parse, resolve, sample};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ]{0,12}",
        (0u32..50, "[a-zA-Z {}0-9d-]{0,12}").prop_map(|(w, t)| format!("{w}: {t}")),
        Just(String::new()),
        Just("   ".to_string()),
    ]
}

proptest! {
    #[test]
    fn parsing_is_idempotent(lines in prop::collection::vec(line(), 0..30)) {
        prop_assert_eq!(parse(&lines), parse(&lines));
    }

    #[test]
    fn parsed_templates_are_never_empty(lines in prop::collection::vec(line(), 0..30)) {
        let table = parse(&lines);
        prop_assert!(table.iter().all(|e| !e.template.trim().is_empty()));
        prop_assert!(table.len() <= lines.len());
    }

    #[test]
    fn sampling_returns_count_positive_weight_templates(
        weights in prop::collection::vec(0u32..5, 1..10),
        count in 1u32..50,
        seed in any::<u64>(),
    ) {
        let lines: Vec<String> = weights
            .iter()
            .enumerate()
            .map(|(i, w)| format!("{w}: item{i}"))
            .collect();
        let table: LootTable = parse(&lines);
        let mut rng = StdRng::seed_from_u64(seed);

        match sample(&table, count, &mut rng) {
            Ok(drawn) => {
                prop_assert_eq!(drawn.len(), count as usize);
                for template in drawn {
                    let entry = table.iter().find(|e| e.template == template).unwrap();
                    prop_assert!(entry.weight > 0);
                }
            }
            Err(err) => {
                prop_assert_eq!(err.kind(), ErrorKind::NoEligibleEntries);
                prop_assert!(weights.iter().all(|w| *w == 0));
            }
        }
    }

    #[test]
    fn dice_tokens_stay_in_bounds(count in 0u32..20, sides in 0u32..30, seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = resolve(&format!("{{{count}d{sides}}}"), &mut rng);
        let total: u64 = out.parse().unwrap();
        if sides == 0 {
            prop_assert_eq!(total, 0);
        } else {
            prop_assert!(total >= u64::from(count));
            prop_assert!(total <= u64::from(count) * u64::from(sides));
        }
    }

    #[test]
    fn range_tokens_stay_in_bounds(a in any::<u32>(), b in any::<u32>(), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let out = resolve(&format!("{{{a}-{b}}}"), &mut rng);
        let value: u32 = out.parse().unwrap();
        prop_assert!(value >= a.min(b) && value <= a.max(b));
    }

    #[test]
    fn brace_free_templates_unchanged(template in "[^{}]{0,40}", seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        prop_assert_eq!(resolve(&template, &mut rng), template);
    }

    #[test]
    fn non_numeric_counts_rejected(input in "[a-zA-Z-]{1,8}") {
        let mut rng = StdRng::seed_from_u64(0);
        let err = draw(["Coins"], &input, &DrawConfig::default(), &mut rng).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::InvalidCount);
    }
}
