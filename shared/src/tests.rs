#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::thread;
    use crate::models::{GetResultsResponse, OptionResult, VoteRequest, VoteResponse, VotingOption};
    use crate::registry::{RegistryError, VoteRegistry, POLL_TOPIC};

    fn counts(registry: &VoteRegistry) -> HashMap<String, u32> {
        registry
            .list_results()
            .into_iter()
            .map(|r| (r.option_id, r.votes))
            .collect()
    }

    fn total(registry: &VoteRegistry) -> u64 {
        registry.list_results().iter().map(|r| u64::from(r.votes)).sum()
    }

    fn ids(options: &[VotingOption]) -> HashSet<&str> {
        options.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_fresh_registry() {
        let registry = VoteRegistry::new();
        assert_eq!(registry.topic(), POLL_TOPIC);
        assert_eq!(registry.option_count(), 4);

        let results = registry.list_results();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.votes == 0));
        assert_eq!(
            results.iter().map(|r| r.option_id.as_str()).collect::<HashSet<_>>(),
            ["1", "2", "3", "4"].into_iter().collect()
        );
        assert_eq!(total(&registry), 0);
    }

    #[test]
    fn test_results_carry_option_labels() {
        let registry = VoteRegistry::new();
        let labels: HashMap<_, _> = registry
            .list_options()
            .into_iter()
            .map(|o| (o.id, o.text))
            .collect();

        for result in registry.list_results() {
            assert_eq!(labels.get(&result.option_id), Some(&result.option_text));
        }
    }

    #[test]
    fn test_valid_vote() {
        let registry = VoteRegistry::new();
        assert!(registry.cast_vote("1"));

        let counts = counts(&registry);
        assert_eq!(counts["1"], 1);
        assert_eq!(counts["2"], 0);
        assert_eq!(counts["3"], 0);
        assert_eq!(counts["4"], 0);
    }

    #[test]
    fn test_every_option_accepts_votes() {
        let registry = VoteRegistry::new();
        for option in registry.list_options() {
            let before = counts(&registry);
            assert!(registry.cast_vote(&option.id));
            let after = counts(&registry);

            for (id, votes) in &after {
                let expected = if *id == option.id { before[id] + 1 } else { before[id] };
                assert_eq!(*votes, expected, "unexpected tally for option {}", id);
            }
        }
        assert_eq!(total(&registry), 4);
    }

    #[test]
    fn test_unknown_option_is_noop() {
        let registry = VoteRegistry::new();
        assert!(registry.cast_vote("1"));
        let before = registry.list_results();

        assert!(!registry.cast_vote("99"));
        assert!(!registry.cast_vote(""));
        assert!(!registry.cast_vote("1 "));
        assert!(!registry.cast_vote("Option A: TypeScript"));

        assert_eq!(registry.list_results(), before);
    }

    #[test]
    fn test_options_unchanged_by_votes() {
        let registry = VoteRegistry::new();
        let before = registry.list_options();
        for id in ["1", "2", "2", "4", "nope"] {
            registry.cast_vote(id);
        }
        let after = registry.list_options();
        assert_eq!(after.len(), 4);
        assert_eq!(ids(&after), ids(&before));
        assert_eq!(registry.list_results().len(), 4);
    }

    #[test]
    fn test_snapshots_are_independent() {
        let registry = VoteRegistry::new();
        let mut results = registry.list_results();
        results[0].votes = 500;
        results[0].option_text = "tampered".into();

        let mut options = registry.list_options();
        options[0].text = "tampered".into();

        assert!(registry.list_results().iter().all(|r| r.votes == 0 && r.option_text != "tampered"));
        assert!(registry.list_options().iter().all(|o| o.text != "tampered"));
    }

    #[test]
    fn test_concurrent_votes_same_option() {
        let registry = VoteRegistry::new();
        thread::scope(|s| {
            for _ in 0..100 {
                s.spawn(|| assert!(registry.cast_vote("2")));
            }
        });

        let counts = counts(&registry);
        assert_eq!(counts["2"], 100);
        assert_eq!(counts["1"] + counts["3"] + counts["4"], 0);
    }

    #[test]
    fn test_concurrent_votes_across_options() {
        let registry = VoteRegistry::new();
        registry.cast_vote("4");

        thread::scope(|s| {
            for i in 0..300 {
                let id = if i % 3 == 0 { "1" } else if i % 3 == 1 { "3" } else { "missing" };
                let registry = &registry;
                s.spawn(move || registry.cast_vote(id));
            }
        });

        let counts = counts(&registry);
        assert_eq!(counts["1"], 100);
        assert_eq!(counts["2"], 0);
        assert_eq!(counts["3"], 100);
        assert_eq!(counts["4"], 1);
    }

    #[test]
    fn test_readers_never_see_torn_results() {
        let registry = VoteRegistry::new();
        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..50 {
                        registry.cast_vote("1");
                        registry.cast_vote("3");
                    }
                });
            }

            for _ in 0..4 {
                s.spawn(|| {
                    let mut last = HashMap::new();
                    for _ in 0..200 {
                        let results = registry.list_results();
                        assert_eq!(results.len(), 4);
                        for r in results {
                            let prev = last.insert(r.option_id.clone(), r.votes).unwrap_or(0);
                            assert!(r.votes >= prev, "tally for {} went backwards", r.option_id);
                        }
                    }
                });
            }
        });

        let counts = counts(&registry);
        assert_eq!(counts["1"], 400);
        assert_eq!(counts["3"], 400);
        assert_eq!(total(&registry), 800);
    }

    #[test]
    fn test_custom_options() {
        let registry = VoteRegistry::with_options(
            "Tabs or spaces?",
            [VotingOption::new("tabs", "Tabs"), VotingOption::new("spaces", "Spaces")],
        )
        .unwrap();

        assert_eq!(registry.topic(), "Tabs or spaces?");
        assert!(registry.cast_vote("tabs"));
        assert!(!registry.cast_vote("1"));
        assert_eq!(registry.list_results().len(), 2);
    }

    #[test]
    fn test_invalid_option_sets() {
        assert!(matches!(
            VoteRegistry::with_options("t", Vec::<VotingOption>::new()),
            Err(RegistryError::NoOptions)
        ));
        assert!(matches!(
            VoteRegistry::with_options("t", [VotingOption::new("", "blank")]),
            Err(RegistryError::EmptyOptionId)
        ));
        assert_eq!(
            VoteRegistry::with_options(
                "t",
                [VotingOption::new("a", "A"), VotingOption::new("b", "B"), VotingOption::new("a", "A again")],
            )
            .unwrap_err(),
            RegistryError::DuplicateOption("a".into())
        );
    }

    #[test]
    fn test_wire_field_names() {
        let result = OptionResult { option_id: "1".into(), option_text: "One".into(), votes: 3 };
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            serde_json::json!({ "optionId": "1", "optionText": "One", "votes": 3 })
        );

        let request: VoteRequest = serde_json::from_str(r#"{"optionId":"2"}"#).unwrap();
        assert_eq!(request.option_id, "2");

        let snake: VoteRequest = serde_json::from_str(r#"{"option_id":"3"}"#).unwrap();
        assert_eq!(snake.option_id, "3");

        let empty: VoteRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.option_id, "");
    }

    #[test]
    fn test_vote_response_messages() {
        let ok = VoteResponse::from(true);
        assert!(ok.success);
        assert!(!ok.message.is_empty());

        let failed = VoteResponse::from(false);
        assert!(!failed.success);
        assert_ne!(failed.message, ok.message);
    }

    #[test]
    fn test_results_response_total() {
        let registry = VoteRegistry::new();
        for id in ["1", "1", "4"] {
            registry.cast_vote(id);
        }
        let response = GetResultsResponse { results: registry.list_results() };
        assert_eq!(response.total_votes(), 3);
        assert_eq!(response.total_votes(), total(&registry));
    }
}
