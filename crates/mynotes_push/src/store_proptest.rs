#[cfg(test)]
mod tests {
    use crate::store::{InMemorySubscriptionStore, SubscriptionStore};
    use crate::test_support::sub;
    use proptest::prelude::*;

    #[derive(Debug, Clone)]
    enum Op {
        Subscribe(u8),
        Unsubscribe(u8),
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        prop_oneof![
            (0u8..4).prop_map(Op::Subscribe),
            (0u8..4).prop_map(Op::Unsubscribe),
        ]
    }

    proptest! {
        // Size tracks a plain Vec model under arbitrary interleavings, duplicates included.
        #[test]
        fn test_store_matches_vec_model(ops in prop::collection::vec(op_strategy(), 0..40)) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let store = InMemorySubscriptionStore::new();
                let mut model: Vec<String> = Vec::new();

                for op in &ops {
                    match op {
                        Op::Subscribe(n) => {
                            let endpoint = format!("E{n}");
                            store.add(sub(&endpoint)).await.unwrap();
                            model.push(endpoint);
                        }
                        Op::Unsubscribe(n) => {
                            let endpoint = format!("E{n}");
                            let expected = model.iter().filter(|e| **e == endpoint).count();
                            model.retain(|e| *e != endpoint);
                            let removed = store.remove_by_endpoint(&endpoint).await.unwrap();
                            assert_eq!(removed, expected);
                        }
                    }
                    assert_eq!(store.len().await.unwrap(), model.len());
                }
            });
        }

        // With distinct endpoints: size = subscribes - unsubscribes that matched.
        #[test]
        fn test_size_is_subscribes_minus_matched_unsubscribes(
            subscribed in prop::collection::hash_set(0u16..500, 0..30),
            unsubscribed in prop::collection::vec(0u16..500, 0..30),
        ) {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let store = InMemorySubscriptionStore::new();
                for n in &subscribed {
                    store.add(sub(&format!("E{n}"))).await.unwrap();
                }
                let mut matched = 0;
                for n in &unsubscribed {
                    matched += store.remove_by_endpoint(&format!("E{n}")).await.unwrap();
                }
                assert_eq!(store.len().await.unwrap(), subscribed.len() - matched);
            });
        }
    }
}
