use std::{
    collections::HashMap,
    io,
    sync::{Arc, Mutex},
};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::*;

/// Reference model: key -> values in insertion order.
type Model = HashMap<i32, Vec<u32>>;

fn model_len(model: &Model) -> usize {
    model.values().map(Vec::len).sum()
}

/// Shared buffer for capturing formatted log output.
#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl LogBuffer {
    fn contents(&self) -> String {
        let bytes = self.0.lock().map(|b| b.clone()).unwrap_or_default();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut inner) = self.0.lock() {
            inner.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture_logs<R>(filter: &str, f: impl FnOnce() -> R) -> (R, String) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, buffer.contents())
}

#[test]
fn randomized_ops_match_model() {
    let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
    let mut table = ChainedTable::with_size_estimate(4);
    let mut model: Model = HashMap::new();
    let mut inserts = 0usize;
    let mut removes = 0usize;

    for step in 0..5_000u32 {
        let key: i32 = rng.gen_range(-64..64);
        if rng.gen_bool(0.6) {
            table.insert(key, step);
            model.entry(key).or_default().push(step);
            inserts += 1;
            assert!(table.load_factor() <= 1.0);
        } else {
            let got = table.remove(&key).map(|e| *e.value());
            let expected = model.get_mut(&key).and_then(|vs| {
                if vs.is_empty() {
                    None
                } else {
                    Some(vs.remove(0))
                }
            });
            assert_eq!(got, expected, "step {step} key {key}");
            if got.is_some() {
                removes += 1;
            }
        }
        assert_eq!(table.len(), inserts - removes);
        assert_eq!(table.len(), model_len(&model));
    }

    for (key, values) in &model {
        assert_eq!(table.get(key), values.first());
    }
}

#[test]
fn resize_keeps_chain_order_within_key() {
    // Entries with the same key land in the same bucket after rehash, in the
    // order they were relinked, so first-match semantics survive growth.
    let mut table = ChainedTable::with_size_estimate(2);
    for v in 0..40 {
        table.insert(v % 3, v);
    }
    assert!(table.bucket_count() >= 40);
    assert_eq!(table.get(&0), Some(&0));
    assert_eq!(table.get(&1), Some(&1));
    assert_eq!(table.get(&2), Some(&2));
}

#[test]
fn bucket_counts_follow_prime_search() {
    let mut table: ChainedTable<u64, ()> = ChainedTable::with_size_estimate(10);
    let mut seen = vec![table.bucket_count()];
    for k in 0..500u64 {
        table.insert(k, ());
        if *seen.last().unwrap_or(&0) != table.bucket_count() {
            seen.push(table.bucket_count());
        }
    }
    assert_eq!(seen[0], 13);
    for pair in seen.windows(2) {
        assert_eq!(pair[1], find_prime(2 * pair[0] as u64) as usize);
    }
}

#[test]
fn string_and_hashed_keys() {
    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    struct City {
        name: &'static str,
        zip: u32,
    }

    let mut by_name = ChainedTable::new();
    let mut by_city = ChainedTable::new();
    for (i, name) in ["oslo", "lima", "rome", "kyiv"].iter().enumerate() {
        by_name.insert((*name).to_string(), i);
        by_city.insert(
            Hashed(City {
                name: *name,
                zip: i as u32,
            }),
            i,
        );
    }

    assert_eq!(by_name.get("rome"), Some(&2));
    assert_eq!(
        by_city.get(&Hashed(City {
            name: "lima",
            zip: 1
        })),
        Some(&1)
    );
    assert!(by_city
        .get(&Hashed(City {
            name: "lima",
            zip: 9
        }))
        .is_none());
}

#[test]
fn resize_emits_debug_event() {
    let (buckets, logs) = capture_logs("chained_dict=debug", || {
        let mut table = ChainedTable::with_size_estimate(1);
        for i in 0..20 {
            table.insert(i, ());
        }
        table.bucket_count()
    });
    assert!(buckets >= 20);

    let resizes: Vec<&str> = logs
        .lines()
        .filter(|l| l.contains("chained table resized"))
        .collect();
    assert!(!resizes.is_empty(), "no resize event in:\n{logs}");
    assert!(resizes[0].contains("old_buckets=1"), "{}", resizes[0]);
    assert!(resizes[0].contains("new_buckets=2"), "{}", resizes[0]);
    assert!(resizes
        .iter()
        .any(|l| l.contains(&format!("new_buckets={buckets}"))));
}

#[test]
fn no_resize_event_without_growth() {
    let ((), logs) = capture_logs("chained_dict=debug", || {
        let mut table = ChainedTable::with_size_estimate(100);
        for i in 0..10 {
            table.insert(i, ());
        }
    });
    assert!(!logs.contains("chained table resized"), "{logs}");
}
