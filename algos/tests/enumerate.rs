use algos::brute::{BruteDistinct, BruteFixedSum, BruteTree, BruteVector};
use algos::jumps::BinaryJumps;
use proptest::prelude::*;

fn naive_ancestor(parent: &[usize], mut u: usize, delta: usize) -> Option<usize> {
    for _ in 0..delta {
        if u == 1 {
            return None;
        }
        u = parent[u];
    }
    Some(u)
}

#[test]
fn jumps_agree_with_parent_walk_on_every_small_tree() {
    for n in 1..=6 {
        BruteTree::new(n).for_each(|parent| {
            let edges: Vec<(usize, usize)> = (2..=n).map(|v| (parent[v], v)).collect();
            let tree = BinaryJumps::build(n, &edges, 1).unwrap();

            for u in 1..=n {
                for delta in 0..=n {
                    assert_eq!(
                        tree.jump(u, delta),
                        naive_ancestor(parent, u, delta),
                        "parents {parent:?}, u = {u}, delta = {delta}"
                    );
                }
                for a in 1..=n {
                    let expected = (0..n).any(|d| naive_ancestor(parent, u, d) == Some(a));
                    assert_eq!(tree.is_ancestor(a, u), expected);
                }
            }
        });
    }
}

proptest! {
    #[test]
    fn fixed_sum_matches_filtered_odometer(len in 0..4usize, max in 0..4u32, sum in 0..8u32) {
        let mut expected = Vec::new();
        let mut v = BruteVector::new(len, 0, max);
        loop {
            if v.iter().sum::<u32>() == sum {
                expected.push(v.to_vec());
            }
            if !v.advance() {
                break;
            }
        }

        let mut actual = Vec::new();
        BruteFixedSum::new(len, 0, max, sum).for_each(|v| actual.push(v.to_vec()));
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn distinct_counts_arrangements(len in 0..5usize, width in 1..6i32) {
        prop_assume!(len as i32 <= width);
        let mut v = BruteDistinct::new(len, -2, width - 3).unwrap();
        let mut count = 1u64;
        let mut previous = v.to_vec();
        while v.advance() {
            prop_assert!(previous < v.to_vec());
            previous = v.to_vec();
            count += 1;
        }
        let expected: u64 = (0..len as u64).map(|i| width as u64 - i).product();
        prop_assert_eq!(count, expected);
    }
}
