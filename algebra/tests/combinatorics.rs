use algebra::{Combinatorics, Mod1000000007};
use num_traits::Zero;

const P: u32 = 1_000_000_007;

#[test]
fn binomial_matches_pascal_triangle() {
    const N: usize = 300;
    let comb = Combinatorics::<P>::new(N).unwrap();

    let mut row = vec![Mod1000000007::new(1)];
    for n in 0..=N {
        for (k, &expected) in row.iter().enumerate() {
            assert_eq!(comb.binomial(n as i64, k as i64), expected, "C({n}, {k})");
        }
        assert!(comb.binomial(n as i64, n as i64 + 1).is_zero());
        assert!(comb.binomial(n as i64, -1).is_zero());

        let mut next = Vec::with_capacity(row.len() + 1);
        next.push(Mod1000000007::new(1));
        next.extend(row.windows(2).map(|w| w[0] + w[1]));
        next.push(Mod1000000007::new(1));
        row = next;
    }
}

#[test]
fn large_table() {
    let comb = Combinatorics::<P>::new(1_000_000).unwrap();
    // C(10^6, 1) = 10^6 and symmetry
    assert_eq!(comb.binomial(1_000_000, 1), Mod1000000007::new(1_000_000));
    assert_eq!(
        comb.binomial(1_000_000, 12_345),
        comb.binomial(1_000_000, 1_000_000 - 12_345)
    );
}
