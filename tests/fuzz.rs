use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use trainwreck::test_utils::*;
use trainwreck::*;

const ITERATIONS: usize = 200;

#[test]
fn fuzz() {
    let mut rng = SmallRng::seed_from_u64(42);

    for _ in 0..ITERATIONS {
        let fields = rng.gen_range(0..12);
        let seed = rng.gen::<u64>();
        let target = make_object_rand(fields, seed).into_shared();
        let w = create(target.clone());

        assert_wrapper_matches_target(&w, &target);

        // random accessor traffic, checking write-then-read round trips and
        // chain identity on every write
        for _ in 0..16 {
            let keys = w.keys();
            if keys.is_empty() {
                break;
            }
            let name = &keys[rng.gen_range(0..keys.len())];
            match w.kind_of(name) {
                Some(Kind::Data) => {
                    if rng.gen() {
                        let value = random_value(&mut rng);
                        let chained = w.set(name, value.clone()).unwrap();
                        assert!(chained.is_same(&w));
                        assert_eq!(w.get(name).unwrap(), value);
                    } else {
                        let before = w.get(name).unwrap();
                        assert_eq!(w.get(name).unwrap(), before);
                    }
                }
                Some(Kind::Method) => {
                    let arg = random_value(&mut rng);
                    let outcome = w.call(name, &[arg.clone()]).unwrap();
                    // poke echoes its argument, so the outcome kind must
                    // track the argument's truthiness
                    match outcome {
                        Outcome::Value(value) => {
                            assert!(arg.is_truthy());
                            assert_eq!(value, arg);
                        }
                        Outcome::Chain(chained) => {
                            assert!(arg.is_falsy());
                            assert!(chained.is_same(&w));
                        }
                    }
                }
                None => unreachable!("key came from the wrapper"),
            }
        }

        assert_wrapper_matches_target(&w, &target);
    }
}
