use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard};

use log::debug;

use super::galois::{mul, G};

// Reed-Solomon encoder
//------------------------------------------------------------------------------

/// Reed-Solomon encoder over GF(256).
///
/// Generator polynomials are cached by degree. A missing degree is derived from the largest
/// cached lower degree, so only the missing factors get multiplied in. The cache only grows and
/// its entries are deterministic, so concurrent builders may share one instance.
#[derive(Debug, Default)]
pub struct ReedSolomon {
    generators: RwLock<HashMap<usize, Arc<[u8]>>>,
}

impl ReedSolomon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide instance used by builders unless another one is injected.
    pub fn shared() -> Arc<ReedSolomon> {
        static SHARED: OnceLock<Arc<ReedSolomon>> = OnceLock::new();
        SHARED.get_or_init(|| Arc::new(ReedSolomon::new())).clone()
    }

    // A panic while holding the lock can't leave a partial entry behind
    fn cache(&self) -> RwLockReadGuard<'_, HashMap<usize, Arc<[u8]>>> {
        self.generators.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn cached_degrees(&self) -> Vec<usize> {
        let mut degrees = self.cache().keys().copied().collect::<Vec<_>>();
        degrees.sort_unstable();
        degrees
    }

    /// Generator polynomial `(x - a^0)(x - a^1)...(x - a^(degree-1))` with coefficients ordered
    /// from the highest power down. The leading coefficient is always 1.
    pub fn generator(&self, degree: usize) -> Arc<[u8]> {
        let (base, mut poly) = {
            let cache = self.cache();
            if let Some(poly) = cache.get(&degree) {
                return poly.clone();
            }
            cache
                .iter()
                .filter(|(d, _)| **d < degree)
                .max_by_key(|(d, _)| **d)
                .map(|(d, p)| (*d, p.to_vec()))
                .unwrap_or((0, vec![1]))
        };

        for i in base..degree {
            poly = Self::mul_root(&poly, G::gen_pow(i).0);
        }
        debug!("Computed generator polynomial of degree {degree} from degree {base}");

        let mut cache = self.generators.write().unwrap_or_else(PoisonError::into_inner);
        cache.entry(degree).or_insert_with(|| poly.into()).clone()
    }

    // Multiplies poly by (x - root)
    fn mul_root(poly: &[u8], root: u8) -> Vec<u8> {
        let mut res = Vec::with_capacity(poly.len() + 1);
        res.push(poly[0]);
        for w in poly.windows(2) {
            res.push(w[1] ^ mul(w[0], root));
        }
        if let Some(&last) = poly.last() {
            res.push(mul(last, root));
        }
        res
    }

    /// Computes `ecc_count` error correction codewords for a data block.
    ///
    /// Performs polynomial long division of `block(x) * x^ecc_count` by the generator
    /// polynomial; the remainder's coefficients are the codewords.
    pub fn ecc(&self, block: &[u8], ecc_count: usize) -> Vec<u8> {
        let len = block.len();
        let gen_poly = self.generator(ecc_count);

        let mut res = block.to_vec();
        res.resize(len + ecc_count, 0);

        for i in 0..len {
            let lead_coeff = res[i];
            if lead_coeff == 0 {
                continue;
            }

            for (u, &v) in res[i + 1..].iter_mut().zip(gen_poly[1..].iter()) {
                *u ^= mul(v, lead_coeff);
            }
        }

        res.split_off(len)
    }
}

#[cfg(test)]
mod reed_solomon_tests {
    use std::sync::Arc;
    use std::thread;

    use super::ReedSolomon;
    use crate::common::ec::galois::EXP_TABLE;

    fn from_exponents(exps: &[usize]) -> Vec<u8> {
        exps.iter().map(|&e| EXP_TABLE[e]).collect()
    }

    #[test]
    fn test_generator_known_values() {
        let rs = ReedSolomon::new();
        assert_eq!(&*rs.generator(0), &[1]);
        assert_eq!(&*rs.generator(1), &[1, 1]);
        assert_eq!(&*rs.generator(2), &[1, 3, 2]);
        let exp = from_exponents(&[0, 87, 229, 146, 149, 238, 102, 21]);
        assert_eq!(&*rs.generator(7), &exp[..]);
        let exp = from_exponents(&[0, 251, 67, 46, 61, 118, 70, 64, 94, 32, 45]);
        assert_eq!(&*rs.generator(10), &exp[..]);
    }

    #[test]
    fn test_generator_shape() {
        let rs = ReedSolomon::new();
        for n in [7, 10, 13, 15, 16, 17, 18, 20, 22, 24, 26, 28, 30, 68] {
            let poly = rs.generator(n);
            assert_eq!(poly.len(), n + 1);
            assert_eq!(poly[0], 1);
        }
    }

    #[test]
    fn test_generator_independent_of_cache_state() {
        let warm = ReedSolomon::new();
        warm.generator(7);
        warm.generator(18);
        let cold = ReedSolomon::new();
        for n in [10, 20, 30] {
            assert_eq!(warm.generator(n), cold.generator(n));
        }
        assert_eq!(warm.cached_degrees(), vec![7, 10, 18, 20, 30]);
        assert_eq!(cold.cached_degrees(), vec![10, 20, 30]);
    }

    #[test]
    fn test_generator_concurrent() {
        let rs = Arc::new(ReedSolomon::new());
        let handles = (0..8)
            .map(|t| {
                let rs = Arc::clone(&rs);
                thread::spawn(move || (1..=30).map(|n| rs.generator((n * (t + 1)) % 31)).collect())
            })
            .collect::<Vec<thread::JoinHandle<Vec<Arc<[u8]>>>>>();
        let reference = ReedSolomon::new();
        for h in handles {
            for poly in h.join().unwrap() {
                let n = poly.len() - 1;
                assert_eq!(poly, reference.generator(n));
            }
        }
    }

    #[test]
    fn test_ecc_simple() {
        let rs = ReedSolomon::new();
        let msg = b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11";
        let ecc = rs.ecc(msg, 10);
        assert_eq!(ecc, b"\xc4\x23\x27\x77\xeb\xd7\xe7\xe2\x5d\x17");
    }

    #[test]
    fn test_ecc_hello_world_q() {
        let rs = ReedSolomon::new();
        let msg = b"\x20\x5b\x0b\x78\xd1\x72\xdc\x4d\x43\x40\xec\x11\xec";
        let ecc = rs.ecc(msg, 13);
        assert_eq!(ecc, b"\xa8\x48\x16\x52\xd9\x36\x9c\x00\x2e\x0f\xb4\x7a\x10");
    }

    #[test]
    fn test_ecc_len() {
        let rs = ReedSolomon::new();
        assert_eq!(rs.ecc(&[0; 19], 7), vec![0; 7]);
        assert_eq!(rs.ecc(&[1, 2, 3], 30).len(), 30);
    }
}
