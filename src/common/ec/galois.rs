use std::ops::{Add, AddAssign, Mul, MulAssign};

// Galois field GF(256) element
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub struct G(pub u8);

impl G {
    // Power of the field generator alpha
    pub fn gen_pow(i: usize) -> Self {
        G(EXP_TABLE[i % 255])
    }

    pub fn log(self) -> Option<usize> {
        match self.0 {
            0 => None,
            x => Some(LOG_TABLE[x as usize] as usize),
        }
    }
}

impl Add for G {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        G(self.0 ^ rhs.0)
    }
}

impl AddAssign for G {
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for G {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        match (self.log(), rhs.log()) {
            (Some(a), Some(b)) => G::gen_pow(a + b),
            _ => G(0),
        }
    }
}

impl MulAssign for G {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl From<G> for u8 {
    fn from(g: G) -> Self {
        g.0
    }
}

pub fn add(a: u8, b: u8) -> u8 {
    (G(a) + G(b)).into()
}

pub fn mul(a: u8, b: u8) -> u8 {
    (G(a) * G(b)).into()
}


// Global constants
//------------------------------------------------------------------------------

pub const PRIMITIVE_POLY: u16 = 0x11D;

pub static EXP_TABLE: [u8; 255] = build_exp_table();

pub static LOG_TABLE: [u8; 256] = build_log_table();

const fn build_exp_table() -> [u8; 255] {
    let mut table = [0u8; 255];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 255 {
        table[i] = x as u8;
        x <<= 1;
        if x & 0x100 != 0 {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    table
}

const fn build_log_table() -> [u8; 256] {
    let exp = build_exp_table();
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 255 {
        table[exp[i] as usize] = i as u8;
        i += 1;
    }
    table
}
