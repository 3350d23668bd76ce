pub mod analyzers;
pub mod opensea;

pub fn from_wei(f: f64) -> f64 {
    f / 10f64.powf(18f64)
}
