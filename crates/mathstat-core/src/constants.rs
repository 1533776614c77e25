//! Numeric constants shared by the kernels

/// Machine epsilon for the rounding mode used by the kernels, 2^-53
pub const MACHEP: f64 = 1.110_223_024_625_156_540_42e-16;

/// ln(f64::MAX)
pub const MAXLOG: f64 = 7.097_827_128_933_839_968_43e2;

/// ln(smallest subnormal)
pub const MINLOG: f64 = -7.451_332_191_019_412_076_235e2;

/// Largest finite value
pub const MAXNUM: f64 = f64::MAX;

/// Largest argument for which Γ(x) is finite
pub const MAXGAM: f64 = 171.624_376_956_302_725;

/// sqrt(2π)
pub const SQRT_2PI: f64 = 2.506_628_274_631_000_502_42;

/// ln(sqrt(2π))
pub const LOG_SQRT_2PI: f64 = 0.918_938_533_204_672_741_78;

/// ln(π)
pub const LOG_PI: f64 = 1.144_729_885_849_400_174_14;

/// Euler–Mascheroni constant
pub const EULER: f64 = 0.577_215_664_901_532_860_606_512_090_082_402_431;

/// Rescaling thresholds for continued fractions, 2^52 and 2^-52
pub const BIG: f64 = 4.503_599_627_370_496e15;
pub const BIG_INV: f64 = 2.220_446_049_250_313_080_85e-16;
