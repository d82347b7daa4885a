//! # Resonant Frequency Modulus Formulas
//!
//! Closed-form formulas relating a specimen's fundamental resonant frequency
//! to its dynamic elastic moduli, per the ASTM C215 resonance method.
//!
//! ## Notation
//!
//! - `L` = Specimen length (m)
//! - `b` = Beam width (m)
//! - `t` = Beam depth (m)
//! - `D` = Cylinder diameter (m), `R = D/2`
//! - `m` = Specimen mass (kg)
//! - `n` = Fundamental resonant frequency (Hz)
//! - `ρ` = Density (kg/m³)
//! - `E` = Dynamic modulus of elasticity (Pa)
//! - `G` = Dynamic modulus of rigidity (Pa)
//! - `μ` = Poisson's ratio (dimensionless)
//!
//! ## Correction Factors
//!
//! The transverse correction factor `T'` and the rectangular torsion
//! constant `β` are polynomial approximations of the standard's tabulated
//! values, kept in their exact polynomial form for output compatibility.
//! An exact-table implementation can replace [`transverse_correction_factor`]
//! and [`torsional_shape_factor`] without touching the modulus formulas.
//!
//! ## Preconditions
//!
//! These functions perform no validation. All dimensional inputs must be
//! strictly positive; results for zero or negative inputs are meaningless
//! and may be non-finite. The calculation layer validates before calling.
//!
//! ## References
//!
//! - ASTM C215-14: Standard Test Method for Fundamental Transverse,
//!   Longitudinal, and Torsional Resonant Frequencies of Concrete Specimens

use std::f64::consts::PI;

// =============================================================================
// LONGITUDINAL MODE
// Axial vibration along the specimen length; shape-independent
// =============================================================================

/// Dynamic modulus of elasticity from the longitudinal resonant frequency.
///
/// # Formula (ASTM C215, longitudinal mode)
/// ```text
/// E = 4 L² n² ρ
/// ```
///
/// Identical for beam and cylinder specimens: the fundamental longitudinal
/// mode depends on length and density only.
///
/// # Arguments
/// * `length_m` - Specimen length (m)
/// * `frequency_hz` - Fundamental longitudinal frequency (Hz)
/// * `density_kg_m3` - Specimen density (kg/m³)
///
/// # Returns
/// Dynamic modulus of elasticity (Pa)
#[inline]
pub fn longitudinal_modulus(length_m: f64, frequency_hz: f64, density_kg_m3: f64) -> f64 {
    4.0 * length_m.powi(2) * frequency_hz.powi(2) * density_kg_m3
}

// =============================================================================
// TRANSVERSE (FLEXURAL) MODE
// =============================================================================

/// Correction factor T' for the transverse beam formula.
///
/// Compensates for shear and rotary-inertia effects in non-slender
/// specimens. Polynomial approximation of the ASTM C215 Table 1 values:
///
/// ```text
/// T' = 1 + 6.585 (t/L)²
/// ```
///
/// Approaches 1 for slender specimens (t ≪ L).
#[inline]
pub fn transverse_correction_factor(length_m: f64, depth_m: f64) -> f64 {
    let ratio = depth_m / length_m;
    1.0 + 6.585 * ratio.powi(2)
}

/// Dynamic modulus of elasticity from the transverse frequency of a beam.
///
/// # Formula (ASTM C215, transverse mode, prism)
/// ```text
/// C = 0.9464 (L/b)² T'
/// E = C m n² / (b t³)
/// ```
///
/// where T' is [`transverse_correction_factor`].
#[inline]
pub fn transverse_beam_modulus(
    length_m: f64,
    width_m: f64,
    depth_m: f64,
    mass_kg: f64,
    frequency_hz: f64,
) -> f64 {
    let t_prime = transverse_correction_factor(length_m, depth_m);
    let c = 0.9464 * (length_m / width_m).powi(2) * t_prime;
    c * mass_kg * frequency_hz.powi(2) / (width_m * depth_m.powi(3))
}

/// Dynamic modulus of elasticity from the transverse frequency of a cylinder.
///
/// # Formula (ASTM C215, transverse mode, cylinder)
/// ```text
/// E = 1.6067 (L³ / D⁴) m n²
/// ```
#[inline]
pub fn transverse_cylinder_modulus(
    length_m: f64,
    diameter_m: f64,
    mass_kg: f64,
    frequency_hz: f64,
) -> f64 {
    let c = 1.6067 * length_m.powi(3) / diameter_m.powi(4);
    c * mass_kg * frequency_hz.powi(2)
}

// =============================================================================
// TORSIONAL MODE
// =============================================================================

/// Shape factor β for the torsional beam formula.
///
/// Torsion constant of a rectangular section, `J = β` with
///
/// ```text
/// β = b t³ (1/3 − 0.21 (t/b)(1 − (t/b)⁴ / 12))
/// ```
///
/// Polynomial approximation of the standard's tabulated shape factors.
#[inline]
pub fn torsional_shape_factor(width_m: f64, depth_m: f64) -> f64 {
    let ratio = depth_m / width_m;
    width_m * depth_m.powi(3) * (1.0 / 3.0 - 0.21 * ratio * (1.0 - ratio.powi(4) / 12.0))
}

/// Dynamic modulus of rigidity from the torsional frequency of a beam.
///
/// # Formula (ASTM C215, torsional mode, prism)
/// ```text
/// G = 4 L m n² / β
/// ```
///
/// where β is [`torsional_shape_factor`].
#[inline]
pub fn torsional_beam_modulus(
    length_m: f64,
    width_m: f64,
    depth_m: f64,
    mass_kg: f64,
    frequency_hz: f64,
) -> f64 {
    let beta = torsional_shape_factor(width_m, depth_m);
    4.0 * length_m * mass_kg * frequency_hz.powi(2) / beta
}

/// Dynamic modulus of rigidity from the torsional frequency of a cylinder.
///
/// # Formula (ASTM C215, torsional mode, cylinder)
/// ```text
/// G = 4 L m n² / (π R⁴),  R = D/2
/// ```
#[inline]
pub fn torsional_cylinder_modulus(
    length_m: f64,
    diameter_m: f64,
    mass_kg: f64,
    frequency_hz: f64,
) -> f64 {
    let radius_m = diameter_m / 2.0;
    4.0 * length_m * mass_kg * frequency_hz.powi(2) / (PI * radius_m.powi(4))
}

// =============================================================================
// DERIVED RATIOS
// =============================================================================

/// Poisson's ratio from the elastic and rigidity moduli.
///
/// # Formula
/// ```text
/// μ = E / (2G) − 1
/// ```
///
/// Pure arithmetic over two already-computed moduli (longitudinal E and
/// torsional G from the same specimen). Non-finite for `G = 0`; callers
/// must guard. Typical concrete falls in 0.15-0.25, but out-of-range
/// results are returned as-is.
#[inline]
pub fn poissons_ratio(e_pa: f64, g_pa: f64) -> f64 {
    e_pa / (2.0 * g_pa) - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, rel_tol: f64) {
        assert!(
            ((actual - expected) / expected).abs() < rel_tol,
            "expected {expected:e}, got {actual:e}"
        );
    }

    #[test]
    fn test_longitudinal_modulus() {
        // 4 × 0.4² × 8000² × 2400 = 9.8304e10 Pa = 98.304 GPa
        let e = longitudinal_modulus(0.4, 8000.0, 2400.0);
        assert_close(e, 9.8304e10, 1e-12);
    }

    #[test]
    fn test_longitudinal_monotonicity() {
        let base = longitudinal_modulus(0.4, 8000.0, 2400.0);
        assert!(longitudinal_modulus(0.5, 8000.0, 2400.0) > base);
        assert!(longitudinal_modulus(0.4, 9000.0, 2400.0) > base);
        assert!(longitudinal_modulus(0.4, 8000.0, 2500.0) > base);
    }

    #[test]
    fn test_transverse_correction_factor() {
        // T' = 1 + 6.585 × (0.1/0.4)² = 1.4115625
        let t_prime = transverse_correction_factor(0.4, 0.1);
        assert_close(t_prime, 1.4115625, 1e-12);

        // Slender specimen: factor approaches 1
        let slender = transverse_correction_factor(10.0, 0.1);
        assert!(slender < 1.001);
    }

    #[test]
    fn test_transverse_beam_modulus() {
        // L=0.4, b=t=0.1, m=2.5, n=5000:
        // C = 0.9464 × 16 × 1.4115625 = 21.374444
        // E = C × 2.5 × 2.5e7 / 1e-4 = 1.3359e13 Pa
        let e = transverse_beam_modulus(0.4, 0.1, 0.1, 2.5, 5000.0);
        assert_close(e, 1.3359028e13, 1e-6);
    }

    #[test]
    fn test_transverse_cylinder_modulus() {
        // L=0.3, D=0.15, m=12.72, n=3200:
        // E = 1.6067 × (0.027/0.00050625) × 12.72 × 1.024e7 ≈ 1.1161e10 Pa
        let e = transverse_cylinder_modulus(0.3, 0.15, 12.72, 3200.0);
        assert_close(e, 1.11614e10, 1e-4);
    }

    #[test]
    fn test_torsional_shape_factor() {
        // Square section (t/b = 1): β = b t³ × 0.1408333
        let beta = torsional_shape_factor(0.1, 0.1);
        assert_close(beta, 1.4083333e-5, 1e-6);
    }

    #[test]
    fn test_torsional_beam_modulus() {
        // L=0.4, b=t=0.1, m=2.5, n=7000:
        // G = 4 × 0.4 × 2.5 × 4.9e7 / 1.4083333e-5 ≈ 1.39172e13 Pa
        let g = torsional_beam_modulus(0.4, 0.1, 0.1, 2.5, 7000.0);
        assert_close(g, 1.391716e13, 1e-5);
    }

    #[test]
    fn test_torsional_cylinder_modulus() {
        // L=0.3, D=0.15, m=4.5, n=6500:
        // G = 4 × 0.3 × 4.5 × 4.225e7 / (π × 0.075⁴) ≈ 2.29523e12 Pa
        let g = torsional_cylinder_modulus(0.3, 0.15, 4.5, 6500.0);
        assert_close(g, 2.29523e12, 1e-5);
    }

    #[test]
    fn test_poissons_ratio() {
        // E = 40 GPa, G = 16 GPa: μ = 40/32 − 1 = 0.25
        assert_close(poissons_ratio(40.0e9, 16.0e9), 0.25, 1e-12);
    }

    #[test]
    fn test_poissons_ratio_identities() {
        // μ(2G, G) = 0 and μ(4G, G) = 1 for any G ≠ 0
        for g in [1.0, 16.0e9, 2.2952e12] {
            assert!(poissons_ratio(2.0 * g, g).abs() < 1e-12);
            assert!((poissons_ratio(4.0 * g, g) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_poissons_ratio_nonfinite_for_zero_g() {
        assert!(!poissons_ratio(40.0e9, 0.0).is_finite());
    }
}
