//! Solver configuration (spec.md §6.1).

use crate::error::{Result, SolverError};

/// Recognised solver options, with the defaults from spec.md §6.1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    pub unit_e: f64,
    pub unit_radius: f64,
    pub unit_thickness: f64,
    pub alpha: f64,
    pub kmax: usize,
    pub kdiv: usize,
    pub tol1: f64,
    pub tol2: f64,
    pub tol3: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            unit_e: 1e9,
            unit_radius: 1e-3,
            unit_thickness: 1e-3,
            alpha: 10000.0,
            kmax: 10000,
            kdiv: 100,
            tol1: 1e-3,
            tol2: 1e-2,
            tol3: 1e-6,
        }
    }
}

/// Sparse override of [`SolverConfig`]'s defaults. Every field absent
/// (`None`) falls back to the default; fields this struct doesn't name
/// simply can't be set, which is this crate's typed equivalent of "unknown
/// keys are ignored" (spec.md §6.1).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConfigOptions {
    pub unit_e: Option<f64>,
    pub unit_radius: Option<f64>,
    pub unit_thickness: Option<f64>,
    pub alpha: Option<f64>,
    pub kmax: Option<usize>,
    pub kdiv: Option<usize>,
    pub tol1: Option<f64>,
    pub tol2: Option<f64>,
    pub tol3: Option<f64>,
}

impl SolverConfig {
    /// Build a config from a sparse set of overrides, validating the
    /// result before returning it.
    pub fn from_options(options: &ConfigOptions) -> Result<Self> {
        let mut config = Self::default();
        if let Some(v) = options.unit_e {
            config.unit_e = v;
        }
        if let Some(v) = options.unit_radius {
            config.unit_radius = v;
        }
        if let Some(v) = options.unit_thickness {
            config.unit_thickness = v;
        }
        if let Some(v) = options.alpha {
            config.alpha = v;
        }
        if let Some(v) = options.kmax {
            config.kmax = v;
        }
        if let Some(v) = options.kdiv {
            config.kdiv = v;
        }
        if let Some(v) = options.tol1 {
            config.tol1 = v;
        }
        if let Some(v) = options.tol2 {
            config.tol2 = v;
        }
        if let Some(v) = options.tol3 {
            config.tol3 = v;
        }
        config.validate()?;
        Ok(config)
    }

    /// Reject non-finite/negative numeric options and out-of-range
    /// iteration counts (spec.md §7's ConfigError).
    pub fn validate(&self) -> Result<()> {
        let numeric = [
            ("unit.E", self.unit_e),
            ("unit.radius", self.unit_radius),
            ("unit.thickness", self.unit_thickness),
            ("alpha", self.alpha),
            ("tol1", self.tol1),
            ("tol2", self.tol2),
            ("tol3", self.tol3),
        ];
        for (name, value) in numeric {
            if !value.is_finite() || value < 0.0 {
                return Err(SolverError::config(format!(
                    "option `{name}` must be a finite, non-negative number, got {value}"
                )));
            }
        }
        if self.kmax < 1 {
            return Err(SolverError::config(format!(
                "kmax must be >= 1, got {}",
                self.kmax
            )));
        }
        if self.kdiv < 1 {
            return Err(SolverError::config(format!(
                "kdiv must be >= 1, got {}",
                self.kdiv
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec_table() {
        let config = SolverConfig::default();
        assert_eq!(config.unit_e, 1e9);
        assert_eq!(config.unit_radius, 1e-3);
        assert_eq!(config.unit_thickness, 1e-3);
        assert_eq!(config.alpha, 10000.0);
        assert_eq!(config.kmax, 10000);
        assert_eq!(config.kdiv, 100);
        assert_eq!(config.tol1, 1e-3);
        assert_eq!(config.tol2, 1e-2);
        assert_eq!(config.tol3, 1e-6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn from_options_overrides_only_named_fields() {
        let config = SolverConfig::from_options(&ConfigOptions {
            unit_e: Some(1.0),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(config.unit_e, 1.0);
        assert_eq!(config.unit_radius, 1e-3);
    }

    #[test]
    fn rejects_kmax_zero() {
        let err = SolverConfig::from_options(&ConfigOptions {
            kmax: Some(0),
            ..Default::default()
        });
        assert!(matches!(err, Err(SolverError::Config(_))));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let err = SolverConfig::from_options(&ConfigOptions {
            tol1: Some(-1.0),
            ..Default::default()
        });
        assert!(matches!(err, Err(SolverError::Config(_))));
    }
}
