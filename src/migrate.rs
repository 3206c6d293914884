//! Versioned effect-parameter migrations.
//!
//! DESIGN
//! ======
//! A project stores each effect's parameters as text, together with the
//! effect version it was saved with. When the installed effect has a
//! different version, parameters whose meaning changed in between need
//! rewriting. Rules are registered per parameter name as
//! `(version, update)` pairs, where `update` is a plain function of the old
//! value and the [`MigrationDirection`].
//!
//! - Upgrade (installed > saved): rules with `saved < version <= installed`
//!   run in ascending version order.
//! - Downgrade (installed < saved): rules with `installed < version <= saved`
//!   run in descending version order, undoing the newest change first.
//!
//! A parameter set is migrated all-or-nothing: if any rule fails, none of
//! the values are written back.

#[cfg(test)]
#[path = "migrate_test.rs"]
mod migrate_test;

use std::collections::{BTreeMap, HashMap};

/// Which way a parameter is being moved between versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationDirection {
    /// Saved with an older effect version than the one installed.
    Upgrade,
    /// Saved with a newer effect version than the one installed.
    Downgrade,
}

impl MigrationDirection {
    #[must_use]
    pub fn between(saved_version: f64, installed_version: f64) -> Self {
        if installed_version < saved_version { Self::Downgrade } else { Self::Upgrade }
    }
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MigrationError {
    /// A numeric rule was handed text that does not parse as a number.
    #[error("not a number: {0:?}")]
    InvalidNumber(String),
    /// A rule failed; `source` says why.
    #[error("failed to migrate parameter {param:?} at version {version}")]
    Rule {
        param: String,
        version: f64,
        #[source]
        source: Box<MigrationError>,
    },
}

/// Rewrites one parameter value for one version step.
pub type UpdateFn = fn(&str, MigrationDirection) -> Result<String, MigrationError>;

/// An update that applies when crossing `version`.
#[derive(Debug, Clone, Copy)]
pub struct VersionedRule {
    pub version: f64,
    pub update: UpdateFn,
}

/// Migration rules for the parameters of a single effect.
#[derive(Debug, Clone, Default)]
pub struct ParamMigrations {
    rules: HashMap<String, Vec<VersionedRule>>,
}

impl ParamMigrations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`register`](Self::register).
    #[must_use]
    pub fn with_rule(mut self, param: impl Into<String>, version: f64, update: UpdateFn) -> Self {
        self.register(param, version, update);
        self
    }

    /// Add a rule for `param` that applies when crossing `version`.
    pub fn register(&mut self, param: impl Into<String>, version: f64, update: UpdateFn) {
        let rules = self.rules.entry(param.into()).or_default();
        rules.push(VersionedRule { version, update });
        rules.sort_by(|a, b| a.version.total_cmp(&b.version));
    }

    /// Rules for `param`, in ascending version order.
    #[must_use]
    pub fn rules_for(&self, param: &str) -> &[VersionedRule] {
        self.rules.get(param).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Migrate a single value. Returns `Ok(None)` when no rule applies.
    ///
    /// # Errors
    ///
    /// Returns [`MigrationError::Rule`] wrapping the first failing update.
    pub fn migrate_value(
        &self,
        param: &str,
        value: &str,
        installed_version: f64,
        saved_version: f64,
    ) -> Result<Option<String>, MigrationError> {
        let direction = MigrationDirection::between(saved_version, installed_version);
        let (low, high) = match direction {
            MigrationDirection::Upgrade => (saved_version, installed_version),
            MigrationDirection::Downgrade => (installed_version, saved_version),
        };

        let mut steps: Vec<&VersionedRule> = self
            .rules_for(param)
            .iter()
            .filter(|rule| rule.version > low && rule.version <= high)
            .collect();
        if steps.is_empty() {
            return Ok(None);
        }
        if direction == MigrationDirection::Downgrade {
            steps.reverse();
        }

        let mut current = value.to_owned();
        for rule in steps {
            current = (rule.update)(&current, direction).map_err(|e| MigrationError::Rule {
                param: param.to_owned(),
                version: rule.version,
                source: Box::new(e),
            })?;
            tracing::debug!(param, version = rule.version, ?direction, "applied parameter migration");
        }
        Ok(Some(current))
    }

    /// Migrate every parameter in `params` in place. Returns whether any
    /// value was rewritten.
    ///
    /// # Errors
    ///
    /// Returns the first [`MigrationError`]; `params` is left untouched.
    pub fn migrate(
        &self,
        params: &mut BTreeMap<String, String>,
        installed_version: f64,
        saved_version: f64,
    ) -> Result<bool, MigrationError> {
        let mut updates = Vec::new();
        for (name, value) in &*params {
            if let Some(new_value) = self.migrate_value(name, value, installed_version, saved_version)? {
                updates.push((name.clone(), new_value));
            }
        }

        let updated = !updates.is_empty();
        for (name, new_value) in updates {
            params.insert(name, new_value);
        }
        Ok(updated)
    }
}

/// Migration rules for every known effect, keyed by effect id.
#[derive(Debug, Clone, Default)]
pub struct EffectMigrations {
    effects: HashMap<String, ParamMigrations>,
}

impl EffectMigrations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The rules that ship with the crate.
    #[must_use]
    pub fn builtin() -> Self {
        let mut all = Self::new();
        all.register(
            "frei0r.levels",
            ParamMigrations::new()
                .with_rule("Channel", 0.2, tenths)
                .with_rule("Histogram position", 0.2, tenths),
        );
        all.register("frei0r.curves", ParamMigrations::new().with_rule("Channel", 0.1, tenths));
        all
    }

    /// Set the rules for `effect_id`, replacing any previous set.
    pub fn register(&mut self, effect_id: impl Into<String>, rules: ParamMigrations) {
        self.effects.insert(effect_id.into(), rules);
    }

    #[must_use]
    pub fn get(&self, effect_id: &str) -> Option<&ParamMigrations> {
        self.effects.get(effect_id)
    }

    /// Migrate the parameters of one effect instance. Unknown effects are
    /// left alone.
    ///
    /// # Errors
    ///
    /// See [`ParamMigrations::migrate`].
    pub fn migrate(
        &self,
        effect_id: &str,
        params: &mut BTreeMap<String, String>,
        installed_version: f64,
        saved_version: f64,
    ) -> Result<bool, MigrationError> {
        match self.get(effect_id) {
            Some(rules) => rules.migrate(params, installed_version, saved_version),
            None => Ok(false),
        }
    }
}

/// Parse `value` as a number, transform it, and format it back.
///
/// Results within rounding noise of an integer are written as that integer,
/// so `0.7` scaled by ten comes back as `"7"`.
///
/// # Errors
///
/// Returns [`MigrationError::InvalidNumber`] if `value` is not numeric.
pub fn map_numeric(value: &str, f: impl Fn(f64) -> f64) -> Result<String, MigrationError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| MigrationError::InvalidNumber(value.to_owned()))?;
    Ok(format_number(f(parsed)))
}

fn format_number(value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() <= INTEGRAL_TOLERANCE * nearest.abs().max(1.0) {
        nearest.to_string()
    } else {
        value.to_string()
    }
}

/// Relative distance from an integer still treated as that integer.
const INTEGRAL_TOLERANCE: f64 = 1e-9;

/// Integer-coded channel index moved to a 0..1 float in tenths.
fn tenths(value: &str, direction: MigrationDirection) -> Result<String, MigrationError> {
    match direction {
        MigrationDirection::Upgrade => map_numeric(value, |v| v / 10.0),
        MigrationDirection::Downgrade => map_numeric(value, |v| v * 10.0),
    }
}
