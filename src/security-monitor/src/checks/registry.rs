//! Ordered set of checks run against every repository.

use super::CheckKind;

/// An immutable, ordered list of checks.
///
/// Order only affects log readability; checks are independent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckRegistry {
    checks: Vec<CheckKind>,
}

impl Default for CheckRegistry {
    fn default() -> Self {
        Self {
            checks: CheckKind::ALL.to_vec(),
        }
    }
}

impl CheckRegistry {
    /// Keeps only the given checks, in default registry order, without duplicates.
    ///
    /// An empty selection yields the full registry.
    #[must_use]
    pub fn only(selected: &[CheckKind]) -> Self {
        if selected.is_empty() {
            return Self::default();
        }

        Self {
            checks: CheckKind::ALL
                .into_iter()
                .filter(|kind| selected.contains(kind))
                .collect(),
        }
    }

    /// Returns the checks in run order.
    #[must_use]
    pub fn checks(&self) -> &[CheckKind] {
        &self.checks
    }

    /// Number of checks per repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns true if no checks are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_has_all_checks_in_order() {
        let registry = CheckRegistry::default();
        assert_eq!(
            registry.checks(),
            &[
                CheckKind::SecurityPolicy,
                CheckKind::Dependabot,
                CheckKind::CodeScanning,
                CheckKind::SecurityAdvisories,
                CheckKind::SecurityMd,
            ]
        );
    }

    #[test]
    fn only_keeps_registry_order_and_dedups() {
        let registry = CheckRegistry::only(&[
            CheckKind::SecurityMd,
            CheckKind::Dependabot,
            CheckKind::SecurityMd,
        ]);
        assert_eq!(
            registry.checks(),
            &[CheckKind::Dependabot, CheckKind::SecurityMd]
        );
    }

    #[test]
    fn empty_selection_is_full_registry() {
        assert_eq!(CheckRegistry::only(&[]), CheckRegistry::default());
        assert_eq!(CheckRegistry::default().len(), 5);
    }
}
