use serde::{Deserialize, Serialize};

// Plan class attached to a request (from the X-User-Type header)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlanClass {
    Free,
    Pro,
}

impl PlanClass {
    // Unknown plan strings fall back to the most restrictive tier
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "pro" => PlanClass::Pro,
            _ => PlanClass::Free,
        }
    }
}

// Quota limits for one plan tier; None means unbounded
#[derive(Debug, Clone, Copy)]
pub struct PlanLimits {
    pub max_total: Option<u32>,
    pub max_active: Option<u32>,
}

impl PlanLimits {
    pub fn unbounded() -> Self {
        Self {
            max_total: None,
            max_active: None,
        }
    }
}

// Lookup table from plan class to limits. Pure and total: every
// plan class resolves to a row, nothing here can fail.
#[derive(Debug, Clone, Copy)]
pub struct PlanPolicy {
    pub free: PlanLimits,
    pub pro: PlanLimits,
}

impl PlanPolicy {
    pub fn limits_for(&self, plan: PlanClass) -> PlanLimits {
        match plan {
            PlanClass::Free => self.free,
            PlanClass::Pro => self.pro,
        }
    }
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            free: PlanLimits {
                max_total: Some(20),
                max_active: Some(5),
            },
            pro: PlanLimits::unbounded(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_plans() {
        assert_eq!(PlanClass::parse("free"), PlanClass::Free);
        assert_eq!(PlanClass::parse("pro"), PlanClass::Pro);
        assert_eq!(PlanClass::parse(" PRO "), PlanClass::Pro);
    }

    #[test]
    fn parse_unknown_plan_fails_closed() {
        assert_eq!(PlanClass::parse("enterprise"), PlanClass::Free);
        assert_eq!(PlanClass::parse(""), PlanClass::Free);
    }

    #[test]
    fn default_policy_limits() {
        let policy = PlanPolicy::default();
        let free = policy.limits_for(PlanClass::Free);
        assert_eq!(free.max_total, Some(20));
        assert_eq!(free.max_active, Some(5));

        let pro = policy.limits_for(PlanClass::Pro);
        assert_eq!(pro.max_total, None);
        assert_eq!(pro.max_active, None);
    }
}
