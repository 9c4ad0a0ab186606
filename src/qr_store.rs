use std::collections::HashMap;
use std::sync::RwLock;

use chrono::Utc;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{CreateQrCode, QrCode, UpdateQrCode};
use crate::plan::{PlanClass, PlanLimits, PlanPolicy};

// In-memory QR code store. One lock guards the whole map because the
// quota checks need a consistent count across every record: the check
// and the insert (or the active flip) happen under a single write-lock
// scope, so the collection never transiently exceeds a plan limit.
//
// Quota counts are derived by scanning the live map at decision time
// rather than kept as running counters, so deletes and updates can never
// leave a counter drifting.
#[derive(Debug)]
pub struct QrStore {
    codes: RwLock<HashMap<String, QrCode>>,
    policy: PlanPolicy,
}

impl QrStore {
    pub fn new(policy: PlanPolicy) -> Self {
        Self {
            codes: RwLock::new(HashMap::new()),
            policy,
        }
    }

    pub fn create(&self, input: CreateQrCode, plan: PlanClass) -> Result<QrCode, StoreError> {
        if input.url.trim().is_empty() {
            return Err(StoreError::Validation("url_required".into()));
        }

        let limits = self.policy.limits_for(plan);
        let mut codes = self.codes.write().expect("qr store lock poisoned");

        if let Some(max_total) = limits.max_total {
            if codes.len() as u32 + 1 > max_total {
                return Err(StoreError::QuotaTotalExceeded);
            }
        }
        if input.active {
            check_active_headroom(codes.values(), limits, None)?;
        }

        let code = QrCode {
            // v4 ids are never reissued, deleted ids stay retired
            id: Uuid::new_v4().to_string(),
            label: input.label,
            url: input.url,
            active: input.active,
            created_at: Utc::now(),
        };
        codes.insert(code.id.clone(), code.clone());
        Ok(code)
    }

    pub fn get(&self, id: &str) -> Result<QrCode, StoreError> {
        let codes = self.codes.read().expect("qr store lock poisoned");
        codes.get(id).cloned().ok_or(StoreError::NotFound)
    }

    // Applies only the fields present in the patch. Activating a record
    // re-checks the active quota against the other records before the
    // flip is committed; on failure the record is left as it was.
    pub fn update(
        &self,
        id: &str,
        patch: UpdateQrCode,
        plan: PlanClass,
    ) -> Result<QrCode, StoreError> {
        let limits = self.policy.limits_for(plan);
        let mut codes = self.codes.write().expect("qr store lock poisoned");

        let current = codes.get(id).ok_or(StoreError::NotFound)?;

        let activating = patch.active == Some(true) && !current.active;
        if activating {
            check_active_headroom(codes.values(), limits, Some(id))?;
        }

        let code = codes.get_mut(id).ok_or(StoreError::NotFound)?;
        if let Some(label) = patch.label {
            code.label = label;
        }
        if let Some(url) = patch.url {
            code.url = url;
        }
        if let Some(active) = patch.active {
            code.active = active;
        }
        Ok(code.clone())
    }

    pub fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut codes = self.codes.write().expect("qr store lock poisoned");
        codes.remove(id).map(|_| ()).ok_or(StoreError::NotFound)
    }

    // Snapshot of clones; ordering is whatever the map yields
    pub fn list(&self) -> Vec<QrCode> {
        let codes = self.codes.read().expect("qr store lock poisoned");
        codes.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.codes.read().expect("qr store lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Would one more active record (excluding `skip`, the record being
// updated) stay within the plan's active limit?
fn check_active_headroom<'a>(
    codes: impl Iterator<Item = &'a QrCode>,
    limits: PlanLimits,
    skip: Option<&str>,
) -> Result<(), StoreError> {
    let Some(max_active) = limits.max_active else {
        return Ok(());
    };
    let active = codes
        .filter(|c| c.active && skip != Some(c.id.as_str()))
        .count() as u32;
    if active + 1 > max_active {
        return Err(StoreError::QuotaActiveExceeded);
    }
    Ok(())
}
