//! Plan history: the last `MAX_SAVED_PLANS` saved plans, newest first.
//!
//! In-memory only. Saving an 11th plan drops the oldest one.

pub mod handlers;

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::models::plan::FitnessPlan;
use crate::models::profile::UserProfile;

pub const MAX_SAVED_PLANS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPlan {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub user_data: UserProfile,
    pub plan: FitnessPlan,
}

/// Cheap-to-clone handle; all clones share the same list.
#[derive(Clone, Default)]
pub struct PlanHistory {
    plans: Arc<RwLock<VecDeque<SavedPlan>>>,
}

impl PlanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn save(&self, user_data: UserProfile, plan: FitnessPlan) -> SavedPlan {
        let saved = SavedPlan {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            user_data,
            plan,
        };

        let mut plans = self.plans.write().await;
        plans.push_front(saved.clone());
        while plans.len() > MAX_SAVED_PLANS {
            if let Some(dropped) = plans.pop_back() {
                debug!("Plan history full, dropped plan {}", dropped.id);
            }
        }

        saved
    }

    pub async fn list(&self) -> Vec<SavedPlan> {
        self.plans.read().await.iter().cloned().collect()
    }

    pub async fn get(&self, id: Uuid) -> Option<SavedPlan> {
        self.plans.read().await.iter().find(|p| p.id == id).cloned()
    }

    /// Returns whether a plan was removed.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut plans = self.plans.write().await;
        let before = plans.len();
        plans.retain(|p| p.id != id);
        plans.len() != before
    }

    pub async fn len(&self) -> usize {
        self.plans.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::tests::sample_profile;
    use crate::planner::selector::generate_structured_plan;

    async fn save_named(history: &PlanHistory, name: &str) -> SavedPlan {
        let mut profile = sample_profile();
        profile.name = name.to_string();
        let plan = generate_structured_plan(&profile);
        history.save(profile, plan).await
    }

    #[tokio::test]
    async fn test_newest_first() {
        let history = PlanHistory::new();
        save_named(&history, "first").await;
        save_named(&history, "second").await;

        let names: Vec<_> = history
            .list()
            .await
            .into_iter()
            .map(|p| p.user_data.name)
            .collect();
        assert_eq!(names, vec!["second", "first"]);
    }

    #[tokio::test]
    async fn test_capped_at_ten_dropping_oldest() {
        let history = PlanHistory::new();
        let oldest = save_named(&history, "plan-0").await;
        for i in 1..12 {
            save_named(&history, &format!("plan-{i}")).await;
        }

        assert_eq!(history.len().await, MAX_SAVED_PLANS);
        assert!(history.get(oldest.id).await.is_none());
        let list = history.list().await;
        assert_eq!(list[0].user_data.name, "plan-11");
        assert_eq!(list[9].user_data.name, "plan-2");
    }

    #[tokio::test]
    async fn test_delete_only_matching() {
        let history = PlanHistory::new();
        let keep = save_named(&history, "keep").await;
        let drop = save_named(&history, "drop").await;

        assert!(history.delete(drop.id).await);
        assert!(!history.delete(drop.id).await, "second delete is a no-op");
        assert_eq!(history.len().await, 1);
        assert!(history.get(keep.id).await.is_some());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let history = PlanHistory::new();
        let other = history.clone();
        save_named(&history, "shared").await;
        assert_eq!(other.len().await, 1);
    }
}
