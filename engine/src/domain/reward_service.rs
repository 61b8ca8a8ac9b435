use chrono::Utc;
use log::info;

use crate::domain::economy;
use crate::domain::errors::DomainError;
use crate::storage::{ChildStore, MemoryStore, RewardStore};
use shared::{
    CreateRewardRequest, RedeemRewardResponse, Reward, RewardListResponse, RewardResponse,
    UpdateRewardRequest,
};

/// Service for managing the reward catalog and redemptions
#[derive(Clone)]
pub struct RewardService {
    rewards: RewardStore,
    children: ChildStore,
}

impl RewardService {
    /// Create a new RewardService
    pub fn new(store: MemoryStore) -> Self {
        Self {
            rewards: RewardStore::new(store.clone()),
            children: ChildStore::new(store),
        }
    }

    /// Create a new reward
    pub fn create_reward(
        &self,
        request: CreateRewardRequest,
    ) -> Result<RewardResponse, DomainError> {
        info!("Creating reward: title={}", request.title);

        self.validate_title(&request.title)?;
        self.validate_cost(request.points_cost)?;

        let reward = Reward {
            id: Reward::generate_id(Utc::now().timestamp_millis() as u64),
            title: request.title.trim().to_string(),
            description: request.description,
            points_cost: request.points_cost,
            icon: request.icon,
            category: request.category,
        };

        self.rewards.insert(reward.clone());

        info!("Created reward: {} with ID: {}", reward.title, reward.id);

        Ok(RewardResponse {
            reward,
            success_message: "Reward created successfully".to_string(),
        })
    }

    /// List all rewards in creation order
    pub fn list_rewards(&self) -> RewardListResponse {
        let rewards = self.rewards.list();

        info!("Found {} rewards", rewards.len());

        RewardListResponse { rewards }
    }

    /// Update an existing reward
    pub fn update_reward(
        &self,
        reward_id: &str,
        request: UpdateRewardRequest,
    ) -> Result<RewardResponse, DomainError> {
        info!("Updating reward: {}", reward_id);

        let mut reward = self
            .rewards
            .get(reward_id)
            .ok_or_else(|| DomainError::not_found("Reward", reward_id))?;

        if let Some(ref title) = request.title {
            self.validate_title(title)?;
        }
        if let Some(points_cost) = request.points_cost {
            self.validate_cost(points_cost)?;
        }

        if let Some(title) = request.title {
            reward.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            reward.description = description;
        }
        if let Some(points_cost) = request.points_cost {
            reward.points_cost = points_cost;
        }
        if let Some(icon) = request.icon {
            reward.icon = icon;
        }
        if let Some(category) = request.category {
            reward.category = category;
        }

        self.rewards.update(&reward);

        Ok(RewardResponse {
            reward,
            success_message: "Reward updated successfully".to_string(),
        })
    }

    /// Delete a reward
    pub fn delete_reward(&self, reward_id: &str) -> Result<(), DomainError> {
        info!("Deleting reward: {}", reward_id);

        if !self.rewards.delete(reward_id) {
            return Err(DomainError::not_found("Reward", reward_id));
        }

        Ok(())
    }

    /// Redeem a reward for a child, deducting its cost from their points.
    ///
    /// The reward stays in the catalog and the money ledger records nothing:
    /// redemption moves points, not money.
    pub fn redeem_reward(
        &self,
        child_id: &str,
        reward_id: &str,
    ) -> Result<RedeemRewardResponse, DomainError> {
        info!("Redeeming reward {} for child {}", reward_id, child_id);

        let child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        let reward = self
            .rewards
            .get(reward_id)
            .ok_or_else(|| DomainError::not_found("Reward", reward_id))?;

        let updated = economy::redeem_reward(&child, &reward)?;

        self.children.update(&updated);

        info!(
            "Redeemed {} for {}: -{} points",
            reward.title, updated.name, reward.points_cost
        );

        Ok(RedeemRewardResponse {
            child: updated,
            success_message: format!("🎁 Reward redeemed: {}!", reward.title),
            reward,
        })
    }

    fn validate_title(&self, title: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::invalid("Reward title cannot be empty"));
        }
        if title.len() > 100 {
            return Err(DomainError::invalid(
                "Reward title cannot exceed 100 characters",
            ));
        }
        Ok(())
    }

    fn validate_cost(&self, points_cost: u32) -> Result<(), DomainError> {
        if points_cost == 0 {
            return Err(DomainError::invalid(
                "Reward cost must be greater than zero",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::child_service::ChildService;
    use shared::{AllowanceFrequency, AllowanceSettings, CreateChildRequest};

    fn setup_test() -> (RewardService, ChildService, MemoryStore) {
        let store = MemoryStore::new();
        (
            RewardService::new(store.clone()),
            ChildService::new(store.clone()),
            store,
        )
    }

    fn create_child(children: &ChildService) -> String {
        children
            .create_child(CreateChildRequest {
                name: "Ana".to_string(),
                age: 8,
                avatar: "👧".to_string(),
                color: "#FF6B9D".to_string(),
                allowance_settings: AllowanceSettings {
                    frequency: AllowanceFrequency::Weekly,
                    amount: 20.0,
                    day_of_week: Some(0),
                    day_of_month: None,
                    points_to_money_rate: 10.0,
                },
            })
            .expect("Failed to create child")
            .child
            .id
    }

    fn reward_request(cost: u32) -> CreateRewardRequest {
        CreateRewardRequest {
            title: "1 hour of video games".to_string(),
            description: "Extra play time".to_string(),
            points_cost: cost,
            icon: "🎮".to_string(),
            category: "leisure".to_string(),
        }
    }

    #[test]
    fn test_create_and_list_rewards() {
        let (service, _children, _store) = setup_test();

        let response = service
            .create_reward(reward_request(30))
            .expect("Failed to create reward");
        assert_eq!(response.reward.points_cost, 30);

        let rewards = service.list_rewards().rewards;
        assert_eq!(rewards.len(), 1);
        assert_eq!(rewards[0].title, "1 hour of video games");
    }

    #[test]
    fn test_create_reward_validation() {
        let (service, _children, _store) = setup_test();

        let mut request = reward_request(30);
        request.title = "".to_string();
        assert!(matches!(
            service.create_reward(request),
            Err(DomainError::InvalidConfiguration(_))
        ));

        let request = reward_request(0);
        assert!(matches!(
            service.create_reward(request),
            Err(DomainError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_update_and_delete_reward() {
        let (service, _children, _store) = setup_test();

        let reward_id = service
            .create_reward(reward_request(30))
            .expect("Failed to create reward")
            .reward
            .id;

        let response = service
            .update_reward(
                &reward_id,
                UpdateRewardRequest {
                    title: None,
                    description: None,
                    points_cost: Some(45),
                    icon: None,
                    category: None,
                },
            )
            .expect("Failed to update reward");
        assert_eq!(response.reward.points_cost, 45);

        service.delete_reward(&reward_id).expect("Failed to delete");
        assert!(matches!(
            service.delete_reward(&reward_id),
            Err(DomainError::NotFound { .. })
        ));
    }

    #[test]
    fn test_redeem_reward_deducts_points_only() {
        let (service, children, store) = setup_test();
        let child_id = create_child(&children);

        // Seed a points balance directly through the catalog store
        let mut child = children.get_child(&child_id).expect("Child should exist");
        child.points = 100;
        child.allowance = 12.5;
        ChildStore::new(store).update(&child);

        let reward_id = service
            .create_reward(reward_request(30))
            .expect("Failed to create reward")
            .reward
            .id;

        let response = service
            .redeem_reward(&child_id, &reward_id)
            .expect("Failed to redeem");

        assert_eq!(response.child.points, 70);
        assert_eq!(response.child.allowance, 12.5);
        assert_eq!(response.reward.points_cost, 30);

        // The reward survives redemption
        assert_eq!(service.list_rewards().rewards.len(), 1);
    }

    #[test]
    fn test_redeem_reward_insufficient_points() {
        let (service, children, _store) = setup_test();
        let child_id = create_child(&children);

        let reward_id = service
            .create_reward(reward_request(30))
            .expect("Failed to create reward")
            .reward
            .id;

        let err = service.redeem_reward(&child_id, &reward_id).unwrap_err();
        assert_eq!(
            err,
            DomainError::InsufficientPoints {
                required: 30,
                available: 0
            }
        );
    }
}
