use shared::Reward;

use super::memory::MemoryStore;

/// Repository for the rewards catalog
#[derive(Clone)]
pub struct RewardStore {
    store: MemoryStore,
}

impl RewardStore {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }

    pub fn insert(&self, reward: Reward) {
        self.store.write().rewards.push(reward);
    }

    pub fn get(&self, reward_id: &str) -> Option<Reward> {
        self.store
            .read()
            .rewards
            .iter()
            .find(|r| r.id == reward_id)
            .cloned()
    }

    /// All rewards in insertion order
    pub fn list(&self) -> Vec<Reward> {
        self.store.read().rewards.clone()
    }

    /// Replace the stored reward carrying the same ID.
    /// Returns false when no such reward exists.
    pub fn update(&self, reward: &Reward) -> bool {
        let mut inner = self.store.write();
        match inner.rewards.iter_mut().find(|r| r.id == reward.id) {
            Some(slot) => {
                *slot = reward.clone();
                true
            }
            None => false,
        }
    }

    /// Remove a reward by ID. Returns false when no such reward exists.
    pub fn delete(&self, reward_id: &str) -> bool {
        let mut inner = self.store.write();
        let before = inner.rewards.len();
        inner.rewards.retain(|r| r.id != reward_id);
        inner.rewards.len() < before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_reward(id: &str, title: &str) -> Reward {
        Reward {
            id: id.to_string(),
            title: title.to_string(),
            description: "Extra play time".to_string(),
            points_cost: 30,
            icon: "🎮".to_string(),
            category: "leisure".to_string(),
        }
    }

    #[test]
    fn test_crud_round_trip() {
        let store = RewardStore::new(MemoryStore::new());

        store.insert(test_reward("reward::1", "1 hour of video games"));
        store.insert(test_reward("reward::2", "Special dessert"));

        let rewards = store.list();
        assert_eq!(rewards.len(), 2);
        assert_eq!(rewards[0].title, "1 hour of video games");

        let mut updated = test_reward("reward::1", "2 hours of video games");
        updated.points_cost = 60;
        assert!(store.update(&updated));
        assert_eq!(store.get("reward::1").unwrap().points_cost, 60);

        assert!(store.delete("reward::2"));
        assert!(store.get("reward::2").is_none());
        assert!(!store.delete("reward::2"));
    }
}
