use chrono::Utc;
use log::{info, warn};

use crate::domain::allowance_service::validate_settings;
use crate::domain::errors::DomainError;
use crate::storage::{ChildStore, Ledger, MemoryStore, TaskStore};
use shared::{
    Child, ChildListResponse, ChildResponse, CreateChildRequest, DeleteChildResponse,
    UpdateChildRequest,
};

/// Service for managing children in the chore tracking system
#[derive(Clone)]
pub struct ChildService {
    children: ChildStore,
    tasks: TaskStore,
    ledger: Ledger,
}

impl ChildService {
    /// Create a new ChildService
    pub fn new(store: MemoryStore) -> Self {
        Self {
            children: ChildStore::new(store.clone()),
            tasks: TaskStore::new(store.clone()),
            ledger: Ledger::new(store),
        }
    }

    /// Create a new child. New children start at level 1 with empty balances.
    pub fn create_child(&self, request: CreateChildRequest) -> Result<ChildResponse, DomainError> {
        info!("Creating child: name={}, age={}", request.name, request.age);

        self.validate_create_request(&request)?;
        validate_settings(&request.allowance_settings)?;

        let now = Utc::now();
        let timestamp_rfc3339 = now.to_rfc3339();

        let child = Child {
            id: Child::generate_id(now.timestamp_millis() as u64),
            name: request.name.trim().to_string(),
            age: request.age,
            avatar: request.avatar,
            color: request.color,
            level: 1,
            xp: 0,
            points: 0,
            allowance: 0.0,
            allowance_settings: request.allowance_settings,
            created_at: timestamp_rfc3339.clone(),
            updated_at: timestamp_rfc3339,
        };

        self.children.insert(child.clone());

        info!("Created child: {} with ID: {}", child.name, child.id);

        Ok(ChildResponse {
            child,
            success_message: "Child created successfully".to_string(),
        })
    }

    /// Get a child by ID
    pub fn get_child(&self, child_id: &str) -> Option<Child> {
        let child = self.children.get(child_id);

        if child.is_none() {
            warn!("Child not found: {}", child_id);
        }

        child
    }

    /// List all children, ordered by name
    pub fn list_children(&self) -> ChildListResponse {
        let children = self.children.list();

        info!("Found {} children", children.len());

        ChildListResponse { children }
    }

    /// Update an existing child's display attributes
    pub fn update_child(
        &self,
        child_id: &str,
        request: UpdateChildRequest,
    ) -> Result<ChildResponse, DomainError> {
        info!("Updating child: {}", child_id);

        let mut child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        self.validate_update_request(&request)?;

        if let Some(name) = request.name {
            child.name = name.trim().to_string();
        }
        if let Some(age) = request.age {
            child.age = age;
        }
        if let Some(avatar) = request.avatar {
            child.avatar = avatar;
        }
        if let Some(color) = request.color {
            child.color = color;
        }

        child.updated_at = Utc::now().to_rfc3339();

        self.children.update(&child);

        info!("Updated child: {} with ID: {}", child.name, child.id);

        Ok(ChildResponse {
            child,
            success_message: "Child updated successfully".to_string(),
        })
    }

    /// Delete a child together with every task and ledger entry that
    /// references it. One logical operation from the caller's perspective.
    pub fn delete_child(&self, child_id: &str) -> Result<DeleteChildResponse, DomainError> {
        info!("Deleting child: {}", child_id);

        let child = self
            .children
            .get(child_id)
            .ok_or_else(|| DomainError::not_found("Child", child_id))?;

        let removed_tasks = self.tasks.delete_for_child(child_id);
        let removed_transactions = self.ledger.purge_for(child_id);
        self.children.delete(child_id);

        info!(
            "Deleted child {} with {} tasks and {} transactions",
            child.name, removed_tasks, removed_transactions
        );

        Ok(DeleteChildResponse {
            removed_tasks,
            removed_transactions,
            success_message: format!("{} was removed from the family", child.name),
        })
    }

    /// Validate create child request
    fn validate_create_request(&self, request: &CreateChildRequest) -> Result<(), DomainError> {
        self.validate_name(&request.name)?;
        self.validate_age(request.age)
    }

    /// Validate update child request
    fn validate_update_request(&self, request: &UpdateChildRequest) -> Result<(), DomainError> {
        if let Some(ref name) = request.name {
            self.validate_name(name)?;
        }
        if let Some(age) = request.age {
            self.validate_age(age)?;
        }
        Ok(())
    }

    fn validate_name(&self, name: &str) -> Result<(), DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::invalid("Child name cannot be empty"));
        }
        if name.len() > 100 {
            return Err(DomainError::invalid(
                "Child name cannot exceed 100 characters",
            ));
        }
        Ok(())
    }

    fn validate_age(&self, age: u8) -> Result<(), DomainError> {
        if age == 0 || age > 21 {
            return Err(DomainError::invalid("Age must be between 1 and 21"));
        }
        Ok(())
    }
}
