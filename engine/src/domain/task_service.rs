use chrono::Utc;
use log::{info, warn};

use crate::domain::economy;
use crate::domain::errors::DomainError;
use crate::storage::{ChildStore, MemoryStore, TaskStore};
use shared::{CompleteTaskResponse, CreateTaskRequest, Task, TaskListResponse, TaskResponse};

/// Service for managing tasks and the completion transition
#[derive(Clone)]
pub struct TaskService {
    tasks: TaskStore,
    children: ChildStore,
}

impl TaskService {
    /// Create a new TaskService
    pub fn new(store: MemoryStore) -> Self {
        Self {
            tasks: TaskStore::new(store.clone()),
            children: ChildStore::new(store),
        }
    }

    /// Create a new task for a child
    pub fn create_task(&self, request: CreateTaskRequest) -> Result<TaskResponse, DomainError> {
        info!(
            "Creating task: title={}, child={}",
            request.title, request.child_id
        );

        self.validate_create_request(&request)?;

        if !self.children.contains(&request.child_id) {
            return Err(DomainError::not_found("Child", &request.child_id));
        }

        let now = Utc::now();

        let task = Task {
            id: Task::generate_id(now.timestamp_millis() as u64),
            child_id: request.child_id,
            title: request.title.trim().to_string(),
            description: request.description,
            category: request.category,
            points: request.points,
            frequency: request.frequency,
            completed: false,
            completed_date: None,
            due_date: request.due_date,
        };

        self.tasks.insert(task.clone());

        info!("Created task: {} with ID: {}", task.title, task.id);

        Ok(TaskResponse {
            task,
            success_message: "Task created successfully".to_string(),
        })
    }

    /// List a child's tasks in creation order
    pub fn list_tasks(&self, child_id: &str) -> Result<TaskListResponse, DomainError> {
        if !self.children.contains(child_id) {
            return Err(DomainError::not_found("Child", child_id));
        }

        let tasks = self.tasks.list_for(child_id);

        info!("Found {} tasks for child {}", tasks.len(), child_id);

        Ok(TaskListResponse { tasks })
    }

    /// Number of tasks the child has completed so far
    pub fn completed_count(&self, child_id: &str) -> Result<u32, DomainError> {
        if !self.children.contains(child_id) {
            return Err(DomainError::not_found("Child", child_id));
        }

        Ok(self.tasks.completed_count_for(child_id))
    }

    /// Complete (approve) a task, awarding its points to the owning child.
    ///
    /// The transition is one-way. Completing an already-completed task is a
    /// reported no-op: the response carries the unchanged snapshots.
    pub fn complete_task(&self, task_id: &str) -> Result<CompleteTaskResponse, DomainError> {
        info!("Completing task: {}", task_id);

        let task = self
            .tasks
            .get(task_id)
            .ok_or_else(|| DomainError::not_found("Task", task_id))?;

        let child = self
            .children
            .get(&task.child_id)
            .ok_or_else(|| DomainError::not_found("Child", &task.child_id))?;

        let Some(outcome) = economy::apply_task_completion(&child, &task, Utc::now()) else {
            warn!("Task already completed: {}", task_id);
            return Ok(CompleteTaskResponse {
                child,
                task,
                leveled_up: false,
                success_message: "Task was already completed".to_string(),
            });
        };

        self.tasks.update(&outcome.task);
        self.children.update(&outcome.child);

        let success_message = if outcome.leveled_up {
            format!(
                "🎉 {} reached level {}!",
                outcome.child.name, outcome.child.level
            )
        } else {
            format!("✨ +{} points!", outcome.task.points)
        };

        info!(
            "Completed task {} for {}: +{} points, level {}",
            task_id, outcome.child.name, outcome.task.points, outcome.child.level
        );

        Ok(CompleteTaskResponse {
            child: outcome.child,
            task: outcome.task,
            leveled_up: outcome.leveled_up,
            success_message,
        })
    }

    /// Validate create task request
    fn validate_create_request(&self, request: &CreateTaskRequest) -> Result<(), DomainError> {
        if request.title.trim().is_empty() {
            return Err(DomainError::invalid("Task title cannot be empty"));
        }

        if request.title.len() > 100 {
            return Err(DomainError::invalid(
                "Task title cannot exceed 100 characters",
            ));
        }

        if request.points == 0 {
            return Err(DomainError::invalid(
                "Task points must be greater than zero",
            ));
        }

        Ok(())
    }
}
