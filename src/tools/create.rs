/// Operation for adding new habits
///
/// This module implements the "add habit" menu entry.

use serde::Serialize;
use crate::domain::Registry;
use crate::tools::ToolError;

/// Response from adding a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    /// Normalized name the habit is stored under
    pub name: String,
    /// False when the habit already existed
    pub created: bool,
    pub message: String,
}

/// Add a habit to the registry
///
/// Adding a name that already exists keeps the existing habit untouched.
pub fn create_habit(registry: &mut Registry, raw_name: &str) -> Result<CreateHabitResponse, ToolError> {
    let before = registry.len();
    let name = registry.register(raw_name)?;
    let created = registry.len() > before;

    if created {
        tracing::info!("Added habit: {}", name);
    }

    Ok(CreateHabitResponse {
        message: if created {
            format!("✅ Added: {}", name)
        } else {
            format!("{} is already tracked", name)
        },
        name: name.to_string(),
        created,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn test_create_habit() {
        let mut registry = Registry::new();
        let response = create_habit(&mut registry, "read").unwrap();

        assert!(response.created);
        assert_eq!(response.name, "Read");
        assert!(response.message.contains("Added: Read"));
    }

    #[test]
    fn test_create_existing_habit() {
        let mut registry = Registry::new();
        create_habit(&mut registry, "read").unwrap();
        let response = create_habit(&mut registry, "Read").unwrap();

        assert!(!response.created);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_create_blank_name() {
        let mut registry = Registry::new();
        let result = create_habit(&mut registry, "  ");

        assert!(matches!(result, Err(ToolError::Domain(DomainError::InvalidHabitName(_)))));
        assert!(registry.is_empty());
    }
}
