//! Project type to handler lookup

use crate::handler::{ProjectHandler, Services};
use crate::handlers::{NextJsProjectHandler, TypescriptCliProjectHandler};
use crate::project::ProjectType;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Owned map of handlers, one per project type
#[derive(Default, Clone)]
pub struct HandlerRegistry {
    handlers: HashMap<ProjectType, Arc<dyn ProjectHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry populated with every built-in handler
    pub fn with_builtin_handlers(services: &Services) -> Self {
        let mut registry = Self::new();
        registry.initialize(services);
        registry
    }

    /// Register the built-in handlers. Calling it again replaces them.
    pub fn initialize(&mut self, services: &Services) {
        self.register_handler(Arc::new(NextJsProjectHandler::new(services.clone())));
        self.register_handler(Arc::new(TypescriptCliProjectHandler::new(services.clone())));
    }

    /// Register `handler` under its own project type; the last registration wins
    pub fn register_handler(&mut self, handler: Arc<dyn ProjectHandler>) {
        let project_type = handler.project_type();
        if self.handlers.insert(project_type, handler).is_some() {
            debug!(project_type = %project_type, "Replaced project handler");
        }
    }

    pub fn get_handler(&self, project_type: ProjectType) -> Option<Arc<dyn ProjectHandler>> {
        self.handlers.get(&project_type).cloned()
    }

    /// Registered project types, in menu order
    pub fn project_types(&self) -> Vec<ProjectType> {
        ProjectType::ALL
            .into_iter()
            .filter(|t| self.handlers.contains_key(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{services, RecordingRunner, ScriptedPrompts, SpyHandler};
    use std::path::Path;

    fn test_services() -> Services {
        services(
            Arc::new(RecordingRunner::new()),
            Arc::new(ScriptedPrompts::default()),
        )
    }

    #[test]
    fn test_every_project_type_has_a_handler() {
        let registry = HandlerRegistry::with_builtin_handlers(&test_services());

        for project_type in ProjectType::ALL {
            let handler = registry.get_handler(project_type).unwrap();
            assert_eq!(handler.project_type(), project_type);
        }
        assert_eq!(registry.project_types(), ProjectType::ALL.to_vec());
    }

    #[test]
    fn test_empty_registry_has_no_handlers() {
        let registry = HandlerRegistry::new();
        assert!(registry.get_handler(ProjectType::WebApp).is_none());
        assert!(registry.project_types().is_empty());
    }

    #[tokio::test]
    async fn test_register_then_get_returns_same_handler() {
        let mut registry = HandlerRegistry::new();
        let spy = SpyHandler::new(ProjectType::CommandLineTool, true);
        registry.register_handler(spy.clone());

        let found = registry.get_handler(ProjectType::CommandLineTool).unwrap();
        assert!(found.create(Path::new("."), "demo").await.unwrap());
        assert_eq!(spy.create_count(), 1);
    }

    #[tokio::test]
    async fn test_later_registration_replaces_earlier() {
        let mut registry = HandlerRegistry::with_builtin_handlers(&test_services());
        let spy = SpyHandler::new(ProjectType::WebApp, false);
        registry.register_handler(spy.clone());

        let found = registry.get_handler(ProjectType::WebApp).unwrap();
        assert!(!found.create(Path::new("."), "demo").await.unwrap());
        assert_eq!(spy.create_count(), 1);
        assert_eq!(registry.project_types().len(), 2);
    }

    #[test]
    fn test_initialize_twice_keeps_one_handler_per_type() {
        let services = test_services();
        let mut registry = HandlerRegistry::new();
        registry.initialize(&services);
        registry.initialize(&services);
        assert_eq!(registry.project_types(), ProjectType::ALL.to_vec());
    }
}
