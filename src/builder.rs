use std::time::Duration;

use crate::config::CatalogConfig;
use crate::error::TransportError;
use crate::pipeline::RecipeService;
use crate::transport::{HttpTransport, Transport};

/// Builder for configuring a [`RecipeService`]
#[derive(Default)]
pub struct RecipeServiceBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    default_category: Option<String>,
    transport: Option<Box<dyn Transport>>,
}

impl RecipeServiceBuilder {
    /// Start from a loaded configuration
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::{CatalogConfig, RecipeServiceBuilder};
    ///
    /// let builder = RecipeServiceBuilder::from_config(&CatalogConfig::default());
    /// ```
    pub fn from_config(config: &CatalogConfig) -> Self {
        RecipeServiceBuilder {
            base_url: Some(config.base_url.clone()),
            timeout: Some(Duration::from_secs(config.timeout)),
            user_agent: Some(config.user_agent.clone()),
            default_category: Some(config.default_category.clone()),
            transport: None,
        }
    }

    /// Point the service at another catalog origin, e.g. a local mock server
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::RecipeService;
    ///
    /// let builder = RecipeService::builder()
    ///     .base_url("http://127.0.0.1:8080/api/json/v1/1");
    /// ```
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set a timeout for HTTP requests
    ///
    /// Ignored when a custom transport is supplied.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Set the user agent sent with HTTP requests
    ///
    /// Ignored when a custom transport is supplied.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Set the category listed by [`RecipeService::fetch_desserts`]
    pub fn default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = Some(category.into());
        self
    }

    /// Use a custom transport instead of the default HTTP client
    pub fn transport(mut self, transport: impl Transport + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Build the service
    ///
    /// # Errors
    /// Returns `TransportError` if the default HTTP client cannot be created.
    ///
    /// # Example
    /// ```
    /// use recipe_catalog::RecipeService;
    /// use std::time::Duration;
    ///
    /// let service = RecipeService::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(service.default_category(), "Dessert");
    /// ```
    pub fn build(self) -> Result<RecipeService, TransportError> {
        let defaults = CatalogConfig::default();

        let transport = match self.transport {
            Some(transport) => transport,
            None => {
                let user_agent = self.user_agent.unwrap_or(defaults.user_agent);
                let timeout = self
                    .timeout
                    .unwrap_or(Duration::from_secs(defaults.timeout));
                Box::new(HttpTransport::new(Some(timeout), &user_agent)?)
            }
        };

        Ok(RecipeService::new(
            transport,
            self.base_url.unwrap_or(defaults.base_url),
            self.default_category.unwrap_or(defaults.default_category),
        ))
    }
}
