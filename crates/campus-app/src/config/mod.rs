use std::sync::Arc;

use salvo::{Depot, async_trait};

pub use campus_core::config::*;
use campus_core::error::CoreError;

use crate::error::AppResult;

/// Injects one shared copy of the loaded [`Settings`] into every request's depot.
pub struct ConfigHandler {
    settings: Arc<Settings>,
}

impl ConfigHandler {
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            settings: Arc::new(settings.clone()),
        }
    }
}

#[async_trait]
impl salvo::Handler for ConfigHandler {
    async fn handle(
        &self,
        _req: &mut salvo::Request,
        depot: &mut Depot,
        _res: &mut salvo::Response,
        _ctrl: &mut salvo::FlowCtrl,
    ) {
        depot.inject(Arc::clone(&self.settings));
    }
}

/// ## Summary
/// Retrieves the settings injected by [`ConfigHandler`].
///
/// ## Errors
/// Returns an error if no settings were injected.
pub fn get_config_from_depot(depot: &Depot) -> AppResult<Arc<Settings>> {
    depot
        .obtain::<Arc<Settings>>()
        .cloned()
        .map_err(|_err| CoreError::InvariantViolation("Configuration not found in depot").into())
}

/// ## Summary
/// The calendar section of the injected settings.
///
/// ## Errors
/// Returns an error if no settings were injected.
pub fn get_schedule_config_from_depot(depot: &Depot) -> AppResult<ScheduleConfig> {
    get_config_from_depot(depot).map(|settings| settings.schedule.clone())
}
