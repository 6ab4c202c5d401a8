use crate::dto::HealthRes;

/// Simple health service used by the REST API
///
/// This service provides a standardised way to check the health status of drugcheck.
/// It reports process liveness only; openFDA is not contacted.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Creates a new instance of HealthService.
    pub fn new() -> Self {
        Self
    }

    /// Check health without creating an instance.
    ///
    /// # Returns
    /// A `HealthRes` indicating the service is healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "drugcheck is alive".into(),
        }
    }
}
