use famtrip_core::{entities::Id, gateways::Error as GatewayError, usecases::Error as BusinessError};
use thiserror::Error;

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> AppError {
        AppError::Business(BusinessError::Gateway(err))
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Business(#[from] BusinessError),
    #[error("The route {route_id} has been created, but only {stored} of {total} waypoints could be stored")]
    IncompleteRoute {
        route_id: Id,
        stored: usize,
        total: usize,
    },
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::Business(BusinessError::Unauthorized)
                | Self::Business(BusinessError::Gateway(GatewayError::Unauthorized))
        )
    }
}
