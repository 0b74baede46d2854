use std::sync::Arc;

use async_trait::async_trait;
use wall_updater_sdk::{
    CallContextAccessor, UpdateWallArgs, WallUpdate, WallUpdateAck, WallUpdaterClientV1,
    WallUpdaterError,
};

use crate::domain::helpdocs::HelpDocsSearch;
use crate::domain::ports::WallApiTransport;
use crate::domain::service::WallUpdateService;

pub struct LocalClient<T: WallApiTransport + 'static> {
    service: Arc<WallUpdateService<T>>,
    helpdocs: Arc<dyn HelpDocsSearch>,
}

impl<T: WallApiTransport + 'static> LocalClient<T> {
    #[must_use]
    pub fn new(service: Arc<WallUpdateService<T>>, helpdocs: Arc<dyn HelpDocsSearch>) -> Self {
        Self { service, helpdocs }
    }
}

#[async_trait]
impl<T: WallApiTransport + 'static> WallUpdaterClientV1 for LocalClient<T> {
    async fn update_wall(
        &self,
        ctx: &dyn CallContextAccessor,
        wall_id: i64,
        update: WallUpdate,
    ) -> Result<WallUpdateAck, WallUpdaterError> {
        self.service
            .update_wall(ctx, wall_id, &update)
            .await
            .map_err(Into::into)
    }

    async fn update_wall_from_args(
        &self,
        ctx: &dyn CallContextAccessor,
        args: serde_json::Value,
    ) -> Result<WallUpdateAck, WallUpdaterError> {
        let args = UpdateWallArgs::from_value(args)?;
        self.update_wall(ctx, args.wall_id, args.wall_data).await
    }

    async fn search_helpdocs(&self, query: &str) -> String {
        self.helpdocs.search(query).await
    }
}
